//! App-id header generation
//!
//! Produces the enumerator list naming every enabled app.

use super::Generator;
use crate::registry::{self, AppEntry};
use crate::template;
use crate::{CommandResult, GeneratorContext};
use async_trait::async_trait;

const TEMPLATE_PATH: &str = "src/displayapp/Apps.h.template";
const OUTPUT_PATH: &str = "src/displayapp/Apps.h";

pub struct AppIdsGenerator;

impl AppIdsGenerator {
	fn render_ids(entries: &[&'static AppEntry]) -> String {
		let mut lines = String::new();
		for entry in entries {
			lines.push_str(&format!("      {},\n", entry.name));
		}
		format!("\n{}", lines)
	}
}

#[async_trait]
impl Generator for AppIdsGenerator {
	fn name(&self) -> &str {
		"appids"
	}

	fn description(&self) -> &str {
		"Rewrites the app-id header from the enabled-app list"
	}

	async fn execute(&self, ctx: &GeneratorContext) -> CommandResult<()> {
		let entries = registry::filter_known(&ctx.apps);
		let block = Self::render_ids(&entries);

		let content = template::read_template(&ctx.path(TEMPLATE_PATH))?;
		let content = template::replace_block(&content, "@APPS@", &block)?;
		template::write_output(&ctx.path(OUTPUT_PATH), &content)?;

		ctx.verbose(&format!("Created: {}", OUTPUT_PATH));
		Ok(())
	}
}
