//! Build source-list generation
//!
//! Produces the fragment of the build file that lists each enabled app's
//! implementation file.

use super::Generator;
use crate::registry::{self, AppEntry};
use crate::template;
use crate::{CommandResult, GeneratorContext};
use async_trait::async_trait;

const TEMPLATE_PATH: &str = "src/CMakeLists.txt.template";
const OUTPUT_PATH: &str = "src/CMakeLists.txt";

pub struct SourceListGenerator;

impl SourceListGenerator {
	fn render_sources(entries: &[&'static AppEntry]) -> String {
		let mut lines = String::new();
		for entry in entries {
			lines.push_str(&format!(
				"        displayapp/screens/{}\n",
				entry.source_file
			));
		}
		format!("\n{}\n        ", lines)
	}
}

#[async_trait]
impl Generator for SourceListGenerator {
	fn name(&self) -> &str {
		"sourcelist"
	}

	fn description(&self) -> &str {
		"Rewrites the build file's source list from the enabled-app list"
	}

	async fn execute(&self, ctx: &GeneratorContext) -> CommandResult<()> {
		let entries = registry::filter_known(&ctx.apps);
		let block = Self::render_sources(&entries);

		let content = template::read_template(&ctx.path(TEMPLATE_PATH))?;
		let content = template::replace_block(&content, "@APPS@", &block)?;
		template::write_output(&ctx.path(OUTPUT_PATH), &content)?;

		ctx.verbose(&format!("Created: {}", OUTPUT_PATH));
		Ok(())
	}
}
