//! Menu-list header generation
//!
//! Produces the array of `{symbol, app-id}` initializers backing the app
//! menu, plus the number of menu screens the entries occupy.

use super::Generator;
use crate::registry::{self, AppEntry};
use crate::template;
use crate::{CommandResult, GeneratorContext};
use async_trait::async_trait;

const TEMPLATE_PATH: &str = "src/displayapp/screens/ApplicationList.h.template";
const OUTPUT_PATH: &str = "src/displayapp/screens/ApplicationList.h";

/// Apps shown per menu screen.
const APPS_PER_SCREEN: usize = 6;

pub struct ApplicationListGenerator;

impl ApplicationListGenerator {
	/// Ten leading spaces align each initializer with the surrounding
	/// declaration in the template; the trailing eight spaces indent the
	/// template's closing brace.
	fn render_entries(entries: &[&'static AppEntry]) -> String {
		let mut lines = String::new();
		for entry in entries {
			lines.push_str(&format!(
				"          {{{}, Apps::{}}},\n",
				entry.symbol, entry.name
			));
		}
		format!("\n{}        ", lines)
	}

	fn screen_count(matched: usize) -> usize {
		matched.div_ceil(APPS_PER_SCREEN)
	}
}

#[async_trait]
impl Generator for ApplicationListGenerator {
	fn name(&self) -> &str {
		"applicationlist"
	}

	fn description(&self) -> &str {
		"Rewrites the menu-list header from the enabled-app list"
	}

	async fn execute(&self, ctx: &GeneratorContext) -> CommandResult<()> {
		let entries = registry::filter_known(&ctx.apps);
		let screens = Self::screen_count(entries.len());
		let block = Self::render_entries(&entries);

		let content = template::read_template(&ctx.path(TEMPLATE_PATH))?;
		let content = template::replace_marker(&content, "@N_SCREENS@", &screens.to_string());
		let content = template::replace_block(&content, "@APPS@", &block)?;
		template::write_output(&ctx.path(OUTPUT_PATH), &content)?;

		ctx.info(&format!("Created {} screens.", screens));
		ctx.verbose(&format!("Created: {}", OUTPUT_PATH));
		Ok(())
	}
}
