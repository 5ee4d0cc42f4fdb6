//! Includes/defines generation
//!
//! Produces the two blocks the display-app source pulls in per enabled app:
//! an include directive for the app's header and a preprocessor define
//! gating its registration code.

use super::Generator;
use crate::registry::{self, AppEntry};
use crate::template;
use crate::{CommandResult, GeneratorContext};
use async_trait::async_trait;

const TEMPLATE_PATH: &str = "src/displayapp/DisplayApp.cpp.template";
const OUTPUT_PATH: &str = "src/displayapp/DisplayApp.cpp";

pub struct DisplayAppGenerator;

impl DisplayAppGenerator {
	fn render_includes(entries: &[&'static AppEntry]) -> String {
		let mut lines = String::new();
		for entry in entries {
			lines.push_str(&format!(
				"#include \"displayapp/screens/{}\"\n",
				entry.header_file
			));
		}
		format!("\n{}\n", lines)
	}

	fn render_defines(entries: &[&'static AppEntry]) -> String {
		let mut lines = String::new();
		for entry in entries {
			lines.push_str(&format!("#define APP_{}\n", entry.name.to_uppercase()));
		}
		format!("\n{}\n\n", lines)
	}
}

#[async_trait]
impl Generator for DisplayAppGenerator {
	fn name(&self) -> &str {
		"displayapp"
	}

	fn description(&self) -> &str {
		"Rewrites the display-app includes and defines from the enabled-app list"
	}

	async fn execute(&self, ctx: &GeneratorContext) -> CommandResult<()> {
		let entries = registry::filter_known(&ctx.apps);
		let includes = Self::render_includes(&entries);
		let defines = Self::render_defines(&entries);

		let content = template::read_template(&ctx.path(TEMPLATE_PATH))?;
		let content = template::replace_block(&content, "@APP_INCLUDES@", &includes)?;
		let content = template::replace_block(&content, "@APP_DEFINES@", &defines)?;
		template::write_output(&ctx.path(OUTPUT_PATH), &content)?;

		ctx.verbose(&format!("Created: {}", OUTPUT_PATH));
		Ok(())
	}
}
