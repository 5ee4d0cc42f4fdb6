//! Code generators driven by the enabled-app list
//!
//! Each generator rewrites one output file from its template: the
//! enabled-app list is filtered against the registry, formatted into a text
//! block, and substituted for the template's markers. Generators run
//! strictly in order; the first failure aborts the run and leaves the
//! outputs written so far in place.

mod app_ids;
mod application_list;
mod display_app;
mod source_list;

pub use app_ids::AppIdsGenerator;
pub use application_list::ApplicationListGenerator;
pub use display_app::DisplayAppGenerator;
pub use source_list::SourceListGenerator;

use crate::{CommandResult, GeneratorContext};
use async_trait::async_trait;

/// A single template-rewriting step of the prebuild pipeline.
#[async_trait]
pub trait Generator: Send + Sync {
	/// Generator name used in progress output.
	fn name(&self) -> &str;

	/// One-line summary of what the generator rewrites.
	fn description(&self) -> &str;

	/// Rewrite this generator's output file from its template.
	async fn execute(&self, ctx: &GeneratorContext) -> CommandResult<()>;
}

/// All pipeline steps, in execution order.
pub fn all_generators() -> Vec<Box<dyn Generator>> {
	vec![
		Box::new(ApplicationListGenerator),
		Box::new(SourceListGenerator),
		Box::new(DisplayAppGenerator),
		Box::new(AppIdsGenerator),
	]
}

/// Run the full pipeline against `ctx`.
pub async fn run_all(ctx: &GeneratorContext) -> CommandResult<()> {
	for generator in all_generators() {
		ctx.verbose(&format!("Running {}", generator.name()));
		generator.execute(ctx).await?;
	}
	Ok(())
}
