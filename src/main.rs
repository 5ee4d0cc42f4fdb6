//! apps-prebuild
//!
//! Command-line tool regenerating the app-menu artifacts of the firmware
//! build from the enabled-app list.
//!
//! ## Usage
//!
//! ```bash
//! apps-prebuild                 # regenerate all artifacts
//! apps-prebuild generate
//! apps-prebuild apps            # show the resolved enabled-app list
//! apps-prebuild --project-root firmware/ -v generate
//! ```

use std::path::PathBuf;
use std::process;

use apps_prebuild::{
	CommandError, CommandResult, GeneratorContext, registry, resolve_enabled_apps, run_all,
};
use clap::{Parser, Subcommand};
use colored::Colorize;

#[derive(Parser)]
#[command(name = "apps-prebuild")]
#[command(about = "Firmware app artifact generation utility", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbosity: u8,

	/// Directory the fixed relative paths resolve against
	#[arg(long, value_name = "DIR", default_value = ".")]
	project_root: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
	/// Regenerate all app artifacts from their templates (the default)
	Generate,

	/// Print the resolved enabled-app list and its registry matches
	Apps,
}

#[tokio::main]
async fn main() {
	let cli = Cli::parse();

	let result = run(cli).await;
	if let Err(e) = result {
		eprintln!("{} {}", "Error:".red().bold(), e);
		process::exit(1);
	}
}

async fn run(cli: Cli) -> CommandResult<()> {
	if !cli.project_root.is_dir() {
		return Err(CommandError::InvalidArguments(format!(
			"Project root '{}' is not a directory",
			cli.project_root.display()
		)));
	}

	let apps = resolve_enabled_apps(&cli.project_root)?;
	let ctx = GeneratorContext::new(cli.project_root, apps).with_verbosity(cli.verbosity);

	match cli.command {
		Some(Commands::Apps) => {
			print_apps(&ctx);
			Ok(())
		}
		Some(Commands::Generate) | None => {
			ctx.info(&format!("Apps: {}", ctx.apps.join(", ")));
			run_all(&ctx).await?;
			ctx.success("Done.");
			Ok(())
		}
	}
}

fn print_apps(ctx: &GeneratorContext) {
	for name in &ctx.apps {
		match registry::lookup(name) {
			Some(entry) => println!("{}  ({})", name, entry.source_file),
			None => println!("{}  {}", name, "(not in registry, skipped)".yellow()),
		}
	}
}
