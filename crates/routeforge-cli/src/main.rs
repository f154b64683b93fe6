mod commands;
mod config;
mod report;

#[cfg(feature = "watch")]
mod watch;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

#[derive(Parser)]
#[command(name = "routeforge")]
#[command(version, about = "Generate a route-table module from a file-system route tree", long_about = None)]
struct Cli {
    /// Directory containing the route handler files
    routes_dir: Option<PathBuf>,

    /// Destination path for the generated module
    output_file: Option<PathBuf>,

    /// Keep running and regenerate on every change under the routes directory
    #[arg(short, long)]
    watch: bool,

    /// Keep source extensions and index stems in generated import paths
    #[arg(long)]
    deno: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments, then fill gaps from routeforge.toml if present
    let cli = Cli::parse();
    let file_config = config::ProjectConfig::load_optional(Path::new(config::CONFIG_FILE))?;

    let Some(resolved) = config::resolve(
        config::CliArgs {
            routes_dir: cli.routes_dir,
            output_file: cli.output_file,
            watch: cli.watch,
            deno: cli.deno,
        },
        file_config,
    ) else {
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "<ROUTES_DIR> and <OUTPUT_FILE> are required (pass them as arguments or set them in routeforge.toml)",
            )
            .exit();
    };

    // One generation pass always runs, watch mode or not
    commands::generate::execute(&resolved.options)?;

    if resolved.watch {
        run_watch(&resolved.options)?;
    }

    Ok(())
}

#[cfg(feature = "watch")]
fn run_watch(options: &routeforge::GenerateOptions) -> Result<()> {
    watch::run(options)
}

#[cfg(not(feature = "watch"))]
fn run_watch(_options: &routeforge::GenerateOptions) -> Result<()> {
    use colored::Colorize;

    println!("{}", "⚠ Watch mode not available".yellow());
    println!();
    println!("Watch mode requires the 'watch' feature.");
    println!("Rebuild with: cargo build --features watch");
    Ok(())
}
