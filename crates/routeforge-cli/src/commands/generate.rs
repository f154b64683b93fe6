use anyhow::Result;
use colored::Colorize;

use routeforge::GenerateOptions;

use crate::report::ConsoleReporter;

/// Runs one full generation pass with console diagnostics.
pub fn execute(options: &GenerateOptions) -> Result<()> {
    println!(
        "{}",
        format!("Scanning {}...", options.routes_dir.display())
            .green()
            .bold()
    );

    routeforge::generate(options, &mut ConsoleReporter)
}
