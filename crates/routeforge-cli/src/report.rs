use std::path::Path;

use colored::Colorize;

use routeforge::{DiscoveredRoute, HandlerShape, Reporter};

/// Reporter that prints one colorized line per event to stdout.
///
/// Purely observational output; nothing downstream consumes it.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn route_found(&mut self, route: &DiscoveredRoute) {
        let method = format!("{:<6}", route.method.export_name());
        let shape = match route.shape {
            HandlerShape::Factory => " (factory)",
            HandlerShape::Direct => "",
        };
        println!(
            "  {} {} {}{}",
            "✓".green(),
            method.cyan().bold(),
            route.path,
            shape.dimmed()
        );
    }

    fn output_written(&mut self, path: &Path) {
        println!();
        println!(
            "{} Routes written to {}",
            "✓".green().bold(),
            path.display().to_string().cyan()
        );
    }
}
