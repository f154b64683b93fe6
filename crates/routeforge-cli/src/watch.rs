use std::path::Path;
use std::sync::mpsc;

use anyhow::{Context, Result};
use colored::Colorize;
use notify::{Event, EventKind, RecursiveMode, Watcher};

use routeforge::GenerateOptions;

use crate::commands;

/// Watches the routes directory and re-runs the full generation pass on
/// every reported change.
///
/// The receive loop is synchronous, so passes never overlap: each event is
/// handled to completion before the next one is taken off the channel. A
/// failed pass is reported and the loop keeps going; the next event is the
/// only retry mechanism. Runs until the process is terminated.
pub fn run(options: &GenerateOptions) -> Result<()> {
    let (tx, rx) = mpsc::channel();

    let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
        let _ = tx.send(res);
    })?;

    watcher
        .watch(&options.routes_dir, RecursiveMode::Recursive)
        .with_context(|| format!("failed to watch {}", options.routes_dir.display()))?;

    println!(
        "  {} Watching: {}",
        "👀".cyan(),
        options.routes_dir.display()
    );
    println!();

    for res in rx {
        let event = match res {
            Ok(event) => event,
            Err(err) => {
                eprintln!("{} Watch error: {}", "❌".red(), err);
                continue;
            }
        };

        if !is_change(&event.kind) {
            continue;
        }

        // A write of the generated module must not re-trigger generation.
        if event
            .paths
            .iter()
            .all(|path| is_output_file(path, &options.output_file))
        {
            continue;
        }

        for path in &event.paths {
            println!("{} Changed: {}", "🔄".yellow(), path.display());
        }

        if let Err(err) = commands::generate::execute(options) {
            eprintln!("{} Generation failed: {:#}", "❌".red(), err);
        }
        println!();
    }

    Ok(())
}

fn is_change(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    )
}

fn is_output_file(path: &Path, output_file: &Path) -> bool {
    path.ends_with(output_file) || path.file_name() == output_file.file_name()
}
