//! # routeforge
//!
//! A file-system route-table generator with support for:
//! - Static routes (`about.ts` → `/about`)
//! - Dynamic parameters (`[id].ts` → `/:id`)
//! - Catch-all routes (`[[path]].ts` → `/:path{.+}`, `[...path].ts` → `/:path{.*}`)
//! - Index collapsing (`users/index.ts` → `/users`)
//!
//! The generator walks a directory of handler modules, detects which HTTP
//! methods each module exports, and emits one module that registers every
//! discovered route against a router instance in deterministic priority
//! order (static before dynamic, bounded before unbounded).
//!
//! Detection is a textual heuristic, not a parse: an export pattern inside a
//! comment or string literal is a false positive, and two different routes
//! may sanitize to the same import alias. Both are accepted limitations.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use routeforge::{generate, GenerateOptions, NullReporter};
//!
//! let options = GenerateOptions {
//!     routes_dir: PathBuf::from("src/routes"),
//!     output_file: PathBuf::from("src/routes.generated.ts"),
//!     deno: false,
//! };
//! generate(&options, &mut NullReporter)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::path::{Path, PathBuf};

use anyhow::Result;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod detect;
pub mod emit;
pub mod order;
pub mod segment;
pub mod walk;

pub use detect::{ExportClassifier, HandlerShape, Method, PatternDetector};
pub use order::compare_paths;
pub use segment::{sanitize_alias, transform_segment, RouteSegment, SegmentKind};

// ============================================================================
// Core Types
// ============================================================================

/// One exported HTTP handler bound to a derived router path.
///
/// Created during tree traversal, immutable afterwards. Every generation
/// pass rebuilds the full list from scratch; nothing is persisted between
/// runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredRoute {
    /// HTTP method the handler is exported under
    pub method: Method,
    /// Full router path pattern, always starting with `/`
    pub path: String,
    /// Sanitized alias of the module the handler lives in
    pub alias: String,
    /// Whether the export is a single handler or a handler-factory result
    pub shape: HandlerShape,
}

impl DiscoveredRoute {
    /// Exported identifier the handler is referenced by (`GET`, `POST`, ...)
    pub fn handler_ident(&self) -> &'static str {
        self.method.export_name()
    }
}

/// One generated import statement: a sanitized alias bound to a module path
/// relative to the output file.
///
/// A qualifying source file produces exactly one import regardless of how
/// many handlers it exports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleImport {
    /// Sanitized identifier the module is imported as
    pub alias: String,
    /// Import target relative to the output file's directory
    pub target: String,
}

/// Immutable result of one tree walk: every discovered route and the import
/// each qualifying file contributes.
#[derive(Debug, Default, Clone)]
pub struct ScanResult {
    pub routes: Vec<DiscoveredRoute>,
    pub imports: Vec<ModuleImport>,
}

impl ScanResult {
    /// Sorts routes and imports by the path ordering rules.
    ///
    /// The two lists are sorted independently with the same comparator; the
    /// sort is stable, so equal-ranked entries keep discovery order.
    pub fn sorted(mut self) -> Self {
        self.routes
            .sort_by(|a, b| order::compare_paths(&a.path, &b.path));
        self.imports
            .sort_by(|a, b| order::compare_paths(&a.target, &b.target));
        self
    }
}

/// Options for one generation pass.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Root of the route tree to scan
    pub routes_dir: PathBuf,
    /// Destination path for the generated module
    pub output_file: PathBuf,
    /// Keep source extensions and index stems in generated import targets
    pub deno: bool,
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Injected sink for human-readable progress lines.
///
/// Formatting and color live with the caller; the core never writes to
/// stdout itself. Reports are observational only and not part of any
/// consumed contract.
pub trait Reporter {
    /// Called once per discovered route, in discovery order.
    fn route_found(&mut self, route: &DiscoveredRoute);

    /// Called after the generated module has been written.
    fn output_written(&mut self, path: &Path);
}

/// Reporter that discards everything.
pub struct NullReporter;

impl Reporter for NullReporter {
    fn route_found(&mut self, _route: &DiscoveredRoute) {}
    fn output_written(&mut self, _path: &Path) {}
}

// ============================================================================
// Generation Pass
// ============================================================================

/// Runs one full generation pass: walk, sort, render, write.
///
/// Rebuilds the route set from scratch and overwrites the output file.
/// Running twice against unchanged inputs produces byte-identical output.
pub fn generate(options: &GenerateOptions, reporter: &mut dyn Reporter) -> Result<()> {
    let scan = walk::scan_routes(options, &PatternDetector, reporter)?.sorted();
    let rendered = emit::render_module(&scan.imports, &scan.routes);
    emit::write_module(&options.output_file, &rendered)?;
    reporter.output_written(&options.output_file);
    Ok(())
}
