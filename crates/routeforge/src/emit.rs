//! Rendering and writing of the generated route module
//!
//! Takes the sorted import and route lists and renders the fixed output
//! template: a header, one aliased import per route module, and a single
//! exported function that registers every route against the router
//! instance it receives.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::detect::HandlerShape;
use crate::{DiscoveredRoute, ModuleImport};

const HEADER: &str = "// Generated by routeforge. Do not edit this file directly.";

/// Renders the full module text from sorted imports and routes.
///
/// Direct handlers register with a plain argument; factory handlers expand
/// to a sequence of handlers and register with a spread argument.
pub fn render_module(imports: &[ModuleImport], routes: &[DiscoveredRoute]) -> String {
    let mut out = String::new();

    out.push_str(HEADER);
    out.push_str("\n\n");

    for import in imports {
        let _ = writeln!(out, "import * as {} from \"{}\";", import.alias, import.target);
    }

    out.push('\n');
    out.push_str("export const registerRoutes = (app) => {\n");
    for route in routes {
        let spread = match route.shape {
            HandlerShape::Factory => "...",
            HandlerShape::Direct => "",
        };
        let _ = writeln!(
            out,
            "  app.{}(\"{}\", {}{}.{});",
            route.method.register_name(),
            route.path,
            spread,
            route.alias,
            route.handler_ident(),
        );
    }
    out.push_str("};\n");

    out
}

/// Writes the rendered module, fully overwriting any prior contents.
pub fn write_module(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}
