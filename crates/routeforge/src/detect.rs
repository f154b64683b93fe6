//! Export detection for handler modules
//!
//! Determines which HTTP-method handlers a source file exports, and whether
//! each export is a direct handler or a handler-factory call. Detection is
//! a textual heuristic over the raw file contents: nothing is parsed or
//! evaluated, so an export pattern inside a comment or string literal is a
//! false positive. That is a known limitation, kept on purpose.

use once_cell::sync::Lazy;
use regex::Regex;

/// Helper name that marks an assignment as a handler factory. A factory
/// export resolves to a sequence of handlers and is registered via spread.
pub const FACTORY_HELPER: &str = "createHandlers";

/// The closed set of recognized HTTP methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
    Patch,
}

impl Method {
    /// All recognized methods, in declaration order. Detector output is
    /// always emitted in this order, regardless of file order.
    pub const ALL: [Method; 5] = [
        Method::Get,
        Method::Put,
        Method::Post,
        Method::Delete,
        Method::Patch,
    ];

    /// Identifier the handler is exported under in a source file.
    pub fn export_name(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
        }
    }

    /// Registration method name on the router instance.
    pub fn register_name(self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Put => "put",
            Method::Post => "post",
            Method::Delete => "delete",
            Method::Patch => "patch",
        }
    }

    fn from_export_name(name: &str) -> Option<Method> {
        Method::ALL.iter().copied().find(|m| m.export_name() == name)
    }
}

/// Shape of a detected handler export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerShape {
    /// A single handler, registered with a plain argument
    Direct,
    /// A handler-factory result, registered with a spread argument
    Factory,
}

/// Capability: classify the HTTP-method exports in a text blob.
///
/// The tree walker only depends on this trait, so the textual default below
/// can be swapped for a real parser without touching the walker.
pub trait ExportClassifier {
    /// Returns (method, shape) pairs in method-declaration order. An empty
    /// result means the file is not a route module.
    fn classify(&self, source: &str) -> Vec<(Method, HandlerShape)>;
}

// `export const GET = ...` / `export let GET = ...`, capturing the rest of
// the assignment line so the factory helper can be spotted.
static EXPORT_CONST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"export\s+(?:const|let)\s+(GET|PUT|POST|DELETE|PATCH)\b([^\n]*)")
        .expect("export-const pattern is valid")
});

// `export function GET(...)` / `export async function GET(...)`.
static EXPORT_FN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"export\s+(?:async\s+)?function\s+(GET|PUT|POST|DELETE|PATCH)\b")
        .expect("export-function pattern is valid")
});

/// Default classifier: pattern matching on the raw source text.
pub struct PatternDetector;

impl ExportClassifier for PatternDetector {
    fn classify(&self, source: &str) -> Vec<(Method, HandlerShape)> {
        let mut shapes: [Option<HandlerShape>; 5] = [None; 5];

        for captures in EXPORT_CONST.captures_iter(source) {
            let Some(method) = Method::from_export_name(&captures[1]) else {
                continue;
            };
            let rest_of_line = captures.get(2).map_or("", |m| m.as_str());
            let shape = if rest_of_line.contains(FACTORY_HELPER) {
                HandlerShape::Factory
            } else {
                HandlerShape::Direct
            };
            let slot = &mut shapes[slot_index(method)];
            if slot.is_none() {
                *slot = Some(shape);
            }
        }

        for captures in EXPORT_FN.captures_iter(source) {
            let Some(method) = Method::from_export_name(&captures[1]) else {
                continue;
            };
            let slot = &mut shapes[slot_index(method)];
            if slot.is_none() {
                *slot = Some(HandlerShape::Direct);
            }
        }

        Method::ALL
            .iter()
            .filter_map(|&method| shapes[slot_index(method)].map(|shape| (method, shape)))
            .collect()
    }
}

fn slot_index(method: Method) -> usize {
    match method {
        Method::Get => 0,
        Method::Put => 1,
        Method::Post => 2,
        Method::Delete => 3,
        Method::Patch => 4,
    }
}
