//! Segment classification and alias sanitization
//!
//! Pure transformations from file-system path fragments into router path
//! fragments and import aliases. All functions here are pure: same input,
//! same output, no side effects.

/// File stem that denotes "this directory's own path" rather than a named
/// sub-segment. Collapses to nothing when it is the final segment.
pub const INDEX_NAME: &str = "index";

/// Kind of a route path segment, derived purely from bracket syntax.
///
/// Exactly one kind applies to any given fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Literal text, matched verbatim
    Static,
    /// `[name]` — matches exactly one path component
    Dynamic,
    /// `[[name]]` — matches one or more trailing components
    CatchAllOneOrMore,
    /// `[...name]` or `[[...name]]` — matches zero or more trailing components
    CatchAllZeroOrMore,
}

/// One path component after transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSegment {
    /// Original file or directory name fragment
    pub raw: String,
    /// Classification derived from the bracket syntax
    pub kind: SegmentKind,
    /// Captured parameter name; `None` for static segments
    pub name: Option<String>,
}

impl RouteSegment {
    /// Renders the router-path fragment for this segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use routeforge::segment::transform_segment;
    ///
    /// assert_eq!(transform_segment("users").fragment(), "users");
    /// assert_eq!(transform_segment("[id]").fragment(), ":id");
    /// assert_eq!(transform_segment("[[path]]").fragment(), ":path{.+}");
    /// assert_eq!(transform_segment("[...path]").fragment(), ":path{.*}");
    /// assert_eq!(transform_segment("[[...path]]").fragment(), ":path{.*}");
    /// ```
    pub fn fragment(&self) -> String {
        match (&self.kind, &self.name) {
            (SegmentKind::Static, _) => self.raw.clone(),
            (SegmentKind::Dynamic, Some(name)) => format!(":{name}"),
            (SegmentKind::CatchAllOneOrMore, Some(name)) => format!(":{name}{{.+}}"),
            (SegmentKind::CatchAllZeroOrMore, Some(name)) => format!(":{name}{{.*}}"),
            // kind invariant: non-static segments always carry a name
            _ => self.raw.clone(),
        }
    }
}

/// Classifies one path component into a typed segment (pure function).
///
/// Rules are applied as an ordered rewrite; a fragment consumed by an
/// earlier rule is never re-examined by a later one:
///
/// 1. `[[...name]]` → catch-all, zero or more
/// 2. `[...name]` → catch-all, zero or more
/// 3. `[[name]]` → catch-all, one or more
/// 4. `[name]` → dynamic
/// 5. anything else → static
pub fn transform_segment(segment: &str) -> RouteSegment {
    if let Some(name) = segment
        .strip_prefix("[[...")
        .and_then(|s| s.strip_suffix("]]"))
    {
        return capture(segment, SegmentKind::CatchAllZeroOrMore, name);
    }

    if let Some(name) = segment
        .strip_prefix("[...")
        .and_then(|s| s.strip_suffix(']'))
    {
        return capture(segment, SegmentKind::CatchAllZeroOrMore, name);
    }

    if let Some(name) = segment
        .strip_prefix("[[")
        .and_then(|s| s.strip_suffix("]]"))
    {
        return capture(segment, SegmentKind::CatchAllOneOrMore, name);
    }

    if let Some(name) = segment.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        return capture(segment, SegmentKind::Dynamic, name);
    }

    RouteSegment {
        raw: segment.to_string(),
        kind: SegmentKind::Static,
        name: None,
    }
}

fn capture(raw: &str, kind: SegmentKind, name: &str) -> RouteSegment {
    RouteSegment {
        raw: raw.to_string(),
        kind,
        name: Some(name.to_string()),
    }
}

/// Sanitizes a relative stem path into an import alias (pure function).
///
/// Path separators, `@`, and hyphens become underscores; bracket wrapping
/// (including the `...` marker) is stripped down to the bare capture name;
/// leading underscores produced by the replacement step are removed.
///
/// Distinct routes are permitted to sanitize to the same alias; collisions
/// are a documented limitation, not guarded against.
///
/// # Examples
///
/// ```
/// use routeforge::segment::sanitize_alias;
///
/// assert_eq!(sanitize_alias("users/[id]"), "users_id");
/// assert_eq!(sanitize_alias("docs/[...path]"), "docs_path");
/// assert_eq!(sanitize_alias("@admin/dashboard"), "admin_dashboard");
/// ```
pub fn sanitize_alias(path: &str) -> String {
    let replaced: String = path
        .chars()
        .map(|c| match c {
            '/' | '\\' | '@' | '-' => '_',
            other => other,
        })
        .collect();

    let bare: String = replaced
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '.'))
        .collect();

    bare.trim_start_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_static() {
        let seg = transform_segment("about");
        assert_eq!(seg.kind, SegmentKind::Static);
        assert_eq!(seg.name, None);
        assert_eq!(seg.fragment(), "about");
    }

    #[test]
    fn test_transform_dynamic() {
        let seg = transform_segment("[id]");
        assert_eq!(seg.kind, SegmentKind::Dynamic);
        assert_eq!(seg.name, Some("id".to_string()));
        assert_eq!(seg.fragment(), ":id");
    }

    #[test]
    fn test_transform_catch_all_one_or_more() {
        let seg = transform_segment("[[path]]");
        assert_eq!(seg.kind, SegmentKind::CatchAllOneOrMore);
        assert_eq!(seg.fragment(), ":path{.+}");
    }

    #[test]
    fn test_transform_catch_all_zero_or_more() {
        let seg = transform_segment("[...path]");
        assert_eq!(seg.kind, SegmentKind::CatchAllZeroOrMore);
        assert_eq!(seg.fragment(), ":path{.*}");
    }

    #[test]
    fn test_transform_double_wrapped_spread() {
        // [[...name]] must be consumed by the first rule, not re-matched as
        // [[name]] with a dotted capture.
        let seg = transform_segment("[[...path]]");
        assert_eq!(seg.kind, SegmentKind::CatchAllZeroOrMore);
        assert_eq!(seg.name, Some("path".to_string()));
        assert_eq!(seg.fragment(), ":path{.*}");
    }

    #[test]
    fn test_transform_keeps_raw_text() {
        assert_eq!(transform_segment("[slug]").raw, "[slug]");
        assert_eq!(transform_segment("posts").raw, "posts");
    }

    #[test]
    fn test_transform_unbalanced_brackets_are_static() {
        let seg = transform_segment("[oops");
        assert_eq!(seg.kind, SegmentKind::Static);
        assert_eq!(seg.fragment(), "[oops");
    }

    #[test]
    fn test_sanitize_plain_path() {
        assert_eq!(sanitize_alias("users/profile"), "users_profile");
    }

    #[test]
    fn test_sanitize_strips_brackets() {
        assert_eq!(sanitize_alias("users/[id]"), "users_id");
        assert_eq!(sanitize_alias("[[...path]]"), "path");
    }

    #[test]
    fn test_sanitize_replaces_special_characters() {
        assert_eq!(sanitize_alias("api/v1-beta"), "api_v1_beta");
        assert_eq!(sanitize_alias("@scope/lib"), "scope_lib");
    }

    #[test]
    fn test_sanitize_strips_leading_underscores() {
        assert_eq!(sanitize_alias("-leading"), "leading");
        assert_eq!(sanitize_alias("@admin"), "admin");
    }

    #[test]
    fn test_sanitize_index() {
        assert_eq!(sanitize_alias("index"), "index");
        assert_eq!(sanitize_alias("users/index"), "users_index");
    }

    #[test]
    fn test_known_alias_collision() {
        // "users/[id]" and "users-id" both sanitize to "users_id"; the
        // collision is a known limitation.
        assert_eq!(sanitize_alias("users/[id]"), sanitize_alias("users-id"));
    }
}
