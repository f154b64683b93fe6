//! Total ordering over generated route paths
//!
//! Ranks more specific patterns ahead of more general ones so the emitted
//! registration order is deterministic: static segments before parametric
//! segments, bounded parameters before unbounded catch-alls, lexicographic
//! within a category. The same comparator sorts the import-target list.

use std::cmp::Ordering;

/// Compares two paths segment-position-wise (pure function).
///
/// Both paths are split on `/` and compared position by position up to the
/// longer of the two. A missing trailing position compares as the empty
/// string, which never loses to a present segment. At the first differing
/// position:
///
/// - a non-parametric segment precedes a parametric one
/// - a bounded parameter (no `{.+}`/`{.*}` marker) precedes an unbounded one
/// - within the same category, the lexicographically lower segment wins
///
/// Paths equal at every position are equal-ranked; a stable sort keeps them
/// in discovery order.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use routeforge::order::compare_paths;
///
/// assert_eq!(compare_paths("/users/profile", "/users/:id"), Ordering::Less);
/// assert_eq!(compare_paths("/users/:id", "/users/:path{.+}"), Ordering::Less);
/// assert_eq!(compare_paths("/", "/about"), Ordering::Less);
/// ```
pub fn compare_paths(a: &str, b: &str) -> Ordering {
    let left: Vec<&str> = a.split('/').collect();
    let right: Vec<&str> = b.split('/').collect();
    let positions = left.len().max(right.len());

    for i in 0..positions {
        let x = left.get(i).copied().unwrap_or("");
        let y = right.get(i).copied().unwrap_or("");
        if x == y {
            continue;
        }

        return match segment_rank(x).cmp(&segment_rank(y)) {
            Ordering::Equal => x.cmp(y),
            other => other,
        };
    }

    Ordering::Equal
}

/// Specificity rank of one segment: static, bounded parameter, unbounded
/// parameter. Lower ranks sort first.
fn segment_rank(segment: &str) -> u8 {
    if !segment.starts_with(':') {
        0
    } else if segment.contains("{.+}") || segment.contains("{.*}") {
        2
    } else {
        1
    }
}
