//! Diff rendering for mismatched fixture output.

/// Render an expected/actual mismatch with quoting that keeps padding and
/// control bytes visible.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("- expected: {expected:?}\n"));
    out.push_str(&format!("+ actual:   {actual:?}"));
    if let Some(pos) = first_divergence(expected, actual) {
        out.push_str(&format!("\n  first divergence at byte {pos}"));
    }
    out
}

fn first_divergence(expected: &str, actual: &str) -> Option<usize> {
    let a = expected.as_bytes();
    let b = actual.as_bytes();
    if a == b {
        return None;
    }
    Some(
        a.iter()
            .zip(b.iter())
            .position(|(x, y)| x != y)
            .unwrap_or_else(|| a.len().min(b.len())),
    )
}
