//! Deterministic color assignment for columns created without one.
//!
//! A column title hashes to a fixed slot in a palette of stage colors, so the
//! same stage name always renders the same way.

/// Stage colors (6-char hex without `#`).
const PALETTE: &[&str] = &[
    "3b82f6", // blue
    "8b5cf6", // violet
    "f59e0b", // amber
    "10b981", // emerald
    "ef4444", // red
    "06b6d4", // cyan
    "ec4899", // pink
    "84cc16", // lime
    "6366f1", // indigo
    "f97316", // orange
];

/// Return a deterministic palette color for a column title.
///
/// Case and surrounding whitespace are ignored.
pub fn auto_color(title: &str) -> &'static str {
    let key = title.trim().to_lowercase();
    PALETTE[fnv1a(&key) as usize % PALETTE.len()]
}

/// Use `requested` when it is non-blank, otherwise fall back to [`auto_color`].
pub fn resolve_color(requested: &str, title: &str) -> String {
    let requested = requested.trim();
    if requested.is_empty() {
        auto_color(title).to_string()
    } else {
        requested.to_string()
    }
}

fn fnv1a(s: &str) -> u32 {
    s.bytes().fold(0x811c_9dc5, |hash: u32, byte| {
        (hash ^ byte as u32).wrapping_mul(0x0100_0193)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_color_ignores_case() {
        assert_eq!(auto_color("Negotiation"), auto_color("  negotiation "));
    }

    #[test]
    fn test_auto_color_from_palette() {
        for title in ["Lead", "Contacted", "Proposal", "Won", "Lost"] {
            let color = auto_color(title);
            assert!(PALETTE.contains(&color));
            assert!(color.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_resolve_color_prefers_requested() {
        assert_eq!(resolve_color("green", "Won"), "green");
        assert_eq!(resolve_color("  ", "Won"), auto_color("Won"));
    }
}
