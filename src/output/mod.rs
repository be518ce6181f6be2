// Output formatting: terminal panels and shareable links.

pub mod terminal;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..120]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like emoji or accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Render a 0-1 fraction as a fixed-width bar of filled and empty cells.
/// Out-of-range fractions are clamped.
pub fn bar(fraction: f64, width: usize) -> String {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    let filled = (fraction * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Whole-number percentage of a 0-1 fraction.
pub fn percent(fraction: f64) -> i64 {
    (fraction * 100.0).round() as i64
}

/// Compose-tweet link announcing a score.
pub fn share_url(score: u8, tier_name: &str) -> String {
    let text = format!("Virality Score: {score}/100 [{tier_name}] - Analyzed by X Algorithm Meter");
    format!(
        "https://twitter.com/intent/tweet?text={}",
        utf8_percent_encode(&text, NON_ALPHANUMERIC)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(bar(0.5, 10), "█████░░░░░");
        assert_eq!(bar(1.7, 4), "████");
        assert_eq!(bar(-1.0, 3), "░░░");
        assert_eq!(bar(f64::NAN, 2), "░░");
    }

    #[test]
    fn share_url_is_encoded() {
        let url = share_url(72, "VIRAL");
        assert!(url.starts_with("https://twitter.com/intent/tweet?text=Virality%20Score%3A%2072%2F100"));
        assert!(url.contains("%5BVIRAL%5D"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn percent_rounds() {
        assert_eq!(percent(0.456), 46);
        assert_eq!(percent(0.0), 0);
    }
}
