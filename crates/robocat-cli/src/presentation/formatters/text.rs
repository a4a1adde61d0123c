pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        // For very small max_len, just take first chars without "..."
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Collapse embedded newlines and runs of whitespace into single spaces,
/// then truncate.
pub fn single_line(text: &str, max_chars: usize) -> String {
    let normalized = text
        .replace(['\n', '\r'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    truncate(&normalized, max_chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate("RTA-C060-LQ", 20), "RTA-C060-LQ");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate("Heavy duty lifting robot", 10), "Heavy d...");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("Xe nâng tự động", 30), "Xe nâng tự động");
    }

    #[test]
    fn single_line_collapses_newlines() {
        assert_eq!(
            single_line("line one\nline  two", 40),
            "line one line two"
        );
    }
}
