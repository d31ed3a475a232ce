//! Extraction of ice breakers from raw completion text.

use super::prompt::ICE_BREAKER_COUNT;

/// Pulls numbered list items (`1. ...`) out of a completion.
///
/// Lines without a leading number and period are ignored. At most
/// [`ICE_BREAKER_COUNT`] items are returned; fewer (or none) is not an error.
pub fn extract_ice_breakers(raw: &str) -> Vec<String> {
    raw.lines()
        .filter_map(strip_list_marker)
        .take(ICE_BREAKER_COUNT)
        .map(str::to_string)
        .collect()
}

/// Returns the item text of a `N.` line, or `None` for any other line.
fn strip_list_marker(line: &str) -> Option<&str> {
    let line = line.trim();
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return None;
    }
    let item = rest.strip_prefix('.')?.trim();
    (!item.is_empty()).then_some(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn keeps_numbered_lines_and_drops_trailing_notes() {
        let items = extract_ice_breakers("1. A\n2. B\n3. C\nextra notes");
        assert_eq!(items, vec!["A", "B", "C"]);
    }

    #[test]
    fn two_numbered_lines_give_two_items() {
        let items = extract_ice_breakers("Here you go:\n1. First one\n\n2. Second one");
        assert_eq!(items, vec!["First one", "Second one"]);
    }

    #[test]
    fn no_numbered_lines_give_empty_result() {
        assert!(extract_ice_breakers("Sure, how about asking about their day?").is_empty());
        assert!(extract_ice_breakers("").is_empty());
    }

    #[test]
    fn truncates_to_three() {
        let items = extract_ice_breakers("1. a\n2. b\n3. c\n4. d\n5. e");
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn tolerates_indentation_and_crlf() {
        let items = extract_ice_breakers("  1.   Hi there  \r\n\t2.Second\r\n");
        assert_eq!(items, vec!["Hi there", "Second"]);
    }

    #[test]
    fn ignores_other_list_styles() {
        let items = extract_ice_breakers("- dash\n* star\n1) paren\n(2) wrapped\n3. real");
        assert_eq!(items, vec!["real"]);
    }

    #[test]
    fn skips_markers_without_text() {
        let items = extract_ice_breakers("1.\n2. kept");
        assert_eq!(items, vec!["kept"]);
    }

    #[test]
    fn accepts_multi_digit_markers() {
        let items = extract_ice_breakers("10. ten");
        assert_eq!(items, vec!["ten"]);
    }

    proptest! {
        #[test]
        fn never_returns_more_than_three_trimmed_items(raw in "(?s).{0,400}") {
            let items = extract_ice_breakers(&raw);
            prop_assert!(items.len() <= ICE_BREAKER_COUNT);
            for item in items {
                prop_assert!(!item.is_empty());
                prop_assert_eq!(item.trim(), item.as_str());
            }
        }
    }
}
