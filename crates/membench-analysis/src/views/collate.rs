//! Locale-style name ordering for display sorts.

use std::cmp::Ordering;

/// Case-insensitive first; on a case-only difference the lowercase form sorts
/// first, as a locale collator would. Byte order breaks any remaining tie.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .find(|(x, y)| x != y)
                .map_or(Ordering::Equal, |(x, y)| {
                    x.is_uppercase().cmp(&y.is_uppercase())
                })
        })
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut out: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        out.sort_by(|a, b| locale_cmp(a, b));
        out
    }

    #[test]
    fn case_does_not_split_the_alphabet() {
        assert_eq!(sorted(&["RLM", "Window", "hybrid"]), vec!["hybrid", "RLM", "Window"]);
    }

    #[test]
    fn lowercase_first_on_case_only_difference() {
        assert_eq!(sorted(&["Rlm", "RLM", "rlm"]), vec!["rlm", "Rlm", "RLM"]);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(sorted(&["window-2", "Window"]), vec!["Window", "window-2"]);
    }
}
