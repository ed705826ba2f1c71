pub(super) fn contains_ignore_case(text: &str, keyword: &str) -> bool {
    text.to_lowercase().contains(&keyword.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::contains_ignore_case;

    #[test]
    fn contains_ignore_case_should_match_across_letter_case() {
        assert!(contains_ignore_case("GitHub", "hub"));
        assert!(contains_ignore_case("github", "GIT"));
        assert!(!contains_ignore_case("Quora", "git"));
    }

    #[test]
    fn contains_ignore_case_should_match_empty_keyword() {
        assert!(contains_ignore_case("anything", ""));
        assert!(contains_ignore_case("", ""));
    }
}
