use std::cmp::Ordering;

/// Compares two license names the way license metadata is matched:
/// surrounding whitespace is ignored and letters compare case-insensitively.
pub fn names_match(a: &str, b: &str) -> bool {
    compare_ignore_case(a.trim(), b.trim()) == Ordering::Equal
}

/// Case-insensitive ordering used for report layouts.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_ignores_case_and_whitespace() {
        assert!(names_match("MIT License", "mit license"));
        assert!(names_match("  MIT License\t", "MIT License"));
        assert!(!names_match("MIT License", "MIT"));
    }

    #[test]
    fn test_compare_ignore_case() {
        assert_eq!(compare_ignore_case("apache", "Apache"), Ordering::Equal);
        assert_eq!(compare_ignore_case("apache", "BSD"), Ordering::Less);
        assert_eq!(compare_ignore_case("Zlib", "mit"), Ordering::Greater);
    }
}
