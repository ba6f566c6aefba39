use time::{Date, Duration};

/// Month-day keys ("MM-DD") for the inclusive window starting at `from`.
///
/// Birthdays match on month and day only, so the stored year never matters
/// and a window ending in late December rolls over into January.
pub(crate) fn birthday_keys(from: Date, days: i64) -> Vec<String> {
    (0..=days)
        .filter_map(|offset| from.checked_add(Duration::days(offset)))
        .map(|d| format!("{:02}-{:02}", u8::from(d.month()), d.day()))
        .collect()
}

/// Escape SQL LIKE wildcards so the query string matches literally.
pub(crate) fn like_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn window_covers_eight_days_inclusive() {
        let keys = birthday_keys(date!(2024 - 03 - 10), 7);
        assert_eq!(keys.len(), 8);
        assert_eq!(keys.first().unwrap(), "03-10");
        assert_eq!(keys.last().unwrap(), "03-17");
        // day +3 is in, day +8 is out
        assert!(keys.contains(&"03-13".to_string()));
        assert!(!keys.contains(&"03-18".to_string()));
    }

    #[test]
    fn window_wraps_across_new_year() {
        let keys = birthday_keys(date!(2024 - 12 - 28), 7);
        assert!(keys.contains(&"12-30".to_string()));
        assert!(keys.contains(&"01-01".to_string()));
        assert!(keys.contains(&"01-04".to_string()));
        assert!(!keys.contains(&"01-05".to_string()));
    }

    #[test]
    fn keys_ignore_the_year() {
        // same window computed from different years yields the same keys
        assert_eq!(
            birthday_keys(date!(2023 - 05 - 01), 7),
            birthday_keys(date!(2025 - 05 - 01), 7)
        );
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("doe"), "%doe%");
        assert_eq!(like_pattern("50%"), "%50\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("back\\slash"), "%back\\\\slash%");
    }
}
