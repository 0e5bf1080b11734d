/// Compute effective limit with precedence: local arg -> global flag -> fallback.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local.or(global).unwrap_or(fallback)
}

/// Stderr hint for a listing that filled its limit exactly, since more rows
/// may have been cut off.
#[must_use]
pub fn truncation_notice(shown: usize, limit: u32) -> Option<String> {
    (u32::try_from(shown).is_ok_and(|shown| shown >= limit) && limit > 0).then(|| {
        format!("showing the first {limit} records; pass --limit to see more")
    })
}

#[cfg(test)]
mod tests {
    use super::{effective_limit, truncation_notice};

    #[test]
    fn local_takes_precedence() {
        assert_eq!(effective_limit(Some(5), Some(10), 50), 5);
    }

    #[test]
    fn global_flag_beats_configured_default() {
        assert_eq!(effective_limit(None, Some(10), 50), 10);
    }

    #[test]
    fn configured_default_used_when_nothing_passed() {
        assert_eq!(effective_limit(None, None, 50), 50);
    }

    #[test]
    fn full_page_gets_a_notice() {
        let notice = truncation_notice(50, 50).expect("full page should warn");
        assert!(notice.contains("first 50 records"));
        assert!(notice.contains("--limit"));
    }

    #[test]
    fn short_page_is_silent() {
        assert_eq!(truncation_notice(49, 50), None);
        assert_eq!(truncation_notice(0, 50), None);
    }
}
