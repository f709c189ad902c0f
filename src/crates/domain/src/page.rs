/// A bounded list window computed from raw query parameters.
///
/// Malformed pagination input never fails a request: absent,
/// non-numeric or negative values fall back to defaults, and the limit
/// is clamped to the resource's maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: u64,
    pub count: u64,
}

impl Window {
    pub fn resolve(
        offset: Option<&str>,
        limit: Option<&str>,
        default_limit: u64,
        max_limit: u64,
    ) -> Self {
        let start = parse_non_negative(offset).unwrap_or(0);
        let count = parse_non_negative(limit)
            .unwrap_or(default_limit)
            .min(max_limit);
        Self { start, count }
    }
}

fn parse_non_negative(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|v| *v >= 0)
        .map(|v| v as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        let w = Window::resolve(None, None, 25, 100);
        assert_eq!(w, Window { start: 0, count: 25 });
    }

    #[test]
    fn test_valid_values_pass_through() {
        let w = Window::resolve(Some("10"), Some("5"), 25, 100);
        assert_eq!(w, Window { start: 10, count: 5 });
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let w = Window::resolve(Some("abc"), Some("lots"), 25, 100);
        assert_eq!(w, Window { start: 0, count: 25 });
    }

    #[test]
    fn test_negative_values_fall_back() {
        let w = Window::resolve(Some("-3"), Some("-1"), 25, 100);
        assert_eq!(w, Window { start: 0, count: 25 });
    }

    #[test]
    fn test_limit_clamped_to_max() {
        let w = Window::resolve(None, Some("5000"), 25, 100);
        assert_eq!(w.count, 100);
    }

    #[test]
    fn test_zero_limit_is_an_empty_window() {
        let w = Window::resolve(Some("0"), Some("0"), 25, 100);
        assert_eq!(w, Window { start: 0, count: 0 });
    }
}
