//! Project-specific utilities live here.

/// Calendar-date portion of a date-time-capable text value.
///
/// The backend stores publish dates as RFC 3339 text while the form works
/// in plain `YYYY-MM-DD`; truncating at the first `T` maps the former onto
/// the latter and leaves date-only text untouched.
pub fn date_only(raw: &str) -> &str {
    match raw.split_once('T') {
        Some((date, _)) => date,
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::date_only;

    #[test]
    fn strips_time_component() {
        assert_eq!(date_only("1965-08-01T00:00:00Z"), "1965-08-01");
    }

    #[test]
    fn leaves_plain_dates_untouched() {
        assert_eq!(date_only("1965-08-01"), "1965-08-01");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(date_only(""), "");
    }
}
