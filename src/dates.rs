//! Validity-period text parsing.
//!
//! The site renders flyer validity as either a closed range
//! ("02.06.2025 - 08.06.2025") or an open-ended form ("von 02.06.2025",
//! sometimes with weekday noise around the date). Rather than sniffing for
//! keywords, this module scans the text for `dd.mm.yyyy` tokens and takes
//! the first two that parse: two tokens make a range, one token an
//! open-ended start date. Unparseable text degrades to absent fields,
//! never an error.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Date format used by the site for validity ranges.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

fn date_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d{1,2}\.\d{1,2}\.\d{4}").expect("date token regex is valid"))
}

/// Best-effort parse of a validity text fragment into (from, to).
///
/// Tokens that look like dates but fail calendar validation (e.g.
/// "31.02.2025") are skipped, not treated as failures.
pub fn parse_validity(text: &str) -> (Option<NaiveDate>, Option<NaiveDate>) {
    let mut dates = date_token_re()
        .find_iter(text)
        .filter_map(|m| NaiveDate::parse_from_str(m.as_str(), DATE_FORMAT).ok());
    let from = dates.next();
    let to = dates.next();
    (from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn closed_range() {
        let (from, to) = parse_validity("02.06.2025 - 08.06.2025");
        assert_eq!(from, Some(d(2025, 6, 2)));
        assert_eq!(to, Some(d(2025, 6, 8)));
    }

    #[test]
    fn open_ended_von_form() {
        let (from, to) = parse_validity("gültig von 02.06.2025");
        assert_eq!(from, Some(d(2025, 6, 2)));
        assert_eq!(to, None);
    }

    #[test]
    fn single_digit_day_and_month() {
        let (from, to) = parse_validity("1.6.2025 - 8.6.2025");
        assert_eq!(from, Some(d(2025, 6, 1)));
        assert_eq!(to, Some(d(2025, 6, 8)));
    }

    #[test]
    fn surrounding_noise_is_ignored() {
        let (from, to) = parse_validity("Mo. 02.06.2025 - So. 08.06.2025 (noch 3 Tage)");
        assert_eq!(from, Some(d(2025, 6, 2)));
        assert_eq!(to, Some(d(2025, 6, 8)));
    }

    #[test]
    fn garbage_yields_nothing() {
        assert_eq!(parse_validity("Nur solange der Vorrat reicht"), (None, None));
    }

    #[test]
    fn empty_yields_nothing() {
        assert_eq!(parse_validity(""), (None, None));
    }

    #[test]
    fn invalid_calendar_date_is_skipped() {
        // 31.02. never exists; the second token still parses as the start.
        let (from, to) = parse_validity("31.02.2025 - 08.06.2025");
        assert_eq!(from, Some(d(2025, 6, 8)));
        assert_eq!(to, None);
    }

    #[test]
    fn extra_tokens_beyond_two_are_dropped() {
        let (from, to) = parse_validity("02.06.2025 - 08.06.2025 (gedruckt 01.06.2025)");
        assert_eq!(from, Some(d(2025, 6, 2)));
        assert_eq!(to, Some(d(2025, 6, 8)));
    }
}
