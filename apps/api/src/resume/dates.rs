//! Month-year formatting for job date ranges. Never fails: input that does
//! not parse is echoed back unchanged.

use chrono::NaiveDate;

/// `"2023-03"` → `"Mar 2023"`. A full `"2023-03-14"` date is also accepted,
/// and a bare four-digit year reads as January of that year. Empty input
/// gives an empty string; anything else unparseable is returned as-is.
pub fn format_month_year(raw: &str) -> String {
    let value = raw.trim();
    if value.is_empty() {
        return String::new();
    }

    let mut candidates = vec![format!("{value}-01"), value.to_string()];
    if value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()) {
        candidates.push(format!("{value}-01-01"));
    }

    candidates
        .iter()
        .find_map(|candidate| NaiveDate::parse_from_str(candidate, "%Y-%m-%d").ok())
        .map(|date| date.format("%b %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// `"{start} - Present"` for a current role, `"{start} - {end}"` otherwise.
pub fn format_date_range(start: &str, end: &str, current: bool) -> String {
    let end = if current {
        "Present".to_string()
    } else {
        format_month_year(end)
    };
    format!("{} - {}", format_month_year(start), end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_month() {
        assert_eq!(format_month_year("2023-03"), "Mar 2023");
        assert_eq!(format_month_year("2022-12"), "Dec 2022");
    }

    #[test]
    fn test_full_date_accepted() {
        assert_eq!(format_month_year("2021-07-15"), "Jul 2021");
    }

    #[test]
    fn test_bare_year_reads_as_january() {
        assert_eq!(format_month_year("2023"), "Jan 2023");
        assert_eq!(format_date_range("2019", "2023", false), "Jan 2019 - Jan 2023");
        assert_eq!(format_month_year("203"), "203");
    }

    #[test]
    fn test_unparseable_falls_back_to_raw() {
        assert_eq!(format_month_year("not-a-date"), "not-a-date");
        assert_eq!(format_month_year("2023-13"), "2023-13");
        assert_eq!(format_month_year("Summer 2020"), "Summer 2020");
    }

    #[test]
    fn test_empty_stays_empty() {
        assert_eq!(format_month_year(""), "");
        assert_eq!(format_month_year("   "), "");
    }

    #[test]
    fn test_current_range_ends_in_present() {
        assert_eq!(format_date_range("2022-01", "", true), "Jan 2022 - Present");
        assert_eq!(format_date_range("2022-01", "2023-06", true), "Jan 2022 - Present");
    }

    #[test]
    fn test_closed_range() {
        assert_eq!(
            format_date_range("2020-05", "2021-11", false),
            "May 2020 - Nov 2021"
        );
    }
}
