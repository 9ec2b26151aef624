//! # Date Forms
//!
//! A stamp date travels through three textual forms:
//!
//! | Form | Example | Used for |
//! |------|---------|----------|
//! | store | `2025-03-07` | persisted in `visited.json` |
//! | display | `07/03/2025` | shown to the user, produced by the clock |
//! | sort key | `20250307` | ordering the passport |
//!
//! Each conversion is a pure, total function. Malformed input is never an
//! error: [`date_key`] degrades to the digits of its input and
//! [`format_for_display`] passes unknown input through unchanged.

use chrono::{Local, NaiveDate};

pub const STORE_FORMAT: &str = "%Y-%m-%d";
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Source of "today" for stamping.
///
/// Hosts report the date in their display form; the store re-derives its own
/// canonical form from it.
pub trait Clock {
    fn today(&self) -> String;
}

/// Reads the local calendar date from the host clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> String {
        Local::now().date_naive().format(DISPLAY_FORMAT).to_string()
    }
}

/// A clock pinned to a given day.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(today: impl Into<String>) -> Self {
        Self(today.into())
    }
}

impl Clock for FixedClock {
    fn today(&self) -> String {
        self.0.clone()
    }
}

/// Splits `YYYY-MM-DD` into its parts, checking only the shape.
fn split_iso(input: &str) -> Option<(&str, &str, &str)> {
    let mut parts = input.split('-');
    let (y, m, d) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let shaped = y.len() == 4 && m.len() == 2 && d.len() == 2;
    (shaped && all_digits(y) && all_digits(m) && all_digits(d)).then_some((y, m, d))
}

/// Splits `D/M/YYYY` (one or two digit day and month) into year, month, day.
fn split_display(input: &str) -> Option<(&str, &str, &str)> {
    let mut parts = input.split('/');
    let (d, m, y) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let shaped = (1..=2).contains(&d.len()) && (1..=2).contains(&m.len()) && y.len() == 4;
    (shaped && all_digits(y) && all_digits(m) && all_digits(d)).then_some((y, m, d))
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Sortable `YYYYMMDD` key for a stamp date in any known form.
///
/// Unknown input is reduced to its ASCII digits, which keeps the result
/// deterministic without promising it is meaningful.
pub fn date_key(stamp: &str) -> String {
    let stamp = stamp.trim();
    if let Some((y, m, d)) = split_iso(stamp) {
        return format!("{}{}{}", y, m, d);
    }
    if let Some((y, m, d)) = split_display(stamp) {
        return format!("{}{:0>2}{:0>2}", y, m, d);
    }
    stamp.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Store form of a date given in any known form, if it is a real calendar day.
pub fn canonical_date(stamp: &str) -> Option<String> {
    let key = date_key(stamp);
    if key.len() != 8 {
        return None;
    }
    NaiveDate::parse_from_str(&key, "%Y%m%d")
        .ok()
        .map(|d| d.format(STORE_FORMAT).to_string())
}

/// `YYYY-MM-DD` becomes `DD/MM/YYYY`; anything else is returned as given.
pub fn format_for_display(stamp: &str) -> String {
    match split_iso(stamp) {
        Some((y, m, d)) => format!("{}/{}/{}", d, m, y),
        None => stamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_from_store_form() {
        assert_eq!(date_key("2025-01-31"), "20250131");
    }

    #[test]
    fn key_from_display_form() {
        assert_eq!(date_key("31/01/2025"), "20250131");
        assert_eq!(date_key("7/3/2025"), "20250307");
    }

    #[test]
    fn key_passes_digit_form_through() {
        assert_eq!(date_key("20250131"), "20250131");
    }

    #[test]
    fn key_strips_garbage_to_digits() {
        assert_eq!(date_key("March 7, 2025"), "72025");
        assert_eq!(date_key("soon"), "");
    }

    #[test]
    fn key_preserves_chronological_order_across_forms() {
        let ordered = [
            ("2024-12-31", "31/12/2024"),
            ("2025-01-01", "01/01/2025"),
            ("2025-01-02", "2/1/2025"),
            ("2025-02-01", "01/02/2025"),
            ("2025-10-09", "09/10/2025"),
        ];
        for pair in ordered.windows(2) {
            let (a_iso, a_disp) = pair[0];
            let (b_iso, b_disp) = pair[1];
            for a in [a_iso, a_disp] {
                for b in [b_iso, b_disp] {
                    assert!(date_key(a) < date_key(b), "{} should sort before {}", a, b);
                }
            }
        }
    }

    #[test]
    fn display_from_store_form() {
        assert_eq!(format_for_display("2025-03-07"), "07/03/2025");
    }

    #[test]
    fn display_passes_other_input_through() {
        assert_eq!(format_for_display("07/03/2025"), "07/03/2025");
        assert_eq!(format_for_display("whenever"), "whenever");
        assert_eq!(format_for_display(""), "");
    }

    #[test]
    fn canonical_accepts_every_known_form() {
        assert_eq!(canonical_date("2025-03-07").as_deref(), Some("2025-03-07"));
        assert_eq!(canonical_date("07/03/2025").as_deref(), Some("2025-03-07"));
        assert_eq!(canonical_date("7/3/2025").as_deref(), Some("2025-03-07"));
        assert_eq!(canonical_date("20250307").as_deref(), Some("2025-03-07"));
    }

    #[test]
    fn canonical_rejects_impossible_dates() {
        assert_eq!(canonical_date("2025-02-30"), None);
        assert_eq!(canonical_date("31/13/2025"), None);
        assert_eq!(canonical_date("yesterday"), None);
        assert_eq!(canonical_date(""), None);
    }

    #[test]
    fn system_clock_reports_display_form() {
        let today = SystemClock.today();
        assert_eq!(today.len(), 10);
        assert!(canonical_date(&today).is_some());
    }

    #[test]
    fn fixed_clock_returns_its_day() {
        assert_eq!(FixedClock::new("01/02/2025").today(), "01/02/2025");
    }
}
