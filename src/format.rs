//! Time, date and emoji formatting used by message tiles and dividers.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

use crate::emoji;

/// Formatting services consumed by the renderer.
///
/// The calendar day used for divider placement comes from the same
/// implementation as the displayed time, so both agree on the time zone.
pub trait MessageFormatter {
    /// Calendar day of `sent` in the formatter's zone.
    fn calendar_day(&self, sent: &DateTime<Utc>) -> NaiveDate;

    /// Short time of day, e.g. `10:05 AM`.
    fn format_time(&self, sent: &DateTime<Utc>) -> String;

    /// Long date, e.g. `January 2, 2024`.
    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%B %-d, %Y").to_string()
    }

    /// Replace emoji shortcodes with glyphs.
    fn render_emoji(&self, text: &str) -> String {
        emoji::render(text)
    }
}

/// Formatter bound to a chrono time zone.
#[derive(Clone, Debug)]
pub struct ZonedFormatter<Tz: TimeZone> {
    tz: Tz,
}

impl<Tz: TimeZone> ZonedFormatter<Tz> {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl ZonedFormatter<Local> {
    pub fn local() -> Self {
        Self::new(Local)
    }
}

impl ZonedFormatter<Utc> {
    pub fn utc() -> Self {
        Self::new(Utc)
    }
}

impl<Tz: TimeZone> MessageFormatter for ZonedFormatter<Tz>
where
    Tz::Offset: std::fmt::Display,
{
    fn calendar_day(&self, sent: &DateTime<Utc>) -> NaiveDate {
        sent.with_timezone(&self.tz).date_naive()
    }

    fn format_time(&self, sent: &DateTime<Utc>) -> String {
        sent.with_timezone(&self.tz).format("%-I:%M %p").to_string()
    }
}

/// Time label for an optional timestamp; absent formats to "".
pub fn time_label(formatter: &dyn MessageFormatter, sent: Option<&DateTime<Utc>>) -> String {
    sent.map(|t| formatter.format_time(t)).unwrap_or_default()
}

/// Divider label for an optional day; absent formats to "".
pub fn date_label(formatter: &dyn MessageFormatter, date: Option<NaiveDate>) -> String {
    date.map(|d| formatter.format_date(d)).unwrap_or_default()
}
