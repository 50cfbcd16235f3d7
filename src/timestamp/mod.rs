mod parser;

use chrono::{NaiveDate, NaiveDateTime};
use combine::Parser;

/// The date and time fields of a spamdyke log line prefix, as written.
///
/// Fields hold whatever digits the line carried, so a value accepted here is
/// not necessarily a real calendar date. Use [`Timestamp::to_datetime`] for
/// that.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timestamp {
    pub month: u32,
    pub day: u32,
    pub year: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl Timestamp {
    pub fn to_datetime(&self) -> Option<NaiveDateTime> {
        let year = i32::try_from(self.year).ok()?;
        NaiveDate::from_ymd_opt(year, self.month, self.day)?
            .and_hms_opt(self.hour, self.minute, self.second)
    }
}

/// Parses the timestamp at the start of a line.
///
/// The accepted shape is a two digit month from 01 to 12, a two digit day
/// whose first digit is 0-3, a year of any length, a single space, then
/// hour, minute and second as colon separated digit runs. Whatever follows
/// the seconds is ignored.
pub fn parse_timestamp(s: &[u8]) -> Option<Timestamp> {
    parser::timestamp().parse(s).ok().map(|(ts, _)| ts)
}

pub fn is_timestamped(line: &[u8]) -> bool {
    parse_timestamp(line).is_some()
}

/// Returns the first and last valid calendar timestamps among `lines`.
pub fn session_span<'a, I>(lines: I) -> Option<(NaiveDateTime, NaiveDateTime)>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    lines
        .into_iter()
        .filter_map(parse_timestamp)
        .filter_map(|ts| ts.to_datetime())
        .fold(None, |span, dt| match span {
            None => Some((dt, dt)),
            Some((first, _)) => Some((first, dt)),
        })
}
