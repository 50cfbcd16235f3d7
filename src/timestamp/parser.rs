use combine::{
    error::UnexpectedParse,
    parser::{
        byte::{byte, digit},
        range::recognize,
        repeat::skip_many1,
        token::one_of,
    },
    Parser,
};

use super::Timestamp;

/// Matches the `MM/DD/YYYY HH:MM:SS` prefix spamdyke puts on its own log
/// lines. Anything after the seconds is left unconsumed.
pub fn timestamp<'a>() -> impl Parser<&'a [u8], Output = Timestamp> {
    (date(), byte(b' '), time()).map(|((month, day, year), _, (hour, minute, second))| {
        Timestamp {
            month,
            day,
            year,
            hour,
            minute,
            second,
        }
    })
}

fn date<'a>() -> impl Parser<&'a [u8], Output = (u32, u32, u32)> {
    (month(), byte(b'/'), day(), byte(b'/'), number())
        .map(|(month, _, day, _, year)| (month, day, year))
}

fn month<'a>() -> impl Parser<&'a [u8], Output = u32> {
    (digit(), digit()).and_then(|(d1, d2)| match atoi(d1) * 10 + atoi(d2) {
        month @ 1..=12 => Ok(month),
        _ => Err(UnexpectedParse::Unexpected),
    })
}

fn day<'a>() -> impl Parser<&'a [u8], Output = u32> {
    // Only the shape is checked here, so 00 and 39 are both accepted.
    (one_of(b"0123".iter().cloned()), digit()).map(|(d1, d2)| atoi(d1) * 10 + atoi(d2))
}

fn time<'a>() -> impl Parser<&'a [u8], Output = (u32, u32, u32)> {
    (number(), byte(b':'), number(), byte(b':'), number())
        .map(|(hour, _, minute, _, second)| (hour, minute, second))
}

fn number<'a>() -> impl Parser<&'a [u8], Output = u32> {
    recognize(skip_many1(digit())).map(|s: &[u8]| {
        s.iter()
            .fold(0u32, |n, d| n.saturating_mul(10).saturating_add(atoi(*d)))
    })
}

fn atoi(a: u8) -> u32 {
    u32::from(a - b'0')
}
