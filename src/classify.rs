use crate::timestamp::is_timestamped;
use tracing::trace;

/// SMTP response which tells the client to start sending the message body.
const DATA_START: &[u8] = b"354 go ahead";
/// Size of `.\r\n`, the only chunk that can finish DATA.
const TERMINATOR_CHUNK: &[u8] = b"TO CHILD: 3 bytes";

/// What the classifier knows after seeing a line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State {
    /// Lines without a timestamp belong to the email.
    pub collecting_email: bool,
    /// The last timestamped line announced a 3 byte chunk, so a following
    /// line starting with `.` is the end of DATA.
    pub pending_terminator: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    Log,
    Email,
    /// Blank line inside the email.
    Dropped,
}

/// The two streams a transcript is split into, each in input order.
///
/// Lines are kept as raw bytes, so 8-bit mail comes out the way it went in.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Streams<'a> {
    pub log: Vec<&'a [u8]>,
    pub email: Vec<&'a [u8]>,
}

fn contains_ignore_ascii_case(haystack: &[u8], needle: &[u8]) -> bool {
    haystack
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}

fn trim_newlines(mut line: &[u8]) -> &[u8] {
    while let [rest @ .., b'\n'] = line {
        line = rest;
    }
    line
}

/// Decides where `line`, without its newline, goes and returns the state for
/// the next line.
pub fn step(state: State, line: &[u8]) -> (State, Disposition) {
    let mut next = state;
    let disposition = if is_timestamped(line) {
        if contains_ignore_ascii_case(line, TERMINATOR_CHUNK) {
            next.pending_terminator = true;
        }
        Disposition::Log
    } else {
        if next.pending_terminator {
            if line.first() == Some(&b'.') {
                next.collecting_email = false;
            } else {
                next.pending_terminator = false;
            }
        }
        if !next.collecting_email {
            Disposition::Log
        } else if line.is_empty() {
            Disposition::Dropped
        } else {
            Disposition::Email
        }
    };
    // Checked after the line is placed, so the 354 line itself stays in the
    // log and collection starts with the next one.
    if contains_ignore_ascii_case(line, DATA_START) {
        next.collecting_email = true;
    }
    (next, disposition)
}

pub fn classify<'a, I>(lines: I) -> Streams<'a>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut streams = Streams::default();
    let mut state = State::default();
    for (index, line) in lines.into_iter().enumerate() {
        let line = trim_newlines(line);
        let (next, disposition) = step(state, line);
        if next != state {
            trace!(line = index + 1, from = ?state, to = ?next, "state changed");
        }
        match disposition {
            Disposition::Log => streams.log.push(line),
            Disposition::Email => streams.email.push(line),
            Disposition::Dropped => {}
        }
        state = next;
    }
    streams
}
