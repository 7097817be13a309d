//! Shared helpers for driving sessions with scripted input.

use chrono::NaiveDate;
use contact_book::{Config, FixedClock, Session};

/// A date that must exist.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A session pinned to `today`, with an empty prompt so output is one reply per line.
pub fn session_on(today: NaiveDate) -> Session {
    let config = Config {
        prompt: String::new(),
        ..Config::default()
    };
    Session::with_clock(config, FixedClock(today))
}

/// Run `lines` through a fresh session and return every printed line.
///
/// The first line is always the welcome banner.
pub fn run_script(today: NaiveDate, lines: &[&str]) -> Vec<String> {
    let mut session = session_on(today);
    let input = lines.join("\n") + "\n";
    let mut output = Vec::new();

    session.run(input.as_bytes(), &mut output).unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
