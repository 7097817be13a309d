//! Line-oriented interpreter loop.
//!
//! A [`Session`] owns the address book for one run. It reads one line at a
//! time, dispatches it to a command handler and writes the reply, until a
//! `close`/`exit` command or end of input. Nothing survives the session.

use crate::book::AddressBook;
use crate::clock::{Clock, SystemClock};
use crate::commands::{handlers, parse_input, Command};
use crate::config::Config;
use crate::error::CommandError;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const FAREWELL: &str = "Good bye!";

/// Whether the session still accepts input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// Result of executing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and keep reading.
    Continue(String),
    /// Print the text and stop.
    Exit(String),
}

impl Outcome {
    pub fn text(&self) -> &str {
        match self {
            Outcome::Continue(text) | Outcome::Exit(text) => text,
        }
    }
}

/// Counters reported when the session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub commands_total: u64,
    pub errors_total: u64,
}

/// One interactive run of the contact book.
pub struct Session {
    book: AddressBook,
    clock: Box<dyn Clock>,
    config: Config,
    state: SessionState,
    stats: SessionStats,
}

impl Session {
    /// Create a session that reads today's date from the system clock.
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Create a session with a custom clock.
    pub fn with_clock(config: Config, clock: impl Clock + 'static) -> Self {
        Self {
            book: AddressBook::new(),
            clock: Box::new(clock),
            config,
            state: SessionState::Running,
            stats: SessionStats::default(),
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Execute one input line and return the text to show.
    ///
    /// Errors are rendered into the reply; only `close`/`exit` ends the
    /// session.
    pub fn execute(&mut self, line: &str) -> Outcome {
        self.stats.commands_total += 1;

        let (command, args) = match parse_input(line) {
            Ok(parsed) => parsed,
            Err(e) => return Outcome::Continue(self.report(e)),
        };

        debug!(command = command.name(), args = args.len(), "Dispatching command");
        let reply = match &command {
            Command::Exit => {
                self.state = SessionState::Terminated;
                return Outcome::Exit(FAREWELL.to_string());
            }
            Command::Hello => handlers::hello(),
            Command::Add => handlers::add_contact(&args, &mut self.book),
            Command::Change => handlers::change_contact(&args, &mut self.book),
            Command::Phone => handlers::show_phone(&args, &self.book),
            Command::All => handlers::show_all(&self.book),
            Command::AddBirthday => handlers::add_birthday(&args, &mut self.book),
            Command::ShowBirthday => handlers::show_birthday(&args, &self.book),
            Command::Birthdays => handlers::birthdays(
                &args,
                &self.book,
                self.clock.today(),
                self.config.birthday_window_days,
            ),
            Command::Export => handlers::export(&self.book),
            Command::Help => handlers::help(),
            Command::Unknown(word) => Err(CommandError::UnknownCommand(word.clone())),
        };

        match reply {
            Ok(reply) => Outcome::Continue(reply),
            Err(e) => Outcome::Continue(self.report(e)),
        }
    }

    fn report(&mut self, error: CommandError) -> String {
        self.stats.errors_total += 1;
        warn!(error = ?error, "Command failed");
        error.to_string()
    }

    /// Run the interactive loop until exit or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only when reading input or writing output fails. A
    /// line that is not valid UTF-8 is reported and skipped.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        info!("Session started");
        writeln!(output, "{}", WELCOME)?;

        let mut buf = Vec::new();
        while self.state == SessionState::Running {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("End of input");
                writeln!(output)?;
                self.state = SessionState::Terminated;
                break;
            }

            let outcome = match std::str::from_utf8(&buf) {
                Ok(line) => self.execute(line),
                Err(_) => {
                    self.stats.commands_total += 1;
                    Outcome::Continue(self.report(CommandError::InvalidInput))
                }
            };
            writeln!(output, "{}", outcome.text())?;
        }

        output.flush()?;
        info!(
            commands = self.stats.commands_total,
            errors = self.stats.errors_total,
            contacts = self.book.len(),
            "Session terminated"
        );
        Ok(())
    }
}
