//! Tokenizing input lines into a command and its arguments.

use crate::error::CommandError;

/// Every command the interpreter understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Export,
    Help,
    /// `close` or `exit`
    Exit,
    /// Anything else, kept verbatim for logging
    Unknown(String),
}

impl Command {
    /// Map a command word to a command. Matching ignores ASCII case.
    pub fn from_word(word: &str) -> Self {
        match word.to_ascii_lowercase().as_str() {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "export" => Self::Export,
            "help" => Self::Help,
            "close" | "exit" => Self::Exit,
            _ => Self::Unknown(word.to_string()),
        }
    }

    /// Canonical command word.
    pub fn name(&self) -> &str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::All => "all",
            Self::AddBirthday => "add-birthday",
            Self::ShowBirthday => "show-birthday",
            Self::Birthdays => "birthdays",
            Self::Export => "export",
            Self::Help => "help",
            Self::Exit => "exit",
            Self::Unknown(word) => word,
        }
    }

    /// Usage line shown by `help` and in missing-argument errors.
    pub fn usage(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add <name> <phone>",
            Self::Change => "change <name> <old_phone> <new_phone>",
            Self::Phone => "phone <name>",
            Self::All => "all",
            Self::AddBirthday => "add-birthday <name> <DD.MM.YYYY>",
            Self::ShowBirthday => "show-birthday <name>",
            Self::Birthdays => "birthdays [days]",
            Self::Export => "export",
            Self::Help => "help",
            Self::Exit => "close | exit",
            Self::Unknown(_) => "",
        }
    }

    /// Commands listed by `help`, in display order.
    pub fn all() -> [Command; 11] {
        [
            Self::Hello,
            Self::Add,
            Self::Change,
            Self::Phone,
            Self::All,
            Self::AddBirthday,
            Self::ShowBirthday,
            Self::Birthdays,
            Self::Export,
            Self::Help,
            Self::Exit,
        ]
    }
}

/// Split a line on whitespace into a command and its positional arguments.
///
/// Runs of whitespace collapse; there is no quoting, so a name cannot contain
/// spaces.
///
/// # Errors
///
/// Returns `CommandError::EmptyInput` for a blank line.
pub fn parse_input(line: &str) -> Result<(Command, Vec<String>), CommandError> {
    let mut tokens = line.split_whitespace();
    let word = tokens.next().ok_or(CommandError::EmptyInput)?;
    let args = tokens.map(str::to_string).collect();
    Ok((Command::from_word(word), args))
}
