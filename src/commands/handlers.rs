//! Command handlers.
//!
//! Each handler takes the positional arguments of one command plus the
//! address book and returns the reply text, or a [`CommandError`] describing
//! why the command could not be carried out. Handlers never print.

use super::parser::Command;
use crate::book::AddressBook;
use crate::error::{CommandError, CommandResult};
use crate::models::{PhoneEdit, Record};
use chrono::NaiveDate;

/// Ensure at least `count` arguments are present.
fn require<'a>(
    args: &'a [String],
    count: usize,
    command: &Command,
) -> Result<&'a [String], CommandError> {
    if args.len() < count {
        return Err(CommandError::MissingArguments {
            command: command.name().to_string(),
            usage: command.usage(),
        });
    }
    Ok(&args[..count])
}

fn lines(records: &[&Record]) -> String {
    records
        .iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn hello() -> CommandResult {
    Ok("How can I help you?".to_string())
}

/// `add <name> <phone>`: create the record if needed, then append the phone.
///
/// Arguments beyond the second are ignored.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult {
    let args = require(args, 2, &Command::Add)?;
    let (name, phone) = (&args[0], &args[1]);

    let record = book.get_or_insert(name)?;
    record.add_phone(phone)?;
    Ok(format!("Contact {} added/updated.", name))
}

/// `change <name> <old_phone> <new_phone>`
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult {
    let args = require(args, 3, &Command::Change)?;
    let (name, old, new) = (&args[0], &args[1], &args[2]);

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;

    match record.edit_phone(old, new)? {
        PhoneEdit::Updated => Ok("Phone updated.".to_string()),
        PhoneEdit::NotFound => Err(CommandError::PhoneNotFound {
            name: name.clone(),
            phone: old.clone(),
        }),
    }
}

/// `phone <name>`
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult {
    let args = require(args, 1, &Command::Phone)?;
    let name = &args[0];

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;
    Ok(format!("{}'s phones: {}", name, record.phones_display()))
}

/// `all`: every record, one per line.
pub fn show_all(book: &AddressBook) -> CommandResult {
    if book.is_empty() {
        return Ok("No contacts saved.".to_string());
    }
    Ok(lines(&book.records().collect::<Vec<_>>()))
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult {
    let args = require(args, 2, &Command::AddBirthday)?;
    let (name, birthday) = (&args[0], &args[1]);

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;
    record.add_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult {
    let args = require(args, 1, &Command::ShowBirthday)?;
    let name = &args[0];

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;
    let birthday = record
        .show_birthday()
        .map(|b| b.to_string())
        .unwrap_or_else(|| "No birthday set.".to_string());
    Ok(format!("{}'s birthday: {}", name, birthday))
}

/// `birthdays [days]`: records with a birthday in `[today, today + days)`.
///
/// Without an argument the window is `default_days`.
pub fn birthdays(
    args: &[String],
    book: &AddressBook,
    today: NaiveDate,
    default_days: u32,
) -> CommandResult {
    let days = match args.first() {
        Some(raw) => match raw.parse::<u32>() {
            Ok(days) if days > 0 => days,
            _ => return Err(CommandError::InvalidDayCount(raw.clone())),
        },
        None => default_days,
    };

    let upcoming = book.upcoming_birthdays(today, days);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }
    Ok(lines(&upcoming))
}

/// `export`: the whole book as pretty-printed JSON.
pub fn export(book: &AddressBook) -> CommandResult {
    let records: Vec<&Record> = book.records().collect();
    serde_json::to_string_pretty(&records).map_err(|e| CommandError::Export(e.to_string()))
}

/// `help`: usage of every command.
pub fn help() -> CommandResult {
    let mut out = String::from("Available commands:");
    for command in Command::all() {
        out.push_str("\n  ");
        out.push_str(command.usage());
    }
    Ok(out)
}
