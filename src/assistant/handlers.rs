//! Command handlers for the assistant.

use super::command::{parse_input, Command};
use crate::error::{AddressBookError, CommandError, CommandResult};
use crate::models::Record;
use crate::repositories::{Directory, RecordRepository};
use tracing::debug;

/// What the assistant says back after a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and keep reading.
    Message(String),
    /// Print the message and stop.
    Exit(String),
    /// Nothing to print (blank input).
    Silent,
}

/// The command bot: owns a record store and answers one line at a time.
#[derive(Debug, Default)]
pub struct Assistant<R = Directory> {
    book: R,
}

impl<R: RecordRepository> Assistant<R> {
    /// Create an assistant over an existing store.
    pub fn new(book: R) -> Self {
        Self { book }
    }

    /// The underlying store.
    pub fn book(&self) -> &R {
        &self.book
    }

    /// Consume the assistant and return its store.
    pub fn into_book(self) -> R {
        self.book
    }

    /// Handle one line of input.
    ///
    /// Unknown commands are answered with `Invalid command.` rather than an error.
    pub fn handle(&mut self, line: &str) -> CommandResult<Reply> {
        let Some(parsed) = parse_input(line) else {
            return Ok(Reply::Silent);
        };
        let Some(command) = parsed.command else {
            return Ok(Reply::Message("Invalid command.".to_string()));
        };

        debug!(%command, args = parsed.args.len(), "Handling command");
        let args = &parsed.args;

        let message = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Add => self.add_contact(command, args)?,
            Command::Change => self.change_contact(command, args)?,
            Command::Phone => self.show_phone(command, args)?,
            Command::All => self.show_all(),
            Command::Close | Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
        };

        Ok(Reply::Message(message))
    }

    fn add_contact(&mut self, command: Command, args: &[String]) -> CommandResult<String> {
        let [name, phone, ..] = args else {
            return Err(CommandError::MissingArguments(command.usage()));
        };

        if let Some(record) = self.book.find_mut(name) {
            record.add_phone(phone)?;
            return Ok("Contact updated.".to_string());
        }

        let mut record = Record::new(name.as_str());
        record.add_phone(phone)?;
        self.book.add_record(record);
        Ok("Contact added.".to_string())
    }

    fn change_contact(&mut self, command: Command, args: &[String]) -> CommandResult<String> {
        let [name, old, new, ..] = args else {
            return Err(CommandError::MissingArguments(command.usage()));
        };

        let record = self
            .book
            .find_mut(name)
            .ok_or_else(|| AddressBookError::RecordNotFound(name.clone()))?;

        if !record.edit_phone(old, new)? {
            return Err(AddressBookError::PhoneNotFound(old.clone()).into());
        }
        Ok("Contact updated.".to_string())
    }

    fn show_phone(&self, command: Command, args: &[String]) -> CommandResult<String> {
        let [name, ..] = args else {
            return Err(CommandError::MissingArguments(command.usage()));
        };

        let record = self
            .book
            .find(name)
            .ok_or_else(|| AddressBookError::RecordNotFound(name.clone()))?;

        Ok(format!("{}: {}", record.name(), record.phones_display()))
    }

    fn show_all(&self) -> String {
        let records = self.book.records();
        if records.is_empty() {
            return "No contacts saved.".to_string();
        }

        records
            .iter()
            .map(|record| record.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
