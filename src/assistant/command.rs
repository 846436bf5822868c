//! Command parsing for the assistant.

use std::fmt;
use std::str::FromStr;

/// A command keyword understood by the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    Close,
    Exit,
}

impl Command {
    /// Every command, in help order.
    pub const ALL: [Command; 7] = [
        Command::Hello,
        Command::Add,
        Command::Change,
        Command::Phone,
        Command::All,
        Command::Close,
        Command::Exit,
    ];

    /// The keyword typed by the user.
    pub fn keyword(self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::Close => "close",
            Command::Exit => "exit",
        }
    }

    /// Usage hint shown when arguments are missing.
    pub fn usage(self) -> &'static str {
        match self {
            Command::Add => "Give me name and phone please.",
            Command::Change => "Give me name, old phone and new phone please.",
            Command::Phone => "Enter user name.",
            _ => "",
        }
    }

    /// Whether this command ends the session.
    pub fn is_terminal(self) -> bool {
        matches!(self, Command::Close | Command::Exit)
    }
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let keyword = s.trim().to_lowercase();
        Command::ALL
            .into_iter()
            .find(|cmd| cmd.keyword() == keyword)
            .ok_or(())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A line of user input split into keyword and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// The recognized command, or `None` for an unknown keyword.
    pub command: Option<Command>,
    pub args: Vec<String>,
}

/// Split a line into a command and whitespace separated arguments.
///
/// Returns `None` for blank input.
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut parts = line.split_whitespace();
    let keyword = parts.next()?;

    Some(ParsedInput {
        command: keyword.parse().ok(),
        args: parts.map(str::to_string).collect(),
    })
}
