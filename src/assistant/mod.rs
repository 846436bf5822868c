//! Interactive command assistant over the address book.
//!
//! The assistant reads one command per line, answers each one, and keeps
//! going after failures: errors are reported to the user instead of ending
//! the session.

pub mod command;
pub mod handlers;

pub use command::{parse_input, Command, ParsedInput};
pub use handlers::{Assistant, Reply};

use crate::repositories::RecordRepository;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Run the assistant until an exit command or end of input.
///
/// # Arguments
/// * `assistant` - The assistant that answers commands
/// * `input` - Source of command lines
/// * `output` - Destination for prompts and replies
/// * `prompt` - Text written before each line is read
///
/// # Returns
/// An error only if reading or writing fails
pub fn run_session<R, I, O>(
    assistant: &mut Assistant<R>,
    input: I,
    mut output: O,
    prompt: &str,
) -> Result<()>
where
    R: RecordRepository,
    I: BufRead,
    O: Write,
{
    writeln!(output, "Welcome to the assistant bot!")?;
    let mut lines = input.lines();

    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            info!("Input closed, ending session");
            break;
        };

        match assistant.handle(&line?) {
            Ok(Reply::Message(msg)) => writeln!(output, "{}", msg)?,
            Ok(Reply::Exit(msg)) => {
                writeln!(output, "{}", msg)?;
                break;
            }
            Ok(Reply::Silent) => {}
            Err(e) => {
                warn!("Command failed: {}", e);
                writeln!(output, "{}", e)?;
            }
        }
    }

    Ok(())
}
