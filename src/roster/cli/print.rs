use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel};
use roster::commands::CmdResult;
use roster::error::RosterError;
use std::io::{self, Write};

pub(crate) const LIST_HEADER: &str = "--- List of All Students ---";

pub(crate) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(crate) fn print_records<W: Write>(out: &mut W, result: &CmdResult) -> io::Result<()> {
    for line in result.display_lines() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub(crate) fn print_list<W: Write>(out: &mut W, result: &CmdResult) -> io::Result<()> {
    if !result.listed_records.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", LIST_HEADER.bold())?;
    }
    print_records(out, result)?;
    print_messages(out, &result.messages)
}

/// Messages shown for a failed operation. Not found keeps the classic wording;
/// an unsaved change also warns that memory and disk now differ.
pub(crate) fn error_messages(err: &RosterError) -> Vec<CmdMessage> {
    match err {
        RosterError::NotFound(_) => vec![CmdMessage::error("Student not found.")],
        RosterError::Unsaved(_) => vec![
            CmdMessage::error(format!("Error: {}", err)),
            CmdMessage::warning(
                "The change is only in memory; the records file still holds the previous data.",
            ),
        ],
        other => vec![CmdMessage::error(format!("Error: {}", other))],
    }
}

pub(crate) fn print_error<W: Write>(out: &mut W, err: &RosterError) -> io::Result<()> {
    print_messages(out, &error_messages(err))
}
