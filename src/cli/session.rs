//! Interactive line-driven session
//!
//! Each input line is turned into an [`Action`] for the [`App`]; the list is
//! re-rendered after every change.

use crate::application::{Action, App, Outcome};
use crate::cli::output::{format_entry_list, format_form};
use crate::domain::EntryId;
use crate::error::Result;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  list                show all entries
  new                 open the form and fill in title and description
  title <text>        change the draft title
  description <text>  change the draft description
  add                 save the draft as a new entry
  close               discard the draft and close the form
  delete <id>         delete an entry
  help                show this help
  quit                leave
";

/// Run commands read from `input` until `quit` or end of input
pub fn run_session<R: BufRead, W: Write>(app: &mut App, mut input: R, out: &mut W) -> Result<()> {
    write!(out, "{}", format_entry_list(app.entries()))?;
    writeln!(out, "Type 'help' for commands.")?;

    loop {
        let Some(line) = prompt(&mut input, out, "> ")? else {
            break;
        };
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line.as_str(), ""),
        };

        match command {
            "" => {}
            "list" | "ls" => write!(out, "{}", format_entry_list(app.entries()))?,
            "new" => {
                app.dispatch(Action::OpenForm);
                let Some(title) = prompt(&mut input, out, "Title: ")? else {
                    app.dispatch(Action::DismissForm);
                    break;
                };
                app.dispatch(Action::EditTitle(title));
                let Some(description) = prompt(&mut input, out, "Description: ")? else {
                    app.dispatch(Action::DismissForm);
                    break;
                };
                app.dispatch(Action::EditDescription(description));
                write!(out, "{}", format_form(&app.screen().form))?;
                writeln!(out, "Type 'add' to save or 'close' to discard.")?;
            }
            "title" => {
                app.dispatch(Action::EditTitle(rest.to_string()));
                write!(out, "{}", format_form(&app.screen().form))?;
            }
            "description" => {
                app.dispatch(Action::EditDescription(rest.to_string()));
                write!(out, "{}", format_form(&app.screen().form))?;
            }
            "add" => match app.dispatch(Action::Submit) {
                Outcome::Added(id) => {
                    writeln!(out, "Added entry {}", id)?;
                    write!(out, "{}", format_entry_list(app.entries()))?;
                }
                _ => writeln!(out, "No form open. Use 'new' first.")?,
            },
            "close" => {
                app.dispatch(Action::DismissForm);
                writeln!(out, "Form closed")?;
            }
            "delete" | "rm" => {
                if rest.is_empty() {
                    writeln!(out, "Usage: delete <id>")?;
                    continue;
                }
                match app.dispatch(Action::Delete(EntryId::new(rest))) {
                    Outcome::Removed(id) => writeln!(out, "Deleted entry {}", id)?,
                    _ => writeln!(out, "No entry with id {}", rest)?,
                }
                write!(out, "{}", format_entry_list(app.entries()))?;
            }
            "help" | "?" => write!(out, "{}", HELP)?,
            "quit" | "exit" | "q" => break,
            other => writeln!(out, "Unknown command: {} (try 'help')", other)?,
        }
    }

    Ok(())
}

/// Print `label` and read one line without its line ending.
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
