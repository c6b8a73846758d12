//! Interactive editing session over any line-based input

use crate::commands::{Command, END_OF_CONTENT};
use crate::editor::ContentEditor;
use crate::session::Session;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

/// Outcome of one handled command
enum Flow {
    Continue,
    Exit,
}

/// Drives a [`Session`] against a [`ContentEditor`]
pub struct Repl<'a> {
    editor: &'a mut ContentEditor,
    session: Session,
}

impl<'a> Repl<'a> {
    /// Create a session for the editor
    pub fn new(editor: &'a mut ContentEditor) -> Self {
        Self {
            editor,
            session: Session::new(),
        }
    }

    fn prompt(&self) -> String {
        format!(
            "[{} | {}]> ",
            self.session.mode.key(),
            self.session.content_type.key()
        )
    }

    /// Read commands until `/exit` or end of input
    ///
    /// Command failures are written to `out` and the loop continues.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        let mut lines = input.lines();

        loop {
            write!(out, "{}", self.prompt())?;
            out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(out, "\nGoodbye!")?;
                break;
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match Command::parse(&line) {
                Ok(Command::Content(first)) => {
                    let mut block = vec![first];
                    for next in lines.by_ref() {
                        let next = next?;
                        if next.trim() == END_OF_CONTENT {
                            break;
                        }
                        block.push(next);
                    }
                    Command::Content(block.join("\n"))
                }
                Ok(command) => command,
                Err(e) => {
                    writeln!(out, "Error: {e}\n")?;
                    continue;
                }
            };

            match self.handle(command, out).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    writeln!(out, "Goodbye!")?;
                    break;
                }
                Err(e) => writeln!(out, "Error: {e:#}\n")?,
            }
        }

        Ok(())
    }

    async fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        debug!(?command, "Session command");

        match command {
            Command::Mode(mode) => {
                self.session.mode = mode;
                writeln!(out, "Mode: {}\n", mode.label())?;
            }
            Command::Type(content_type) => {
                self.session.content_type = content_type;
                writeln!(out, "Content type: {content_type}\n")?;
            }
            Command::Focus(areas) => {
                if areas.is_empty() {
                    writeln!(out, "Focus areas cleared\n")?;
                } else {
                    let labels: Vec<&str> = areas.iter().map(|a| a.label()).collect();
                    writeln!(out, "Focus areas: {}\n", labels.join(", "))?;
                }
                self.session.focus_areas = areas;
            }
            Command::History => {
                let history = self.session.history();
                if history.is_empty() {
                    writeln!(out, "No earlier edits\n")?;
                }
                for (i, exchange) in history.iter().enumerate() {
                    writeln!(out, "--- Edit {} ---", i + 1)?;
                    writeln!(out, "Original:\n{}", exchange.original)?;
                    writeln!(out, "Edited:\n{}\n", exchange.edited)?;
                }
            }
            Command::Clear => {
                if self.session.is_empty() {
                    writeln!(out, "Nothing to clear\n")?;
                } else {
                    let count = self.session.len();
                    self.session.clear();
                    writeln!(out, "Conversation cleared ({count} messages)\n")?;
                }
            }
            Command::Reload => {
                self.editor.reload_prompts()?;
                let sections = self.editor.catalog().sections().len();
                writeln!(out, "Prompts reloaded ({sections} sections)\n")?;
            }
            Command::Help => writeln!(out, "{}", Command::help_text())?,
            Command::Exit => return Ok(Flow::Exit),
            Command::Content(content) => {
                let request = self.session.request(content);
                self.session.record_request(request.clone());

                match self.editor.respond(&request).await {
                    Ok(result) => {
                        self.session.record_response(result.into_final_output());
                        if let Some(response) = self.session.latest_response() {
                            writeln!(out, "{response}\n")?;
                        }
                    }
                    Err(e) => {
                        self.session.discard_pending();
                        return Err(e);
                    }
                }
            }
        }

        Ok(Flow::Continue)
    }
}
