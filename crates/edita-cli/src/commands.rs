//! Command parsing for the interactive session

use anyhow::{Result, anyhow, bail};
use edita_prompt::{ContentType, EditingMode, FocusArea};

/// Line that ends a multi-line content block
pub const END_OF_CONTENT: &str = ".";

/// Parsed line of session input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Switch the editing mode
    Mode(EditingMode),
    /// Switch the content type
    Type(ContentType),
    /// Replace the focus areas; empty clears them
    Focus(Vec<FocusArea>),
    /// Show earlier exchanges
    History,
    /// Forget the conversation
    Clear,
    /// Re-read the prompt file
    Reload,
    /// Show help
    Help,
    /// Leave the session
    Exit,
    /// First line of content to edit
    Content(String),
}

impl Command {
    /// Parse a command from user input
    ///
    /// Content lines are kept verbatim, including leading indentation.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            bail!("Empty input");
        }

        let Some(rest) = trimmed.strip_prefix('/') else {
            return Ok(Command::Content(input.to_string()));
        };

        let parts: Vec<&str> = rest
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .collect();
        let Some((cmd, args)) = parts.split_first() else {
            bail!("Empty command");
        };

        match cmd.to_lowercase().as_str() {
            "mode" | "m" => {
                let key = args
                    .first()
                    .ok_or_else(|| anyhow!("Missing mode. Options: {}", keys(&EditingMode::ALL)))?;
                Ok(Command::Mode(key.parse()?))
            }
            "type" | "t" => {
                let key = args.first().ok_or_else(|| {
                    anyhow!("Missing content type. Options: {}", keys(&ContentType::ALL))
                })?;
                Ok(Command::Type(key.parse()?))
            }
            "focus" | "f" => {
                let areas = args
                    .iter()
                    .map(|a| a.parse::<FocusArea>())
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Command::Focus(areas))
            }
            "history" | "hist" => Ok(Command::History),
            "clear" | "cls" => Ok(Command::Clear),
            "reload" => Ok(Command::Reload),
            "help" | "h" | "?" => Ok(Command::Help),
            "exit" | "quit" | "q" => Ok(Command::Exit),
            other => bail!("Unknown command: /{other}"),
        }
    }

    /// Get help text for all commands
    pub fn help_text() -> String {
        format!(
            r"
Session Commands
================

  /mode <mode>           Switch editing mode ({modes})
  /type <type>           Switch content type ({types})
  /focus <area>...       Set focus areas for specific_issue mode; no areas clears them
  /history               Show earlier edits
  /clear                 Forget the conversation
  /reload                Re-read the prompt file
  /help                  Show this help
  /exit                  Leave the session

Anything else starts a content block. Finish it with a line containing only '{END_OF_CONTENT}'.
",
            modes = keys(&EditingMode::ALL),
            types = keys(&ContentType::ALL),
        )
    }
}

fn keys<T: std::fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
