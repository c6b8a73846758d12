//! Command-line content editor

mod commands;
mod editor;
mod repl;
mod session;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use edita_prompt::{ContentType, EditingMode, FocusArea, PromptCatalog};
use edita_utils::Config;
use editor::{ContentEditor, EditRequest};
use repl::Repl;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "edita")]
#[command(about = "AI-assisted content editing", long_about = None)]
struct Cli {
    /// Prompt file to use instead of the configured one
    #[arg(long, global = true)]
    prompts: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Edit one piece of content read from a file or stdin
    Edit {
        /// Read content from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Editing mode
        #[arg(short, long, default_value_t = EditingMode::default())]
        mode: EditingMode,
        /// Kind of content
        #[arg(short = 't', long, default_value_t = ContentType::default())]
        content_type: ContentType,
        /// Focus area for the specific_issue mode; repeatable
        #[arg(long = "focus")]
        focus: Vec<FocusArea>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the sections of the prompt file
    Prompts,
    /// List editing modes, focus areas and content types
    Modes,
    /// Start an interactive editing session
    Session,
}

#[tokio::main]
async fn main() -> Result<()> {
    edita_utils::init_tracing_with("warn");

    let cli = Cli::parse();

    match cli.command {
        Commands::Edit {
            file,
            mode,
            content_type,
            focus,
            json,
        } => {
            let editor = ContentEditor::load(load_config(cli.prompts)?);
            let content = read_content(file.as_ref())?;

            let request = EditRequest {
                content,
                mode,
                content_type,
                focus_areas: focus,
            };
            let result = editor.respond(&request).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{result}");
            }
        }
        Commands::Prompts => {
            let path = cli.prompts.unwrap_or_else(Config::prompts_path_from_env);
            let catalog = PromptCatalog::load(&path)?;

            println!("Prompt file: {}", path.display());
            println!("Sections:");
            for section in catalog.sections() {
                println!("  {section}");
            }
            println!("Modes:");
            for mode in EditingMode::ALL {
                let marker = if catalog.has_instructions_for(mode) { "+" } else { "-" };
                println!("  {marker} {}", mode.key());
            }
        }
        Commands::Modes => {
            println!("Editing modes:");
            for mode in EditingMode::ALL {
                println!("  {:<16} {}", mode.key(), mode.label());
            }
            println!("Focus areas:");
            for area in FocusArea::ALL {
                println!("  {:<16} {}", area.key(), area.label());
            }
            println!("Content types:");
            for content_type in ContentType::ALL {
                println!("  {content_type}");
            }
        }
        Commands::Session => {
            let mut editor = ContentEditor::load(load_config(cli.prompts)?);
            info!("Starting editing session");

            println!("ContentFlow editing session. Type /help for commands.\n");
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            Repl::new(&mut editor).run(stdin.lock(), &mut stdout).await?;
        }
    }

    Ok(())
}

fn load_config(prompts: Option<PathBuf>) -> Result<Config> {
    let mut config = Config::from_env()?;
    if let Some(path) = prompts {
        config.prompts_path = path;
    }
    Ok(config)
}

fn read_content(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        }
    }
}
