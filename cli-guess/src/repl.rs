use anyhow::Result;
use colored::*;
use rustyline::{Config, DefaultEditor, Result as RustylineResult};
use std::str::FromStr;
use tokio::sync::{mpsc, oneshot, watch};

use numguess::{Difficulty, SessionSnapshot};

use crate::config::ReplConfig;
use crate::render;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    // Round operations
    Guess(String),
    Hint,
    Reset,
    Difficulty(Difficulty),

    // Display
    Status,
    History { page: Option<usize> },
    Best,
    Help,

    Quit,
}

/// A command plus the channel its rendered answer comes back on
#[derive(Debug)]
pub struct CommandRequest {
    pub command: ReplCommand,
    pub reply: oneshot::Sender<Vec<String>>,
}

pub struct ReplInterface {
    editor: DefaultEditor,
    command_sender: mpsc::UnboundedSender<CommandRequest>,
    status_receiver: watch::Receiver<SessionSnapshot>,
    config: ReplConfig,
}

impl ReplInterface {
    pub fn new(
        command_sender: mpsc::UnboundedSender<CommandRequest>,
        status_receiver: watch::Receiver<SessionSnapshot>,
        config: ReplConfig,
    ) -> Result<Self> {
        let editor_config = Config::builder().max_history_size(config.max_history)?.build();
        let mut editor = DefaultEditor::with_config(editor_config)?;

        // Load history if configured
        if let Some(history_file) = &config.history_file {
            let _ = editor.load_history(history_file);
        }

        Ok(Self {
            editor,
            command_sender,
            status_receiver,
            config,
        })
    }

    /// Blocking read-eval-print loop; returns when the player quits or input closes
    pub fn run(&mut self) -> Result<()> {
        self.display_welcome();

        loop {
            self.display_prompt();

            let input = match self.read_input() {
                Ok(input) => input,
                Err(_) => {
                    println!("\nGoodbye!");
                    break;
                }
            };

            match parse_command(&input) {
                Ok(ReplCommand::Quit) => {
                    println!("Goodbye!");
                    break;
                }
                Ok(command) => {
                    let _ = self.editor.add_history_entry(input.trim());
                    match self.dispatch(command) {
                        Ok(lines) => lines.iter().for_each(|line| println!("{}", line)),
                        Err(e) => {
                            eprintln!("{}", format!("Error: {}", e).red());
                            break;
                        }
                    }
                }
                Err(e) => {
                    eprintln!("{}", format!("Error: {}", e).red());
                }
            }
        }

        // Save history if configured
        if let Some(history_file) = &self.config.history_file {
            let _ = self.editor.save_history(history_file);
        }

        Ok(())
    }

    fn dispatch(&self, command: ReplCommand) -> Result<Vec<String>> {
        let (reply, response) = oneshot::channel();
        self.command_sender
            .send(CommandRequest { command, reply })
            .map_err(|_| anyhow::anyhow!("game loop has stopped"))?;
        response
            .blocking_recv()
            .map_err(|_| anyhow::anyhow!("game loop dropped the command"))
    }

    fn display_welcome(&self) {
        let snapshot = self.status_receiver.borrow();
        println!("{}", "Welcome to numguess!".bright_blue().bold());
        println!("{}", render::instruction(snapshot.range_max).cyan());
        println!("{}", "Type 'help' for available commands".dimmed());
        println!();
    }

    fn display_prompt(&self) {
        let snapshot = self.status_receiver.borrow();
        println!("{}", render::status_line(&snapshot).dimmed());
    }

    fn read_input(&mut self) -> RustylineResult<String> {
        self.editor.readline(&self.config.prompt)
    }
}

pub fn parse_command(input: &str) -> Result<ReplCommand> {
    let trimmed = input.trim();
    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (trimmed, ""),
    };

    match (head.to_ascii_lowercase().as_str(), rest) {
        ("", _) => Err(anyhow::anyhow!("Empty command")),
        ("guess" | "g", text) => Ok(ReplCommand::Guess(text.to_string())),
        ("hint", "") => Ok(ReplCommand::Hint),
        ("reset" | "new", "") => Ok(ReplCommand::Reset),
        ("difficulty" | "level", "") => Err(anyhow::anyhow!("Usage: difficulty <easy|medium|hard>")),
        ("difficulty" | "level", name) => Difficulty::from_str(name)
            .map(ReplCommand::Difficulty)
            .map_err(|_| anyhow::anyhow!("Unknown difficulty: '{}'. Choose easy, medium or hard.", name)),
        ("status", "") => Ok(ReplCommand::Status),
        ("history", "") => Ok(ReplCommand::History { page: None }),
        ("history", page) => Ok(ReplCommand::History {
            page: Some(page.parse()?),
        }),
        ("best", "") => Ok(ReplCommand::Best),
        ("help", "") => Ok(ReplCommand::Help),
        ("quit" | "exit", "") => Ok(ReplCommand::Quit),
        _ if rest.is_empty() && head.parse::<i64>().is_ok() => Ok(ReplCommand::Guess(head.to_string())),
        _ => Err(anyhow::anyhow!(
            "Unknown command: '{}'. Type 'help' for available commands.",
            trimmed
        )),
    }
}
