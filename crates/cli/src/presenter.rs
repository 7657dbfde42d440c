//! Console presenter
//!
//! Renders hook lifecycle events to stdout with colors. Formatting lives
//! entirely here; the engine only decides *what* to report.

use gancho_engine::{CommandState, Presenter};
use owo_colors::OwoColorize;
use std::io::Write;

/// Presenter writing colorized status lines to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn state(&mut self, state: &CommandState<'_>) {
        match state {
            CommandState::Running(command) => {
                println!("⏳ Running {command}");
            }
            CommandState::Success(command) => {
                println!(
                    " {} {} {}\n",
                    "✔".green(),
                    command,
                    "has been successfully executed".green()
                );
            }
            CommandState::Error(command, code) => {
                println!(
                    "❌ {} {}\n",
                    command,
                    format!("has failed with error {code}").red()
                );
            }
            CommandState::NotCritical(command, code) => {
                println!(
                    "⚠️  {} {}\n",
                    command,
                    format!("has failed with error {code}").yellow()
                );
            }
        }
    }

    fn output(&mut self, text: &str, newline: bool) {
        if newline {
            println!("{text}");
        } else {
            print!("{text}");
            // Streamed chunks must appear immediately
            let _ = std::io::stdout().flush();
        }
    }
}
