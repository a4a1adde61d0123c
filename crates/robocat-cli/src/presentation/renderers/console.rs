use super::traits::Renderer;
use crate::presentation::view_models::CommandResultViewModel;
use crate::types::OutputFormat;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use is_terminal::IsTerminal;
use std::fmt::Display;

pub struct ConsoleRenderer {
    json_mode: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            json_mode: format == OutputFormat::Json,
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T: Serialize + Display + Send + Sync>(
        &self,
        result: CommandResultViewModel<T>,
    ) -> Result<()> {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        print!("{}", result.content);

        if !result.suggestions.is_empty() {
            let use_color = std::io::stdout().is_terminal();
            println!();
            if use_color {
                println!("{}", "Tips:".bold());
            } else {
                println!("Tips:");
            }
            for suggestion in &result.suggestions {
                match &suggestion.command {
                    Some(command) if use_color => {
                        println!("  {} {}", suggestion.description, command.cyan());
                    }
                    Some(command) => {
                        println!("  {} {}", suggestion.description, command);
                    }
                    None => {
                        println!("  {}", suggestion.description);
                    }
                }
            }
        }
        Ok(())
    }
}
