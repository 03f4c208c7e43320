use std::io::{self, Write};

use anyhow::Result;
use bat::WrappingMode;
use cliclack::spinner;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use a2a_relay::models::message::Message;

use super::{parse_input, Input, Prompt};

const PROMPT: &str = "You: ";
const BUSY_MESSAGE: &str = "Processing your request...";
const THEME: &str = "zenburn";

pub struct RustylinePrompt {
    // Opened on the first read; batch runs never need it
    editor: Option<DefaultEditor>,
    spinner: cliclack::ProgressBar,
}

impl RustylinePrompt {
    pub fn new() -> Self {
        RustylinePrompt {
            editor: None,
            spinner: spinner(),
        }
    }
}

impl Default for RustylinePrompt {
    fn default() -> Self {
        Self::new()
    }
}

fn print_markdown(content: &str) {
    let printed = bat::PrettyPrinter::new()
        .input(bat::Input::from_bytes(content.as_bytes()))
        .theme(THEME)
        .language("Markdown")
        .wrapping_mode(WrappingMode::Character)
        .print();
    if printed.is_err() {
        print!("{}", content);
    }
}

impl Prompt for RustylinePrompt {
    fn render(&mut self, message: Box<Message>) {
        print_markdown(&message.text());
        println!();
        let _ = io::stdout().flush();
    }

    fn show_busy(&mut self) {
        self.spinner = spinner();
        self.spinner.start(BUSY_MESSAGE);
    }

    fn hide_busy(&self) {
        self.spinner.stop("");
    }

    fn get_input(&mut self) -> Result<Input> {
        if self.editor.is_none() {
            self.editor = Some(DefaultEditor::new()?);
        }
        let Some(editor) = self.editor.as_mut() else {
            return Ok(Input::exit());
        };

        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                Ok(parse_input(&line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(Input::exit()),
            Err(e) => {
                eprintln!("Input error: {}", e);
                Ok(Input::exit())
            }
        }
    }
}
