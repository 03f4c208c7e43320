use anyhow::Result;
use a2a_relay::models::message::Message;

pub mod rustyline;

const EXIT_COMMANDS: [&str; 3] = ["quit", "exit", "q"];

pub trait Prompt {
    fn render(&mut self, message: Box<Message>);
    fn get_input(&mut self) -> Result<Input>;
    fn show_busy(&mut self);
    fn hide_busy(&self);
    fn relay_ready(&self, remote_url: &str) {
        println!();
        println!("A2A relay is connected to {}", remote_url);
        println!("Type 'quit' to exit");
        println!();
    }
}

#[derive(Debug, PartialEq)]
pub struct Input {
    pub input_type: InputType,
    pub content: Option<String>, // Only set for messages
}

#[derive(Debug, PartialEq)]
pub enum InputType {
    AskAgain, // Nothing to send, read again
    Message,  // User sent a message
    Exit,     // User wants to exit the session
}

impl Input {
    pub fn exit() -> Self {
        Input {
            input_type: InputType::Exit,
            content: None,
        }
    }

    pub fn ask_again() -> Self {
        Input {
            input_type: InputType::AskAgain,
            content: None,
        }
    }

    pub fn message<S: Into<String>>(content: S) -> Self {
        Input {
            input_type: InputType::Message,
            content: Some(content.into()),
        }
    }
}

/// Classify one raw line read from the operator
pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if EXIT_COMMANDS
        .iter()
        .any(|command| line.eq_ignore_ascii_case(command))
    {
        Input::exit()
    } else if line.is_empty() {
        Input::ask_again()
    } else {
        Input::message(line)
    }
}
