//! Interactive input layer for the instruction shell.
//!
//! Owns the prompt, line editing, history, and the classification of typed
//! lines into shell inputs: an instruction to compile, a `:command`, or a
//! session-control event (EOF, interrupt). The REPL loop in `main` consumes
//! [`ShellInput`] values and never touches rustyline directly.
//!
//! Only instructions enter history — `:commands` and blank lines are not
//! worth cycling back to. History lives in `~/.mandato_history`.

use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor, EditMode};
use std::path::PathBuf;

const PROMPT: &str = "mandato> ";
const HISTORY_FILE: &str = ".mandato_history";
const MAX_HISTORY: usize = 500;

/// One classified line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellInput {
    /// Free text to hand to the compiler.
    Instruction(String),
    /// A `:command` (or the bare word `exit`).
    Command(ShellCommand),
    /// Blank line; the loop re-prompts.
    Empty,
    /// Ctrl-C; the loop re-prompts.
    Interrupted,
    /// Ctrl-D or closed stdin; the loop ends.
    Eof,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    Json,
    Quit,
    Unknown(String),
}

/// Classify one trimmed line. Pure, so the dispatch is testable without a
/// terminal.
pub fn classify_line(line: &str) -> ShellInput {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ShellInput::Empty;
    }
    if trimmed == "exit" {
        return ShellInput::Command(ShellCommand::Quit);
    }
    if let Some(rest) = trimmed.strip_prefix(':') {
        let command = match rest {
            "help" | "h" => ShellCommand::Help,
            "json" | "j" => ShellCommand::Json,
            "quit" | "q" => ShellCommand::Quit,
            other => ShellCommand::Unknown(other.to_string()),
        };
        return ShellInput::Command(command);
    }
    ShellInput::Instruction(trimmed.to_string())
}

/// The interactive shell: a rustyline editor plus instruction history.
pub struct Shell {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl Shell {
    /// Set up the editor with Emacs keybindings and load prior history.
    /// A missing or unreadable history file means empty history.
    pub fn new() -> Self {
        let config = Config::builder()
            .edit_mode(EditMode::Emacs)
            .max_history_size(MAX_HISTORY)
            .expect("history size fits")
            .auto_add_history(false)
            .build();
        let mut editor = DefaultEditor::with_config(config).expect("terminal editor");

        let history_path =
            std::env::var_os("HOME").map(|home| PathBuf::from(home).join(HISTORY_FILE));
        if let Some(ref path) = history_path {
            let _ = editor.load_history(path);
        }

        Shell {
            editor,
            history_path,
        }
    }

    /// Read and classify the next line of input. Instructions are recorded
    /// in history; commands and blank lines are not.
    pub fn next_input(&mut self) -> ShellInput {
        let input = match self.editor.readline(PROMPT) {
            Ok(line) => classify_line(&line),
            Err(ReadlineError::Interrupted) => ShellInput::Interrupted,
            Err(_) => ShellInput::Eof,
        };
        if let ShellInput::Instruction(ref text) = input {
            let _ = self.editor.add_history_entry(text);
            if let Some(ref path) = self.history_path {
                let _ = self.editor.save_history(path);
            }
        }
        input
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
