//! REPL (Read-Eval-Print Loop) for interactive readings

use super::gate::DrawGate;
use crate::config::{OutputConfig, ReplConfig};
use crate::export::markdown::ReadingExporter;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::{ProgressReporter, SimpleProgress};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use tarot_application::{DrawReadingUseCase, ReadingProgressNotifier};
use tarot_domain::{Question, Reading};
use tracing::warn;

/// What a line typed at the prompt asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Deck,
    Save(Option<PathBuf>),
    Quit,
    Unknown(String),
    Question(String),
    Empty,
}

impl ReplCommand {
    /// Questions keep the line exactly as typed, like `deep-tarot "<question>"`.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return ReplCommand::Empty;
        }
        if !trimmed.starts_with('/') {
            return ReplCommand::Question(line.to_string());
        }
        let line = trimmed;

        let mut parts = line.splitn(2, char::is_whitespace);
        let cmd = parts.next().unwrap_or_default();
        let arg = parts.next().map(str::trim).filter(|s| !s.is_empty());

        match cmd {
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/deck" => ReplCommand::Deck,
            "/save" => ReplCommand::Save(arg.map(PathBuf::from)),
            _ => ReplCommand::Unknown(cmd.to_string()),
        }
    }
}

/// Interactive reading REPL
pub struct ReadingRepl<'a> {
    use_case: DrawReadingUseCase<'a>,
    output: OutputConfig,
    repl: ReplConfig,
    save_dir: PathBuf,
    gate: DrawGate,
    last_reading: Option<Reading>,
}

impl<'a> ReadingRepl<'a> {
    pub fn new(use_case: DrawReadingUseCase<'a>) -> Self {
        Self {
            use_case,
            output: OutputConfig::default(),
            repl: ReplConfig::default(),
            save_dir: PathBuf::from("."),
            gate: DrawGate::new(),
            last_reading: None,
        }
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn with_repl_config(mut self, repl: ReplConfig) -> Self {
        self.repl = repl;
        self
    }

    /// Share the in-progress flag with other callers of the same use case.
    ///
    /// The loop itself awaits each reading before reading the next line, so
    /// only a gate held elsewhere can turn a question away.
    pub fn with_gate(mut self, gate: DrawGate) -> Self {
        self.gate = gate;
        self
    }

    /// Default directory for `/save`
    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = dir.into();
        self
    }

    pub fn last_reading(&self) -> Option<&Reading> {
        self.last_reading.as_ref()
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.repl.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline("🔮 ") {
                Ok(line) => {
                    let command = ReplCommand::parse(&line);
                    if let ReplCommand::Question(_) = command {
                        let _ = rl.add_history_entry(line.trim());
                    }
                    if self.handle(command).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path
            && let Err(e) = rl.save_history(path)
        {
            warn!("Could not save history to {}: {}", path.display(), e);
        }

        Ok(())
    }

    /// Execute one command. Returns true if the REPL should exit.
    pub async fn handle(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Empty => false,
            ReplCommand::Quit => {
                println!("Bye!");
                true
            }
            ReplCommand::Help => {
                Self::print_help();
                false
            }
            ReplCommand::Deck => {
                println!();
                print!(
                    "{}",
                    ConsoleFormatter::format_deck(self.use_case.selector().catalog())
                );
                println!();
                false
            }
            ReplCommand::Save(dir) => {
                self.save(dir);
                false
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
            ReplCommand::Question(text) => {
                self.process_question(text).await;
                false
            }
        }
    }

    fn print_welcome(&self) {
        println!();
        println!(
            "{}",
            "╭─────────────────────────────────────────────╮".magenta()
        );
        println!(
            "{}",
            "│        Deep Tarot - Interactive Mode        │"
                .magenta()
                .bold()
        );
        println!(
            "{}",
            "╰─────────────────────────────────────────────╯".magenta()
        );
        println!();
        println!("Ask a question and three cards will be drawn for you.");
        println!("Model: {}", self.use_case.reading_params().model);
        Self::print_help();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!("  /deck             - List the cards in the deck");
        println!("  /save [DIR]       - Save the last reading as markdown");
        println!("  /quit, /exit, /q  - Exit");
        println!();
    }

    fn save(&self, dir: Option<PathBuf>) {
        let Some(reading) = &self.last_reading else {
            println!("Nothing to save yet. Ask a question first.");
            return;
        };

        let exporter = ReadingExporter::new(dir.unwrap_or_else(|| self.save_dir.clone()));
        match exporter.export(reading) {
            Ok(path) => println!("Saved to {}", path.display()),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    async fn process_question(&mut self, text: String) {
        let question = match Question::try_new(text) {
            Ok(q) => q,
            Err(e) => {
                eprintln!("Error: {}", e);
                return;
            }
        };

        let Some(_guard) = self.gate.try_begin() else {
            println!("A reading is already in progress.");
            return;
        };

        println!();
        let progress: Box<dyn ReadingProgressNotifier> = if self.repl.show_progress {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(SimpleProgress)
        };
        let reading = self.use_case.execute(question, progress.as_ref()).await;

        println!("{}", ConsoleFormatter::render(&reading, self.output.format));
        self.last_reading = Some(reading);
    }
}
