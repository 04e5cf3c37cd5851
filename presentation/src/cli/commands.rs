//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tarot_domain::OutputFormat as DomainOutputFormat;

/// Output format for readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Header, drawn cards with icons, then the reading
    Text,
    /// Only the reading text
    Plain,
    /// JSON object with question, cards and text
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => DomainOutputFormat::Text,
            OutputFormat::Plain => DomainOutputFormat::Plain,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for deep-tarot
#[derive(Parser, Debug)]
#[command(name = "deep-tarot")]
#[command(author, version, about = "Deep Tarot - Dialogue with the Subconscious")]
#[command(long_about = r#"
Deep Tarot draws three cards from a 78-card deck and asks a language model
to read them against your question.

Configuration files are loaded from (in priority order):
1. DEEP_TAROT_* environment variables (e.g. DEEP_TAROT_GEMINI__MODEL)
2. --config <path>     Explicit config file
3. ./tarot.toml        Project-level config
4. ~/.config/deep-tarot/config.toml   Global config

The API key is read from the environment variable named by
gemini.api_key_env (default: API_KEY).

Example:
  deep-tarot "What's weighing on my mind right now?"
  deep-tarot -o json "Should I take the job?"
  deep-tarot --interactive
"#)]
pub struct Cli {
    /// The question to ask the cards (not required in interactive mode)
    pub question: Option<String>,

    /// Start interactive mode
    #[arg(short, long)]
    pub interactive: bool,

    /// Model to generate the reading with
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Save the reading as markdown into DIR (default: current directory)
    #[arg(long, value_name = "DIR", num_args = 0..=1, default_missing_value = ".")]
    pub save: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_question_and_flags() {
        let cli = Cli::parse_from(["deep-tarot", "-vv", "-o", "json", "Will I find love?"]);
        assert_eq!(cli.question.as_deref(), Some("Will I find love?"));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(!cli.interactive);
        assert!(cli.save.is_none());
    }

    #[test]
    fn test_save_without_dir_defaults_to_cwd() {
        let cli = Cli::parse_from(["deep-tarot", "Q?", "--save"]);
        assert_eq!(cli.save, Some(PathBuf::from(".")));

        let cli = Cli::parse_from(["deep-tarot", "--save", "out", "Q?"]);
        assert_eq!(cli.save, Some(PathBuf::from("out")));
        assert_eq!(cli.question.as_deref(), Some("Q?"));
    }

    #[test]
    fn test_output_format_maps_to_domain() {
        assert_eq!(
            DomainOutputFormat::from(OutputFormat::Plain),
            DomainOutputFormat::Plain
        );
    }
}
