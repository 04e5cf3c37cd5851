//! CLI entrypoint for Deep Tarot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tarot_application::{
    DrawReadingUseCase, GenerateReadingUseCase, NoProgress, ReadingParams,
    ReadingProgressNotifier,
};
use tarot_domain::{Catalog, OutputFormat, Question, Selector};
use tarot_infrastructure::{ConfigLoader, GeminiConfig, GeminiLlmGateway, TemplateLoader};
use tarot_presentation::{
    Cli, ConsoleFormatter, OutputConfig, ProgressReporter, ReadingExporter, ReadingRepl,
    ReplConfig, set_color_enabled,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    if let Some(model) = &cli.model {
        config.gemini.model = model.clone();
    }
    let config = ConfigLoader::validated(config).context("Invalid configuration")?;

    info!("Starting Deep Tarot");

    let output = OutputConfig {
        format: cli
            .output
            .map(OutputFormat::from)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color,
    };
    set_color_enabled(output.color);

    let template = TemplateLoader::load_or_default(config.reading.template_path.as_deref())
        .context("Failed to load prompt template")?;
    let params = ReadingParams::new(config.gemini.parse_model(), template);

    // === Dependency Injection ===
    let gateway = Arc::new(GeminiLlmGateway::new(GeminiConfig::from_file_config(
        &config.gemini,
    ))?);
    let selector = Selector::new(Catalog::standard())?;
    let use_case = DrawReadingUseCase::new(selector, GenerateReadingUseCase::new(gateway, params));

    // Interactive mode
    if cli.interactive {
        let repl_config = ReplConfig {
            show_progress: config.repl.show_progress && !cli.quiet,
            history_file: config.repl.history_file.as_ref().map(PathBuf::from),
        };
        let mut repl = ReadingRepl::new(use_case)
            .with_output(output)
            .with_repl_config(repl_config)
            .with_save_dir(cli.save.unwrap_or_else(|| PathBuf::from(".")));

        repl.run().await?;
        return Ok(());
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => Question::try_new(q)?,
        None => bail!("Question is required. Use --interactive for interactive mode."),
    };

    let progress: Box<dyn ReadingProgressNotifier> =
        if cli.quiet || !config.repl.show_progress || output.format == OutputFormat::Json {
            Box::new(NoProgress)
        } else {
            Box::new(ProgressReporter::new())
        };

    let reading = use_case.execute(question, progress.as_ref()).await;

    println!("{}", ConsoleFormatter::render(&reading, output.format));

    if let Some(dir) = cli.save {
        let path = ReadingExporter::new(dir).export(&reading)?;
        eprintln!("Saved to {}", path.display());
    }

    Ok(())
}
