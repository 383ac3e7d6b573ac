use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use cybertron::analysis::{Analysis, CommentAnalyzer};
use cybertron::config::{Config, TranslatorBackend};
use cybertron::console::{self, Input};
use cybertron::output::chart::{render_chart, DEFAULT_HEIGHT};
use cybertron::output::{terminal, truncate_chars};
use cybertron::sentiment::lexicon::LexiconScorer;
use cybertron::sentiment::traits::SentimentScorer;
use cybertron::sentiment::vader::VaderScorer;
use cybertron::session::export;
use cybertron::session::models::CommentRecord;
use cybertron::session::Session;
use cybertron::translate::google::GoogleTranslator;
use cybertron::translate::traits::{PassthroughTranslator, Translator};

/// Cybertron: comment moderation console.
///
/// Masks blocked words, redacts negative comments, labels sentiment, and
/// translates non-English comments before analysis.
#[derive(Parser)]
#[command(name = "cybertron", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive moderation session
    Session {
        /// Treat every comment as English (no translation requests)
        #[arg(long)]
        no_translate: bool,
    },

    /// Analyze a single comment: detect, translate, mask, classify
    Analyze {
        /// The comment text
        #[arg(required = true)]
        text: Vec<String>,

        /// Treat the comment as English (no translation requests)
        #[arg(long)]
        no_translate: bool,
    },

    /// Mask a comment offline (blocked words + negative redaction)
    Mask {
        /// The comment text
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Show sentiment scores for a comment
    Score {
        /// The comment text
        #[arg(required = true)]
        text: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so they don't interleave with console output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cybertron=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    config.validate()?;

    match cli.command {
        Commands::Session { no_translate } => {
            run_session(&config, no_translate).await?;
        }

        Commands::Analyze { text, no_translate } => {
            let analyzer = create_analyzer(&config, no_translate)?;
            let text = text.join(" ");

            let analysis = match analyzer.analyze(&text).await {
                Ok(analysis) => analysis,
                Err(e) => {
                    warn!(kind = ?e.kind(), error = %e, "Comment analysis failed");
                    println!("{}", format!("Analysis failed: {e}").dimmed());
                    Analysis::failed()
                }
            };
            terminal::display_analysis(&CommentRecord::new(text, analysis));
        }

        Commands::Mask { text } => {
            let scorer = create_scorer(&config)?;
            let sanitizer = config.sanitizer();
            let text = text.join(" ");

            println!("{}", sanitizer.mask_bad_comment(&text, scorer.as_ref()));
            if sanitizer.profanity.contains_profanity(&text) {
                println!("{}", "Blocked words found.".dimmed());
            }
        }

        Commands::Score { text } => {
            let scorer = create_scorer(&config)?;
            let text = text.join(" ");

            println!("Scores for \"{}\":", truncate_chars(&text, 80));
            terminal::display_scores(&scorer.polarity_scores(&text));
        }
    }

    Ok(())
}

/// Run the interactive loop until `:quit` or end of input.
///
/// Stdin and the auto-save timer are multiplexed on this one task, so the
/// session is never shared and needs no locking.
async fn run_session(config: &Config, no_translate: bool) -> Result<()> {
    let analyzer = create_analyzer(config, no_translate)?;
    let mut session = Session::new(config.negative_limit);

    println!("{}", "=== Cybertron comment moderation ===".bold());
    println!("{}", console::HELP.dimmed());
    println!(
        "{}",
        format!(
            "Auto-saving to {} every {}s.",
            config.autosave_path.display(),
            config.autosave_interval.as_secs()
        )
        .dimmed()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut autosave_timer = tokio::time::interval(config.autosave_interval);
    // The first tick completes immediately; an empty session has nothing to save
    autosave_timer.tick().await;

    prompt();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    break;
                };
                if !handle_input(&line, &analyzer, &mut session).await {
                    break;
                }
                prompt();
            }
            _ = autosave_timer.tick() => {
                run_autosave(&session, &config.autosave_path);
            }
        }
    }

    run_autosave(&session, &config.autosave_path);
    info!(comments = session.len(), "Session ended");
    Ok(())
}

/// Handle one line of input. Returns false when the session should end.
async fn handle_input(line: &str, analyzer: &CommentAnalyzer, session: &mut Session) -> bool {
    match console::parse_input(line) {
        Input::Comment(comment) => {
            if let Some(submission) = console::submit(analyzer, session, &comment).await {
                terminal::display_analysis(&submission.record);
                terminal::display_history(session.records());
                show_chart(analyzer, session);
                if let Some(warning) = submission.warning {
                    terminal::display_warning(&warning);
                }
            }
        }
        Input::History => terminal::display_history(session.records()),
        Input::Chart => show_chart(analyzer, session),
        Input::Save(path) => match export::write_text(session.records(), &path) {
            Ok(()) => println!(
                "{}",
                format!("Comment history saved to {}", path.display()).green()
            ),
            Err(e) => println!("{} {e:#}", "Error:".red().bold()),
        },
        Input::Export(path) => match export::write_csv(session.records(), &path) {
            Ok(()) => println!(
                "{}",
                format!("Comment history exported to {}", path.display()).green()
            ),
            Err(e) => println!("{} {e:#}", "Error:".red().bold()),
        },
        Input::Help => println!("{}", console::HELP),
        Input::Invalid(message) => println!("{}", message.yellow()),
        Input::Empty => {}
        Input::Quit => return false,
    }
    true
}

fn show_chart(analyzer: &CommentAnalyzer, session: &Session) {
    let series = session.sentiment_series(analyzer.scorer());
    terminal::display_chart(&render_chart(&series, DEFAULT_HEIGHT));
}

fn run_autosave(session: &Session, path: &Path) {
    match export::autosave(session.records(), path) {
        Ok(true) => info!(comments = session.len(), path = %path.display(), "Auto-saved history"),
        Ok(false) => {}
        Err(e) => warn!(error = %e, "Auto-save failed"),
    }
}

fn prompt() {
    print!("{} ", ">".bold());
    let _ = std::io::stdout().flush();
}

/// Create the sentiment scorer: the configured lexicon file if any,
/// otherwise the full VADER model.
fn create_scorer(config: &Config) -> Result<Box<dyn SentimentScorer>> {
    match &config.lexicon_path {
        Some(path) => {
            info!(path = %path.display(), "Using lexicon file");
            Ok(Box::new(LexiconScorer::load(path)?))
        }
        None => Ok(Box::new(VaderScorer::new())),
    }
}

/// Create the translator based on the configured backend.
fn create_translator(config: &Config, no_translate: bool) -> Result<Box<dyn Translator>> {
    if no_translate || config.translator_backend == TranslatorBackend::Off {
        info!("Translation disabled, treating comments as English");
        return Ok(Box::new(PassthroughTranslator));
    }

    let translator = GoogleTranslator::new(&config.translate_url, config.request_timeout)?;
    Ok(Box::new(translator))
}

fn create_analyzer(config: &Config, no_translate: bool) -> Result<CommentAnalyzer> {
    Ok(CommentAnalyzer::new(
        create_scorer(config)?,
        create_translator(config, no_translate)?,
        config.sanitizer(),
    ))
}
