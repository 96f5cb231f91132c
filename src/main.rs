//! SignBridge - text to sign language
//!
//! Command line front end for translation, tutoring, learning mode and
//! vocabulary audits.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use signbridge::audit;
use signbridge::config::Config;
use signbridge::core::{classify, Language, SignResolver, Translator};
use signbridge::history::HistoryStore;
use signbridge::learn;
use signbridge::lexicon::{AssetStore, Lexicon};
use signbridge::tables::SynonymTable;
use signbridge::tutor::Tutor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate text into a sign sequence
    Translate {
        text: Vec<String>,
        #[arg(short, long, value_enum)]
        language: Option<Language>,
    },
    /// Explain a formula step by step
    Explain {
        formula: Vec<String>,
        /// Explanation key, e.g. "f=ma" (detected when omitted)
        #[arg(short, long)]
        key: Option<String>,
        #[arg(short, long, value_enum)]
        language: Option<Language>,
    },
    /// Answer a question and sign the answer
    Ask {
        question: Vec<String>,
        #[arg(short, long, value_enum)]
        language: Option<Language>,
    },
    /// Split STEM text into definition, formula and example
    Structure { text: Vec<String> },
    /// Check tables and lexicon against the sign assets
    Audit {
        /// Append the report to this log file
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Show recent translations
    History {
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },
    /// Practice signs by category
    Learn {
        #[command(subcommand)]
        action: LearnCommand,
    },
}

#[derive(Subcommand, Debug)]
enum LearnCommand {
    /// List categories
    Categories,
    /// Words in a category
    Words { category: String },
    /// Multiple-choice question for a category
    Quiz { category: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Setup logging: RUST_LOG wins, then --verbose, then config
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_lowercase()))
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("🤟 SignBridge v{} starting...", env!("CARGO_PKG_VERSION"));

    let language_or_default = |l: Option<Language>| l.unwrap_or(config.default_language);

    match args.command {
        Command::Translate { text, language } => {
            let translator = Translator::from_config(&config)?;
            let out = translator
                .translate(&text.join(" "), language_or_default(language))
                .await?;
            if args.json {
                print_json(&out.signs)?;
            } else {
                println!("Gloss:   {}", out.gloss.join(" "));
                println!("Signs:   {}", out.signs.display());
                println!("Ids:     {}", out.signs.ids().join(" "));
                if let Some(formula) = out.signs.formula() {
                    match &formula.key {
                        Some(key) => println!("Formula: {} (explain with --key {})", formula.input, key),
                        None => println!("Formula: {}", formula.input),
                    }
                }
            }
        }
        Command::Explain {
            formula,
            key,
            language,
        } => {
            let formula = formula.join(" ");
            let key = key.or_else(|| classify(&formula).context_key().map(str::to_string));
            let tutor = Tutor::new(Arc::new(Translator::from_config(&config)?));
            let explanation = tutor
                .explain(&formula, key.as_deref(), language_or_default(language))
                .await?;
            if args.json {
                print_json(&explanation)?;
            } else {
                println!("{}", explanation.formula_name);
                for step in &explanation.steps {
                    println!("\n{}\n  {}\n  {}", step.label, step.text, step.signs.display());
                }
            }
        }
        Command::Ask { question, language } => {
            let tutor = Tutor::new(Arc::new(Translator::from_config(&config)?));
            let answer = tutor
                .ask(&question.join(" "), language_or_default(language))
                .await?;
            if args.json {
                print_json(&answer)?;
            } else {
                println!("Answer: {}", answer.answer);
                println!("Signs:  {}", answer.signs.display());
            }
        }
        Command::Structure { text } => {
            let tutor = Tutor::new(Arc::new(Translator::from_config(&config)?));
            let content = tutor.structure(&text.join(" ")).await;
            if args.json {
                print_json(&content)?;
            } else {
                println!("Definition: {}", content.definition);
                println!("Formula:    {}", content.formula);
                println!("Example:    {}", content.example);
            }
        }
        Command::Audit { log } => {
            let lexicon = load_lexicon(&config)?;
            let synonyms = SynonymTable::with_overrides(&config.custom_synonyms);
            let assets = AssetStore::new(&config.assets_dir, config.asset_extension.as_str());
            let report = audit::run(&lexicon, &synonyms, &assets);
            report.write_log(&log.unwrap_or_else(audit::default_log_path))?;
            if args.json {
                print_json(&report)?;
            } else {
                println!("{}", report.summary());
                for stale in &report.stale {
                    let hint = stale
                        .suggestion
                        .as_ref()
                        .map(|s| format!(" (nearest: {s})"))
                        .unwrap_or_default();
                    println!("  stale {:?}: {} [{}]{}", stale.source, stale.entry, stale.word, hint);
                }
                for asset in &report.unlisted_assets {
                    println!("  unlisted asset: {asset}");
                }
            }
        }
        Command::History { limit } => {
            let store = HistoryStore::open(Path::new(&config.history_db_path), config.history_limit)?;
            let entries = store.recent(limit)?;
            if args.json {
                print_json(&entries)?;
            } else {
                for entry in &entries {
                    println!("[{}] ({}) {} -> {}", entry.timestamp, entry.language, entry.input, entry.display);
                    if let Some(answer) = &entry.answer {
                        println!("    answer: {answer}");
                    }
                }
            }
        }
        Command::Learn { action } => match action {
            LearnCommand::Categories => {
                let cats = learn::categories();
                if args.json {
                    print_json(&cats)?;
                } else {
                    for c in &cats {
                        println!("{} {} ({} signs)", c.icon, c.name, c.count);
                    }
                }
            }
            LearnCommand::Words { category } => {
                let words = learn::words(&category, &load_resolver(&config)?)?;
                if args.json {
                    print_json(&words)?;
                } else {
                    for w in &words {
                        println!("{} -> {}", w.word, w.signs.ids().join(" "));
                    }
                }
            }
            LearnCommand::Quiz { category } => {
                let resolver = load_resolver(&config)?;
                let quiz = learn::quiz(&category, &resolver, &mut rand::thread_rng())?;
                if args.json {
                    print_json(&quiz)?;
                } else {
                    println!("Which word is signed? (sign: {})", quiz.signs.ids().join(" "));
                    for (i, option) in quiz.options.iter().enumerate() {
                        println!("  {}. {}", i + 1, option);
                    }
                }
            }
        },
    }

    Ok(())
}

fn load_lexicon(config: &Config) -> Result<Lexicon> {
    Lexicon::load(Path::new(&config.lexicon_path))
        .with_context(|| format!("loading lexicon from {}", config.lexicon_path))
}

fn load_resolver(config: &Config) -> Result<SignResolver> {
    Ok(SignResolver::new(
        Arc::new(load_lexicon(config)?),
        Arc::new(SynonymTable::with_overrides(&config.custom_synonyms)),
        AssetStore::new(&config.assets_dir, config.asset_extension.as_str()),
    ))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
