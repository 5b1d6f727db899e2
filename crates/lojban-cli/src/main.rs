use clap::{Parser, Subcommand};
use colored::{ColoredString, Colorize};
use std::io::Read;
use std::process;

use lojban_core::lexicon::{self, WordCategory};
use lojban_core::parser::tokenizer::{classify, Source};
use lojban_core::{exercise, parse_sentence, ParseResult};

/// lojban: Lojban Logic Trainer CLI
///
/// Classify the words of a Lojban sentence and check its structure.
#[derive(Parser)]
#[command(name = "lojban", version, about, long_about = None)]
struct Cli {
    /// Print nothing to stdout; report through the exit code only
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize and validate a sentence
    Parse {
        /// Sentence text (read from stdin when omitted)
        text: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a sentence against an exercise answer
    Check {
        /// Sentence text
        text: String,
        /// Expected answer; omit for a free-form exercise
        #[arg(long)]
        expected: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List lexicon entries
    Lexicon {
        /// Only list one category (predicate, argument, article, ...)
        #[arg(long)]
        category: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify a single word
    Lookup {
        word: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

/// Exit codes: 0 = success, 1 = invalid sentence or wrong answer, 2 = error
const EXIT_OK: i32 = 0;
const EXIT_INVALID: i32 = 1;
const EXIT_ERROR: i32 = 2;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let exit_code = match run(cli.command, cli.quiet) {
        Ok(code) => code,
        Err(msg) => {
            eprintln!("{} {}", "error:".red().bold(), msg);
            EXIT_ERROR
        }
    };

    process::exit(exit_code);
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("lojban_core=debug,lojban_cli=debug")
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => return,
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands, quiet: bool) -> Result<i32, String> {
    match command {
        Commands::Parse { text, json } => {
            let text = match text {
                Some(t) => t,
                None => read_stdin()?,
            };
            let result = parse_sentence(&text);
            if !quiet {
                if json {
                    println!("{}", result.to_json().map_err(|e| e.to_string())?);
                } else {
                    print_parse(&result);
                }
            }
            Ok(if result.valid { EXIT_OK } else { EXIT_INVALID })
        }

        Commands::Check {
            text,
            expected,
            json,
        } => {
            let (result, correct) = exercise::check_text(&text, expected.as_deref());
            if !quiet {
                if json {
                    let output = serde_json::json!({
                        "correct": correct,
                        "sentence": result.sentence(),
                        "expected": expected,
                        "result": result,
                    });
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())?
                    );
                } else {
                    print_parse(&result);
                    println!();
                    if correct {
                        println!("{} {}", "✓".green().bold(), "Correct!".green());
                    } else {
                        println!("{} {}", "✗".red().bold(), "Try again!".red());
                        if let Some(answer) = &expected {
                            println!("  expected: {}", answer.trim());
                            println!("  got:      {}", result.sentence());
                        }
                    }
                }
            }
            Ok(if correct { EXIT_OK } else { EXIT_INVALID })
        }

        Commands::Lexicon { category, json } => {
            let entries = match category {
                Some(name) => {
                    let category: WordCategory = name.parse().map_err(|e| {
                        format!("{} (expected one of: {})", e, category_names())
                    })?;
                    lexicon::all_of_category(category)
                }
                None => lexicon::entries().collect(),
            };

            if !quiet {
                if json {
                    let output: Vec<serde_json::Value> = entries
                        .iter()
                        .map(|(word, entry)| {
                            serde_json::json!({
                                "word": word,
                                "category": entry.category,
                                "gloss": entry.gloss,
                                "argumentSlots": entry.argument_slots,
                            })
                        })
                        .collect();
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())?
                    );
                } else {
                    for (word, entry) in &entries {
                        println!(
                            "{:<8} {:<12} {}",
                            paint(entry.category, word),
                            entry.category,
                            entry.gloss
                        );
                        for slot in entry.argument_slots {
                            println!("{:<8} {:<12}   {}", "", "", slot.dimmed());
                        }
                    }
                }
            }
            Ok(EXIT_OK)
        }

        Commands::Lookup { word, json } => {
            let classification = classify(&word);
            let valid = classification.is_valid();
            if !quiet {
                let source = match classification.source {
                    Source::Lexicon => "lexicon".to_string(),
                    Source::Shape(name) => format!("{} shape", name),
                    Source::Unrecognized => "unrecognized".to_string(),
                };
                if json {
                    let output = serde_json::json!({
                        "word": word.to_lowercase(),
                        "category": classification.category,
                        "gloss": classification.gloss,
                        "argumentSlots": classification.argument_slots,
                        "source": source,
                        "valid": valid,
                    });
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())?
                    );
                } else {
                    println!(
                        "{} — {} ({}/{}, from {})",
                        paint(classification.category, &word.to_lowercase()),
                        classification.gloss,
                        classification.category,
                        classification.category.lojban_term(),
                        source
                    );
                    for slot in &classification.argument_slots {
                        println!("  {}", slot);
                    }
                }
            }
            Ok(if valid { EXIT_OK } else { EXIT_INVALID })
        }

        Commands::Version => {
            if !quiet {
                println!(
                    "lojban {} (lojban-core {})",
                    env!("CARGO_PKG_VERSION"),
                    lojban_core::VERSION
                );
            }
            Ok(EXIT_OK)
        }
    }
}

fn read_stdin() -> Result<String, String> {
    tracing::debug!("reading sentence from stdin");
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(buf)
}

fn category_names() -> String {
    WordCategory::ALL
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Colour a word the way the trainer highlights its category
fn paint(category: WordCategory, word: &str) -> ColoredString {
    let color = category.hex_color().trim_start_matches('#');
    let channel = |i: usize| u8::from_str_radix(&color[i..i + 2], 16).unwrap_or(0xdf);
    word.truecolor(channel(0), channel(2), channel(4))
}

fn print_parse(result: &ParseResult) {
    if result.is_empty() {
        println!("{}", "(no words)".dimmed());
    }

    for token in &result.tokens {
        println!(
            "{:>3}  {:<10} {:<11} {}",
            token.index,
            paint(token.category, &token.word),
            token.category.to_string(),
            token.gloss.dimmed()
        );
        for slot in &token.argument_slots {
            println!("{:>3}  {:<10} {:<11}   {}", "", "", "", slot.dimmed());
        }
    }

    for error in &result.errors {
        eprintln!("{} {}", "error:".red().bold(), error.message);
    }
    for warning in &result.warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning.message);
    }

    if result.valid {
        println!("{}", "valid".green());
    } else {
        println!("{}", "invalid".red());
    }
}
