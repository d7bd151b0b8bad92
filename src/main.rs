use std::io::{self, BufRead, StdinLock, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use plagiarism_detector::config::Config;
use plagiarism_detector::error::{CoreError, EssayError};
use plagiarism_detector::essays::{self, EssayPaths};
use plagiarism_detector::output::{self, terminal, FormattedReport, SimilarityLevel};
use plagiarism_detector::similarity::{self, SimilarityResult, WordCount};
use plagiarism_detector::text::{Normalizer, StopWordList};

/// Plagiarism Detector: compare two essays by vocabulary overlap.
///
/// Normalizes both essays (lowercase, no punctuation, no stop words) and
/// reports the Jaccard similarity of their vocabularies.
#[derive(Parser)]
#[command(name = "plagiarism-detector", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full comparison (the default when no command is given)
    Check(CheckArgs),

    /// Count occurrences of a single word in both essays
    Search {
        /// The word to look for
        word: String,

        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args, Default)]
struct InputArgs {
    /// Path to the first essay (default: <essays dir>/essay1.txt)
    #[arg(long)]
    essay1: Option<PathBuf>,

    /// Path to the second essay (default: <essays dir>/essay2.txt)
    #[arg(long)]
    essay2: Option<PathBuf>,

    /// Stop word list: builtin or extended
    #[arg(long)]
    stop_words: Option<StopWordList>,
}

#[derive(Args, Default)]
struct CheckArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Paste both essays instead of loading them from files
    #[arg(long, conflicts_with_all = ["essay1", "essay2"])]
    paste: bool,

    /// Search for this word without prompting
    #[arg(long)]
    search: Option<String>,

    /// Save the report without prompting
    #[arg(long, conflicts_with = "no_save")]
    save: bool,

    /// Skip saving the report without prompting
    #[arg(long)]
    no_save: bool,

    /// Print the result as JSON instead of the terminal analysis
    #[arg(long, conflicts_with = "paste")]
    json: bool,
}

/// Raised when stdin closes in the middle of a prompt.
#[derive(Debug, Error)]
#[error("interrupted by user")]
struct Interrupted;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging; quiet by default so prompts stay readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("plagiarism_detector=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    // Prompts block on stdin, so the session runs on a blocking thread and
    // Ctrl-C is raced against it.
    let mut session = tokio::task::spawn_blocking(move || run(cli, config));

    let joined = tokio::select! {
        joined = &mut session => Some(joined),
        signal = tokio::signal::ctrl_c() => match signal {
            Ok(()) => {
                println!("\n\nProgram interrupted by user");
                // The blocking thread may still be parked on stdin
                std::process::exit(0);
            }
            Err(e) => {
                warn!(error = %e, "Could not listen for Ctrl-C; waiting for the session");
                None
            }
        },
    };
    let joined = match joined {
        Some(joined) => joined,
        None => session.await,
    };

    match joined? {
        Err(e) if e.is::<Interrupted>() => {
            println!("\n\nProgram interrupted by user");
            Ok(())
        }
        other => other,
    }
}

fn run(cli: Cli, config: Config) -> Result<()> {
    let mut prompt = Prompt::stdin();

    match cli.command.unwrap_or_else(|| Commands::Check(CheckArgs::default())) {
        Commands::Check(args) => run_check(args, &config, &mut prompt),
        Commands::Search { word, input } => run_search(&word, input, &config),
    }
}

fn run_check(args: CheckArgs, config: &Config, prompt: &mut Prompt<StdinLock<'static>>) -> Result<()> {
    let stop_words = args.input.stop_words.unwrap_or(config.stop_words);
    let normalizer = Normalizer::new(stop_words.set());
    info!(stop_words = %stop_words, "Starting comparison");

    if args.json {
        let (essay_a, essay_b) = load_from_files(&args.input, config, Stream::Stderr)?;
        return print_json(&normalizer, &essay_a, &essay_b, &args, config);
    }

    terminal::display_banner();

    let explicit_paths = args.input.essay1.is_some() || args.input.essay2.is_some();
    let paste = if args.paste {
        true
    } else if explicit_paths {
        false
    } else {
        choose_paste(prompt)?
    };

    let (essay_a, essay_b) = if paste {
        read_from_paste(prompt, config)?
    } else {
        println!("\nLoading essays from files...");
        load_from_files(&args.input, config, Stream::Stdout)?
    };

    println!("Essays loaded successfully ^_^\n");
    println!("Processing text...");
    let tokens_a = normalizer.normalize(&essay_a);
    let tokens_b = normalizer.normalize(&essay_b);
    terminal::display_token_counts(tokens_a.len(), tokens_b.len());

    // Word search
    terminal::display_heading("Word Search Feature");
    match &args.search {
        Some(word) => search_and_display(&normalizer, word, &essay_a, &essay_b),
        None => loop {
            if !prompt.confirm("\nWould you like to search for a specific word? (y/n): ")? {
                println!("On to the next step...");
                break;
            }
            let word = prompt.ask("Enter the word to search: ")?;
            if word.is_empty() {
                println!("Please enter a valid word");
                continue;
            }
            search_and_display(&normalizer, &word, &essay_a, &essay_b);
            break;
        },
    }

    let result = similarity::compare(&tokens_a, &tokens_b);

    println!("\n");
    terminal::display_heading("Common Words Analysis");
    terminal::display_common_words(&result);

    println!("\n");
    terminal::display_heading("Plagiarism Calculation");
    terminal::display_calculation(&result);
    terminal::display_interpretation(&result);

    println!("\n");
    terminal::display_heading("Save Report");
    let save = if args.save {
        true
    } else if args.no_save {
        false
    } else {
        prompt.confirm("\nWould you like to save this report? (y/n): ")?
    };

    if save {
        save_and_announce(&result, config, Stream::Stdout);
    } else {
        println!("\nReport not saved.");
    }

    println!("\n");
    terminal::display_heading("Analysis Complete ^_^");
    println!("\nThank you for using the Plagiarism Detector\n");
    Ok(())
}

fn run_search(word: &str, input: InputArgs, config: &Config) -> Result<()> {
    let stop_words = input.stop_words.unwrap_or(config.stop_words);
    let normalizer = Normalizer::new(stop_words.set());
    let (essay_a, essay_b) = load_from_files(&input, config, Stream::Stdout)?;

    match normalizer.locate(word, &essay_a, &essay_b) {
        Ok(count) => terminal::display_search_results(word.trim(), count),
        Err(CoreError::InvalidQuery) => println!("Please provide a valid word to search"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Ask whether to load files (default) or paste text.
fn choose_paste(prompt: &mut Prompt<StdinLock<'static>>) -> Result<bool> {
    println!("How would you like to provide the essays?");
    println!("1. Load from existing files (default)");
    println!("2. Paste the essay text manually");

    loop {
        match prompt.ask("Choose option (1 or 2): ")?.as_str() {
            "" | "1" => return Ok(false),
            "2" => return Ok(true),
            _ => println!("Invalid choice. Enter 1 or 2."),
        }
    }
}

/// Where human-readable messages go. JSON mode keeps stdout for the document.
#[derive(Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    fn line(self, text: impl std::fmt::Display) {
        match self {
            Stream::Stdout => println!("{text}"),
            Stream::Stderr => eprintln!("{text}"),
        }
    }
}

/// Load both essays from disk, printing setup hints when one is unreadable.
fn load_from_files(input: &InputArgs, config: &Config, stream: Stream) -> Result<(String, String)> {
    let defaults = config.essay_paths();
    let paths = EssayPaths {
        essay_a: input.essay1.clone().unwrap_or(defaults.essay_a),
        essay_b: input.essay2.clone().unwrap_or(defaults.essay_b),
    };

    essays::load_essays(&paths).map_err(|e| {
        print_load_hints(&e, stream);
        e.into()
    })
}

fn print_load_hints(err: &EssayError, stream: Stream) {
    stream.line(format_args!("\n{} {}", "Error:".red().bold(), err));
    stream.line("\nFailed to read the essays. Please ensure:");
    stream.line("1. The files exist in the essays/ directory (or pass --essay1/--essay2)");
    stream.line("2. The files have read permissions");
    stream.line("3. The files contain UTF-8 text");
}

fn read_from_paste(
    prompt: &mut Prompt<StdinLock<'static>>,
    config: &Config,
) -> Result<(String, String)> {
    println!("\nPaste Essay 1. When done, type a single line with 'END':\n");
    let essay_a = prompt.paste()?;

    println!("\nPaste Essay 2. When done, type 'END':\n");
    let essay_b = prompt.paste()?;

    match essays::save_essays(&config.essays_dir, &essay_a, &essay_b) {
        Ok(paths) => {
            println!("\nSaved Essay 1 to {}", paths.essay_a.display());
            println!("Saved Essay 2 to {}", paths.essay_b.display());
        }
        Err(e) => {
            warn!(error = %e, "Could not save pasted essays");
            println!("\n{} could not save pasted essays: {}", "Warning:".yellow(), e);
        }
    }

    Ok((essay_a, essay_b))
}

fn search_and_display(normalizer: &Normalizer<'_>, word: &str, essay_a: &str, essay_b: &str) {
    match normalizer.locate(word, essay_a, essay_b) {
        Ok(count) => terminal::display_search_results(word.trim(), count),
        Err(e) => println!("{} {}", "Error:".red(), e),
    }
}

/// Save the report and say how it went. A failed save never ends the run.
fn save_and_announce(result: &SimilarityResult, config: &Config, stream: Stream) {
    let report = FormattedReport::from_result(result);
    match output::save_report(&config.reports_dir, &report) {
        Ok(path) => stream.line(format_args!("\nReport saved successfully to: {}", path.display())),
        Err(e) => {
            warn!(error = %e, "Report save failed");
            stream.line(format_args!("\n{} {}", "Error saving report:".red(), e));
        }
    }
}

#[derive(Serialize)]
struct JsonSearch<'a> {
    word: &'a str,
    #[serde(flatten)]
    count: Option<WordCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    result: &'a SimilarityResult,
    level: SimilarityLevel,
    tokens_a: usize,
    tokens_b: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<JsonSearch<'a>>,
}

fn print_json(
    normalizer: &Normalizer<'_>,
    essay_a: &str,
    essay_b: &str,
    args: &CheckArgs,
    config: &Config,
) -> Result<()> {
    let tokens_a = normalizer.normalize(essay_a);
    let tokens_b = normalizer.normalize(essay_b);
    let result = similarity::compare(&tokens_a, &tokens_b);

    let search = match args.search.as_deref() {
        Some(word) => match normalizer.locate(word, essay_a, essay_b) {
            Ok(count) => Some(JsonSearch {
                word,
                count: Some(count),
                error: None,
            }),
            Err(e @ CoreError::InvalidQuery) => {
                warn!(query = word, "Ignoring invalid search word");
                Some(JsonSearch {
                    word,
                    count: None,
                    error: Some(e.to_string()),
                })
            }
            Err(e) => return Err(e.into()),
        },
        None => None,
    };

    let out = JsonOutput {
        result: &result,
        level: result.level(),
        tokens_a: tokens_a.len(),
        tokens_b: tokens_b.len(),
        search,
    };
    println!("{}", serde_json::to_string_pretty(&out)?);

    if args.save {
        save_and_announce(&result, config, Stream::Stderr);
    }
    Ok(())
}

/// Line-based prompts over a buffered reader.
struct Prompt<R> {
    input: R,
}

impl Prompt<StdinLock<'static>> {
    fn stdin() -> Self {
        Self {
            input: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> Prompt<R> {
    /// Print `question` and return the trimmed answer.
    fn ask(&mut self, question: &str) -> Result<String> {
        print!("{question}");
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Interrupted.into());
        }
        Ok(line.trim().to_string())
    }

    /// Ask a yes/no question until the answer is one of y, n, yes, no.
    fn confirm(&mut self, question: &str) -> Result<bool> {
        loop {
            match self.ask(question)?.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => println!("Invalid input. Please enter 'y' for yes or 'n' for no."),
            }
        }
    }

    /// Read a pasted essay terminated by the END line.
    fn paste(&mut self) -> Result<String> {
        essays::read_pasted(&mut self.input)?.ok_or_else(|| Interrupted.into())
    }
}
