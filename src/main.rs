//! Wordle - CLI
//!
//! Wordle-style word guessing game with TUI and plain CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_tui::{
    commands::{run_simple, run_stats},
    game::{AcceptAll, Dictionary, WordListDictionary},
    stats::JsonFileStore,
    wordlists::{RandomSource, THEMED, guessable_words, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_tui",
    about = "Wordle-style word guessing game for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Require each guess to respect previously revealed clues
    #[arg(long, global = true)]
    hard: bool,

    /// Wordlist: 'all' (default), 'themed' (variable-width words), or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Accept any well-formed guess without consulting the dictionary
    #[arg(long, global = true)]
    lenient: bool,

    /// Override the statistics file location
    #[arg(long, global = true)]
    stats_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Show the persisted statistics record
    Stats,
}

/// Build the answer pool and the dictionary oracle from the -w flag
///
/// The themed list has no matching dictionary, so it always plays lenient;
/// custom lists are merged into the stock dictionary.
fn load_words(wordlist_mode: &str, lenient: bool) -> Result<(RandomSource, Box<dyn Dictionary>)> {
    use wordle_tui::wordlists::loader::load_from_file;

    match wordlist_mode {
        "all" => {
            let answers = words_from_slice(wordle_tui::wordlists::ANSWERS);
            let dictionary: Box<dyn Dictionary> = if lenient {
                Box::new(AcceptAll)
            } else {
                Box::new(WordListDictionary::new(&guessable_words()))
            };
            Ok((RandomSource::new(answers), dictionary))
        }
        "themed" => {
            let answers = words_from_slice(THEMED);
            Ok((RandomSource::new(answers), Box::new(AcceptAll)))
        }
        path => {
            let custom = load_from_file(path)?;
            let dictionary: Box<dyn Dictionary> = if lenient {
                Box::new(AcceptAll)
            } else {
                let mut all = guessable_words();
                all.extend(custom.clone());
                Box::new(WordListDictionary::new(&all))
            };
            Ok((RandomSource::new(custom), dictionary))
        }
    }
}

fn stats_store(stats_file: Option<&str>) -> JsonFileStore {
    match stats_file {
        Some(path) => JsonFileStore::new(path),
        None => JsonFileStore::at_default_path(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = stats_store(cli.stats_file.as_deref());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let (source, dictionary) = load_words(&cli.wordlist, cli.lenient)?;
            run_play_command(source, dictionary, store, cli.hard)
        }
        Commands::Simple => {
            let (mut source, dictionary) = load_words(&cli.wordlist, cli.lenient)?;
            run_simple(&mut source, dictionary.as_ref(), &store, cli.hard)
                .map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Stats => {
            run_stats(&store);
            Ok(())
        }
    }
}

fn run_play_command(
    source: RandomSource,
    dictionary: Box<dyn Dictionary>,
    store: JsonFileStore,
    hard_mode: bool,
) -> Result<()> {
    use wordle_tui::interactive::{App, run_tui};

    let app = App::new(Box::new(source), dictionary, Box::new(store), hard_mode)?;
    run_tui(app)
}
