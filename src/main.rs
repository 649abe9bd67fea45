//! Wordle Lexicon - CLI
//!
//! Thin command-line wrapper over the dictionary engine. All engine logic
//! lives in the library; this binary only loads a dictionary, runs one
//! query, and prints the result.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::Path;
use wordle_lexicon::{
    core::Alphabet,
    dictionary::Dictionary,
    lexicon::FileSource,
    wordlists::{WORDLE_WORD_LENGTH, original_guess_dictionary, original_solution_dictionary},
};

#[derive(Parser)]
#[command(
    name = "wordle_lexicon",
    about = "Word-constraint dictionary queries: patterns, anagrams, and n-gram legality",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'guesses' (default), 'solutions', or path to a file
    #[arg(short = 'w', long, global = true, default_value = "guesses")]
    wordlist: String,

    /// Word length for file-backed wordlists and pattern queries
    #[arg(short = 'l', long, global = true, default_value_t = WORDLE_WORD_LENGTH)]
    length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter the dictionary with a guess/feedback pattern
    Query {
        /// Slot tokens (letter, '?', or '!letters'), plus an optional
        /// trailing '[letters]' absent token
        #[arg(required = true)]
        tokens: Vec<String>,
    },

    /// Find words spellable by rearranging a set of letters
    Unscramble {
        /// The letter pool to rearrange
        letters: String,

        /// Accept words that use only part of the letters
        #[arg(short, long)]
        partial: bool,
    },

    /// List letter sequences that never occur in the dictionary
    Illegal {
        /// Sequence length
        #[arg(short = 'n', long, default_value_t = 2)]
        sequence_length: usize,

        /// Where the sequence must be missing: anywhere (default), start, end
        #[arg(short = 'p', long, default_value = "anywhere")]
        position: String,
    },
}

/// Load a dictionary based on the -w flag
///
/// - "guesses": the full embedded guess list
/// - "solutions": the embedded solution subset
/// - `<path>`: a line-delimited file, filtered to the -l word length
fn load_dictionary(wordlist: &str, length: usize) -> Dictionary {
    match wordlist {
        "guesses" => original_guess_dictionary(),
        "solutions" => original_solution_dictionary(),
        path => {
            let name = Path::new(path)
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("custom");
            Dictionary::fixed_length(name, Alphabet::english(), length, FileSource::new(path))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let dictionary = load_dictionary(&cli.wordlist, cli.length);

    match cli.command {
        Commands::Query { tokens } => run_query(&dictionary, &tokens.join(" ")),
        Commands::Unscramble { letters, partial } => run_unscramble(&dictionary, &letters, partial),
        Commands::Illegal {
            sequence_length,
            position,
        } => run_illegal(&dictionary, sequence_length, &position),
    }
}

fn run_query(dictionary: &Dictionary, pattern: &str) -> Result<()> {
    let options = dictionary.find_options(pattern)?;

    println!(
        "\nPattern {} against {}",
        pattern.bright_yellow().bold(),
        dictionary.name().cyan()
    );
    print_word_grid(&options);
    print_match_count(options.len());
    Ok(())
}

fn run_unscramble(dictionary: &Dictionary, letters: &str, partial: bool) -> Result<()> {
    let words = dictionary.unscramble_sequence(letters, partial)?;

    let mode = if partial { "sub-anagrams" } else { "anagrams" };
    println!(
        "\n{} of {} in {}",
        mode,
        letters.bright_yellow().bold(),
        dictionary.name().cyan()
    );
    print_word_grid(&words);
    print_match_count(words.len());
    Ok(())
}

fn run_illegal(dictionary: &Dictionary, sequence_length: usize, position: &str) -> Result<()> {
    // Unrecognized positions fall back to "anywhere"
    let (sequences, where_label) = match position {
        "start" => (
            dictionary.illegal_starting_sequences_of_length(sequence_length)?,
            "starting",
        ),
        "end" => (
            dictionary.illegal_ending_sequences_of_length(sequence_length)?,
            "ending",
        ),
        _ => (
            dictionary.illegal_sequences_of_length(sequence_length)?,
            "occurring",
        ),
    };

    println!(
        "\nLength-{} sequences never {} in {}",
        sequence_length,
        where_label,
        dictionary.name().cyan()
    );
    print_word_grid(&sequences);
    print_match_count(sequences.len());
    Ok(())
}

fn print_word_grid<S: AsRef<str>>(words: &[S]) {
    for row in words.chunks(8) {
        let line: Vec<&str> = row.iter().map(AsRef::as_ref).collect();
        println!("  {}", line.join("  "));
    }
}

fn print_match_count(count: usize) {
    if count == 0 {
        println!("{}", "no matches".yellow().bold());
    } else {
        println!("{}", format!("{count} matches").green().bold());
    }
}
