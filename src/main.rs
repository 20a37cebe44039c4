use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use docspell::checker::suggestions::SuggestionMode;
use docspell::cli::output::{self, OutputFormat};
use docspell::config::{Overrides, WordSource};
use docspell::{cli, dict, Config, DocTree, FstSpeller, Report, Session, Speller};
use std::io;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "docspell")]
#[command(version, about = "Spellcheck the comments in a documentation tree", long_about = None)]
struct Cli {
    /// Documentation tree (JSON) to check
    #[arg(value_name = "TREE")]
    tree: Option<PathBuf>,

    /// Add words to the personal wordlist: a comma-separated list, a file,
    /// or nothing to read words from stdin
    #[arg(long, value_name = "WORDLIST", num_args = 0..=1)]
    spell_add_words: Option<Option<String>>,

    /// Language to use for spell checking (defaults to the one in LANG)
    #[arg(long, value_name = "LANGUAGE")]
    spell_language: Option<String>,

    /// Plain wordlist to use instead of an installed dictionary
    #[arg(long, value_name = "PATH")]
    dictionary: Option<PathBuf>,

    /// Personal wordlist file
    #[arg(long, value_name = "PATH")]
    personal_dict: Option<PathBuf>,

    /// How hard to look for suggestions (ultra, fast, normal, slow, bad-spellers)
    #[arg(long, value_name = "MODE")]
    suggestion_mode: Option<SuggestionMode>,

    /// Suggestions shown per misspelled word
    #[arg(long, value_name = "N")]
    max_suggestions: Option<usize>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if misspellings are found
    #[arg(long)]
    no_fail: bool,

    /// Suppress the statistics summary
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print the statistics summary and debug logs
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Dictionary management
    Dict {
        #[command(subcommand)]
        action: DictCommands,
    },
}

#[derive(Parser, Debug)]
enum DictCommands {
    /// List available dictionaries
    List,
    /// Download a dictionary
    Download {
        /// Language code (e.g., en_US, en_GB)
        language: String,
    },
    /// Show dictionary info
    Info {
        /// Language code
        language: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::logging::init(cli.verbose);

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "docspell", &mut io::stdout());
        return Ok(());
    }

    if let Some(command) = cli.command {
        return handle_command(command);
    }

    let quiet = if cli.quiet {
        Some(true)
    } else if cli.verbose {
        Some(false)
    } else {
        None
    };
    let config = Config::load(Overrides {
        language: cli.spell_language.clone(),
        dictionary: cli.dictionary.clone(),
        personal_dictionary: cli.personal_dict.clone(),
        max_suggestions: cli.max_suggestions,
        suggestion_mode: cli.suggestion_mode,
        quiet,
    })?;

    // Fails fast on an unknown language, before anything is read or written.
    let mut speller = FstSpeller::new(&config)?;

    if let Some(wordlist) = &cli.spell_add_words {
        let words = WordSource::parse(wordlist.as_deref()).read_words()?;
        for word in &words {
            speller.add_to_personal(word);
        }
        speller.save_personal_wordlists()?;
    }

    let Some(tree_path) = &cli.tree else {
        if cli.spell_add_words.is_some() {
            return Ok(());
        }
        anyhow::bail!("No documentation tree specified. Use --help for usage information.");
    };

    let started = Instant::now();
    let tree = DocTree::load(tree_path)?;
    let session = Session::prime(speller, &tree, &config.default_words);
    let report = Report::generate(&session, &tree, config.max_suggestions);

    let colored = !cli.no_color;
    output::print_report(&report, cli.format, colored)?;

    if !config.quiet {
        output::print_check_summary(&report, session.names(), started.elapsed(), colored);
    }

    if !report.is_clean() && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Dict { action } => match action {
            DictCommands::List => {
                dict::manager::list_dictionaries()?;
            }
            DictCommands::Download { language } => {
                dict::manager::download_dictionary(&language)?;
            }
            DictCommands::Info { language } => {
                dict::manager::show_info(&language)?;
            }
        },
    }
    Ok(())
}
