use crate::checker::dictionary::{self, Dictionary, DOWNLOADABLE_LANGUAGES};
use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::time::Duration;

// Pinned commit so a re-download yields the same dictionary
const WORDLIST_BASE_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/6e4bc58ad764c3e6df8b5be4048671962c9d6a23";
const WORDLIST_VERSION: &str = "2023.12";

pub fn list_dictionaries() -> Result<()> {
    let data_dir = crate::config::Config::data_dir().context("Failed to get data directory")?;
    let languages = dictionary::available_languages()?;

    println!("{}", "Available dictionaries:".bold());
    println!();

    for language in &languages {
        let path = data_dir.join(format!("{}.dict", language));
        let size = fs::metadata(&path).map(|m| m.len() / 1024).unwrap_or(0);

        println!(
            "  {} {} ({})",
            "✓".green(),
            language.cyan().bold(),
            format!("{}KB", size).dimmed()
        );
    }

    if languages.is_empty() {
        println!("  {}", "none installed".dimmed());
    }

    for language in DOWNLOADABLE_LANGUAGES {
        if !languages.iter().any(|l| l == language) {
            println!(
                "  {} {} (run {})",
                "✗".red(),
                language.cyan(),
                format!("docspell dict download {}", language).dimmed()
            );
        }
    }

    println!();
    println!(
        "Data directory: {}",
        data_dir.display().to_string().dimmed()
    );

    Ok(())
}

pub fn download_dictionary(language: &str) -> Result<()> {
    let wordlist_url = match language {
        "en_US" | "en_GB" => format!("{}/words_alpha.txt", WORDLIST_BASE_URL),
        other => anyhow::bail!(
            "Language '{}' is not supported. Only {} can be downloaded.",
            other,
            DOWNLOADABLE_LANGUAGES.join(" and ")
        ),
    };

    println!(
        "{} dictionary for {} (version: {})...",
        "Downloading".cyan().bold(),
        language.yellow(),
        WORDLIST_VERSION.dimmed()
    );
    println!("Source: {}", wordlist_url.dimmed());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Downloading...");

    let response =
        reqwest::blocking::get(&wordlist_url).context("Failed to download dictionary")?;

    if !response.status().is_success() {
        pb.finish_and_clear();
        anyhow::bail!("Failed to download dictionary: HTTP {}", response.status());
    }

    let content = response.text()?;
    pb.finish_with_message("Download complete");

    let words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| line.len() > 1)
        .collect();

    println!("Found {} words", words.len().to_string().yellow());

    let dict_path = Dictionary::get_dictionary_path(language)?;
    Dictionary::build_from_words(&words, &dict_path)?;
    tracing::info!(language, words = words.len(), "installed dictionary");

    println!(
        "{} Dictionary installed: {}",
        "✓".green().bold(),
        dict_path.display().to_string().cyan()
    );

    Ok(())
}

pub fn show_info(language: &str) -> Result<()> {
    let dict_path = Dictionary::get_dictionary_path(language)?;

    if !dict_path.exists() {
        println!(
            "{} Dictionary for {} not installed.",
            "✗".red().bold(),
            language.yellow()
        );
        println!(
            "Run {} to download it.",
            format!("docspell dict download {}", language).cyan()
        );
        return Ok(());
    }

    let metadata = fs::metadata(&dict_path)?;
    let dictionary = Dictionary::load_from_path(&dict_path)?;

    println!("{}", format!("Dictionary: {}", language).bold());
    println!("  Path: {}", dict_path.display());
    println!("  Size: {} KB", metadata.len() / 1024);
    println!("  Words: {}", dictionary.len());
    println!("  Format: FST (Finite State Transducer)");

    Ok(())
}
