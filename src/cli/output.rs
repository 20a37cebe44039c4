use crate::Report;
use anyhow::Result;
use colored::*;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Write the report to stdout in the requested format.
pub fn print_report(report: &Report, format: OutputFormat, colored_output: bool) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", report.render(colored_output)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}

/// Statistics for the run, on stderr so the report itself stays clean.
pub fn print_check_summary(report: &Report, names: usize, elapsed: Duration, colored: bool) {
    let counts = format!(
        "{} {}, {} {}, {} learned {}",
        report.items,
        plural(report.items, "item", "items"),
        report.comments,
        plural(report.comments, "comment", "comments"),
        names,
        plural(names, "name", "names"),
    );
    let timing = format!("in {:.2}s", elapsed.as_secs_f64());

    eprintln!();
    if report.is_clean() {
        if colored {
            eprintln!(
                "{} {} ({} {})",
                "✓".green().bold(),
                "No misspellings found".green().bold(),
                counts,
                timing.dimmed()
            );
        } else {
            eprintln!("✓ No misspellings found ({} {})", counts, timing);
        }
    } else {
        let word = plural(report.misspellings, "misspelling", "misspellings");
        if colored {
            eprintln!(
                "{} {} {} found ({} {})",
                "✗".red().bold(),
                report.misspellings.to_string().red().bold(),
                word,
                counts,
                timing.dimmed()
            );
        } else {
            eprintln!(
                "✗ {} {} found ({} {})",
                report.misspellings, word, counts, timing
            );
        }
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}
