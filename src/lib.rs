pub mod checker;
pub mod cli;
pub mod config;
pub mod dict;
pub mod error;
pub mod report;
pub mod tree;

pub use checker::speller::{FstSpeller, Speller};
pub use checker::Session;
pub use config::Config;
pub use error::DocspellError;
pub use report::Report;
pub use tree::DocTree;

use serde::Serialize;

/// A misspelled word and where its owning comment says it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MisspellingRecord {
    pub word: String,
    pub offset: usize,
}
