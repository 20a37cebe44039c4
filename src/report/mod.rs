pub mod entry;

use crate::checker::speller::Speller;
use crate::checker::Session;
use crate::tree::DocTree;
use entry::ReportEntry;
use serde::Serialize;

pub const NO_MISSPELLINGS: &str = "No misspellings found";

/// The spelling report for a whole documentation tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
    pub misspellings: usize,
    pub items: usize,
    pub comments: usize,
}

impl Report {
    /// Check every documented item in `tree`, in tree order.
    pub fn generate<S: Speller>(
        session: &Session<S>,
        tree: &DocTree,
        max_suggestions: usize,
    ) -> Self {
        let mut report = Self::default();

        for node in tree.nodes() {
            report.items += 1;

            for documented in node.documented() {
                if documented.comment.is_empty() {
                    continue;
                }
                report.comments += 1;

                let records = session.find_misspelled(documented.comment);
                if let Some(entry) =
                    ReportEntry::new(session.speller(), &documented, &records, max_suggestions)
                {
                    report.misspellings += records.len();
                    report.entries.push(entry);
                }
            }
        }

        tracing::debug!(
            items = report.items,
            comments = report.comments,
            misspellings = report.misspellings,
            "spelling report complete"
        );

        report
    }

    pub fn is_clean(&self) -> bool {
        self.misspellings == 0
    }

    /// The plain-text report, always ending in a newline.
    pub fn render(&self, colored: bool) -> String {
        if self.is_clean() {
            return format!("{}\n", NO_MISSPELLINGS);
        }

        let mut lines = Vec::new();
        for entry in &self.entries {
            lines.push(entry.header());
            lines.push(String::new());
            lines.extend(entry.misspellings.iter().map(|m| m.block(colored)));
        }

        let mut out = lines.join("\n");
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}
