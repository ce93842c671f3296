//! Batch importer for pasted or file-based participant lists
//!
//! One participant per line. Blank lines are skipped. The batch is
//! all-or-nothing: the first line that fails to parse aborts the import and
//! nothing from the batch is returned.

use crate::error::{RaffleError, RaffleOutcome};
use crate::parser::parse_line;
use crate::participant::Participant;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Statistics from a bulk import
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    pub lines_read: usize,
    pub blank_lines: usize,
    pub imported: usize,
}

/// Participants parsed from one batch
#[derive(Debug, Default, Clone)]
pub struct ImportOutcome {
    pub participants: Vec<Participant>,
    pub stats: ImportStats,
}

/// Parse every non-blank line of `text`
///
/// # Errors
///
/// [`RaffleError::Line`] for the first line that fails. Blank lines are
/// dropped before numbering, so the line number is the 1-based position
/// among the entries.
pub fn import_text(text: &str) -> RaffleOutcome<ImportOutcome> {
    let mut outcome = ImportOutcome::default();
    let mut entries = Vec::new();

    for line in text.lines() {
        outcome.stats.lines_read += 1;
        if line.trim().is_empty() {
            outcome.stats.blank_lines += 1;
        } else {
            entries.push(line);
        }
    }

    for (idx, line) in entries.into_iter().enumerate() {
        match parse_line(line) {
            Ok(participant) => {
                debug!(
                    "Line {}: {} contributed {}",
                    idx + 1,
                    participant.name,
                    participant.amount
                );
                outcome.participants.push(participant);
            }
            Err(source) => {
                warn!("Line {}: {} ({:?})", idx + 1, source, line);
                return Err(RaffleError::Line {
                    line: idx + 1,
                    source,
                });
            }
        }
    }

    outcome.stats.imported = outcome.participants.len();
    info!(
        "Parsed {} participants from {} lines",
        outcome.stats.imported, outcome.stats.lines_read
    );

    Ok(outcome)
}

/// Read all of `reader` and import it as one batch
pub fn import_reader<R: Read>(reader: R) -> RaffleOutcome<ImportOutcome> {
    let mut text = String::new();
    BufReader::new(reader).read_to_string(&mut text)?;
    import_text(&text)
}

/// Import a batch from a text file
pub fn import_file(path: &Path) -> RaffleOutcome<ImportOutcome> {
    info!("Reading entries from {:?}", path);
    let file = File::open(path)?;
    import_reader(file)
}
