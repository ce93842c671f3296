//! Bulk import of free-text participant lines

mod import;

pub use import::{import_file, import_reader, import_text, ImportOutcome, ImportStats};
