//! JSON file backend

use super::{RaffleState, RaffleStore};
use crate::error::RaffleOutcome;
use log::{debug, info};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Stores the whole state as one pretty-printed JSON document
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl RaffleStore for JsonFileStore {
    fn load(&self) -> RaffleOutcome<RaffleState> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No store at {:?}, starting empty", self.path);
                return Ok(RaffleState::default());
            }
            Err(e) => return Err(e.into()),
        };

        let state: RaffleState = serde_json::from_reader(BufReader::new(file))?;
        state.validate()?;
        debug!(
            "Loaded {} participants and {} draws from {:?}",
            state.participants.len(),
            state.draw_count,
            self.path
        );
        Ok(state)
    }

    fn save(&self, state: &RaffleState) -> RaffleOutcome<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        // Write beside the target and rename so a crash never leaves half a file
        let temp = self.temp_path();
        {
            let mut writer = BufWriter::new(File::create(&temp)?);
            serde_json::to_writer_pretty(&mut writer, state)?;
            writeln!(writer)?;
            writer.flush()?;
        }
        fs::rename(&temp, &self.path)?;

        info!(
            "Saved {} participants to {:?}",
            state.participants.len(),
            self.path
        );
        Ok(())
    }

    fn clear(&self) -> RaffleOutcome<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Removed {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FieldError, RaffleError};
    use crate::participant::Participant;
    use rust_decimal::Decimal;
    use tempfile::TempDir;

    fn sample_state() -> RaffleState {
        RaffleState {
            participants: vec![
                Participant::new("Ann", "ann@x.org", "", Decimal::new(1250, 2)).unwrap(),
                Participant::new("Ben", "", "555-123-4567", Decimal::from(3)).unwrap(),
            ],
            draw_count: 4,
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("raffle.json"));
        assert_eq!(store.load().unwrap(), RaffleState::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("raffle.json"));

        store.save(&sample_state()).unwrap();
        assert_eq!(store.load().unwrap(), sample_state());
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("raffle.json"));

        store.save(&sample_state()).unwrap();
        store.clear().unwrap();
        assert!(!store.path().exists());
        assert_eq!(store.load().unwrap(), RaffleState::default());

        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_loads_numeric_amounts() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("raffle.json");
        fs::write(
            &path,
            r#"{"participants":[{"name":"Cy","email":"","phone":"","amount":20}],"drawCount":2}"#,
        )
        .unwrap();

        let state = JsonFileStore::new(&path).load().unwrap();
        assert_eq!(state.participants[0].amount, Decimal::from(20));
        assert_eq!(state.draw_count, 2);
    }

    #[test]
    fn test_invalid_records_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("raffle.json");
        let store = JsonFileStore::new(&path);

        for (record, expected) in [
            (r#"{"name":"Neg","amount":-5}"#, FieldError::NonPositiveAmount),
            (r#"{"name":"","amount":5}"#, FieldError::EmptyName),
            (
                r#"{"name":"Odd","amount":"1.234"}"#,
                FieldError::TooManyDecimals("1.234".to_string()),
            ),
            (
                r#"{"name":"Rich","amount":"200000000000000000"}"#,
                FieldError::AmountTooLarge("200000000000000000".to_string()),
            ),
        ] {
            fs::write(
                &path,
                format!(
                    r#"{{"participants":[{{"name":"Ok","amount":1}},{}],"drawCount":0}}"#,
                    record
                ),
            )
            .unwrap();

            match store.load().unwrap_err() {
                RaffleError::InvalidRecord { index, source } => {
                    assert_eq!(index, 1);
                    assert_eq!(source, expected);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("raffle.json");
        fs::write(&path, "not json").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, RaffleError::Json(_)));
    }
}
