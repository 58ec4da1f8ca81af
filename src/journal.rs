use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use eyre::{Result, WrapErr};
use log::warn;

/// Sink for the human-readable run log
pub trait Journal {
    fn record(&mut self, message: &str);
}

/// Appends each message to a log file and echoes it to stdout
pub struct FileJournal {
    file: File,
}

impl FileJournal {
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .wrap_err_with(|| format!("could not open log file {}", path.display()))?;
        Ok(Self { file })
    }
}

impl Journal for FileJournal {
    fn record(&mut self, message: &str) {
        if let Err(e) = writeln!(self.file, "{message}") {
            warn!("Failed to append to log file: {e}");
        }
        println!("{message}");
    }
}

/// Keeps messages in memory
#[derive(Debug, Default)]
pub struct MemoryJournal {
    pub lines: Vec<String>,
}

impl MemoryJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

impl Journal for MemoryJournal {
    fn record(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_journal_appends_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.log");
        std::fs::write(&path, "earlier run\n").unwrap();

        let mut journal = FileJournal::open(&path).unwrap();
        journal.record("first");
        journal.record("second");
        drop(journal);

        let mut journal = FileJournal::open(&path).unwrap();
        journal.record("third");
        drop(journal);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "earlier run\nfirst\nsecond\nthird\n");
    }

    #[test]
    fn test_file_journal_open_fails_for_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileJournal::open(&dir.path().join("nope").join("output.log")).is_err());
    }

    #[test]
    fn test_memory_journal() {
        let mut journal = MemoryJournal::new();
        journal.record("✅ done");
        assert_eq!(journal.lines, ["✅ done"]);
        assert!(journal.contains("done"));
        assert!(!journal.contains("failed"));
    }
}
