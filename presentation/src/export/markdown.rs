//! Markdown export of a finished reading

use chrono::{Local, NaiveDate};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tarot_domain::Reading;
use thiserror::Error;
use tracing::info;

/// Gives up after this many name collisions on the same day
const MAX_SUFFIX: u32 = 999;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to create export directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No free file name for {0} in {1}")]
    NoFreeName(String, PathBuf),
}

/// Writes readings as `tarot-reading-YYYY-MM-DD.md` files
#[derive(Debug, Clone)]
pub struct ReadingExporter {
    dir: PathBuf,
}

impl ReadingExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Export with today's local date in the file name
    pub fn export(&self, reading: &Reading) -> Result<PathBuf, ExportError> {
        self.export_on(reading, Local::now().date_naive())
    }

    /// Export with `date` in the file name. Existing files are never
    /// overwritten; `-2`, `-3`, ... is appended instead.
    pub fn export_on(&self, reading: &Reading, date: NaiveDate) -> Result<PathBuf, ExportError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| ExportError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let stem = format!("tarot-reading-{}", date.format("%Y-%m-%d"));
        let content = Self::render(reading, date);

        for n in 1..=MAX_SUFFIX {
            let name = if n == 1 {
                format!("{}.md", stem)
            } else {
                format!("{}-{}.md", stem, n)
            };
            let path = self.dir.join(name);

            // create_new fails if the file exists, so a concurrent writer can't be clobbered
            let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => file,
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => continue,
                Err(source) => return Err(ExportError::Write { path, source }),
            };

            file.write_all(content.as_bytes())
                .map_err(|source| ExportError::Write {
                    path: path.clone(),
                    source,
                })?;

            info!("Reading saved to {}", path.display());
            return Ok(path);
        }

        Err(ExportError::NoFreeName(stem, self.dir.clone()))
    }

    /// Markdown body: title, question, cards, reading text
    pub fn render(reading: &Reading, date: NaiveDate) -> String {
        let mut md = String::new();
        md.push_str(&format!("# Deep Tarot Reading ({})\n\n", date.format("%Y-%m-%d")));
        md.push_str(&format!("> {}\n\n", reading.question));
        md.push_str("## Cards\n\n");
        for (i, card) in reading.cards.iter().enumerate() {
            md.push_str(&format!("{}. {} {}\n", i + 1, card.icon(), card.name));
        }
        md.push_str("\n## Reading\n\n");
        md.push_str(reading.text.trim_end());
        md.push('\n');
        md
    }
}
