//! File output: raw API dumps, processed JSON and CSV exports.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::extract::Speech;

/// CSV column order. `SDate` is deliberately absent; it exists for sorting,
/// not for the export.
const CSV_HEADERS: &[&str] = &["Title", "Date", "Place", "Occasion", "Speaker", "Transcription"];

/// Writes pipeline outputs under a configured base directory
#[derive(Debug)]
pub struct OutputWriter {
    base_dir: PathBuf,
}

impl OutputWriter {
    /// Create a writer rooted at `base_dir`, creating the subdirectories
    /// for raw responses, processed JSON and CSV exports.
    pub fn new(base_dir: Option<&Path>) -> Result<Self> {
        let base_dir = base_dir.ok_or(Error::OutputDirUnset)?;

        fs::create_dir_all(base_dir.join("raw_responses"))?;
        fs::create_dir_all(base_dir.join("processed"))?;
        fs::create_dir_all(base_dir.join("csv"))?;

        Ok(Self {
            base_dir: base_dir.to_path_buf(),
        })
    }

    /// Save the raw API response body as received, before any processing
    pub fn write_raw_response(&self, body: &str, filename: &str) -> Result<PathBuf> {
        let path = self.base_dir.join("raw_responses").join(filename);
        fs::write(&path, body)?;
        println!("Raw API response saved: {}", path.display());
        Ok(path)
    }

    /// Save the processed speeches as a pretty-printed JSON array
    pub fn write_processed(&self, speeches: &[Speech], filename: &str) -> Result<PathBuf> {
        let path = self.base_dir.join("processed").join(filename);
        let json = serde_json::to_string_pretty(speeches)?;
        fs::write(&path, json)?;
        println!("Processed data saved: {}", path.display());
        Ok(path)
    }

    /// Save the speeches as CSV with standard quoting
    pub fn write_csv(&self, speeches: &[Speech], filename: &str) -> Result<PathBuf> {
        let path = self.base_dir.join("csv").join(filename);

        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(CSV_HEADERS)?;
        for speech in speeches {
            writer.write_record([
                speech.title.as_str(),
                speech.date.as_str(),
                speech.place.as_str(),
                speech.occasion.as_str(),
                speech.speaker.as_str(),
                speech.transcription.as_str(),
            ])?;
        }
        writer.flush()?;

        println!("CSV file saved: {}", path.display());
        Ok(path)
    }
}
