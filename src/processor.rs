use chrono::Utc;

use crate::config::Config;
use crate::dates;
use crate::error::Result;
use crate::extract::{extract_all, Speech};
use crate::fetch::FetchClient;
use crate::output::OutputWriter;

/// Main pipeline: fetch speeches in a date range, clean them and
/// optionally persist raw, processed and CSV outputs.
pub struct SpeechProcessor {
    config: Config,
}

impl SpeechProcessor {
    /// Create a new processor with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Filename stem for a range, e.g. `speeches_6-29_to_today`
    fn filename_prefix(&self) -> String {
        let start = self
            .config
            .start_date
            .as_deref()
            .map(|s| s.replace('/', "-"))
            .unwrap_or_else(|| "all".to_string());
        let end = self
            .config
            .end_date
            .as_deref()
            .map(|s| s.replace('/', "-"))
            .unwrap_or_else(|| "today".to_string());
        format!("speeches_{}_to_{}", start, end)
    }

    /// Run the pipeline and return the cleaned speeches, newest first.
    ///
    /// Bad explicit date bounds and a missing output folder abort the run;
    /// per-record field problems only degrade that field to an empty
    /// string.
    pub fn run(&self) -> Result<Vec<Speech>> {
        let start_instant = dates::to_query_instant(self.config.start_date.as_deref(), false)?;
        let end_instant = dates::to_query_instant(self.config.end_date.as_deref(), true)?;

        println!(
            "Fetching speeches from {} to {}...",
            self.config.start_date.as_deref().unwrap_or("beginning"),
            self.config.end_date.as_deref().unwrap_or("today"),
        );

        let client = FetchClient::new(&self.config.base_url)?;
        let response = client.fetch(&start_instant, &end_instant, self.config.top)?;

        let writer = if self.config.save_files {
            let writer = OutputWriter::new(self.config.output_dir.as_deref())?;
            let raw_filename = format!(
                "raw_response_{}.json",
                Utc::now().format("%Y%m%d_%H%M%S")
            );
            writer.write_raw_response(&response.body, &raw_filename)?;
            Some(writer)
        } else {
            None
        };

        if response.records.is_empty() {
            println!("No speeches found for the given date range.");
            return Ok(Vec::new());
        }

        let speeches = extract_all(&response.records);

        if let Some(writer) = writer {
            let prefix = self.filename_prefix();
            writer.write_processed(&speeches, &format!("{}.json", prefix))?;
            writer.write_csv(&speeches, &format!("{}.csv", prefix))?;
        }

        Ok(speeches)
    }
}
