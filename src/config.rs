use crate::error::{Error, Result};
use std::path::PathBuf;

/// Default list API endpoint for BSP speeches.
pub const DEFAULT_BASE_URL: &str =
    "https://www.bsp.gov.ph/_api/web/lists/getByTitle('Speeches%20list')/items";

/// Maximum number of records requested per fetch.
pub const DEFAULT_TOP: usize = 5000;

/// Configuration for the speech pipeline
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub output_dir: Option<PathBuf>,
    pub save_files: bool,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub top: usize,
}

impl Config {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: None,
            save_files: false,
            start_date: None,
            end_date: None,
            top: DEFAULT_TOP,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::Config("Base URL must not be empty".to_string()));
        }

        if self.top == 0 {
            return Err(Error::Config("Record limit must be positive".to_string()));
        }

        if self.save_files && self.output_dir.is_none() {
            return Err(Error::Config(
                "Output folder must be set to save files".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating configurations
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: Config::new(),
        }
    }

    /// Override the list API endpoint
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the output directory and enable file saving
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = Some(dir.into());
        self.config.save_files = true;
        self
    }

    /// Enable or disable file saving
    pub fn save_files(mut self, save: bool) -> Self {
        self.config.save_files = save;
        self
    }

    /// Set the start date bound (any recognized format, blank means none)
    pub fn start_date(mut self, date: impl Into<String>) -> Self {
        let date = date.into();
        self.config.start_date = if date.trim().is_empty() {
            None
        } else {
            Some(date)
        };
        self
    }

    /// Set the end date bound (any recognized format, blank means none)
    pub fn end_date(mut self, date: impl Into<String>) -> Self {
        let date = date.into();
        self.config.end_date = if date.trim().is_empty() {
            None
        } else {
            Some(date)
        };
        self
    }

    /// Set the maximum number of records per fetch
    pub fn top(mut self, top: usize) -> Self {
        self.config.top = top;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
