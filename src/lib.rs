//! Fetch, clean and export public speeches from the BSP content API.
//!
//! The pipeline normalizes user-supplied date bounds into UTC query
//! instants, retrieves matching records from the SharePoint-style list
//! endpoint, repairs text encoding, strips transcription HTML, and writes
//! raw, processed-JSON and CSV outputs.

pub mod clean;
pub mod config;
pub mod dates;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod output;
pub mod processor;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use extract::{RawSpeech, Speech};
pub use processor::SpeechProcessor;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::config::{Config, ConfigBuilder};
    pub use crate::error::{Error, Result};
    pub use crate::extract::{RawSpeech, Speech};
    pub use crate::processor::SpeechProcessor;
}
