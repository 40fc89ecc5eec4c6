use serde::{Deserialize, Serialize};

use crate::clean::{clean_html, fix_encoding};
use crate::dates::{format_display, to_display_local};

/// A raw speech record as returned by the list API. Only the fields of
/// interest are kept; unknown keys are ignored. Absent keys default to
/// `None` at the boundary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSpeech {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "SDate")]
    pub sdate: Option<String>,
    #[serde(rename = "Place")]
    pub place: Option<String>,
    #[serde(rename = "Occasion")]
    pub occasion: Option<String>,
    #[serde(rename = "Speaker")]
    pub speaker: Option<String>,
    #[serde(rename = "Transcription")]
    pub transcription: Option<String>,
}

/// A cleaned speech record. All fields are plain strings, never null, so
/// downstream tabular consumers stay stable. `sdate` keeps the original
/// UTC instant for chronological sorting independent of `date` formatting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Speech {
    #[serde(rename = "Title")]
    pub title: String,
    /// Display date in Philippine Time, e.g. "January 01, 2023". Empty
    /// when `sdate` is absent or unparseable.
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "SDate")]
    pub sdate: String,
    #[serde(rename = "Place")]
    pub place: String,
    #[serde(rename = "Occasion")]
    pub occasion: String,
    #[serde(rename = "Speaker")]
    pub speaker: String,
    /// Plain text: no markup tags, no known mojibake sequences.
    #[serde(rename = "Transcription")]
    pub transcription: String,
}

/// Extract and clean one raw record. Pure: no I/O, input untouched,
/// deterministic for a given raw record.
pub fn extract(raw: &RawSpeech) -> Speech {
    let formatted_date = to_display_local(raw.sdate.as_deref())
        .map(|date| format_display(&date))
        .unwrap_or_default();

    Speech {
        title: fix_encoding(raw.title.as_deref().unwrap_or_default()),
        date: formatted_date,
        sdate: raw.sdate.clone().unwrap_or_default(),
        place: fix_encoding(raw.place.as_deref().unwrap_or_default()),
        occasion: fix_encoding(raw.occasion.as_deref().unwrap_or_default()),
        speaker: fix_encoding(raw.speaker.as_deref().unwrap_or_default()),
        transcription: clean_html(raw.transcription.as_deref().unwrap_or_default()),
    }
}

/// Extract a batch of raw records, preserving the API's descending-SDate
/// order.
pub fn extract_all(raw_speeches: &[RawSpeech]) -> Vec<Speech> {
    raw_speeches.iter().map(extract).collect()
}
