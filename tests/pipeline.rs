use std::fs;

use bsp_speeches::output::OutputWriter;
use bsp_speeches::prelude::*;
use bsp_speeches::{dates, extract};

/// A trimmed-down API response body in the shape the list endpoint returns
const FIXTURE_BODY: &str = r#"{
    "value": [
        {
            "Title": "The Philippine Economy – Outlook",
            "SDate": "2023-06-29T04:00:00Z",
            "Place": "Manila",
            "Occasion": "Annual Reception",
            "Speaker": "Governor",
            "Transcription": "<p>Good&nbsp;evening, everyone.</p><p>Thank you.</p>"
        },
        {
            "Title": "Remarks",
            "SDate": "2023-01-01T00:00:00Z",
            "Place": null,
            "Speaker": "Deputy Governor"
        }
    ]
}"#;

fn fixture_records() -> Vec<RawSpeech> {
    let body: serde_json::Value = serde_json::from_str(FIXTURE_BODY).unwrap();
    serde_json::from_value(body["value"].clone()).unwrap()
}

#[test]
fn test_extraction_pipeline_end_to_end() {
    let records = fixture_records();
    let speeches = extract::extract_all(&records);

    assert_eq!(speeches.len(), 2);

    // API order (newest first) is preserved
    assert_eq!(speeches[0].sdate, "2023-06-29T04:00:00Z");
    assert_eq!(speeches[1].sdate, "2023-01-01T00:00:00Z");

    // En dash normalized, NBSP replaced, HTML stripped
    assert_eq!(speeches[0].title, "The Philippine Economy - Outlook");
    assert_eq!(speeches[0].occasion, "Annual Reception");
    assert_eq!(
        speeches[0].transcription,
        "Good evening, everyone. Thank you."
    );

    // 04:00 UTC on June 29 is noon PHT the same day
    assert_eq!(speeches[0].date, "June 29, 2023");

    // Missing fields degrade to empty strings, never errors
    assert_eq!(speeches[1].place, "");
    assert_eq!(speeches[1].occasion, "");
    assert_eq!(speeches[1].transcription, "");
    assert_eq!(speeches[1].date, "January 01, 2023");
}

#[test]
fn test_outputs_written_for_fixture() {
    let dir = std::env::temp_dir().join("bsp_speeches_pipeline_test");
    let _ = fs::remove_dir_all(&dir);

    let speeches = extract::extract_all(&fixture_records());
    let writer = OutputWriter::new(Some(&dir)).unwrap();

    writer
        .write_raw_response(FIXTURE_BODY, "raw_response_test.json")
        .unwrap();
    writer.write_processed(&speeches, "speeches.json").unwrap();
    writer.write_csv(&speeches, "speeches.csv").unwrap();

    // Raw dump is verbatim
    let raw = fs::read_to_string(dir.join("raw_responses/raw_response_test.json")).unwrap();
    assert_eq!(raw, FIXTURE_BODY);

    // Processed JSON decodes back to the same speeches
    let processed = fs::read_to_string(dir.join("processed/speeches.json")).unwrap();
    let decoded: Vec<Speech> = serde_json::from_str(&processed).unwrap();
    assert_eq!(decoded, speeches);

    // CSV has the header row plus one row per record
    let csv_text = fs::read_to_string(dir.join("csv/speeches.csv")).unwrap();
    let mut lines = csv_text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Title,Date,Place,Occasion,Speaker,Transcription"
    );
    assert_eq!(lines.count(), 2);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_query_range_construction_matches_fetch_bounds() {
    // The range a user enters maps to inclusive UTC instant bounds
    let start = dates::to_query_instant(Some("January 1, 2023"), false).unwrap();
    let end = dates::to_query_instant(Some("12/31/2023"), true).unwrap();

    assert_eq!(start, "2022-12-31T16:00:00.000Z");
    assert_eq!(end, "2023-12-30T16:00:00.000Z");
    assert!(start < end);
}

#[test]
fn test_config_rejects_saving_without_output_dir() {
    let err = ConfigBuilder::new().save_files(true).build().unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}
