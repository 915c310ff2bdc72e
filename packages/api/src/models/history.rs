//! # History records
//!
//! A history record is a server-stored prediction input/output pair with a
//! timestamp, read-only from the client. `input_data` keeps the submitted
//! fields as raw JSON maps (the detail view prints whatever the server
//! stored, including rows uploaded in bulk before the current schema), and
//! `result` is a list of named predictions of which the first is the
//! record's own.

use serde::{Deserialize, Serialize};

use crate::models::predict::PredictionResult;

/// Conditions shown as summary columns in the history table.
pub const SUMMARY_CONDITIONS: [&str; 3] = ["Jaundice", "Cardiac", "Respiratory"];

/// One stored prediction, as returned by the history endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub date: String,
    #[serde(default)]
    pub input_data: Vec<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub result: Vec<PredictionResult>,
}

impl HistoryRecord {
    /// The record's prediction, when the server stored one.
    pub fn prediction(&self) -> Option<&PredictionResult> {
        self.result.first()
    }

    /// The raw input fields of the record's first submission.
    pub fn inputs(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
        self.input_data.first().into_iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HistoryRecord {
        serde_json::from_value(serde_json::json!({
            "date": "2026-03-14T09:30:00Z",
            "input_data": [{"name": "Baby A", "apgar_score": 9}],
            "result": [{
                "name": "Baby A",
                "results": [
                    {"condition": "Jaundice", "risk_level": "High", "confidence": 0.82},
                    {"condition": "Cardiac", "risk_level": "Low", "confidence": 0.08},
                    {"condition": "Respiratory", "risk_level": "Medium", "confidence": 0.41}
                ]
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_summary_extraction() {
        let record = sample();
        let prediction = record.prediction().unwrap();

        for condition in SUMMARY_CONDITIONS {
            assert!(prediction.condition(condition).is_some(), "{condition}");
        }
        let jaundice = prediction.condition("Jaundice").unwrap();
        assert_eq!(jaundice.risk_level, "High");
        assert_eq!(jaundice.percent(), 82);
    }

    #[test]
    fn test_missing_condition_is_none() {
        let mut record = sample();
        record.result[0].results.retain(|r| r.condition != "Cardiac");
        assert!(record.prediction().unwrap().condition("Cardiac").is_none());
    }

    #[test]
    fn test_empty_record_tolerated() {
        let record: HistoryRecord =
            serde_json::from_value(serde_json::json!({"date": "2026-03-14T09:30:00Z"})).unwrap();
        assert!(record.prediction().is_none());
        assert_eq!(record.inputs().count(), 0);
    }

    #[test]
    fn test_inputs_come_from_first_submission() {
        let record = sample();
        let inputs: Vec<_> = record.inputs().collect();
        assert_eq!(inputs.len(), 2);
        assert!(inputs.iter().any(|(k, _)| *k == "apgar_score"));
    }
}
