//! Exportable single-row prediction record

use serde::{Deserialize, Serialize};

use crate::domain::patient::PatientSample;
use crate::domain::prediction::PredictionResult;
use crate::domain::DomainError;

/// File name offered for the CSV download
pub const CSV_FILENAME: &str = "retinopathy_prediction.csv";

/// MIME type of the CSV download
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// Column headers, in export order
pub const CSV_COLUMNS: [&str; 7] = [
    "Model Used",
    "Age",
    "Systolic BP",
    "Diastolic BP",
    "Cholesterol",
    "Prediction",
    "Confidence (%)",
];

/// One exported prediction row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRecord {
    #[serde(rename = "Model Used")]
    pub model_used: String,

    #[serde(rename = "Age")]
    pub age: u32,

    #[serde(rename = "Systolic BP")]
    pub systolic_bp: u32,

    #[serde(rename = "Diastolic BP")]
    pub diastolic_bp: u32,

    #[serde(rename = "Cholesterol")]
    pub cholesterol: u32,

    #[serde(rename = "Prediction")]
    pub prediction: String,

    /// Percentage with two decimals, e.g. `80.00`
    #[serde(rename = "Confidence (%)")]
    pub confidence: String,
}

impl PredictionRecord {
    pub fn new(sample: &PatientSample, result: &PredictionResult) -> Self {
        Self {
            model_used: result.model_name.clone(),
            age: sample.age,
            systolic_bp: sample.systolic_bp,
            diastolic_bp: sample.diastolic_bp,
            cholesterol: sample.cholesterol,
            prediction: result.label.to_string(),
            confidence: result.confidence_text(),
        }
    }

    /// Header plus exactly one data row
    pub fn to_csv(&self) -> Result<String, DomainError> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer
            .serialize(self)
            .map_err(|e| DomainError::internal(format!("Failed to write CSV record: {}", e)))?;

        let bytes = writer
            .into_inner()
            .map_err(|e| DomainError::internal(format!("Failed to flush CSV record: {}", e)))?;

        String::from_utf8(bytes)
            .map_err(|e| DomainError::internal(format!("CSV output is not UTF-8: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prediction::PredictionLabel;
    use crate::domain::report::ResultPanel;

    fn default_record(label: PredictionLabel, confidence: f64) -> PredictionRecord {
        let result = PredictionResult::new("Logistic Regression", label, confidence);
        PredictionRecord::new(&PatientSample::default(), &result)
    }

    #[test]
    fn test_csv_for_default_inputs() {
        let csv = default_record(PredictionLabel::NoRetinopathy, 0.8)
            .to_csv()
            .unwrap();

        assert_eq!(
            csv,
            "Model Used,Age,Systolic BP,Diastolic BP,Cholesterol,Prediction,Confidence (%)\n\
             Logistic Regression,45,120,80,180,No Retinopathy,80.00\n"
        );
    }

    #[test]
    fn test_csv_round_trip_matches_panel() {
        let result = PredictionResult::new("Logistic Regression", PredictionLabel::Retinopathy, 0.93);
        let sample = PatientSample::new(67, 165, 95, 260);
        let record = PredictionRecord::new(&sample, &result);
        let panel = ResultPanel::from_result(&result);

        let csv = record.to_csv().unwrap();
        let mut reader = csv::Reader::from_reader(csv.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(str::to_string)
            .collect();
        assert_eq!(headers, CSV_COLUMNS);

        let rows: Vec<PredictionRecord> = reader.deserialize().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], record);
        assert_eq!(rows[0].age, 67);
        assert!(panel.headline.ends_with(&rows[0].prediction));
        assert_eq!(panel.confidence, format!("Confidence: {}%", rows[0].confidence));
        assert_eq!(panel.model_used, format!("Model Used: {}", rows[0].model_used));
    }

    #[test]
    fn test_model_name_with_comma_is_quoted() {
        let result = PredictionResult::new("Boosted, v2", PredictionLabel::NoRetinopathy, 0.75);
        let csv = PredictionRecord::new(&PatientSample::default(), &result)
            .to_csv()
            .unwrap();

        assert!(csv.contains("\"Boosted, v2\",45,120,80,180,No Retinopathy,75.00"));
    }
}
