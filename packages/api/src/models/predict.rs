//! # Prediction input schema and validation
//!
//! The prediction form is 22 clinical fields, each with a declared type and
//! bound. [`FIELDS`] is the single declarative table the rest of the app
//! works from: the form renders its inputs from it (label, section, select
//! options, numeric step) and [`PredictionDraft::validate`] checks against
//! it, so the rendered constraints and the enforced constraints cannot
//! drift apart.
//!
//! Validation is field-local and pure: given the raw form draft it yields
//! either a fully typed [`PredictionInput`] ready to submit, or a
//! field→message map rendered inline under the offending inputs. Int and
//! code bounds are inclusive on both ends; three measurement pairs carry an
//! exclusive lower bound (a birth weight of exactly 0.5 kg is out of
//! range, 0.50001 kg is in).
//!
//! The result types ([`PredictionResult`], [`ConditionResult`]) normalize
//! the confidence unit at this boundary: the canonical value is a fraction
//! in [0,1], and anything above 1 is treated as an already-scaled
//! percentage. Views only ever render [`ConditionResult::percent`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Form section a field is rendered under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    BasicInfo,
    BirthDetails,
    CurrentMeasurements,
    Vitals,
    FeedingHealth,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::BasicInfo,
        Section::BirthDetails,
        Section::CurrentMeasurements,
        Section::Vitals,
        Section::FeedingHealth,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::BasicInfo => "Basic Info",
            Section::BirthDetails => "Birth Details",
            Section::CurrentMeasurements => "Current Measurements",
            Section::Vitals => "Vitals",
            Section::FeedingHealth => "Feeding & Health",
        }
    }
}

/// Input kind and declared bound for one field.
#[derive(Clone, Copy, Debug)]
pub enum FieldKind {
    /// Free text, non-empty.
    Text,
    /// Categorical code rendered as a select.
    Code { options: &'static [(i64, &'static str)] },
    /// Whole number, inclusive bounds.
    Int { min: i64, max: i64 },
    /// Measurement, inclusive upper bound; `min_exclusive` marks an open
    /// lower bound.
    Float {
        min: f64,
        max: f64,
        min_exclusive: bool,
    },
}

/// One entry of the declared field schema.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub section: Section,
    pub kind: FieldKind,
}

const GENDER_OPTIONS: &[(i64, &str)] = &[(0, "Male"), (1, "Female")];
const FEEDING_OPTIONS: &[(i64, &str)] = &[(0, "Breastfeeding"), (1, "Formula")];
const IMMUNIZATION_OPTIONS: &[(i64, &str)] = &[(1, "Done"), (0, "Not Done")];
const REFLEX_OPTIONS: &[(i64, &str)] = &[(1, "Normal"), (0, "Abnormal")];

/// The declared prediction input schema, in form order.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        label: "Name",
        section: Section::BasicInfo,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "gender",
        label: "Gender",
        section: Section::BasicInfo,
        kind: FieldKind::Code {
            options: GENDER_OPTIONS,
        },
    },
    FieldSpec {
        name: "gestational_age_weeks",
        label: "Gestational Age (weeks)",
        section: Section::BirthDetails,
        kind: FieldKind::Int { min: 22, max: 42 },
    },
    FieldSpec {
        name: "birth_weight_kg",
        label: "Birth Weight (kg)",
        section: Section::BirthDetails,
        kind: FieldKind::Float {
            min: 0.5,
            max: 6.0,
            min_exclusive: true,
        },
    },
    FieldSpec {
        name: "birth_length_cm",
        label: "Birth Length (cm)",
        section: Section::BirthDetails,
        kind: FieldKind::Float {
            min: 30.0,
            max: 60.0,
            min_exclusive: true,
        },
    },
    FieldSpec {
        name: "birth_head_circumference_cm",
        label: "Birth Head Circumference (cm)",
        section: Section::BirthDetails,
        kind: FieldKind::Float {
            min: 20.0,
            max: 40.0,
            min_exclusive: true,
        },
    },
    FieldSpec {
        name: "age_days",
        label: "Age (days)",
        section: Section::CurrentMeasurements,
        kind: FieldKind::Int { min: 0, max: 28 },
    },
    FieldSpec {
        name: "weight_kg",
        label: "Weight (kg)",
        section: Section::CurrentMeasurements,
        kind: FieldKind::Float {
            min: 0.5,
            max: 6.0,
            min_exclusive: true,
        },
    },
    FieldSpec {
        name: "length_cm",
        label: "Length (cm)",
        section: Section::CurrentMeasurements,
        kind: FieldKind::Float {
            min: 30.0,
            max: 60.0,
            min_exclusive: true,
        },
    },
    FieldSpec {
        name: "head_circumference_cm",
        label: "Head Circumference (cm)",
        section: Section::CurrentMeasurements,
        kind: FieldKind::Float {
            min: 20.0,
            max: 40.0,
            min_exclusive: true,
        },
    },
    FieldSpec {
        name: "temperature_c",
        label: "Temperature (°C)",
        section: Section::Vitals,
        kind: FieldKind::Float {
            min: 35.0,
            max: 42.0,
            min_exclusive: false,
        },
    },
    FieldSpec {
        name: "heart_rate_bpm",
        label: "Heart Rate (bpm)",
        section: Section::Vitals,
        kind: FieldKind::Int { min: 60, max: 220 },
    },
    FieldSpec {
        name: "respiratory_rate_bpm",
        label: "Respiratory Rate (bpm)",
        section: Section::Vitals,
        kind: FieldKind::Int { min: 20, max: 90 },
    },
    FieldSpec {
        name: "oxygen_saturation",
        label: "Oxygen Saturation (%)",
        section: Section::Vitals,
        kind: FieldKind::Float {
            min: 70.0,
            max: 100.0,
            min_exclusive: false,
        },
    },
    FieldSpec {
        name: "feeding_type",
        label: "Feeding Type",
        section: Section::FeedingHealth,
        kind: FieldKind::Code {
            options: FEEDING_OPTIONS,
        },
    },
    FieldSpec {
        name: "feeding_frequency_per_day",
        label: "Feeding Frequency / Day",
        section: Section::FeedingHealth,
        kind: FieldKind::Int { min: 1, max: 12 },
    },
    FieldSpec {
        name: "urine_output_count",
        label: "Urine Output Count",
        section: Section::FeedingHealth,
        kind: FieldKind::Int { min: 0, max: 10 },
    },
    FieldSpec {
        name: "stool_count",
        label: "Stool Count",
        section: Section::FeedingHealth,
        kind: FieldKind::Int { min: 0, max: 10 },
    },
    FieldSpec {
        name: "jaundice_level_mg_dl",
        label: "Jaundice Level (mg/dl)",
        section: Section::FeedingHealth,
        kind: FieldKind::Float {
            min: 0.1,
            max: 30.0,
            min_exclusive: false,
        },
    },
    FieldSpec {
        name: "apgar_score",
        label: "APGAR Score",
        section: Section::FeedingHealth,
        kind: FieldKind::Int { min: 0, max: 10 },
    },
    FieldSpec {
        name: "immunizations_done",
        label: "Immunizations Done",
        section: Section::FeedingHealth,
        kind: FieldKind::Code {
            options: IMMUNIZATION_OPTIONS,
        },
    },
    FieldSpec {
        name: "reflexes_normal",
        label: "Reflexes Normal",
        section: Section::FeedingHealth,
        kind: FieldKind::Code {
            options: REFLEX_OPTIONS,
        },
    },
];

impl FieldSpec {
    /// Numeric step attribute for the rendered input.
    pub fn step(&self) -> Option<&'static str> {
        match self.kind {
            FieldKind::Float { .. } => Some("0.01"),
            _ => None,
        }
    }

    fn parse(&self, raw: &str) -> Result<Parsed, String> {
        let raw = raw.trim();
        match self.kind {
            FieldKind::Text => {
                if raw.is_empty() {
                    Err(format!("{} is required", self.label))
                } else {
                    Ok(Parsed::Text(raw.to_string()))
                }
            }
            FieldKind::Code { options } => {
                let value: i64 = raw.parse().map_err(|_| "Select an option".to_string())?;
                if options.iter().any(|(code, _)| *code == value) {
                    Ok(Parsed::Int(value))
                } else {
                    Err("Select an option".to_string())
                }
            }
            FieldKind::Int { min, max } => {
                let value: i64 = raw
                    .parse()
                    .map_err(|_| "Enter a whole number".to_string())?;
                if value < min {
                    Err(format!("Minimum {min}"))
                } else if value > max {
                    Err(format!("Maximum {max}"))
                } else {
                    Ok(Parsed::Int(value))
                }
            }
            FieldKind::Float {
                min,
                max,
                min_exclusive,
            } => {
                let value: f64 = raw.parse().map_err(|_| "Enter a number".to_string())?;
                if !value.is_finite() {
                    Err("Enter a number".to_string())
                } else if min_exclusive && value <= min {
                    Err(format!("Must be > {min}"))
                } else if !min_exclusive && value < min {
                    Err(format!("Minimum {min}"))
                } else if value > max {
                    Err(format!("Maximum {max}"))
                } else {
                    Ok(Parsed::Float(value))
                }
            }
        }
    }
}

enum Parsed {
    Text(String),
    Int(i64),
    Float(f64),
}

/// Field name → human-readable violation message.
pub type ValidationErrors = BTreeMap<&'static str, String>;

/// Raw form state: field name → entered text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictionDraft {
    values: BTreeMap<String, String>,
}

impl PredictionDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    /// Check every field against its declared bound.
    ///
    /// Returns the fully typed input when the whole draft is in range, or
    /// one message per violated field otherwise. Constraints are
    /// field-local; there are no cross-field checks.
    pub fn validate(&self) -> Result<PredictionInput, ValidationErrors> {
        let mut parsed = BTreeMap::new();
        let mut errors = ValidationErrors::new();

        for spec in FIELDS {
            match spec.parse(self.get(spec.name)) {
                Ok(value) => {
                    parsed.insert(spec.name, value);
                }
                Err(message) => {
                    errors.insert(spec.name, message);
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let text = |name: &str| match parsed.get(name) {
            Some(Parsed::Text(v)) => v.clone(),
            _ => String::new(),
        };
        let int = |name: &str| match parsed.get(name) {
            Some(Parsed::Int(v)) => *v,
            _ => 0,
        };
        let float = |name: &str| match parsed.get(name) {
            Some(Parsed::Float(v)) => *v,
            _ => 0.0,
        };

        Ok(PredictionInput {
            name: text("name"),
            gender: int("gender"),
            gestational_age_weeks: int("gestational_age_weeks"),
            birth_weight_kg: float("birth_weight_kg"),
            birth_length_cm: float("birth_length_cm"),
            birth_head_circumference_cm: float("birth_head_circumference_cm"),
            age_days: int("age_days"),
            weight_kg: float("weight_kg"),
            length_cm: float("length_cm"),
            head_circumference_cm: float("head_circumference_cm"),
            temperature_c: float("temperature_c"),
            heart_rate_bpm: int("heart_rate_bpm"),
            respiratory_rate_bpm: int("respiratory_rate_bpm"),
            oxygen_saturation: float("oxygen_saturation"),
            feeding_type: int("feeding_type"),
            feeding_frequency_per_day: int("feeding_frequency_per_day"),
            urine_output_count: int("urine_output_count"),
            stool_count: int("stool_count"),
            jaundice_level_mg_dl: float("jaundice_level_mg_dl"),
            apgar_score: int("apgar_score"),
            immunizations_done: int("immunizations_done"),
            reflexes_normal: int("reflexes_normal"),
        })
    }
}

/// A fully validated prediction input, ready to submit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    pub name: String,
    pub gender: i64,
    pub gestational_age_weeks: i64,
    pub birth_weight_kg: f64,
    pub birth_length_cm: f64,
    pub birth_head_circumference_cm: f64,
    pub age_days: i64,
    pub weight_kg: f64,
    pub length_cm: f64,
    pub head_circumference_cm: f64,
    pub temperature_c: f64,
    pub heart_rate_bpm: i64,
    pub respiratory_rate_bpm: i64,
    pub oxygen_saturation: f64,
    pub feeding_type: i64,
    pub feeding_frequency_per_day: i64,
    pub urine_output_count: i64,
    pub stool_count: i64,
    pub jaundice_level_mg_dl: f64,
    pub apgar_score: i64,
    pub immunizations_done: i64,
    pub reflexes_normal: i64,
}

/// Assessed risk bucket for one condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Unknown,
}

impl RiskLevel {
    /// Case-insensitive parse; anything unrecognized is [`RiskLevel::Unknown`].
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "low" => RiskLevel::Low,
            "medium" => RiskLevel::Medium,
            "high" => RiskLevel::High,
            _ => RiskLevel::Unknown,
        }
    }
}

/// One condition's assessed risk and confidence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConditionResult {
    pub condition: String,
    pub risk_level: String,
    pub confidence: f64,
}

impl ConditionResult {
    /// Confidence as a fraction in [0,1]. A value above 1 is taken to be
    /// an already-scaled percentage and divided down.
    pub fn fraction(&self) -> f64 {
        if self.confidence > 1.0 {
            self.confidence / 100.0
        } else {
            self.confidence
        }
    }

    /// Confidence as a rounded percentage.
    pub fn percent(&self) -> u32 {
        (self.fraction() * 100.0).round() as u32
    }

    pub fn risk(&self) -> RiskLevel {
        RiskLevel::parse(&self.risk_level)
    }
}

/// A named prediction: one record's per-condition risk assessments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub name: String,
    pub results: Vec<ConditionResult>,
}

impl PredictionResult {
    /// Look up a condition by its exact name.
    pub fn condition(&self, name: &str) -> Option<&ConditionResult> {
        self.results.iter().find(|r| r.condition == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> PredictionDraft {
        let mut draft = PredictionDraft::new();
        draft.set("name", "Baby A");
        draft.set("gender", "1");
        draft.set("gestational_age_weeks", "38");
        draft.set("birth_weight_kg", "3.2");
        draft.set("birth_length_cm", "50");
        draft.set("birth_head_circumference_cm", "34");
        draft.set("age_days", "5");
        draft.set("weight_kg", "3.1");
        draft.set("length_cm", "50.5");
        draft.set("head_circumference_cm", "34.2");
        draft.set("temperature_c", "36.8");
        draft.set("heart_rate_bpm", "130");
        draft.set("respiratory_rate_bpm", "45");
        draft.set("oxygen_saturation", "97.5");
        draft.set("feeding_type", "0");
        draft.set("feeding_frequency_per_day", "8");
        draft.set("urine_output_count", "6");
        draft.set("stool_count", "3");
        draft.set("jaundice_level_mg_dl", "4.5");
        draft.set("apgar_score", "9");
        draft.set("immunizations_done", "1");
        draft.set("reflexes_normal", "1");
        draft
    }

    #[test]
    fn test_valid_draft_round_trips() {
        let input = valid_draft().validate().expect("draft should be valid");

        assert_eq!(input.name, "Baby A");
        assert_eq!(input.gender, 1);
        assert_eq!(input.gestational_age_weeks, 38);
        assert_eq!(input.birth_weight_kg, 3.2);
        assert_eq!(input.temperature_c, 36.8);
        assert_eq!(input.oxygen_saturation, 97.5);
        assert_eq!(input.reflexes_normal, 1);
    }

    #[test]
    fn test_every_field_rejects_out_of_range() {
        // One out-of-range value per field; each must produce exactly that
        // field's error.
        let bad: &[(&str, &str)] = &[
            ("name", ""),
            ("gender", "2"),
            ("gestational_age_weeks", "21"),
            ("birth_weight_kg", "6.1"),
            ("birth_length_cm", "30"),
            ("birth_head_circumference_cm", "20"),
            ("age_days", "29"),
            ("weight_kg", "0.5"),
            ("length_cm", "61"),
            ("head_circumference_cm", "41"),
            ("temperature_c", "34.9"),
            ("heart_rate_bpm", "59"),
            ("respiratory_rate_bpm", "91"),
            ("oxygen_saturation", "69.9"),
            ("feeding_type", "3"),
            ("feeding_frequency_per_day", "0"),
            ("urine_output_count", "11"),
            ("stool_count", "-1"),
            ("jaundice_level_mg_dl", "0.05"),
            ("apgar_score", "11"),
            ("immunizations_done", "2"),
            ("reflexes_normal", "-1"),
        ];

        for (field, value) in bad {
            let mut draft = valid_draft();
            draft.set(field, *value);
            let errors = draft
                .validate()
                .expect_err(&format!("{field}={value} should be rejected"));
            assert_eq!(errors.len(), 1, "{field}={value}: {errors:?}");
            assert!(errors.contains_key(field), "{field}: {errors:?}");
        }
    }

    #[test]
    fn test_exclusive_lower_bound() {
        let mut draft = valid_draft();
        draft.set("birth_weight_kg", "0.5");
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get("birth_weight_kg").map(String::as_str), Some("Must be > 0.5"));

        draft.set("birth_weight_kg", "0.50001");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_inclusive_int_bound() {
        let mut draft = valid_draft();
        draft.set("heart_rate_bpm", "60");
        assert!(draft.validate().is_ok());

        draft.set("heart_rate_bpm", "59");
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get("heart_rate_bpm").map(String::as_str), Some("Minimum 60"));
    }

    #[test]
    fn test_inclusive_float_bound() {
        let mut draft = valid_draft();
        draft.set("temperature_c", "35.0");
        assert!(draft.validate().is_ok());
        draft.set("temperature_c", "42.0");
        assert!(draft.validate().is_ok());
        draft.set("temperature_c", "42.01");
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_non_numeric_input() {
        let mut draft = valid_draft();
        draft.set("heart_rate_bpm", "fast");
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.get("heart_rate_bpm").map(String::as_str),
            Some("Enter a whole number")
        );

        let mut draft = valid_draft();
        draft.set("weight_kg", "heavy");
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get("weight_kg").map(String::as_str), Some("Enter a number"));
    }

    #[test]
    fn test_nan_is_rejected() {
        let mut draft = valid_draft();
        draft.set("weight_kg", "NaN");
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_fractional_value_for_int_field() {
        let mut draft = valid_draft();
        draft.set("apgar_score", "7.5");
        let errors = draft.validate().unwrap_err();
        assert!(errors.contains_key("apgar_score"));
    }

    #[test]
    fn test_empty_select_prompts_for_option() {
        let mut draft = valid_draft();
        draft.set("gender", "");
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get("gender").map(String::as_str), Some("Select an option"));
    }

    #[test]
    fn test_all_errors_reported_together() {
        let draft = PredictionDraft::new();
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), FIELDS.len());
    }

    #[test]
    fn test_input_serializes_with_field_names() {
        let input = valid_draft().validate().unwrap();
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["name"], "Baby A");
        assert_eq!(json["gestational_age_weeks"], 38);
        assert_eq!(json["birth_weight_kg"], 3.2);
        assert_eq!(json.as_object().unwrap().len(), FIELDS.len());
    }

    #[test]
    fn test_risk_level_parse() {
        assert_eq!(RiskLevel::parse("High"), RiskLevel::High);
        assert_eq!(RiskLevel::parse("high"), RiskLevel::High);
        assert_eq!(RiskLevel::parse("MEDIUM"), RiskLevel::Medium);
        assert_eq!(RiskLevel::parse("Low"), RiskLevel::Low);
        assert_eq!(RiskLevel::parse("elevated"), RiskLevel::Unknown);
        assert_eq!(RiskLevel::parse(""), RiskLevel::Unknown);
    }

    #[test]
    fn test_confidence_normalization() {
        let fraction = ConditionResult {
            condition: "Jaundice".to_string(),
            risk_level: "High".to_string(),
            confidence: 0.82,
        };
        assert_eq!(fraction.percent(), 82);

        let percentage = ConditionResult {
            condition: "Jaundice".to_string(),
            risk_level: "High".to_string(),
            confidence: 82.0,
        };
        assert_eq!(percentage.percent(), 82);
    }

    #[test]
    fn test_condition_lookup() {
        let result = PredictionResult {
            name: "Baby A".to_string(),
            results: vec![ConditionResult {
                condition: "Jaundice".to_string(),
                risk_level: "Low".to_string(),
                confidence: 0.12,
            }],
        };
        assert!(result.condition("Jaundice").is_some());
        assert!(result.condition("Cardiac").is_none());
    }
}
