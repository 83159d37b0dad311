use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::screening::questions::DISCLAIMER;

/// Answers keyed by question id. Keys outside the question table are kept but never scored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreeningInput {
    answers: HashMap<String, i64>,
}

impl ScreeningInput {
    /// Builds input from a JSON object. Values that are not whole numbers are dropped,
    /// so `"2"` or `true` never count while `2.0` does.
    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        let answers = object
            .iter()
            .filter_map(|(key, value)| as_whole_number(value).map(|n| (key.clone(), n)))
            .collect();
        Self { answers }
    }

    pub fn answer(&self, question_id: &str) -> Option<i64> {
        self.answers.get(question_id).copied()
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for ScreeningInput {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

fn as_whole_number(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    (f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64).then_some(f as i64)
}

/// Screening-level classification. `Unavailable` and `Error` only appear on degenerate requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Unavailable,
    Error,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::Unavailable => "Unavailable",
            RiskLevel::Error => "Error",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningResult {
    pub score: u32,
    pub risk_level: RiskLevel,
    pub observations: Vec<String>,
    pub next_steps: Vec<String>,
    pub disclaimer: String,
}

impl ScreeningResult {
    /// Result returned when the request carried no answer set at all.
    pub fn unavailable() -> Self {
        Self::degenerate(RiskLevel::Unavailable)
    }

    /// Result returned when the request body could not be read as JSON.
    pub fn error() -> Self {
        Self::degenerate(RiskLevel::Error)
    }

    fn degenerate(risk_level: RiskLevel) -> Self {
        Self {
            score: 0,
            risk_level,
            observations: vec![],
            next_steps: vec![],
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}
