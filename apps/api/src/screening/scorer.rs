//! Screening scorer — maps an answer set to a risk band with fixed advisory text.
//!
//! Two scoring policies exist and exactly one is in force per process:
//!
//! - `TriggerWeighted` (default): each question answered with the concern value
//!   adds a fixed weight. Bands: `<= 3` Low, `4..=7` Moderate, `> 7` High.
//! - `RawSum`: the answers to the six questions are summed as-is.
//!   Bands: `<= 6` Low, `7..=12` Moderate, `> 12` High.
//!
//! Both policies emit observations for concern answers only, in table order.

use serde::Serialize;

use crate::screening::models::{RiskLevel, ScreeningInput, ScreeningResult};
use crate::screening::questions::{next_steps_for, CONCERN_VALUE, CONCERN_WEIGHT, DISCLAIMER, QUESTIONS};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    #[default]
    TriggerWeighted,
    RawSum,
}

impl ScoringPolicy {
    /// Inclusive upper bounds of the Low and Moderate bands.
    fn breakpoints(self) -> (u32, u32) {
        match self {
            ScoringPolicy::TriggerWeighted => (3, 7),
            ScoringPolicy::RawSum => (6, 12),
        }
    }

    fn contribution(self, answer: i64) -> u32 {
        match self {
            ScoringPolicy::TriggerWeighted if answer == CONCERN_VALUE => CONCERN_WEIGHT,
            ScoringPolicy::TriggerWeighted => 0,
            ScoringPolicy::RawSum => u32::try_from(answer.max(0)).unwrap_or(u32::MAX),
        }
    }

    pub fn classify(self, score: u32) -> RiskLevel {
        let (low_max, moderate_max) = self.breakpoints();
        if score <= low_max {
            RiskLevel::Low
        } else if score <= moderate_max {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }
}

/// Scores an answer set. Total and side-effect free: unknown keys and values are ignored.
pub fn analyze_screening(input: &ScreeningInput, policy: ScoringPolicy) -> ScreeningResult {
    let mut score = 0_u32;
    let mut observations = Vec::new();

    for question in &QUESTIONS {
        let Some(answer) = input.answer(question.id) else {
            continue;
        };
        score = score.saturating_add(policy.contribution(answer));
        if answer == CONCERN_VALUE {
            observations.push(question.observation.to_string());
        }
    }

    let risk_level = policy.classify(score);

    ScreeningResult {
        score,
        risk_level,
        observations,
        next_steps: next_steps_for(risk_level)
            .iter()
            .map(|s| s.to_string())
            .collect(),
        disclaimer: DISCLAIMER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(pairs: &[(&str, i64)]) -> ScreeningInput {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    fn observation(id: &str) -> String {
        QUESTIONS
            .iter()
            .find(|q| q.id == id)
            .map(|q| q.observation.to_string())
            .unwrap()
    }

    #[test]
    fn test_two_concerns_is_moderate() {
        let result = analyze_screening(
            &input(&[("q1", 2), ("q3", 2)]),
            ScoringPolicy::TriggerWeighted,
        );
        assert_eq!(result.score, 4);
        assert_eq!(result.risk_level, RiskLevel::Moderate);
        assert_eq!(result.observations, vec![observation("q1"), observation("q3")]);
        assert_eq!(result.next_steps.len(), 3);
    }

    #[test]
    fn test_empty_input_is_low() {
        let result = analyze_screening(&ScreeningInput::default(), ScoringPolicy::TriggerWeighted);
        assert_eq!(result.score, 0);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert!(result.observations.is_empty());
        assert_eq!(result.disclaimer, DISCLAIMER);
    }

    #[test]
    fn test_non_concern_values_do_not_score() {
        let result = analyze_screening(
            &input(&[("q1", 1), ("q2", 0), ("q3", 3), ("q4", -2)]),
            ScoringPolicy::TriggerWeighted,
        );
        assert_eq!(result.score, 0);
        assert!(result.observations.is_empty());
    }

    #[test]
    fn test_unknown_keys_are_inert() {
        let base = analyze_screening(&input(&[("q2", 2)]), ScoringPolicy::TriggerWeighted);
        let noisy = analyze_screening(
            &input(&[("q2", 2), ("q7", 2), ("name", 2), ("Q1", 2)]),
            ScoringPolicy::TriggerWeighted,
        );
        assert_eq!(base, noisy);
    }

    #[test]
    fn test_observations_follow_table_order() {
        let forward = analyze_screening(
            &input(&[("q6", 2), ("q2", 2), ("q4", 2)]),
            ScoringPolicy::TriggerWeighted,
        );
        assert_eq!(
            forward.observations,
            vec![observation("q2"), observation("q4"), observation("q6")]
        );
    }

    #[test]
    fn test_trigger_weighted_breakpoints() {
        let policy = ScoringPolicy::TriggerWeighted;
        assert_eq!(policy.classify(0), RiskLevel::Low);
        assert_eq!(policy.classify(3), RiskLevel::Low);
        assert_eq!(policy.classify(4), RiskLevel::Moderate);
        assert_eq!(policy.classify(7), RiskLevel::Moderate);
        assert_eq!(policy.classify(8), RiskLevel::High);
    }

    #[test]
    fn test_all_concerns_is_high() {
        let all: Vec<(&str, i64)> = QUESTIONS.iter().map(|q| (q.id, 2)).collect();
        let result = analyze_screening(&input(&all), ScoringPolicy::TriggerWeighted);
        assert_eq!(result.score, 12);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.observations.len(), 6);
    }

    #[test]
    fn test_raw_sum_counts_every_answer() {
        let result = analyze_screening(
            &input(&[("q1", 1), ("q2", 1), ("q3", 2), ("q4", 1), ("q5", 2), ("q9", 2)]),
            ScoringPolicy::RawSum,
        );
        assert_eq!(result.score, 7);
        assert_eq!(result.risk_level, RiskLevel::Moderate);
        assert_eq!(result.observations, vec![observation("q3"), observation("q5")]);
    }

    #[test]
    fn test_raw_sum_breakpoints() {
        let policy = ScoringPolicy::RawSum;
        assert_eq!(policy.classify(6), RiskLevel::Low);
        assert_eq!(policy.classify(7), RiskLevel::Moderate);
        assert_eq!(policy.classify(12), RiskLevel::Moderate);
        assert_eq!(policy.classify(13), RiskLevel::High);
    }

    #[test]
    fn test_raw_sum_ignores_negative_answers() {
        let result = analyze_screening(&input(&[("q1", -5), ("q2", 1)]), ScoringPolicy::RawSum);
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_result_is_deterministic() {
        let answers = input(&[("q1", 2), ("q5", 2), ("q6", 1)]);
        assert_eq!(
            analyze_screening(&answers, ScoringPolicy::TriggerWeighted),
            analyze_screening(&answers, ScoringPolicy::TriggerWeighted)
        );
    }
}
