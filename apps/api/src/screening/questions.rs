//! Fixed question table and advisory text.
//!
//! Wording is neutral and observational. Nothing here should read as a diagnosis.

use crate::screening::models::RiskLevel;

/// A screening question and the observation surfaced when it is answered with concern.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub id: &'static str,
    pub observation: &'static str,
}

/// Answer value that marks a question as a concern.
pub const CONCERN_VALUE: i64 = 2;

/// Score added per question answered with [`CONCERN_VALUE`].
pub const CONCERN_WEIGHT: u32 = 2;

/// Declaration order drives observation order in the result.
pub const QUESTIONS: [Question; 6] = [
    Question {
        id: "q1",
        observation: "Inconsistent response to name can influence shared attention and early social engagement.",
    },
    Question {
        id: "q2",
        observation: "Reduced eye contact may affect non-verbal communication cues during interaction.",
    },
    Question {
        id: "q3",
        observation: "Limited use of gestures can impact early communication and expression of needs.",
    },
    Question {
        id: "q4",
        observation: "Repetitive behaviors are often monitored as part of developmental observation.",
    },
    Question {
        id: "q5",
        observation: "Strong sensory reactions may influence comfort and interaction with the environment.",
    },
    Question {
        id: "q6",
        observation: "Limited imaginative play can affect social role exploration and flexible thinking.",
    },
];

pub const DISCLAIMER: &str = "This screening highlights patterns commonly monitored in early development. \
    It does not provide a medical diagnosis.";

const LOW_NEXT_STEPS: [&str; 3] = [
    "Continue observing your child’s development during everyday activities.",
    "Encourage communication, play, and social interaction at a comfortable pace.",
    "If questions arise, discussing them with a pediatric professional can be helpful.",
];

const MODERATE_NEXT_STEPS: [&str; 3] = [
    "Consider noting patterns or behaviors you observe over time.",
    "You may find it helpful to discuss these observations with a pediatric professional.",
    "Early conversations can provide clarity and reassurance.",
];

const HIGH_NEXT_STEPS: [&str; 3] = [
    "Consider sharing these observations with a qualified healthcare or developmental professional.",
    "Early guidance can help families better understand and support their child’s needs.",
    "Seeking professional input does not imply a diagnosis, but can offer valuable insight.",
];

/// Advisory list for a risk band. Degenerate levels carry no advice.
pub fn next_steps_for(level: RiskLevel) -> &'static [&'static str] {
    match level {
        RiskLevel::Low => &LOW_NEXT_STEPS,
        RiskLevel::Moderate => &MODERATE_NEXT_STEPS,
        RiskLevel::High => &HIGH_NEXT_STEPS,
        RiskLevel::Unavailable | RiskLevel::Error => &[],
    }
}
