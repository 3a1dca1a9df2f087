//! Data model for interview-preparation kits.
//!
//! Wire names match the browser shell and the Gemini reply contract:
//! enum values travel lowercase (`entry`, `technical`, `easy`, ...) and the
//! general tips list travels as `generalTips`.

use serde::{Deserialize, Serialize};

/// Experience bracket selected on the form. Used as a lookup key for the
/// human-readable label echoed into kits; unrecognized wire values are
/// rejected at deserialization time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    #[default]
    Mid,
    Senior,
}

impl ExperienceLevel {
    /// Human-readable label. Resolved once at kit construction; exports
    /// consume the already-resolved string.
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry Level (0-2 years)",
            ExperienceLevel::Mid => "Mid Level (2-5 years)",
            ExperienceLevel::Senior => "Senior Level (5+ years)",
        }
    }
}

/// Requested balance of question categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewFocus {
    Technical,
    Behavioral,
    #[default]
    Balanced,
}

impl InterviewFocus {
    /// Prompt clause describing the requested question mix.
    pub fn phrase(&self) -> &'static str {
        match self {
            InterviewFocus::Technical => "technical questions with some behavioral",
            InterviewFocus::Behavioral => "behavioral questions with some technical",
            InterviewFocus::Balanced => "balanced mix of technical, behavioral, and HR questions",
        }
    }
}

/// Category of a single interview question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Technical,
    Behavioral,
    Hr,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Technical => "technical",
            QuestionType::Behavioral => "behavioral",
            QuestionType::Hr => "hr",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Form snapshot submitted by the shell. `role` is the only required field;
/// blank selects default to mid experience and a balanced focus.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateKitRequest {
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub experience: ExperienceLevel,
    #[serde(default)]
    pub focus: InterviewFocus,
}

/// One interview question with a worked sample answer and answering tips.
///
/// `question_type` and `difficulty` are strictly enumerated: a model reply
/// carrying any other value fails kit validation and routes to the fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub difficulty: Difficulty,
    pub answer: String,
    pub tips: Vec<String>,
}

/// The model-owned fragment of a kit: what the Gemini reply must contain.
/// Both arrays are required; empty arrays are valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KitPayload {
    pub questions: Vec<Question>,
    #[serde(rename = "generalTips")]
    pub general_tips: Vec<String>,
}

/// The complete generated interview-preparation bundle for one request.
/// `experience` holds the resolved human-readable label, not the enum key.
/// Replaced wholesale on each generation, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewKit {
    pub role: String,
    pub company: String,
    pub experience: String,
    pub questions: Vec<Question>,
    #[serde(rename = "generalTips")]
    pub general_tips: Vec<String>,
}
