//! Kit generation: orchestrates the full pipeline.
//!
//! Flow: build prompt → single completion call → parse reply → assemble kit.
//! Any failure along the chain (transport, API status, extraction, parse,
//! shape) degrades to the hand-authored fallback body. The caller always
//! receives a complete kit echoing the submitted role, company, and resolved
//! experience label; this function cannot fail.

use thiserror::Error;
use tracing::{info, warn};

use crate::kit::fallback::fallback_payload;
use crate::kit::models::{GenerateKitRequest, InterviewKit, KitPayload};
use crate::kit::parser::{parse_kit_payload, ParseError};
use crate::kit::prompts::{build_prompt, KIT_SYSTEM};
use crate::llm_client::{CompletionBackend, LlmError};

/// Why the live pipeline was abandoned for the fallback body.
/// Only surfaced in operator logs, never to the caller.
#[derive(Debug, Error)]
enum GenerationFailure {
    #[error("completion call failed: {0}")]
    Completion(#[from] LlmError),

    #[error("reply parsing failed: {0}")]
    Parse(#[from] ParseError),
}

/// Generates an interview kit for the submitted form snapshot.
///
/// The sole generation contract the shell depends on: never raises past this
/// boundary. `role` and `company` are echoed verbatim; `experience` carries
/// the label resolved here, once, from the form's enum key.
pub async fn generate_kit(
    backend: &dyn CompletionBackend,
    request: GenerateKitRequest,
) -> InterviewKit {
    info!(
        "Generating interview kit: role={:?}, experience={:?}, focus={:?}",
        request.role, request.experience, request.focus
    );

    let payload = match request_payload(backend, &request).await {
        Ok(payload) => {
            info!(
                "Kit generated: {} questions, {} general tips",
                payload.questions.len(),
                payload.general_tips.len()
            );
            payload
        }
        Err(failure) => {
            warn!("Kit generation degraded to fallback content: {failure}");
            fallback_payload()
        }
    };

    let experience = request.experience.label().to_string();
    InterviewKit {
        role: request.role,
        company: request.company,
        experience,
        questions: payload.questions,
        general_tips: payload.general_tips,
    }
}

/// Runs the fallible half of the pipeline: completion call plus reply parsing.
async fn request_payload(
    backend: &dyn CompletionBackend,
    request: &GenerateKitRequest,
) -> Result<KitPayload, GenerationFailure> {
    let prompt = build_prompt(request);
    let reply = backend.complete(&prompt, KIT_SYSTEM).await?;
    Ok(parse_kit_payload(&reply)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::models::{ExperienceLevel, InterviewFocus};
    use async_trait::async_trait;

    /// Backend that replays a canned outcome instead of calling Gemini.
    struct ScriptedBackend {
        reply: Option<String>,
    }

    impl ScriptedBackend {
        fn replies(text: &str) -> Self {
            Self {
                reply: Some(text.to_string()),
            }
        }

        fn unavailable() -> Self {
            Self { reply: None }
        }
    }

    #[async_trait]
    impl CompletionBackend for ScriptedBackend {
        async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            match &self.reply {
                Some(text) => Ok(text.clone()),
                None => Err(LlmError::Api {
                    status: 503,
                    message: "scripted outage".to_string(),
                }),
            }
        }
    }

    fn form(role: &str, company: &str, experience: ExperienceLevel) -> GenerateKitRequest {
        GenerateKitRequest {
            role: role.to_string(),
            company: company.to_string(),
            experience,
            focus: InterviewFocus::Balanced,
        }
    }

    const VALID_REPLY: &str = r#"{
        "questions": [{
            "question": "How do you design a rate limiter?",
            "type": "technical",
            "difficulty": "medium",
            "answer": "Start from the requirements.",
            "tips": ["Discuss token buckets", "Mention distributed state"]
        }],
        "generalTips": ["Sleep well before the interview"]
    }"#;

    #[tokio::test]
    async fn test_successful_generation_echoes_form_fields() {
        let backend = ScriptedBackend::replies(VALID_REPLY);
        let kit = generate_kit(
            &backend,
            form("Senior Backend Engineer", "Acme", ExperienceLevel::Senior),
        )
        .await;

        assert_eq!(kit.role, "Senior Backend Engineer");
        assert_eq!(kit.company, "Acme");
        assert_eq!(kit.experience, "Senior Level (5+ years)");
        assert_eq!(kit.questions.len(), 1);
        assert_eq!(kit.general_tips, vec!["Sleep well before the interview"]);
    }

    #[tokio::test]
    async fn test_reply_wrapped_in_prose_still_parses() {
        let wrapped = format!("Sure! Here you go:\n{VALID_REPLY}\nHope this helps.");
        let backend = ScriptedBackend::replies(&wrapped);
        let kit = generate_kit(&backend, form("SRE", "", ExperienceLevel::Mid)).await;

        assert_eq!(kit.questions.len(), 1);
        assert_eq!(kit.questions[0].question, "How do you design a rate limiter?");
    }

    #[tokio::test]
    async fn test_transport_failure_yields_fallback_with_echoed_fields() {
        let backend = ScriptedBackend::unavailable();
        let kit = generate_kit(
            &backend,
            form("Data Analyst", "Initech", ExperienceLevel::Entry),
        )
        .await;

        // Fallback body with the real form fields on top
        assert_eq!(kit.role, "Data Analyst");
        assert_eq!(kit.company, "Initech");
        assert_eq!(kit.experience, "Entry Level (0-2 years)");
        assert_eq!(kit.questions.len(), 2);
        assert_eq!(kit.general_tips.len(), 7);
        assert!(kit.questions[0].question.starts_with("Tell me about yourself"));
    }

    #[tokio::test]
    async fn test_reply_without_json_yields_fallback() {
        let backend = ScriptedBackend::replies("I cannot help with that request.");
        let kit = generate_kit(&backend, form("QA Engineer", "", ExperienceLevel::Mid)).await;

        assert_eq!(kit.questions.len(), 2);
        assert_eq!(kit.general_tips.len(), 7);
    }

    #[tokio::test]
    async fn test_malformed_json_yields_fallback() {
        let backend = ScriptedBackend::replies(r#"{"questions": [}], "generalTips": []}"#);
        let kit = generate_kit(&backend, form("QA Engineer", "", ExperienceLevel::Mid)).await;

        assert_eq!(kit.questions.len(), 2);
    }

    #[tokio::test]
    async fn test_shape_violation_yields_fallback() {
        let reply = r#"{
            "questions": [{
                "question": "q",
                "type": "riddle",
                "difficulty": "easy",
                "answer": "a",
                "tips": []
            }],
            "generalTips": []
        }"#;
        let backend = ScriptedBackend::replies(reply);
        let kit = generate_kit(&backend, form("QA Engineer", "", ExperienceLevel::Mid)).await;

        assert_eq!(kit.questions.len(), 2, "non-enumerated type must route to fallback");
    }

    #[tokio::test]
    async fn test_empty_arrays_are_a_valid_generation() {
        let backend = ScriptedBackend::replies(r#"{"questions":[],"generalTips":[]}"#);
        let kit = generate_kit(&backend, form("Designer", "", ExperienceLevel::Mid)).await;

        // An empty but well-formed reply is not a failure
        assert!(kit.questions.is_empty());
        assert!(kit.general_tips.is_empty());
    }
}
