// All LLM prompt constants for the kit pipeline.

use crate::kit::models::GenerateKitRequest;

/// System instruction for kit generation. Enforces JSON-only output.
pub const KIT_SYSTEM: &str = "You are an expert interview coach and hiring manager \
    creating realistic, role-specific interview preparation material. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Kit generation prompt template.
/// Replace: {role}, {company_clause}, {experience}, {focus}
const KIT_PROMPT_TEMPLATE: &str = r#"Generate a comprehensive interview preparation kit for a {role} position{company_clause} for someone with {experience} experience.

Focus on: {focus}

Please provide:
1. 8-12 interview questions with a mix of types based on the focus
2. For each question, provide:
   - Question text
   - Type (technical/behavioral/hr)
   - Difficulty level (easy/medium/hard)
   - A detailed sample answer (2-3 paragraphs)
   - 3-4 specific tips for answering this question
3. 6-8 general interview tips specific to this role and experience level

Format the response as a JSON object with this EXACT structure:
{
  "questions": [
    {
      "question": "string",
      "type": "technical|behavioral|hr",
      "difficulty": "easy|medium|hard",
      "answer": "string",
      "tips": ["string", "string", "string"]
    }
  ],
  "generalTips": ["string", "string", "string"]
}

Make sure the questions are relevant to the {role} role and appropriate for {experience} candidates. Include both coding/technical questions and behavioral questions that assess soft skills, leadership, and cultural fit."#;

/// Builds the kit generation prompt by filling the template from the form
/// snapshot. The company clause is omitted entirely when no company was given.
pub fn build_prompt(request: &GenerateKitRequest) -> String {
    let company = request.company.trim();
    let company_clause = if company.is_empty() {
        String::new()
    } else {
        format!(" at {company}")
    };

    KIT_PROMPT_TEMPLATE
        .replace("{role}", request.role.trim())
        .replace("{company_clause}", &company_clause)
        .replace("{experience}", request.experience.label())
        .replace("{focus}", request.focus.phrase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::models::{ExperienceLevel, InterviewFocus};

    fn request(role: &str, company: &str) -> GenerateKitRequest {
        GenerateKitRequest {
            role: role.to_string(),
            company: company.to_string(),
            experience: ExperienceLevel::Senior,
            focus: InterviewFocus::Technical,
        }
    }

    #[test]
    fn test_prompt_contains_role_and_company_clause() {
        let prompt = build_prompt(&request("Backend Engineer", "Google"));
        assert!(prompt.contains("for a Backend Engineer position at Google"));
    }

    #[test]
    fn test_prompt_omits_company_clause_when_blank() {
        let prompt = build_prompt(&request("Backend Engineer", "   "));
        assert!(prompt.contains("for a Backend Engineer position for someone"));
        assert!(!prompt.contains(" at "));
    }

    #[test]
    fn test_prompt_resolves_experience_and_focus_phrases() {
        let prompt = build_prompt(&request("SRE", ""));
        assert!(prompt.contains("Senior Level (5+ years)"));
        assert!(prompt.contains("Focus on: technical questions with some behavioral"));
    }

    #[test]
    fn test_prompt_pins_count_bounds_and_json_shape() {
        let prompt = build_prompt(&request("SRE", ""));
        assert!(prompt.contains("8-12 interview questions"));
        assert!(prompt.contains("6-8 general interview tips"));
        assert!(prompt.contains("\"generalTips\""));
        assert!(prompt.contains("\"technical|behavioral|hr\""));
        assert!(prompt.contains("\"easy|medium|hard\""));
    }

    #[test]
    fn test_prompt_trims_role_whitespace() {
        let prompt = build_prompt(&request("  Product Manager  ", ""));
        assert!(prompt.contains("for a Product Manager position"));
    }
}
