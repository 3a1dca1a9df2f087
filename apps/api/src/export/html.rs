//! HTML serializer: renders a kit as a self-contained document with an
//! inline stylesheet and no external resources.
//!
//! Badge classes double as machine-readable type markers: every question
//! block carries `badge technical`, `badge behavioral`, or `badge hr`.

use std::fmt::Write;

use crate::kit::models::InterviewKit;

const STYLE: &str = r#"        body { font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; line-height: 1.6; }
        .header { text-align: center; margin-bottom: 30px; }
        .question { margin-bottom: 30px; padding: 20px; border: 1px solid #ddd; border-radius: 8px; }
        .question-title { font-weight: bold; color: #333; margin-bottom: 10px; }
        .badge { display: inline-block; padding: 4px 8px; border-radius: 4px; font-size: 12px; margin-right: 8px; }
        .technical { background-color: #e3f2fd; color: #1976d2; }
        .behavioral { background-color: #f3e5f5; color: #7b1fa2; }
        .hr { background-color: #e8f5e8; color: #388e3c; }
        .answer { margin: 15px 0; padding: 15px; background-color: #f9f9f9; border-radius: 4px; }
        .tips { margin-top: 15px; }
        .tips ul { margin: 5px 0; padding-left: 20px; }"#;

/// Renders the kit as a complete HTML document. Question and tip order is
/// preserved; all interpolated text is escaped.
pub fn render(kit: &InterviewKit) -> String {
    let mut doc = String::with_capacity(4096);

    let role = escape_html(&kit.role);
    let title_suffix = if kit.company.is_empty() {
        String::new()
    } else {
        format!(" at {}", escape_html(&kit.company))
    };

    let _ = write!(
        doc,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Interview Prep Kit - {role}</title>
    <style>
{STYLE}
    </style>
</head>
<body>
    <div class="header">
        <h1>Interview Prep Kit</h1>
        <h2>{role}{title_suffix}</h2>
        <p>Experience Level: {experience}</p>
    </div>

    <h3>General Tips</h3>
    <ul>
"#,
        experience = escape_html(&kit.experience),
    );

    for tip in &kit.general_tips {
        let _ = writeln!(doc, "        <li>{}</li>", escape_html(tip));
    }
    doc.push_str("    </ul>\n\n    <h3>Interview Questions</h3>\n");

    for question in &kit.questions {
        let answer = escape_html(&question.answer).replace('\n', "<br>");
        let _ = write!(
            doc,
            r#"    <div class="question">
        <div class="question-title">{question_text}</div>
        <span class="badge {type_class}">{type_label}</span>
        <span class="badge">{difficulty_label}</span>
        <div class="answer">
            <strong>Sample Answer:</strong><br>
            {answer}
        </div>
        <div class="tips">
            <strong>Tips:</strong>
            <ul>
"#,
            question_text = escape_html(&question.question),
            type_class = question.question_type.as_str(),
            type_label = question.question_type.as_str().to_uppercase(),
            difficulty_label = question.difficulty.as_str().to_uppercase(),
        );
        for tip in &question.tips {
            let _ = writeln!(doc, "                <li>{}</li>", escape_html(tip));
        }
        doc.push_str("            </ul>\n        </div>\n    </div>\n");
    }

    doc.push_str("</body>\n</html>\n");
    doc
}

/// Minimal HTML entity escaping for text interpolated into the document.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::models::{Difficulty, Question, QuestionType};

    fn sample_kit() -> InterviewKit {
        InterviewKit {
            role: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            experience: "Mid Level (2-5 years)".to_string(),
            questions: vec![
                Question {
                    question: "How does indexing work?".to_string(),
                    question_type: QuestionType::Technical,
                    difficulty: Difficulty::Medium,
                    answer: "First paragraph.\nSecond paragraph.".to_string(),
                    tips: vec!["Draw the B-tree".to_string()],
                },
                Question {
                    question: "Describe a conflict you resolved.".to_string(),
                    question_type: QuestionType::Behavioral,
                    difficulty: Difficulty::Easy,
                    answer: "Situation and outcome.".to_string(),
                    tips: vec!["Use the STAR method".to_string()],
                },
            ],
            general_tips: vec!["Arrive early".to_string(), "Ask questions".to_string()],
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let kit = sample_kit();
        assert_eq!(render(&kit), render(&kit));
    }

    #[test]
    fn test_document_is_self_contained() {
        let doc = render(&sample_kit());
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<style>"));
        assert!(!doc.contains("href="), "no external resources allowed");
        assert!(doc.ends_with("</html>\n"));
    }

    #[test]
    fn test_header_carries_role_company_and_experience() {
        let doc = render(&sample_kit());
        assert!(doc.contains("<h2>Backend Engineer at Acme</h2>"));
        assert!(doc.contains("Experience Level: Mid Level (2-5 years)"));
    }

    #[test]
    fn test_header_omits_company_when_blank() {
        let mut kit = sample_kit();
        kit.company.clear();
        let doc = render(&kit);
        assert!(doc.contains("<h2>Backend Engineer</h2>"));
    }

    #[test]
    fn test_type_badges_are_distinct_markers() {
        let doc = render(&sample_kit());
        assert!(doc.contains(r#"<span class="badge technical">TECHNICAL</span>"#));
        assert!(doc.contains(r#"<span class="badge behavioral">BEHAVIORAL</span>"#));
        assert!(doc.contains(".technical { background-color"));
        assert!(doc.contains(".hr { background-color"));
    }

    #[test]
    fn test_answer_newlines_become_line_breaks() {
        let doc = render(&sample_kit());
        assert!(doc.contains("First paragraph.<br>Second paragraph."));
    }

    #[test]
    fn test_question_order_is_preserved() {
        let doc = render(&sample_kit());
        let first = doc.find("How does indexing work?").unwrap();
        let second = doc.find("Describe a conflict you resolved.").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_interpolated_text_is_escaped() {
        let mut kit = sample_kit();
        kit.role = "QA <script>alert('x')</script> Engineer".to_string();
        kit.general_tips = vec!["Use < and > carefully & wisely".to_string()];
        let doc = render(&kit);
        assert!(!doc.contains("<script>"));
        assert!(doc.contains("&lt;script&gt;"));
        assert!(doc.contains("Use &lt; and &gt; carefully &amp; wisely"));
    }
}
