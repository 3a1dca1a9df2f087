//! Markdown serializer: renders a kit as a plain Markdown document.
//! Text is carried verbatim; Markdown consumers handle their own display.

use std::fmt::Write;

use crate::kit::models::InterviewKit;

/// Attribution line terminating every exported document.
const ATTRIBUTION: &str = "*Generated with AI Interview Prep Generator*";

/// Renders the kit as a Markdown document. Question and tip order is
/// preserved; questions are numbered from 1 in array order.
pub fn render(kit: &InterviewKit) -> String {
    let mut doc = String::with_capacity(2048);

    doc.push_str("# Interview Prep Kit\n\n");
    if kit.company.is_empty() {
        let _ = writeln!(doc, "## {}\n", kit.role);
    } else {
        let _ = writeln!(doc, "## {} at {}\n", kit.role, kit.company);
    }
    let _ = writeln!(doc, "**Experience Level:** {}\n", kit.experience);

    doc.push_str("## General Tips\n\n");
    for tip in &kit.general_tips {
        let _ = writeln!(doc, "- {tip}");
    }

    doc.push_str("\n## Interview Questions\n");
    for (index, question) in kit.questions.iter().enumerate() {
        let _ = write!(
            doc,
            "\n### {number}. {question}\n\n\
             **Type:** {question_type} | **Difficulty:** {difficulty}\n\n\
             **Sample Answer:**\n{answer}\n\n\
             **Tips:**\n",
            number = index + 1,
            question = question.question,
            question_type = question.question_type.as_str().to_uppercase(),
            difficulty = question.difficulty.as_str().to_uppercase(),
            answer = question.answer,
        );
        for tip in &question.tips {
            let _ = writeln!(doc, "- {tip}");
        }
        doc.push_str("\n---\n");
    }

    let _ = write!(doc, "\n{ATTRIBUTION}\n");
    doc
}
