//! Hand-authored fallback kit body, substituted whenever the live pipeline
//! fails. Guarantees the generation contract: worst case the user gets a
//! generic but structurally complete kit.

use crate::kit::models::{Difficulty, KitPayload, Question, QuestionType};

/// Returns the static kit body: one generic behavioral and one generic
/// technical question, plus seven general tips. The orchestrator combines it
/// with the real echoed role/company/experience label.
pub fn fallback_payload() -> KitPayload {
    KitPayload {
        questions: vec![
            Question {
                question: "Tell me about yourself and your experience with this role."
                    .to_string(),
                question_type: QuestionType::Behavioral,
                difficulty: Difficulty::Easy,
                answer: "I'm a passionate developer with experience in modern web technologies. \
                    I've worked on several projects that involved building scalable applications, \
                    and I'm particularly interested in this role because it aligns with my career \
                    goals and allows me to contribute to meaningful projects. In my previous role, \
                    I led a team of 3 developers to successfully deliver a customer-facing web \
                    application that increased user engagement by 40%. I'm excited about this \
                    opportunity because it would allow me to work with cutting-edge technologies \
                    while contributing to a product that makes a real difference for users."
                    .to_string(),
                tips: vec![
                    "Keep your answer concise and relevant to the role (2-3 minutes max)"
                        .to_string(),
                    "Highlight your most relevant experiences and quantifiable achievements"
                        .to_string(),
                    "End with why you're interested in this specific position and company"
                        .to_string(),
                    "Practice this answer beforehand as it sets the tone for the entire interview"
                        .to_string(),
                ],
            },
            Question {
                question: "What is your experience with version control systems like Git?"
                    .to_string(),
                question_type: QuestionType::Technical,
                difficulty: Difficulty::Easy,
                answer: "I have extensive experience with Git for version control in both \
                    individual and team projects. I'm comfortable with core Git operations like \
                    cloning repositories, creating and switching branches, committing changes, \
                    and merging code. In my current role, I use Git daily for collaborative \
                    development, including creating feature branches, submitting pull requests, \
                    and resolving merge conflicts. I'm also familiar with Git workflows like \
                    GitFlow and have experience with platforms like GitHub and GitLab for code \
                    review and CI/CD integration. I understand the importance of writing clear \
                    commit messages and maintaining a clean commit history for better project \
                    maintainability."
                    .to_string(),
                tips: vec![
                    "Mention specific Git commands and workflows you're familiar with".to_string(),
                    "Discuss your experience with collaborative Git practices like pull requests"
                        .to_string(),
                    "Share examples of how you've used Git in team environments".to_string(),
                    "If you're new to Git, mention any personal projects where you've used it"
                        .to_string(),
                ],
            },
        ],
        general_tips: vec![
            "Research the company thoroughly - know their products, mission, and recent news"
                .to_string(),
            "Prepare specific examples using the STAR method (Situation, Task, Action, Result)"
                .to_string(),
            "Practice your answers out loud beforehand, but don't memorize them word-for-word"
                .to_string(),
            "Prepare thoughtful questions to ask the interviewer about the role and company culture"
                .to_string(),
            "Bring multiple copies of your resume and a notebook for taking notes".to_string(),
            "Arrive 10-15 minutes early and dress appropriately for the company culture"
                .to_string(),
            "Follow up with a thank-you email within 24 hours of the interview".to_string(),
        ],
    }
}
