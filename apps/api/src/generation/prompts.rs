// Prompt constants for the question-drafting module.
// Cross-cutting fragments come from llm_client::prompts.

use crate::llm_client::prompts::{
    CLASSROOM_CONTENT_INSTRUCTION, JSON_ONLY_SYSTEM, QUESTION_FORMAT_INSTRUCTION,
};

/// System prompt for question drafting — JSON array only.
pub const QUESTION_DRAFT_SYSTEM: &str =
    "You are an experienced tutor writing practice worksheet questions. \
    You MUST respond with a valid JSON array of question objects only. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences.";

/// Drafting prompt template. Replace `{topic}`, `{difficulty}`,
/// `{question_count}` before sending.
pub const QUESTION_DRAFT_PROMPT_TEMPLATE: &str = r#"Write {question_count} multiple-choice practice questions.

Topic: {topic}
Difficulty: {difficulty} (easy = one-step recall, medium = two-step application, hard = multi-step reasoning)

Return a JSON array where every element has this EXACT schema (no extra fields):
{
  "question_text": "What is $\\frac{1}{2} + \\frac{1}{4}$?",
  "option_a": "$\\frac{2}{6}$",
  "option_b": "$\\frac{3}{4}$",
  "option_c": "$\\frac{1}{8}$",
  "option_d": null,
  "correct_option": "B",
  "short_explanation": "Rewrite $\\frac{1}{2}$ as $\\frac{2}{4}$ and add."
}

Rules:
- Exactly one correct option per question; the other options are plausible
  mistakes a student at this level actually makes.
- Vary the correct letter across the set; do not cluster on one letter.
- short_explanation is one sentence a student can follow; null is allowed
  only when the answer is self-evident from the question.

{question_format_instruction}

{classroom_content_instruction}"#;

/// Builds the final drafting system prompt (kept separate so tests can
/// assert the fragments are actually spliced in).
pub fn draft_system_prompt() -> String {
    format!("{QUESTION_DRAFT_SYSTEM} {JSON_ONLY_SYSTEM}")
}

/// Fills the static fragments of the drafting template. Per-request fields
/// are substituted by the drafter.
pub fn draft_prompt_base() -> String {
    QUESTION_DRAFT_PROMPT_TEMPLATE
        .replace("{question_format_instruction}", QUESTION_FORMAT_INSTRUCTION)
        .replace(
            "{classroom_content_instruction}",
            CLASSROOM_CONTENT_INSTRUCTION,
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_prompt_splices_shared_fragments() {
        let base = draft_prompt_base();
        assert!(base.contains("school-age students"));
        assert!(base.contains("TeX between $ signs"));
        assert!(!base.contains("{question_format_instruction}"));
        assert!(!base.contains("{classroom_content_instruction}"));
    }

    #[test]
    fn test_base_prompt_keeps_request_placeholders() {
        let base = draft_prompt_base();
        assert!(base.contains("{topic}"));
        assert!(base.contains("{difficulty}"));
        assert!(base.contains("{question_count}"));
    }

    #[test]
    fn test_system_prompt_enforces_json_only() {
        let system = draft_system_prompt();
        assert!(system.contains("JSON"));
        assert!(system.contains("code fences"));
    }
}
