//! The trailing answer-key section.
//!
//! Works over the full ordered question list, not the paginated pages, and
//! renders as one unpaginated block appended after the question sheets.

use crate::models::question::QuestionRow;
use crate::render::render_rich;

/// Renders the answer key: per question, its 1-based index, the correct
/// option letter (or a literal "N/A" when the stored value is missing or
/// unparseable), and the short explanation when present.
pub fn render_answer_key(questions: &[QuestionRow]) -> String {
    let mut out = String::new();
    out.push_str("<section class=\"answer-key\">\n<h2>Answer Key</h2>\n");

    for (index, question) in questions.iter().enumerate() {
        let letter = question
            .correct_label()
            .map(|label| label.to_string())
            .unwrap_or_else(|| "N/A".to_string());

        out.push_str("<div class=\"answer-key-entry\">\n");
        out.push_str(&format!(
            "<span class=\"answer-number\">{}.</span> <span class=\"answer-letter\">{letter}</span>\n",
            index + 1
        ));
        if let Some(explanation) = question
            .short_explanation
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
        {
            out.push_str(&format!(
                "<span class=\"answer-explanation\">{}</span>\n",
                render_rich(explanation)
            ));
        }
        out.push_str("</div>\n");
    }

    out.push_str("</section>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn make_question(correct: Option<&str>, explanation: Option<&str>) -> QuestionRow {
        QuestionRow {
            id: Uuid::new_v4(),
            quiz_id: Uuid::new_v4(),
            position: 0,
            question_text: "Pick one.".to_string(),
            option_a: Some("first".to_string()),
            option_b: Some("second".to_string()),
            option_c: None,
            option_d: None,
            correct_option: correct.map(str::to_string),
            short_explanation: explanation.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_entries_follow_input_order_with_one_based_index() {
        let questions = vec![
            make_question(Some("A"), None),
            make_question(Some("B"), None),
        ];
        let html = render_answer_key(&questions);

        let first = html.find("<span class=\"answer-number\">1.</span>").unwrap();
        let second = html.find("<span class=\"answer-number\">2.</span>").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_missing_correct_option_renders_na() {
        let questions = vec![
            make_question(None, None),
            make_question(Some("B"), Some("Because $2 > 1$.")),
        ];
        let html = render_answer_key(&questions);

        assert!(html.contains("<span class=\"answer-letter\">N/A</span>"));
        assert!(html.contains("<span class=\"answer-letter\">B</span>"));
    }

    #[test]
    fn test_unparseable_correct_option_renders_na() {
        let html = render_answer_key(&[make_question(Some("Z"), None)]);
        assert!(html.contains("N/A"));
    }

    #[test]
    fn test_explanation_goes_through_math_pipeline() {
        let html = render_answer_key(&[make_question(Some("A"), Some("Since $x = 2$."))]);
        assert!(html.contains("math math-inline"));
        assert!(html.contains("x = 2"));
    }

    #[test]
    fn test_blank_explanation_is_omitted() {
        let html = render_answer_key(&[make_question(Some("A"), Some("   "))]);
        assert!(!html.contains("answer-explanation"));
    }

    #[test]
    fn test_empty_question_list_renders_header_only() {
        let html = render_answer_key(&[]);
        assert!(html.contains("<h2>Answer Key</h2>"));
        assert!(!html.contains("answer-key-entry"));
    }
}
