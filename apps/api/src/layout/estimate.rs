//! Height estimation for a single question.

use crate::layout::sheet::SheetConfig;
use crate::models::question::QuestionRow;

/// Estimates the rendered height of one question on the print surface.
///
/// With choices shown: base height plus one option row per present (non-blank)
/// option, checked in fixed A→D order. With choices suppressed the option rows
/// are replaced by a single write-in line, so the option count does not matter.
/// Absent fields contribute zero; this function is total.
pub fn estimate_question_height(
    question: &QuestionRow,
    include_choices: bool,
    cfg: &SheetConfig,
) -> u32 {
    let mut height = cfg.question_base_height;
    if include_choices {
        let option_count = question.present_options().count() as u32;
        height += option_count * cfg.option_height;
    } else {
        height += cfg.blank_answer_height;
    }
    height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::sheet::default_sheet_config;
    use chrono::Utc;
    use uuid::Uuid;

    fn make_question(options: [Option<&str>; 4]) -> QuestionRow {
        QuestionRow {
            id: Uuid::new_v4(),
            quiz_id: Uuid::new_v4(),
            position: 0,
            question_text: "Which fraction is largest?".to_string(),
            option_a: options[0].map(str::to_string),
            option_b: options[1].map(str::to_string),
            option_c: options[2].map(str::to_string),
            option_d: options[3].map(str::to_string),
            correct_option: Some("A".to_string()),
            short_explanation: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_four_options_cost_base_plus_four_rows() {
        let cfg = default_sheet_config();
        let q = make_question([Some("1/2"), Some("2/3"), Some("3/4"), Some("4/5")]);
        assert_eq!(estimate_question_height(&q, true, &cfg), 60 + 4 * 25);
    }

    #[test]
    fn test_absent_options_contribute_zero() {
        let cfg = default_sheet_config();
        let q = make_question([Some("yes"), Some("no"), None, None]);
        assert_eq!(estimate_question_height(&q, true, &cfg), 60 + 2 * 25);
    }

    #[test]
    fn test_blank_option_contributes_zero() {
        let cfg = default_sheet_config();
        let q = make_question([Some("yes"), Some("  "), None, None]);
        assert_eq!(estimate_question_height(&q, true, &cfg), 60 + 25);
    }

    #[test]
    fn test_no_options_is_bare_base_height() {
        let cfg = default_sheet_config();
        let q = make_question([None, None, None, None]);
        assert_eq!(estimate_question_height(&q, true, &cfg), 60);
    }

    #[test]
    fn test_suppressed_choices_use_blank_answer_height() {
        let cfg = default_sheet_config();
        // Option count must not leak into the estimate when choices are hidden.
        let four = make_question([Some("a"), Some("b"), Some("c"), Some("d")]);
        let none = make_question([None, None, None, None]);
        assert_eq!(estimate_question_height(&four, false, &cfg), 60 + 40);
        assert_eq!(
            estimate_question_height(&four, false, &cfg),
            estimate_question_height(&none, false, &cfg)
        );
    }
}
