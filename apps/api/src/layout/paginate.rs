//! Greedy pagination of an ordered question list into printable sheets.
//!
//! # Guarantees
//! - Every input question lands on exactly one page, in input order.
//! - Global numbering (1..N) is contiguous across pages.
//! - A page's estimated height never exceeds the budget unless it holds a
//!   single question whose own height alone exceeds it — that question still
//!   gets its own page rather than being split or dropped.
//! - Deterministic: same input and config, same page structure.

use crate::layout::estimate::estimate_question_height;
use crate::layout::sheet::SheetConfig;
use crate::models::question::QuestionRow;

/// One printable sheet's worth of questions.
#[derive(Debug, Clone)]
pub struct Page {
    pub questions: Vec<QuestionRow>,
    /// 1-based global number of this page's first question.
    pub start_number: usize,
    /// Accumulated height estimate, including the title block on page 0.
    pub estimated_height: u32,
}

/// Ordered pages covering the input exactly once.
#[derive(Debug, Clone)]
pub struct PaginationResult {
    pub pages: Vec<Page>,
}

impl PaginationResult {
    pub fn total_questions(&self) -> usize {
        self.pages.iter().map(|p| p.questions.len()).sum()
    }
}

/// Packs questions into pages under `cfg.page_height`.
///
/// The running height starts at `cfg.header_height` for the first page only —
/// the title block is drawn once, so later pages get the full budget. A
/// question that would overflow a non-empty page closes it and opens the next
/// page; a question too tall for any page is still placed alone (the overflow
/// check never fires on an empty page).
pub fn paginate(
    questions: Vec<QuestionRow>,
    include_choices: bool,
    cfg: &SheetConfig,
) -> PaginationResult {
    let mut pages: Vec<Page> = Vec::new();
    let mut current: Vec<QuestionRow> = Vec::new();
    let mut current_height = cfg.header_height;
    let mut current_start = 1usize;
    let mut placed = 0usize;

    for question in questions {
        let height = estimate_question_height(&question, include_choices, cfg);
        if current_height + height > cfg.page_height && !current.is_empty() {
            placed += current.len();
            pages.push(Page {
                questions: std::mem::take(&mut current),
                start_number: current_start,
                estimated_height: current_height,
            });
            current_start = placed + 1;
            current_height = 0;
        }
        current_height += height;
        current.push(question);
    }

    if !current.is_empty() {
        pages.push(Page {
            questions: current,
            start_number: current_start,
            estimated_height: current_height,
        });
    }

    PaginationResult { pages }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::sheet::default_sheet_config;
    use chrono::Utc;
    use uuid::Uuid;

    /// A question with four options: costs 60 + 4*25 = 160 under the default
    /// config with choices shown.
    fn make_question(position: i32) -> QuestionRow {
        QuestionRow {
            id: Uuid::new_v4(),
            quiz_id: Uuid::new_v4(),
            position,
            question_text: format!("Question {position}"),
            option_a: Some("first".to_string()),
            option_b: Some("second".to_string()),
            option_c: Some("third".to_string()),
            option_d: Some("fourth".to_string()),
            correct_option: Some("A".to_string()),
            short_explanation: None,
            created_at: Utc::now(),
        }
    }

    fn make_questions(n: usize) -> Vec<QuestionRow> {
        (0..n).map(|i| make_question(i as i32)).collect()
    }

    #[test]
    fn test_five_questions_fit_one_page() {
        // 200 header + 5*160 = 1000 ≤ 1400.
        let result = paginate(make_questions(5), true, &default_sheet_config());
        assert_eq!(result.pages.len(), 1);
        assert_eq!(result.pages[0].questions.len(), 5);
        assert_eq!(result.pages[0].start_number, 1);
        assert_eq!(result.pages[0].estimated_height, 1000);
    }

    #[test]
    fn test_ten_questions_split_seven_three() {
        // Page 1: 200 + 7*160 = 1320; an 8th would hit 1480 > 1400.
        // Page 2 starts at 0 (no header) and takes the remaining 3.
        let result = paginate(make_questions(10), true, &default_sheet_config());
        assert_eq!(result.pages.len(), 2);
        assert_eq!(result.pages[0].questions.len(), 7);
        assert_eq!(result.pages[1].questions.len(), 3);
        assert_eq!(result.pages[0].estimated_height, 1320);
        assert_eq!(result.pages[1].estimated_height, 480);
    }

    #[test]
    fn test_coverage_preserves_order_without_loss() {
        let questions = make_questions(23);
        let input_ids: Vec<Uuid> = questions.iter().map(|q| q.id).collect();
        let result = paginate(questions, true, &default_sheet_config());

        let output_ids: Vec<Uuid> = result
            .pages
            .iter()
            .flat_map(|p| p.questions.iter().map(|q| q.id))
            .collect();
        assert_eq!(output_ids, input_ids);
        assert_eq!(result.total_questions(), 23);
    }

    #[test]
    fn test_global_numbering_is_contiguous() {
        let result = paginate(make_questions(20), true, &default_sheet_config());
        let mut expected_start = 1;
        for page in &result.pages {
            assert_eq!(page.start_number, expected_start);
            expected_start += page.questions.len();
        }
        assert_eq!(expected_start, 21);
    }

    #[test]
    fn test_oversized_question_gets_its_own_page() {
        // Shrink the budget below a single question's height (160).
        let mut cfg = default_sheet_config();
        cfg.page_height = 100;
        cfg.header_height = 0;

        let result = paginate(make_questions(3), true, &cfg);
        assert_eq!(result.pages.len(), 3);
        for (i, page) in result.pages.iter().enumerate() {
            assert_eq!(page.questions.len(), 1);
            assert_eq!(page.start_number, i + 1);
            assert!(page.estimated_height > cfg.page_height);
        }
    }

    #[test]
    fn test_header_only_charged_on_first_page() {
        // With choices hidden each question costs 60 + 40 = 100.
        // Page 1: 200 + 12*100 = 1400 exactly; the 13th would exceed.
        let result = paginate(make_questions(26), false, &default_sheet_config());
        assert_eq!(result.pages.len(), 2);
        assert_eq!(result.pages[0].questions.len(), 12);
        // Page 2 has the full 1400 budget: all remaining 14 fit (1400 exactly).
        assert_eq!(result.pages[1].questions.len(), 14);
    }

    #[test]
    fn test_empty_input_produces_zero_pages() {
        let result = paginate(Vec::new(), true, &default_sheet_config());
        assert!(result.pages.is_empty());
        assert_eq!(result.total_questions(), 0);
    }

    #[test]
    fn test_pagination_is_deterministic() {
        let questions = make_questions(17);
        let first = paginate(questions.clone(), true, &default_sheet_config());
        let second = paginate(questions, true, &default_sheet_config());

        assert_eq!(first.pages.len(), second.pages.len());
        for (a, b) in first.pages.iter().zip(second.pages.iter()) {
            assert_eq!(a.start_number, b.start_number);
            assert_eq!(a.estimated_height, b.estimated_height);
            let ids_a: Vec<Uuid> = a.questions.iter().map(|q| q.id).collect();
            let ids_b: Vec<Uuid> = b.questions.iter().map(|q| q.id).collect();
            assert_eq!(ids_a, ids_b);
        }
    }
}
