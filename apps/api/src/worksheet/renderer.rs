//! Renders one paginated page to an HTML fragment.
//!
//! Pure function of its inputs: the page, its index, the quiz head, and the
//! show-choices flag. The title block appears on page index 0 only; every
//! question gets its global number, its text through the shared markdown+TeX
//! pipeline, and either its option rows or a blank write-in line.

use crate::layout::paginate::Page;
use crate::models::catalog::QuizHead;
use crate::models::question::QuestionRow;
use crate::render::{escape_html, render_rich};

/// Renders a page to a `<section class="worksheet-page">` fragment.
pub fn render_page(page: &Page, page_index: usize, head: &QuizHead, include_choices: bool) -> String {
    let mut out = String::new();
    out.push_str("<section class=\"worksheet-page\">\n");

    if page_index == 0 {
        render_title_block(&mut out, head);
    }

    for (local_index, question) in page.questions.iter().enumerate() {
        let global_number = page.start_number + local_index;
        render_question(&mut out, question, global_number, include_choices);
    }

    out.push_str("</section>\n");
    out
}

/// Title block: subsection title, course/section breadcrumb, quiz name and
/// difficulty, then a divider. Drawn once, on the first page of the document.
fn render_title_block(out: &mut String, head: &QuizHead) {
    out.push_str("<header class=\"worksheet-title\">\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_html(&head.subsection_title)));
    out.push_str(&format!(
        "<p class=\"breadcrumb\">{} &rsaquo; {}</p>\n",
        escape_html(&head.course_title),
        escape_html(&head.section_title)
    ));
    out.push_str(&format!(
        "<p class=\"quiz-meta\">{} &middot; {}</p>\n",
        escape_html(&head.quiz_title),
        escape_html(&head.difficulty)
    ));
    out.push_str("</header>\n<hr class=\"title-divider\">\n");
}

fn render_question(
    out: &mut String,
    question: &QuestionRow,
    global_number: usize,
    include_choices: bool,
) {
    out.push_str("<div class=\"question\">\n");
    out.push_str(&format!(
        "<p class=\"question-text\"><span class=\"question-number\">{global_number}.</span> {}</p>\n",
        render_rich(&question.question_text)
    ));

    if include_choices {
        out.push_str("<ul class=\"options\">\n");
        for (label, text) in question.present_options() {
            out.push_str(&format!(
                "<li><span class=\"option-label\">{label}.</span> {}</li>\n",
                render_rich(text)
            ));
        }
        out.push_str("</ul>\n");
    } else {
        out.push_str("<div class=\"answer-line\"></div>\n");
    }

    out.push_str("</div>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{default_sheet_config, paginate};
    use chrono::Utc;
    use uuid::Uuid;

    fn make_head() -> QuizHead {
        QuizHead {
            quiz_id: Uuid::new_v4(),
            quiz_title: "Fractions Check-in".to_string(),
            difficulty: "medium".to_string(),
            subsection_title: "Comparing Fractions".to_string(),
            section_title: "Fractions & Decimals".to_string(),
            course_title: "Grade 5 Math".to_string(),
        }
    }

    fn make_question(position: i32, options: [Option<&str>; 4]) -> QuestionRow {
        QuestionRow {
            id: Uuid::new_v4(),
            quiz_id: Uuid::new_v4(),
            position,
            question_text: format!("Compare $\\frac{{{position}}}{{2}}$ and one."),
            option_a: options[0].map(str::to_string),
            option_b: options[1].map(str::to_string),
            option_c: options[2].map(str::to_string),
            option_d: options[3].map(str::to_string),
            correct_option: Some("A".to_string()),
            short_explanation: None,
            created_at: Utc::now(),
        }
    }

    fn one_page(questions: Vec<QuestionRow>, include_choices: bool) -> Page {
        let mut result = paginate(questions, include_choices, &default_sheet_config());
        assert_eq!(result.pages.len(), 1);
        result.pages.remove(0)
    }

    #[test]
    fn test_first_page_carries_title_block() {
        let page = one_page(vec![make_question(0, [Some("yes"), Some("no"), None, None])], true);
        let html = render_page(&page, 0, &make_head(), true);

        assert!(html.contains("<h1>Comparing Fractions</h1>"));
        assert!(html.contains("Grade 5 Math &rsaquo; Fractions &amp; Decimals"));
        assert!(html.contains("Fractions Check-in &middot; medium"));
        assert!(html.contains("title-divider"));
    }

    #[test]
    fn test_later_pages_have_no_title_block() {
        let page = one_page(vec![make_question(0, [Some("yes"), None, None, None])], true);
        let html = render_page(&page, 1, &make_head(), true);
        assert!(!html.contains("<h1>"));
        assert!(!html.contains("title-divider"));
    }

    #[test]
    fn test_questions_are_globally_numbered() {
        let mut page = one_page(
            vec![
                make_question(0, [Some("yes"), None, None, None]),
                make_question(1, [Some("yes"), None, None, None]),
            ],
            true,
        );
        page.start_number = 8;
        let html = render_page(&page, 2, &make_head(), true);

        assert!(html.contains("<span class=\"question-number\">8.</span>"));
        assert!(html.contains("<span class=\"question-number\">9.</span>"));
    }

    #[test]
    fn test_only_present_options_render() {
        let page = one_page(vec![make_question(0, [Some("1/2"), None, Some("3/4"), None])], true);
        let html = render_page(&page, 0, &make_head(), true);

        assert!(html.contains("<span class=\"option-label\">A.</span>"));
        assert!(html.contains("<span class=\"option-label\">C.</span>"));
        assert!(!html.contains("<span class=\"option-label\">B.</span>"));
        assert!(!html.contains("<span class=\"option-label\">D.</span>"));
    }

    #[test]
    fn test_suppressed_choices_render_blank_line() {
        let page = one_page(vec![make_question(0, [Some("1/2"), Some("2/3"), None, None])], false);
        let html = render_page(&page, 0, &make_head(), false);

        assert!(html.contains("<div class=\"answer-line\"></div>"));
        assert!(!html.contains("option-label"));
    }

    #[test]
    fn test_question_text_goes_through_math_pipeline() {
        let page = one_page(vec![make_question(3, [Some("yes"), None, None, None])], true);
        let html = render_page(&page, 0, &make_head(), true);
        assert!(html.contains("math math-inline"));
        assert!(html.contains("\\frac{3}{2}"));
    }
}
