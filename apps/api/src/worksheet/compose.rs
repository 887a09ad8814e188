//! Request-scoped worksheet composition.
//!
//! Each render pass is a pure pipeline: (questions, flags) → pagination →
//! per-page HTML → optional answer key. Nothing is cached or persisted; the
//! document is rebuilt from freshly fetched rows on every request.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::layout::{paginate, SheetConfig};
use crate::models::catalog::QuizHead;
use crate::models::question::QuestionRow;
use crate::render::escape_html;
use crate::worksheet::answer_key::render_answer_key;
use crate::worksheet::renderer::render_page;

/// Display toggles, taken from the print request's query string.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WorksheetOptions {
    /// Show answer choices (default) or a blank write-in line per question.
    #[serde(default = "default_true")]
    pub include_choices: bool,
    /// Append the answer-key section after the question pages.
    #[serde(default)]
    pub include_answer_key: bool,
}

fn default_true() -> bool {
    true
}

impl Default for WorksheetOptions {
    fn default() -> Self {
        WorksheetOptions {
            include_choices: true,
            include_answer_key: false,
        }
    }
}

/// One rendered page of the document.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedPage {
    pub page_index: usize,
    /// 1-based global number of the first question on this page.
    pub start_number: usize,
    pub question_count: usize,
    pub html: String,
}

/// The full rendered worksheet, ready for on-screen preview or the browser
/// print pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct WorksheetDocument {
    pub quiz_id: Uuid,
    pub question_count: usize,
    pub pages: Vec<RenderedPage>,
    /// Present only when the answer key was requested.
    pub answer_key_html: Option<String>,
}

/// Composes the printable document for one quiz.
pub fn compose_worksheet(
    head: &QuizHead,
    questions: Vec<QuestionRow>,
    opts: WorksheetOptions,
    cfg: &SheetConfig,
) -> WorksheetDocument {
    // The key lists every question in original order, independent of how the
    // sheets break, so render it before pagination takes ownership.
    let answer_key_html = opts
        .include_answer_key
        .then(|| render_answer_key(&questions));

    let question_count = questions.len();
    let pagination = paginate(questions, opts.include_choices, cfg);

    let pages = pagination
        .pages
        .iter()
        .enumerate()
        .map(|(page_index, page)| RenderedPage {
            page_index,
            start_number: page.start_number,
            question_count: page.questions.len(),
            html: render_page(page, page_index, head, opts.include_choices),
        })
        .collect();

    WorksheetDocument {
        quiz_id: head.quiz_id,
        question_count,
        pages,
        answer_key_html,
    }
}

/// Wraps a composed document into a standalone HTML file for export: print
/// stylesheet targeting US Letter, one sheet per page break, key at the end.
pub fn standalone_html(head: &QuizHead, document: &WorksheetDocument) -> String {
    let mut out = String::new();
    out.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(&head.quiz_title)));
    out.push_str(
        "<style>\n\
         @page { size: letter; margin: 0.75in; }\n\
         body { font-family: Georgia, serif; }\n\
         .worksheet-page { page-break-after: always; }\n\
         .answer-line { border-bottom: 1px solid #333; height: 1.6em; width: 60%; }\n\
         .answer-key { page-break-before: always; }\n\
         </style>\n</head>\n<body>\n",
    );
    for page in &document.pages {
        out.push_str(&page.html);
    }
    if let Some(key) = &document.answer_key_html {
        out.push_str(key);
    }
    out.push_str("</body>\n</html>\n");
    out
}
