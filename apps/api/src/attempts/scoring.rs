//! Attempt grading.
//!
//! Grading is exact option-letter comparison, case-insensitive via the typed
//! label parse. A question without a parseable stored correct option is
//! ungradable: it still produces an outcome row but is excluded from the
//! score denominator rather than silently counted wrong.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::question::{OptionLabel, QuestionRow};

/// One submitted answer from the quiz-taking client.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmittedAnswer {
    pub question_id: Uuid,
    /// Option letter as sent; `None` or unparseable means unanswered.
    pub selected_option: Option<String>,
}

/// Per-question grading outcome, in quiz order.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerOutcome {
    pub question_id: Uuid,
    pub selected: Option<OptionLabel>,
    pub correct: Option<OptionLabel>,
    pub is_correct: bool,
    /// False when the question has no parseable correct option.
    pub gradable: bool,
}

/// Aggregate attempt score.
#[derive(Debug, Clone, Serialize)]
pub struct AttemptScore {
    pub correct_count: usize,
    pub gradable_count: usize,
    /// Percentage over gradable questions; 0.0 when none were gradable.
    pub score_percent: f64,
    pub outcomes: Vec<AnswerOutcome>,
}

/// Grades one submission against the quiz's questions.
///
/// Unanswered questions are incorrect. Answers referencing questions outside
/// the quiz are ignored here — the handler rejects them up front.
pub fn score_attempt(questions: &[QuestionRow], answers: &[SubmittedAnswer]) -> AttemptScore {
    let selected_by_question: HashMap<Uuid, Option<OptionLabel>> = answers
        .iter()
        .map(|a| {
            let label = a.selected_option.as_deref().and_then(OptionLabel::parse);
            (a.question_id, label)
        })
        .collect();

    let mut correct_count = 0usize;
    let mut gradable_count = 0usize;
    let mut outcomes = Vec::with_capacity(questions.len());

    for question in questions {
        let correct = question.correct_label();
        let selected = selected_by_question
            .get(&question.id)
            .copied()
            .unwrap_or(None);

        let gradable = correct.is_some();
        let is_correct = gradable && selected == correct;

        if gradable {
            gradable_count += 1;
            if is_correct {
                correct_count += 1;
            }
        }

        outcomes.push(AnswerOutcome {
            question_id: question.id,
            selected,
            correct,
            is_correct,
            gradable,
        });
    }

    let score_percent = if gradable_count == 0 {
        0.0
    } else {
        correct_count as f64 / gradable_count as f64 * 100.0
    };

    AttemptScore {
        correct_count,
        gradable_count,
        score_percent,
        outcomes,
    }
}
