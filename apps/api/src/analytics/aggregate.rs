//! Attempt aggregation for the admin dashboard.
//!
//! Everything here is a pure fold over already-fetched rows: group answer
//! rows by question, count correct picks, and average attempt scores.

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::models::attempt::{AttemptAnswerRow, QuizAttemptRow};
use crate::models::question::QuestionRow;

/// Per-question difficulty signal.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionStats {
    pub question_id: Uuid,
    pub position: i32,
    pub answer_count: usize,
    pub correct_count: usize,
    /// Fraction of recorded answers that were wrong; 0.0 with no answers.
    pub miss_rate: f64,
}

/// Aggregate analytics for one quiz.
#[derive(Debug, Clone, Serialize)]
pub struct QuizAnalytics {
    pub quiz_id: Uuid,
    pub attempt_count: usize,
    /// Mean of per-attempt score percentages; 0.0 with no attempts.
    pub mean_score_percent: f64,
    /// One entry per question, in quiz order.
    pub question_stats: Vec<QuestionStats>,
}

/// Folds stored attempts and answers into dashboard numbers.
pub fn aggregate_quiz_analytics(
    quiz_id: Uuid,
    questions: &[QuestionRow],
    attempts: &[QuizAttemptRow],
    answers: &[AttemptAnswerRow],
) -> QuizAnalytics {
    let mut per_question: HashMap<Uuid, (usize, usize)> = HashMap::new();
    for answer in answers {
        let entry = per_question.entry(answer.question_id).or_default();
        entry.0 += 1;
        if answer.is_correct {
            entry.1 += 1;
        }
    }

    let question_stats = questions
        .iter()
        .map(|question| {
            let (answer_count, correct_count) = per_question
                .get(&question.id)
                .copied()
                .unwrap_or((0, 0));
            let miss_rate = if answer_count == 0 {
                0.0
            } else {
                1.0 - correct_count as f64 / answer_count as f64
            };
            QuestionStats {
                question_id: question.id,
                position: question.position,
                answer_count,
                correct_count,
                miss_rate,
            }
        })
        .collect();

    let mean_score_percent = if attempts.is_empty() {
        0.0
    } else {
        attempts.iter().map(|a| a.score_percent).sum::<f64>() / attempts.len() as f64
    };

    QuizAnalytics {
        quiz_id,
        attempt_count: attempts.len(),
        mean_score_percent,
        question_stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_question(position: i32) -> QuestionRow {
        QuestionRow {
            id: Uuid::new_v4(),
            quiz_id: Uuid::new_v4(),
            position,
            question_text: "Pick.".to_string(),
            option_a: Some("one".to_string()),
            option_b: Some("two".to_string()),
            option_c: None,
            option_d: None,
            correct_option: Some("A".to_string()),
            short_explanation: None,
            created_at: Utc::now(),
        }
    }

    fn make_attempt(quiz_id: Uuid, score_percent: f64) -> QuizAttemptRow {
        QuizAttemptRow {
            id: Uuid::new_v4(),
            quiz_id,
            user_id: None,
            score_percent,
            correct_count: 0,
            gradable_count: 0,
            created_at: Utc::now(),
        }
    }

    fn make_answer(
        attempt: &QuizAttemptRow,
        question: &QuestionRow,
        correct: bool,
    ) -> AttemptAnswerRow {
        let letter = if correct { "A" } else { "B" };
        AttemptAnswerRow {
            id: Uuid::new_v4(),
            attempt_id: attempt.id,
            question_id: question.id,
            selected_option: Some(letter.to_string()),
            is_correct: correct,
        }
    }

    #[test]
    fn test_miss_rate_per_question() {
        let quiz_id = Uuid::new_v4();
        let questions = vec![make_question(0), make_question(1)];
        let attempts = vec![make_attempt(quiz_id, 50.0), make_attempt(quiz_id, 100.0)];
        let answers = vec![
            make_answer(&attempts[0], &questions[0], false),
            make_answer(&attempts[1], &questions[0], true),
            make_answer(&attempts[0], &questions[1], true),
            make_answer(&attempts[1], &questions[1], true),
        ];

        let analytics = aggregate_quiz_analytics(quiz_id, &questions, &attempts, &answers);

        assert_eq!(analytics.attempt_count, 2);
        assert!((analytics.mean_score_percent - 75.0).abs() < f64::EPSILON);
        assert!((analytics.question_stats[0].miss_rate - 0.5).abs() < f64::EPSILON);
        assert!((analytics.question_stats[1].miss_rate - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_question_without_answers_has_zero_miss_rate() {
        let quiz_id = Uuid::new_v4();
        let questions = vec![make_question(0)];
        let analytics = aggregate_quiz_analytics(quiz_id, &questions, &[], &[]);

        assert_eq!(analytics.attempt_count, 0);
        assert_eq!(analytics.question_stats[0].answer_count, 0);
        assert!((analytics.question_stats[0].miss_rate - 0.0).abs() < f64::EPSILON);
        assert!((analytics.mean_score_percent - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stats_follow_quiz_question_order() {
        let quiz_id = Uuid::new_v4();
        let questions: Vec<QuestionRow> = (0..4).map(make_question).collect();
        let analytics = aggregate_quiz_analytics(quiz_id, &questions, &[], &[]);

        let positions: Vec<i32> = analytics.question_stats.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }
}
