//! Question records and the typed answer-option labels.
//!
//! A question carries up to four labeled options (A–D). Each option field is
//! independently optional — an absent or blank field simply means the question
//! has fewer than four choices. Rows are immutable once fetched for a render
//! pass; worksheets and attempts never mutate them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The four answer-option labels, in the fixed order they are checked,
/// rendered, and numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    /// Fixed check/render order. Iterating this instead of poking fields by
    /// name keeps the option walk explicit and type-safe.
    pub const ALL: [OptionLabel; 4] = [
        OptionLabel::A,
        OptionLabel::B,
        OptionLabel::C,
        OptionLabel::D,
    ];

    pub fn as_char(self) -> char {
        match self {
            OptionLabel::A => 'A',
            OptionLabel::B => 'B',
            OptionLabel::C => 'C',
            OptionLabel::D => 'D',
        }
    }

    /// Parses a stored label. Accepts surrounding whitespace and either case;
    /// anything else is treated as absent rather than an error.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "A" | "a" => Some(OptionLabel::A),
            "B" | "b" => Some(OptionLabel::B),
            "C" | "c" => Some(OptionLabel::C),
            "D" | "d" => Some(OptionLabel::D),
            _ => None,
        }
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One quiz/worksheet question as stored in Postgres.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuestionRow {
    pub id: Uuid,
    pub quiz_id: Uuid,
    /// 0-based order within the quiz. Global worksheet numbering is derived
    /// from input order at render time, not from this column.
    pub position: i32,
    /// Markdown with embedded `$...$` / `$$...$$` TeX segments.
    pub question_text: String,
    pub option_a: Option<String>,
    pub option_b: Option<String>,
    pub option_c: Option<String>,
    pub option_d: Option<String>,
    pub correct_option: Option<String>,
    pub short_explanation: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl QuestionRow {
    /// The raw stored field for a label.
    fn option_field(&self, label: OptionLabel) -> Option<&str> {
        match label {
            OptionLabel::A => self.option_a.as_deref(),
            OptionLabel::B => self.option_b.as_deref(),
            OptionLabel::C => self.option_c.as_deref(),
            OptionLabel::D => self.option_d.as_deref(),
        }
    }

    /// The option text for a label, or `None` when the field is missing or
    /// blank. Blank-after-trim counts as absent, not as an empty choice.
    pub fn option_text(&self, label: OptionLabel) -> Option<&str> {
        self.option_field(label)
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// Present options in fixed A→D order.
    pub fn present_options(&self) -> impl Iterator<Item = (OptionLabel, &str)> + '_ {
        OptionLabel::ALL
            .iter()
            .filter_map(move |&label| self.option_text(label).map(|text| (label, text)))
    }

    /// The correct option as a typed label. A missing or unparseable stored
    /// value is absent — the worksheet answer key renders "N/A" for it.
    pub fn correct_label(&self) -> Option<OptionLabel> {
        self.correct_option.as_deref().and_then(OptionLabel::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_question(options: [Option<&str>; 4]) -> QuestionRow {
        QuestionRow {
            id: Uuid::new_v4(),
            quiz_id: Uuid::new_v4(),
            position: 0,
            question_text: "What is $2 + 2$?".to_string(),
            option_a: options[0].map(str::to_string),
            option_b: options[1].map(str::to_string),
            option_c: options[2].map(str::to_string),
            option_d: options[3].map(str::to_string),
            correct_option: Some("B".to_string()),
            short_explanation: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_option_label_parse_accepts_case_and_whitespace() {
        assert_eq!(OptionLabel::parse("a"), Some(OptionLabel::A));
        assert_eq!(OptionLabel::parse(" C "), Some(OptionLabel::C));
        assert_eq!(OptionLabel::parse("d"), Some(OptionLabel::D));
    }

    #[test]
    fn test_option_label_parse_rejects_garbage() {
        assert_eq!(OptionLabel::parse(""), None);
        assert_eq!(OptionLabel::parse("E"), None);
        assert_eq!(OptionLabel::parse("AB"), None);
    }

    #[test]
    fn test_present_options_keeps_fixed_order() {
        let q = make_question([Some("3"), Some("4"), Some("5"), Some("6")]);
        let labels: Vec<OptionLabel> = q.present_options().map(|(l, _)| l).collect();
        assert_eq!(labels, OptionLabel::ALL.to_vec());
    }

    #[test]
    fn test_blank_option_counts_as_absent() {
        let q = make_question([Some("3"), Some("   "), None, Some("6")]);
        let labels: Vec<OptionLabel> = q.present_options().map(|(l, _)| l).collect();
        assert_eq!(labels, vec![OptionLabel::A, OptionLabel::D]);
        assert_eq!(q.option_text(OptionLabel::B), None);
    }

    #[test]
    fn test_option_text_is_trimmed() {
        let q = make_question([Some("  3 "), None, None, None]);
        assert_eq!(q.option_text(OptionLabel::A), Some("3"));
    }

    #[test]
    fn test_correct_label_parses_stored_value() {
        let q = make_question([Some("3"), Some("4"), None, None]);
        assert_eq!(q.correct_label(), Some(OptionLabel::B));
    }

    #[test]
    fn test_correct_label_absent_for_unparseable_value() {
        let mut q = make_question([Some("3"), Some("4"), None, None]);
        q.correct_option = Some("maybe B?".to_string());
        assert_eq!(q.correct_label(), None);
        q.correct_option = None;
        assert_eq!(q.correct_label(), None);
    }
}
