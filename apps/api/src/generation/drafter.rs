//! The question-drafting seam.
//!
//! `QuestionDrafter` is held as `Arc<dyn ...>` in app state so the generation
//! pipeline can be exercised in tests without network calls. The production
//! implementation delegates to the LLM client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::prompts::{draft_prompt_base, draft_system_prompt};
use crate::llm_client::LlmClient;
use crate::models::question::{OptionLabel, QuestionRow};

/// What to draft: topic, difficulty, and how many questions.
#[derive(Debug, Clone, Deserialize)]
pub struct DraftSpec {
    pub topic: String,
    pub difficulty: String,
    pub question_count: u8,
}

/// One drafted question as returned by the model, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftQuestion {
    pub question_text: String,
    pub option_a: Option<String>,
    pub option_b: Option<String>,
    pub option_c: Option<String>,
    pub option_d: Option<String>,
    pub correct_option: String,
    pub short_explanation: Option<String>,
}

impl DraftQuestion {
    fn option_text(&self, label: OptionLabel) -> Option<&str> {
        let raw = match label {
            OptionLabel::A => self.option_a.as_deref(),
            OptionLabel::B => self.option_b.as_deref(),
            OptionLabel::C => self.option_c.as_deref(),
            OptionLabel::D => self.option_d.as_deref(),
        };
        raw.map(str::trim).filter(|text| !text.is_empty())
    }

    /// Structural validation of a draft. The correct option must name a
    /// present choice, and a multiple-choice question needs at least two.
    pub fn validate(&self) -> Result<(), String> {
        if self.question_text.trim().is_empty() {
            return Err("question_text is empty".to_string());
        }
        let present = OptionLabel::ALL
            .iter()
            .filter(|&&label| self.option_text(label).is_some())
            .count();
        if present < 2 {
            return Err(format!("only {present} option(s) present, need at least 2"));
        }
        let Some(correct) = OptionLabel::parse(&self.correct_option) else {
            return Err(format!("correct_option '{}' is not A-D", self.correct_option));
        };
        if self.option_text(correct).is_none() {
            return Err(format!("correct_option '{correct}' names an absent option"));
        }
        Ok(())
    }

    /// Materializes the draft as a question row of the given quiz.
    pub fn into_row(self, quiz_id: uuid::Uuid, position: i32) -> QuestionRow {
        QuestionRow {
            id: uuid::Uuid::new_v4(),
            quiz_id,
            position,
            question_text: self.question_text,
            option_a: self.option_a,
            option_b: self.option_b,
            option_c: self.option_c,
            option_d: self.option_d,
            correct_option: Some(self.correct_option),
            short_explanation: self.short_explanation,
            created_at: chrono::Utc::now(),
        }
    }
}

/// Drafts worksheet questions for a topic/difficulty request.
#[async_trait]
pub trait QuestionDrafter: Send + Sync {
    async fn draft(&self, spec: &DraftSpec) -> Result<Vec<DraftQuestion>, AppError>;
}

/// Production drafter backed by the Claude Messages API.
pub struct LlmQuestionDrafter {
    llm: LlmClient,
}

impl LlmQuestionDrafter {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl QuestionDrafter for LlmQuestionDrafter {
    async fn draft(&self, spec: &DraftSpec) -> Result<Vec<DraftQuestion>, AppError> {
        let prompt = draft_prompt_base()
            .replace("{topic}", &spec.topic)
            .replace("{difficulty}", &spec.difficulty)
            .replace("{question_count}", &spec.question_count.to_string());

        self.llm
            .call_json::<Vec<DraftQuestion>>(&prompt, &draft_system_prompt())
            .await
            .map_err(|e| AppError::Llm(format!("Question drafting failed: {e}")))
    }
}
