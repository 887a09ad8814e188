use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use redis::Client as RedisClient;
use sqlx::PgPool;

use crate::config::Config;
use crate::generation::drafter::QuestionDrafter;
use crate::layout::SheetConfig;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Redis client reserved for caching rendered worksheet documents.
    #[allow(dead_code)]
    pub redis: RedisClient,
    pub s3: S3Client,
    #[allow(dead_code)]
    pub llm: LlmClient,
    pub config: Config,
    /// Pluggable question drafter. Production: LlmQuestionDrafter.
    pub drafter: Arc<dyn QuestionDrafter>,
    /// Print-layout constants for worksheet pagination (US Letter defaults).
    pub sheet: SheetConfig,
}
