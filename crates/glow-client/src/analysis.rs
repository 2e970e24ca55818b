// File: crates/glow-client/src/analysis.rs
// Summary: Selfie analysis screen state; backend failures collapse into one user-facing message.

use crate::api::SkincareClient;
use crate::error::{ClientError, Result};
use crate::models::SkinAnalysis;
use crate::upload::ImageUpload;

pub const ANALYZE_FALLBACK: &str = "Failed to analyze image. Please try again.";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalysisState {
    #[default]
    Idle,
    Done(SkinAnalysis),
    /// Message shown under the uploader.
    Failed(String),
}

impl AnalysisState {
    /// Validate and post `upload` once.
    pub fn run(client: &SkincareClient, upload: &ImageUpload) -> Self {
        Self::from_result(client.analyze_skin(upload))
    }

    /// Upload rejections keep their own message; anything else shows [`ANALYZE_FALLBACK`].
    pub fn from_result(result: Result<SkinAnalysis>) -> Self {
        match result {
            Ok(analysis) => AnalysisState::Done(analysis),
            Err(ClientError::Upload(e)) => AnalysisState::Failed(e.to_string()),
            Err(e) => {
                log::warn!("skin analysis failed: {e}");
                AnalysisState::Failed(ANALYZE_FALLBACK.to_string())
            }
        }
    }

    pub fn analysis(&self) -> Option<&SkinAnalysis> {
        match self {
            AnalysisState::Done(a) => Some(a),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AnalysisState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = AnalysisState::Idle;
    }
}
