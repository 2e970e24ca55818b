// File: crates/glow-client/src/lib.rs
// Summary: Collaborators around the progress chart: backend API, uploads, fixtures, onboarding.

pub mod analysis;
pub mod api;
pub mod chat;
pub mod config;
pub mod error;
pub mod mock;
pub mod models;
pub mod onboarding;
pub mod upload;

pub use analysis::{AnalysisState, ANALYZE_FALLBACK};
pub use api::{ChatBackend, SkincareClient};
pub use chat::{ChatSession, FALLBACK_REPLY};
pub use config::{ClientConfig, ConfigError};
pub use error::{ClientError, Result};
pub use mock::{DataSource, Fixtures};
pub use models::{Message, Recommendation, RecommendationKind, Sender, SkinAnalysis, SkinMetric, User};
pub use onboarding::{FlowState, OnboardingFlow, Step, StepInfo};
pub use upload::{ImageUpload, UploadError, UploadPolicy};
