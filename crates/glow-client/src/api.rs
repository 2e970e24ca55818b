// File: crates/glow-client/src/api.rs
// Summary: Blocking HTTP client for the skincare backend.
// Notes: Two endpoints: `POST /chat` with `{ "message": .. }` and
//        `POST /analyze-skin` with a multipart `file` field. Each call is a single
//        attempt; callers decide what a failure means for the user.

use chrono::Utc;
use reqwest::blocking::{multipart, Client, Response};
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::models::{Message, Recommendation, Sender, SkinAnalysis};
use crate::upload::ImageUpload;

const USER_AGENT: &str = concat!("glow-client/", env!("CARGO_PKG_VERSION"));

/// Anything that can answer a chat prompt.
pub trait ChatBackend {
    fn chat(&self, message: &str) -> Result<Message>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    response: ChatReply,
}

/// The backend forwards whatever the model endpoint returned.
#[derive(Deserialize)]
#[serde(untagged)]
enum ChatReply {
    Text(String),
    Generated { generated_text: String },
}

impl ChatReply {
    fn into_text(self) -> String {
        match self {
            ChatReply::Text(t) => t,
            ChatReply::Generated { generated_text } => generated_text,
        }
    }
}

#[derive(Deserialize)]
struct AnalyzeResponse {
    concerns: Vec<String>,
    #[serde(default)]
    recommendations: Vec<String>,
    #[serde(default)]
    skin_type: Option<String>,
    #[serde(default)]
    confidence: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct SkincareClient {
    config: ClientConfig,
    http: Client,
    user_id: String,
}

impl SkincareClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        reqwest::Url::parse(&config.base_url).map_err(|_| ClientError::BaseUrl(config.base_url.clone()))?;
        let http = Client::builder().timeout(config.timeout()).user_agent(USER_AGENT).build()?;
        Ok(Self { config, http, user_id: "anonymous".to_string() })
    }

    /// Attribute analyses to `user_id`.
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn chat(&self, message: &str) -> Result<Message> {
        let url = self.config.endpoint("chat");
        log::info!("POST {url}");
        let resp = self.http.post(&url).json(&ChatRequest { message }).send()?;
        let body: ChatResponse = check(resp)?.json()?;
        Ok(Message::new(next_id(), Sender::Ai, body.response.into_text()))
    }

    /// Validates `upload` against the configured policy, then posts it.
    pub fn analyze_skin(&self, upload: &ImageUpload) -> Result<SkinAnalysis> {
        self.config.upload.validate(upload)?;

        let mut part = multipart::Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone());
        if let Some(mime) = &upload.mime {
            part = part.mime_str(mime)?;
        }
        let form = multipart::Form::new().part("file", part);

        let url = self.config.endpoint("analyze-skin");
        log::info!("POST {url} ({} bytes)", upload.size());
        let resp = self.http.post(&url).multipart(form).send()?;
        let body: AnalyzeResponse = check(resp)?.json()?;

        let recommendations = body
            .recommendations
            .iter()
            .enumerate()
            .map(|(i, text)| Recommendation::from_text(format!("rec-{}", i + 1), text))
            .collect();
        Ok(SkinAnalysis {
            id: next_id(),
            user_id: self.user_id.clone(),
            image_name: upload.file_name.clone(),
            date: Utc::now(),
            concerns: body.concerns,
            recommendations,
            skin_type: body.skin_type,
            confidence: body.confidence,
        })
    }
}

impl ChatBackend for SkincareClient {
    fn chat(&self, message: &str) -> Result<Message> {
        SkincareClient::chat(self, message)
    }
}

fn check(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().unwrap_or_default();
    Err(ClientError::Status { status: status.as_u16(), body })
}

fn next_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_reply_accepts_both_shapes() {
        let plain: ChatResponse = serde_json::from_str(r#"{"response":"Drink water"}"#).unwrap();
        assert_eq!(plain.response.into_text(), "Drink water");
        let gen: ChatResponse = serde_json::from_str(r#"{"response":{"generated_text":"Use SPF"}}"#).unwrap();
        assert_eq!(gen.response.into_text(), "Use SPF");
    }

    #[test]
    fn analyze_extras_are_optional() {
        let r: AnalyzeResponse = serde_json::from_str(r#"{"concerns":["Dryness"]}"#).unwrap();
        assert_eq!(r.concerns, ["Dryness"]);
        assert!(r.recommendations.is_empty() && r.skin_type.is_none() && r.confidence.is_none());
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let cfg = ClientConfig { base_url: "not a url".into(), ..ClientConfig::default() };
        assert!(matches!(SkincareClient::new(cfg), Err(ClientError::BaseUrl(_))));
    }

    #[test]
    fn invalid_upload_fails_before_any_request() {
        // port 9 (discard) is never contacted: validation runs first
        let cfg = ClientConfig { base_url: "http://127.0.0.1:9".into(), ..ClientConfig::default() };
        let client = SkincareClient::new(cfg).unwrap();
        let err = client.analyze_skin(&ImageUpload::new("doc.pdf", b"%PDF-1.7".to_vec())).unwrap_err();
        assert!(matches!(err, ClientError::Upload(_)));
    }
}
