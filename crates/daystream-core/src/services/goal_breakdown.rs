//! Goal Breakdown
//!
//! Turns a long-term goal into a few daily tasks plus a motivational
//! phrase using the Gemini `generateContent` API. Every failure (missing
//! key, network, bad status, malformed body) degrades to "no plan".

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{DomainError, DomainResult, Item};
use crate::repository::ItemStore;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Suggested breakdown of a goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalPlan {
    pub tasks: Vec<String>,
    pub motivation: String,
}

#[async_trait]
pub trait GoalPlanner: Send + Sync {
    /// Plan for `goal`, or `None` when no plan could be produced
    async fn breakdown(&self, goal: &str) -> Option<GoalPlan>;
}

/// Add the plan's tasks to the store as daily tasks. No plan, no items.
pub fn accept_plan(store: &mut ItemStore, plan: Option<&GoalPlan>) -> Vec<Item> {
    match plan {
        Some(plan) => store.add_planned_tasks(&plan.tasks),
        None => Vec::new(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }

    pub fn has_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Gemini-backed planner. Cloning shares the HTTP connection pool.
#[derive(Clone)]
pub struct GeminiPlanner {
    client: Client,
    config: GeminiConfig,
}

impl GeminiPlanner {
    pub fn new(config: GeminiConfig) -> DomainResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DomainError::Internal(format!("http client: {}", e)))?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GeminiConfig) {
        self.config = config;
    }

    async fn request_plan(&self, goal: &str) -> DomainResult<GoalPlan> {
        let response = self
            .client
            .post(self.config.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request_body(goal))
            .send()
            .await
            .map_err(|e| DomainError::Internal(format!("gemini request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Internal(format!("gemini response: {}", e)))?;
        if !status.is_success() {
            return Err(DomainError::Internal(format!("gemini returned {}: {}", status, body)));
        }

        parse_response(&body)
    }
}

#[async_trait]
impl GoalPlanner for GeminiPlanner {
    async fn breakdown(&self, goal: &str) -> Option<GoalPlan> {
        if !self.config.has_key() {
            log::warn!("Gemini API key is missing, goal breakdown unavailable");
            return None;
        }

        match self.request_plan(goal).await {
            Ok(plan) => {
                log::info!("goal breakdown produced {} tasks", plan.tasks.len());
                Some(plan)
            }
            Err(e) => {
                log::error!("goal breakdown failed: {}", e);
                None
            }
        }
    }
}

fn prompt(goal: &str) -> String {
    format!(
        "Act as an expert productivity coach. My long-term goal is: \"{}\". \
         Break it down into 3 to 5 small, actionable daily tasks I can start today. \
         Also give me one short motivational phrase.",
        goal
    )
}

fn request_body(goal: &str) -> serde_json::Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt(goal) }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "tasks": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "Suggested daily tasks"
                    },
                    "motivation": {
                        "type": "STRING",
                        "description": "A short motivational phrase"
                    }
                },
                "required": ["tasks", "motivation"]
            }
        }
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Extract the plan from a `generateContent` response body: the JSON text
/// of the first candidate's first part
pub fn parse_response(body: &str) -> DomainResult<GoalPlan> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| DomainError::InvalidInput(format!("gemini body: {}", e)))?;

    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| DomainError::InvalidInput("gemini returned no text".to_string()))?;

    serde_json::from_str(&text).map_err(|e| DomainError::InvalidInput(format!("plan: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemType;
    use crate::repository::MemoryStorage;
    use std::sync::Arc;

    fn body_with_text(text: &str) -> String {
        json!({
            "candidates": [{ "content": { "parts": [{ "text": text }], "role": "model" } }]
        })
        .to_string()
    }

    fn store() -> ItemStore {
        ItemStore::load(Arc::new(MemoryStorage::new()), false).unwrap()
    }

    struct FixedPlanner(Option<GoalPlan>);

    #[async_trait]
    impl GoalPlanner for FixedPlanner {
        async fn breakdown(&self, _goal: &str) -> Option<GoalPlan> {
            self.0.clone()
        }
    }

    #[test]
    fn test_parse_response() {
        let body = body_with_text(r#"{"tasks":["Read 10 pages","Write notes"],"motivation":"Keep going"}"#);
        let plan = parse_response(&body).unwrap();
        assert_eq!(plan.tasks, vec!["Read 10 pages", "Write notes"]);
        assert_eq!(plan.motivation, "Keep going");
    }

    #[test]
    fn test_parse_response_rejects_malformed() {
        assert!(parse_response("not json").is_err());
        assert!(parse_response(r#"{"candidates":[]}"#).is_err());
        assert!(parse_response(&body_with_text("")).is_err());
        assert!(parse_response(&body_with_text(r#"{"tasks":["a"]}"#)).is_err());
    }

    #[test]
    fn test_request_body_shape() {
        let body = request_body("Run a marathon");
        let text = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(text.contains("\"Run a marathon\""));
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(
            body["generationConfig"]["responseSchema"]["required"],
            json!(["tasks", "motivation"])
        );
    }

    #[test]
    fn test_endpoint() {
        let mut config = GeminiConfig::new("k");
        config.base_url = "http://localhost:9000/v1beta/".to_string();
        assert_eq!(
            config.endpoint(),
            "http://localhost:9000/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn test_missing_key_produces_no_plan() {
        let planner = GeminiPlanner::new(GeminiConfig::new("  ")).unwrap();
        assert_eq!(planner.breakdown("Learn Rust").await, None);
    }

    #[tokio::test]
    async fn test_unreachable_service_produces_no_plan() {
        let mut config = GeminiConfig::new("test-key");
        config.base_url = "http://127.0.0.1:1".to_string();
        let planner = GeminiPlanner::new(config).unwrap();
        assert_eq!(planner.breakdown("Learn Rust").await, None);
    }

    #[tokio::test]
    async fn test_absent_plan_adds_nothing() {
        let mut store = store();
        let plan = FixedPlanner(None).breakdown("Learn Rust").await;
        assert!(accept_plan(&mut store, plan.as_ref()).is_empty());
        assert!(store.all().is_empty());
    }

    #[tokio::test]
    async fn test_accepted_plan_becomes_daily_tasks() {
        let mut store = store();
        let planner = FixedPlanner(Some(GoalPlan {
            tasks: vec!["Install toolchain".into(), "Read chapter 1".into()],
            motivation: "One step a day".into(),
        }));

        let plan = planner.breakdown("Learn Rust").await;
        let created = accept_plan(&mut store, plan.as_ref());

        assert_eq!(created.len(), 2);
        assert!(store.all().iter().all(|i| i.item_type == ItemType::DailyTask));
        assert_eq!(store.all()[0].title, "Install toolchain");
    }
}
