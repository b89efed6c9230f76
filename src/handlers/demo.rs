//! Demo handler
//!
//! Runs a fixed set of showcase briefs through the orchestrator

use crate::handlers::AppState;
use crate::models::{GenerationRequest, GenerationResult};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Word count used for every demo brief
pub const DEMO_WORD_COUNT: u32 = 150;

/// A preset showcase brief
#[derive(Debug, Clone, Copy)]
pub struct DemoScenario {
    pub id: &'static str,
    pub title: &'static str,
    pub prompt: &'static str,
    pub platform: &'static str,
    pub content_type: &'static str,
    pub tone: &'static str,
}

pub const DEMO_SCENARIOS: [DemoScenario; 3] = [
    DemoScenario {
        id: "local-bakery-instagram",
        title: "Local Bakery Instagram Post",
        prompt: "Write an Instagram post for a local bakery announcing a new seasonal croissant flavor with a warm, friendly tone.",
        platform: "instagram",
        content_type: "post",
        tone: "friendly",
    },
    DemoScenario {
        id: "consultant-linkedin",
        title: "Consultant LinkedIn Thought Leadership",
        prompt: "Write a LinkedIn post for a solo consultant sharing a practical tip about improving client onboarding.",
        platform: "linkedin",
        content_type: "post",
        tone: "professional",
    },
    DemoScenario {
        id: "shopify-email",
        title: "Ecommerce Email Announcement",
        prompt: "Write a short email announcing a weekend sale for a Shopify store, including a clear CTA and urgency.",
        platform: "email",
        content_type: "newsletter",
        tone: "authoritative",
    },
];

impl DemoScenario {
    pub fn to_request(&self) -> GenerationRequest {
        GenerationRequest::new(self.prompt, self.platform, self.content_type, self.tone)
            .with_word_count(DEMO_WORD_COUNT)
    }
}

/// Scenarios for a query value: "overview" selects all, anything else by id
pub fn select_scenarios(scenario: &str) -> Vec<DemoScenario> {
    DEMO_SCENARIOS
        .iter()
        .filter(|demo| scenario == "overview" || demo.id == scenario)
        .copied()
        .collect()
}

#[derive(Debug, Deserialize)]
pub struct DemoQuery {
    pub scenario: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DemoCta {
    pub label: String,
    pub action: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DemoMessage {
    pub headline: String,
    pub subheadline: String,
    pub cta: DemoCta,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DemoResult {
    pub id: String,
    pub title: String,
    #[serde(flatten)]
    pub result: GenerationResult,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DemoResponse {
    pub message: DemoMessage,
    pub demos: Vec<DemoResult>,
}

/// Run demo scenarios
///
/// GET /api/demo?scenario=overview
pub async fn handle_demo(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DemoQuery>,
) -> Json<DemoResponse> {
    let scenario = query.scenario.as_deref().unwrap_or("overview");
    debug!("Running demo scenario: {}", scenario);

    let mut demos = Vec::new();
    for demo in select_scenarios(scenario) {
        let result = state.orchestrator.generate_content(&demo.to_request()).await;
        demos.push(DemoResult {
            id: demo.id.to_string(),
            title: demo.title.to_string(),
            result,
        });
    }

    Json(DemoResponse {
        message: DemoMessage {
            headline: "This is what we can do for your business".to_string(),
            subheadline: "See ready-to-post content tailored to small businesses. To create your own content, sign up and subscribe.".to_string(),
            cta: DemoCta {
                label: "Create My Content".to_string(),
                action: "signup_required".to_string(),
            },
        },
        demos,
    })
}
