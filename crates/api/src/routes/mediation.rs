//! Chat mediation: record the conversation and suggest next steps.

use axum::extract::State;
use axum::Json;
use brain_core::ChatTurn;
use chrono::Utc;
use database::chat;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ApiJson, Result};
use crate::state::AppState;

/// Request body for POST /api/mediation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediationRequest {
    pub match_id: String,
    pub chat_history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub struct MediationResponse {
    pub suggestions: Vec<String>,
}

/// Store the chat as a new transcript and return mediation suggestions.
///
/// Every message is stamped with the time the request was handled.
pub async fn mediate(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<MediationRequest>,
) -> Result<Json<MediationResponse>> {
    let suggestions = state.brain.mediate(&req.chat_history).await?;

    let now = Utc::now();
    let messages = req
        .chat_history
        .into_iter()
        .map(|turn| turn.stamped(now))
        .collect();
    let transcript = chat::create_chat(state.db.pool(), &req.match_id, messages, now).await?;

    info!(
        match_id = %transcript.match_id,
        chat_id = %transcript.id,
        messages = transcript.messages.len(),
        "Chat recorded for mediation"
    );
    Ok(Json(MediationResponse { suggestions }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::test_state;
    use mock_brain::SUGGESTIONS;

    fn request(match_id: &str) -> ApiJson<MediationRequest> {
        ApiJson(MediationRequest {
            match_id: match_id.to_string(),
            chat_history: vec![
                ChatTurn::new("u1", "Can we keep it quiet after ten?"),
                ChatTurn::new("u2", "Only if the dishes get done."),
            ],
        })
    }

    #[tokio::test]
    async fn test_mediation_records_chat() {
        let state = test_state().await;
        let started = Utc::now();

        let Json(response) = mediate(State(state.clone()), request("u1-r1")).await.unwrap();
        assert_eq!(response.suggestions, SUGGESTIONS);

        let chats = chat::list_chats_for_match(state.db.pool(), "u1-r1").await.unwrap();
        assert_eq!(chats.len(), 1);
        assert_eq!(chats[0].messages.len(), 2);
        assert_eq!(chats[0].messages[0].sender_id, "u1");
        assert_eq!(chats[0].messages[1].content, "Only if the dishes get done.");
        assert!(chats[0]
            .messages
            .iter()
            .all(|m| m.timestamp >= started && m.timestamp <= Utc::now()));
    }

    #[tokio::test]
    async fn test_repeated_mediation_creates_new_chats() {
        let state = test_state().await;

        let Json(first) = mediate(State(state.clone()), request("u1-r1")).await.unwrap();
        let Json(second) = mediate(State(state.clone()), request("u1-r1")).await.unwrap();
        assert_eq!(first.suggestions, second.suggestions);

        let chats = chat::list_chats_for_match(state.db.pool(), "u1-r1").await.unwrap();
        assert_eq!(chats.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_history() {
        let state = test_state().await;
        let req = MediationRequest {
            match_id: "u1-r1".to_string(),
            chat_history: Vec::new(),
        };

        let Json(response) = mediate(State(state), ApiJson(req)).await.unwrap();
        assert_eq!(response.suggestions.len(), 2);
    }
}
