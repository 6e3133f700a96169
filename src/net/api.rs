//! Support API — reqwest client for the assistant and ticket endpoints.
//!
//! Thin HTTP wrapper over a fixed base origin. Response bodies go through
//! pure `parse_*` functions for testability; non-success statuses map to
//! [`ClientError::ApiResponse`] carrying the status and body.

use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::turn::ChatTurn;

use super::SupportBackend;
use super::types::{ChatReply, ChatRequest, GreetingReply, Ticket, TicketDraft};

pub struct SupportApi {
    http: reqwest::Client,
    base_url: String,
}

impl SupportApi {
    /// Build the HTTP client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::HttpClientBuild`] if the underlying client
    /// cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ClientError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.trim_end_matches('/').to_owned() })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::ApiRequest(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::ApiRequest(e.to_string()))?;

        if !status.is_success() {
            return Err(ClientError::ApiResponse { status: status.as_u16(), body: text });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl SupportBackend for SupportApi {
    async fn greeting(&self) -> Result<String, ClientError> {
        let body = self.send(self.http.get(self.url("/greeting"))).await?;
        parse_greeting(&body)
    }

    async fn chat(&self, question: &str, history: &[ChatTurn]) -> Result<String, ClientError> {
        let request = ChatRequest { question, chat_history: history };
        let body = self
            .send(self.http.post(self.url("/chat")).json(&request))
            .await?;
        parse_chat_reply(&body)
    }

    async fn list_tickets(&self) -> Result<Vec<Ticket>, ClientError> {
        let body = self.send(self.http.get(self.url("/tickets/"))).await?;
        parse_ticket_list(&body)
    }

    async fn fetch_ticket(&self, ticket_id: i64) -> Result<Ticket, ClientError> {
        let path = format!("/tickets/{ticket_id}");
        let body = self.send(self.http.get(self.url(&path))).await?;
        parse_ticket(&body)
    }

    async fn create_ticket(&self, draft: &TicketDraft) -> Result<Ticket, ClientError> {
        let body = self
            .send(self.http.post(self.url("/tickets/")).json(draft))
            .await?;
        parse_ticket(&body)
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_greeting(json: &str) -> Result<String, ClientError> {
    let reply: GreetingReply = serde_json::from_str(json).map_err(|e| ClientError::ApiParse(e.to_string()))?;
    reply
        .greeting
        .ok_or_else(|| ClientError::ApiParse("greeting missing or null".to_owned()))
}

fn parse_chat_reply(json: &str) -> Result<String, ClientError> {
    let reply: ChatReply = serde_json::from_str(json).map_err(|e| ClientError::ApiParse(e.to_string()))?;
    Ok(reply.response)
}

fn parse_ticket(json: &str) -> Result<Ticket, ClientError> {
    serde_json::from_str(json).map_err(|e| ClientError::ApiParse(e.to_string()))
}

fn parse_ticket_list(json: &str) -> Result<Vec<Ticket>, ClientError> {
    serde_json::from_str(json).map_err(|e| ClientError::ApiParse(e.to_string()))
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
