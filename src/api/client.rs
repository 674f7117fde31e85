//! HTTP client for the question bank API

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::quiz::model::{AttemptResult, Question, QuizMode, QuizSelection, SubmissionPayload};
use crate::quiz::session::SubmitAttempt;

use super::error::ApiError;
use super::models::{
    StartQuizResponse, StartSubjectRequest, StartTopicsRequest, SubmitMockTestRequest,
    SubmitQuizRequest, SubmitResponse, SubmitSubjectRequest,
};

/// A started quiz: the fetched questions plus the server's attempt id
#[derive(Debug, Clone)]
pub struct StartedQuiz {
    pub questions: Vec<Question>,
    pub attempt_id: String,
}

/// Question bank API client
pub struct ApiClient {
    /// HTTP client
    client: Client,
    /// Base URL without trailing slash
    base_url: String,
    /// Bearer token for authentication
    token: String,
}

impl ApiClient {
    /// Request timeout in seconds
    const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Create a new client for the given base URL and access token
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(Self::REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url, token: token.into() }
    }

    /// Start a quiz for the given selection.
    ///
    /// An empty question list is not an API failure; the session's `begin`
    /// owns that check.
    pub async fn start_quiz(&self, selection: &QuizSelection) -> Result<StartedQuiz, ApiError> {
        let response: StartQuizResponse = match selection {
            QuizSelection::Chapter { chapter_id } => {
                self.post_json(&format!("quiz/chapter/{chapter_id}/start"), &serde_json::json!({}))
                    .await?
            }
            QuizSelection::Topics { topic_ids } => {
                self.post_json("quiz/topics/start", &StartTopicsRequest { topic_ids }).await?
            }
            QuizSelection::Subject { subject_id, mood, .. } => {
                self.post_json(
                    &format!("quiz/subject/{subject_id}/start"),
                    &StartSubjectRequest { mood: *mood },
                )
                .await?
            }
            QuizSelection::MockTest { test_id } => {
                self.post_json(&format!("mock-test/{test_id}/start"), &serde_json::json!({}))
                    .await?
            }
        };

        if !response.success {
            return Err(ApiError::Rejected {
                message: response
                    .message
                    .unwrap_or_else(|| "start request was not successful".to_string()),
            });
        }

        let attempt_id = response
            .attempt_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ApiError::Rejected {
                message: "start response did not include an attempt id".to_string(),
            })?;

        Ok(StartedQuiz { questions: response.questions, attempt_id })
    }

    /// POST a JSON body and decode a JSON response with shared status triage
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::Server {
                status: 401,
                message: "Invalid or expired access token".to_string(),
            });
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Server { status: status.as_u16(), message });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl SubmitAttempt for ApiClient {
    /// Submit through the endpoint and field-name dialect of the payload's mode
    async fn submit_attempt(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<AttemptResult, ApiError> {
        let response: SubmitResponse = match payload.mode {
            QuizMode::Chapter | QuizMode::Topic => {
                self.post_json("quiz/submit", &SubmitQuizRequest::from_payload(payload)).await?
            }
            QuizMode::Subject => {
                self.post_json("quiz/subject/submit", &SubmitSubjectRequest::from_payload(payload))
                    .await?
            }
            QuizMode::Amc => {
                self.post_json("quiz/amc/submit", &SubmitSubjectRequest::from_payload(payload))
                    .await?
            }
            QuizMode::MockTest => {
                self.post_json("mock-test/submit", &SubmitMockTestRequest::from_payload(payload))
                    .await?
            }
        };

        if !response.success {
            return Err(ApiError::Rejected {
                message: response
                    .message
                    .unwrap_or_else(|| "submission was not accepted".to_string()),
            });
        }

        Ok(response.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("https://bank.example/api/", "tok");
        assert_eq!(client.base_url, "https://bank.example/api");
    }
}
