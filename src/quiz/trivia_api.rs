use std::time::Duration;

use log::debug;
use reqwest::Client;

use crate::error::QuizError;
use crate::quiz::options::QuizOptions;
use crate::quiz::Question;

pub const DEFAULT_API_URL: &str = "https://opentdb.com/api.php";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, serde::Deserialize)]
struct TriviaResponse {
    #[serde(default)]
    response_code: u8,
    #[serde(default)]
    results: Vec<TriviaQuestion>,
}

#[derive(Debug, Clone, serde::Deserialize)]
struct TriviaQuestion {
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

impl From<TriviaQuestion> for Question {
    fn from(q: TriviaQuestion) -> Self {
        Question::new(q.question, q.correct_answer, q.incorrect_answers)
    }
}

/// Client for an Open Trivia DB compatible question bank.
pub struct TriviaClient {
    http: Client,
    api_url: String,
}

impl TriviaClient {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self, QuizError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_url: api_url.into(),
        })
    }

    /// Reads `TRIVIA_API_URL` and `TRIVIA_TIMEOUT_SECS`, falling back to the public bank.
    pub fn from_env() -> Result<Self, QuizError> {
        let api_url =
            std::env::var("TRIVIA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout = std::env::var("TRIVIA_TIMEOUT_SECS")
            .ok()
            .and_then(|secs| secs.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::new(api_url, Duration::from_secs(timeout))
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub async fn fetch(&self, options: &QuizOptions) -> Result<Vec<Question>, QuizError> {
        let request = self.http.get(&self.api_url).query(&[
            ("amount", options.num_questions.to_string()),
            ("category", options.category.to_string()),
            ("difficulty", options.difficulty.to_string()),
            ("type", "multiple".to_string()),
        ]);
        debug!("Requesting questions: {:?}", request);

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(QuizError::HttpStatus(status));
        }

        let body = response.text().await?;
        parse_questions(&body)
    }
}

/// Decodes a question bank response body into questions, in the order given.
pub fn parse_questions(body: &str) -> Result<Vec<Question>, QuizError> {
    let response: TriviaResponse = serde_json::from_str(body)?;
    if response.response_code != 0 {
        return Err(QuizError::ResponseCode(response.response_code));
    }

    Ok(response.results.into_iter().map(Question::from).collect())
}
