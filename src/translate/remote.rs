//! Translation over an OpenAI-compatible chat-completions endpoint.

use std::{fmt, time::Duration};

use serde::Deserialize;
use serde_json::json;

use super::{Translate, TranslateError};

const SYSTEM_PROMPT: &str = "You are a professional software localization translator. \
Translate user interface strings faithfully. Keep placeholders such as {name}, {{count}}, \
%s and HTML tags unchanged. Reply with the translation only.";

pub struct RemoteTranslator {
    agent: ureq::Agent,
    endpoint: String,
    model: String,
    api_key: String,
}

impl fmt::Debug for RemoteTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteTranslator")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

impl RemoteTranslator {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    fn complete(&self, prompt: String) -> Result<String, TranslateError> {
        let body = json!({
            "model": self.model,
            "temperature": 0.2,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt},
            ],
        });

        let response = self
            .agent
            .post(&self.endpoint)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .send_json(body)
            .map_err(|e| TranslateError::Request(e.to_string()))?;

        let completion: ChatCompletion = response
            .into_json()
            .map_err(|e| TranslateError::MalformedResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| TranslateError::MalformedResponse("empty completion".to_string()))
    }
}

impl Translate for RemoteTranslator {
    fn translate_one(
        &self,
        text: &str,
        target: &str,
        source: &str,
    ) -> Result<String, TranslateError> {
        self.complete(single_prompt(text, target, source))
    }

    fn translate_many(
        &self,
        texts: &[String],
        target: &str,
        source: &str,
    ) -> Result<Vec<String>, TranslateError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let prompt = batch_prompt(texts, target, source)?;
        let content = self.complete(prompt)?;
        parse_batch_response(&content, texts.len())
    }
}

fn single_prompt(text: &str, target: &str, source: &str) -> String {
    format!(
        "Translate the following text from {} to {}.\n\n{}",
        source, target, text
    )
}

fn batch_prompt(texts: &[String], target: &str, source: &str) -> Result<String, TranslateError> {
    let payload = serde_json::to_string(texts)
        .map_err(|e| TranslateError::Request(format!("failed to encode batch: {}", e)))?;
    Ok(format!(
        "Translate every string of the following JSON array from {} to {}. \
         Reply with a JSON array of strings only, with exactly {} items in the same order.\n\n{}",
        source,
        target,
        texts.len(),
        payload
    ))
}

/// Parse a JSON array of strings, tolerating a surrounding markdown fence.
fn parse_batch_response(content: &str, expected: usize) -> Result<Vec<String>, TranslateError> {
    let trimmed = content.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();

    let values: Vec<String> = serde_json::from_str(body)
        .map_err(|e| TranslateError::MalformedResponse(e.to_string()))?;

    if values.len() != expected {
        return Err(TranslateError::LengthMismatch {
            expected,
            actual: values.len(),
        });
    }
    Ok(values)
}
