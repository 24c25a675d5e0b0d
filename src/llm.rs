//! Blocking client for an OpenAI-compatible chat completions endpoint
//!
//! The endpoint is an external collaborator: this module only shapes the
//! request, enforces a finite deadline, and hands back the raw reply text.
//! Callers decide what a failure means (the classifier degrades to local
//! rules, code generation degrades to a built-in template).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{ForgeError, Result};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f64,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

/// Chat completions client bound to the configured endpoint
pub struct LlmClient<'a> {
    config: &'a Config,
}

impl<'a> LlmClient<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Send one system+user exchange and return the reply text.
    ///
    /// Exactly one network attempt; a timeout or transport error is returned
    /// to the caller, never retried here.
    pub fn ask(&self, system: &str, prompt: &str, timeout: Duration) -> Result<String> {
        if !self.config.has_api_key() {
            return Err(ForgeError::LlmMissingKey);
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                Message {
                    role: "system",
                    content: system,
                },
                Message {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: 0.3,
            stream: false,
        };

        let response = client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForgeError::LlmUnreachable {
                reason: format!("endpoint returned HTTP {status}"),
            });
        }

        let body: ChatResponse = response.json()?;
        let content = body
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        if content.is_empty() {
            return Err(ForgeError::LlmMalformed {
                reason: "empty completion".to_string(),
            });
        }

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Timeouts;
    use std::path::PathBuf;

    fn offline_config() -> Config {
        Config {
            api_url: "http://127.0.0.1:1/chat/completions".to_string(),
            api_key: String::new(),
            model: "test-model".to_string(),
            workspace: PathBuf::from("mcp-workspace"),
            verbose: false,
            timeouts: Timeouts::default(),
        }
    }

    #[test]
    fn test_missing_key_fails_before_any_network_io() {
        let config = offline_config();
        let client = LlmClient::new(&config);
        let err = client
            .ask("system", "prompt", Duration::from_secs(1))
            .unwrap_err();
        assert!(matches!(err, ForgeError::LlmMissingKey));
    }

    #[test]
    fn test_chat_request_wire_format() {
        let request = ChatRequest {
            model: "deepseek-chat",
            messages: vec![
                Message {
                    role: "system",
                    content: "you are a helper",
                },
                Message {
                    role: "user",
                    content: "hello",
                },
            ],
            temperature: 0.3,
            stream: false,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "deepseek-chat");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hello");
        assert_eq!(json["stream"], false);
    }

    #[test]
    fn test_chat_response_parse() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"{\"action\":\"search\"}"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content, "{\"action\":\"search\"}");
    }

    #[test]
    fn test_chat_response_tolerates_missing_fields() {
        let parsed: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.choices.is_empty());
    }
}
