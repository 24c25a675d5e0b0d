//! Request classification
//!
//! Turns raw natural-language input into an [`Intent`]. The primary path asks
//! the configured language model for a structured analysis; any failure there
//! (missing key, timeout, transport error, unparseable reply) silently
//! degrades to the deterministic rule-based fallback. Classification itself
//! therefore never fails.

mod analysis;
pub mod fallback;
mod intent;

pub use analysis::{RequestAnalysis, extract_json, parse_reply};
pub use intent::{Intent, ProjectSpec};

use crate::config::Config;
use crate::llm::LlmClient;
use crate::progress::Spinner;
use crate::ui;

const SYSTEM_PROMPT: &str =
    "You are an MCP service expert. Analyze what the user needs and always reply with valid JSON.";

/// Classifier bound to the runtime configuration
pub struct Classifier<'a> {
    config: &'a Config,
    llm: LlmClient<'a>,
}

impl<'a> Classifier<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            llm: LlmClient::new(config),
        }
    }

    /// Classify a request. `offline` skips the model call entirely.
    ///
    /// The input is expected to be non-empty; callers filter blank lines
    /// before classification.
    pub fn classify(&self, input: &str, offline: bool) -> Intent {
        if offline || !self.config.has_api_key() {
            ui::verbose(self.config, "classifying with local rules");
            return fallback::analyze(input);
        }

        let spinner = Spinner::new("Analyzing your request...");
        let result = self.classify_online(input);
        spinner.clear();

        match result {
            Ok(intent) => intent,
            Err(e) => {
                ui::verbose(
                    self.config,
                    &format!("online analysis unavailable ({e}); using local rules"),
                );
                fallback::analyze(input)
            }
        }
    }

    /// One model call, one parse. No retries; errors degrade at the caller.
    fn classify_online(&self, input: &str) -> crate::error::Result<Intent> {
        let reply = self.llm.ask(
            SYSTEM_PROMPT,
            &analysis_prompt(input),
            self.config.timeouts.classify,
        )?;
        let parsed = parse_reply(&reply)?;
        Ok(parsed.into_intent(input))
    }
}

/// The analysis prompt, pinning the exact output schema.
fn analysis_prompt(input: &str) -> String {
    format!(
        r#"Analyze the user's request and work out what they want done.

Request: {input}

Determine:
1. the user's actual goal
2. whether to search for, install, or create an MCP service
3. the MCP service type involved
4. which npm packages would be needed
5. the concrete features required

Return a single JSON object, nothing else:
{{
    "intent": "the user's actual goal",
    "action": "search|install|create",
    "service_type": "weather|translation|database|api|custom|...",
    "required_packages": ["npm package names"],
    "features": ["concrete feature points"],
    "search_query": "query for searching existing services",
    "package_name": "package to install, if any",
    "project_name": "suggested project name",
    "description": "detailed description"
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Timeouts;
    use std::path::PathBuf;

    fn keyless_config() -> Config {
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
    fn test_classify_without_key_uses_fallback() {
        let config = keyless_config();
        let classifier = Classifier::new(&config);
        let intent = classifier.classify("我需要查天气的工具", false);
        match intent {
            Intent::Create(spec) => assert_eq!(spec.service_type, "weather"),
            other => panic!("expected create, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_offline_flag_skips_model() {
        let config = keyless_config();
        let classifier = Classifier::new(&config);
        let intent = classifier.classify("find a database tool", true);
        assert_eq!(intent.action_name(), "search");
    }

    #[test]
    fn test_classify_degrades_when_endpoint_is_unreachable() {
        // Nothing listens on port 1, so the single network attempt fails
        // immediately and the fallback must still produce an intent.
        let mut config = keyless_config();
        config.api_key = "sk-test".to_string();
        config.timeouts.classify = std::time::Duration::from_secs(2);
        let classifier = Classifier::new(&config);
        let intent = classifier.classify("我需要查天气的工具", false);
        match intent {
            Intent::Create(spec) => assert_eq!(spec.service_type, "weather"),
            other => panic!("expected create, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_never_fails_on_odd_input() {
        let config = keyless_config();
        let classifier = Classifier::new(&config);
        for input in ["???", "。。。", "SELECT * FROM users;"] {
            let intent = classifier.classify(input, true);
            assert!(matches!(
                intent.action_name(),
                "search" | "install" | "create"
            ));
        }
    }

    #[test]
    fn test_analysis_prompt_pins_schema_fields() {
        let prompt = analysis_prompt("a weather tool");
        for field in [
            "\"intent\"",
            "\"action\"",
            "\"service_type\"",
            "\"required_packages\"",
            "\"features\"",
            "\"search_query\"",
            "\"package_name\"",
            "\"project_name\"",
            "\"description\"",
        ] {
            assert!(prompt.contains(field), "prompt missing {field}");
        }
        assert!(prompt.contains("a weather tool"));
    }
}
