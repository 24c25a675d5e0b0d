//! Structured request analysis returned by the language model
//!
//! The model is asked for one JSON object with a fixed schema. Replies are
//! free-form text, so the object is cut out between the first `{` and the
//! last `}` before parsing. Every field is optional; absent fields take their
//! natural defaults, and an absent action means search.

use serde::Deserialize;

use super::intent::{Intent, ProjectSpec};
use crate::error::{ForgeError, Result};
use crate::matcher;

/// The exact schema requested from the model
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestAnalysis {
    #[serde(default)]
    pub intent: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub service_type: String,
    #[serde(default)]
    pub required_packages: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub search_query: String,
    #[serde(default)]
    pub package_name: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub description: String,
}

/// Cut the JSON object out of a free-form reply: first `{` to last `}`.
pub fn extract_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Parse a raw model reply into an analysis.
pub fn parse_reply(reply: &str) -> Result<RequestAnalysis> {
    let json = extract_json(reply).ok_or_else(|| ForgeError::LlmMalformed {
        reason: "no JSON object in reply".to_string(),
    })?;
    let analysis: RequestAnalysis = serde_json::from_str(json)?;
    Ok(analysis)
}

impl RequestAnalysis {
    /// Convert the analysis into an actionable intent.
    ///
    /// `raw_input` backfills any field the model left empty so every variant
    /// carries enough to be actioned without further lookups.
    pub fn into_intent(self, raw_input: &str) -> Intent {
        let action = self.action.trim().to_lowercase();
        match action.as_str() {
            "install" => {
                let package = first_non_empty(
                    &[self.package_name.as_str(), self.search_query.as_str()],
                    raw_input,
                );
                Intent::Install {
                    package,
                    service_type: self.service_type,
                    required_packages: self.required_packages,
                }
            }
            "create" => {
                let description = first_non_empty(
                    &[self.description.as_str(), self.intent.as_str()],
                    raw_input,
                );
                let mut spec = ProjectSpec {
                    name: non_empty(self.project_name),
                    description,
                    service_type: self.service_type,
                    ..ProjectSpec::default()
                };
                spec.features = self.features;
                spec.add_dependencies(self.required_packages);
                Intent::Create(spec)
            }
            // "search" and anything unrecognized default to search
            _ => {
                let query = first_non_empty(&[self.search_query.as_str()], raw_input);
                let mut terms = matcher::tokenize(&query);
                if !self.service_type.is_empty() {
                    terms.push(self.service_type.clone());
                }
                Intent::Search {
                    query,
                    terms,
                    service_type: self.service_type,
                }
            }
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn first_non_empty(candidates: &[&str], fallback: &str) -> String {
    candidates
        .iter()
        .find(|c| !c.trim().is_empty())
        .map_or_else(|| fallback.to_string(), |c| (*c).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json_plain_object() {
        assert_eq!(extract_json(r#"{"a":1}"#), Some(r#"{"a":1}"#));
    }

    #[test]
    fn test_extract_json_inside_prose_and_fences() {
        let reply = "Here is the analysis:\n```json\n{\"action\":\"search\"}\n```\nDone.";
        assert_eq!(extract_json(reply), Some(r#"{"action":"search"}"#));
    }

    #[test]
    fn test_extract_json_spans_first_to_last_brace() {
        let reply = r#"{"outer":{"inner":1}} trailing"#;
        assert_eq!(extract_json(reply), Some(r#"{"outer":{"inner":1}}"#));
    }

    #[test]
    fn test_extract_json_missing_braces() {
        assert_eq!(extract_json("no json here"), None);
        assert_eq!(extract_json("} reversed {"), None);
    }

    #[test]
    fn test_parse_reply_defaults_missing_fields() {
        let analysis = parse_reply(r#"{"service_type":"weather"}"#).unwrap();
        assert_eq!(analysis.service_type, "weather");
        assert_eq!(analysis.action, "");
        assert!(analysis.required_packages.is_empty());
        assert!(analysis.search_query.is_empty());
    }

    #[test]
    fn test_parse_reply_rejects_garbage() {
        assert!(parse_reply("total nonsense").is_err());
        assert!(parse_reply("{not json}").is_err());
    }

    #[test]
    fn test_missing_action_defaults_to_search() {
        let analysis = parse_reply(r#"{"search_query":"weather tools"}"#).unwrap();
        let intent = analysis.into_intent("raw input");
        match intent {
            Intent::Search { query, .. } => assert_eq!(query, "weather tools"),
            other => panic!("expected search, got {other:?}"),
        }
    }

    #[test]
    fn test_install_intent_carries_package() {
        let analysis = parse_reply(
            r#"{"action":"install","package_name":"weather-js","service_type":"weather"}"#,
        )
        .unwrap();
        match analysis.into_intent("raw") {
            Intent::Install {
                package,
                service_type,
                ..
            } => {
                assert_eq!(package, "weather-js");
                assert_eq!(service_type, "weather");
            }
            other => panic!("expected install, got {other:?}"),
        }
    }

    #[test]
    fn test_install_falls_back_to_search_query_then_raw() {
        let analysis = parse_reply(r#"{"action":"install"}"#).unwrap();
        match analysis.into_intent("the raw text") {
            Intent::Install { package, .. } => assert_eq!(package, "the raw text"),
            other => panic!("expected install, got {other:?}"),
        }
    }

    #[test]
    fn test_create_intent_builds_project_spec() {
        let analysis = parse_reply(
            r#"{
                "action": "create",
                "service_type": "weather",
                "required_packages": ["axios", "weather-js", "axios"],
                "features": ["current weather", "3-day forecast"],
                "project_name": "mcp-weather-helper",
                "description": "A weather lookup service"
            }"#,
        )
        .unwrap();
        match analysis.into_intent("raw") {
            Intent::Create(spec) => {
                assert_eq!(spec.name.as_deref(), Some("mcp-weather-helper"));
                assert_eq!(spec.description, "A weather lookup service");
                assert_eq!(spec.dependencies.len(), 2);
                assert_eq!(spec.features.len(), 2);
            }
            other => panic!("expected create, got {other:?}"),
        }
    }

    #[test]
    fn test_search_terms_include_service_type() {
        let analysis = parse_reply(
            r#"{"action":"search","search_query":"weather tools","service_type":"weather"}"#,
        )
        .unwrap();
        match analysis.into_intent("raw") {
            Intent::Search { terms, .. } => {
                assert!(terms.contains(&"weather".to_string()));
                assert!(terms.contains(&"tools".to_string()));
            }
            other => panic!("expected search, got {other:?}"),
        }
    }
}
