//! Rule-based fallback classification
//!
//! Used whenever the online analysis is unavailable or unusable. Pure and
//! total: every input maps deterministically to a valid intent, with create
//! as the default when no trigger word asks for search or install.

use super::intent::{Intent, ProjectSpec};
use crate::matcher;

const SEARCH_TRIGGERS: &[&str] = &["找", "搜索", "查找", "有什么", "search", "find"];
const INSTALL_TRIGGERS: &[&str] = &["安装", "下载", "install", "download"];

/// Classify without any external call. Never fails.
pub fn analyze(input: &str) -> Intent {
    let lower = input.to_lowercase();

    let (service_type, required_packages) = detect_service_type(&lower);

    if contains_any(&lower, SEARCH_TRIGGERS) {
        let mut terms = matcher::tokenize(input);
        if service_type != "custom" {
            terms.push(service_type.to_string());
        }
        return Intent::Search {
            query: input.to_string(),
            terms,
            service_type: service_type.to_string(),
        };
    }

    if contains_any(&lower, INSTALL_TRIGGERS) {
        return Intent::Install {
            package: package_candidate(input),
            service_type: service_type.to_string(),
            required_packages: to_strings(required_packages),
        };
    }

    let mut spec = ProjectSpec {
        name: None,
        description: input.to_string(),
        service_type: service_type.to_string(),
        ..ProjectSpec::default()
    };
    spec.add_dependencies(to_strings(required_packages));
    Intent::Create(spec)
}

fn detect_service_type(lower: &str) -> (&'static str, &'static [&'static str]) {
    if lower.contains("天气") || lower.contains("weather") {
        ("weather", &["axios", "weather-js"])
    } else if lower.contains("翻译") || lower.contains("translate") {
        ("translation", &["@vitalets/google-translate-api"])
    } else {
        ("custom", &[])
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Best-effort package name from an install request. Preference order:
/// a scoped/pathed token, the token right after an install trigger word,
/// then any ASCII token that is not itself a trigger. Falls back to the
/// whole trimmed input.
fn package_candidate(input: &str) -> String {
    fn is_trigger(token: &str) -> bool {
        INSTALL_TRIGGERS.contains(&token.to_lowercase().as_str())
    }

    let tokens: Vec<&str> = input.split_whitespace().collect();

    if let Some(scoped) = tokens
        .iter()
        .copied()
        .find(|t| t.contains('@') || t.contains('/'))
    {
        return scoped.to_string();
    }

    if let Some(pos) = tokens.iter().position(|&t| is_trigger(t)) {
        if let Some(&next) = tokens.get(pos + 1) {
            return next.to_string();
        }
    }

    tokens
        .iter()
        .copied()
        .find(|&t| {
            t.is_ascii() && t.chars().any(|c| c.is_ascii_alphanumeric()) && !is_trigger(t)
        })
        .map_or_else(|| input.trim().to_string(), str::to_string)
}
