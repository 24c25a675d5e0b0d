//! Project name derivation
//!
//! Generated projects get a name derived from the request text: the first few
//! word runs, with well-known Chinese words mapped to English, joined with
//! dashes under an `mcp-` prefix.

const MAX_WORDS: usize = 3;

/// Exact-match translations for common Chinese request words
const TRANSLATIONS: &[(&str, &str)] = &[
    ("天气", "weather"),
    ("翻译", "translate"),
    ("数据", "data"),
    ("文件", "file"),
    ("图片", "image"),
    ("音乐", "music"),
    ("视频", "video"),
    ("工具", "tool"),
];

/// Derive a project name from a free-text description.
pub fn derive(description: &str) -> String {
    let words: Vec<String> = extract_words(&description.to_lowercase())
        .into_iter()
        .take(MAX_WORDS)
        .map(|word| translate(&word))
        .collect();

    let name = words.join("-");
    if name.is_empty() {
        "mcp-custom".to_string()
    } else if name.starts_with("mcp") {
        name
    } else {
        format!("mcp-{name}")
    }
}

fn translate(word: &str) -> String {
    TRANSLATIONS
        .iter()
        .find(|(zh, _)| *zh == word)
        .map_or_else(|| word.to_string(), |(_, en)| (*en).to_string())
}

/// Contiguous runs of CJK characters or ASCII letters.
fn extract_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut current_cjk = false;

    for ch in text.chars() {
        let cjk = matches!(ch, '\u{4e00}'..='\u{9fa5}');
        let letter = ch.is_ascii_alphabetic();
        if !cjk && !letter {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if !current.is_empty() && cjk != current_cjk {
            words.push(std::mem::take(&mut current));
        }
        current_cjk = cjk;
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_description() {
        assert_eq!(derive("weather lookup service"), "mcp-weather-lookup-service");
    }

    #[test]
    fn test_known_chinese_words_translate() {
        assert_eq!(derive("天气 工具"), "mcp-weather-tool");
    }

    #[test]
    fn test_unmapped_chinese_run_is_kept() {
        assert_eq!(derive("健康管理"), "mcp-健康管理");
    }

    #[test]
    fn test_mixed_runs_split_at_script_boundaries() {
        assert_eq!(derive("天气app助手"), "mcp-weather-app-助手");
    }

    #[test]
    fn test_existing_mcp_prefix_is_not_doubled() {
        assert_eq!(derive("mcp weather helper"), "mcp-weather-helper");
    }

    #[test]
    fn test_empty_description_falls_back() {
        assert_eq!(derive(""), "mcp-custom");
        assert_eq!(derive("123 456"), "mcp-custom");
    }

    #[test]
    fn test_word_cap() {
        assert_eq!(derive("one two three four five"), "mcp-one-two-three");
    }
}
