//! Scored matching of queries against the service catalog
//!
//! Scoring is deliberately permissive: a (term, keyword) pair counts when
//! either string contains the other, not only on equality, and repeated query
//! terms inflate the score. This reproduces the matching behavior users
//! already rely on; do not replace it with a distance metric.

use crate::catalog::ServiceDescriptor;

/// A catalog entry together with its match score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult<'a> {
    pub descriptor: &'a ServiceDescriptor,
    pub score: f64,
}

/// Find the best-scoring catalog entry for the given query terms.
///
/// Score accumulation per entry:
/// - +1 for every (term, keyword) pair where one is a substring of the other
/// - +0.5 for every term that appears in the entry description
///
/// A strictly greater score replaces the current best, so equal scores keep
/// the earliest entry. Returns `None` unless the best score is above zero.
pub fn best_match<'a>(
    catalog: &'a [ServiceDescriptor],
    terms: &[String],
) -> Option<MatchResult<'a>> {
    let search_terms: Vec<String> = terms.iter().map(|t| t.to_lowercase()).collect();

    let mut best: Option<MatchResult<'a>> = None;

    for entry in catalog {
        let keywords: Vec<String> = entry.keywords.iter().map(|k| k.to_lowercase()).collect();
        let desc_lower = entry.description.to_lowercase();

        let mut score = 0.0;
        for term in &search_terms {
            for keyword in &keywords {
                if term.contains(keyword.as_str()) || keyword.contains(term.as_str()) {
                    score += 1.0;
                }
            }
        }
        for term in &search_terms {
            if desc_lower.contains(term.as_str()) {
                score += 0.5;
            }
        }

        if score > best.map_or(0.0, |b| b.score) {
            best = Some(MatchResult {
                descriptor: entry,
                score,
            });
        }
    }

    best
}

/// Split free text into match terms: runs of CJK characters longer than one
/// character and ASCII words longer than two.
pub fn tokenize(text: &str) -> Vec<String> {
    fn flush_cjk(buf: &mut String, out: &mut Vec<String>) {
        if buf.chars().count() > 1 {
            out.push(buf.clone());
        }
        buf.clear();
    }
    fn flush_ascii(buf: &mut String, out: &mut Vec<String>) {
        if buf.len() > 2 {
            out.push(buf.clone());
        }
        buf.clear();
    }

    let mut terms = Vec::new();
    let mut cjk = String::new();
    let mut ascii = String::new();

    for ch in text.chars() {
        if is_cjk(ch) {
            flush_ascii(&mut ascii, &mut terms);
            cjk.push(ch);
        } else if ch.is_ascii_alphanumeric() {
            flush_cjk(&mut cjk, &mut terms);
            ascii.push(ch);
        } else {
            flush_cjk(&mut cjk, &mut terms);
            flush_ascii(&mut ascii, &mut terms);
        }
    }
    flush_cjk(&mut cjk, &mut terms);
    flush_ascii(&mut ascii, &mut terms);

    terms
}

fn is_cjk(ch: char) -> bool {
    matches!(ch, '\u{4e00}'..='\u{9fa5}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::KNOWN_SERVICES;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn test_no_overlap_returns_none() {
        let result = best_match(KNOWN_SERVICES, &terms(&["violin", "orchestra"]));
        assert!(result.is_none());
    }

    #[test]
    fn test_empty_terms_returns_none() {
        assert!(best_match(KNOWN_SERVICES, &[]).is_none());
    }

    #[test]
    fn test_exact_keyword_scores_at_least_one() {
        let result = best_match(KNOWN_SERVICES, &terms(&["github"])).unwrap();
        assert_eq!(result.descriptor.name, "@modelcontextprotocol/server-github");
        assert!(result.score >= 1.0);
    }

    #[test]
    fn test_file_manager_scores_at_least_two() {
        // "file" is a substring of both "file" and "filesystem" keywords
        let result = best_match(KNOWN_SERVICES, &terms(&["file", "manager"])).unwrap();
        assert_eq!(
            result.descriptor.name,
            "@modelcontextprotocol/server-filesystem"
        );
        assert!(result.score >= 2.0);
    }

    #[test]
    fn test_substring_containment_is_symmetric() {
        // Term contains the keyword: a whole CJK sentence matched against "天气"
        let result = best_match(KNOWN_SERVICES, &terms(&["我需要查天气的工具"])).unwrap();
        assert_eq!(result.descriptor.name, "mcp-server-weather");
        // Keyword contains the term: "post" inside "postgres"/"postgresql"
        let result = best_match(KNOWN_SERVICES, &terms(&["postgres"])).unwrap();
        assert_eq!(
            result.descriptor.name,
            "@modelcontextprotocol/server-postgres"
        );
    }

    #[test]
    fn test_description_match_adds_half_point() {
        // "operations" appears in several descriptions but in no keyword set,
        // so every score comes from the description half-points.
        let result = best_match(KNOWN_SERVICES, &terms(&["operations"])).unwrap();
        assert_eq!(result.score, 0.5);
    }

    #[test]
    fn test_duplicate_terms_inflate_score() {
        let single = best_match(KNOWN_SERVICES, &terms(&["weather"])).unwrap();
        let doubled = best_match(KNOWN_SERVICES, &terms(&["weather", "weather"])).unwrap();
        assert_eq!(single.descriptor, doubled.descriptor);
        assert!(doubled.score > single.score);
    }

    #[test]
    fn test_deterministic() {
        let a = best_match(KNOWN_SERVICES, &terms(&["database"])).unwrap();
        let b = best_match(KNOWN_SERVICES, &terms(&["database"])).unwrap();
        assert_eq!(a.descriptor.name, b.descriptor.name);
        assert_eq!(a.score, b.score);
    }

    #[test]
    fn test_tie_keeps_earlier_entry() {
        let entries = [
            ServiceDescriptor {
                name: "first",
                package: "first",
                description: "alpha",
                keywords: &["shared"],
            },
            ServiceDescriptor {
                name: "second",
                package: "second",
                description: "beta",
                keywords: &["shared"],
            },
        ];
        let result = best_match(&entries, &terms(&["shared"])).unwrap();
        assert_eq!(result.descriptor.name, "first");
    }

    #[test]
    fn test_database_tie_break_prefers_postgres_entry() {
        // "database" hits keywords of both database entries equally; the
        // postgres entry is listed first in the catalog.
        let result = best_match(KNOWN_SERVICES, &terms(&["database", "sql"])).unwrap();
        assert_eq!(
            result.descriptor.name,
            "@modelcontextprotocol/server-postgres"
        );
    }

    #[test]
    fn test_tokenize_mixed_text() {
        assert_eq!(
            tokenize("我需要 weather 的工具"),
            vec!["我需要".to_string(), "weather".to_string(), "的工具".to_string()]
        );
    }

    #[test]
    fn test_tokenize_drops_short_fragments() {
        // Single CJK characters and one/two letter ASCII words are noise
        assert_eq!(tokenize("a db 气"), Vec::<String>::new());
        assert_eq!(tokenize("use the fetch tool"), vec!["use", "the", "fetch", "tool"]);
    }

    #[test]
    fn test_tokenize_contiguous_cjk_is_one_term() {
        assert_eq!(tokenize("我需要查天气的工具"), vec!["我需要查天气的工具"]);
    }
}
