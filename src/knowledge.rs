//! Local knowledge table of service categories
//!
//! A cheap keyword-to-category lookup consulted before the scored catalog
//! matcher. A direct keyword hit short-circuits scoring entirely and carries
//! fixed package and dependency suggestions for its category.

/// One service category with suggested packages and dependencies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    /// Stable key, also matched against the classifier's service type
    pub key: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Packages suggested for direct installation (first one is the default)
    pub packages: &'static [&'static str],
    /// Dependency list carried into generated projects
    pub dependencies: &'static [&'static str],
    pub description: &'static str,
}

const CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo {
        key: "weather",
        label: "Weather service",
        packages: &["@modelcontextprotocol/server-weather", "weather-js"],
        dependencies: &["axios", "weather-js"],
        description: "Weather lookups and forecasts",
    },
    CategoryInfo {
        key: "translation",
        label: "Translation service",
        packages: &["@vitalets/google-translate-api"],
        dependencies: &["@vitalets/google-translate-api", "axios"],
        description: "Multi-language text translation",
    },
    CategoryInfo {
        key: "map",
        label: "Map service",
        packages: &["leaflet", "mapbox-gl"],
        dependencies: &["axios", "leaflet"],
        description: "Map display, positioning and route planning",
    },
    CategoryInfo {
        key: "subway",
        label: "Subway service",
        packages: &["subway-api"],
        dependencies: &["axios", "cheerio"],
        description: "Subway lines, stations and timetables",
    },
    CategoryInfo {
        key: "database",
        label: "Database service",
        packages: &["sqlite3", "knex"],
        dependencies: &["sqlite3", "knex"],
        description: "Data storage and queries",
    },
    CategoryInfo {
        key: "file",
        label: "File service",
        packages: &["@modelcontextprotocol/server-filesystem"],
        dependencies: &["fs-extra"],
        description: "File reads, writes and directory operations",
    },
];

/// Keyword-to-category mapping, checked in order; first substring hit wins
const KEYWORD_MAP: &[(&str, &str)] = &[
    ("天气", "weather"),
    ("weather", "weather"),
    ("翻译", "translation"),
    ("translate", "translation"),
    ("translation", "translation"),
    ("地图", "map"),
    ("map", "map"),
    ("地铁", "subway"),
    ("subway", "subway"),
    ("metro", "subway"),
    ("数据库", "database"),
    ("database", "database"),
    ("db", "database"),
    ("文件", "file"),
    ("file", "file"),
    ("filesystem", "file"),
];

fn category(key: &str) -> Option<&'static CategoryInfo> {
    CATEGORIES.iter().find(|c| c.key == key)
}

/// Look up a category for a query string and/or a classified service type.
///
/// Each mapping is tried in table order: a hit is either the mapped keyword
/// appearing as a substring of the lowercased query, or the service type
/// equalling the mapped category key.
pub fn lookup(query: &str, service_type: &str) -> Option<&'static CategoryInfo> {
    let query_lower = query.to_lowercase();
    for (keyword, key) in KEYWORD_MAP {
        if query_lower.contains(keyword) || service_type == *key {
            return category(key);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_chinese_substring() {
        let hit = lookup("我需要查天气的工具", "").unwrap();
        assert_eq!(hit.key, "weather");
        assert_eq!(hit.dependencies, &["axios", "weather-js"]);
    }

    #[test]
    fn test_lookup_by_english_substring() {
        let hit = lookup("a weather forecast helper", "").unwrap();
        assert_eq!(hit.key, "weather");
    }

    #[test]
    fn test_lookup_by_service_type() {
        let hit = lookup("unrelated words", "translation").unwrap();
        assert_eq!(hit.key, "translation");
        assert_eq!(
            hit.packages,
            &["@vitalets/google-translate-api"]
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive_on_query() {
        let hit = lookup("Database Admin Tool", "").unwrap();
        assert_eq!(hit.key, "database");
    }

    #[test]
    fn test_lookup_miss() {
        assert!(lookup("play the violin", "").is_none());
        assert!(lookup("", "").is_none());
    }

    #[test]
    fn test_first_match_wins_in_table_order() {
        // "天气地图" contains both a weather and a map keyword; the weather
        // mapping is listed first.
        let hit = lookup("天气地图", "").unwrap();
        assert_eq!(hit.key, "weather");
    }

    #[test]
    fn test_metro_maps_to_subway() {
        let hit = lookup("metro timetable", "").unwrap();
        assert_eq!(hit.key, "subway");
        assert_eq!(hit.dependencies, &["axios", "cheerio"]);
    }

    #[test]
    fn test_every_category_reachable_from_map() {
        for (_, key) in KEYWORD_MAP {
            assert!(category(key).is_some(), "unmapped category {key}");
        }
    }
}
