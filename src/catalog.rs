//! Built-in catalog of known MCP service packages
//!
//! A small, fixed list matched locally before any registry search. Entries are
//! immutable and validated once at startup; a malformed entry is a programming
//! error and aborts the process.

use crate::error::{ForgeError, Result};

/// One known MCP service package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDescriptor {
    /// Display name
    pub name: &'static str,
    /// npm package identifier
    pub package: &'static str,
    /// Free-text description, also consulted by the matcher
    pub description: &'static str,
    /// Keywords in English and Chinese; never empty
    pub keywords: &'static [&'static str],
}

/// The fixed catalog, in priority order (ties in match score keep the earlier entry)
pub const KNOWN_SERVICES: &[ServiceDescriptor] = &[
    ServiceDescriptor {
        name: "@modelcontextprotocol/server-filesystem",
        package: "@modelcontextprotocol/server-filesystem",
        description: "File system operations - read, write, manage files",
        keywords: &[
            "file",
            "filesystem",
            "fs",
            "read",
            "write",
            "文件",
            "目录",
            "搜索文件",
            "文件夹",
            "管理",
        ],
    },
    ServiceDescriptor {
        name: "@modelcontextprotocol/server-github",
        package: "@modelcontextprotocol/server-github",
        description: "GitHub integration - repos, issues, PRs",
        keywords: &["github", "git", "repo", "repository", "代码", "仓库"],
    },
    ServiceDescriptor {
        name: "mcp-server-fetch",
        package: "mcp-server-fetch",
        description: "HTTP/HTTPS fetch operations",
        keywords: &["fetch", "http", "api", "web", "request", "网页", "请求"],
    },
    ServiceDescriptor {
        name: "@modelcontextprotocol/server-postgres",
        package: "@modelcontextprotocol/server-postgres",
        description: "PostgreSQL database operations",
        keywords: &["postgres", "postgresql", "database", "sql", "数据库"],
    },
    ServiceDescriptor {
        name: "mcp-server-sqlite",
        package: "mcp-server-sqlite",
        description: "SQLite database operations",
        keywords: &["sqlite", "database", "sql", "db", "本地数据库"],
    },
    ServiceDescriptor {
        name: "mcp-server-time",
        package: "mcp-server-time",
        description: "Time and date operations",
        keywords: &["time", "date", "clock", "timer", "时间", "日期"],
    },
    ServiceDescriptor {
        name: "mcp-server-weather",
        package: "mcp-server-weather",
        description: "Weather information",
        keywords: &["weather", "天气", "气温", "天气预报", "weather forecast"],
    },
    ServiceDescriptor {
        name: "mcp-server-notes",
        package: "mcp-server-notes",
        description: "Note taking and management",
        keywords: &["note", "notes", "memo", "笔记", "记事", "记录", "备忘录"],
    },
];

/// Validate catalog invariants: non-empty identifiers and keyword sets.
///
/// Called once at startup; failure here can only come from editing the
/// catalog above, never from user input.
pub fn validate(catalog: &[ServiceDescriptor]) -> Result<()> {
    for entry in catalog {
        if entry.name.is_empty() || entry.package.is_empty() {
            return Err(ForgeError::CatalogInvalid {
                name: entry.name.to_string(),
                reason: "empty name or package identifier".to_string(),
            });
        }
        if entry.keywords.is_empty() {
            return Err(ForgeError::CatalogInvalid {
                name: entry.name.to_string(),
                reason: "empty keyword set".to_string(),
            });
        }
        if entry.keywords.iter().any(|k| k.is_empty()) {
            return Err(ForgeError::CatalogInvalid {
                name: entry.name.to_string(),
                reason: "blank keyword".to_string(),
            });
        }
    }
    Ok(())
}
