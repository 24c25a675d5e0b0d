//! Interactive mode
//!
//! Reads one request per line. Empty lines re-prompt without side effects,
//! `quit`/`exit` leave with status 0, and a failed request prints its
//! diagnostic and prompts again; nothing a single request does can take the
//! loop down.

use std::io::{BufRead, Write};

use console::Style;

use crate::commands::helpers;
use crate::config::Config;
use crate::error::Result;
use crate::ui;

/// Run the interactive read loop
pub fn run(config: &Config) -> Result<()> {
    print_welcome();

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", Style::new().cyan().bold().apply_to("❯"));
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break; // EOF
        };
        let line = line?;
        let input = line.trim();

        if input.is_empty() {
            continue;
        }
        if is_quit(input) {
            break;
        }

        if let Err(e) = helpers::handle_request(config, input, None, false) {
            ui::failure(&e.to_string());
        }
        println!();
    }

    println!("Bye!");
    Ok(())
}

fn is_quit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "quit" | "exit")
}

fn print_welcome() {
    println!(
        "{}",
        Style::new()
            .bold()
            .apply_to("mcpforge - MCP service assistant")
    );
    println!("Tell me what you need and I will find, install or generate an MCP service.");
    println!();
    println!("Examples:");
    println!("  I need a weather tool");
    println!("  帮我做一个翻译服务");
    println!("  install @modelcontextprotocol/server-filesystem");
    println!();
    println!(
        "Type {} or {} to leave.",
        Style::new().cyan().apply_to("quit"),
        Style::new().cyan().apply_to("exit")
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_words() {
        assert!(is_quit("quit"));
        assert!(is_quit("exit"));
        assert!(is_quit("QUIT"));
        assert!(is_quit("Exit"));
        assert!(!is_quit("quit now"));
        assert!(!is_quit("我要quit"));
    }
}
