//! 콘솔 리포터 포트 구현 어댑터.

use std::io::{self, IsTerminal};

use crate::application::ports::Reporter;

/// 콘솔 전용 리포터 어댑터.
pub struct ConsoleReporter {
    interactive: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    /// stdout이 TTY일 때만 상태 색상을 사용한다.
    pub fn new() -> Self {
        Self {
            interactive: io::stdout().is_terminal(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn section(&self, name: &str) {
        println!();
        println!("==================== {} ====================", name);
    }

    fn kv(&self, key: &str, value: &str) {
        println!("{:<16}: {}", key, value);
    }

    fn status(&self, scope: &str, message: &str) {
        if self.interactive {
            println!("[{:<12}] {}", scope, colorize_status(message));
        } else {
            println!("[{:<12}] {}", scope, message);
        }
    }
}

fn colorize_status(message: &str) -> String {
    match message.split_whitespace().next() {
        Some("ok") => format!("\x1b[32m{message}\x1b[0m"),
        Some("skipped") | Some("unchanged") => format!("\x1b[33m{message}\x1b[0m"),
        Some("error") => format!("\x1b[31m{message}\x1b[0m"),
        _ => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_by_leading_word() {
        assert_eq!(colorize_status("ok llm"), "\x1b[32mok llm\x1b[0m");
        assert_eq!(colorize_status("skipped"), "\x1b[33mskipped\x1b[0m");
        assert_eq!(colorize_status("written"), "written");
    }
}
