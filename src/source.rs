//! Line source: read a log file (or stdin) into numbered lines.

use crate::Result;
use anyhow::Context;
use std::fs;
use std::io::{self, Read};

/// Path meaning "read standard input".
pub const STDIN_PATH: &str = "-";

/// Read `path` and return its lines with 1-based line numbers.
pub fn read_lines(path: &str) -> Result<Vec<(usize, String)>> {
    let text = if path == STDIN_PATH {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("read log from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("read log file {}", path))?
    };
    Ok(numbered_lines(&text))
}

/// Number lines from 1. Blank lines are kept so the parser rejects them.
pub fn numbered_lines(text: &str) -> Vec<(usize, String)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_blank_lines_for_the_parser() {
        let lines = numbered_lines("1 A 1 1\n\n  \n2 B 2 2\r\n");
        assert_eq!(
            lines,
            vec![
                (1, "1 A 1 1".to_string()),
                (2, String::new()),
                (3, "  ".to_string()),
                (4, "2 B 2 2".to_string()),
            ]
        );
    }

    #[test]
    fn final_newline_adds_no_line() {
        assert_eq!(numbered_lines("1 A 1 1\n"), vec![(1, "1 A 1 1".to_string())]);
    }

    #[test]
    fn missing_file_names_path() {
        let err = read_lines("/definitely/not/here.log").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.log"));
    }
}
