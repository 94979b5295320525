use std::fmt;

/// Which numeric column of a log line failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Timestamp,
    UpTraffic,
    DownTraffic,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Timestamp => "timestamp",
            Field::UpTraffic => "upTraffic",
            Field::DownTraffic => "downTraffic",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    #[error("expected 4 whitespace-separated tokens, found {found}")]
    TokenCount { found: usize },

    #[error("{field} is not an integer: {token:?}")]
    BadInteger { field: Field, token: String },
}

/// A log line that is not `<timestamp> <deviceID> <upTraffic> <downTraffic>`.
///
/// `line_no` is 1-based and only known when the line came from a numbered source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed record{}: {reason}: {line:?}", location(.line_no))]
pub struct MalformedRecordError {
    pub line_no: Option<usize>,
    pub line: String,
    pub reason: MalformedReason,
}

impl MalformedRecordError {
    pub fn new(line: &str, reason: MalformedReason) -> Self {
        Self {
            line_no: None,
            line: line.to_string(),
            reason,
        }
    }

    pub fn at_line(mut self, line_no: usize) -> Self {
        self.line_no = Some(line_no);
        self
    }
}

fn location(line_no: &Option<usize>) -> String {
    line_no.map(|n| format!(" at line {}", n)).unwrap_or_default()
}
