//! Access-log lines: record types and the line parser.

pub mod error;
pub mod parse;
pub mod record;

pub use error::{Field, MalformedReason, MalformedRecordError};
pub use parse::{parse_line, parse_lines};
pub use record::{AggregatedRecord, DeviceId, LogRecord};
