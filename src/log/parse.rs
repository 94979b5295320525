use crate::log::error::{Field, MalformedReason, MalformedRecordError};
use crate::log::record::{DeviceId, LogRecord};

/// Parse one access-log line into its device and record.
///
/// Expected columns (whitespace-separated, exactly four):
/// timestamp  deviceID  upTraffic  downTraffic
///
/// Example:
/// 1454307391161 77e3c9e1811d4fb291d0d9bbd456bb4b 79976 11496
pub fn parse_line(line: &str) -> Result<(DeviceId, LogRecord), MalformedRecordError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let &[ts, device, up, down] = &tokens[..] else {
        return Err(MalformedRecordError::new(
            line,
            MalformedReason::TokenCount {
                found: tokens.len(),
            },
        ));
    };

    let int = |field: Field, token: &str| {
        token.parse::<i64>().map_err(|_| {
            MalformedRecordError::new(
                line,
                MalformedReason::BadInteger {
                    field,
                    token: token.to_string(),
                },
            )
        })
    };

    let record = LogRecord {
        timestamp: int(Field::Timestamp, ts)?,
        up_traffic: int(Field::UpTraffic, up)?,
        down_traffic: int(Field::DownTraffic, down)?,
    };

    Ok((DeviceId::new(device), record))
}

/// Parse numbered lines, stopping at the first malformed one.
///
/// Nothing is returned for a batch that contains a bad line.
pub fn parse_lines<I, S>(lines: I) -> Result<Vec<(DeviceId, LogRecord)>, MalformedRecordError>
where
    I: IntoIterator<Item = (usize, S)>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|(lno, line)| parse_line(line.as_ref()).map_err(|e| e.at_line(lno)))
        .collect()
}
