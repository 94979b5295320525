use std::fmt;

/// Opaque device identifier taken verbatim from the second column of a log line.
///
/// Equality is exact string equality; ordering is lexicographic so it can key a
/// `BTreeMap`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeviceId(pub String);

impl DeviceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A single access event: when it happened and how many bytes went each way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRecord {
    /// Epoch millis.
    pub timestamp: i64,
    pub up_traffic: i64,
    pub down_traffic: i64,
}

impl LogRecord {
    pub fn new(timestamp: i64, up_traffic: i64, down_traffic: i64) -> Self {
        Self {
            timestamp,
            up_traffic,
            down_traffic,
        }
    }
}

/// Folded summary of every record seen for one device.
///
/// `timestamp` is the earliest event; the traffic fields are running totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregatedRecord {
    pub timestamp: i64,
    pub up_traffic: i64,
    pub down_traffic: i64,
}

impl AggregatedRecord {
    pub fn new(timestamp: i64, up_traffic: i64, down_traffic: i64) -> Self {
        Self {
            timestamp,
            up_traffic,
            down_traffic,
        }
    }
}

/// A single record seeds its device's aggregate unchanged.
impl From<LogRecord> for AggregatedRecord {
    fn from(r: LogRecord) -> Self {
        Self {
            timestamp: r.timestamp,
            up_traffic: r.up_traffic,
            down_traffic: r.down_traffic,
        }
    }
}
