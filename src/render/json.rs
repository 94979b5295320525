use crate::pipeline::RunOutput;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    top: usize,
    devices: usize,
    records: usize,
    entries: Vec<JsonEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    rank: usize,
    device: &'a str,
    up_traffic: i64,
    down_traffic: i64,
    timestamp: i64,
}

/// Render a run as a pretty-printed JSON document.
pub fn render_json(out: &RunOutput, top: usize) -> anyhow::Result<String> {
    let report = JsonReport {
        top,
        devices: out.devices,
        records: out.records,
        entries: out
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| JsonEntry {
                rank: i + 1,
                device: e.device.as_str(),
                up_traffic: e.key.up_traffic,
                down_traffic: e.key.down_traffic,
                timestamp: e.key.timestamp,
            })
            .collect(),
    };
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::DeviceId;
    use crate::rank::{ResultEntry, SortKey};
    use pretty_assertions::assert_eq;

    #[test]
    fn ranks_are_one_based() {
        let out = RunOutput {
            records: 3,
            devices: 2,
            entries: vec![
                ResultEntry::new(SortKey::new(100, 200, 1500), DeviceId::from("B")),
                ResultEntry::new(SortKey::new(15, 12, 1000), DeviceId::from("A")),
            ],
        };
        let value: serde_json::Value = serde_json::from_str(&render_json(&out, 2).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "top": 2,
                "devices": 2,
                "records": 3,
                "entries": [
                    {"rank": 1, "device": "B", "up_traffic": 100, "down_traffic": 200, "timestamp": 1500},
                    {"rank": 2, "device": "A", "up_traffic": 15, "down_traffic": 12, "timestamp": 1000},
                ]
            })
        );
    }
}
