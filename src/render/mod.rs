//! Result presentation: plain text lines or a JSON document.

pub mod json;
pub mod text;

pub use json::render_json;
pub use text::render_text;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `deviceID: (upTraffic, downTraffic, timestamp)` per line.
    #[default]
    Text,
    Json,
}
