//! JSON rendering for parse results.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{PacketResult, ParseResult};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a parse result to JSON.
///
/// Keys are emitted in sorted order, so equal results render byte-identically.
pub fn to_json(result: &ParseResult, format: JsonFormat) -> Result<String> {
    render(result, format)
}

/// Convert a packet result to JSON.
pub fn packet_to_json(packet: &PacketResult, format: JsonFormat) -> Result<String> {
    render(packet, format)
}

fn render<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
