//! Rendering module for converting parse results to output formats.

mod json;

pub use json::{packet_to_json, to_json, JsonFormat};
