//! # bankform
//!
//! Schema-driven layout parser for bankruptcy court forms.
//!
//! This library takes the positional text tokens an extractor pulled out of
//! a filed form and rebuilds the form's structure: sections, line-item
//! tables, checkboxes and dollar amounts, returned as a normalized record.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bankform::{parse_dump_file, render};
//!
//! fn main() -> bankform::Result<()> {
//!     // Parse a stored token dump
//!     let result = parse_dump_file("schedule_d.json")?;
//!
//!     // Convert to JSON
//!     let json = render::to_json(&result, render::JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Built-in forms**: 106Sum, 106A/B, 106D and 106E/F
//! - **Forms as data**: schemas are JSON; custom registries load at runtime
//! - **Layout tolerance**: page breaks, running headers, continuation rows
//! - **Typed values**: currency in cents, checkboxes, choices, dates
//! - **Packets**: split a multi-form filing into per-form results
//! - **Parallel processing**: Uses Rayon for batches of documents

pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod schema;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Amount, ExtractedRecord, Line, LineRef, PacketResult, ParseResult, Row, SectionRecord, Token,
    Value,
};
pub use parser::{
    FormClassifier, FormParser, LineBuilder, PageSource, ParseOptions, RawPage, RawToken,
    TokenDump,
};
pub use render::JsonFormat;
pub use schema::{FormSchema, SchemaRegistry, ValueType};

use std::path::Path;

/// Classify and parse a document with the built-in schemas.
///
/// # Example
///
/// ```no_run
/// use bankform::{parse_pages, RawPage, RawToken};
///
/// let mut page = RawPage::new(1);
/// page.tokens.push(RawToken::new("Official Form 106D", 36.0, 760.0));
/// let result = parse_pages(&vec![page]).unwrap();
/// println!("{}", result.form_type);
/// ```
pub fn parse_pages<S: PageSource + ?Sized>(source: &S) -> Result<ParseResult> {
    FormParser::new().parse(source)
}

/// Parse a document with custom options.
pub fn parse_pages_with_options<S: PageSource + ?Sized>(
    source: &S,
    options: ParseOptions,
) -> Result<ParseResult> {
    FormParser::new().with_options(options).parse(source)
}

/// Load a token dump file and parse it.
///
/// # Arguments
///
/// * `path` - Path to a JSON token dump
pub fn parse_dump_file<P: AsRef<Path>>(path: P) -> Result<ParseResult> {
    let dump = TokenDump::load(path)?;
    parse_pages(&dump)
}

/// Parse a token dump file and render the result as JSON.
///
/// # Example
///
/// ```no_run
/// use bankform::{to_json, JsonFormat};
///
/// let json = to_json("schedule_ef.json", JsonFormat::Compact).unwrap();
/// println!("{}", json);
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let result = parse_dump_file(path)?;
    render::to_json(&result, format)
}

/// Split a multi-form packet and parse each form.
pub fn parse_packet<S: PageSource + ?Sized>(source: &S) -> Result<PacketResult> {
    FormParser::new().parse_packet(source)
}

/// Get the library version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
