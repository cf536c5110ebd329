//! Form layout parsing.
//!
//! The stages run in order: the token stream adapter builds lines, the
//! classifier picks a schema, the segmenter cuts the lines into sections,
//! the field and table extractors read values through the normalizer, and
//! the assembler produces the [`ParseResult`](crate::ParseResult).

mod assembler;
mod choice;
mod classifier;
mod columns;
mod fields;
pub mod normalize;
mod options;
mod pipeline;
mod quirks;
mod segmenter;
mod tables;
mod tokens;
mod warnings;

pub use classifier::FormClassifier;
pub use options::ParseOptions;
pub use pipeline::FormParser;
pub use quirks::{ContinuationStrategy, PageBreakStrategy};
pub use tokens::{LineBuilder, PageSource, RawPage, RawToken, TokenDump};
