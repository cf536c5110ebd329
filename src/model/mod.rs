//! Data model shared by the parsing stages.
//!
//! Lines flow in from the token stream adapter, typed values and section
//! records accumulate during extraction, and a [`ParseResult`] comes out of
//! the assembler.

mod line;
mod record;
mod result;
mod value;

pub(crate) use line::collapse_whitespace;
pub use line::{Line, LineRef, Token};
pub use record::{ExtractedRecord, Row, SectionRecord};
pub use result::{PacketResult, ParseResult};
pub use value::{Amount, Value};
