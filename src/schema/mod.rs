//! Form schemas and the registry that holds them.
//!
//! Schemas are JSON data. The four built-in forms live under `schemas/` and
//! are embedded into the library; additional registries can be loaded from
//! strings or files without touching extraction code.

mod builtin;
mod pattern;
mod registry;
mod spec;

pub use pattern::Pattern;
pub use registry::SchemaRegistry;
pub use spec::{
    AttachSpec, ColumnSpec, FieldSpec, FormSchema, LayoutOverrides, PageBreakRule, RowContinuation,
    SectionSpec, TableSpec, TotalsSpec, ValueType, XRange,
};
