//! Structured-field list model and its pluggable collaborators.
//!
//! # Data Flow
//! ```text
//! raw header text
//!     → parser.rs (ListParser: grammar → StructuredList)
//!     → value.rs (Entry = Value + Parameters)
//!     → quality.rs (QualitySort: stable descending order by `q`)
//! ```
//!
//! # Design Decisions
//! - The grammar itself lives in the `sfv` crate; this module only adapts it
//! - Parser and sorter are traits so the middleware can run with test doubles
//! - Values are owned; nothing borrows from the request after parsing

pub mod parser;
pub mod quality;
pub mod value;

pub use parser::{ListParser, ParseError, SfvParser};
pub use quality::{quality_of, QualitySort, StableQualitySort, DEFAULT_QUALITY};
pub use value::{Entry, Parameters, StructuredList, Value};
