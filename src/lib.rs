//! # crswkt
//!
//! A parser for coordinate reference system definitions written in OGC Well-Known Text (WKT 1),
//! producing a typed tree of the projection, datum, ellipsoid, unit and axis metadata.
//!
//! ```text
//! let cs = crswkt::parse(r#"GEOGCS["WGS 84", DATUM["WGS_1984", ...], AUTHORITY["EPSG","4326"]]"#)?;
//! assert_eq!(cs.epsg_code(), Some("4326"));
//! let json = crswkt::export_text(&cs);
//! ```
//!
//! ## Modules
//!
//! - [lexing]: text to tokens (logos)
//! - [parsing]: tokens to an intermediate parse tree (chumsky)
//! - [building]: parse tree to the typed [ast], classifying children and coercing numbers
//! - [formats]: export of the tree to a nested mapping and to text formats
//! - [parser]: [`WktParser`] and its [`ParserOptions`], the entry point for all of the above
//!
//! Failures are [`WktError`]s: syntax errors (lexical, grammar, premature end) carry a line and
//! column, content errors (wrong child kind, wrong axis count) name the offending kind.

pub mod ast;
pub mod building;
pub mod diagnostics;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod location;
pub mod parser;
pub mod parsing;

pub use ast::{CoordinateSystem, Node, NodeKind};
pub use diagnostics::{CollectingSink, DiagnosticSink, TracingSink};
pub use error::{ContentError, SyntaxError, WktError};
pub use formats::{export, export_node, export_node_text, export_text};
pub use location::Position;
pub use parser::{parse, ParserOptions, WktParser};
