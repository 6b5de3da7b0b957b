//! Building: parse tree to typed tree
//!
//!     The grammar only checks that the text is well formed. Everything that needs the meaning of
//!     a node happens here:
//!
//!         ParseNode ──► numerals   (text → i64 / f64 per field)
//!                   ──► classifier (children → parent fields, axis counts)
//!                   ──► ast_tree   (bottom-up assembly of Node / CoordinateSystem)
//!
//!     Every failure at this stage is a [`ContentError`](crate::error::ContentError).

pub mod ast_tree;
pub mod classifier;
pub mod numerals;

pub use ast_tree::AstBuilder;
