//! Parser entry point
//!
//! [`WktParser`] runs the whole pipeline for one document:
//!
//! ```text
//! text ──► tokenize ──► grammar ──► builder ──► CoordinateSystem
//!          (lexing)     (parsing)   (building)
//! ```
//!
//! Options are fixed when the parser is constructed. A parser holds no per-document state, so one
//! instance can parse any number of documents, from any number of threads.

use crate::ast::CoordinateSystem;
use crate::building::AstBuilder;
use crate::diagnostics::{DiagnosticSink, Diagnostics};
use crate::error::{SyntaxError, WktError};
use crate::lexing::tokenize;
use crate::parsing;
use std::fmt;
use std::sync::Arc;

/// Construction-time parser options
#[derive(Clone)]
pub struct ParserOptions {
    /// When false, `#` comments running to the end of the line are skipped
    pub strict: bool,
    pub diagnostics: Option<Arc<dyn DiagnosticSink>>,
}

impl ParserOptions {
    pub fn new() -> Self {
        Self {
            strict: true,
            diagnostics: None,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn lax(self) -> Self {
        self.strict(false)
    }

    pub fn diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = Some(sink);
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ParserOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserOptions")
            .field("strict", &self.strict)
            .field("diagnostics", &self.diagnostics.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct WktParser {
    options: ParserOptions,
    diagnostics: Diagnostics,
}

impl WktParser {
    /// A strict parser that reports nothing
    pub fn new() -> Self {
        Self::with_options(ParserOptions::default())
    }

    pub fn with_options(options: ParserOptions) -> Self {
        let diagnostics = Diagnostics::new(options.diagnostics.clone());
        Self {
            options,
            diagnostics,
        }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    pub fn is_strict(&self) -> bool {
        self.options.strict
    }

    /// Parse one WKT document into its coordinate system
    pub fn parse(&self, text: &str) -> Result<CoordinateSystem, WktError> {
        self.run(text).map_err(|err| {
            // The lexer has already warned about illegal characters
            if !matches!(err, WktError::Syntax(SyntaxError::Lexical { .. })) {
                self.diagnostics.error(|| err.to_string());
            }
            err
        })
    }

    fn run(&self, text: &str) -> Result<CoordinateSystem, WktError> {
        let tokens = tokenize(text, self.options.strict, &self.diagnostics)?;
        let tree = parsing::parse(tokens, text)?;
        let root = AstBuilder::new(self.diagnostics.clone()).build(tree)?;
        Ok(root)
    }
}

/// Parse with the default options: strict, no diagnostics
pub fn parse(text: &str) -> Result<CoordinateSystem, WktError> {
    WktParser::new().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NodeKind;
    use crate::diagnostics::CollectingSink;
    use tracing::Level;

    const NEWLYN: &str = r#"VERT_CS["Newlyn",
        VERT_DATUM["Ordnance Datum Newlyn",2005,AUTHORITY["EPSG","5101"]],
        UNIT["metre",1,AUTHORITY["EPSG","9001"]],
        AUTHORITY["EPSG","5701"]]"#;

    #[test]
    fn test_default_options() {
        let options = ParserOptions::default();
        assert!(options.strict);
        assert!(options.diagnostics.is_none());
        assert!(WktParser::new().is_strict());
        assert!(!WktParser::with_options(ParserOptions::new().lax()).is_strict());
    }

    #[test]
    fn test_parse_vertical() {
        let cs = parse(NEWLYN).unwrap();
        assert_eq!(cs.kind(), NodeKind::VertCs);
        assert_eq!(cs.name(), "Newlyn");
        assert_eq!(cs.epsg_code(), Some("5701"));
        let vert_datum = cs.as_vertical().unwrap().vert_datum.as_ref().unwrap();
        assert_eq!(vert_datum.datum_type, 2005);
    }

    #[test]
    fn test_parser_is_reusable() {
        let parser = WktParser::new();
        let first = parser.parse(NEWLYN).unwrap();
        let second = parser.parse(NEWLYN).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sink_does_not_change_result() {
        let sink = Arc::new(CollectingSink::new());
        let parser = WktParser::with_options(ParserOptions::new().diagnostics(sink.clone()));
        assert_eq!(parser.parse(NEWLYN), parse(NEWLYN));
        assert_eq!(
            sink.messages_at(Level::INFO),
            vec![
                "Read AUTHORITY node 'EPSG'".to_string(),
                "Read VERT_DATUM node 'Ordnance Datum Newlyn'".to_string(),
                "Read AUTHORITY node 'EPSG'".to_string(),
                "Read UNIT node 'metre'".to_string(),
                "Read AUTHORITY node 'EPSG'".to_string(),
                "Read VERT_CS node 'Newlyn'".to_string(),
            ]
        );
        assert!(!sink.messages_at(Level::TRACE).is_empty());
    }

    #[test]
    fn test_errors_are_reported() {
        let sink = Arc::new(CollectingSink::new());
        let parser = WktParser::with_options(ParserOptions::new().diagnostics(sink.clone()));

        let err = parser.parse(r#"GEOGCS["G", AXIS["lat",NORTH]]"#).unwrap_err();
        assert!(err.is_content());
        assert_eq!(sink.messages_at(Level::ERROR), vec![err.to_string()]);

        let err = parser.parse("GEOGCS[\"G\" $]").unwrap_err();
        assert!(err.is_syntax());
        assert_eq!(sink.messages_at(Level::WARN), vec![err.to_string()]);
    }
}
