//! Parsing: tokens to the intermediate parse tree
//!
//!     The [grammar] module holds the chumsky combinators; [ir] the tree they produce. This
//!     module is the entry point and turns chumsky's errors into [`SyntaxError`]s with
//!     line/column positions.
//!
//!     The grammar recurses only through DATUM bodies (a node list may hold a DATUM, whose own
//!     node list may hold another). Well-formed WKT never nests brackets more than six deep, so
//!     the token stream is checked against [`MAX_NESTING_DEPTH`] before the grammar runs.

pub mod grammar;
pub mod ir;

pub use ir::{Argument, ParseNode};

use crate::error::SyntaxError;
use crate::lexing::{Token, TokenLocation};
use crate::location::SourceLocation;
use chumsky::Parser;
use grammar::{coord_sys, ParserError};

/// Deepest bracket nesting accepted
pub const MAX_NESTING_DEPTH: usize = 32;

/// Parse a complete token stream into a parse tree
pub fn parse(tokens: Vec<TokenLocation>, source: &str) -> Result<ParseNode, SyntaxError> {
    let location = SourceLocation::new(source);
    check_nesting(&tokens, &location)?;

    coord_sys()
        .parse(tokens)
        .map_err(|errors| convert_errors(errors, source, &location))
}

fn check_nesting(tokens: &[TokenLocation], location: &SourceLocation) -> Result<(), SyntaxError> {
    let mut depth = 0usize;
    for (token, range) in tokens {
        match token {
            Token::Open => {
                depth += 1;
                if depth > MAX_NESTING_DEPTH {
                    return Err(SyntaxError::NestingTooDeep {
                        limit: MAX_NESTING_DEPTH,
                        position: location.byte_to_position(range.start),
                    });
                }
            }
            Token::Close => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

/// Report the error that got furthest into the input
fn convert_errors(
    errors: Vec<ParserError>,
    source: &str,
    location: &SourceLocation,
) -> SyntaxError {
    let furthest = errors.into_iter().max_by_key(|e| e.span().start);

    match furthest.as_ref().and_then(|e| e.found()) {
        Some((token, range)) => SyntaxError::UnexpectedToken {
            token: token.type_name(),
            value: source
                .get(range.clone())
                .map(str::to_string)
                .unwrap_or_else(|| token.to_string()),
            position: location.byte_to_position(range.start),
        },
        None => SyntaxError::UnexpectedEnd {
            position: location.end(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NodeKind;
    use crate::diagnostics::Diagnostics;
    use crate::lexing::tokenize;
    use crate::location::Position;

    fn parse_str(source: &str) -> Result<ParseNode, SyntaxError> {
        let tokens = tokenize(source, true, &Diagnostics::none())?;
        parse(tokens, source)
    }

    #[test]
    fn test_parse_ok() {
        let node = parse_str(r#"VERT_CS["Newlyn", UNIT["metre",1]]"#).unwrap();
        assert_eq!(node.kind, NodeKind::VertCs);
        assert_eq!(node.node_count(), 2);
    }

    #[test]
    fn test_unexpected_token_position() {
        let err = parse_str("VERT_CS[\"Newlyn\",\n  UNIT[\"metre\" 1]]").unwrap_err();
        assert_eq!(
            err,
            SyntaxError::UnexpectedToken {
                token: "NUMBER",
                value: "1".to_string(),
                position: Position::new(2, 16, 33),
            }
        );
    }

    #[test]
    fn test_unknown_keyword_is_syntax_error() {
        let err = parse_str(r#"GEOGCRS["WGS 84"]"#).unwrap_err();
        match err {
            SyntaxError::UnexpectedToken { token, value, .. } => {
                assert_eq!(token, "unknown KEYWORD");
                assert_eq!(value, "GEOGCRS");
            }
            other => panic!("expected unexpected token, got {other:?}"),
        }
    }

    #[test]
    fn test_premature_end() {
        let source = r#"GEOGCS["G", DATUM["D""#;
        let err = parse_str(source).unwrap_err();
        assert_eq!(
            err,
            SyntaxError::UnexpectedEnd {
                position: Position::new(1, source.len() + 1, source.len()),
            }
        );
    }

    #[test]
    fn test_empty_input_is_premature_end() {
        assert!(matches!(
            parse_str("   "),
            Err(SyntaxError::UnexpectedEnd { .. })
        ));
    }

    #[test]
    fn test_nesting_limit() {
        let source = "[".repeat(MAX_NESTING_DEPTH + 1);
        assert!(matches!(
            parse_str(&source),
            Err(SyntaxError::NestingTooDeep { limit: MAX_NESTING_DEPTH, .. })
        ));
    }
}
