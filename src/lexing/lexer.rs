//! Lexer over a WKT string
//!
//! Wraps the logos lexer with the two things logos does not know about: the parsing mode
//! (comments are only legal in lax mode) and error positions. The first illegal character ends
//! the stream; there is no recovery.

use super::tokens::Token;
use crate::diagnostics::Diagnostics;
use crate::error::SyntaxError;
use crate::location::{Position, SourceLocation};
use logos::Logos;
use serde::Serialize;
use std::ops::Range;

/// A token with its byte range in the source
pub type TokenLocation = (Token, Range<usize>);

/// A token with its byte range and the line/column where it starts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedToken {
    pub token: Token,
    pub span: Range<usize>,
    pub position: Position,
}

pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Token>,
    location: SourceLocation<'src>,
    strict: bool,
    diagnostics: Diagnostics,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str, strict: bool) -> Self {
        Self::with_diagnostics(source, strict, Diagnostics::none())
    }

    pub fn with_diagnostics(source: &'src str, strict: bool, diagnostics: Diagnostics) -> Self {
        Self {
            inner: Token::lexer(source),
            location: SourceLocation::new(source),
            strict,
            diagnostics,
            finished: false,
        }
    }

    fn illegal(&mut self, span: Range<usize>) -> SyntaxError {
        self.finished = true;
        let error = SyntaxError::Lexical {
            text: self.inner.slice().to_string(),
            position: self.location.byte_to_position(span.start),
        };
        self.diagnostics.warn(|| error.to_string());
        error
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<TokenLocation, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let result = self.inner.next()?;
            let span = self.inner.span();

            return match result {
                Ok(Token::Comment) if !self.strict => {
                    self.diagnostics
                        .trace(|| format!("Skipped comment at bytes {span:?}"));
                    continue;
                }
                Ok(Token::Comment) | Err(()) => Some(Err(self.illegal(span))),
                Ok(token) => {
                    self.diagnostics.trace(|| {
                        format!(
                            "{:>4}: type: {:<15} value: {}",
                            span.start,
                            token.type_name(),
                            token
                        )
                    });
                    Some(Ok((token, span)))
                }
            };
        }
    }
}

/// Tokenize a whole document, stopping at the first illegal character
pub fn tokenize(
    source: &str,
    strict: bool,
    diagnostics: &Diagnostics,
) -> Result<Vec<TokenLocation>, SyntaxError> {
    Lexer::with_diagnostics(source, strict, diagnostics.clone()).collect()
}

/// Like [`tokenize`], with each token's line and column resolved
pub fn tokenize_with_positions(
    source: &str,
    strict: bool,
    diagnostics: &Diagnostics,
) -> Result<Vec<PositionedToken>, SyntaxError> {
    let location = SourceLocation::new(source);
    let tokens = tokenize(source, strict, diagnostics)?;
    Ok(tokens
        .into_iter()
        .map(|(token, span)| PositionedToken {
            position: location.byte_to_position(span.start),
            token,
            span,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NodeKind;
    use crate::lexing::Keyword;
    use crate::location::Position;

    fn kinds(tokens: &[TokenLocation]) -> Vec<&'static str> {
        tokens.iter().map(|(t, _)| t.type_name()).collect()
    }

    #[test]
    fn test_tokenize_with_spans() {
        let tokens = tokenize(r#"UNIT["metre",1.0]"#, true, &Diagnostics::none()).unwrap();
        assert_eq!(
            kinds(&tokens),
            vec!["KEYWORD", "LBRACKET", "NAME", "','", "NUMBER", "RBRACKET"]
        );
        assert_eq!(
            tokens[0],
            (Token::Keyword(Keyword::Node(NodeKind::Unit)), 0..4)
        );
        assert_eq!(tokens[2], (Token::Name("metre".to_string()), 5..12));
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("", true, &Diagnostics::none()).unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_whitespace_and_newlines_are_skipped() {
        let tokens = tokenize(" \t\r\n\x0c,\n\n,", true, &Diagnostics::none()).unwrap();
        assert_eq!(kinds(&tokens), vec!["','", "','"]);
    }

    #[test]
    fn test_strict_mode_rejects_comment() {
        let err = tokenize("UNIT # metres\n[", true, &Diagnostics::none()).unwrap_err();
        assert_eq!(
            err,
            SyntaxError::Lexical {
                text: "# metres".to_string(),
                position: Position::new(1, 6, 5),
            }
        );
    }

    #[test]
    fn test_lax_mode_skips_comment() {
        let tokens = tokenize("UNIT # metres\n[", false, &Diagnostics::none()).unwrap();
        assert_eq!(kinds(&tokens), vec!["KEYWORD", "LBRACKET"]);
    }

    #[test]
    fn test_illegal_character_position() {
        let err = tokenize("UNIT[\n  \"m\", 1 ;]", true, &Diagnostics::none()).unwrap_err();
        match err {
            SyntaxError::Lexical { text, position } => {
                assert_eq!(text, ";");
                assert_eq!(position.line, 2);
                assert_eq!(position.column, 10);
            }
            other => panic!("expected lexical error, got {other:?}"),
        }
    }

    #[test]
    fn test_tokens_carry_line_and_column() {
        let tokens =
            tokenize_with_positions("UNIT[\n  \"métre\", 1]", true, &Diagnostics::none()).unwrap();
        let positions: Vec<(usize, usize)> = tokens
            .iter()
            .map(|t| (t.position.line, t.position.column))
            .collect();
        assert_eq!(positions, vec![(1, 1), (1, 5), (2, 3), (2, 10), (2, 12), (2, 13)]);
        assert_eq!(tokens[3].token, Token::Comma);
        assert_eq!(tokens[3].span, 16..17);
    }

    #[test]
    fn test_positioned_tokens_serialize_with_position() {
        let tokens = tokenize_with_positions("UNIT", true, &Diagnostics::none()).unwrap();
        let json = serde_json::to_value(&tokens).unwrap();
        assert_eq!(json[0]["position"]["line"], 1);
        assert_eq!(json[0]["position"]["column"], 1);
        assert_eq!(json[0]["span"]["end"], 4);
    }

    #[test]
    fn test_bare_point_is_not_a_number() {
        let err = tokenize(r#"UNIT["m", .]"#, true, &Diagnostics::none()).unwrap_err();
        assert_eq!(
            err,
            SyntaxError::Lexical {
                text: ".".to_string(),
                position: Position::new(1, 11, 10),
            }
        );
    }

    #[test]
    fn test_lexer_stops_after_error() {
        let mut lexer = Lexer::new("@ UNIT", true);
        assert!(matches!(lexer.next(), Some(Err(_))));
        assert!(lexer.next().is_none());
    }
}
