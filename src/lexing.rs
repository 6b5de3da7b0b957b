//! Lexing: WKT text to tokens
//!
//!     Tokenization is done by logos (see [tokens]). The [lexer] module adds the parse mode and
//!     error positions on top of it and hands the parser `(Token, Range<usize>)` pairs.
//!
//!     Token types:
//!
//!         Keyword        GEOGCS, PROJCS, ... resolved through the keyword table
//!         AxisDirection  NORTH SOUTH EAST WEST UP DOWN OTHER
//!         Name           "quoted text"
//!         Code           "4326" (quoted, digits only)
//!         Number         [+-]digits[.digits]
//!         Open / Close   [ ( and ] )
//!         Comma          ,
//!         Comment        # to end of line, lax mode only

pub mod lexer;
pub mod tokens;

pub use lexer::{tokenize, tokenize_with_positions, Lexer, PositionedToken, TokenLocation};
pub use tokens::{Keyword, Token};
