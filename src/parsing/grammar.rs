//! Grammar for CRS WKT using chumsky
//!
//! ```text
//! coord_sys   := (single_cs | compd_cs) EOI
//! single_cs   := geogcs | projcs | geoccs | vert_cs | local_cs
//! compd_cs    := COMPD_CS [ NAME , single_cs , single_cs (, authority)? ]
//! projcs      := PROJCS [ NAME , geogcs node_list ]
//! geogcs      := GEOGCS [ NAME node_list ]          (also GEOCCS, VERT_CS, LOCAL_CS, DATUM)
//! node_list   := (, node?)*
//! node        := authority | axis | datum | local_datum | parameter | primem
//!              | projection | spheroid | towgs84 | unit | vert_datum
//! ```
//!
//! Bodies built from a `node_list` accept their children in any order, and any node kind from the
//! shared `node` set; the builder sorts out which kinds are legal where. Everything else is
//! positional: literal counts are enforced here, so `TOWGS84` with six numbers is a syntax error.

use chumsky::prelude::*;

use super::ir::{Argument, ParseNode};
use crate::ast::{AxisDirection, NodeKind};
use crate::lexing::{Token, TokenLocation};

/// Type alias for parser error
pub(crate) type ParserError = Simple<TokenLocation>;

fn punctuation(expected: Token) -> impl Parser<TokenLocation, (), Error = ParserError> + Clone {
    filter(move |(t, _): &TokenLocation| t == &expected).ignored()
}

fn open() -> impl Parser<TokenLocation, (), Error = ParserError> + Clone {
    punctuation(Token::Open)
}

fn close() -> impl Parser<TokenLocation, (), Error = ParserError> + Clone {
    punctuation(Token::Close)
}

fn comma() -> impl Parser<TokenLocation, (), Error = ParserError> + Clone {
    punctuation(Token::Comma)
}

fn keyword(kind: NodeKind) -> impl Parser<TokenLocation, (), Error = ParserError> + Clone {
    filter(move |(t, _): &TokenLocation| t.is_keyword(kind)).ignored()
}

fn name() -> impl Parser<TokenLocation, String, Error = ParserError> + Clone {
    filter_map(|span, (token, range): TokenLocation| match token {
        Token::Name(name) => Ok(name),
        other => Err(ParserError::expected_input_found(
            span,
            None,
            Some((other, range)),
        )),
    })
}

fn code() -> impl Parser<TokenLocation, String, Error = ParserError> + Clone {
    filter_map(|span, (token, range): TokenLocation| match token {
        Token::Code(code) => Ok(code),
        other => Err(ParserError::expected_input_found(
            span,
            None,
            Some((other, range)),
        )),
    })
}

fn number() -> impl Parser<TokenLocation, String, Error = ParserError> + Clone {
    filter_map(|span, (token, range): TokenLocation| match token {
        Token::Number(text) => Ok(text),
        other => Err(ParserError::expected_input_found(
            span,
            None,
            Some((other, range)),
        )),
    })
}

fn direction() -> impl Parser<TokenLocation, AxisDirection, Error = ParserError> + Clone {
    filter_map(|span, (token, range): TokenLocation| match token {
        Token::AxisDirection(dir) => Ok(dir),
        other => Err(ParserError::expected_input_found(
            span,
            None,
            Some((other, range)),
        )),
    })
}

/// `KEYWORD [ body ]`
fn bracketed<O>(
    kind: NodeKind,
    body: impl Parser<TokenLocation, O, Error = ParserError> + Clone,
) -> impl Parser<TokenLocation, O, Error = ParserError> + Clone {
    keyword(kind).ignore_then(body.delimited_by(open(), close()))
}

/// `AUTHORITY [ NAME , CODE ]`
fn authority() -> impl Parser<TokenLocation, ParseNode, Error = ParserError> + Clone {
    bracketed(
        NodeKind::Authority,
        name().then_ignore(comma()).then(code()),
    )
    .map(|(name, code)| {
        ParseNode::new(
            NodeKind::Authority,
            Some(name),
            vec![Argument::Code(code)],
            vec![],
        )
    })
}

/// Optional `, AUTHORITY[...]` closing a positional body
fn trailing_authority() -> impl Parser<TokenLocation, Vec<ParseNode>, Error = ParserError> + Clone
{
    comma()
        .ignore_then(authority())
        .or_not()
        .map(|authority| authority.into_iter().collect())
}

/// `KEYWORD [ NAME (, NUMBER){count} (, authority)? ]`
fn numeric_node(
    kind: NodeKind,
    count: usize,
) -> impl Parser<TokenLocation, ParseNode, Error = ParserError> + Clone {
    bracketed(
        kind,
        name()
            .then(comma().ignore_then(number()).repeated().exactly(count))
            .then(trailing_authority()),
    )
    .map(move |((name, numbers), authority)| {
        let arguments = numbers.into_iter().map(Argument::Number).collect();
        ParseNode::new(kind, Some(name), arguments, authority)
    })
}

/// `AXIS [ NAME , AXIS_DIR ]`
fn axis() -> impl Parser<TokenLocation, ParseNode, Error = ParserError> + Clone {
    bracketed(
        NodeKind::Axis,
        name().then_ignore(comma()).then(direction()),
    )
    .map(|(name, dir)| {
        ParseNode::new(
            NodeKind::Axis,
            Some(name),
            vec![Argument::Direction(dir)],
            vec![],
        )
    })
}

/// `PARAMETER [ NAME , NUMBER ]`
fn parameter() -> impl Parser<TokenLocation, ParseNode, Error = ParserError> + Clone {
    bracketed(
        NodeKind::Parameter,
        name().then_ignore(comma()).then(number()),
    )
    .map(|(name, value)| {
        ParseNode::new(
            NodeKind::Parameter,
            Some(name),
            vec![Argument::Number(value)],
            vec![],
        )
    })
}

/// `PROJECTION [ NAME (, authority)? ]`
fn projection() -> impl Parser<TokenLocation, ParseNode, Error = ParserError> + Clone {
    bracketed(NodeKind::Projection, name().then(trailing_authority()))
        .map(|(name, authority)| ParseNode::new(NodeKind::Projection, Some(name), vec![], authority))
}

/// `TOWGS84 [ NUMBER (, NUMBER){6} ]`
fn towgs84() -> impl Parser<TokenLocation, ParseNode, Error = ParserError> + Clone {
    bracketed(
        NodeKind::ToWgs84,
        number().chain(comma().ignore_then(number()).repeated().exactly(6)),
    )
    .map(|numbers: Vec<String>| {
        let arguments = numbers.into_iter().map(Argument::Number).collect();
        ParseNode::new(NodeKind::ToWgs84, None, arguments, vec![])
    })
}

/// `(, node?)*`, dropping the empty elements
fn node_list(
    node: impl Parser<TokenLocation, ParseNode, Error = ParserError> + Clone,
) -> impl Parser<TokenLocation, Vec<ParseNode>, Error = ParserError> + Clone {
    comma()
        .ignore_then(node.or_not())
        .repeated()
        .map(|items| items.into_iter().flatten().collect())
}

/// `KEYWORD [ NAME node_list ]`
fn listed_node(
    kind: NodeKind,
    node: impl Parser<TokenLocation, ParseNode, Error = ParserError> + Clone,
) -> impl Parser<TokenLocation, ParseNode, Error = ParserError> + Clone {
    bracketed(kind, name().then(node_list(node)))
        .map(move |(name, children)| ParseNode::new(kind, Some(name), vec![], children))
}

/// Any node that may appear in a `node_list`
fn node() -> impl Parser<TokenLocation, ParseNode, Error = ParserError> + Clone {
    recursive(|node| {
        choice((
            authority(),
            axis(),
            listed_node(NodeKind::Datum, node),
            numeric_node(NodeKind::LocalDatum, 1),
            parameter(),
            numeric_node(NodeKind::Primem, 1),
            projection(),
            numeric_node(NodeKind::Spheroid, 2),
            towgs84(),
            numeric_node(NodeKind::Unit, 1),
            numeric_node(NodeKind::VertDatum, 1),
        ))
    })
    .boxed()
}

/// Any coordinate system except COMPD_CS
fn single_cs() -> impl Parser<TokenLocation, ParseNode, Error = ParserError> + Clone {
    let node = node();
    let geographic_cs = listed_node(NodeKind::GeogCs, node.clone());

    let projected_cs = bracketed(
        NodeKind::ProjCs,
        name()
            .then_ignore(comma())
            .then(geographic_cs.clone())
            .then(node_list(node.clone())),
    )
    .map(|((name, geographic_cs), rest)| {
        let mut children = Vec::with_capacity(rest.len() + 1);
        children.push(geographic_cs);
        children.extend(rest);
        ParseNode::new(NodeKind::ProjCs, Some(name), vec![], children)
    });

    choice((
        geographic_cs,
        projected_cs,
        listed_node(NodeKind::GeocCs, node.clone()),
        listed_node(NodeKind::VertCs, node.clone()),
        listed_node(NodeKind::LocalCs, node),
    ))
    .boxed()
}

/// `COMPD_CS [ NAME , single_cs , single_cs (, authority)? ]`
fn compound_cs(
    single_cs: impl Parser<TokenLocation, ParseNode, Error = ParserError> + Clone,
) -> impl Parser<TokenLocation, ParseNode, Error = ParserError> + Clone {
    bracketed(
        NodeKind::CompdCs,
        name()
            .then_ignore(comma())
            .then(single_cs.clone())
            .then_ignore(comma())
            .then(single_cs)
            .then(trailing_authority()),
    )
    .map(|(((name, head), tail), authority)| {
        let mut children = vec![head, tail];
        children.extend(authority);
        ParseNode::new(NodeKind::CompdCs, Some(name), vec![], children)
    })
}

/// The whole document: exactly one coordinate system and nothing after it
pub(crate) fn coord_sys() -> impl Parser<TokenLocation, ParseNode, Error = ParserError> {
    let single_cs = single_cs();
    choice((compound_cs(single_cs.clone()), single_cs)).then_ignore(end())
}
