//! Parse tree to typed tree
//!
//! Builds bottom-up: the children of a node are built first, then handed to the classifier for
//! the node's kind. Leaf nodes take their values from the positional arguments the grammar
//! collected. The grammar fixes the argument shapes, so a mismatch here means the parse tree was
//! assembled by hand and is reported as [`ContentError::Malformed`].

use super::classifier::{
    classify_datum, classify_geocentric, classify_geographic, classify_local, classify_projected,
    classify_vertical,
};
use super::numerals::{parse_float, parse_int, parse_int_else_float};
use crate::ast::{
    Authority, Axis, CompoundCs, CoordinateSystem, LocalDatum, Node, NodeKind, Parameter,
    PrimeMeridian, Projection, Spheroid, ToWgs84, Unit, VerticalDatum,
};
use crate::diagnostics::Diagnostics;
use crate::error::ContentError;
use crate::parsing::{Argument, ParseNode};

pub struct AstBuilder {
    diagnostics: Diagnostics,
}

impl AstBuilder {
    pub fn new(diagnostics: Diagnostics) -> Self {
        Self { diagnostics }
    }

    /// Build the root of a document
    pub fn build(&self, root: ParseNode) -> Result<CoordinateSystem, ContentError> {
        let kind = root.kind;
        CoordinateSystem::try_from(self.build_node(root)?)
            .map_err(|_| ContentError::Malformed { kind })
    }

    pub fn build_node(&self, node: ParseNode) -> Result<Node, ContentError> {
        let ParseNode {
            kind,
            name,
            arguments,
            children,
        } = node;

        if kind == NodeKind::ToWgs84 {
            return self.build_towgs84(&arguments, children);
        }

        let name = name.ok_or(ContentError::Malformed { kind })?;

        let built = match kind {
            NodeKind::Authority => {
                let code = match arguments.as_slice() {
                    [Argument::Code(code)] if children.is_empty() => code.clone(),
                    _ => return Err(ContentError::Malformed { kind }),
                };
                Node::Authority(Authority { name, code })
            }
            NodeKind::Axis => {
                let direction = match arguments.as_slice() {
                    [Argument::Direction(direction)] => *direction,
                    _ => return Err(ContentError::Malformed { kind }),
                };
                Node::Axis(Axis {
                    name,
                    direction,
                    authority: self.trailing_authority(kind, children)?,
                })
            }
            NodeKind::Parameter => {
                let [value] = numbers::<1>(kind, &arguments)?;
                Node::Parameter(Parameter {
                    name,
                    value: parse_int_else_float("parameter", value)?,
                    authority: self.trailing_authority(kind, children)?,
                })
            }
            NodeKind::Projection => {
                numbers::<0>(kind, &arguments)?;
                Node::Projection(Projection {
                    name,
                    authority: self.trailing_authority(kind, children)?,
                })
            }
            NodeKind::Unit => {
                let [factor] = numbers::<1>(kind, &arguments)?;
                Node::Unit(Unit {
                    name,
                    conversion_factor: parse_float("conversion factor", factor)?,
                    authority: self.trailing_authority(kind, children)?,
                })
            }
            NodeKind::Primem => {
                let [longitude] = numbers::<1>(kind, &arguments)?;
                Node::Primem(PrimeMeridian {
                    name,
                    longitude: parse_float("longitude", longitude)?,
                    authority: self.trailing_authority(kind, children)?,
                })
            }
            NodeKind::Spheroid => {
                let [semi_major_axis, inverse_flattening] = numbers::<2>(kind, &arguments)?;
                Node::Spheroid(Spheroid {
                    name,
                    semi_major_axis: parse_float("semi-major axis", semi_major_axis)?,
                    inverse_flattening: parse_float("inverse flattening", inverse_flattening)?,
                    authority: self.trailing_authority(kind, children)?,
                })
            }
            NodeKind::VertDatum => {
                let [datum_type] = numbers::<1>(kind, &arguments)?;
                Node::VertDatum(VerticalDatum {
                    name,
                    datum_type: parse_int("datum type", datum_type)?,
                    authority: self.trailing_authority(kind, children)?,
                })
            }
            NodeKind::LocalDatum => {
                let [datum_type] = numbers::<1>(kind, &arguments)?;
                Node::LocalDatum(LocalDatum {
                    name,
                    datum_type: parse_int("datum type", datum_type)?,
                    authority: self.trailing_authority(kind, children)?,
                })
            }
            NodeKind::Datum => Node::Datum(classify_datum(name, self.build_children(children)?)?),
            NodeKind::GeogCs => {
                Node::GeogCs(classify_geographic(name, self.build_children(children)?)?)
            }
            NodeKind::GeocCs => {
                Node::GeocCs(classify_geocentric(name, self.build_children(children)?)?)
            }
            NodeKind::VertCs => {
                Node::VertCs(classify_vertical(name, self.build_children(children)?)?)
            }
            NodeKind::LocalCs => {
                Node::LocalCs(classify_local(name, self.build_children(children)?)?)
            }
            NodeKind::ProjCs => {
                let mut children = children.into_iter();
                let geographic_cs = match children.next().map(|c| self.build_node(c)).transpose()? {
                    Some(Node::GeogCs(geographic_cs)) => geographic_cs,
                    _ => return Err(ContentError::Malformed { kind }),
                };
                let rest = self.build_children(children.collect())?;
                Node::ProjCs(classify_projected(name, geographic_cs, rest)?)
            }
            NodeKind::CompdCs => {
                let mut children = children.into_iter();
                let (head, tail) = match (children.next(), children.next()) {
                    (Some(head), Some(tail)) => (head, tail),
                    _ => return Err(ContentError::Malformed { kind }),
                };
                Node::CompdCs(CompoundCs {
                    name,
                    head_cs: Box::new(self.build(head)?),
                    tail_cs: Box::new(self.build(tail)?),
                    authority: self.trailing_authority(kind, children.collect())?,
                })
            }
            NodeKind::ToWgs84 => return Err(ContentError::Malformed { kind }),
        };

        self.diagnostics.info(|| {
            format!("Read {} node '{}'", kind, built.name().unwrap_or_default())
        });
        Ok(built)
    }

    fn build_children(&self, children: Vec<ParseNode>) -> Result<Vec<Node>, ContentError> {
        children
            .into_iter()
            .map(|child| self.build_node(child))
            .collect()
    }

    fn build_towgs84(
        &self,
        arguments: &[Argument],
        children: Vec<ParseNode>,
    ) -> Result<Node, ContentError> {
        let kind = NodeKind::ToWgs84;
        let texts: [&str; 7] = numbers(kind, arguments)?;

        let mut params = [0.0f64; 7];
        for (slot, text) in params.iter_mut().zip(texts) {
            *slot = parse_float("TOWGS84 parameter", text)?;
        }

        let mut towgs84 = ToWgs84::from_params(params);
        towgs84.authority = self.trailing_authority(kind, children)?;
        self.diagnostics.info(|| format!("Read {} node", kind));
        Ok(Node::ToWgs84(towgs84))
    }

    /// A leaf's optional AUTHORITY, which the grammar keeps as its only child
    fn trailing_authority(
        &self,
        kind: NodeKind,
        children: Vec<ParseNode>,
    ) -> Result<Option<Authority>, ContentError> {
        let mut children = children.into_iter();
        let authority = match children.next() {
            None => return Ok(None),
            Some(child) => match self.build_node(child)? {
                Node::Authority(authority) => authority,
                _ => return Err(ContentError::Malformed { kind }),
            },
        };
        if children.next().is_some() {
            return Err(ContentError::Malformed { kind });
        }
        Ok(Some(authority))
    }
}

/// Exactly `N` numeric arguments, as text
fn numbers<const N: usize>(
    kind: NodeKind,
    arguments: &[Argument],
) -> Result<[&str; N], ContentError> {
    let texts = arguments
        .iter()
        .map(|argument| match argument {
            Argument::Number(text) => Ok(text.as_str()),
            _ => Err(ContentError::Malformed { kind }),
        })
        .collect::<Result<Vec<&str>, ContentError>>()?;
    texts
        .try_into()
        .map_err(|_| ContentError::Malformed { kind })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{AxisDirection, ParameterValue};
    use crate::diagnostics::CollectingSink;
    use std::sync::Arc;
    use tracing::Level;

    fn number(text: &str) -> Argument {
        Argument::Number(text.to_string())
    }

    fn leaf(kind: NodeKind, name: &str, arguments: Vec<Argument>) -> ParseNode {
        ParseNode::new(kind, Some(name.to_string()), arguments, vec![])
    }

    fn authority(code: &str) -> ParseNode {
        leaf(
            NodeKind::Authority,
            "EPSG",
            vec![Argument::Code(code.to_string())],
        )
    }

    fn builder() -> AstBuilder {
        AstBuilder::new(Diagnostics::none())
    }

    #[test]
    fn test_build_unit_with_authority() {
        let mut unit = leaf(NodeKind::Unit, "metre", vec![number("1")]);
        unit.children.push(authority("9001"));
        let node = builder().build_node(unit).unwrap();
        assert_eq!(
            node,
            Node::Unit(Unit {
                name: "metre".to_string(),
                conversion_factor: 1.0,
                authority: Some(Authority::new("EPSG", "9001")),
            })
        );
    }

    #[test]
    fn test_build_parameter_keeps_integers() {
        let node = builder()
            .build_node(leaf(
                NodeKind::Parameter,
                "false_easting",
                vec![number("400000")],
            ))
            .unwrap();
        match node {
            Node::Parameter(p) => assert_eq!(p.value, ParameterValue::Integer(400000)),
            other => panic!("expected parameter, got {other:?}"),
        }
    }

    #[test]
    fn test_build_vertical_datum_rejects_decimal_type() {
        let err = builder()
            .build_node(leaf(
                NodeKind::VertDatum,
                "Ordnance Datum Newlyn",
                vec![number("2005.5")],
            ))
            .unwrap_err();
        assert!(matches!(err, ContentError::InvalidNumber { .. }));
    }

    #[test]
    fn test_build_towgs84() {
        let arguments = ["446.448", "-125.157", "542.06", "0.15", "0.247", "0.842", "-20.489"]
            .into_iter()
            .map(number)
            .collect();
        let node = ParseNode::new(NodeKind::ToWgs84, None, arguments, vec![]);
        match builder().build_node(node).unwrap() {
            Node::ToWgs84(t) => {
                assert_eq!(t.dx, 446.448);
                assert_eq!(t.ppm, -20.489);
                assert_eq!(t.authority, None);
            }
            other => panic!("expected TOWGS84, got {other:?}"),
        }
    }

    #[test]
    fn test_build_geographic_with_axes() {
        let axis = |name: &str, direction| {
            ParseNode::new(
                NodeKind::Axis,
                Some(name.to_string()),
                vec![Argument::Direction(direction)],
                vec![],
            )
        };
        let root = ParseNode::new(
            NodeKind::GeogCs,
            Some("WGS 84".to_string()),
            vec![],
            vec![
                axis("Lat", AxisDirection::North),
                axis("Lon", AxisDirection::East),
                authority("4326"),
            ],
        );
        let cs = builder().build(root).unwrap();
        assert_eq!(cs.epsg_code(), Some("4326"));
        assert_eq!(cs.as_geographic().unwrap().axis_list.len(), 2);
    }

    #[test]
    fn test_build_compound_requires_head_and_tail() {
        let vertical = ParseNode::new(
            NodeKind::VertCs,
            Some("Newlyn".to_string()),
            vec![],
            vec![],
        );
        let root = ParseNode::new(
            NodeKind::CompdCs,
            Some("C".to_string()),
            vec![],
            vec![vertical],
        );
        assert_eq!(
            builder().build(root),
            Err(ContentError::Malformed {
                kind: NodeKind::CompdCs
            })
        );
    }

    #[test]
    fn test_root_must_be_coordinate_system() {
        let root = leaf(NodeKind::Unit, "metre", vec![number("1")]);
        assert_eq!(
            builder().build(root),
            Err(ContentError::Malformed {
                kind: NodeKind::Unit
            })
        );
    }

    #[test]
    fn test_wrong_argument_shape_is_malformed() {
        let err = builder()
            .build_node(leaf(NodeKind::Spheroid, "Airy", vec![number("1")]))
            .unwrap_err();
        assert_eq!(
            err,
            ContentError::Malformed {
                kind: NodeKind::Spheroid
            }
        );
    }

    #[test]
    fn test_read_nodes_are_reported() {
        let sink = Arc::new(CollectingSink::new());
        let builder = AstBuilder::new(Diagnostics::new(Some(sink.clone())));
        let root = ParseNode::new(
            NodeKind::VertCs,
            Some("Newlyn".to_string()),
            vec![],
            vec![leaf(NodeKind::Unit, "metre", vec![number("1")])],
        );
        builder.build(root).unwrap();
        assert_eq!(
            sink.messages_at(Level::INFO),
            vec![
                "Read UNIT node 'metre'".to_string(),
                "Read VERT_CS node 'Newlyn'".to_string(),
            ]
        );
    }

    #[test]
    fn test_failed_node_is_not_reported() {
        let sink = Arc::new(CollectingSink::new());
        let builder = AstBuilder::new(Diagnostics::new(Some(sink.clone())));
        let root = ParseNode::new(
            NodeKind::GeogCs,
            Some("G".to_string()),
            vec![],
            vec![ParseNode::new(
                NodeKind::Axis,
                Some("lat".to_string()),
                vec![Argument::Direction(AxisDirection::North)],
                vec![],
            )],
        );
        assert!(builder.build(root).is_err());
        assert_eq!(
            sink.messages_at(Level::INFO),
            vec!["Read AXIS node 'lat'".to_string()]
        );
    }
}
