//! Child classification
//!
//! Each container kind receives its already-built children as a flat list of [`Node`]s, in
//! source order, and sorts them into its own fields. The match in each function is exhaustive
//! over the closed set of node kinds: the arms name what the parent accepts and the default arm
//! rejects everything else with [`ContentError::InvalidChild`].
//!
//! Singleton fields take the last occurrence when a child kind repeats. List fields keep source
//! order. Axis counts are checked once all children are placed.

use crate::ast::{
    Authority, Axis, Datum, GeocentricCs, GeographicCs, LocalCs, Node, NodeKind, ProjectedCs,
    Spheroid, ToWgs84, VerticalCs,
};
use crate::error::ContentError;

// ============================================================================
// AXIS COUNT RULES
// ============================================================================

/// The axis counts a coordinate system kind allows, with the wording used in error messages
fn allowed_axes(kind: NodeKind) -> Option<(&'static [usize], &'static str)> {
    match kind {
        NodeKind::GeogCs | NodeKind::ProjCs => Some((&[0, 2], "0 or 2")),
        NodeKind::GeocCs => Some((&[0, 3], "0 or 3")),
        NodeKind::VertCs => Some((&[0, 1], "0 or 1")),
        NodeKind::LocalCs => Some((&[1, 2], "1 or 2")),
        _ => None,
    }
}

fn check_axis_count(parent: NodeKind, axis_list: &[Axis]) -> Result<(), ContentError> {
    match allowed_axes(parent) {
        Some((allowed, expected)) if !allowed.contains(&axis_list.len()) => {
            Err(ContentError::AxisCount {
                parent,
                expected,
                actual: axis_list.len(),
            })
        }
        _ => Ok(()),
    }
}

fn invalid_child(child: &Node, parent: NodeKind) -> ContentError {
    ContentError::InvalidChild {
        child: child.kind(),
        parent,
    }
}

// ============================================================================
// CONTAINER CLASSIFIERS
// ============================================================================

pub(super) fn classify_datum(name: String, children: Vec<Node>) -> Result<Datum, ContentError> {
    let mut spheroid: Option<Spheroid> = None;
    let mut towgs84: Option<ToWgs84> = None;
    let mut authority: Option<Authority> = None;

    for child in children {
        match child {
            Node::Spheroid(s) => spheroid = Some(s),
            Node::ToWgs84(t) => towgs84 = Some(t),
            Node::Authority(a) => authority = Some(a),
            other => return Err(invalid_child(&other, NodeKind::Datum)),
        }
    }

    Ok(Datum {
        name,
        spheroid,
        towgs84,
        authority,
    })
}

pub(super) fn classify_geographic(
    name: String,
    children: Vec<Node>,
) -> Result<GeographicCs, ContentError> {
    let mut cs = GeographicCs {
        name,
        datum: None,
        prime_meridian: None,
        angular_unit: None,
        axis_list: Vec::new(),
        authority: None,
    };

    for child in children {
        match child {
            Node::Datum(d) => cs.datum = Some(d),
            Node::Primem(p) => cs.prime_meridian = Some(p),
            Node::Unit(u) => cs.angular_unit = Some(u),
            Node::Axis(a) => cs.axis_list.push(a),
            Node::Authority(a) => cs.authority = Some(a),
            other => return Err(invalid_child(&other, NodeKind::GeogCs)),
        }
    }

    check_axis_count(NodeKind::GeogCs, &cs.axis_list)?;
    Ok(cs)
}

/// The base GEOGCS is positional and has already been built; `children` is the node list that
/// follows it.
pub(super) fn classify_projected(
    name: String,
    geographic_cs: GeographicCs,
    children: Vec<Node>,
) -> Result<ProjectedCs, ContentError> {
    let mut cs = ProjectedCs {
        name,
        geographic_cs,
        projection: None,
        param_list: Vec::new(),
        linear_unit: None,
        axis_list: Vec::new(),
        authority: None,
    };

    for child in children {
        match child {
            Node::Projection(p) => cs.projection = Some(p),
            Node::Parameter(p) => cs.param_list.push(p),
            Node::Unit(u) => cs.linear_unit = Some(u),
            Node::Axis(a) => cs.axis_list.push(a),
            Node::Authority(a) => cs.authority = Some(a),
            other => return Err(invalid_child(&other, NodeKind::ProjCs)),
        }
    }

    check_axis_count(NodeKind::ProjCs, &cs.axis_list)?;
    Ok(cs)
}

pub(super) fn classify_geocentric(
    name: String,
    children: Vec<Node>,
) -> Result<GeocentricCs, ContentError> {
    let mut cs = GeocentricCs {
        name,
        datum: None,
        prime_meridian: None,
        linear_unit: None,
        axis_list: Vec::new(),
        authority: None,
    };

    for child in children {
        match child {
            Node::Datum(d) => cs.datum = Some(d),
            Node::Primem(p) => cs.prime_meridian = Some(p),
            Node::Unit(u) => cs.linear_unit = Some(u),
            Node::Axis(a) => cs.axis_list.push(a),
            Node::Authority(a) => cs.authority = Some(a),
            other => return Err(invalid_child(&other, NodeKind::GeocCs)),
        }
    }

    check_axis_count(NodeKind::GeocCs, &cs.axis_list)?;
    Ok(cs)
}

pub(super) fn classify_vertical(
    name: String,
    children: Vec<Node>,
) -> Result<VerticalCs, ContentError> {
    let mut cs = VerticalCs {
        name,
        vert_datum: None,
        linear_unit: None,
        axis_list: Vec::new(),
        authority: None,
    };

    for child in children {
        match child {
            Node::VertDatum(d) => cs.vert_datum = Some(d),
            Node::Unit(u) => cs.linear_unit = Some(u),
            Node::Axis(a) => cs.axis_list.push(a),
            Node::Authority(a) => cs.authority = Some(a),
            other => return Err(invalid_child(&other, NodeKind::VertCs)),
        }
    }

    check_axis_count(NodeKind::VertCs, &cs.axis_list)?;
    Ok(cs)
}

pub(super) fn classify_local(name: String, children: Vec<Node>) -> Result<LocalCs, ContentError> {
    let mut cs = LocalCs {
        name,
        local_datum: None,
        unit: None,
        axis_list: Vec::new(),
        authority: None,
    };

    for child in children {
        match child {
            Node::LocalDatum(d) => cs.local_datum = Some(d),
            Node::Unit(u) => cs.unit = Some(u),
            Node::Axis(a) => cs.axis_list.push(a),
            Node::Authority(a) => cs.authority = Some(a),
            other => return Err(invalid_child(&other, NodeKind::LocalCs)),
        }
    }

    check_axis_count(NodeKind::LocalCs, &cs.axis_list)?;
    Ok(cs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{AxisDirection, LocalDatum, PrimeMeridian, Unit, VerticalDatum};
    use rstest::rstest;

    fn axis(name: &str, direction: AxisDirection) -> Node {
        Node::Axis(Axis {
            name: name.to_string(),
            direction,
            authority: None,
        })
    }

    fn unit(name: &str, factor: f64) -> Node {
        Node::Unit(Unit {
            name: name.to_string(),
            conversion_factor: factor,
            authority: None,
        })
    }

    fn spheroid() -> Node {
        Node::Spheroid(Spheroid {
            name: "Airy 1830".to_string(),
            semi_major_axis: 6377563.396,
            inverse_flattening: 299.3249646,
            authority: None,
        })
    }

    #[test]
    fn test_geographic_fields_in_any_order() {
        let children = vec![
            Node::Authority(Authority::new("EPSG", "4277")),
            unit("degree", 0.0174532925199433),
            Node::Primem(PrimeMeridian {
                name: "Greenwich".to_string(),
                longitude: 0.0,
                authority: None,
            }),
        ];
        let cs = classify_geographic("OSGB 1936".to_string(), children).unwrap();
        assert!(cs.datum.is_none());
        assert_eq!(cs.prime_meridian.unwrap().name, "Greenwich");
        assert_eq!(cs.angular_unit.unwrap().name, "degree");
        assert_eq!(cs.authority, Some(Authority::new("EPSG", "4277")));
    }

    #[test]
    fn test_repeated_singleton_keeps_last() {
        let children = vec![unit("metre", 1.0), unit("foot", 0.3048)];
        let cs = classify_vertical("Newlyn".to_string(), children).unwrap();
        assert_eq!(cs.linear_unit.unwrap().name, "foot");
    }

    #[test]
    fn test_invalid_child_is_rejected() {
        let err = classify_geographic("G".to_string(), vec![spheroid()]).unwrap_err();
        assert_eq!(
            err,
            ContentError::InvalidChild {
                child: NodeKind::Spheroid,
                parent: NodeKind::GeogCs,
            }
        );
    }

    #[test]
    fn test_datum_rejects_unit() {
        let err = classify_datum("D".to_string(), vec![spheroid(), unit("metre", 1.0)]).unwrap_err();
        assert_eq!(err.to_string(), "UNIT node is not valid in a DATUM definition");
    }

    #[test]
    fn test_vertical_rejects_local_datum() {
        let child = Node::LocalDatum(LocalDatum {
            name: "site".to_string(),
            datum_type: 10000,
            authority: None,
        });
        assert!(classify_vertical("V".to_string(), vec![child]).is_err());
    }

    #[test]
    fn test_local_rejects_vertical_datum() {
        let child = Node::VertDatum(VerticalDatum {
            name: "Ordnance Datum Newlyn".to_string(),
            datum_type: 2005,
            authority: None,
        });
        let children = vec![child, axis("x", AxisDirection::East)];
        assert!(classify_local("L".to_string(), children).is_err());
    }

    #[rstest]
    #[case(NodeKind::GeogCs, 1, "0 or 2")]
    #[case(NodeKind::GeogCs, 3, "0 or 2")]
    #[case(NodeKind::GeocCs, 2, "0 or 3")]
    #[case(NodeKind::VertCs, 2, "0 or 1")]
    #[case(NodeKind::LocalCs, 0, "1 or 2")]
    #[case(NodeKind::LocalCs, 3, "1 or 2")]
    fn test_axis_count_violations(
        #[case] kind: NodeKind,
        #[case] count: usize,
        #[case] expected: &'static str,
    ) {
        let children: Vec<Node> = (0..count)
            .map(|i| axis(&format!("a{i}"), AxisDirection::Other))
            .collect();
        let name = "cs".to_string();
        let err = match kind {
            NodeKind::GeogCs => classify_geographic(name, children).map(|_| ()),
            NodeKind::GeocCs => classify_geocentric(name, children).map(|_| ()),
            NodeKind::VertCs => classify_vertical(name, children).map(|_| ()),
            NodeKind::LocalCs => classify_local(name, children).map(|_| ()),
            _ => unreachable!(),
        }
        .unwrap_err();
        assert_eq!(
            err,
            ContentError::AxisCount {
                parent: kind,
                expected,
                actual: count,
            }
        );
    }

    #[test]
    fn test_axis_counts_accepted() {
        let two = || {
            vec![
                axis("Lat", AxisDirection::North),
                axis("Lon", AxisDirection::East),
            ]
        };
        assert!(classify_geographic("G".to_string(), two()).is_ok());
        assert!(classify_local("L".to_string(), two()).is_ok());
        assert!(classify_local("L".to_string(), vec![axis("x", AxisDirection::Up)]).is_ok());
        assert!(classify_vertical("V".to_string(), vec![]).is_ok());

        let mut three = two();
        three.push(axis("Z", AxisDirection::Up));
        assert!(classify_geocentric("C".to_string(), three).is_ok());
    }
}
