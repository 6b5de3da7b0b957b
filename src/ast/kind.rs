//! Node kinds and axis directions
//!
//! Both are closed sets fixed by WKT 1. The keyword spelling of a kind doubles as its tag in the
//! exported form, so [`NodeKind::as_str`] is the single source for those strings.

use serde::{Serialize, Serializer};
use std::fmt;

/// The kind of a node, named after its WKT keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    GeogCs,
    ProjCs,
    GeocCs,
    VertCs,
    LocalCs,
    CompdCs,
    Datum,
    VertDatum,
    LocalDatum,
    Spheroid,
    Primem,
    Unit,
    Axis,
    Parameter,
    Projection,
    ToWgs84,
    Authority,
}

impl NodeKind {
    pub const ALL: [NodeKind; 17] = [
        NodeKind::GeogCs,
        NodeKind::ProjCs,
        NodeKind::GeocCs,
        NodeKind::VertCs,
        NodeKind::LocalCs,
        NodeKind::CompdCs,
        NodeKind::Datum,
        NodeKind::VertDatum,
        NodeKind::LocalDatum,
        NodeKind::Spheroid,
        NodeKind::Primem,
        NodeKind::Unit,
        NodeKind::Axis,
        NodeKind::Parameter,
        NodeKind::Projection,
        NodeKind::ToWgs84,
        NodeKind::Authority,
    ];

    /// The WKT keyword for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::GeogCs => "GEOGCS",
            NodeKind::ProjCs => "PROJCS",
            NodeKind::GeocCs => "GEOCCS",
            NodeKind::VertCs => "VERT_CS",
            NodeKind::LocalCs => "LOCAL_CS",
            NodeKind::CompdCs => "COMPD_CS",
            NodeKind::Datum => "DATUM",
            NodeKind::VertDatum => "VERT_DATUM",
            NodeKind::LocalDatum => "LOCAL_DATUM",
            NodeKind::Spheroid => "SPHEROID",
            NodeKind::Primem => "PRIMEM",
            NodeKind::Unit => "UNIT",
            NodeKind::Axis => "AXIS",
            NodeKind::Parameter => "PARAMETER",
            NodeKind::Projection => "PROJECTION",
            NodeKind::ToWgs84 => "TOWGS84",
            NodeKind::Authority => "AUTHORITY",
        }
    }

    /// True for the six coordinate system kinds
    pub fn is_coordinate_system(&self) -> bool {
        matches!(
            self,
            NodeKind::GeogCs
                | NodeKind::ProjCs
                | NodeKind::GeocCs
                | NodeKind::VertCs
                | NodeKind::LocalCs
                | NodeKind::CompdCs
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NodeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Direction literal of an AXIS node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AxisDirection {
    North,
    South,
    East,
    West,
    Up,
    Down,
    Other,
}

impl AxisDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            AxisDirection::North => "NORTH",
            AxisDirection::South => "SOUTH",
            AxisDirection::East => "EAST",
            AxisDirection::West => "WEST",
            AxisDirection::Up => "UP",
            AxisDirection::Down => "DOWN",
            AxisDirection::Other => "OTHER",
        }
    }

    pub fn from_literal(literal: &str) -> Option<Self> {
        match literal {
            "NORTH" => Some(AxisDirection::North),
            "SOUTH" => Some(AxisDirection::South),
            "EAST" => Some(AxisDirection::East),
            "WEST" => Some(AxisDirection::West),
            "UP" => Some(AxisDirection::Up),
            "DOWN" => Some(AxisDirection::Down),
            "OTHER" => Some(AxisDirection::Other),
            _ => None,
        }
    }
}

impl fmt::Display for AxisDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
