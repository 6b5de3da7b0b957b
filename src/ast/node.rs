//! Tagged node types
//!
//! [`Node`] is the generic unit of the tree: one variant per [`NodeKind`]. The builder produces
//! `Node`s for the children of a body and the classifier matches on them to fill the parent's
//! fields. [`CoordinateSystem`] is the subset that can stand at the root of a document or as the
//! head/tail of a compound system.

use super::elements::*;
use super::kind::NodeKind;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    GeogCs(GeographicCs),
    ProjCs(ProjectedCs),
    GeocCs(GeocentricCs),
    VertCs(VerticalCs),
    LocalCs(LocalCs),
    CompdCs(CompoundCs),
    Datum(Datum),
    VertDatum(VerticalDatum),
    LocalDatum(LocalDatum),
    Spheroid(Spheroid),
    Primem(PrimeMeridian),
    Unit(Unit),
    Axis(Axis),
    Parameter(Parameter),
    Projection(Projection),
    ToWgs84(ToWgs84),
    Authority(Authority),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::GeogCs(_) => NodeKind::GeogCs,
            Node::ProjCs(_) => NodeKind::ProjCs,
            Node::GeocCs(_) => NodeKind::GeocCs,
            Node::VertCs(_) => NodeKind::VertCs,
            Node::LocalCs(_) => NodeKind::LocalCs,
            Node::CompdCs(_) => NodeKind::CompdCs,
            Node::Datum(_) => NodeKind::Datum,
            Node::VertDatum(_) => NodeKind::VertDatum,
            Node::LocalDatum(_) => NodeKind::LocalDatum,
            Node::Spheroid(_) => NodeKind::Spheroid,
            Node::Primem(_) => NodeKind::Primem,
            Node::Unit(_) => NodeKind::Unit,
            Node::Axis(_) => NodeKind::Axis,
            Node::Parameter(_) => NodeKind::Parameter,
            Node::Projection(_) => NodeKind::Projection,
            Node::ToWgs84(_) => NodeKind::ToWgs84,
            Node::Authority(_) => NodeKind::Authority,
        }
    }

    /// The node's label. TOWGS84 has none; for AUTHORITY it is the organization.
    pub fn name(&self) -> Option<&str> {
        let name = match self {
            Node::GeogCs(n) => &n.name,
            Node::ProjCs(n) => &n.name,
            Node::GeocCs(n) => &n.name,
            Node::VertCs(n) => &n.name,
            Node::LocalCs(n) => &n.name,
            Node::CompdCs(n) => &n.name,
            Node::Datum(n) => &n.name,
            Node::VertDatum(n) => &n.name,
            Node::LocalDatum(n) => &n.name,
            Node::Spheroid(n) => &n.name,
            Node::Primem(n) => &n.name,
            Node::Unit(n) => &n.name,
            Node::Axis(n) => &n.name,
            Node::Parameter(n) => &n.name,
            Node::Projection(n) => &n.name,
            Node::Authority(n) => &n.name,
            Node::ToWgs84(_) => return None,
        };
        Some(name)
    }

    /// The authority attached to this node. Always `None` for AUTHORITY itself.
    pub fn authority(&self) -> Option<&Authority> {
        match self {
            Node::GeogCs(n) => n.authority.as_ref(),
            Node::ProjCs(n) => n.authority.as_ref(),
            Node::GeocCs(n) => n.authority.as_ref(),
            Node::VertCs(n) => n.authority.as_ref(),
            Node::LocalCs(n) => n.authority.as_ref(),
            Node::CompdCs(n) => n.authority.as_ref(),
            Node::Datum(n) => n.authority.as_ref(),
            Node::VertDatum(n) => n.authority.as_ref(),
            Node::LocalDatum(n) => n.authority.as_ref(),
            Node::Spheroid(n) => n.authority.as_ref(),
            Node::Primem(n) => n.authority.as_ref(),
            Node::Unit(n) => n.authority.as_ref(),
            Node::Axis(n) => n.authority.as_ref(),
            Node::Parameter(n) => n.authority.as_ref(),
            Node::Projection(n) => n.authority.as_ref(),
            Node::ToWgs84(n) => n.authority.as_ref(),
            Node::Authority(_) => None,
        }
    }
}

impl From<CoordinateSystem> for Node {
    fn from(cs: CoordinateSystem) -> Self {
        match cs {
            CoordinateSystem::Geographic(n) => Node::GeogCs(n),
            CoordinateSystem::Projected(n) => Node::ProjCs(n),
            CoordinateSystem::Geocentric(n) => Node::GeocCs(n),
            CoordinateSystem::Vertical(n) => Node::VertCs(n),
            CoordinateSystem::Local(n) => Node::LocalCs(n),
            CoordinateSystem::Compound(n) => Node::CompdCs(n),
        }
    }
}

/// Gives the node back when it is not a coordinate system
impl TryFrom<Node> for CoordinateSystem {
    type Error = Node;

    fn try_from(node: Node) -> Result<Self, Self::Error> {
        match node {
            Node::GeogCs(n) => Ok(CoordinateSystem::Geographic(n)),
            Node::ProjCs(n) => Ok(CoordinateSystem::Projected(n)),
            Node::GeocCs(n) => Ok(CoordinateSystem::Geocentric(n)),
            Node::VertCs(n) => Ok(CoordinateSystem::Vertical(n)),
            Node::LocalCs(n) => Ok(CoordinateSystem::Local(n)),
            Node::CompdCs(n) => Ok(CoordinateSystem::Compound(n)),
            other => Err(other),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.name()) {
            (Node::Authority(a), _) => write!(f, "{}: {}", self.kind(), a),
            (_, Some(name)) => write!(f, "{}: {}", self.kind(), name),
            (_, None) => write!(f, "{}", self.kind()),
        }
    }
}

/// A coordinate system node: the root of every parsed document
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateSystem {
    Geographic(GeographicCs),
    Projected(ProjectedCs),
    Geocentric(GeocentricCs),
    Vertical(VerticalCs),
    Local(LocalCs),
    Compound(CompoundCs),
}

impl CoordinateSystem {
    pub fn kind(&self) -> NodeKind {
        match self {
            CoordinateSystem::Geographic(_) => NodeKind::GeogCs,
            CoordinateSystem::Projected(_) => NodeKind::ProjCs,
            CoordinateSystem::Geocentric(_) => NodeKind::GeocCs,
            CoordinateSystem::Vertical(_) => NodeKind::VertCs,
            CoordinateSystem::Local(_) => NodeKind::LocalCs,
            CoordinateSystem::Compound(_) => NodeKind::CompdCs,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CoordinateSystem::Geographic(cs) => &cs.name,
            CoordinateSystem::Projected(cs) => &cs.name,
            CoordinateSystem::Geocentric(cs) => &cs.name,
            CoordinateSystem::Vertical(cs) => &cs.name,
            CoordinateSystem::Local(cs) => &cs.name,
            CoordinateSystem::Compound(cs) => &cs.name,
        }
    }

    pub fn authority(&self) -> Option<&Authority> {
        match self {
            CoordinateSystem::Geographic(cs) => cs.authority.as_ref(),
            CoordinateSystem::Projected(cs) => cs.authority.as_ref(),
            CoordinateSystem::Geocentric(cs) => cs.authority.as_ref(),
            CoordinateSystem::Vertical(cs) => cs.authority.as_ref(),
            CoordinateSystem::Local(cs) => cs.authority.as_ref(),
            CoordinateSystem::Compound(cs) => cs.authority.as_ref(),
        }
    }

    /// The EPSG code of this system, when its authority is EPSG
    pub fn epsg_code(&self) -> Option<&str> {
        self.authority()
            .filter(|a| a.is_epsg())
            .map(|a| a.code.as_str())
    }

    pub fn as_geographic(&self) -> Option<&GeographicCs> {
        match self {
            CoordinateSystem::Geographic(cs) => Some(cs),
            _ => None,
        }
    }

    pub fn as_projected(&self) -> Option<&ProjectedCs> {
        match self {
            CoordinateSystem::Projected(cs) => Some(cs),
            _ => None,
        }
    }

    pub fn as_geocentric(&self) -> Option<&GeocentricCs> {
        match self {
            CoordinateSystem::Geocentric(cs) => Some(cs),
            _ => None,
        }
    }

    pub fn as_vertical(&self) -> Option<&VerticalCs> {
        match self {
            CoordinateSystem::Vertical(cs) => Some(cs),
            _ => None,
        }
    }

    pub fn as_local(&self) -> Option<&LocalCs> {
        match self {
            CoordinateSystem::Local(cs) => Some(cs),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&CompoundCs> {
        match self {
            CoordinateSystem::Compound(cs) => Some(cs),
            _ => None,
        }
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind(), self.name())
    }
}
