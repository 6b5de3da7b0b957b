//! Tree to nested key/value structure
//!
//! Every node becomes a single-entry object mapping its keyword to an object of its fields:
//!
//! ```text
//! {"UNIT": {"authority": {"AUTHORITY": {"code": "9001", "name": "EPSG"}},
//!           "conversion_factor": 1.0, "name": "metre"}}
//! ```
//!
//! Node-typed fields keep their field name and hold the child's own single-entry object, list
//! fields hold an array of them in source order, and optional fields that are unset are left out.
//! `axis_list` and `param_list` are always present, possibly empty. Keys are emitted in sorted
//! order, so the output of a given tree is always the same.

use crate::ast::{
    Authority, Axis, CompoundCs, CoordinateSystem, Datum, GeocentricCs, GeographicCs, LocalCs,
    LocalDatum, Node, NodeKind, Parameter, ParameterValue, PrimeMeridian, ProjectedCs, Projection,
    Spheroid, ToWgs84, Unit, VerticalCs, VerticalDatum,
};
use serde_json::{Map, Value};

/// Export a parsed document
pub fn export(cs: &CoordinateSystem) -> Value {
    match cs {
        CoordinateSystem::Geographic(n) => geographic_cs(n),
        CoordinateSystem::Projected(n) => projected_cs(n),
        CoordinateSystem::Geocentric(n) => geocentric_cs(n),
        CoordinateSystem::Vertical(n) => vertical_cs(n),
        CoordinateSystem::Local(n) => local_cs(n),
        CoordinateSystem::Compound(n) => compound_cs(n),
    }
}

/// Export any node, coordinate system or not
pub fn export_node(node: &Node) -> Value {
    match node {
        Node::GeogCs(n) => geographic_cs(n),
        Node::ProjCs(n) => projected_cs(n),
        Node::GeocCs(n) => geocentric_cs(n),
        Node::VertCs(n) => vertical_cs(n),
        Node::LocalCs(n) => local_cs(n),
        Node::CompdCs(n) => compound_cs(n),
        Node::Datum(n) => datum(n),
        Node::VertDatum(n) => vertical_datum(n),
        Node::LocalDatum(n) => local_datum(n),
        Node::Spheroid(n) => spheroid(n),
        Node::Primem(n) => prime_meridian(n),
        Node::Unit(n) => unit(n),
        Node::Axis(n) => axis(n),
        Node::Parameter(n) => parameter(n),
        Node::Projection(n) => projection(n),
        Node::ToWgs84(n) => towgs84(n),
        Node::Authority(n) => authority(n),
    }
}

/// Compact JSON text of [`export`]
pub fn export_text(cs: &CoordinateSystem) -> String {
    export(cs).to_string()
}

/// Compact JSON text of [`export_node`], for any node in the tree
pub fn export_node_text(node: &Node) -> String {
    export_node(node).to_string()
}

/// Field collector for one node
struct Fields(Map<String, Value>);

impl Fields {
    fn named(name: &str) -> Self {
        let mut map = Map::new();
        map.insert("name".to_string(), Value::from(name));
        Fields(map)
    }

    fn value(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    fn child(self, key: &str, child: Option<Value>) -> Self {
        match child {
            Some(value) => self.value(key, value),
            None => self,
        }
    }

    fn list<T>(self, key: &str, items: &[T], export: fn(&T) -> Value) -> Self {
        let values: Vec<Value> = items.iter().map(export).collect();
        self.value(key, values)
    }

    fn authority(self, authority: &Option<Authority>) -> Self {
        self.child("authority", authority.as_ref().map(self::authority))
    }

    fn tagged(self, kind: NodeKind) -> Value {
        let mut outer = Map::new();
        outer.insert(kind.as_str().to_string(), Value::Object(self.0));
        Value::Object(outer)
    }
}

fn authority(n: &Authority) -> Value {
    Fields::named(&n.name)
        .value("code", n.code.as_str())
        .tagged(NodeKind::Authority)
}

fn axis(n: &Axis) -> Value {
    Fields::named(&n.name)
        .value("direction", n.direction.as_str())
        .authority(&n.authority)
        .tagged(NodeKind::Axis)
}

fn parameter(n: &Parameter) -> Value {
    let value = match n.value {
        ParameterValue::Integer(i) => Value::from(i),
        ParameterValue::Float(f) => Value::from(f),
    };
    Fields::named(&n.name)
        .value("value", value)
        .authority(&n.authority)
        .tagged(NodeKind::Parameter)
}

fn projection(n: &Projection) -> Value {
    Fields::named(&n.name)
        .authority(&n.authority)
        .tagged(NodeKind::Projection)
}

fn towgs84(n: &ToWgs84) -> Value {
    Fields(Map::new())
        .value("dx", n.dx)
        .value("dy", n.dy)
        .value("dz", n.dz)
        .value("ex", n.ex)
        .value("ey", n.ey)
        .value("ez", n.ez)
        .value("ppm", n.ppm)
        .authority(&n.authority)
        .tagged(NodeKind::ToWgs84)
}

fn unit(n: &Unit) -> Value {
    Fields::named(&n.name)
        .value("conversion_factor", n.conversion_factor)
        .authority(&n.authority)
        .tagged(NodeKind::Unit)
}

fn prime_meridian(n: &PrimeMeridian) -> Value {
    Fields::named(&n.name)
        .value("longitude", n.longitude)
        .authority(&n.authority)
        .tagged(NodeKind::Primem)
}

fn spheroid(n: &Spheroid) -> Value {
    Fields::named(&n.name)
        .value("semi_major_axis", n.semi_major_axis)
        .value("inverse_flattening", n.inverse_flattening)
        .authority(&n.authority)
        .tagged(NodeKind::Spheroid)
}

fn datum(n: &Datum) -> Value {
    Fields::named(&n.name)
        .child("spheroid", n.spheroid.as_ref().map(spheroid))
        .child("towgs84", n.towgs84.as_ref().map(towgs84))
        .authority(&n.authority)
        .tagged(NodeKind::Datum)
}

fn vertical_datum(n: &VerticalDatum) -> Value {
    Fields::named(&n.name)
        .value("datum_type", n.datum_type)
        .authority(&n.authority)
        .tagged(NodeKind::VertDatum)
}

fn local_datum(n: &LocalDatum) -> Value {
    Fields::named(&n.name)
        .value("datum_type", n.datum_type)
        .authority(&n.authority)
        .tagged(NodeKind::LocalDatum)
}

fn geographic_cs(n: &GeographicCs) -> Value {
    Fields::named(&n.name)
        .child("datum", n.datum.as_ref().map(datum))
        .child("prime_meridian", n.prime_meridian.as_ref().map(prime_meridian))
        .child("angular_unit", n.angular_unit.as_ref().map(unit))
        .list("axis_list", &n.axis_list, axis)
        .authority(&n.authority)
        .tagged(NodeKind::GeogCs)
}

fn projected_cs(n: &ProjectedCs) -> Value {
    Fields::named(&n.name)
        .value("geographic_cs", geographic_cs(&n.geographic_cs))
        .child("projection", n.projection.as_ref().map(projection))
        .list("param_list", &n.param_list, parameter)
        .child("linear_unit", n.linear_unit.as_ref().map(unit))
        .list("axis_list", &n.axis_list, axis)
        .authority(&n.authority)
        .tagged(NodeKind::ProjCs)
}

fn geocentric_cs(n: &GeocentricCs) -> Value {
    Fields::named(&n.name)
        .child("datum", n.datum.as_ref().map(datum))
        .child("prime_meridian", n.prime_meridian.as_ref().map(prime_meridian))
        .child("linear_unit", n.linear_unit.as_ref().map(unit))
        .list("axis_list", &n.axis_list, axis)
        .authority(&n.authority)
        .tagged(NodeKind::GeocCs)
}

fn vertical_cs(n: &VerticalCs) -> Value {
    Fields::named(&n.name)
        .child("vert_datum", n.vert_datum.as_ref().map(vertical_datum))
        .child("linear_unit", n.linear_unit.as_ref().map(unit))
        .list("axis_list", &n.axis_list, axis)
        .authority(&n.authority)
        .tagged(NodeKind::VertCs)
}

fn local_cs(n: &LocalCs) -> Value {
    Fields::named(&n.name)
        .child("local_datum", n.local_datum.as_ref().map(local_datum))
        .child("unit", n.unit.as_ref().map(unit))
        .list("axis_list", &n.axis_list, axis)
        .authority(&n.authority)
        .tagged(NodeKind::LocalCs)
}

fn compound_cs(n: &CompoundCs) -> Value {
    Fields::named(&n.name)
        .value("head_cs", export(&n.head_cs))
        .value("tail_cs", export(&n.tail_cs))
        .authority(&n.authority)
        .tagged(NodeKind::CompdCs)
}
