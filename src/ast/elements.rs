//! One struct per node kind
//!
//! Each struct carries only the fields its kind allows. Optional children that the WKT text did
//! not supply stay `None`; list fields are empty rather than absent. Every kind except
//! [`Authority`] can carry an authority reference.

use super::kind::AxisDirection;
use super::node::CoordinateSystem;
use std::fmt;

/// `AUTHORITY["EPSG","4326"]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authority {
    /// Issuing organization, e.g. `EPSG`
    pub name: String,
    /// Registry code, digits only
    pub code: String,
}

impl Authority {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }

    pub fn is_epsg(&self) -> bool {
        self.name.eq_ignore_ascii_case("EPSG")
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.code)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub name: String,
    pub direction: AxisDirection,
    pub authority: Option<Authority>,
}

/// Value of a PARAMETER node.
///
/// Integral literals stay integers; anything with a decimal point is a float, even `49.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterValue {
    Integer(i64),
    Float(f64),
}

impl ParameterValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            ParameterValue::Integer(i) => i as f64,
            ParameterValue::Float(f) => f,
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Integer(i) => write!(f, "{i}"),
            ParameterValue::Float(v) => write!(f, "{v:?}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub value: ParameterValue,
    pub authority: Option<Authority>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub name: String,
    pub authority: Option<Authority>,
}

/// Seven-parameter datum shift to WGS84: three translations (metres), three rotations
/// (arc-seconds) and a scale correction in parts per million.
#[derive(Debug, Clone, PartialEq)]
pub struct ToWgs84 {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
    pub ex: f64,
    pub ey: f64,
    pub ez: f64,
    pub ppm: f64,
    pub authority: Option<Authority>,
}

impl ToWgs84 {
    pub fn from_params(params: [f64; 7]) -> Self {
        let [dx, dy, dz, ex, ey, ez, ppm] = params;
        Self {
            dx,
            dy,
            dz,
            ex,
            ey,
            ez,
            ppm,
            authority: None,
        }
    }

    pub fn params(&self) -> [f64; 7] {
        [
            self.dx, self.dy, self.dz, self.ex, self.ey, self.ez, self.ppm,
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub name: String,
    pub conversion_factor: f64,
    pub authority: Option<Authority>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrimeMeridian {
    pub name: String,
    pub longitude: f64,
    pub authority: Option<Authority>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spheroid {
    pub name: String,
    pub semi_major_axis: f64,
    pub inverse_flattening: f64,
    pub authority: Option<Authority>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Datum {
    pub name: String,
    pub spheroid: Option<Spheroid>,
    pub towgs84: Option<ToWgs84>,
    pub authority: Option<Authority>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerticalDatum {
    pub name: String,
    pub datum_type: i64,
    pub authority: Option<Authority>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocalDatum {
    pub name: String,
    pub datum_type: i64,
    pub authority: Option<Authority>,
}

/// GEOGCS: zero or two axes
#[derive(Debug, Clone, PartialEq)]
pub struct GeographicCs {
    pub name: String,
    pub datum: Option<Datum>,
    pub prime_meridian: Option<PrimeMeridian>,
    pub angular_unit: Option<Unit>,
    pub axis_list: Vec<Axis>,
    pub authority: Option<Authority>,
}

/// PROJCS: zero or two axes
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedCs {
    pub name: String,
    pub geographic_cs: GeographicCs,
    pub projection: Option<Projection>,
    pub param_list: Vec<Parameter>,
    pub linear_unit: Option<Unit>,
    pub axis_list: Vec<Axis>,
    pub authority: Option<Authority>,
}

impl ProjectedCs {
    /// Look up a projection parameter by name, ignoring ASCII case
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.param_list
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

/// GEOCCS: zero or three axes
#[derive(Debug, Clone, PartialEq)]
pub struct GeocentricCs {
    pub name: String,
    pub datum: Option<Datum>,
    pub prime_meridian: Option<PrimeMeridian>,
    pub linear_unit: Option<Unit>,
    pub axis_list: Vec<Axis>,
    pub authority: Option<Authority>,
}

/// VERT_CS: zero or one axis
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalCs {
    pub name: String,
    pub vert_datum: Option<VerticalDatum>,
    pub linear_unit: Option<Unit>,
    pub axis_list: Vec<Axis>,
    pub authority: Option<Authority>,
}

/// LOCAL_CS: one or two axes
#[derive(Debug, Clone, PartialEq)]
pub struct LocalCs {
    pub name: String,
    pub local_datum: Option<LocalDatum>,
    pub unit: Option<Unit>,
    pub axis_list: Vec<Axis>,
    pub authority: Option<Authority>,
}

/// COMPD_CS: a head and a tail coordinate system, in that order
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundCs {
    pub name: String,
    pub head_cs: Box<CoordinateSystem>,
    pub tail_cs: Box<CoordinateSystem>,
    pub authority: Option<Authority>,
}
