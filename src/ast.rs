//! Tree model for parsed coordinate reference systems
//!
//!     A parsed document is a [`CoordinateSystem`] root owning its children outright. There are
//!     no back references and no shared nodes, and nothing mutates a node after the builder
//!     returns it, so a tree can be handed to any number of readers.
//!
//!     The shape follows WKT 1 (OGC 01-009):
//!
//!         COMPD_CS ── head_cs, tail_cs
//!         PROJCS ── GEOGCS, PROJECTION, PARAMETER*, UNIT, AXIS*
//!         GEOGCS ── DATUM, PRIMEM, UNIT, AXIS*
//!         GEOCCS ── DATUM, PRIMEM, UNIT, AXIS*
//!         VERT_CS ── VERT_DATUM, UNIT, AXIS*
//!         LOCAL_CS ── LOCAL_DATUM, UNIT, AXIS*
//!         DATUM ── SPHEROID, TOWGS84
//!
//!     and every node but AUTHORITY may carry an AUTHORITY.

pub mod elements;
pub mod kind;
pub mod node;

pub use elements::{
    Authority, Axis, CompoundCs, Datum, GeocentricCs, GeographicCs, LocalCs, LocalDatum,
    Parameter, ParameterValue, PrimeMeridian, ProjectedCs, Projection, Spheroid, ToWgs84, Unit,
    VerticalCs, VerticalDatum,
};
pub use kind::{AxisDirection, NodeKind};
pub use node::{CoordinateSystem, Node};
