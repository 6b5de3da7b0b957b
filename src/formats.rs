//! Output formats for parsed coordinate systems
//!
//! - [export]: the tree as a nested key/value structure (`serde_json::Value`)
//! - [registry]: named text serializers built on the export (json, json-pretty, yaml, treeviz)

pub mod export;
pub mod registry;
pub mod treeviz;

pub use export::{export, export_node, export_node_text, export_text};
pub use registry::{
    FormatError, FormatRegistry, Formatter, JsonFormatter, TreevizFormatter, YamlFormatter,
};
pub use treeviz::to_treeviz_str;
