#![doc = include_str!("../README.md")]

pub mod dataset;
pub mod field;
pub mod grid;
pub mod prelude;
pub mod series;
mod write;

pub use dataset::{Dataset, DatasetMeta, DatasetRef, Dtype, NumberType, Numeric};

pub use field::{structured, structured_with_conn, unstructured};
pub use field::{AttributeCenter, AttributeType, ElementType, Field, GeometryType};

pub use grid::Grid;
pub use series::TimeSeries;

pub use write::write;
pub use write::{to_xml_string, Render, Scoped};

pub use quick_xml::Writer;

/// general purpose error enumeration for possible causes of failure.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("An io error occured: `{0}`")]
    Io(#[from] std::io::Error),
    #[error("Could not write XML data: `{0}`")]
    XmlWrite(#[from] quick_xml::Error),
    #[error("Rendered XML was not valid utf8: `{0}`")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("dataset `{path}`: element type {dtype:?} has no XDMF NumberType/Precision mapping")]
    UnsupportedType { path: String, dtype: Dtype },
    #[error("dataset `{path}`: shape {shape:?} cannot be used as {expected}")]
    ShapeMismatch {
        path: String,
        shape: Vec<usize>,
        expected: String,
    },
}
