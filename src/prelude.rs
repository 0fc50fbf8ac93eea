//! Common traits and types that are useful for working with `xdmf`
#![allow(unused_imports)]

pub use crate::dataset::{Dataset, DatasetMeta, DatasetRef, Dtype, NumberType, Numeric};
pub use crate::field::{structured, structured_with_conn, unstructured};
pub use crate::field::{AttributeCenter, AttributeType, ElementType, Field, GeometryType};
pub use crate::grid::Grid;
pub use crate::series::TimeSeries;
pub use crate::write::{to_xml_string, write, Render, Scoped};
pub use crate::Error;

pub(crate) use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
pub(crate) use quick_xml::Writer;

pub(crate) use std::io::Write;
pub(crate) use std::path::{Path, PathBuf};

pub(crate) use derive_more::Constructor;
