//! # Dataset metadata
//!
//! The seam between the descriptor engine and the HDF5 storage layer.
//! The engine never reads array contents: everything it needs from a dataset
//! is captured by the [`Dataset`] trait (where the array lives, its shape,
//! and its element type). [`DatasetRef`] snapshots that metadata once, at
//! field-construction time, and is immutable afterwards.

use crate::prelude::*;

/// Element type of a dataset as reported by the storage layer.
///
/// Only integers and IEEE floats can be described by an XDMF `DataItem`.
/// The remaining variants exist so a storage backend can report what it
/// found and have it rejected with a useful [`Error::UnsupportedType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dtype {
    /// signed or unsigned integer with the given byte width
    Int { signed: bool, bytes: usize },
    /// IEEE float with the given byte width
    Float { bytes: usize },
    /// complex number (not representable in XDMF)
    Complex { bytes: usize },
    /// boolean (not representable in XDMF)
    Bool,
    /// anything else: strings, compound types, opaque data
    Other,
}

/// The values of the XDMF `NumberType` attribute this writer can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberType {
    Int,
    UInt,
    Float,
}

impl NumberType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberType::Int => "Int",
            NumberType::UInt => "UInt",
            NumberType::Float => "Float",
        }
    }
}

/// A resolved `NumberType` / `Precision` attribute pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeric {
    pub number_type: NumberType,
    /// byte width, written to the `Precision` attribute
    pub precision: usize,
}

impl Numeric {
    /// Map a storage-layer [`Dtype`] to its XDMF attribute pair.
    ///
    /// Returns `None` for element types XDMF cannot describe: complex
    /// numbers, booleans, compounds, integer widths outside {1,2,4,8} and
    /// float widths outside {4,8}.
    pub fn from_dtype(dtype: Dtype) -> Option<Numeric> {
        match dtype {
            Dtype::Int {
                signed: true,
                bytes: bytes @ (1 | 2 | 4 | 8),
            } => Some(Numeric {
                number_type: NumberType::Int,
                precision: bytes,
            }),
            Dtype::Int {
                signed: false,
                bytes: bytes @ (1 | 2 | 4 | 8),
            } => Some(Numeric {
                number_type: NumberType::UInt,
                precision: bytes,
            }),
            Dtype::Float {
                bytes: bytes @ (4 | 8),
            } => Some(Numeric {
                number_type: NumberType::Float,
                precision: bytes,
            }),
            _ => None,
        }
    }
}

/// The entire surface the engine requires from the HDF5 layer.
///
/// Implement this for whatever handle your storage bindings give you for an
/// open dataset. None of the methods may read element values; they only
/// report metadata.
pub trait Dataset {
    /// path of the file containing the dataset
    fn filename(&self) -> PathBuf;

    /// path of the dataset inside its container file (e.g. `/coor`)
    fn name(&self) -> String;

    /// shape of the dataset, slowest axis first
    fn shape(&self) -> Vec<usize>;

    /// element type of the dataset
    fn dtype(&self) -> Dtype;
}

/// Plain metadata record implementing [`Dataset`].
///
/// Useful for callers that already know a dataset's layout, or as an adaptor
/// for HDF5 bindings this crate does not know about.
#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct DatasetMeta {
    pub filename: PathBuf,
    pub dataset: String,
    pub shape: Vec<usize>,
    pub dtype: Dtype,
}

impl Dataset for DatasetMeta {
    fn filename(&self) -> PathBuf {
        self.filename.clone()
    }

    fn name(&self) -> String {
        self.dataset.clone()
    }

    fn shape(&self) -> Vec<usize> {
        self.shape.clone()
    }

    fn dtype(&self) -> Dtype {
        self.dtype
    }
}

/// An immutable snapshot of one dataset's metadata, taken when a field is
/// constructed. This is all a `<DataItem>` needs: location, `Dimensions`,
/// and the `NumberType` / `Precision` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetRef {
    pub filename: PathBuf,
    pub dataset: String,
    pub shape: Vec<usize>,
    pub numeric: Numeric,
}

impl DatasetRef {
    /// Snapshot the metadata of `dataset`.
    ///
    /// Fails with [`Error::UnsupportedType`] if the element type has no
    /// XDMF mapping and with [`Error::ShapeMismatch`] for scalar (rank-0)
    /// datasets, which cannot carry a `Dimensions` attribute.
    pub fn new(dataset: &(impl Dataset + ?Sized)) -> Result<Self, Error> {
        let shape = dataset.shape();
        let path = dataset.name();

        if shape.is_empty() {
            return Err(Error::ShapeMismatch {
                path,
                shape,
                expected: "a dataset with at least one axis".into(),
            });
        }

        let numeric = Numeric::from_dtype(dataset.dtype()).ok_or(Error::UnsupportedType {
            path: path.clone(),
            dtype: dataset.dtype(),
        })?;

        Ok(DatasetRef {
            filename: dataset.filename(),
            dataset: path,
            shape,
            numeric,
        })
    }

    /// number of rows, the length of the slowest axis
    pub fn rows(&self) -> usize {
        self.shape[0]
    }

    /// the space-joined shape written to the `Dimensions` attribute
    pub fn dimensions(&self) -> String {
        self.shape
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// the `<file>:<dataset>` text an XDMF consumer cross-references
    /// against the HDF5 file
    pub fn location(&self) -> String {
        format!("{}:{}", self.filename.display(), self.dataset)
    }

    /// Emit the `<DataItem>` element referencing this dataset.
    pub(crate) fn write_data_item<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), Error> {
        let mut item = BytesStart::new("DataItem");
        item.push_attribute(("Dimensions", self.dimensions().as_str()));
        item.push_attribute(("NumberType", self.numeric.number_type.as_str()));
        item.push_attribute(("Precision", self.numeric.precision.to_string().as_str()));
        item.push_attribute(("Format", "HDF"));

        writer.write_event(Event::Start(item))?;
        writer.write_event(Event::Text(BytesText::new(&self.location())))?;
        writer.write_event(Event::End(BytesEnd::new("DataItem")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(shape: Vec<usize>, dtype: Dtype) -> DatasetMeta {
        DatasetMeta::new("tmp.h5".into(), "/coor".into(), shape, dtype)
    }

    #[test]
    fn numeric_mapping() {
        assert_eq!(
            Numeric::from_dtype(Dtype::Float { bytes: 8 }),
            Some(Numeric {
                number_type: NumberType::Float,
                precision: 8
            })
        );
        assert_eq!(
            Numeric::from_dtype(Dtype::Int {
                signed: true,
                bytes: 4
            }),
            Some(Numeric {
                number_type: NumberType::Int,
                precision: 4
            })
        );
        assert_eq!(
            Numeric::from_dtype(Dtype::Int {
                signed: false,
                bytes: 1
            }),
            Some(Numeric {
                number_type: NumberType::UInt,
                precision: 1
            })
        );
    }

    #[test]
    fn numeric_mapping_rejects_unsupported() {
        assert_eq!(Numeric::from_dtype(Dtype::Complex { bytes: 16 }), None);
        assert_eq!(Numeric::from_dtype(Dtype::Bool), None);
        assert_eq!(Numeric::from_dtype(Dtype::Other), None);
        // a half precision float has no XDMF Precision value
        assert_eq!(Numeric::from_dtype(Dtype::Float { bytes: 2 }), None);
        assert_eq!(
            Numeric::from_dtype(Dtype::Int {
                signed: true,
                bytes: 3
            }),
            None
        );
    }

    #[test]
    fn snapshot_keeps_location_and_shape() {
        let dataset = meta(vec![6, 2], Dtype::Float { bytes: 8 });
        let reference = DatasetRef::new(&dataset).unwrap();

        assert_eq!(reference.location(), "tmp.h5:/coor");
        assert_eq!(reference.dimensions(), "6 2");
        assert_eq!(reference.rows(), 6);
    }

    #[test]
    fn complex_dataset_is_rejected() {
        let dataset = meta(vec![6, 2], Dtype::Complex { bytes: 16 });
        let err = DatasetRef::new(&dataset).unwrap_err();

        match err {
            Error::UnsupportedType { path, .. } => assert_eq!(path, "/coor"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rank_zero_dataset_is_rejected() {
        let dataset = meta(vec![], Dtype::Float { bytes: 8 });
        assert!(matches!(
            DatasetRef::new(&dataset),
            Err(Error::ShapeMismatch { .. })
        ));
    }
}
