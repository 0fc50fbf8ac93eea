//! # Fields
//!
//! A [`Field`] interprets one dataset as an XDMF `<Geometry>`, `<Topology>`,
//! or `<Attribute>` fragment. Fields are immutable value objects: their
//! rendered form is fully determined by the dataset metadata snapshot and the
//! role descriptor captured at construction time, so the same inputs always
//! produce byte-identical XML.
//!
//! The composite builders [`unstructured`] and [`structured`] assemble the
//! usual Geometry + Topology pair in one call.

use crate::prelude::*;

/// How the nodal coordinates of a [`Field::Geometry`] are laid out, as
/// written to the `GeometryType` attribute. The variant fixes the expected
/// trailing axis of the coordinate dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryType {
    X,
    XY,
    XYZ,
}

impl GeometryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryType::X => "X",
            GeometryType::XY => "XY",
            GeometryType::XYZ => "XYZ",
        }
    }

    /// number of coordinates per node
    pub fn arity(&self) -> usize {
        match self {
            GeometryType::X => 1,
            GeometryType::XY => 2,
            GeometryType::XYZ => 3,
        }
    }

    fn from_arity(arity: usize) -> Option<GeometryType> {
        match arity {
            1 => Some(GeometryType::X),
            2 => Some(GeometryType::XY),
            3 => Some(GeometryType::XYZ),
            _ => None,
        }
    }
}

/// The cell topologies XDMF understands, written to the `TopologyType`
/// attribute of a [`Field::Topology`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    Polyvertex,
    Polyline,
    Triangle,
    Quadrilateral,
    Tetrahedron,
    Pyramid,
    Wedge,
    Hexahedron,
}

impl ElementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Polyvertex => "Polyvertex",
            ElementType::Polyline => "Polyline",
            ElementType::Triangle => "Triangle",
            ElementType::Quadrilateral => "Quadrilateral",
            ElementType::Tetrahedron => "Tetrahedron",
            ElementType::Pyramid => "Pyramid",
            ElementType::Wedge => "Wedge",
            ElementType::Hexahedron => "Hexahedron",
        }
    }

    /// number of nodes each cell of this type connects
    pub fn nodes_per_element(&self) -> usize {
        match self {
            ElementType::Polyvertex => 1,
            ElementType::Polyline => 2,
            ElementType::Triangle => 3,
            ElementType::Quadrilateral => 4,
            ElementType::Tetrahedron => 4,
            ElementType::Pyramid => 5,
            ElementType::Wedge => 6,
            ElementType::Hexahedron => 8,
        }
    }

    /// Check that a connectivity dataset's shape fits this element type:
    /// a rank-1 dataset for `Polyvertex`, otherwise a rank-2 dataset with
    /// [`nodes_per_element`](Self::nodes_per_element) entries per row.
    pub fn matches_shape(&self, shape: &[usize]) -> bool {
        match self {
            ElementType::Polyvertex => shape.len() == 1,
            _ => shape.len() == 2 && shape[1] == self.nodes_per_element(),
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an attribute is sampled relative to the mesh, written to the
/// `Center` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeCenter {
    Node,
    Cell,
}

impl AttributeCenter {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeCenter::Node => "Node",
            AttributeCenter::Cell => "Cell",
        }
    }
}

/// Rank of an attribute, written to the `AttributeType` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    Scalar,
    Vector,
    Tensor,
}

impl AttributeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::Scalar => "Scalar",
            AttributeType::Vector => "Vector",
            AttributeType::Tensor => "Tensor",
        }
    }

    /// Infer the attribute type from a dataset shape: rank-1 is a scalar
    /// per node/cell, a trailing axis of 3 is a vector and of 9 a tensor.
    /// Anything else falls back to `Scalar`.
    pub fn infer(shape: &[usize]) -> AttributeType {
        match shape {
            [_] => AttributeType::Scalar,
            [.., 3] => AttributeType::Vector,
            [.., 9] => AttributeType::Tensor,
            _ => AttributeType::Scalar,
        }
    }
}

/// One XDMF fragment: a dataset interpreted as geometry, topology, or an
/// attribute.
///
/// Constructed through [`Field::geometry`], [`Field::topology`],
/// [`Field::attribute`] and friends; immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Geometry {
        dataset: DatasetRef,
        kind: GeometryType,
    },
    Topology {
        dataset: DatasetRef,
        element: ElementType,
    },
    /// A synthetic Polyvertex topology enumerating `0..points`. This is the
    /// one fragment that carries values instead of a dataset pointer; it is
    /// rendered as an inline `Format="XML"` item.
    PointTopology { points: usize },
    Attribute {
        dataset: DatasetRef,
        center: AttributeCenter,
        kind: AttributeType,
        name: String,
    },
}

impl Field {
    /// Interpret a dataset as a Geometry (nodal coordinates).
    ///
    /// The `GeometryType` is inferred from the trailing axis of the
    /// (rank-2) dataset: 1, 2, or 3 coordinates per node. Any other shape
    /// fails with [`Error::ShapeMismatch`].
    pub fn geometry(dataset: &(impl Dataset + ?Sized)) -> Result<Field, Error> {
        let (dataset, kind) = geometry_parts(dataset)?;
        Ok(Field::Geometry { dataset, kind })
    }

    /// Interpret a dataset as a Geometry of an explicit kind.
    ///
    /// The dataset must be rank-2 with a trailing axis matching
    /// [`GeometryType::arity`]; mismatches fail with
    /// [`Error::ShapeMismatch`].
    pub fn geometry_as(
        dataset: &(impl Dataset + ?Sized),
        kind: GeometryType,
    ) -> Result<Field, Error> {
        let dataset = DatasetRef::new(dataset)?;

        if !matches!(dataset.shape.as_slice(), &[_, arity] if arity == kind.arity()) {
            return Err(Error::ShapeMismatch {
                path: dataset.dataset,
                shape: dataset.shape,
                expected: format!(
                    "a {} geometry ({} coordinates per node)",
                    kind.as_str(),
                    kind.arity()
                ),
            });
        }

        Ok(Field::Geometry { dataset, kind })
    }

    /// Interpret a dataset as a Topology (connectivity) of `element` cells.
    ///
    /// `NumberOfElements` is taken from the first axis; a shape failing
    /// [`ElementType::matches_shape`] is rejected.
    pub fn topology(
        dataset: &(impl Dataset + ?Sized),
        element: ElementType,
    ) -> Result<Field, Error> {
        let dataset = DatasetRef::new(dataset)?;

        if !element.matches_shape(&dataset.shape) {
            return Err(Error::ShapeMismatch {
                path: dataset.dataset,
                shape: dataset.shape,
                expected: format!(
                    "a {element} topology ({} nodes per element)",
                    element.nodes_per_element()
                ),
            });
        }

        Ok(Field::Topology { dataset, element })
    }

    /// Interpret a dataset as an Attribute, named after its own path.
    pub fn attribute(
        dataset: &(impl Dataset + ?Sized),
        center: AttributeCenter,
    ) -> Result<Field, Error> {
        let name = dataset.name();
        Field::attribute_named(dataset, center, name)
    }

    /// Interpret a dataset as an Attribute with an explicit name.
    ///
    /// The `AttributeType` is inferred from the shape, see
    /// [`AttributeType::infer`].
    pub fn attribute_named(
        dataset: &(impl Dataset + ?Sized),
        center: AttributeCenter,
        name: impl Into<String>,
    ) -> Result<Field, Error> {
        let dataset = DatasetRef::new(dataset)?;
        let kind = AttributeType::infer(&dataset.shape);

        Ok(Field::Attribute {
            dataset,
            center,
            kind,
            name: name.into(),
        })
    }
}

fn geometry_parts(
    dataset: &(impl Dataset + ?Sized),
) -> Result<(DatasetRef, GeometryType), Error> {
    let dataset = DatasetRef::new(dataset)?;

    let kind = match dataset.shape.as_slice() {
        &[_, arity] => GeometryType::from_arity(arity),
        _ => None,
    };

    match kind {
        Some(kind) => Ok((dataset, kind)),
        None => Err(Error::ShapeMismatch {
            path: dataset.dataset,
            shape: dataset.shape,
            expected: "a geometry with 1, 2, or 3 coordinates per node".into(),
        }),
    }
}

/// Interpret two datasets as an unstructured mesh: the Geometry of
/// `geometry` followed by the Topology of `connectivity`, ready to be pushed
/// into a [`Grid`].
pub fn unstructured(
    geometry: &(impl Dataset + ?Sized),
    connectivity: &(impl Dataset + ?Sized),
    element: ElementType,
) -> Result<[Field; 2], Error> {
    Ok([
        Field::geometry(geometry)?,
        Field::topology(connectivity, element)?,
    ])
}

/// Interpret a coordinate dataset as a structured set of individual points:
/// its Geometry plus a synthetic Polyvertex topology enumerating the nodes
/// `0..N`, rendered inline rather than as an HDF5 reference.
pub fn structured(geometry: &(impl Dataset + ?Sized)) -> Result<[Field; 2], Error> {
    let (dataset, kind) = geometry_parts(geometry)?;
    let points = dataset.rows();

    Ok([
        Field::Geometry { dataset, kind },
        Field::PointTopology { points },
    ])
}

/// Like [`structured`], but with the point connectivity stored as a real
/// rank-1 dataset (`0..N` written to the container file by the caller).
/// The connectivity must have exactly one entry per node.
pub fn structured_with_conn(
    geometry: &(impl Dataset + ?Sized),
    connectivity: &(impl Dataset + ?Sized),
) -> Result<[Field; 2], Error> {
    let (dataset, kind) = geometry_parts(geometry)?;
    let conn = DatasetRef::new(connectivity)?;

    if !ElementType::Polyvertex.matches_shape(&conn.shape) || conn.rows() != dataset.rows() {
        return Err(Error::ShapeMismatch {
            path: conn.dataset,
            shape: conn.shape,
            expected: format!(
                "a Polyvertex connectivity with one entry per node ({} nodes)",
                dataset.rows()
            ),
        });
    }

    Ok([
        Field::Geometry { dataset, kind },
        Field::Topology {
            dataset: conn,
            element: ElementType::Polyvertex,
        },
    ])
}

impl Render for Field {
    fn render<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), Error> {
        match self {
            Field::Geometry { dataset, kind } => {
                let mut start = BytesStart::new("Geometry");
                start.push_attribute(("GeometryType", kind.as_str()));

                writer.write_event(Event::Start(start))?;
                dataset.write_data_item(writer)?;
                writer.write_event(Event::End(BytesEnd::new("Geometry")))?;
            }
            Field::Topology { dataset, element } => {
                let mut start = BytesStart::new("Topology");
                start.push_attribute(("NumberOfElements", dataset.rows().to_string().as_str()));
                start.push_attribute(("TopologyType", element.as_str()));

                writer.write_event(Event::Start(start))?;
                dataset.write_data_item(writer)?;
                writer.write_event(Event::End(BytesEnd::new("Topology")))?;
            }
            Field::PointTopology { points } => {
                let mut start = BytesStart::new("Topology");
                start.push_attribute(("NumberOfElements", points.to_string().as_str()));
                start.push_attribute(("TopologyType", ElementType::Polyvertex.as_str()));

                writer.write_event(Event::Start(start))?;

                let mut item = BytesStart::new("DataItem");
                item.push_attribute(("Dimensions", points.to_string().as_str()));
                item.push_attribute(("NumberType", NumberType::Int.as_str()));
                item.push_attribute(("Precision", "8"));
                item.push_attribute(("Format", "XML"));

                let mut text = String::new();
                for i in 0..*points {
                    if i > 0 {
                        text.push(' ');
                    }
                    text.push_str(&i.to_string());
                }

                writer.write_event(Event::Start(item))?;
                writer.write_event(Event::Text(BytesText::new(&text)))?;
                writer.write_event(Event::End(BytesEnd::new("DataItem")))?;

                writer.write_event(Event::End(BytesEnd::new("Topology")))?;
            }
            Field::Attribute {
                dataset,
                center,
                kind,
                name,
            } => {
                let mut start = BytesStart::new("Attribute");
                start.push_attribute(("AttributeType", kind.as_str()));
                start.push_attribute(("Center", center.as_str()));
                start.push_attribute(("Name", name.as_str()));

                writer.write_event(Event::Start(start))?;
                dataset.write_data_item(writer)?;
                writer.write_event(Event::End(BytesEnd::new("Attribute")))?;
            }
        }

        Ok(())
    }
}

impl Render for [Field] {
    fn render<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), Error> {
        for field in self {
            field.render(writer)?;
        }
        Ok(())
    }
}
