//! One mesh snapshot: an ordered, mutable collection of [`Field`] fragments.

use crate::prelude::*;

/// An ordered collection of [`Field`] fragments rendered as one `<Grid>`
/// element.
///
/// Fields are appended permissively and rendered in insertion order. A grid
/// a visualization tool can actually display holds exactly one Geometry and
/// one Topology plus any number of Attributes; nothing here enforces that
/// convention, so pushing two topologies produces a well-formed but
/// semantically ambiguous document.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    name: String,
    fields: Vec<Field>,
}

impl Grid {
    pub fn new(name: impl Into<String>) -> Grid {
        Grid {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// the stored fragments, in insertion order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Append one fragment. Sequences of fragments (such as the output of
    /// [`unstructured`]) go through [`Extend`].
    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new("Grid")
    }
}

impl Extend<Field> for Grid {
    fn extend<I: IntoIterator<Item = Field>>(&mut self, fields: I) {
        self.fields.extend(fields);
    }
}

impl From<Vec<Field>> for Grid {
    fn from(fields: Vec<Field>) -> Grid {
        Grid {
            name: "Grid".into(),
            fields,
        }
    }
}

impl<const N: usize> From<[Field; N]> for Grid {
    fn from(fields: [Field; N]) -> Grid {
        Grid::from(Vec::from(fields))
    }
}

impl Render for Grid {
    fn render<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), Error> {
        let mut start = BytesStart::new("Grid");
        start.push_attribute(("Name", self.name.as_str()));

        writer.write_event(Event::Start(start))?;
        for field in &self.fields {
            field.render(writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new("Grid")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attribute(path: &str) -> Field {
        let dataset = DatasetMeta::new(
            "tmp.h5".into(),
            path.into(),
            vec![2],
            Dtype::Float { bytes: 8 },
        );
        Field::attribute(&dataset, AttributeCenter::Cell).unwrap()
    }

    #[test]
    fn output_order_is_insertion_order() {
        let mut grid = Grid::default();
        grid.push(attribute("/b"));
        grid.push(attribute("/a"));
        grid.push(attribute("/c"));

        let xml = to_xml_string(&grid).unwrap();
        let b = xml.find(r#"Name="/b""#).unwrap();
        let a = xml.find(r#"Name="/a""#).unwrap();
        let c = xml.find(r#"Name="/c""#).unwrap();

        assert!(b < a && a < c);
    }

    #[test]
    fn duplicate_roles_are_not_rejected() {
        let conn = DatasetMeta::new(
            "tmp.h5".into(),
            "/conn".into(),
            vec![2, 4],
            Dtype::Int {
                signed: true,
                bytes: 4,
            },
        );

        let mut grid = Grid::new("Grid");
        grid.push(Field::topology(&conn, ElementType::Quadrilateral).unwrap());
        grid.push(Field::topology(&conn, ElementType::Quadrilateral).unwrap());

        assert_eq!(grid.len(), 2);
        assert!(to_xml_string(&grid).is_ok());
    }
}
