//! An ordered sequence of [`Grid`] snapshots tagged with time values,
//! rendered as an XDMF temporal collection.

use crate::prelude::*;

/// A time series of mesh snapshots.
///
/// Steps are rendered in push order as one
/// `<Grid CollectionType="Temporal" GridType="Collection">` wrapping a
/// per-step `<Grid>` whose first child is the step's `<Time Value>`. Time
/// values are taken as-is; nothing requires them to be monotonic or unique,
/// that is left to the consuming tool.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    name: String,
    steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq)]
struct Step {
    time: f64,
    grid: Grid,
}

impl TimeSeries {
    pub fn new(name: impl Into<String>) -> TimeSeries {
        TimeSeries {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Append one step. The grid keeps its own name; anything convertible
    /// into a [`Grid`] (such as a `Vec<Field>`) is accepted.
    pub fn push_back(&mut self, time: f64, grid: impl Into<Grid>) {
        self.steps.push(Step {
            time,
            grid: grid.into(),
        });
    }

    /// Append one step built from loose fields, named `Increment <n>` with
    /// `n` the running step count.
    pub fn push_back_fields(&mut self, time: f64, fields: impl IntoIterator<Item = Field>) {
        let mut grid = Grid::new(format!("Increment {}", self.steps.len()));
        grid.extend(fields);
        self.push_back(time, grid);
    }

    /// The per-step `<Grid>` fragments, in push order, without the outer
    /// temporal-collection or document wrapper. Useful for inspection, or
    /// for callers embedding the steps in a document they assemble
    /// themselves.
    pub fn get(&self) -> Result<Vec<String>, Error> {
        self.steps
            .iter()
            .map(|step| {
                let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);
                step.render(&mut writer)?;
                Ok(String::from_utf8(writer.into_inner())?)
            })
            .collect()
    }
}

impl Default for TimeSeries {
    fn default() -> TimeSeries {
        TimeSeries::new("TimeSeries")
    }
}

impl Render for TimeSeries {
    fn render<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), Error> {
        let mut start = BytesStart::new("Grid");
        start.push_attribute(("CollectionType", "Temporal"));
        start.push_attribute(("GridType", "Collection"));
        start.push_attribute(("Name", self.name.as_str()));

        writer.write_event(Event::Start(start))?;
        for step in &self.steps {
            step.render(writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new("Grid")))?;

        Ok(())
    }
}

impl Step {
    /// The step's `<Grid>` with the `<Time>` element injected as its first
    /// child, where XDMF consumers expect it.
    fn render<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), Error> {
        let mut start = BytesStart::new("Grid");
        start.push_attribute(("Name", self.grid.name()));
        writer.write_event(Event::Start(start))?;

        let mut buffer = ryu::Buffer::new();
        let mut time = BytesStart::new("Time");
        time.push_attribute(("Value", buffer.format(self.time)));
        writer.write_event(Event::Empty(time))?;

        for field in self.grid.fields() {
            field.render(writer)?;
        }

        writer.write_event(Event::End(BytesEnd::new("Grid")))?;
        Ok(())
    }
}
