//! Final document assembly: wrap a [`Grid`] or [`TimeSeries`] in the XDMF
//! document skeleton and write it to disk. Only the terminal [`write`] call
//! performs I/O; everything up to it is in-memory composition.

use crate::prelude::*;

use log::debug;

use std::fs::File;
use std::io::BufWriter;

const XDMF_VERSION: &str = "3.0";

/// Rendering of one XDMF element (and its children) into an XML writer.
///
/// Implemented by [`Field`], `[Field]`, [`Grid`], and [`TimeSeries`]; the
/// latter two are the document contents accepted by [`write`].
pub trait Render {
    fn render<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), Error>;
}

/// Render a value to an indented XML string, without the surrounding
/// document skeleton.
pub fn to_xml_string<R: Render + ?Sized>(data: &R) -> Result<String, Error> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);
    data.render(&mut writer)?;
    Ok(String::from_utf8(writer.into_inner())?)
}

/// Write a complete XDMF file to `path`: the XML declaration, the
/// `<Xdmf><Domain>` wrapper, the rendered content, and matching closing
/// tags. Creates or overwrites the file; the referenced HDF5 file is never
/// touched.
pub fn write<R: Render + ?Sized>(path: impl AsRef<Path>, data: &R) -> Result<(), Error> {
    let path = path.as_ref();
    debug!("writing xdmf descriptor to `{}`", path.display());

    let file = File::create(path)?;
    let mut writer = Writer::new_with_indent(BufWriter::new(file), b' ', 4);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", None, None)))?;

    let mut xdmf = BytesStart::new("Xdmf");
    xdmf.push_attribute(("Version", XDMF_VERSION));
    writer.write_event(Event::Start(xdmf))?;
    writer.write_event(Event::Start(BytesStart::new("Domain")))?;

    data.render(&mut writer)?;

    writer.write_event(Event::End(BytesEnd::new("Domain")))?;
    writer.write_event(Event::End(BytesEnd::new("Xdmf")))?;

    writer.into_inner().flush()?;

    Ok(())
}

/// A [`Grid`] or [`TimeSeries`] bound to the file it will be written to.
///
/// `Scoped` dereferences to the wrapped builder, so fields and steps are
/// pushed through the usual methods. [`finish`](Scoped::finish) consumes the
/// guard and performs the single `write` call; returning early (or
/// unwinding) before `finish` writes nothing, so a failed composition never
/// leaves a partial file behind.
#[derive(Debug)]
pub struct Scoped<T> {
    inner: T,
    target: PathBuf,
}

impl<T> Scoped<T> {
    pub fn new(target: impl AsRef<Path>, inner: T) -> Scoped<T> {
        Scoped {
            inner,
            target: target.as_ref().to_path_buf(),
        }
    }

    /// the path bound at construction time
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Drop the bound path and recover the builder without writing.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Render> Scoped<T> {
    /// Write the composed document to the bound path.
    pub fn finish(self) -> Result<(), Error> {
        write(&self.target, &self.inner)
    }
}

impl<T> std::ops::Deref for Scoped<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> std::ops::DerefMut for Scoped<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}
