/*!
The streaming writer.

A [`Writer`] holds one current [`Cursor`] and a stack of the cursors of the
enclosing containers. Opening a container pushes the parent cursor and
makes the new container current; closing pops it back.
*/

use super::*;
use crate::io::{BufferSink, OpenMode, Sink};
use crate::encode::{Cursor, Emit};

enum Destination<'a> {
    Stream(&'a mut dyn Sink),
    Buffer(BufferSink<'a>),
}

impl<'a> Destination<'a> {
    fn sink(&mut self) -> &mut (dyn Sink + 'a) {
        match self {
            Destination::Stream(s) => &mut **s,
            Destination::Buffer(b) => b,
        }
    }
}

impl Emit for Option<Destination<'_>> {
    fn emit(&mut self, data: &[u8]) -> Result<(), Error> {
        // Unbound writers discard
        let Some(dest) = self else {
            return Ok(());
        };
        let written = dest.sink().write(data).inspect_err(|e| {
            debug!("CBOR sink write failed: {e}");
        })?;
        if written < data.len() {
            debug!("CBOR sink accepted {written} of {} bytes", data.len());
            return Err(io::Error::ShortWrite {
                written,
                requested: data.len(),
            }
            .into());
        }
        Ok(())
    }
}

/// Item count implied by `count` entries of `kind`, if it can be tracked.
fn entry_items(kind: ContainerKind, count: u64) -> Option<usize> {
    usize::try_from(count)
        .ok()?
        .checked_mul(kind.items_per_entry())
        .filter(|&items| items < usize::MAX)
}

/// A one-pass CBOR writer.
///
/// Every `append_*` call serializes one data item immediately into the bound
/// sink, inside whichever container is currently open. The writer performs
/// no buffering of its own and does not check that containers are closed
/// before it is dropped.
pub struct Writer<'a> {
    dest: Option<Destination<'a>>,
    cursor: Cursor,
    stack: Vec<Cursor>,
    options: Options,
    diagnostics: Box<dyn Diagnostics + 'a>,
}

impl Default for Writer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Writer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Writer")
            .field("bound", &self.dest.is_some())
            .field("cursor", &self.cursor)
            .field("depth", &self.stack.len())
            .field("options", &self.options)
            .finish()
    }
}

impl<'a> Writer<'a> {
    /// A writer with no destination. Appends succeed and are discarded.
    pub fn new() -> Self {
        Self {
            dest: None,
            cursor: Cursor::TOP_LEVEL,
            stack: Vec::new(),
            options: Options::default(),
            diagnostics: Box::new(TracingDiagnostics),
        }
    }

    /// Writes into `sink`, which must stay open for the writer's lifetime.
    pub fn with_sink(sink: &'a mut dyn Sink) -> Self {
        let mut w = Self::new();
        w.set_destination(Some(sink));
        w
    }

    /// Appends to `buffer` through an internal adapter owned by the writer.
    pub fn with_buffer(buffer: &'a mut Vec<u8>) -> Self {
        let mut w = Self::new();
        w.set_buffer(buffer);
        w
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn with_diagnostics<D>(mut self, diagnostics: D) -> Self
    where
        D: Diagnostics + 'a,
    {
        self.diagnostics = Box::new(diagnostics);
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The sink currently written to, if any.
    pub fn destination(&mut self) -> Option<&mut (dyn Sink + 'a)> {
        self.dest.as_mut().map(|d| d.sink())
    }

    /// Rebinds to `sink`, or unbinds with `None`.
    ///
    /// Any internally owned buffer adapter is dropped first. Open containers
    /// are unaffected and continue in the new destination.
    pub fn set_destination(&mut self, sink: Option<&'a mut dyn Sink>) {
        self.dest = None;
        self.dest = sink.map(Destination::Stream);
    }

    /// Rebinds to a new internally owned adapter over `buffer`.
    pub fn set_buffer(&mut self, buffer: &'a mut Vec<u8>) {
        self.dest = None;
        self.dest = Some(Destination::Buffer(BufferSink::open(
            buffer,
            OpenMode::Append,
        )));
    }

    /// Number of containers currently open.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_top_level(&self) -> bool {
        self.stack.is_empty()
    }

    /// The innermost open container.
    pub fn current_container(&self) -> Option<ContainerKind> {
        self.cursor.kind()
    }

    pub fn append<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: ToCbor + ?Sized,
    {
        value.to_cbor(self)
    }

    pub fn append_u64(&mut self, value: u64) -> Result<(), Error> {
        encode::encode_uint(&mut self.dest, &mut self.cursor, value)
    }

    pub fn append_i64(&mut self, value: i64) -> Result<(), Error> {
        encode::encode_int(&mut self.dest, &mut self.cursor, value)
    }

    pub fn append_negative(&mut self, value: NegativeInteger) -> Result<(), Error> {
        encode::encode_negative(&mut self.dest, &mut self.cursor, value.argument())
    }

    /// Writes `data` as one definite-length byte string.
    pub fn append_byte_string(&mut self, data: &[u8]) -> Result<(), Error> {
        encode::encode_bytes(&mut self.dest, &mut self.cursor, data)
    }

    /// Writes `data` as one definite-length text string.
    ///
    /// The bytes are not checked: passing anything but UTF-8 produces an
    /// invalid text string.
    pub fn append_text_string(&mut self, data: &[u8]) -> Result<(), Error> {
        encode::encode_text(&mut self.dest, &mut self.cursor, data)
    }

    pub fn append_str(&mut self, value: &str) -> Result<(), Error> {
        self.append_text_string(value.as_bytes())
    }

    pub fn append_latin1(&mut self, value: &[u8]) -> Result<(), Error> {
        self.append_text(Text::Latin1(value))
    }

    pub fn append_utf16(&mut self, value: &[u16]) -> Result<(), Error> {
        self.append_text(Text::Utf16(value))
    }

    pub fn append_text(&mut self, value: Text<'_>) -> Result<(), Error> {
        self.append_text_string(&value.to_utf8())
    }

    /// Writes a tag. The caller must follow it with exactly one data item.
    pub fn append_tag(&mut self, tag: u64) -> Result<(), Error> {
        encode::encode_tag(&mut self.dest, tag)
    }

    pub fn append_simple(&mut self, value: SimpleType) -> Result<(), Error> {
        encode::encode_simple(&mut self.dest, &mut self.cursor, value.0)
    }

    pub fn append_bool(&mut self, value: bool) -> Result<(), Error> {
        self.append_simple(value.into())
    }

    pub fn append_null(&mut self) -> Result<(), Error> {
        self.append_simple(SimpleType::NULL)
    }

    pub fn append_undefined(&mut self) -> Result<(), Error> {
        self.append_simple(SimpleType::UNDEFINED)
    }

    pub fn append_f16(&mut self, value: half::f16) -> Result<(), Error> {
        encode::encode_f16(&mut self.dest, &mut self.cursor, value)
    }

    pub fn append_f32(&mut self, value: f32) -> Result<(), Error> {
        encode::encode_f32(&mut self.dest, &mut self.cursor, value)
    }

    pub fn append_f64(&mut self, value: f64) -> Result<(), Error> {
        encode::encode_f64(&mut self.dest, &mut self.cursor, value)
    }

    /// Writes `values` as a definite-length array.
    pub fn append_slice<T>(&mut self, values: &[T]) -> Result<(), Error>
    where
        T: ToCbor,
    {
        self.write_array(Some(values.len() as u64), |w| {
            values.iter().try_for_each(|v| w.append(v))
        })
    }

    /// Opens an array of `count` items, or of indefinite length for `None`.
    ///
    /// `Some(u64::MAX)` also means indefinite length. Any other count too
    /// large to track on this platform is written as indefinite length
    /// instead, and reported as a diagnostic.
    pub fn start_array(&mut self, count: Option<u64>) -> Result<(), Error> {
        self.start_container(ContainerKind::Array, count)
    }

    /// Opens a map of `count` key/value pairs, or of indefinite length for
    /// `None`.
    pub fn start_map(&mut self, count: Option<u64>) -> Result<(), Error> {
        self.start_container(ContainerKind::Map, count)
    }

    pub fn end_array(&mut self) -> Result<(), Error> {
        self.end_container(ContainerKind::Array)
    }

    pub fn end_map(&mut self) -> Result<(), Error> {
        self.end_container(ContainerKind::Map)
    }

    /// Opens an array, runs `f` to fill it, then closes it.
    ///
    /// The array is closed even if `f` fails; the first error is returned.
    pub fn write_array<F>(&mut self, count: Option<u64>, f: F) -> Result<(), Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Error>,
    {
        self.write_container(ContainerKind::Array, count, f)
    }

    /// Opens a map, runs `f` to fill it, then closes it.
    pub fn write_map<F>(&mut self, count: Option<u64>, f: F) -> Result<(), Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Error>,
    {
        self.write_container(ContainerKind::Map, count, f)
    }

    fn write_container<F>(&mut self, kind: ContainerKind, count: Option<u64>, f: F) -> Result<(), Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Error>,
    {
        let r = self.start_container(kind, count).and_then(|_| f(self));
        let end = self.end_container(kind);
        r.and(end)
    }

    fn start_container(&mut self, kind: ContainerKind, count: Option<u64>) -> Result<(), Error> {
        let count = count.filter(|&count| count != u64::MAX);
        let len = count.and_then(|count| match entry_items(kind, count) {
            Some(items) => Some((count, items)),
            None => {
                self.diagnostics.report(&Diagnostic::LengthDowngraded {
                    kind,
                    requested: count,
                });
                None
            }
        });

        // The container counts as open even if its header could not be
        // written, so the caller's matching end call stays balanced
        let (child, r) = encode::open_container(&mut self.dest, &mut self.cursor, kind, len);
        self.stack.push(core::mem::replace(&mut self.cursor, child));
        r
    }

    fn end_container(&mut self, requested: ContainerKind) -> Result<(), Error> {
        let r = self.close_innermost(requested);
        match r {
            Ok(()) | Err(Error::Io(_)) => {}
            Err(e) => self.diagnostics.report(&Diagnostic::CloseFailed(e)),
        }
        r
    }

    fn close_innermost(&mut self, requested: ContainerKind) -> Result<(), Error> {
        if self.options.check_container_kind
            && let Some(open) = self.cursor.kind()
            && open != requested
        {
            return Err(Error::ContainerMismatch { open, requested });
        }
        // One saved parent per open container, so an empty stack means top level
        let Some(parent) = self.stack.pop() else {
            return Err(Error::NoOpenContainer);
        };
        let child = core::mem::replace(&mut self.cursor, parent);
        encode::close_container(&mut self.dest, &child)
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> &Cursor {
        &self.cursor
    }
}
