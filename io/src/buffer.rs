use super::*;

/// How a [`BufferSink`] treats existing buffer content when opened.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Keep existing content and write after it.
    #[default]
    Append,
    /// Discard existing content before writing.
    Truncate,
}

/// A sink writing into a borrowed growable buffer.
///
/// Writes are unbuffered: each accepted write is visible in the buffer
/// immediately.
#[derive(Debug)]
pub struct BufferSink<'a> {
    buffer: &'a mut Vec<u8>,
    open: bool,
}

impl<'a> BufferSink<'a> {
    pub fn open(buffer: &'a mut Vec<u8>, mode: OpenMode) -> Self {
        if mode == OpenMode::Truncate {
            buffer.clear();
        }
        Self { buffer, open: true }
    }

    /// Stops accepting writes. The buffer keeps everything written so far.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        self.buffer
    }
}

impl Sink for BufferSink<'_> {
    fn write(&mut self, data: &[u8]) -> Result<usize, Error> {
        if !self.open {
            return Err(Error::NotWritable);
        }
        self.buffer.extend_from_slice(data);
        Ok(data.len())
    }
}
