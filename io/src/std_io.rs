use super::*;

/// Adapts a [`std::io::Write`] implementation to a [`Sink`].
///
/// Each sink write is a single `write` on the inner writer; a partial write
/// is reported as-is and failures are reported by kind.
pub struct IoSink<W>(W);

impl<W: std::io::Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self(inner)
    }

    pub fn get_ref(&self) -> &W {
        &self.0
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.0
    }

    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W: std::io::Write> Sink for IoSink<W> {
    fn write(&mut self, data: &[u8]) -> Result<usize, Error> {
        self.0.write(data).map_err(|e| Error::Std(e.kind()))
    }
}
