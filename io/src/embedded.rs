use super::*;

/// Adapts an [`embedded_io::Write`] implementation to a [`Sink`].
///
/// Each sink write is a single `write` on the inner writer; a partial write
/// is reported as-is.
pub struct EmbeddedSink<W>(W);

impl<W: embedded_io::Write> EmbeddedSink<W> {
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

impl<W: embedded_io::Write> Sink for EmbeddedSink<W> {
    fn write(&mut self, data: &[u8]) -> Result<usize, Error> {
        self.0
            .write(data)
            .map_err(|e| Error::Io(embedded_io::Error::kind(&e)))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Accepts nothing, without failing.
    struct Stalled;

    impl embedded_io::ErrorType for Stalled {
        type Error = core::convert::Infallible;
    }

    impl embedded_io::Write for Stalled {
        fn write(&mut self, _buf: &[u8]) -> Result<usize, Self::Error> {
            Ok(0)
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn writes_into_slice() {
        let mut storage = [0u8; 4];
        let mut sink = EmbeddedSink::new(&mut storage[..]);
        assert_eq!(sink.write(&[1, 2, 3]), Ok(3));
        assert_eq!(storage[..3], [1, 2, 3]);
    }

    #[test]
    fn partial_write_is_reported() {
        let mut storage = [0u8; 2];
        let mut sink = EmbeddedSink::new(&mut storage[..]);
        assert_eq!(sink.write(&[1, 2, 3]), Ok(2));
        assert!(matches!(sink.write(&[4]), Err(Error::Io(_))));
        assert_eq!(storage, [1, 2]);
    }

    #[test]
    fn stalled_writer_does_not_panic() {
        let mut sink = EmbeddedSink::new(Stalled);
        assert_eq!(sink.write(&[1, 2, 3]), Ok(0));
    }
}
