/*!
Byte sinks for the streaming CBOR writer.

A [`Sink`] is an append-only destination: every call to [`Sink::write`]
either accepts some prefix of the offered bytes or fails. Callers that need
all-or-nothing semantics compare the returned count against the request.
*/
#![no_std]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

use alloc::vec::Vec;
use thiserror::Error;

mod buffer;
mod embedded;

#[cfg(feature = "std")]
mod std_io;

pub use buffer::{BufferSink, OpenMode};
pub use embedded::EmbeddedSink;

#[cfg(feature = "std")]
pub use std_io::IoSink;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Short write: {written} of {requested} bytes accepted")]
    ShortWrite { written: usize, requested: usize },

    #[error("Sink is not open for writing")]
    NotWritable,

    #[error("I/O error: {0:?}")]
    Io(embedded_io::ErrorKind),

    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Std(std::io::ErrorKind),
}

/// An append-only byte destination.
pub trait Sink {
    /// Writes `data`, returning the number of bytes accepted.
    fn write(&mut self, data: &[u8]) -> Result<usize, Error>;
}

impl<S> Sink for &mut S
where
    S: Sink + ?Sized,
{
    fn write(&mut self, data: &[u8]) -> Result<usize, Error> {
        (**self).write(data)
    }
}

impl Sink for Vec<u8> {
    fn write(&mut self, data: &[u8]) -> Result<usize, Error> {
        self.extend_from_slice(data);
        Ok(data.len())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn vec_sink_appends() {
        let mut v = Vec::new();
        assert_eq!(v.write(&[1, 2]), Ok(2));
        assert_eq!((&mut v).write(&[3]), Ok(1));
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn vec_sink_accepts_empty() {
        let mut v = Vec::new();
        assert_eq!(v.write(&[]), Ok(0));
        assert!(v.is_empty());
    }
}
