use super::*;
use thiserror::Error;

/// Errors returned by [`Writer`] operations.
///
/// None of these leave the writer unusable. Bytes already handed to the sink
/// are never rolled back, so after a failed close the output may be
/// truncated or malformed from that point on.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The sink rejected or only partially accepted a write.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// An `end_array` or `end_map` with no container open.
    #[error("No open container to close")]
    NoOpenContainer,

    /// A close call naming a different container type than the one open.
    #[error("Cannot close {requested}, the open container is a {open}")]
    ContainerMismatch {
        open: ContainerKind,
        requested: ContainerKind,
    },

    #[error("Definite length {kind} is short of items: {added}, expected {expected}")]
    TooFewItems {
        kind: ContainerKind,
        expected: usize,
        added: usize,
    },

    #[error("Too many items added to definite length {kind}: {added}, expected {expected}")]
    TooManyItems {
        kind: ContainerKind,
        expected: usize,
        added: usize,
    },
}
