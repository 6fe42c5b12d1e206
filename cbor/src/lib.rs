/*!
A one-pass streaming CBOR writer.

Items are serialized straight onto a byte [`io::Sink`] as they are appended;
no document tree is built. Arrays and maps are opened and closed explicitly,
and the writer keeps only a small stack of saved cursors so that
definite-length containers can be checked for the promised item count when
they are closed.

```
use cbor_stream::Writer;

let mut out = Vec::new();
let mut w = Writer::with_buffer(&mut out);
w.start_map(Some(1)).unwrap();
w.append_str("answer").unwrap();
w.append_u64(42).unwrap();
w.end_map().unwrap();
drop(w);
assert_eq!(out, b"\xa1\x66answer\x18\x2a");
```

The writer does not canonicalize: float widths, map key order and tag
pairing are the caller's responsibility. Integers are always written in the
shortest form.
*/
#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

use alloc::{boxed::Box, string::String, vec::Vec};
use tracing::*;

mod diagnostics;
mod encode;
mod error;
mod options;
mod text;
mod to_cbor;
mod types;
mod writer;

pub mod tags;

pub use cbor_stream_io as io;

pub use diagnostics::{Diagnostic, Diagnostics, TracingDiagnostics};
pub use error::Error;
pub use options::Options;
pub use text::Text;
pub use to_cbor::{ToCbor, to_vec};
pub use types::{ContainerKind, NegativeInteger, SimpleType};
pub use writer::Writer;
