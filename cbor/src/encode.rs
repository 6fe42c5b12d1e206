/*!
Primitive CBOR item encoding.

Each function writes exactly one data item (or one container header or
break) through an [`Emit`] funnel and accounts for it against the [`Cursor`]
of the enclosing container. Nothing here knows about nesting beyond the
single cursor it is handed.
*/

use super::*;

const BREAK: u8 = 0xFF;
const INDEFINITE: u8 = 31;

/// Where bytes go. Implemented by the writer's destination.
pub(crate) trait Emit {
    fn emit(&mut self, data: &[u8]) -> Result<(), Error>;
}

/// Write position state: the container being filled and how many items it
/// has received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    kind: Option<ContainerKind>,
    expected: Option<usize>,
    added: usize,
}

impl Cursor {
    pub(crate) const TOP_LEVEL: Cursor = Cursor {
        kind: None,
        expected: None,
        added: 0,
    };

    /// The open container, or `None` at top level.
    pub(crate) fn kind(&self) -> Option<ContainerKind> {
        self.kind
    }

    #[cfg(test)]
    pub(crate) fn added(&self) -> usize {
        self.added
    }

    fn item(&mut self) {
        self.added = self.added.saturating_add(1);
    }
}

/// Shortest-form initial byte plus argument, at most 9 bytes.
fn header(major: u8, val: u64, buf: &mut [u8; 9]) -> &[u8] {
    let major = major << 5;
    if val < 24 {
        buf[0] = major | val as u8;
        &buf[..1]
    } else if val <= u8::MAX as u64 {
        buf[0] = major | 24;
        buf[1] = val as u8;
        &buf[..2]
    } else if val <= u16::MAX as u64 {
        buf[0] = major | 25;
        buf[1..3].copy_from_slice(&(val as u16).to_be_bytes());
        &buf[..3]
    } else if val <= u32::MAX as u64 {
        buf[0] = major | 26;
        buf[1..5].copy_from_slice(&(val as u32).to_be_bytes());
        &buf[..5]
    } else {
        buf[0] = major | 27;
        buf[1..9].copy_from_slice(&val.to_be_bytes());
        &buf[..9]
    }
}

fn emit_uint_minor<E>(out: &mut E, major: u8, val: u64) -> Result<(), Error>
where
    E: Emit + ?Sized,
{
    let mut buf = [0u8; 9];
    out.emit(header(major, val, &mut buf))
}

pub(crate) fn encode_uint<E>(out: &mut E, cursor: &mut Cursor, val: u64) -> Result<(), Error>
where
    E: Emit + ?Sized,
{
    cursor.item();
    emit_uint_minor(out, 0, val)
}

/// `arg` is the raw major type 1 argument, i.e. `-1 - value`.
pub(crate) fn encode_negative<E>(out: &mut E, cursor: &mut Cursor, arg: u64) -> Result<(), Error>
where
    E: Emit + ?Sized,
{
    cursor.item();
    emit_uint_minor(out, 1, arg)
}

pub(crate) fn encode_int<E>(out: &mut E, cursor: &mut Cursor, val: i64) -> Result<(), Error>
where
    E: Emit + ?Sized,
{
    if val >= 0 {
        encode_uint(out, cursor, val as u64)
    } else {
        encode_negative(out, cursor, !(val as u64))
    }
}

fn encode_string<E>(out: &mut E, cursor: &mut Cursor, major: u8, data: &[u8]) -> Result<(), Error>
where
    E: Emit + ?Sized,
{
    cursor.item();
    emit_uint_minor(out, major, data.len() as u64)?;
    if data.is_empty() {
        Ok(())
    } else {
        out.emit(data)
    }
}

pub(crate) fn encode_bytes<E>(out: &mut E, cursor: &mut Cursor, data: &[u8]) -> Result<(), Error>
where
    E: Emit + ?Sized,
{
    encode_string(out, cursor, 2, data)
}

/// `data` is written as-is; it is not checked for UTF-8 validity.
pub(crate) fn encode_text<E>(out: &mut E, cursor: &mut Cursor, data: &[u8]) -> Result<(), Error>
where
    E: Emit + ?Sized,
{
    encode_string(out, cursor, 3, data)
}

/// Tags prefix the next item and are not counted as items themselves.
pub(crate) fn encode_tag<E>(out: &mut E, tag: u64) -> Result<(), Error>
where
    E: Emit + ?Sized,
{
    emit_uint_minor(out, 6, tag)
}

pub(crate) fn encode_simple<E>(out: &mut E, cursor: &mut Cursor, val: u8) -> Result<(), Error>
where
    E: Emit + ?Sized,
{
    cursor.item();
    if val < 24 {
        out.emit(&[(7 << 5) | val])
    } else {
        out.emit(&[(7 << 5) | 24, val])
    }
}

pub(crate) fn encode_f16<E>(out: &mut E, cursor: &mut Cursor, val: half::f16) -> Result<(), Error>
where
    E: Emit + ?Sized,
{
    cursor.item();
    let b = val.to_be_bytes();
    out.emit(&[(7 << 5) | 25, b[0], b[1]])
}

pub(crate) fn encode_f32<E>(out: &mut E, cursor: &mut Cursor, val: f32) -> Result<(), Error>
where
    E: Emit + ?Sized,
{
    cursor.item();
    let mut buf: [u8; 5] = [(7 << 5) | 26, 0, 0, 0, 0];
    buf[1..].copy_from_slice(&val.to_be_bytes());
    out.emit(&buf)
}

pub(crate) fn encode_f64<E>(out: &mut E, cursor: &mut Cursor, val: f64) -> Result<(), Error>
where
    E: Emit + ?Sized,
{
    cursor.item();
    let mut buf: [u8; 9] = [(7 << 5) | 27, 0, 0, 0, 0, 0, 0, 0, 0];
    buf[1..].copy_from_slice(&val.to_be_bytes());
    out.emit(&buf)
}

/// Writes a container header into `parent` and returns the child cursor.
///
/// `len` is the declared entry count (pairs for maps), `None` for indefinite
/// length. The caller must have checked that the item count implied by `len`
/// fits in `usize`.
pub(crate) fn open_container<E>(
    out: &mut E,
    parent: &mut Cursor,
    kind: ContainerKind,
    len: Option<(u64, usize)>,
) -> (Cursor, Result<(), Error>)
where
    E: Emit + ?Sized,
{
    parent.item();
    let child = Cursor {
        kind: Some(kind),
        expected: len.map(|(_, items)| items),
        added: 0,
    };
    let r = match len {
        Some((count, _)) => emit_uint_minor(out, kind.major(), count),
        None => out.emit(&[(kind.major() << 5) | INDEFINITE]),
    };
    (child, r)
}

/// Finishes the container described by `child`.
///
/// Indefinite length containers get a break byte. Definite length ones
/// produce no bytes and fail if the item count does not match.
pub(crate) fn close_container<E>(out: &mut E, child: &Cursor) -> Result<(), Error>
where
    E: Emit + ?Sized,
{
    let Some(kind) = child.kind else {
        return Err(Error::NoOpenContainer);
    };
    match child.expected {
        None => out.emit(&[BREAK]),
        Some(expected) if child.added < expected => Err(Error::TooFewItems {
            kind,
            expected,
            added: child.added,
        }),
        Some(expected) if child.added > expected => Err(Error::TooManyItems {
            kind,
            expected,
            added: child.added,
        }),
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
impl Emit for Vec<u8> {
    fn emit(&mut self, data: &[u8]) -> Result<(), Error> {
        self.extend_from_slice(data);
        Ok(())
    }
}
