use super::*;

/// Types that write themselves as a single CBOR data item.
pub trait ToCbor {
    fn to_cbor(&self, writer: &mut Writer) -> Result<(), Error>;
}

macro_rules! impl_uint_to_cbor {
    ($($ty:ty),*) => {
        $(
            impl ToCbor for $ty {
                fn to_cbor(&self, writer: &mut Writer) -> Result<(), Error> {
                    writer.append_u64(*self as u64)
                }
            }
        )*
    };
}

impl_uint_to_cbor!(u8, u16, u32, u64, usize);

macro_rules! impl_int_to_cbor {
    ($($ty:ty),*) => {
        $(
            impl ToCbor for $ty {
                fn to_cbor(&self, writer: &mut Writer) -> Result<(), Error> {
                    writer.append_i64(*self as i64)
                }
            }
        )*
    };
}

impl_int_to_cbor!(i8, i16, i32, i64, isize);

impl ToCbor for NegativeInteger {
    fn to_cbor(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.append_negative(*self)
    }
}

impl ToCbor for half::f16 {
    fn to_cbor(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.append_f16(*self)
    }
}

impl ToCbor for f32 {
    fn to_cbor(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.append_f32(*self)
    }
}

impl ToCbor for f64 {
    fn to_cbor(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.append_f64(*self)
    }
}

impl ToCbor for bool {
    fn to_cbor(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.append_bool(*self)
    }
}

impl ToCbor for SimpleType {
    fn to_cbor(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.append_simple(*self)
    }
}

impl ToCbor for str {
    fn to_cbor(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.append_str(self)
    }
}

impl ToCbor for String {
    fn to_cbor(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.append_str(self)
    }
}

impl ToCbor for Text<'_> {
    fn to_cbor(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.append_text(*self)
    }
}

impl ToCbor for [u8] {
    fn to_cbor(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.append_byte_string(self)
    }
}

impl ToCbor for Vec<u8> {
    fn to_cbor(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.append_byte_string(self)
    }
}

impl<const N: usize> ToCbor for [u8; N] {
    fn to_cbor(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.append_byte_string(self)
    }
}

impl<T> ToCbor for Option<T>
where
    T: ToCbor,
{
    fn to_cbor(&self, writer: &mut Writer) -> Result<(), Error> {
        match self {
            Some(value) => value.to_cbor(writer),
            None => writer.append_undefined(),
        }
    }
}

impl<T> ToCbor for &T
where
    T: ToCbor + ?Sized,
{
    fn to_cbor(&self, writer: &mut Writer) -> Result<(), Error> {
        (**self).to_cbor(writer)
    }
}

/// Encodes a single value into a new buffer.
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>, Error>
where
    T: ToCbor + ?Sized,
{
    let mut data = Vec::new();
    Writer::with_buffer(&mut data).append(value)?;
    Ok(data)
}
