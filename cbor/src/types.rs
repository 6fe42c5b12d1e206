/// The two container types a [`Writer`](crate::Writer) can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContainerKind {
    Array,
    Map,
}

impl ContainerKind {
    pub(crate) fn major(self) -> u8 {
        match self {
            ContainerKind::Array => 4,
            ContainerKind::Map => 5,
        }
    }

    /// Number of data items per declared entry: maps declare key/value pairs.
    pub(crate) fn items_per_entry(self) -> usize {
        match self {
            ContainerKind::Array => 1,
            ContainerKind::Map => 2,
        }
    }
}

impl core::fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ContainerKind::Array => f.write_str("array"),
            ContainerKind::Map => f.write_str("map"),
        }
    }
}

/// A negative integer given by its magnitude.
///
/// `NegativeInteger(m)` denotes `-m`. The magnitude `0` wraps around and
/// denotes `-2^64`, the most negative value CBOR major type 1 can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NegativeInteger(pub u64);

impl NegativeInteger {
    /// The `-2^64` value.
    pub const MIN: NegativeInteger = NegativeInteger(0);

    pub fn new(magnitude: u64) -> Self {
        Self(magnitude)
    }

    pub fn magnitude(self) -> u64 {
        self.0
    }

    pub fn to_i128(self) -> i128 {
        match self.0 {
            0 => -(1i128 << 64),
            m => -(m as i128),
        }
    }

    /// The major type 1 argument: `-1 - value`.
    pub(crate) fn argument(self) -> u64 {
        self.0.wrapping_sub(1)
    }
}

impl TryFrom<i128> for NegativeInteger {
    type Error = i128;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        match value {
            v if v == -(1i128 << 64) => Ok(Self::MIN),
            v if v < 0 && v > -(1i128 << 64) => Ok(Self((-v) as u64)),
            v => Err(v),
        }
    }
}

/// A CBOR simple value (major type 7, no payload).
///
/// Values 24 to 31 are reserved by RFC 8949 but are written as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimpleType(pub u8);

impl SimpleType {
    pub const FALSE: SimpleType = SimpleType(20);
    pub const TRUE: SimpleType = SimpleType(21);
    pub const NULL: SimpleType = SimpleType(22);
    pub const UNDEFINED: SimpleType = SimpleType(23);
}

impl From<u8> for SimpleType {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<bool> for SimpleType {
    fn from(value: bool) -> Self {
        if value { Self::TRUE } else { Self::FALSE }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn negative_integer_bounds() {
        assert_eq!(NegativeInteger(1).to_i128(), -1);
        assert_eq!(NegativeInteger(1).argument(), 0);
        assert_eq!(NegativeInteger::MIN.to_i128(), -18446744073709551616);
        assert_eq!(NegativeInteger::MIN.argument(), u64::MAX);
        assert_eq!(NegativeInteger(u64::MAX).argument(), u64::MAX - 1);
    }

    #[test]
    fn negative_integer_from_i128() {
        assert_eq!(NegativeInteger::try_from(-1i128), Ok(NegativeInteger(1)));
        assert_eq!(
            NegativeInteger::try_from(-18446744073709551616i128),
            Ok(NegativeInteger::MIN)
        );
        assert_eq!(NegativeInteger::try_from(0i128), Err(0));
        assert_eq!(
            NegativeInteger::try_from(-18446744073709551617i128),
            Err(-18446744073709551617)
        );
    }
}
