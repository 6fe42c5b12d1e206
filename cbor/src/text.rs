use super::*;
use alloc::borrow::Cow;

/// A text string argument tagged with its source encoding.
///
/// Everything is written as a CBOR text string (major type 3); encodings
/// other than UTF-8 are transcoded first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text<'a> {
    Utf8(&'a str),
    /// Bytes the caller asserts are UTF-8. Written unchecked.
    UnvalidatedUtf8(&'a [u8]),
    /// ISO 8859-1. Pure ASCII input is written without conversion.
    Latin1(&'a [u8]),
    /// UTF-16 code units. Unpaired surrogates become U+FFFD.
    Utf16(&'a [u16]),
}

impl<'a> Text<'a> {
    /// The UTF-8 bytes to write, converting only when needed.
    pub fn to_utf8(self) -> Cow<'a, [u8]> {
        match self {
            Text::Utf8(s) => Cow::Borrowed(s.as_bytes()),
            Text::UnvalidatedUtf8(b) => Cow::Borrowed(b),
            Text::Latin1(b) if b.is_ascii() => Cow::Borrowed(b),
            Text::Latin1(b) => Cow::Owned(latin1_to_utf8(b).into_bytes()),
            Text::Utf16(units) => Cow::Owned(utf16_to_utf8(units).into_bytes()),
        }
    }
}

impl<'a> From<&'a str> for Text<'a> {
    fn from(value: &'a str) -> Self {
        Text::Utf8(value)
    }
}

fn latin1_to_utf8(b: &[u8]) -> String {
    b.iter().map(|&c| c as char).collect()
}

fn utf16_to_utf8(units: &[u16]) -> String {
    char::decode_utf16(units.iter().copied())
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ascii_latin1_is_borrowed() {
        assert!(matches!(Text::Latin1(b"plain").to_utf8(), Cow::Borrowed(b"plain")));
    }

    #[test]
    fn latin1_high_bytes() {
        assert_eq!(*Text::Latin1(b"caf\xe9").to_utf8(), *"café".as_bytes());
        assert_eq!(*Text::Latin1(b"\xff").to_utf8(), [0xC3, 0xBF]);
    }

    #[test]
    fn utf16_pairs_and_lone_surrogates() {
        let units: Vec<u16> = "a\u{10437}é".encode_utf16().collect();
        assert_eq!(*Text::Utf16(&units).to_utf8(), *"a\u{10437}é".as_bytes());
        assert_eq!(*Text::Utf16(&[0xD800, 0x41]).to_utf8(), *"\u{FFFD}A".as_bytes());
    }
}
