//! Registered CBOR tag numbers (RFC 8949 §3.4, IANA registry) for use with
//! [`Writer::append_tag`](crate::Writer::append_tag).

pub const DATETIME_STRING: u64 = 0; // RFC 3339 date/time text
pub const EPOCH_DATETIME: u64 = 1; // seconds since 1970-01-01T00:00Z
pub const POSITIVE_BIGNUM: u64 = 2;
pub const NEGATIVE_BIGNUM: u64 = 3;
pub const DECIMAL_FRACTION: u64 = 4;
pub const BIGFLOAT: u64 = 5;
pub const EXPECTED_BASE64URL: u64 = 21;
pub const EXPECTED_BASE64: u64 = 22;
pub const EXPECTED_BASE16: u64 = 23;
pub const ENCODED_CBOR: u64 = 24;
pub const URI: u64 = 32;
pub const BASE64URL: u64 = 33;
pub const BASE64: u64 = 34;
pub const REGULAR_EXPRESSION: u64 = 35;
pub const MIME_MESSAGE: u64 = 36;
pub const UUID: u64 = 37;
pub const SELF_DESCRIBE_CBOR: u64 = 55799;
