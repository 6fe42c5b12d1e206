use cbor_stream::{ContainerKind, NegativeInteger, SimpleType, Text, Writer};

/// Interprets `data` as a sequence of writer operations and runs them.
///
/// Returns the encoded bytes and whether every container close succeeded.
pub fn run(data: &[u8]) -> (Vec<u8>, bool) {
    let mut out = Vec::new();
    let mut balanced = true;
    let mut w = Writer::with_buffer(&mut out);
    let mut data = data;

    while let Some((&op, rest)) = data.split_first() {
        data = rest;
        let arg = take_u64(&mut data);
        let r = match op % 14 {
            0 => w.append_u64(arg),
            1 => w.append_i64(arg as i64),
            2 => w.append_negative(NegativeInteger(arg)),
            3 => w.append_byte_string(take_slice(&mut data, arg)),
            4 => w.append_text(Text::Latin1(take_slice(&mut data, arg))),
            5 => w.append_tag(arg),
            6 => w.append_simple(SimpleType(arg as u8)),
            7 => w.append_f32(f32::from_bits(arg as u32)),
            8 => w.append_f64(f64::from_bits(arg)),
            9 => w.start_array((arg & 1 == 0).then_some(arg >> 1)),
            10 => w.start_map((arg & 1 == 0).then_some(arg >> 1)),
            11 => w.end_array(),
            12 => w.end_map(),
            _ => w.append_f16(half::f16::from_bits(arg as u16)),
        };
        if r.is_err() && matches!(op % 14, 11 | 12) {
            balanced = false;
        }
    }

    while !w.is_top_level() {
        let r = match w.current_container() {
            Some(ContainerKind::Map) => w.end_map(),
            _ => w.end_array(),
        };
        balanced &= r.is_ok();
    }
    drop(w);
    (out, balanced)
}

fn take_u64(data: &mut &[u8]) -> u64 {
    let n = data.len().min(8);
    let (head, rest) = data.split_at(n);
    *data = rest;
    head.iter().fold(0, |acc, &b| (acc << 8) | b as u64)
}

fn take_slice<'a>(data: &mut &'a [u8], len: u64) -> &'a [u8] {
    let n = data.len().min((len & 0xFF) as usize);
    let (head, rest) = data.split_at(n);
    *data = rest;
    head
}
