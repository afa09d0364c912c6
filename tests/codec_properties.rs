use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use varint_codec::encoding::{
    decode_i32_with_len, decode_i64_with_len, decode_u32_with_len, decode_u64_with_len,
    encoded_len_u64,
};
use varint_codec::{
    VarintReadExt, VarintWriteExt, decode_i32_from_slice, decode_u32_from_slice, encode_i32,
    encode_i32_to_vec, encode_u32, encode_u32_to_vec,
};

/// Every 7-bit group boundary of a 64-bit value, with its neighbours.
fn group_boundaries() -> Vec<u64> {
    let mut values = vec![0, 1, u64::MAX - 1, u64::MAX];
    for groups in 1..10 {
        let boundary = 1u64 << (7 * groups);
        values.extend([boundary - 1, boundary, boundary + 1]);
    }
    values.extend([1 << 63, (1 << 63) - 1]);
    values
}

fn sweep_u32() -> impl Iterator<Item = u32> {
    (0..=u32::MAX)
        .step_by(65_521)
        .chain(0..=1024)
        .chain(u32::MAX - 1024..=u32::MAX)
}

#[test]
fn unsigned_32_spot_encodings() {
    let cases: [(u32, &[u8]); 5] = [
        (0, &[0x00]),
        (127, &[0x7f]),
        (128, &[0x80, 0x01]),
        (300, &[0xac, 0x02]),
        (u32::MAX, &[0xff, 0xff, 0xff, 0xff, 0x0f]),
    ];
    for (value, expected) in cases {
        let mut sink = Vec::new();
        sink.write_unsigned_var_int(value);
        assert_eq!(sink, expected, "encoding of {value}");
        let mut input: &[u8] = &sink;
        assert_eq!(input.read_unsigned_var_int().unwrap(), value);
        assert!(input.is_empty());
    }
}

#[test]
fn signed_32_spot_encodings() {
    let cases: [(i32, &[u8]); 5] = [
        (0, &[0x00]),
        (-1, &[0x01]),
        (1, &[0x02]),
        (-2, &[0x03]),
        (2, &[0x04]),
    ];
    for (value, expected) in cases {
        assert_eq!(encode_i32_to_vec(value), expected, "encoding of {value}");
    }
    for value in [i32::MIN, i32::MAX] {
        let mut sink = Vec::new();
        sink.write_signed_var_int(value);
        assert_eq!(sink.len(), 5);
        let mut input: &[u8] = &sink;
        assert_eq!(input.read_signed_var_int().unwrap(), value);
    }
}

#[test]
fn unsigned_32_round_trip_sweep() -> Result<()> {
    for value in sweep_u32() {
        let bytes = encode_u32_to_vec(value);
        assert_eq!(decode_u32_with_len(&bytes)?, (value, bytes.len()));
        let mut input: &[u8] = &bytes;
        assert_eq!(input.read_unsigned_var_int()?, value);
    }
    Ok(())
}

#[test]
fn signed_32_round_trip_sweep() -> Result<()> {
    for raw in sweep_u32() {
        let value = raw as i32;
        let bytes = encode_i32_to_vec(value);
        assert_eq!(decode_i32_with_len(&bytes)?, (value, bytes.len()));
        assert_eq!(decode_i32_from_slice(&bytes)?, value);
    }
    Ok(())
}

#[test]
fn sixty_four_bit_round_trip() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(0x5eed_cafe);
    let mut values = group_boundaries();
    for _ in 0..20_000 {
        let shift = rng.gen_range(0..64);
        values.push(rng.r#gen::<u64>() >> shift);
    }

    for value in values {
        let mut sink = Vec::new();
        let written = sink.write_unsigned_var_long(value);
        assert_eq!(written, encoded_len_u64(value));
        assert_eq!(decode_u64_with_len(&sink)?, (value, written));

        let signed = value as i64;
        let mut sink = Vec::new();
        sink.write_signed_var_long(signed);
        assert_eq!(decode_i64_with_len(&sink)?, (signed, sink.len()));
        let mut input: &[u8] = &sink;
        assert_eq!(input.read_signed_var_long()?, signed);
    }
    Ok(())
}

#[test]
fn sixty_four_bit_extremes() -> Result<()> {
    let mut sink = Vec::new();
    sink.write_unsigned_var_long(u64::MAX);
    sink.write_signed_var_long(i64::MIN);
    sink.write_signed_var_long(i64::MAX);
    assert_eq!(sink.len(), 30);

    let mut input: &[u8] = &sink;
    assert_eq!(input.read_unsigned_var_long()?, u64::MAX);
    assert_eq!(input.read_signed_var_long()?, i64::MIN);
    assert_eq!(input.read_signed_var_long()?, i64::MAX);
    assert!(input.is_empty());
    Ok(())
}

#[test]
fn encoded_length_is_monotonic() {
    let mut values = group_boundaries();
    values.sort_unstable();
    let lengths: Vec<usize> = values.iter().map(|&v| encoded_len_u64(v)).collect();
    assert!(lengths.windows(2).all(|pair| pair[0] <= pair[1]));

    for groups in 1..=9 {
        let limit = 1u64 << (7 * groups);
        assert_eq!(encoded_len_u64(limit - 1), groups);
    }
}

#[test]
fn non_terminating_input_is_malformed() {
    let eleven = [0x80u8; 11];
    let mut input: &[u8] = &eleven;
    assert!(input.read_unsigned_var_long().unwrap_err().is_malformed());
    let mut input: &[u8] = &eleven;
    assert!(input.read_signed_var_long().unwrap_err().is_malformed());

    let six = [0xffu8; 6];
    let mut input: &[u8] = &six;
    assert!(input.read_unsigned_var_int().unwrap_err().is_malformed());
    let mut input: &[u8] = &six;
    assert!(input.read_signed_var_int().unwrap_err().is_malformed());
    assert!(decode_u32_from_slice(&six).unwrap_err().is_malformed());
}

#[test]
fn truncated_input_is_eof() {
    let mut bytes = encode_u32_to_vec(u32::MAX);
    bytes.pop();
    assert!(decode_u32_from_slice(&bytes).unwrap_err().is_eof());
    let mut input: &[u8] = &bytes;
    assert!(input.read_unsigned_var_int().unwrap_err().is_eof());
}

fn assert_array_form_matches(value: u32) {
    let mut sink = Vec::with_capacity(5);
    encode_u32(value, &mut sink);
    assert_eq!(encode_u32_to_vec(value), sink, "unsigned {value}");

    sink.clear();
    encode_i32(value as i32, &mut sink);
    assert_eq!(encode_i32_to_vec(value as i32), sink, "signed {}", value as i32);
}

#[test]
fn array_form_matches_sink_form() {
    for value in sweep_u32() {
        assert_array_form_matches(value);
    }
}

#[test]
#[ignore = "walks the full 32-bit domain"]
fn array_form_matches_sink_form_exhaustive() {
    for value in 0..=u32::MAX {
        assert_array_form_matches(value);
    }
}
