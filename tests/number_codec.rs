use int64::{Int64BE, Int64LE, StorageKind, Uint64BE, Uint64LE};

const KIND: StorageKind = StorageKind::Array;
const MAX_SAFE: f64 = 9_007_199_254_740_991.0;

#[test]
fn safe_integers_round_trip_exactly() {
    for value in [0.0, 1.0, 255.0, 256.0, 4_294_967_295.0, 4_294_967_296.0, 1e15, MAX_SAFE] {
        assert_eq!(Uint64BE::with_number(value, KIND).to_number(), value);
        assert_eq!(Uint64LE::with_number(value, KIND).to_number(), value);
        assert_eq!(Int64BE::with_number(value, KIND).to_number(), value);
        assert_eq!(Int64LE::with_number(value, KIND).to_number(), value);

        assert_eq!(Int64BE::with_number(-value, KIND).to_number(), -value);
        assert_eq!(Int64LE::with_number(-value, KIND).to_number(), -value);
    }
}

#[test]
fn two_to_the_53_is_exact() {
    let value = Uint64BE::with_words(0x0020_0000, 0, KIND);

    assert_eq!(value.to_number(), 9_007_199_254_740_992.0);
}

#[test]
fn unsigned_maximum_rounds_to_two_to_the_64() {
    let max = Uint64LE::with_words(u32::MAX, u32::MAX, KIND);

    assert_eq!(max.to_number(), 18_446_744_073_709_551_616.0);
    assert_eq!(max.to_string(), "18446744073709551615");
}

#[test]
fn negative_decomposition_bytes() {
    let value = Int64BE::with_number(-256.0, KIND);

    assert_eq!(value.as_bytes(), &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00]);
}

#[test]
fn fractions_are_dropped() {
    assert_eq!(Uint64BE::with_number(1.9, KIND).to_number(), 1.0);
    assert_eq!(Uint64BE::with_number(0.5, KIND).to_number(), 0.0);
    assert_eq!(Int64BE::with_number(-2.5, KIND).to_number(), -2.0);

    // (-1, 0) decomposes as -1
    assert_eq!(Int64LE::with_number(-0.5, KIND).to_number(), -1.0);
}

#[test]
fn non_finite_values() {
    assert_eq!(Int64BE::with_number(f64::NAN, KIND).as_bytes(), &[0u8; 8]);
    assert_eq!(Int64BE::with_number(f64::INFINITY, KIND).as_bytes(), &[0u8; 8]);
    assert_eq!(Int64BE::with_number(f64::NEG_INFINITY, KIND).as_bytes(), &[0xFF; 8]);
    assert_eq!(Int64BE::with_number(-0.0, KIND).as_bytes(), &[0u8; 8]);
}

#[test]
fn magnitudes_beyond_64_bits_wrap() {
    let two_to_the_64 = 18_446_744_073_709_551_616.0;

    assert_eq!(Uint64BE::with_number(two_to_the_64, KIND).to_number(), 0.0);
    assert_eq!(Uint64BE::with_number(two_to_the_64 + 4096.0, KIND).to_number(), 4096.0);
}

#[test]
fn signed_high_word_is_sign_extended() {
    let value = Int64LE::with_words(0xFFFF_FFFF, 0, KIND);

    assert_eq!(value.to_number(), -4_294_967_296.0);
    assert_eq!(value.reinterpret::<int64::variant::LittleEndianUnsigned>().to_number(), 18_446_744_069_414_584_320.0);
}

#[test]
fn from_number_in_uses_offset() {
    let mut store = [0u8; 10];

    let value = Uint64LE::from_number_in(&mut store[..], 1, 258.0);
    assert_eq!(value.to_number(), 258.0);

    assert_eq!(store, [0, 2, 1, 0, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn json_form_is_the_number() {
    let negative = Int64BE::with_number(-5.0, KIND);
    assert_eq!(negative.to_json(), -5.0);
    assert_eq!(serde_json::to_string(&negative).unwrap(), "-5");

    let max = Uint64BE::with_words(u32::MAX, u32::MAX, KIND);
    let json = serde_json::to_value(&max).unwrap();
    assert!(json.is_f64());
    assert_eq!(json.as_f64(), Some(18_446_744_073_709_551_616.0));

    let list = vec![Uint64LE::with_number(1.0, KIND), Uint64LE::with_number(2.0, KIND)];
    assert_eq!(serde_json::to_string(&list).unwrap(), "[1,2]");
}
