use int64::layout::{ByteTable, Endian};
use int64::variant::{BigEndianSigned, BigEndianUnsigned, LittleEndianSigned};
use int64::{Int64BE, Int64Error, Int64LE, StorageKind, Uint64BE, Uint64LE};

const HIGH: u32 = 0x0123_4567;
const LOW: u32 = 0x89ab_cdef;
const BE_BYTES: [u8; 8] = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef];
const LE_BYTES: [u8; 8] = [0xef, 0xcd, 0xab, 0x89, 0x67, 0x45, 0x23, 0x01];

#[test]
fn explicit_words_layout() {
    let kind = StorageKind::Array;

    assert_eq!(Uint64BE::with_words(HIGH, LOW, kind).as_bytes(), &BE_BYTES);
    assert_eq!(Int64BE::with_words(HIGH, LOW, kind).as_bytes(), &BE_BYTES);
    assert_eq!(Uint64LE::with_words(HIGH, LOW, kind).as_bytes(), &LE_BYTES);
    assert_eq!(Int64LE::with_words(HIGH, LOW, kind).as_bytes(), &LE_BYTES);
}

#[test]
fn explicit_words_read_back() {
    let be = Uint64BE::from_view(BE_BYTES.to_vec(), 0);
    let le = Uint64LE::from_view(LE_BYTES.to_vec(), 0);

    assert_eq!(be.to_words(), (HIGH, LOW));
    assert_eq!(le.to_words(), (HIGH, LOW));
    assert_eq!(be.to_string_radix(16).unwrap(), "123456789abcdef");
    assert_eq!(le.to_string_radix(16).unwrap(), "123456789abcdef");
}

#[test]
fn zeroed_is_eight_zero_bytes() {
    for kind in [StorageKind::Array, StorageKind::Buffer, StorageKind::ArrayBuffer] {
        let zero = Int64BE::zeroed(kind);

        assert_eq!(zero.as_bytes(), &[0u8; 8]);
        assert_eq!(zero.to_number(), 0.0);
        assert_eq!(zero.to_string(), "0");
    }
}

#[test]
fn big_endian_is_reverse_of_little_endian() {
    for value in [1.0, 255.0, 256.0, 65_535.0, 1e15, -1.0, -2.0, -4_294_967_296.0] {
        let be = Int64BE::with_number(value, StorageKind::Array);
        let le = Int64LE::with_number(value, StorageKind::Array);

        let mut reversed = le.to_array(true).into_owned();
        reversed.reverse();

        assert_eq!(be.as_bytes(), &reversed[..], "value {value}");
    }
}

#[test]
fn minus_one_reinterpreted_as_unsigned() {
    let signed = Int64BE::with_number(-1.0, StorageKind::Array);
    assert_eq!(signed.as_bytes(), &[0xFF; 8]);
    assert_eq!(signed.to_number(), -1.0);

    let unsigned = signed.reinterpret::<BigEndianUnsigned>();
    assert_eq!(unsigned.to_number(), 18_446_744_073_709_551_616.0);
    assert_eq!(unsigned.to_string(), "18446744073709551615");
}

#[test]
fn descriptors_and_kind_checks() {
    let value = Int64BE::zeroed(StorageKind::Array);

    assert_eq!(value.descriptor().name, "Int64BE");
    assert_eq!(value.descriptor().endian, Endian::Big);
    assert!(value.descriptor().signed);

    assert!(value.is_variant::<BigEndianSigned>());
    assert!(!value.is_variant::<BigEndianUnsigned>());
    assert!(!value.is_variant::<LittleEndianSigned>());

    assert_eq!(Uint64LE::zeroed(StorageKind::Array).descriptor().name, "Uint64LE");
}

#[test]
fn view_inside_larger_store() {
    let mut store = vec![0xAAu8; 24];
    store[8..16].copy_from_slice(&BE_BYTES);

    let value = Uint64BE::from_view(store.as_slice(), 8);

    assert_eq!(value.offset(), 8);
    assert_eq!(value.to_words(), (HIGH, LOW));
}

#[test]
fn write_leaves_surrounding_bytes_untouched() {
    let mut store = [0xAAu8; 12];

    let value = Int64LE::from_words(&mut store[..], 2, HIGH, LOW);
    assert_eq!(value.to_words(), (HIGH, LOW));

    assert_eq!(&store[..2], &[0xAA, 0xAA]);
    assert_eq!(&store[2..10], &LE_BYTES);
    assert_eq!(&store[10..], &[0xAA, 0xAA]);
}

#[test]
fn try_from_view_rejects_short_store() {
    let err = Int64BE::try_from_view(vec![0u8; 10], 3).unwrap_err();

    assert_eq!(err, Int64Error::OutOfBounds { offset: 3, len: 10 });
    assert!(Int64BE::try_from_view(vec![0u8; 10], 2).is_ok());
}

#[test]
#[should_panic(expected = "exceeds store")]
fn from_view_out_of_bounds_panics() {
    let _ = Uint64LE::from_view(vec![0u8; 7], 0);
}

#[test]
#[should_panic(expected = "exceeds store")]
fn from_words_out_of_bounds_panics() {
    let _ = Uint64BE::from_words(vec![0u8; 8], 1, 0, 0);
}

#[test]
fn byte_table_positions() {
    let be = ByteTable::new(Endian::Big);
    let le = ByteTable::new(Endian::Little);

    assert_eq!((be.high(), be.low()), (0, 4));
    assert_eq!((le.high(), le.low()), (4, 0));

    let be_offsets: Vec<usize> = (0..8).map(|s| be.offset_of(s)).collect();
    let le_offsets: Vec<usize> = (0..8).map(|s| le.offset_of(s)).collect();

    assert_eq!(be_offsets, [0, 1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(le_offsets, [7, 6, 5, 4, 3, 2, 1, 0]);
}

#[test]
fn equality_ignores_store_type() {
    let owned = Int64BE::with_words(HIGH, LOW, StorageKind::Buffer);
    let viewed = Int64BE::from_view(&BE_BYTES[..], 0);

    assert_eq!(owned, viewed);
    assert_ne!(owned, Int64BE::zeroed(StorageKind::Buffer));
}

#[test]
fn debug_shows_name_value_and_bytes() {
    let value = Int64LE::with_number(-2.0, StorageKind::Array);
    let debug = format!("{value:?}");

    assert!(debug.starts_with("Int64LE"));
    assert!(debug.contains("value: -2"));
    assert!(debug.contains("fe, ff"));
}
