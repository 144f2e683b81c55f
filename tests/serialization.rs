use std::io;

use roaring::RoaringBitmap;

#[test]
fn roundtrip_empty() {
    let rb = RoaringBitmap::new();
    let mut bytes = Vec::new();
    rb.serialize_into(&mut bytes).unwrap();
    assert_eq!(RoaringBitmap::deserialize_from(&bytes[..]).unwrap(), rb);
}

#[test]
fn roundtrip_array_and_bitmap_containers() {
    let mut rb = RoaringBitmap::new();
    rb.insert_range(0..10); // array container
    rb.insert_range(1_000_000..1_010_000); // bitmap container

    let mut bytes = Vec::new();
    rb.serialize_into(&mut bytes).unwrap();
    assert_eq!(bytes.len(), rb.serialized_size());

    let restored = RoaringBitmap::deserialize_from(&bytes[..]).unwrap();
    assert_eq!(rb, restored);
}

#[test]
fn deserialize_unchecked_trusts_input() {
    let rb: RoaringBitmap = (0..5000).collect();
    let mut bytes = Vec::new();
    rb.serialize_into(&mut bytes).unwrap();

    let restored = RoaringBitmap::deserialize_unchecked_from(&bytes[..]).unwrap();
    assert_eq!(rb, restored);
}

#[test]
fn deserialize_truncated_input_is_an_io_error() {
    let rb: RoaringBitmap = (0..5000).collect();
    let mut bytes = Vec::new();
    rb.serialize_into(&mut bytes).unwrap();
    bytes.truncate(bytes.len() - 10);

    let err = RoaringBitmap::deserialize_from(&bytes[..]).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
}

#[test]
fn deserialize_unknown_cookie_is_invalid_data() {
    let bytes = 0u32.to_le_bytes();
    let err = RoaringBitmap::deserialize_from(&bytes[..]).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}
