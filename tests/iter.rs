use roaring::RoaringBitmap;

#[test]
fn iter_yields_values_in_order() {
    let rb: RoaringBitmap = [5u32, 1, 70_000, 3].into_iter().collect();
    assert_eq!(rb.iter().collect::<Vec<u32>>(), vec![1, 3, 5, 70_000]);
}

#[test]
fn size_hint_is_exact() {
    let rb: RoaringBitmap = (0..1000).collect();
    let iter = rb.iter();
    assert_eq!(iter.size_hint(), (1000, Some(1000)));
}

#[test]
fn into_iter_by_reference_does_not_consume() {
    let rb: RoaringBitmap = (0..5).collect();
    assert_eq!((&rb).into_iter().collect::<Vec<u32>>(), vec![0, 1, 2, 3, 4]);
    assert_eq!(rb.len(), 5);
}

#[test]
fn extend_inserts_every_value() {
    let mut rb = RoaringBitmap::new();
    rb.extend(vec![3u32, 1, 2]);
    assert_eq!(rb.iter().collect::<Vec<u32>>(), vec![1, 2, 3]);
}

#[test]
fn from_sorted_iter_accepts_strictly_increasing_values() {
    let rb = RoaringBitmap::from_sorted_iter(0..100).unwrap();
    assert!(rb.iter().eq(0..100));
}

#[test]
fn from_sorted_iter_rejects_duplicates() {
    let err = RoaringBitmap::from_sorted_iter(vec![1, 1, 2]).unwrap_err();
    assert_eq!(err.valid_until(), 1);
}
