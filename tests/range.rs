use roaring::RoaringBitmap;

#[test]
fn insert_range_reports_inserted_count() {
    let mut rb = RoaringBitmap::new();
    assert_eq!(rb.insert_range(10..20), 10);
    assert_eq!(rb.insert_range(15..25), 5);
    assert_eq!(rb.len(), 15);
}

#[test]
fn insert_range_accepts_full_bounds() {
    let mut rb = RoaringBitmap::new();
    assert_eq!(rb.insert_range(..0), 0);
    assert_eq!(rb.insert_range(u32::MAX..=u32::MAX), 1);
    assert!(rb.contains(u32::MAX));
}

#[test]
fn remove_range_reports_removed_count() {
    let mut rb: RoaringBitmap = (0..1_000_000).collect();
    let removed = rb.remove_range(250_000..750_000);
    assert_eq!(removed, 500_000);
    assert_eq!(rb.len(), 500_000);
    assert!(rb.contains(249_999));
    assert!(!rb.contains(250_000));
    assert!(!rb.contains(749_999));
    assert!(rb.contains(750_000));
}

#[test]
fn remove_range_on_empty_bitmap_is_noop() {
    let mut rb = RoaringBitmap::new();
    assert_eq!(rb.remove_range(0..100), 0);
}

#[test]
fn flip_produces_new_bitmap_without_mutating_source() {
    let rb: RoaringBitmap = (0..10).collect();
    let flipped = rb.flip(5..15);

    assert_eq!(rb.len(), 10);
    assert!(flipped.iter().eq((0..5).chain(10..15)));
}

#[test]
fn flip_with_start_greater_than_end_is_a_clone() {
    let rb: RoaringBitmap = (0..10).collect();
    assert_eq!(rb.flip(8..3), rb);
}

#[test]
fn flip_across_many_containers() {
    let rb: RoaringBitmap = (0..1).collect();
    let flipped = rb.flip(0..300_000);
    assert_eq!(flipped.len(), 299_999);
    assert!(!flipped.contains(0));
    assert!(flipped.contains(1));
    assert!(flipped.contains(299_999));
}
