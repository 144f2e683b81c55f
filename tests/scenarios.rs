use roaring::RoaringBitmap;

#[test]
fn scenario_insert_remove_across_container_boundary() {
    let mut rb = RoaringBitmap::new();
    assert!(rb.is_empty());

    rb.insert(5);
    rb.insert(65_536);
    rb.insert(131_072);
    assert_eq!(rb.len(), 3);
    assert!(rb.contains(5));
    assert!(rb.contains(65_536));
    assert!(rb.contains(131_072));

    assert!(rb.remove(65_536));
    assert_eq!(rb.len(), 2);
    assert!(!rb.contains(65_536));
}

#[test]
fn scenario_array_to_bitmap_promotion() {
    let mut rb = RoaringBitmap::new();
    for i in 0..4096 {
        rb.insert(i);
    }
    // Still below the threshold; every value present.
    assert_eq!(rb.len(), 4096);

    rb.insert(4096);
    assert_eq!(rb.len(), 4097);
    for i in 0..=4096 {
        assert!(rb.contains(i));
    }
}

#[test]
fn scenario_union_intersection_difference() {
    let a: RoaringBitmap = (0..1000).collect();
    let b: RoaringBitmap = (500..1500).collect();

    let union = &a | &b;
    let intersection = &a & &b;
    let difference = &a - &b;

    assert_eq!(union.len(), 1500);
    assert_eq!(intersection.len(), 500);
    assert_eq!(difference.len(), 500);
    assert!(intersection.iter().eq(500..1000));
}

#[test]
fn scenario_serialize_then_deserialize_preserves_equality() {
    let mut rb = RoaringBitmap::new();
    rb.insert_range(0..10);
    rb.insert_range(200_000..210_000);

    let mut bytes = Vec::new();
    rb.serialize_into(&mut bytes).unwrap();

    let restored = RoaringBitmap::deserialize_from(&bytes[..]).unwrap();
    assert_eq!(rb, restored);
}

#[test]
fn scenario_flip_carves_out_a_window_then_a_second_flip_shifts_it() {
    let mut rb = RoaringBitmap::new();

    rb.flip_inplace(100..200);
    assert_eq!(rb.len(), 100);
    assert!(rb.iter().eq(100..200));

    rb.flip_inplace(150..250);
    assert_eq!(rb.len(), 100);
    assert!(rb.contains(100));
    assert!(rb.contains(149));
    assert!(!rb.contains(150));
    assert!(!rb.contains(199));
    assert!(rb.contains(200));
    assert!(rb.contains(249));
}

#[test]
fn scenario_from_sorted_iter_then_append_more() {
    let mut rb = RoaringBitmap::from_sorted_iter(0..100).unwrap();
    assert_eq!(rb.len(), 100);

    let appended = rb.append(100..200).unwrap();
    assert_eq!(appended, 100);
    assert_eq!(rb.len(), 200);

    let err = rb.append(vec![50]).unwrap_err();
    assert_eq!(err.valid_until(), 0);
}
