use roaring::RoaringBitmap;

#[test]
fn or() {
    let rb1: RoaringBitmap = (1..4).collect();
    let rb2: RoaringBitmap = (3..6).collect();
    let rb3: RoaringBitmap = (1..6).collect();

    assert_eq!(rb3, &rb1 | &rb2);
    assert_eq!(rb3, rb1.clone() | rb2.clone() | &rb3);
}

#[test]
fn and() {
    let rb1: RoaringBitmap = (1..4).collect();
    let rb2: RoaringBitmap = (3..6).collect();
    let rb3: RoaringBitmap = (3..4).collect();

    assert_eq!(rb3, &rb1 & &rb2);
    assert_eq!(rb3, rb1.clone() & rb2.clone() & &rb3);
}

#[test]
fn sub() {
    let rb1: RoaringBitmap = (1..4).collect();
    let rb2: RoaringBitmap = (3..6).collect();
    let rb3: RoaringBitmap = (1..3).collect();
    let rb4 = RoaringBitmap::new();

    assert_eq!(rb3, &rb1 - &rb2);
    assert_eq!(rb4, rb1 - rb2 - rb3);
}

#[test]
fn xor() {
    let rb1: RoaringBitmap = (1..4).collect();
    let rb2: RoaringBitmap = (3..6).collect();
    let rb3: RoaringBitmap = (1..3).chain(4..6).collect();
    let rb4 = RoaringBitmap::new();

    assert_eq!(rb3, &rb1 ^ &rb2);
    assert_eq!(rb4, rb1 ^ rb2 ^ rb3);
}

#[test]
fn assign_ops_match_by_value_ops() {
    let rb1: RoaringBitmap = (1..50_000).collect();
    let rb2: RoaringBitmap = (25_000..75_000).collect();

    let mut or_assigned = rb1.clone();
    or_assigned |= rb2.clone();
    assert_eq!(or_assigned, &rb1 | &rb2);

    let mut and_assigned = rb1.clone();
    and_assigned &= rb2.clone();
    assert_eq!(and_assigned, &rb1 & &rb2);

    let mut sub_assigned = rb1.clone();
    sub_assigned -= rb2.clone();
    assert_eq!(sub_assigned, &rb1 - &rb2);

    let mut xor_assigned = rb1.clone();
    xor_assigned ^= rb2.clone();
    assert_eq!(xor_assigned, &rb1 ^ &rb2);
}

#[test]
fn cardinality_helpers_avoid_materializing_result() {
    let rb1: RoaringBitmap = (0..200_000).collect();
    let rb2: RoaringBitmap = (100_000..300_000).collect();

    assert_eq!(rb1.intersection_len(&rb2), (&rb1 & &rb2).len());
    assert_eq!(rb1.union_len(&rb2), (&rb1 | &rb2).len());
    assert_eq!(rb1.difference_len(&rb2), (&rb1 - &rb2).len());
    assert_eq!(rb1.symmetric_difference_len(&rb2), (&rb1 ^ &rb2).len());
}
