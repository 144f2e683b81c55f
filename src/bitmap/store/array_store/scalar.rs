//! Plain two-pointer merge algorithms over sorted `u16` slices.

pub fn or(lhs: &[u16], rhs: &[u16]) -> Vec<u16> {
    let mut out = Vec::with_capacity(lhs.len() + rhs.len());
    let (mut i, mut j) = (0, 0);

    while i < lhs.len() && j < rhs.len() {
        let a = lhs[i];
        let b = rhs[j];
        match a.cmp(&b) {
            std::cmp::Ordering::Less => {
                out.push(a);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                out.push(b);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                out.push(a);
                i += 1;
                j += 1;
            }
        }
    }

    out.extend_from_slice(&lhs[i..]);
    out.extend_from_slice(&rhs[j..]);
    out
}

pub fn and(lhs: &[u16], rhs: &[u16]) -> Vec<u16> {
    let mut out = Vec::with_capacity(std::cmp::min(lhs.len(), rhs.len()));
    let (mut i, mut j) = (0, 0);

    while i < lhs.len() && j < rhs.len() {
        let a = lhs[i];
        let b = rhs[j];
        match a.cmp(&b) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a);
                i += 1;
                j += 1;
            }
        }
    }

    out
}

/// Count of `lhs ∩ rhs` without materializing the intersection.
pub fn intersection_len(lhs: &[u16], rhs: &[u16]) -> u64 {
    let mut count = 0;
    let (mut i, mut j) = (0, 0);

    while i < lhs.len() && j < rhs.len() {
        let a = lhs[i];
        let b = rhs[j];
        match a.cmp(&b) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                count += 1;
                i += 1;
                j += 1;
            }
        }
    }

    count
}

pub fn sub(lhs: &[u16], rhs: &[u16]) -> Vec<u16> {
    let mut out = Vec::with_capacity(lhs.len());
    let (mut i, mut j) = (0, 0);

    while i < lhs.len() && j < rhs.len() {
        let a = lhs[i];
        let b = rhs[j];
        match a.cmp(&b) {
            std::cmp::Ordering::Less => {
                out.push(a);
                i += 1;
            }
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }

    out.extend_from_slice(&lhs[i..]);
    out
}

pub fn xor(lhs: &[u16], rhs: &[u16]) -> Vec<u16> {
    let mut out = Vec::with_capacity(lhs.len() + rhs.len());
    let (mut i, mut j) = (0, 0);

    while i < lhs.len() && j < rhs.len() {
        let a = lhs[i];
        let b = rhs[j];
        match a.cmp(&b) {
            std::cmp::Ordering::Less => {
                out.push(a);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                out.push(b);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }

    out.extend_from_slice(&lhs[i..]);
    out.extend_from_slice(&rhs[j..]);
    out
}
