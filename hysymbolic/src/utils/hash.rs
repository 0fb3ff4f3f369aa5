use std::hash::{DefaultHasher, Hash, Hasher};

/// Mix `value` into `seed`, boost style.
///
/// The result depends on argument order, so `hash_combine(hash_combine(s, a), b)` and
/// `hash_combine(hash_combine(s, b), a)` generally differ.
#[inline]
pub fn hash_combine(seed: u64, value: u64) -> u64 {
    seed ^ value
        .wrapping_add(0x9e37_79b9_7f4a_7c15)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}

/// Hash any `Hash` value with the standard library's default hasher.
#[inline]
pub fn hash_value<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
