/*!
 * Serde Helper Functions
 * Skip predicates for `#[serde(skip_serializing_if = "...")]`
 */

/// Skip serializing if Option is None
#[inline]
pub const fn is_none<T>(value: &Option<T>) -> bool {
    value.is_none()
}

/// Skip serializing if Vec is empty
#[inline]
pub fn is_empty_vec<T>(value: &Vec<T>) -> bool {
    value.is_empty()
}

#[inline]
pub const fn is_zero_u64(value: &u64) -> bool {
    *value == 0
}

#[inline]
pub const fn is_zero_usize(value: &usize) -> bool {
    *value == 0
}
