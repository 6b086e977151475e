/// Returns the index after `value` if it still fits inside `length`.
///
/// The boundary value is computed and named once instead of repeating
/// `value + 1` in the condition and in the body.
pub fn next_index_within(value: usize, length: usize) -> Option<usize> {
    let next_value = value.checked_add(1)?;
    (next_value < length).then_some(next_value)
}
