/// Returns the numbers strictly greater than zero, in their original order.
///
/// Zero is `T::default()`, so this works for every primitive numeric type.
pub fn get_positive_numbers<T>(numbers: &[T]) -> Vec<T>
where
    T: PartialOrd + Default + Copy,
{
    let zero = T::default();
    numbers.iter().copied().filter(|n| *n > zero).collect()
}
