/// Insertion point for `key` in a slice sorted by `key_fn`, biased to the
/// right of equal keys: every element with `key_fn(element) <= key` sorts
/// before the returned index.
pub fn bisect_right_by<T, K, F>(items: &[T], key: K, key_fn: F) -> usize
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    items.partition_point(|item| key_fn(item) <= key)
}
