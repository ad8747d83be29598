//! Ordered traversal primitives.
//!
//! Every visitor here receives `(this, element, index)`: element first, the
//! order a plain array walk produces. The public collection methods translate
//! that into `(index, element)` through [`crate::adapter`].
//!
//! `this` is lent to each invocation and handed back untouched to the caller
//! once the walk is over.

/// Visit every element of `sequence` in ascending index order.
///
/// Returns `sequence` so the caller can keep chaining.
pub fn iterate<'s, T, C, V>(sequence: &'s [T], this: &mut C, mut visitor: V) -> &'s [T]
where
    T: Copy,
    V: FnMut(&mut C, T, usize),
{
    for (index, element) in sequence.iter().copied().enumerate() {
        visitor(this, element, index);
    }

    sequence
}

/// Keep the elements for which `predicate` returns `true`, in their original order.
pub fn filter_ordered<T, C, P>(sequence: &[T], this: &mut C, mut predicate: P) -> Vec<T>
where
    T: Copy,
    P: FnMut(&mut C, T, usize) -> bool,
{
    sequence
        .iter()
        .copied()
        .enumerate()
        .filter_map(|(index, element)| predicate(this, element, index).then_some(element))
        .collect()
}

/// Apply `callback` to every element, collecting one result per index.
pub fn map_ordered<T, C, R, F>(sequence: &[T], this: &mut C, mut callback: F) -> Vec<R>
where
    T: Copy,
    F: FnMut(&mut C, T, usize) -> R,
{
    sequence
        .iter()
        .copied()
        .enumerate()
        .map(|(index, element)| callback(this, element, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterate_visits_in_order_and_returns_sequence() {
        let items = ['a', 'b', 'c'];
        let mut seen = Vec::new();

        let returned = iterate(&items, &mut seen, |seen, element, index| {
            seen.push((element, index));
        });

        assert_eq!(seen, vec![('a', 0), ('b', 1), ('c', 2)]);
        assert_eq!(returned, &items);
    }

    #[test]
    fn test_iterate_empty_sequence_never_calls_visitor() {
        let items: [u8; 0] = [];
        let mut calls = 0;
        iterate(&items, &mut calls, |calls, _, _| *calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_filter_ordered_keeps_order() {
        let items = [5, 2, 8, 1, 9];
        let kept = filter_ordered(&items, &mut (), |_, element, _| element > 4);
        assert_eq!(kept, vec![5, 8, 9]);
    }

    #[test]
    fn test_filter_ordered_passes_index_and_context() {
        let items = ["x", "y", "z", "w"];
        let mut evaluated = 0usize;

        let kept = filter_ordered(&items, &mut evaluated, |evaluated, _, index| {
            *evaluated += 1;
            index % 2 == 1
        });

        assert_eq!(kept, vec!["y", "w"]);
        assert_eq!(evaluated, 4);
    }

    #[test]
    fn test_map_ordered_preserves_index_correspondence() {
        let items = [10, 20, 30];
        let mapped = map_ordered(&items, &mut (), |_, element, index| element + index);
        assert_eq!(mapped, vec![10, 21, 32]);
    }
}
