//! Elementary sorting and searching over slices.
//!
//! The three sorts are kept as written in textbooks; callers only rely on the
//! final ascending order by key. Ties keep their relative order in all three
//! except selection sort, which may swap equal elements.

use std::cmp::Ordering;

/// Bubble sort in place, ascending by `key`.
pub fn bubble_sort_by_key<T, K, F>(items: &mut [T], key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let n = items.len();
    for i in 0..n {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if key(&items[j]) > key(&items[j + 1]) {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Selection sort in place, ascending by `key`.
pub fn selection_sort_by_key<T, K, F>(items: &mut [T], key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let n = items.len();
    for i in 0..n {
        let mut min_idx = i;
        for j in i + 1..n {
            if key(&items[j]) < key(&items[min_idx]) {
                min_idx = j;
            }
        }
        items.swap(i, min_idx);
    }
}

/// Insertion sort in place, ascending by `key`.
pub fn insertion_sort_by_key<T, K, F>(items: &mut [T], key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    for i in 1..items.len() {
        let mut j = i;
        // Shift the new element left past every strictly greater neighbour.
        while j > 0 && key(&items[j - 1]) > key(&items[j]) {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Binary search over a slice already sorted ascending by `key`.
///
/// Returns the index of some element whose key equals `target`.
pub fn binary_search_by_key<T, K, F>(items: &[T], target: &K, key: F) -> Option<usize>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let (mut low, mut high) = (0usize, items.len());
    while low < high {
        let mid = low + (high - low) / 2;
        match key(&items[mid]).cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    type Pair = (u8, char);

    fn all_sorts() -> [(&'static str, fn(&mut [Pair])); 3] {
        [
            ("bubble", |v: &mut [Pair]| bubble_sort_by_key(v, |x| x.0)),
            ("selection", |v: &mut [Pair]| selection_sort_by_key(v, |x| x.0)),
            ("insertion", |v: &mut [Pair]| insertion_sort_by_key(v, |x| x.0)),
        ]
    }

    #[test]
    fn test_sorts_order_by_key() {
        let input = vec![(3, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (3, 'e')];
        for (name, sort) in all_sorts() {
            let mut v = input.clone();
            sort(&mut v);
            let keys: Vec<u8> = v.iter().map(|x| x.0).collect();
            assert_eq!(keys, vec![1, 1, 2, 3, 3], "{name}");

            let mut got: Vec<char> = v.iter().map(|x| x.1).collect();
            got.sort();
            assert_eq!(got, vec!['a', 'b', 'c', 'd', 'e'], "{name} lost elements");
        }
    }

    #[test]
    fn test_sorts_handle_trivial_inputs() {
        for (name, sort) in all_sorts() {
            let mut empty: Vec<Pair> = Vec::new();
            sort(&mut empty);
            assert!(empty.is_empty(), "{name}");

            let mut one = vec![(2, 'x')];
            sort(&mut one);
            assert_eq!(one, vec![(2, 'x')], "{name}");
        }
    }

    #[test]
    fn test_bubble_and_insertion_are_stable() {
        let input = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        let mut bubble = input.clone();
        bubble_sort_by_key(&mut bubble, |x| x.0);
        let mut insertion = input.clone();
        insertion_sort_by_key(&mut insertion, |x| x.0);
        let expected = vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')];
        assert_eq!(bubble, expected);
        assert_eq!(insertion, expected);
    }

    #[test]
    fn test_binary_search() {
        let words = ["alpha", "beta", "delta", "gamma"];
        for (i, w) in words.iter().enumerate() {
            assert_eq!(binary_search_by_key(&words, &w.to_string(), |s| s.to_string()), Some(i));
        }
        assert_eq!(binary_search_by_key(&words, &"epsilon".to_string(), |s| s.to_string()), None);
        assert_eq!(binary_search_by_key(&words, &"zeta".to_string(), |s| s.to_string()), None);
        let empty: [&str; 0] = [];
        assert_eq!(binary_search_by_key(&empty, &"a".to_string(), |s| s.to_string()), None);
    }
}
