use itertools::Itertools;

/// Sorts `seq` in place and returns how many pairs `(i, j)`, `i < j`, had
/// `seq[i] > seq[j]` before sorting. Equal elements are never counted.
pub fn sort_and_count<T: Ord + Clone>(seq: &mut [T]) -> u64 {
    if seq.len() < 2 {
        return 0;
    }
    let mid = seq.len() / 2;
    let (left, right) = seq.split_at_mut(mid);
    sort_and_count(left) + sort_and_count(right) + counting_merge(seq, mid)
}

/// Owned variant returning the sorted sequence with its inversion count.
pub fn sorted_with_inversions<T: Ord + Clone>(mut seq: Vec<T>) -> (Vec<T>, u64) {
    let inversions = sort_and_count(&mut seq);
    (seq, inversions)
}

/// O(n²) pairwise count, used to check `sort_and_count`.
pub fn count_inversions_brute<T: Ord>(seq: &[T]) -> u64 {
    seq.iter()
        .tuple_combinations()
        .filter(|(a, b)| a > b)
        .count() as u64
}

// Merges the sorted runs `seq[..mid]` and `seq[mid..]`, returning the number
// of cross inversions.
fn counting_merge<T: Ord + Clone>(seq: &mut [T], mid: usize) -> u64 {
    let mut merged = Vec::with_capacity(seq.len());
    let mut count = 0;
    {
        let (left, right) = seq.split_at(mid);
        let (mut i, mut j) = (0, 0);
        while i < left.len() && j < right.len() {
            if left[i] <= right[j] {
                merged.push(left[i].clone());
                i += 1;
            } else {
                // right[j] jumps over every left element not yet placed
                merged.push(right[j].clone());
                count += (left.len() - i) as u64;
                j += 1;
            }
        }
        merged.extend_from_slice(&left[i..]);
        merged.extend_from_slice(&right[j..]);
    }
    seq.clone_from_slice(&merged);
    count
}
