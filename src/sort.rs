/// Sorts `items` in place, ascending, by repeatedly swapping adjacent out-of-order pairs.
///
/// Equal elements are never swapped, so the sort is stable. Every pass runs to completion
/// regardless of whether the slice is already ordered, giving O(n²) comparisons in all cases.
pub fn bubble_sort<T: Ord>(items: &mut [T]) {
    let n = items.len();
    if n < 2 {
        return;
    }

    let mut swaps = 0_usize;
    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            if items[j] > items[j + 1] {
                items.swap(j, j + 1);
                swaps += 1;
            }
        }
    }

    log::trace!("Bubble sorted {} elements with {} swaps", n, swaps);
}

/// Takes ownership of `items` and returns them sorted ascending.
///
/// Callers that need to keep the original ordering should pass a clone.
pub fn bubble_sorted(mut items: Vec<i32>) -> Vec<i32> {
    bubble_sort(&mut items);
    items
}
