/// Every `k`-element subset of `items`, lexicographic over positions.
///
/// Subsets keep the relative order of `items`. `k = 0` yields one empty
/// subset; `k > items.len()` yields none.
pub(crate) fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    let mut subsets = Vec::new();
    for (position, item) in items.iter().enumerate() {
        let tail = items.get(position + 1..).unwrap_or_default();
        for rest in combinations(tail, k - 1) {
            let mut subset = Vec::with_capacity(k);
            subset.push(item.clone());
            subset.extend(rest);
            subsets.push(subset);
        }
    }
    subsets
}
