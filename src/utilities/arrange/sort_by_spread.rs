use crate::api::traits::has_spread::HasSpread;
use core::cmp::Ordering;

/// Helper function to sort items by spread, highest spread first.
///
/// # Arguments
///
/// * `items` - The items to sort.
///
/// # Remarks
///
/// The sort is stable; items with equal spread keep their relative order.
/// Spreads are expected to be finite. Should a NaN slip in, it compares equal
/// to everything and stays roughly where it was instead of breaking the sort.
pub fn sort_by_spread<T: HasSpread>(items: &mut [T]) {
    items.sort_by(|a, b| {
        b.spread()
            .partial_cmp(&a.spread())
            .unwrap_or(Ordering::Equal)
    });
}
