/// Used for items that can be ranked by spread.
pub trait HasSpread {
    /// Difference between the item's compression ratio and the ratio of its random baseline.
    /// More negative means more structure.
    fn spread(&self) -> f64;
}
