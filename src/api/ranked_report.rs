use crate::api::result_record::ResultRecord;
use crate::utilities::arrange::sort_by_spread::sort_by_spread;

/// Result records ordered by spread, highest first.
///
/// # Remarks
///
/// Records with equal spread keep the order in which they were supplied.
/// The only way to build a report is [`RankedReport::rank`], so the order
/// always holds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankedReport {
    records: Vec<ResultRecord>,
}

impl RankedReport {
    /// Ranks the given records by spread, descending.
    ///
    /// # Arguments
    ///
    /// * `records` - Records in input order. This order decides ties.
    pub fn rank(mut records: Vec<ResultRecord>) -> Self {
        sort_by_spread(&mut records);
        Self { records }
    }

    /// The ranked records.
    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    pub fn iter(&self) -> core::slice::Iter<'_, ResultRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the report, returning the records in ranked order.
    pub fn into_records(self) -> Vec<ResultRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a RankedReport {
    type Item = &'a ResultRecord;
    type IntoIter = core::slice::Iter<'a, ResultRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
