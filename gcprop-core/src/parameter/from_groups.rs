/// Combining rule of a group-contribution method.
///
/// Implemented by the model record of a method: the record of a molecule is
/// built from the records of its groups and their number of occurrences.
pub trait FromGroups<T>: Sized {
    fn from_groups(groups: &[(&Self, T)]) -> Self;
}

/// Weighted sum of one coefficient over all groups.
///
/// Returns `None` if any of the groups lacks the coefficient, so that a
/// missing value never counts as zero.
pub fn contribution_sum<M, F>(groups: &[(&M, f64)], coefficient: F) -> Option<f64>
where
    F: Fn(&M) -> Option<f64>,
{
    groups
        .iter()
        .map(|&(record, n)| coefficient(record).map(|c| c * n))
        .sum()
}
