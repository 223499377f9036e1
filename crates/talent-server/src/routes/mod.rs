pub mod charts;
pub mod config;
pub mod dashboard;
pub mod page;
pub mod tables;

use talent_core::filter::DashboardFilter;

use crate::error::AppError;

/// Build a filter from raw query pairs.
///
/// `sl` may repeat (one value per checkbox) or carry a comma-separated list;
/// all occurrences are merged. An `sl` key with no usable value is an explicit
/// empty selection, while an absent key selects everything.
pub fn filter_from_pairs(pairs: &[(String, String)]) -> Result<DashboardFilter, AppError> {
    let sl: Vec<&str> = pairs
        .iter()
        .filter(|(k, _)| k == "sl")
        .map(|(_, v)| v.as_str())
        .collect();
    let range = pairs
        .iter()
        .rev()
        .find(|(k, _)| k == "range")
        .map(|(_, v)| v.as_str());

    let joined = (!sl.is_empty()).then(|| sl.join(","));
    Ok(DashboardFilter::from_query(joined.as_deref(), range)?)
}
