//! Summary metrics for the dashboard's value boxes.
//!
//! Both metrics operate on the region-level wide table directly (not the
//! state-averaged long frame): filter rows by state, then aggregate the
//! most recent date columns.
//!
//! Percent-change convention: the scalar mean of each of the two latest
//! columns is taken first, then the relative difference of those two
//! means. Row-wise change averaging would weight regions differently and
//! is deliberately not offered.

use crate::error::MarketError;
use crate::filter::StateFilter;
use crate::wide::{WideRow, WideTable};

/// Mean of one date column across rows, ignoring missing cells. `None`
/// when no row has a value in that column.
fn column_mean(rows: &[&WideRow], column: usize) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0u32;
    for row in rows {
        if let Some(v) = row.values.get(column).copied().flatten() {
            sum += v;
            count += 1;
        }
    }
    (count > 0).then(|| sum / f64::from(count))
}

/// Mean value of the most recent month across the selected state's rows.
///
/// Signals [`MarketError::NoData`] when the filter matches no rows, or
/// when every matching row is missing its latest value -- never a NaN.
pub fn latest_average(table: &WideTable, state: &StateFilter) -> Result<f64, MarketError> {
    let last = table.dates().len().checked_sub(1).ok_or(MarketError::NoData)?;
    let rows = table.rows_for(state);
    column_mean(&rows, last).ok_or(MarketError::NoData)
}

/// Relative change between the two most recent months:
/// (latest mean - previous mean) / previous mean.
///
/// Signals [`MarketError::DivisionByZero`] when the previous mean is
/// exactly zero, and [`MarketError::NoData`] when fewer than two date
/// columns exist or either mean has no inputs.
pub fn percent_change(table: &WideTable, state: &StateFilter) -> Result<f64, MarketError> {
    let n_dates = table.dates().len();
    if n_dates < 2 {
        return Err(MarketError::NoData);
    }

    let rows = table.rows_for(state);
    let latest = column_mean(&rows, n_dates - 1).ok_or(MarketError::NoData)?;
    let previous = column_mean(&rows, n_dates - 2).ok_or(MarketError::NoData)?;
    if previous == 0.0 {
        return Err(MarketError::DivisionByZero);
    }
    Ok((latest - previous) / previous)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
RegionID,SizeRank,RegionName,RegionType,StateName,2024-01-31,2024-02-29
1,1,\"Los Angeles, CA\",msa,California,100,110
2,2,\"Dallas, TX\",msa,Texas,200,190
";

    fn sample_table() -> WideTable {
        WideTable::from_csv("home_value.csv", SAMPLE_CSV).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn latest_average_over_all_states() {
        let table = sample_table();
        let avg = latest_average(&table, &StateFilter::UnitedStates).unwrap();
        assert!(close(avg, (110.0 + 190.0) / 2.0));
    }

    #[test]
    fn latest_average_for_one_state() {
        let table = sample_table();
        let avg = latest_average(&table, &StateFilter::from_label("Texas")).unwrap();
        assert!(close(avg, 190.0));
    }

    #[test]
    fn latest_average_ignores_missing_cells() {
        let csv = "\
RegionID,SizeRank,RegionName,RegionType,StateName,2024-01-31,2024-02-29
1,1,\"A, A\",msa,Ohio,100,
2,2,\"B, B\",msa,Ohio,100,250
";
        let table = WideTable::from_csv("sale_count.csv", csv).unwrap();
        let avg = latest_average(&table, &StateFilter::from_label("Ohio")).unwrap();
        assert!(close(avg, 250.0));
    }

    #[test]
    fn latest_average_signals_no_data_for_unmatched_state() {
        let table = sample_table();
        assert_eq!(
            latest_average(&table, &StateFilter::from_label("Wyoming")),
            Err(MarketError::NoData)
        );
    }

    #[test]
    fn percent_change_matches_the_dashboard_example() {
        let table = sample_table();

        let ca = percent_change(&table, &StateFilter::from_label("California")).unwrap();
        assert!(close(ca, 0.10));

        let tx = percent_change(&table, &StateFilter::from_label("Texas")).unwrap();
        assert!(close(tx, -0.05));
    }

    #[test]
    fn percent_change_uses_scalar_means_first() {
        // Two regions: means are 150 -> 165, so the change is +10%,
        // not the average of per-region changes.
        let csv = "\
RegionID,SizeRank,RegionName,RegionType,StateName,2024-01-31,2024-02-29
1,1,\"A, A\",msa,Ohio,100,115
2,2,\"B, B\",msa,Ohio,200,215
";
        let table = WideTable::from_csv("home_value.csv", csv).unwrap();
        let change = percent_change(&table, &StateFilter::from_label("Ohio")).unwrap();
        assert!(close(change, (165.0 - 150.0) / 150.0));
    }

    #[test]
    fn percent_change_signals_division_by_zero() {
        let csv = "\
RegionID,SizeRank,RegionName,RegionType,StateName,2024-01-31,2024-02-29
1,1,\"A, A\",msa,Ohio,0,50
";
        let table = WideTable::from_csv("sale_count.csv", csv).unwrap();
        assert_eq!(
            percent_change(&table, &StateFilter::from_label("Ohio")),
            Err(MarketError::DivisionByZero)
        );
    }

    #[test]
    fn percent_change_needs_two_date_columns() {
        let csv = "\
RegionID,SizeRank,RegionName,RegionType,StateName,2024-01-31
1,1,\"A, A\",msa,Ohio,100
";
        let table = WideTable::from_csv("sale_count.csv", csv).unwrap();
        assert_eq!(
            percent_change(&table, &StateFilter::UnitedStates),
            Err(MarketError::NoData)
        );
    }

    #[test]
    fn percent_change_signals_no_data_for_unmatched_state() {
        let table = sample_table();
        assert_eq!(
            percent_change(&table, &StateFilter::from_label("Wyoming")),
            Err(MarketError::NoData)
        );
    }
}
