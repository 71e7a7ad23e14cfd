//! Wide-to-long reshaping (the melt/unpivot step).

use crate::wide::WideTable;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// One (state, month, value) observation produced by unpivoting a wide
/// table. Serializes with the date as "YYYY-MM-DD" for the chart layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongRecord {
    pub state: String,
    pub date: NaiveDate,
    pub value: Option<f64>,
}

/// Unpivot a wide table into long records.
///
/// With `group_by_state` set, rows are first collapsed to one per state:
/// each date column becomes the arithmetic mean across that state's
/// regions, missing cells ignored. A (state, date) whose inputs are all
/// missing keeps a `None` value rather than being dropped, so the output
/// row count is always (#distinct states) x (#date columns) when grouped
/// and (#rows) x (#date columns) when not.
pub fn to_long(table: &WideTable, group_by_state: bool) -> Vec<LongRecord> {
    let n_dates = table.dates().len();
    let records = if group_by_state {
        // Per state, a (sum, count) accumulator per date column.
        let mut groups: BTreeMap<&str, Vec<(f64, u32)>> = BTreeMap::new();
        for row in table.rows() {
            let acc = groups
                .entry(row.state.as_str())
                .or_insert_with(|| vec![(0.0, 0); n_dates]);
            for (i, value) in row.values.iter().enumerate() {
                if let Some(v) = value {
                    acc[i].0 += v;
                    acc[i].1 += 1;
                }
            }
        }

        let mut records = Vec::with_capacity(groups.len() * n_dates);
        for (state, acc) in groups {
            for (i, date) in table.dates().iter().enumerate() {
                let (sum, count) = acc[i];
                records.push(LongRecord {
                    state: state.to_string(),
                    date: *date,
                    value: (count > 0).then(|| sum / f64::from(count)),
                });
            }
        }
        records
    } else {
        let mut records = Vec::with_capacity(table.rows().len() * n_dates);
        for row in table.rows() {
            for (i, date) in table.dates().iter().enumerate() {
                records.push(LongRecord {
                    state: row.state.clone(),
                    date: *date,
                    value: row.values[i],
                });
            }
        }
        records
    };

    log::info!(
        "[HMA Debug] long: reshaped {} into {} records (grouped: {})",
        table.name(),
        records.len(),
        group_by_state
    );
    records
}
