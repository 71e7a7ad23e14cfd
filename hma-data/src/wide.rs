//! Wide-format housing tables: one row per metro region, one column per
//! month-end date.
//!
//! The source CSVs put a fixed run of region metadata columns first
//! (RegionID, SizeRank, RegionName, ..., StateName) followed by one value
//! column per month, labeled with that month's last date. The loader
//! splits the header at the first label that parses as a date, parses the
//! rest strictly, and keeps the values as `Option<f64>` so missing cells
//! survive every downstream step.
//!
//! Tables are loaded once at startup and never mutated; every transform
//! over them returns a new derived value.

use crate::dates::{self, DATE_FORMAT};
use crate::error::MarketError;
use crate::filter::{DateSpan, StateFilter};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

/// Header label that carries the state for each region row.
pub const STATE_COLUMN: &str = "StateName";

/// Minimum number of metadata columns ahead of the date run. The source
/// files carry five or six; anything shorter is malformed.
pub const MIN_META_COLUMNS: usize = 5;

/// One region's row: its metadata cells plus one value per date column.
#[derive(Debug, Clone, PartialEq)]
pub struct WideRow {
    /// The StateName cell, duplicated out of `meta` for direct access.
    pub state: String,
    /// All metadata cells, in header order.
    pub meta: Vec<String>,
    /// One entry per date column; `None` is a missing observation.
    pub values: Vec<Option<f64>>,
}

/// An immutable wide table: regions down, months across.
#[derive(Debug, Clone, PartialEq)]
pub struct WideTable {
    name: String,
    meta_columns: Vec<String>,
    dates: Vec<NaiveDate>,
    rows: Vec<WideRow>,
}

impl WideTable {
    /// Parse a wide CSV held in memory (the WASM `include_str!` path).
    ///
    /// `name` identifies the source in errors and log lines. Fails when
    /// the metadata prefix is shorter than [`MIN_META_COLUMNS`] or lacks
    /// a `StateName` column, when no date columns follow it, when any
    /// date label fails strict parsing, or when the date labels are not
    /// in ascending order. Blank or non-numeric value cells are kept as
    /// missing, never treated as a load failure.
    pub fn from_csv(name: &str, csv_text: &str) -> Result<Self, MarketError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_text.as_bytes());

        let labels: Vec<String> = rdr
            .headers()
            .map_err(|e| MarketError::load(name, e.to_string()))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // The metadata prefix is everything before the first header label
        // that parses as a date.
        let split = labels
            .iter()
            .position(|l| NaiveDate::parse_from_str(l, DATE_FORMAT).is_ok())
            .unwrap_or(labels.len());

        if split < MIN_META_COLUMNS {
            return Err(MarketError::load(
                name,
                format!("expected at least {MIN_META_COLUMNS} metadata columns, found {split}"),
            ));
        }
        if split == labels.len() {
            return Err(MarketError::load(name, "no date columns after the metadata prefix"));
        }

        let meta_columns = labels[..split].to_vec();
        let state_idx = meta_columns
            .iter()
            .position(|c| c == STATE_COLUMN)
            .ok_or_else(|| MarketError::load(name, format!("missing required '{STATE_COLUMN}' column")))?;

        // Strict suffix parsing: one unparseable label fails the load
        // instead of silently breaking every later date comparison.
        let mut parsed_dates = Vec::with_capacity(labels.len() - split);
        for label in &labels[split..] {
            parsed_dates.push(dates::parse_date(label)?);
        }
        if !parsed_dates.windows(2).all(|w| w[0] < w[1]) {
            return Err(MarketError::load(name, "date columns are not in ascending order"));
        }

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|e| MarketError::load(name, e.to_string()))?;
            let meta: Vec<String> = (0..split)
                .map(|i| record.get(i).unwrap_or("").trim().to_string())
                .collect();
            let values: Vec<Option<f64>> = (split..labels.len())
                .map(|i| record.get(i).and_then(|cell| cell.trim().parse::<f64>().ok()))
                .collect();
            rows.push(WideRow {
                state: meta[state_idx].clone(),
                meta,
                values,
            });
        }

        log::info!(
            "[HMA Debug] wide: loaded {} with {} regions x {} months",
            name,
            rows.len(),
            parsed_dates.len()
        );

        Ok(Self {
            name: name.to_string(),
            meta_columns,
            dates: parsed_dates,
            rows,
        })
    }

    /// Read and parse a wide CSV from disk (the native path).
    pub fn load(path: &Path) -> Result<Self, MarketError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let text = std::fs::read_to_string(path)
            .map_err(|e| MarketError::load(&name, e.to_string()))?;
        Self::from_csv(&name, &text)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn meta_columns(&self) -> &[String] {
        &self.meta_columns
    }

    /// The month-end dates, ascending.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn rows(&self) -> &[WideRow] {
        &self.rows
    }

    /// Distinct state names present in the table, sorted.
    pub fn states(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.rows.iter().map(|r| r.state.as_str()).collect();
        set.into_iter().map(String::from).collect()
    }

    /// Rows matching the state selection. An unmatched name yields an
    /// empty slice, which downstream treats as valid-but-empty.
    pub fn rows_for(&self, state: &StateFilter) -> Vec<&WideRow> {
        self.rows.iter().filter(|r| state.matches(&r.state)).collect()
    }

    /// Project the table into displayable grid cells: metadata columns
    /// plus only the date columns inside `span`, rows filtered by state.
    /// Missing values render as empty cells.
    pub fn grid_view(&self, state: &StateFilter, span: &DateSpan) -> GridView {
        let window: Vec<usize> = self
            .dates
            .iter()
            .enumerate()
            .filter(|(_, d)| span.contains(**d))
            .map(|(i, _)| i)
            .collect();

        let mut columns = self.meta_columns.clone();
        columns.extend(window.iter().map(|&i| dates::format_date(&self.dates[i])));

        let rows = self
            .rows_for(state)
            .into_iter()
            .map(|row| {
                let mut cells = row.meta.clone();
                cells.extend(window.iter().map(|&i| match row.values[i] {
                    Some(v) => format_cell(v),
                    None => String::new(),
                }));
                cells
            })
            .collect();

        GridView { columns, rows }
    }
}

/// A wide table rendered to display strings for the data grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Whole numbers print without a fraction; everything else keeps two digits.
fn format_cell(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const SAMPLE_CSV: &str = "\
RegionID,SizeRank,RegionName,RegionType,StateName,2024-01-31,2024-02-29,2024-03-31
394913,1,\"New York, NY\",msa,New York,3500,3550,3600
753899,2,\"Los Angeles, CA\",msa,California,2900,,2950
394514,3,\"Dallas, TX\",msa,Texas,1800,1820,1790
395055,4,\"San Diego, CA\",msa,California,3100,3140,3160
";

    fn sample_table() -> WideTable {
        WideTable::from_csv("listing_price.csv", SAMPLE_CSV).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn splits_metadata_and_date_columns() {
        let table = sample_table();
        assert_eq!(
            table.meta_columns(),
            ["RegionID", "SizeRank", "RegionName", "RegionType", "StateName"]
        );
        assert_eq!(
            table.dates(),
            [ymd(2024, 1, 31), ymd(2024, 2, 29), ymd(2024, 3, 31)]
        );
        assert_eq!(table.rows().len(), 4);
    }

    #[test]
    fn blank_cells_become_missing_values() {
        let table = sample_table();
        let la = &table.rows()[1];
        assert_eq!(la.values, [Some(2900.0), None, Some(2950.0)]);
    }

    #[test]
    fn tolerates_a_wider_metadata_prefix() {
        // Some source files carry a sixth metadata column.
        let csv = "\
RegionID,SizeRank,RegionName,RegionType,StateName,State,2024-01-31
394913,1,\"New York, NY\",msa,New York,NY,3500
";
        let table = WideTable::from_csv("home_value.csv", csv).unwrap();
        assert_eq!(table.meta_columns().len(), 6);
        assert_eq!(table.rows()[0].state, "New York");
    }

    #[test]
    fn rejects_short_metadata_prefix() {
        let csv = "RegionName,StateName,2024-01-31\nNew York,New York,3500\n";
        match WideTable::from_csv("bad.csv", csv) {
            Err(MarketError::Load { name, reason }) => {
                assert_eq!(name, "bad.csv");
                assert!(reason.contains("metadata columns"));
            }
            other => panic!("expected Load error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unparseable_date_label() {
        // "2024-06" is the kind of label the source data pipeline let
        // through silently; here it fails the load.
        let csv = "\
RegionID,SizeRank,RegionName,RegionType,StateName,2024-01-31,2024-06
1,1,\"A, A\",msa,Ohio,100,200
";
        match WideTable::from_csv("bad.csv", csv) {
            Err(MarketError::DateParse { label }) => assert_eq!(label, "2024-06"),
            other => panic!("expected DateParse error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_state_column() {
        let csv = "RegionID,SizeRank,RegionName,RegionType,Region,2024-01-31\n1,1,A,msa,B,100\n";
        match WideTable::from_csv("bad.csv", csv) {
            Err(MarketError::Load { reason, .. }) => assert!(reason.contains(STATE_COLUMN)),
            other => panic!("expected Load error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unordered_date_columns() {
        let csv = "\
RegionID,SizeRank,RegionName,RegionType,StateName,2024-02-29,2024-01-31
1,1,A,msa,Ohio,100,200
";
        match WideTable::from_csv("bad.csv", csv) {
            Err(MarketError::Load { reason, .. }) => assert!(reason.contains("ascending")),
            other => panic!("expected Load error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_table_with_no_date_columns() {
        let csv = "RegionID,SizeRank,RegionName,RegionType,StateName\n1,1,A,msa,Ohio\n";
        assert!(matches!(
            WideTable::from_csv("bad.csv", csv),
            Err(MarketError::Load { .. })
        ));
    }

    #[test]
    fn load_reports_a_missing_file() {
        let err = WideTable::load(Path::new("/nonexistent/listing_price.csv")).unwrap_err();
        assert!(matches!(err, MarketError::Load { .. }));
    }

    #[test]
    fn states_are_distinct_and_sorted() {
        let table = sample_table();
        assert_eq!(table.states(), ["California", "New York", "Texas"]);
    }

    #[test]
    fn rows_for_filters_by_exact_state() {
        let table = sample_table();
        assert_eq!(table.rows_for(&StateFilter::from_label("California")).len(), 2);
        assert_eq!(table.rows_for(&StateFilter::UnitedStates).len(), 4);
        assert!(table.rows_for(&StateFilter::from_label("Wyoming")).is_empty());
    }

    #[test]
    fn grid_view_windows_date_columns_to_the_span() {
        let table = sample_table();
        let span = DateSpan::new(ymd(2024, 2, 1), ymd(2024, 3, 31));
        let grid = table.grid_view(&StateFilter::from_label("California"), &span);

        assert_eq!(grid.columns.len(), 5 + 2);
        assert_eq!(&grid.columns[5..], ["2024-02-29", "2024-03-31"]);
        assert_eq!(grid.rows.len(), 2);
        // Los Angeles has a missing February value: empty cell.
        assert_eq!(grid.rows[0][5], "");
        assert_eq!(grid.rows[0][6], "2950");
    }

    #[test]
    fn grid_view_for_unmatched_state_is_empty_not_an_error() {
        let table = sample_table();
        let span = DateSpan::new(ymd(2024, 1, 1), ymd(2024, 12, 31));
        let grid = table.grid_view(&StateFilter::from_label("Alaska"), &span);
        assert!(grid.rows.is_empty());
        assert_eq!(grid.columns.len(), 5 + 3);
    }
}
