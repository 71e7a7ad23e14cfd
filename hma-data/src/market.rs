//! Startup context holding the three loaded housing tables.

use crate::dataset::Dataset;
use crate::error::MarketError;
use crate::wide::WideTable;
use std::path::Path;
use std::rc::Rc;

struct Slots {
    listing_price: Result<WideTable, MarketError>,
    home_value: Result<WideTable, MarketError>,
    sale_count: Result<WideTable, MarketError>,
}

/// The three wide tables, loaded once at startup and shared immutably
/// for the life of the process.
///
/// Cheaply cloneable (via `Rc`) so it can be captured by every Dioxus
/// effect closure in a single-threaded WASM app. Each slot keeps its own
/// load result: a malformed file degrades only its own dashboard section
/// while the other two keep rendering.
#[derive(Clone)]
pub struct MarketData {
    slots: Rc<Slots>,
}

impl MarketData {
    /// Parse the three embedded CSV strings (the WASM path).
    pub fn from_csv_strs(listing_price: &str, home_value: &str, sale_count: &str) -> Self {
        let parse = |dataset: Dataset, text: &str| {
            WideTable::from_csv(dataset.source_filename(), text)
        };
        Self::log_failures(Self {
            slots: Rc::new(Slots {
                listing_price: parse(Dataset::ListingPrice, listing_price),
                home_value: parse(Dataset::HomeValue, home_value),
                sale_count: parse(Dataset::SaleCount, sale_count),
            }),
        })
    }

    /// Read the three conventional filenames from a directory (the
    /// native path, used by tests and tooling).
    pub fn load_dir(dir: &Path) -> Self {
        let load = |dataset: Dataset| WideTable::load(&dir.join(dataset.source_filename()));
        Self::log_failures(Self {
            slots: Rc::new(Slots {
                listing_price: load(Dataset::ListingPrice),
                home_value: load(Dataset::HomeValue),
                sale_count: load(Dataset::SaleCount),
            }),
        })
    }

    fn log_failures(self) -> Self {
        for dataset in Dataset::ALL {
            if let Err(e) = self.table(dataset) {
                log::error!("[HMA Debug] market: {} unavailable: {}", dataset.slug(), e);
            }
        }
        self
    }

    /// The load result for one series. Callers branch per section; an
    /// `Err` here never takes down the other sections.
    pub fn table(&self, dataset: Dataset) -> &Result<WideTable, MarketError> {
        match dataset {
            Dataset::ListingPrice => &self.slots.listing_price,
            Dataset::HomeValue => &self.slots.home_value,
            Dataset::SaleCount => &self.slots.sale_count,
        }
    }

    /// True when not a single series loaded.
    pub fn is_empty(&self) -> bool {
        Dataset::ALL.iter().all(|&d| self.table(d).is_err())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_CSV: &str = "\
RegionID,SizeRank,RegionName,RegionType,StateName,2024-01-31,2024-02-29
1,1,\"Los Angeles, CA\",msa,California,100,110
";

    #[test]
    fn one_bad_file_degrades_only_its_own_slot() {
        let market = MarketData::from_csv_strs(GOOD_CSV, "RegionID\n1\n", GOOD_CSV);

        assert!(market.table(Dataset::ListingPrice).is_ok());
        assert!(market.table(Dataset::HomeValue).is_err());
        assert!(market.table(Dataset::SaleCount).is_ok());
        assert!(!market.is_empty());
    }

    #[test]
    fn all_slots_failing_is_reported_as_empty() {
        let market = MarketData::from_csv_strs("", "", "");
        assert!(market.is_empty());
    }

    #[test]
    fn clones_share_the_loaded_tables() {
        let market = MarketData::from_csv_strs(GOOD_CSV, GOOD_CSV, GOOD_CSV);
        let clone = market.clone();
        let a = market.table(Dataset::HomeValue).as_ref().unwrap();
        let b = clone.table(Dataset::HomeValue).as_ref().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn load_dir_reports_missing_files_per_slot() {
        let market = MarketData::load_dir(Path::new("/nonexistent"));
        for dataset in Dataset::ALL {
            assert!(market.table(dataset).is_err(), "{dataset} should be missing");
        }
    }
}
