//! Integration tests for the fetch-and-consolidate pipeline.
//!
//! Tests cover:
//! - The worked example (colliding AAA rows, one BBB row) through both the
//!   mock port and a seeded in-memory SQLite store
//! - Overload equivalence: every single-date form equals the degenerate
//!   range form
//! - Empty results (no matching rows) are empty maps, not errors
//! - Connectivity failures propagate instead of yielding an empty result

mod common;

use common::*;
use stockdata::domain::error::StockDataError;
use stockdata::ports::transaction_port::TransactionPort;

mod worked_example {
    use super::*;

    #[test]
    fn consolidates_collisions_through_mock_port() {
        let port = MockTransactionPort::new().with_rows(sample_rows());

        let history = port
            .fetch_all_range(date(2014, 1, 1), date(2014, 1, 2))
            .unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history["AAA"].len(), 1);
        assert_eq!(
            history["AAA"][&date(2014, 1, 1)],
            Transaction::new(150, 30)
        );
        assert_eq!(
            history["BBB"][&date(2014, 1, 2)],
            Transaction::new(50, 5)
        );
    }

    #[test]
    fn only_tickers_with_matching_rows_appear() {
        let port = MockTransactionPort::new().with_rows(sample_rows());

        // BBB has no rows on 2014-01-01: it must not appear at all.
        let history = port.fetch_all_on(date(2014, 1, 1)).unwrap();
        assert_eq!(history.len(), 1);
        assert!(history.contains_key("AAA"));
    }

    #[test]
    fn requested_ticker_without_rows_is_absent_not_empty() {
        let port = MockTransactionPort::new().with_rows(sample_rows());

        let history = port
            .fetch_ticker_range("ZZZ", date(2014, 1, 1), date(2014, 1, 2))
            .unwrap();
        assert!(history.is_empty());
    }
}

mod overload_equivalence {
    use super::*;

    #[test]
    fn single_ticker_single_date_equals_degenerate_range() {
        let port = MockTransactionPort::new().with_rows(sample_rows());
        let d = date(2014, 1, 1);

        assert_eq!(
            port.fetch_ticker_on("AAA", d).unwrap(),
            port.fetch_ticker_range("AAA", d, d).unwrap()
        );
    }

    #[test]
    fn ticker_set_single_date_equals_degenerate_range() {
        let port = MockTransactionPort::new().with_rows(sample_rows());
        let d = date(2014, 1, 2);
        let tickers = vec!["AAA".to_string(), "BBB".to_string()];

        assert_eq!(
            port.fetch_tickers_on(&tickers, d).unwrap(),
            port.fetch(&tickers, d, d).unwrap()
        );
    }

    #[test]
    fn unfiltered_single_date_equals_degenerate_range() {
        let port = MockTransactionPort::new().with_rows(sample_rows());
        let d = date(2014, 1, 2);

        assert_eq!(
            port.fetch_all_on(d).unwrap(),
            port.fetch_all_range(d, d).unwrap()
        );
    }

    #[test]
    fn single_ticker_forms_equal_set_of_one() {
        let port = MockTransactionPort::new().with_rows(sample_rows());
        let tickers = vec!["AAA".to_string()];

        assert_eq!(
            port.fetch_ticker_range("AAA", date(2014, 1, 1), date(2014, 1, 2))
                .unwrap(),
            port.fetch(&tickers, date(2014, 1, 1), date(2014, 1, 2))
                .unwrap()
        );
    }
}

mod empty_and_error_paths {
    use super::*;

    #[test]
    fn no_matching_rows_is_an_empty_map_not_an_error() {
        let port = MockTransactionPort::new().with_rows(sample_rows());

        let history = port
            .fetch_all_range(date(2020, 1, 1), date(2020, 12, 31))
            .unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn store_with_no_rows_at_all_yields_empty_map() {
        let port = MockTransactionPort::new();
        let history = port.fetch_all_on(date(2014, 1, 1)).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn connectivity_failure_propagates_not_silent_empty() {
        // A driver failure must reach the caller; it must never read as
        // "no rows matched".
        let port = MockTransactionPort::new()
            .with_rows(sample_rows())
            .with_error("connection refused");

        let result = port.fetch_all_on(date(2014, 1, 1));
        assert!(matches!(result, Err(StockDataError::Database { .. })));
    }
}

#[cfg(feature = "sqlite")]
mod sqlite_end_to_end {
    use super::*;
    use stockdata::adapters::sqlite_adapter::SqliteAdapter;

    fn seeded_store() -> SqliteAdapter {
        let store = SqliteAdapter::in_memory().unwrap();
        store.initialize_schema().unwrap();
        store.insert_rows(&sample_rows()).unwrap();
        store
    }

    #[test]
    fn worked_example_through_real_store() {
        let store = seeded_store();

        let history = store
            .fetch_all_range(date(2014, 1, 1), date(2014, 1, 2))
            .unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(
            history["AAA"][&date(2014, 1, 1)],
            Transaction::new(150, 30)
        );
        assert_eq!(
            history["BBB"][&date(2014, 1, 2)],
            Transaction::new(50, 5)
        );
    }

    #[test]
    fn returned_dates_stay_within_the_requested_range() {
        let store = SqliteAdapter::in_memory().unwrap();
        store.initialize_schema().unwrap();
        store
            .insert_rows(&[
                row("AAA", 20131231, 1, 1),
                row("AAA", 20140101, 2, 1),
                row("AAA", 20140630, 3, 1),
                row("AAA", 20141231, 4, 1),
                row("AAA", 20150101, 5, 1),
            ])
            .unwrap();

        let from = date(2014, 1, 1);
        let to = date(2014, 12, 31);
        let history = store.fetch_all_range(from, to).unwrap();

        for series in history.values() {
            for key in series.keys() {
                assert!(*key >= from && *key <= to);
            }
        }
        assert_eq!(history["AAA"].len(), 3);
    }

    #[test]
    fn mock_and_sqlite_agree_on_the_worked_example() {
        let mock = MockTransactionPort::new().with_rows(sample_rows());
        let store = seeded_store();

        let from = date(2014, 1, 1);
        let to = date(2014, 1, 2);
        assert_eq!(
            mock.fetch_all_range(from, to).unwrap(),
            store.fetch_all_range(from, to).unwrap()
        );
    }

    #[test]
    fn ticker_filter_binding_order_survives_execution() {
        let store = seeded_store();

        // Same set, both orders: identical results either way.
        let ab = vec!["AAA".to_string(), "BBB".to_string()];
        let ba = vec!["BBB".to_string(), "AAA".to_string()];
        let from = date(2014, 1, 1);
        let to = date(2014, 1, 2);

        assert_eq!(
            store.fetch(&ab, from, to).unwrap(),
            store.fetch(&ba, from, to).unwrap()
        );
    }
}
