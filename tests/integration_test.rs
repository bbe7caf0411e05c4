//! Integration tests for the record contracts.
//!
//! Tests cover:
//! - Fixture records survive JSON and CSV encode/decode unchanged
//! - `CorrelationData` and `LagData` are interchangeable on the wire
//! - Batch validation over decoded input, including duplicates and padded names
//! - Joining decoded batches by stock name and date

mod common;

use common::*;
use proptest::prelude::*;
use stocksent::adapters::csv_codec::CsvCodec;
use stocksent::adapters::json_codec::JsonCodec;
use stocksent::domain::error::RecordError;
use stocksent::domain::line::ReturnHorizon;
use stocksent::domain::record_set::RecordSet;
use stocksent::domain::validation::{validate_batch, ValidationLimits};
use stocksent::ports::record_codec::RecordCodec;

mod fixture_round_trips {
    use super::*;

    #[test]
    fn line_through_json_and_csv() {
        let lines = vec![aapl_line()];
        let json = JsonCodec::default().encode(&lines).unwrap();
        assert_eq!(JsonCodec::default().decode::<LineData>(&json).unwrap(), lines);
        let csv = CsvCodec.encode(&lines).unwrap();
        assert_eq!(CsvCodec.decode::<LineData>(&csv).unwrap(), lines);
    }

    #[test]
    fn lag_through_json_and_csv() {
        let lags = vec![aapl_lag()];
        let json = JsonCodec::new(true).encode(&lags).unwrap();
        assert_eq!(JsonCodec::default().decode::<LagData>(&json).unwrap(), lags);
        let csv = CsvCodec.encode(&lags).unwrap();
        assert_eq!(CsvCodec.decode::<LagData>(&csv).unwrap(), lags);
    }

    #[test]
    fn heatmap_through_json_and_csv() {
        let maps = vec![aapl_heatmap()];
        let json = JsonCodec::default().encode(&maps).unwrap();
        assert_eq!(JsonCodec::default().decode::<HeatmapData>(&json).unwrap(), maps);
        let csv = CsvCodec.encode(&maps).unwrap();
        assert_eq!(CsvCodec.decode::<HeatmapData>(&csv).unwrap(), maps);
    }

    #[test]
    fn correlation_encodes_identically_to_lag() {
        let from_corr = CsvCodec.encode(&[aapl_correlation()]).unwrap();
        let from_lag = CsvCodec.encode(&[aapl_lag()]).unwrap();
        assert_eq!(from_corr, from_lag);

        let decoded: Vec<CorrelationData> = CsvCodec.decode(&from_lag).unwrap();
        assert_eq!(decoded, vec![aapl_lag()]);
    }

    #[test]
    fn fixtures_pass_default_validation() {
        let limits = ValidationLimits::default();
        assert!(validate_batch(&[aapl_line()], &limits).is_clean());
        assert!(validate_batch(&[aapl_lag()], &limits).is_clean());
        assert!(validate_batch(&[aapl_heatmap()], &limits).is_clean());
        assert!(validate_batch(&[aapl_correlation()], &limits).is_clean());
    }

    #[test]
    fn json_to_csv_preserves_values() {
        let input = r#"[
            {"stock_name":"AAPL","date":"2023-01-03","sent_score":0.42,
             "one_day_return":0.012,"two_day_return":-0.004,
             "three_day_return":0.009,"seven_day_return":0.031}
        ]"#;
        let lines: Vec<LineData> = JsonCodec::default().decode(input).unwrap();
        let csv = CsvCodec.encode(&lines).unwrap();
        let back: Vec<LineData> = CsvCodec.decode(&csv).unwrap();
        assert_eq!(back, vec![aapl_line()]);
        assert_eq!(back[0].forward_return(ReturnHorizon::SevenDay), 0.031);
    }
}

mod decoded_batch_validation {
    use super::*;

    #[test]
    fn csv_batch_reports_each_bad_row() {
        let input = "\
stock_name,max_correlation,lag
AAPL,0.67,2
,0.40,1
MSFT,1.20,3
TSLA,0.10,-4
AAPL,0.50,1
";
        let lags: Vec<LagData> = CsvCodec.decode(input).unwrap();
        let report = validate_batch(&lags, &ValidationLimits::default());

        assert_eq!(report.checked, 5);
        let summary: Vec<(usize, &RecordError)> =
            report.failures.iter().map(|f| (f.index, &f.error)).collect();
        assert_eq!(summary.len(), 4);
        assert_eq!(summary[0], (1, &RecordError::EmptyStockName));
        assert!(matches!(summary[1], (2, RecordError::OutOfBounds { .. })));
        assert_eq!(summary[2], (3, &RecordError::NegativeLag { lag: -4 }));
        assert!(matches!(summary[3], (4, RecordError::DuplicateKey { .. })));
    }

    #[test]
    fn padded_stock_name_from_json_is_rejected() {
        let input = r#"[{"stock_name":" AAPL","max_correlation":0.67,"lag":2}]"#;
        let lags: Vec<LagData> = JsonCodec::default().decode(input).unwrap();
        assert_eq!(lags[0].stock_name, " AAPL");

        let report = validate_batch(&lags, &ValidationLimits::default());
        assert_eq!(
            report.failures[0].error,
            RecordError::PaddedStockName {
                stock_name: " AAPL".into()
            }
        );
    }

    #[test]
    fn trailing_space_is_not_a_second_stock() {
        let lags = vec![LagData::new("AAPL", 0.67, 2), LagData::new("AAPL ", 0.5, 1)];
        let report = validate_batch(&lags, &ValidationLimits::default());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].index, 1);
        assert!(matches!(
            report.failures[0].error,
            RecordError::PaddedStockName { .. }
        ));
    }

    #[test]
    fn valid_names_survive_csv_unchanged() {
        let lags = vec![LagData::new("BRK B", 0.67, 2), aapl_lag()];
        assert!(validate_batch(&lags, &ValidationLimits::default()).is_clean());
        let csv = CsvCodec.encode(&lags).unwrap();
        assert_eq!(CsvCodec.decode::<LagData>(&csv).unwrap(), lags);
    }

    #[test]
    fn max_lag_limit_applies_to_decoded_records() {
        let input = r#"[{"stock_name":"AAPL","max_correlation":0.5,"lag":12}]"#;
        let lags: Vec<LagData> = JsonCodec::default().decode(input).unwrap();
        let limits = ValidationLimits {
            max_lag: Some(10),
            ..ValidationLimits::default()
        };
        let report = validate_batch(&lags, &limits);
        assert_eq!(
            report.failures[0].error,
            RecordError::LagExceedsMax { lag: 12, max: 10 }
        );
    }
}

mod joined_records {
    use super::*;

    #[test]
    fn decoded_batches_join_by_stock() {
        let lines_csv = "\
stock_name,date,sent_score,one_day_return,two_day_return,three_day_return,seven_day_return
AAPL,2023-01-04,0.10,0.001,0.002,0.003,0.007
AAPL,2023-01-03,0.42,0.012,-0.004,0.009,0.031
MSFT,2023-01-03,-0.20,0.000,0.010,0.020,0.050
";
        let lines: Vec<LineData> = CsvCodec.decode(lines_csv).unwrap();
        let set = RecordSet::new(lines, vec![aapl_lag()], vec![aapl_heatmap()]);

        assert_eq!(set.stock_names(), vec!["AAPL", "MSFT"]);
        assert_eq!(set.line_on("AAPL", date(2023, 1, 3)), Some(&aapl_line()));
        assert_eq!(set.lines_for("AAPL")[1].date, date(2023, 1, 4));
        assert_eq!(set.lag_for("AAPL").map(|l| l.lag), Some(2));
        assert!(set.lag_for("MSFT").is_none());

        let lag = set.lag_for("AAPL").unwrap().lag as u32;
        let heatmap = set.heatmap_for("AAPL").unwrap();
        assert_eq!(heatmap.at_lag(lag), Some(0.35));
        assert_eq!(set.dates(), vec![date(2023, 1, 3), date(2023, 1, 4)]);
    }

    #[test]
    fn multiple_stocks_share_timeline() {
        let set = RecordSet::new(
            vec![
                make_line("AAPL", "2023-01-03", 0.1),
                make_line("MSFT", "2023-01-05", 0.2),
                make_line("TSLA", "2023-01-04", 0.3),
            ],
            vec![],
            vec![],
        );
        assert_eq!(
            set.dates(),
            vec![date(2023, 1, 3), date(2023, 1, 4), date(2023, 1, 5)]
        );
        assert_eq!(set.line_count(), 3);
    }
}

fn finite() -> impl Strategy<Value = f64> {
    -1e6f64..1e6
}

proptest! {
    #[test]
    fn arbitrary_lines_survive_csv_and_json(
        stock in "[A-Z]{1,5}",
        day in 1u32..=28,
        sent_score in finite(),
        one in finite(),
        two in finite(),
        three in finite(),
        seven in finite(),
    ) {
        let line = LineData::new(stock, date(2023, 2, day), sent_score, one, two, three, seven);
        let lines = vec![line];

        let csv = CsvCodec.encode(&lines).unwrap();
        prop_assert_eq!(&CsvCodec.decode::<LineData>(&csv).unwrap(), &lines);

        let json = JsonCodec::default().encode(&lines).unwrap();
        prop_assert_eq!(&JsonCodec::default().decode::<LineData>(&json).unwrap(), &lines);
    }
}
