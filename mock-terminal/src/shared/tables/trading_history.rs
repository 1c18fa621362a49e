//! Trade history table

use std::ops::Range;

use rand::Rng;

use crate::shared::config::LayoutRevision;
use crate::shared::sink::RowTemplate;
use crate::shared::table::{rounded, uniform, TableKind};

const HEADERS: &[&str] = &["Time", "Price", "Volume", "Qty", "Value"];

pub const SECONDS_IN_DAY: u64 = 24 * 3600;

/// Largest gap between two consecutive trades
pub const MAX_STEP_SECONDS: u64 = 3600;

#[derive(Debug, Clone, PartialEq)]
pub struct TradeRow {
    /// Seconds since midnight
    pub time: u64,
    pub price: f64,
    pub volume: f64,
    pub qty: u64,
    pub value: u64,
}

#[derive(Debug, Clone)]
pub struct TradingHistoryTable {
    rows: Range<usize>,
}

impl TradingHistoryTable {
    pub fn new(revision: LayoutRevision) -> Self {
        let rows = match revision {
            LayoutRevision::Full => 0..20,
            LayoutRevision::Compact => 0..5,
        };
        Self { rows }
    }
}

/// `H:M:S` without zero padding
pub fn seconds_to_time(seconds: u64) -> String {
    let hour = seconds / 3600;
    let minute = (seconds % 3600) / 60;
    let second = seconds % 60;
    format!("{}:{}:{}", hour, minute, second)
}

impl TableKind for TradingHistoryTable {
    type Row = TradeRow;

    fn title(&self) -> &'static str {
        "TRADING HISTORY"
    }

    fn template(&self) -> RowTemplate {
        RowTemplate::new(HEADERS)
    }

    fn generate_data<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<TradeRow> {
        let len = rng.random_range(self.rows.clone());
        let mut time = rounded(rng, SECONDS_IN_DAY as f64);

        (0..len)
            .map(|_| {
                time = (time + rounded(rng, MAX_STEP_SECONDS as f64)) % SECONDS_IN_DAY;
                TradeRow {
                    time,
                    price: uniform(rng, 2000.0),
                    volume: uniform(rng, 10.0),
                    qty: rounded(rng, 100.0),
                    value: rounded(rng, 10000.0),
                }
            })
            .collect()
    }

    fn format_data(&self, row: &TradeRow) -> Vec<String> {
        vec![
            seconds_to_time(row.time),
            format!("{:.1}", row.price),
            format!("{:.2}", row.volume),
            row.qty.to_string(),
            row.value.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sink::ViewSink;
    use crate::shared::table::{Display, Table};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seconds_to_time_unpadded() {
        assert_eq!(seconds_to_time(0), "0:0:0");
        assert_eq!(seconds_to_time(3661), "1:1:1");
        assert_eq!(seconds_to_time(86399), "23:59:59");
        assert_eq!(seconds_to_time(45 * 60 + 7), "0:45:7");
    }

    #[test]
    fn test_timestamps_advance_with_wraparound() {
        let kind = TradingHistoryTable::new(LayoutRevision::Full);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..200 {
            let rows = kind.generate_data(&mut rng);
            assert!(rows.len() < 20);

            for pair in rows.windows(2) {
                assert!(pair[1].time < SECONDS_IN_DAY);
                // Step measured modulo the day boundary
                let step = (pair[1].time + SECONDS_IN_DAY - pair[0].time) % SECONDS_IN_DAY;
                assert!(step <= MAX_STEP_SECONDS, "step {}", step);
            }
        }
    }

    #[test]
    fn test_compact_row_count() {
        let kind = TradingHistoryTable::new(LayoutRevision::Compact);
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..200 {
            assert!(kind.generate_data(&mut rng).len() < 5);
        }
    }

    #[test]
    fn test_format_data() {
        let kind = TradingHistoryTable::new(LayoutRevision::Full);
        let row = TradeRow {
            time: 7 * 3600 + 5,
            price: 1999.96,
            volume: 3.14159,
            qty: 12,
            value: 9000,
        };
        assert_eq!(
            kind.format_data(&row),
            vec!["7:0:5", "2000.0", "3.14", "12", "9000"]
        );
    }

    #[test]
    fn test_rendered_rows_match_generated() {
        let kind = TradingHistoryTable::new(LayoutRevision::Full);
        let expected = kind.generate_data(&mut StdRng::seed_from_u64(11)).len();

        let mut table = Table::new(kind, Display::Hidden, StdRng::seed_from_u64(11));
        table.toggle();
        assert_eq!(table.body().len(), expected);
        assert_eq!(table.render(), 0);
    }
}
