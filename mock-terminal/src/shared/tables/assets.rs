//! Wallet balances, one row per configured asset

use rand::Rng;

use crate::shared::sink::RowTemplate;
use crate::shared::table::{uniform, TableKind};

const HEADERS: &[&str] = &["Asset", "Total", "Available", "In Orders"];

#[derive(Debug, Clone, PartialEq)]
pub struct AssetRow {
    pub asset: String,
    pub total: f64,
    pub available: f64,
}

impl AssetRow {
    pub fn locked(&self) -> f64 {
        self.total - self.available
    }
}

#[derive(Debug, Clone)]
pub struct AssetsTable {
    assets: Vec<String>,
}

impl AssetsTable {
    pub fn new(assets: Vec<String>) -> Self {
        Self { assets }
    }
}

impl TableKind for AssetsTable {
    type Row = AssetRow;

    fn title(&self) -> &'static str {
        "ASSETS"
    }

    fn template(&self) -> RowTemplate {
        RowTemplate::new(HEADERS)
    }

    fn generate_data<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<AssetRow> {
        self.assets
            .iter()
            .map(|asset| {
                let total = uniform(rng, 100.0);
                AssetRow {
                    asset: asset.clone(),
                    total,
                    available: total * rng.random::<f64>(),
                }
            })
            .collect()
    }

    fn format_data(&self, row: &AssetRow) -> Vec<String> {
        vec![
            row.asset.clone(),
            format!("{:.4}", row.total),
            format!("{:.4}", row.available),
            format!("{:.4}", row.locked()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::{Display, Table};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assets() -> Vec<String> {
        vec!["BTC".to_string(), "ETH".to_string(), "USDT".to_string()]
    }

    #[test]
    fn test_one_row_per_asset() {
        let table = Table::new(
            AssetsTable::new(assets()),
            Display::Shown,
            StdRng::seed_from_u64(2),
        );
        let names: Vec<_> = table
            .body()
            .rows()
            .iter()
            .map(|r| r.text(0).unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["BTC", "ETH", "USDT"]);
    }

    #[test]
    fn test_available_never_exceeds_total() {
        let kind = AssetsTable::new(assets());
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            for row in kind.generate_data(&mut rng) {
                assert!(row.available <= row.total);
                assert!(row.locked() >= 0.0);
            }
        }
    }

    #[test]
    fn test_format_data() {
        let kind = AssetsTable::new(assets());
        let row = AssetRow {
            asset: "ETH".to_string(),
            total: 2.5,
            available: 1.25,
        };
        assert_eq!(kind.format_data(&row), vec!["ETH", "2.5000", "1.2500", "1.2500"]);
    }
}
