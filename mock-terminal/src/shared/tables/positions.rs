//! Open positions with unrealized PnL

use rand::seq::index;
use rand::Rng;

use crate::shared::sink::{RowTemplate, Tone, ViewSink};
use crate::shared::table::{rounded, uniform, TableKind};

const HEADERS: &[&str] = &["Symbol", "Side", "Qty", "Entry", "Mark", "PnL"];

const SIDE_COLUMN: usize = 1;
const PNL_COLUMN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionSide {
    Long,
    Short,
}

impl PositionSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionSide::Long => "Long",
            PositionSide::Short => "Short",
        }
    }
}

impl std::fmt::Display for PositionSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionRow {
    pub symbol: String,
    pub side: PositionSide,
    pub qty: u64,
    pub entry: f64,
    pub mark: f64,
}

impl PositionRow {
    /// Unrealized PnL, sign flipped for shorts
    pub fn pnl(&self) -> f64 {
        let pnl = (self.mark - self.entry) * self.qty as f64;
        match self.side {
            PositionSide::Long => pnl,
            PositionSide::Short => -pnl,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PositionsTable {
    symbols: Vec<String>,
}

impl PositionsTable {
    pub fn new(symbols: Vec<String>) -> Self {
        Self { symbols }
    }
}

impl TableKind for PositionsTable {
    type Row = PositionRow;

    fn title(&self) -> &'static str {
        "POSITIONS"
    }

    fn template(&self) -> RowTemplate {
        RowTemplate::new(HEADERS)
    }

    fn generate_data<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<PositionRow> {
        if self.symbols.is_empty() {
            return Vec::new();
        }
        let len = rng.random_range(1..7).min(self.symbols.len());

        index::sample(rng, self.symbols.len(), len)
            .into_iter()
            .map(|i| {
                let symbol = self.symbols[i].clone();
                let entry = uniform(rng, 2000.0);
                PositionRow {
                    symbol,
                    side: if rng.random_bool(0.5) {
                        PositionSide::Long
                    } else {
                        PositionSide::Short
                    },
                    qty: rounded(rng, 99.0) + 1,
                    entry,
                    mark: entry + uniform(rng, entry * 0.1) - entry * 0.05,
                }
            })
            .collect()
    }

    fn format_data(&self, row: &PositionRow) -> Vec<String> {
        vec![
            row.symbol.clone(),
            row.side.to_string(),
            row.qty.to_string(),
            format!("{:.1}", row.entry),
            format!("{:.1}", row.mark),
            format!("{:+.2}", row.pnl()),
        ]
    }

    fn render_row<S: ViewSink + ?Sized>(&self, row: &PositionRow, template: &RowTemplate, sink: &mut S) {
        let mut view = template.instantiate();
        for (column, text) in self.format_data(row).into_iter().enumerate() {
            view.set_text(column, text);
        }

        let side_tone = match row.side {
            PositionSide::Long => Tone::Bid,
            PositionSide::Short => Tone::Ask,
        };
        view.set_tone(SIDE_COLUMN, side_tone);

        let pnl_tone = view
            .text(PNL_COLUMN)
            .map(Tone::from_signed_text)
            .unwrap_or_default();
        view.set_tone(PNL_COLUMN, pnl_tone);

        sink.append_row(view);
    }
}
