//! Order book depth ("price step") table

use std::ops::Range;

use rand::Rng;

use crate::shared::config::LayoutRevision;
use crate::shared::sink::{RowTemplate, Tone, ViewSink};
use crate::shared::table::{rounded, uniform, TableKind};

const HEADERS: &[&str] = &["Qty", "Bid", "Ask", "Qty"];

/// Upper bound of generated prices; maps onto a 100% depth bar
pub const PRICE_SCALE: f64 = 2000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PriceStepRow {
    pub bid_qty: u64,
    pub bid_price: f64,
    pub ask_price: f64,
    pub ask_qty: u64,
}

#[derive(Debug, Clone)]
pub struct PriceStepTable {
    rows: Range<usize>,
}

impl PriceStepTable {
    pub fn new(revision: LayoutRevision) -> Self {
        let rows = match revision {
            LayoutRevision::Full => 3..23,
            LayoutRevision::Compact => 3..8,
        };
        Self { rows }
    }
}

/// Depth bar width in percent for a formatted price (`price * 100 / 2000`)
pub fn bar_width(formatted_price: &str) -> f64 {
    formatted_price.parse::<f64>().unwrap_or(0.0) / 20.0
}

impl TableKind for PriceStepTable {
    type Row = PriceStepRow;

    fn title(&self) -> &'static str {
        "PRICE STEP"
    }

    fn template(&self) -> RowTemplate {
        RowTemplate::new(HEADERS)
            .with_tone(1, Tone::Bid)
            .with_tone(2, Tone::Ask)
    }

    fn generate_data<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<PriceStepRow> {
        let len = rng.random_range(self.rows.clone());
        (0..len)
            .map(|_| PriceStepRow {
                bid_qty: rounded(rng, 100.0),
                bid_price: uniform(rng, PRICE_SCALE),
                ask_price: uniform(rng, PRICE_SCALE),
                ask_qty: rounded(rng, 100.0),
            })
            .collect()
    }

    fn format_data(&self, row: &PriceStepRow) -> Vec<String> {
        vec![
            row.bid_qty.to_string(),
            format!("{:.1}", row.bid_price),
            format!("{:.1}", row.ask_price),
            row.ask_qty.to_string(),
        ]
    }

    fn render_row<S: ViewSink + ?Sized>(&self, row: &PriceStepRow, template: &RowTemplate, sink: &mut S) {
        let mut view = template.instantiate();
        for (column, text) in self.format_data(row).into_iter().enumerate() {
            if column == 1 || column == 2 {
                view.set_bar_width(column, bar_width(&text));
            }
            view.set_text(column, text);
        }
        sink.append_row(view);
    }
}
