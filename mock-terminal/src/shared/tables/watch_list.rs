//! Watch list with an absolute / relative change switch

use rand::seq::index;
use rand::Rng;
use tracing::debug;

use crate::shared::sink::{RowTemplate, RowView, Tone, ViewSink};
use crate::shared::table::{rounded, uniform, Table, TableKind};

const HEADERS: &[&str] = &["Symbol", "Price", "Change", "Volume"];

const CHANGE_COLUMN: usize = 2;

/// Row data keys holding the unrounded values the change column derives from
const ACTUAL_DIFF: &str = "actual-diff";
const PRICE: &str = "price";

#[derive(Debug, Clone, PartialEq)]
pub struct WatchRow {
    pub symbol: String,
    pub price: f64,
    pub diff: f64,
    /// `diff` as percent of `price`
    pub relative_diff: f64,
    pub volume: u64,
}

impl WatchRow {
    pub fn new(symbol: impl Into<String>, price: f64, diff: f64, volume: u64) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            diff,
            relative_diff: relative(diff, price),
            volume,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WatchListTable {
    symbols: Vec<String>,
    relative: bool,
}

impl WatchListTable {
    pub fn new(symbols: Vec<String>) -> Self {
        Self {
            symbols,
            relative: false,
        }
    }

    pub fn is_relative(&self) -> bool {
        self.relative
    }

    fn fill_change(&self, view: &mut RowView, diff: f64, price: f64) {
        let text = format_diff(diff, price, self.relative);
        view.set_tone(CHANGE_COLUMN, Tone::from_signed_text(&text));
        view.set_text(CHANGE_COLUMN, text);
    }
}

fn relative(diff: f64, price: f64) -> f64 {
    if price == 0.0 {
        0.0
    } else {
        diff / price * 100.0
    }
}

/// Change text: signed one decimal, or signed two decimal percent of `price`
pub fn format_diff(diff: f64, price: f64, relative_mode: bool) -> String {
    if relative_mode {
        format!("{:+.2}%", relative(diff, price))
    } else {
        format!("{:+.1}", diff)
    }
}

impl TableKind for WatchListTable {
    type Row = WatchRow;

    fn title(&self) -> &'static str {
        "WATCH LIST"
    }

    fn template(&self) -> RowTemplate {
        RowTemplate::new(HEADERS)
    }

    fn generate_data<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<WatchRow> {
        let len = rng.random_range(3..9).min(self.symbols.len());

        index::sample(rng, self.symbols.len(), len)
            .into_iter()
            .map(|i| {
                let price = uniform(rng, 2000.0);
                // Daily change within +/-10% of the price
                let diff = uniform(rng, price * 0.2) - price * 0.1;
                WatchRow::new(self.symbols[i].clone(), price, diff, rounded(rng, 100_000.0))
            })
            .collect()
    }

    fn format_data(&self, row: &WatchRow) -> Vec<String> {
        vec![
            row.symbol.clone(),
            format!("{:.1}", row.price),
            format_diff(row.diff, row.price, self.relative),
            row.volume.to_string(),
        ]
    }

    fn render_row<S: ViewSink + ?Sized>(&self, row: &WatchRow, template: &RowTemplate, sink: &mut S) {
        let mut view = template.instantiate();
        for (column, text) in self.format_data(row).into_iter().enumerate() {
            view.set_text(column, text);
        }
        view.set_data(ACTUAL_DIFF, row.diff);
        view.set_data(PRICE, row.price);
        self.fill_change(&mut view, row.diff, row.price);
        sink.append_row(view);
    }
}

impl<S: ViewSink> Table<WatchListTable, S> {
    /// Switch the change column between absolute and relative display.
    ///
    /// Every rendered row is recomputed from its cached actual diff, so
    /// repeated switching never compounds rounding.
    pub fn toggle_relative_diff(&mut self) {
        let (kind, body) = self.parts_mut();
        kind.relative = !kind.relative;

        for view in body.rows_mut() {
            let (Some(diff), Some(price)) = (view.data(ACTUAL_DIFF), view.data(PRICE)) else {
                continue;
            };
            kind.fill_change(view, diff, price);
        }

        debug!(
            "Watch list change column now {}",
            if kind.relative { "relative" } else { "absolute" }
        );
    }
}
