//! Render-once table lifecycle shared by every panel table
//!
//! A [`Table`] owns its body, its row template and a `rendered` flag. Data is
//! generated and rendered the first time the table is visible, either at
//! construction or at the first [`Table::toggle`] that shows it, and never again.

use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

use super::sink::{RowTemplate, TableBody, ViewSink};

/// Display state of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Shown,
    Hidden,
}

impl Display {
    pub fn flipped(self) -> Self {
        match self {
            Display::Shown => Display::Hidden,
            Display::Hidden => Display::Shown,
        }
    }
}

/// Per-variant behaviour plugged into [`Table`]
pub trait TableKind {
    /// Raw, unformatted row
    type Row;

    /// Panel title
    fn title(&self) -> &'static str;

    /// Template every row is cloned from
    fn template(&self) -> RowTemplate;

    /// Generate the raw rows of the whole table
    fn generate_data<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Self::Row>;

    /// Format a raw row into one display string per column
    fn format_data(&self, row: &Self::Row) -> Vec<String>;

    /// Clone the template, fill it from `row` and append it to `sink`
    fn render_row<S: ViewSink + ?Sized>(&self, row: &Self::Row, template: &RowTemplate, sink: &mut S) {
        let mut view = template.instantiate();
        for (column, text) in self.format_data(row).into_iter().enumerate() {
            view.set_text(column, text);
        }
        sink.append_row(view);
    }
}

pub struct Table<K, S = TableBody> {
    kind: K,
    template: RowTemplate,
    body: S,
    display: Display,
    rendered: bool,
    rng: StdRng,
}

impl<K: TableKind> Table<K> {
    /// Create a table rendering into an in-memory [`TableBody`]
    pub fn new(kind: K, display: Display, rng: StdRng) -> Self {
        Self::with_sink(kind, display, rng, TableBody::new())
    }
}

impl<K: TableKind, S: ViewSink> Table<K, S> {
    /// Create a table rendering into `sink`, rendering immediately if shown
    pub fn with_sink(kind: K, display: Display, rng: StdRng, sink: S) -> Self {
        let template = kind.template();
        let mut table = Self {
            kind,
            template,
            body: sink,
            display,
            rendered: false,
            rng,
        };

        if table.visible() {
            table.render();
        }
        table
    }

    pub fn visible(&self) -> bool {
        self.display == Display::Shown
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    /// Flip the display state, rendering on the first show
    pub fn toggle(&mut self) {
        self.display = self.display.flipped();
        self.render();
    }

    /// Render the whole body. Runs once; returns the number of rows appended.
    pub fn render(&mut self) -> usize {
        if self.rendered {
            return 0;
        }

        let rows = self.kind.generate_data(&mut self.rng);
        for row in &rows {
            self.kind.render_row(row, &self.template, &mut self.body);
        }
        self.rendered = true;

        debug!("Rendered {} rows into {}", rows.len(), self.kind.title());
        rows.len()
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }

    pub fn template(&self) -> &RowTemplate {
        &self.template
    }

    pub fn body(&self) -> &S {
        &self.body
    }

    /// Kind and body together, for variants that re-walk their rendered rows
    pub fn parts_mut(&mut self) -> (&mut K, &mut S) {
        (&mut self.kind, &mut self.body)
    }
}

/// Uniform sample in `[0, scale)`
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, scale: f64) -> f64 {
    rng.random::<f64>() * scale
}

/// Uniform sample in `[0, scale]` rounded to the nearest integer
pub(crate) fn rounded<R: Rng + ?Sized>(rng: &mut R, scale: f64) -> u64 {
    uniform(rng, scale).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sink::RowView;
    use rand::SeedableRng;

    const HEADERS: &[&str] = &["Value"];

    /// Emits a fixed number of rows so render counts are predictable
    struct Fixed(usize);

    impl TableKind for Fixed {
        type Row = usize;

        fn title(&self) -> &'static str {
            "FIXED"
        }

        fn template(&self) -> RowTemplate {
            RowTemplate::new(HEADERS)
        }

        fn generate_data<R: Rng + ?Sized>(&self, _rng: &mut R) -> Vec<usize> {
            (0..self.0).collect()
        }

        fn format_data(&self, row: &usize) -> Vec<String> {
            vec![row.to_string()]
        }
    }

    /// Sink that only counts appends
    #[derive(Default)]
    struct Counting {
        rows: Vec<RowView>,
        appends: usize,
    }

    impl ViewSink for Counting {
        fn append_row(&mut self, row: RowView) {
            self.appends += 1;
            self.rows.push(row);
        }

        fn rows_mut(&mut self) -> &mut [RowView] {
            &mut self.rows
        }

        fn len(&self) -> usize {
            self.rows.len()
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_visible_table_renders_at_construction() {
        let table = Table::new(Fixed(4), Display::Shown, rng());
        assert!(table.visible());
        assert!(table.is_rendered());
        assert_eq!(table.body().len(), 4);
        assert_eq!(table.body().rows()[3].text(0), Some("3"));
    }

    #[test]
    fn test_hidden_table_renders_on_first_toggle() {
        let mut table = Table::new(Fixed(3), Display::Hidden, rng());
        assert!(!table.visible());
        assert!(!table.is_rendered());
        assert!(table.body().is_empty());

        table.toggle();
        assert!(table.visible());
        assert_eq!(table.body().len(), 3);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut table = Table::with_sink(Fixed(5), Display::Shown, rng(), Counting::default());
        assert_eq!(table.body().appends, 5);

        assert_eq!(table.render(), 0);
        for _ in 0..4 {
            table.toggle();
        }
        assert_eq!(table.body().appends, 5);
        assert!(table.visible());
    }

    #[test]
    fn test_toggle_flips_display() {
        let mut table = Table::new(Fixed(0), Display::Shown, rng());
        table.toggle();
        assert!(!table.visible());
        table.toggle();
        assert!(table.visible());
    }

    #[test]
    fn test_rounded_within_scale() {
        let mut rng = rng();
        for _ in 0..1000 {
            assert!(rounded(&mut rng, 100.0) <= 100);
            let u = uniform(&mut rng, 2000.0);
            assert!((0.0..2000.0).contains(&u));
        }
    }
}
