//! Two tables sharing one slot, switched by a pair of mutually exclusive tabs

use rand::rngs::StdRng;
use tracing::info;

use crate::shared::table::{Display, Table, TableKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    First,
    Second,
}

impl Tab {
    fn other(self) -> Self {
        match self {
            Tab::First => Tab::Second,
            Tab::Second => Tab::First,
        }
    }
}

pub struct TabPair<A: TableKind, B: TableKind> {
    first: Table<A>,
    second: Table<B>,
    selected: Tab,
}

impl<A: TableKind, B: TableKind> TabPair<A, B> {
    /// Build both tables; only the selected one starts visible (and renders)
    pub fn new(first: A, second: B, selected: Tab, rngs: (StdRng, StdRng)) -> Self {
        let display = |tab: Tab| {
            if tab == selected {
                Display::Shown
            } else {
                Display::Hidden
            }
        };

        Self {
            first: Table::new(first, display(Tab::First), rngs.0),
            second: Table::new(second, display(Tab::Second), rngs.1),
            selected,
        }
    }

    pub fn selected(&self) -> Tab {
        self.selected
    }

    /// Handle a click on `tab`. Clicking the selected tab does nothing; the
    /// other tab flips both tables and the selection. Returns whether anything
    /// changed.
    pub fn click(&mut self, tab: Tab) -> bool {
        if tab == self.selected {
            return false;
        }

        self.selected = self.selected.other();
        self.first.toggle();
        self.second.toggle();

        info!(
            "Switched to {}",
            match self.selected {
                Tab::First => self.first.kind().title(),
                Tab::Second => self.second.kind().title(),
            }
        );
        true
    }

    pub fn first(&self) -> &Table<A> {
        &self.first
    }

    pub fn second(&self) -> &Table<B> {
        &self.second
    }

    pub fn titles(&self) -> [&'static str; 2] {
        [self.first.kind().title(), self.second.kind().title()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::LayoutRevision;
    use crate::shared::sink::ViewSink;
    use crate::shared::tables::{PriceStepTable, TradingHistoryTable};
    use rand::SeedableRng;

    fn history(selected: Tab) -> TabPair<PriceStepTable, TradingHistoryTable> {
        TabPair::new(
            PriceStepTable::new(LayoutRevision::Full),
            TradingHistoryTable::new(LayoutRevision::Full),
            selected,
            (StdRng::seed_from_u64(1), StdRng::seed_from_u64(2)),
        )
    }

    #[test]
    fn test_initial_state_follows_selection() {
        let pair = history(Tab::First);
        assert!(pair.first().visible());
        assert!(pair.first().is_rendered());
        assert!(!pair.second().visible());
        assert!(!pair.second().is_rendered());

        let pair = history(Tab::Second);
        assert!(!pair.first().visible());
        assert!(pair.second().visible());
    }

    #[test]
    fn test_click_selected_tab_is_noop() {
        let mut pair = history(Tab::First);
        let rows = pair.first().body().len();

        assert!(!pair.click(Tab::First));
        assert_eq!(pair.selected(), Tab::First);
        assert!(pair.first().visible());
        assert!(!pair.second().visible());
        assert!(!pair.second().is_rendered());
        assert_eq!(pair.first().body().len(), rows);
    }

    #[test]
    fn test_click_other_tab_flips_both() {
        let mut pair = history(Tab::First);

        assert!(pair.click(Tab::Second));
        assert_eq!(pair.selected(), Tab::Second);
        assert!(!pair.first().visible());
        assert!(pair.second().visible());
        assert!(pair.second().is_rendered());

        assert!(pair.click(Tab::First));
        assert_eq!(pair.selected(), Tab::First);
        assert!(pair.first().visible());
        assert!(!pair.second().visible());
    }

    #[test]
    fn test_repeat_switching_keeps_rows() {
        let mut pair = history(Tab::First);
        pair.click(Tab::Second);
        let first_rows = pair.first().body().rows().to_vec();
        let second_rows = pair.second().body().rows().to_vec();

        for tab in [Tab::First, Tab::Second, Tab::First, Tab::Second] {
            pair.click(tab);
        }
        assert_eq!(pair.first().body().rows(), first_rows.as_slice());
        assert_eq!(pair.second().body().rows(), second_rows.as_slice());
    }

    #[test]
    fn test_titles() {
        assert_eq!(history(Tab::First).titles(), ["PRICE STEP", "TRADING HISTORY"]);
    }
}
