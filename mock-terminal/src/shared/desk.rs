//! Panel controller owning every table and control of the terminal
//!
//! Built once at startup. Key presses map to [`Action`]s which
//! [`TradingDesk::handle`] applies synchronously.

use chrono::NaiveDateTime;
use crossterm::event::KeyCode;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use super::clock::Clock;
use super::config::TerminalConfig;
use super::error::TerminalError;
use super::panels::{ManagementPanel, OrderForm, OrderSide, OrderType, Section, Submission, Tab, TabPair};
use super::table::{Display, Table};
use super::tables::{AssetsTable, PositionsTable, PriceStepTable, TradingHistoryTable, WatchListTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    HistoryTab(Tab),
    ToggleRelativeDiff,
    Menu(&'static str),
    ToggleColumn,
    SelectOrderType(OrderType),
    SelectOrderSide(OrderSide),
    Submit,
    Quit,
}

/// Key bindings
pub fn action_for_key(code: KeyCode) -> Option<Action> {
    let action = match code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('1') => Action::HistoryTab(Tab::First),
        KeyCode::Char('2') => Action::HistoryTab(Tab::Second),
        KeyCode::Char('r') | KeyCode::Char('R') => Action::ToggleRelativeDiff,
        KeyCode::Char('o') | KeyCode::Char('O') => Action::Menu("orderbook-menu"),
        KeyCode::Char('p') | KeyCode::Char('P') => Action::Menu("portfolio-menu"),
        KeyCode::Char('a') | KeyCode::Char('A') => Action::Menu("assets-menu"),
        KeyCode::Char('c') | KeyCode::Char('C') => Action::ToggleColumn,
        KeyCode::Char('l') | KeyCode::Char('L') => Action::SelectOrderType(OrderType::Limit),
        KeyCode::Char('m') | KeyCode::Char('M') => Action::SelectOrderType(OrderType::Market),
        KeyCode::Char('s') | KeyCode::Char('S') => Action::SelectOrderType(OrderType::StopLimit),
        KeyCode::Char('x') | KeyCode::Char('X') => Action::SelectOrderType(OrderType::Oco),
        KeyCode::Char('b') | KeyCode::Char('B') => Action::SelectOrderSide(OrderSide::Buy),
        KeyCode::Char('n') | KeyCode::Char('N') => Action::SelectOrderSide(OrderSide::Sell),
        KeyCode::Enter => Action::Submit,
        _ => return None,
    };
    Some(action)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct TradingDesk {
    history: TabPair<PriceStepTable, TradingHistoryTable>,
    watch_list: Table<WatchListTable>,
    positions: Table<PositionsTable>,
    assets: Table<AssetsTable>,
    management: ManagementPanel,
    order_form: OrderForm,
    clock: Clock,
    last_submission: Option<Submission>,
}

impl TradingDesk {
    pub fn new(config: &TerminalConfig, now: NaiveDateTime) -> Self {
        let mut seeder = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut child = || StdRng::from_rng(&mut seeder);

        let history = TabPair::new(
            PriceStepTable::new(config.revision),
            TradingHistoryTable::new(config.revision),
            Tab::First,
            (child(), child()),
        );
        let watch_list = Table::new(
            WatchListTable::new(config.watchlist.clone()),
            Display::Shown,
            child(),
        );

        let management = ManagementPanel::new(Section::Orderbook);
        let display_for = |section| {
            if management.shows(section) {
                Display::Shown
            } else {
                Display::Hidden
            }
        };
        let positions = Table::new(
            PositionsTable::new(config.watchlist.clone()),
            display_for(Section::Portfolio),
            child(),
        );
        let assets = Table::new(
            AssetsTable::new(config.assets.clone()),
            display_for(Section::Assets),
            child(),
        );

        info!(
            "Trading desk ready ({} layout, {} watch list symbols)",
            config.revision.as_str(),
            config.watchlist.len()
        );

        Self {
            history,
            watch_list,
            positions,
            assets,
            management,
            order_form: OrderForm::default(),
            clock: Clock::new(now),
            last_submission: None,
        }
    }

    pub fn handle(&mut self, action: Action) -> Result<Control, TerminalError> {
        match action {
            Action::Quit => return Ok(Control::Quit),
            Action::HistoryTab(tab) => {
                self.history.click(tab);
            }
            Action::ToggleRelativeDiff => self.watch_list.toggle_relative_diff(),
            Action::Menu(menu_id) => {
                self.management.select(menu_id)?;
                self.sync_sections();
            }
            Action::ToggleColumn => {
                self.management.toggle_collapse();
                self.sync_sections();
            }
            Action::SelectOrderType(order_type) => {
                self.order_form.select_type(order_type);
                self.last_submission = None;
            }
            Action::SelectOrderSide(side) => self.order_form.select_side(side),
            Action::Submit => self.last_submission = Some(self.order_form.submit()),
        }
        Ok(Control::Continue)
    }

    /// Show exactly the tables of the selected section; first show renders
    fn sync_sections(&mut self) {
        if self.management.shows(Section::Portfolio) != self.positions.visible() {
            self.positions.toggle();
        }
        if self.management.shows(Section::Assets) != self.assets.visible() {
            self.assets.toggle();
        }
    }

    pub fn tick(&mut self, now: NaiveDateTime) {
        self.clock.tick(now);
    }

    pub fn refresh_date(&mut self, now: NaiveDateTime) {
        self.clock.refresh_date(now);
    }

    pub fn history(&self) -> &TabPair<PriceStepTable, TradingHistoryTable> {
        &self.history
    }

    pub fn watch_list(&self) -> &Table<WatchListTable> {
        &self.watch_list
    }

    pub fn positions(&self) -> &Table<PositionsTable> {
        &self.positions
    }

    pub fn assets(&self) -> &Table<AssetsTable> {
        &self.assets
    }

    pub fn management(&self) -> &ManagementPanel {
        &self.management
    }

    pub fn order_form(&self) -> &OrderForm {
        &self.order_form
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn last_submission(&self) -> Option<Submission> {
        self.last_submission
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sink::ViewSink;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn desk() -> TradingDesk {
        TradingDesk::new(&TerminalConfig::default().with_seed(42), now())
    }

    #[test]
    fn test_initial_layout() {
        let desk = desk();
        assert_eq!(desk.history().selected(), Tab::First);
        assert!(desk.history().first().is_rendered());
        assert!(desk.watch_list().is_rendered());
        assert!(!desk.positions().is_rendered());
        assert!(!desk.assets().is_rendered());
        assert_eq!(desk.clock().time(), "09:30:00");
    }

    #[test]
    fn test_compact_revision() {
        let config = TerminalConfig::default()
            .with_seed(3)
            .with_revision(crate::shared::config::LayoutRevision::Compact)
            .with_watchlist(vec!["BTC".to_string(), "ETH".to_string(), "SOL".to_string()]);
        let mut desk = TradingDesk::new(&config, now());

        assert!((3..=7).contains(&desk.history().first().body().len()));
        assert_eq!(desk.watch_list().body().len(), 3);

        desk.handle(Action::HistoryTab(Tab::Second)).unwrap();
        assert!(desk.history().second().body().len() < 5);
    }

    #[test]
    fn test_same_seed_same_data() {
        let a = desk();
        let b = desk();
        assert_eq!(a.watch_list().body(), b.watch_list().body());
        assert_eq!(a.history().first().body(), b.history().first().body());
    }

    #[test]
    fn test_sections_render_on_first_show() {
        let mut desk = desk();

        desk.handle(Action::Menu("portfolio-menu")).unwrap();
        assert!(desk.positions().visible());
        assert!(desk.positions().is_rendered());
        let rows = desk.positions().body().len();
        assert!(rows >= 1);

        desk.handle(Action::Menu("assets-menu")).unwrap();
        assert!(!desk.positions().visible());
        assert!(desk.assets().visible());
        assert_eq!(desk.assets().body().len(), 3);

        desk.handle(Action::Menu("portfolio-menu")).unwrap();
        assert_eq!(desk.positions().body().len(), rows);
    }

    #[test]
    fn test_collapse_hides_section_tables() {
        let mut desk = desk();
        desk.handle(Action::Menu("assets-menu")).unwrap();

        desk.handle(Action::ToggleColumn).unwrap();
        assert!(desk.management().is_collapsed());
        assert!(!desk.assets().visible());

        desk.handle(Action::ToggleColumn).unwrap();
        assert!(desk.assets().visible());
    }

    #[test]
    fn test_unknown_menu_is_error() {
        let mut desk = desk();
        assert!(matches!(
            desk.handle(Action::Menu("settings-menu")),
            Err(TerminalError::UnknownMenu(_))
        ));
    }

    #[test]
    fn test_history_tabs() {
        let mut desk = desk();
        desk.handle(Action::HistoryTab(Tab::First)).unwrap();
        assert_eq!(desk.history().selected(), Tab::First);

        desk.handle(Action::HistoryTab(Tab::Second)).unwrap();
        assert_eq!(desk.history().selected(), Tab::Second);
        assert!(desk.history().second().visible());
    }

    #[test]
    fn test_order_actions() {
        let mut desk = desk();
        desk.handle(Action::SelectOrderType(OrderType::Oco)).unwrap();
        assert!(desk.order_form().banner().is_some());

        desk.handle(Action::Submit).unwrap();
        assert_eq!(
            desk.last_submission(),
            Some(Submission::Unsupported(OrderType::Oco))
        );

        desk.handle(Action::SelectOrderType(OrderType::Limit)).unwrap();
        assert_eq!(desk.last_submission(), None);
        desk.handle(Action::SelectOrderSide(OrderSide::Sell)).unwrap();
        desk.handle(Action::Submit).unwrap();
        assert_eq!(
            desk.last_submission(),
            Some(Submission::Suppressed {
                order_type: OrderType::Limit,
                side: OrderSide::Sell,
            })
        );
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(action_for_key(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(action_for_key(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(
            action_for_key(KeyCode::Char('2')),
            Some(Action::HistoryTab(Tab::Second))
        );
        assert_eq!(
            action_for_key(KeyCode::Char('P')),
            Some(Action::Menu("portfolio-menu"))
        );
        assert_eq!(action_for_key(KeyCode::Char('z')), None);

        let mut desk = desk();
        assert_eq!(desk.handle(Action::Quit).unwrap(), Control::Quit);
        assert_eq!(
            desk.handle(Action::ToggleRelativeDiff).unwrap(),
            Control::Continue
        );
        assert!(desk.watch_list().kind().is_relative());
    }
}
