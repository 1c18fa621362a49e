/// Mock Trading Terminal - Shared Library
///
/// Paints order book depth, trade history, watch list, positions and asset
/// panels from randomly generated placeholder data. There is no market data
/// feed and no order routing.
///
/// The library includes:
/// - The render-once table lifecycle and its view sink
/// - The table variants and their data generators
/// - Tab, management panel and order form controls
/// - Ratatui widgets for the whole desk
pub mod shared;

// Re-export commonly used types for convenience
pub use shared::clock::Clock;
pub use shared::config::{LayoutRevision, TerminalConfig};
pub use shared::desk::{action_for_key, Action, Control, TradingDesk};
pub use shared::error::TerminalError;
pub use shared::sink::{Cell, RowTemplate, RowView, TableBody, Tone, ViewSink};
pub use shared::table::{Display, Table, TableKind};
pub use shared::widget::render_ui;
