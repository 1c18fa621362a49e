//! Table variants
//!
//! Each variant generates its own placeholder rows and formats them into a
//! row template; the shared lifecycle lives in [`crate::shared::table`].

mod assets;
mod positions;
mod price_step;
mod trading_history;
mod watch_list;

pub use assets::{AssetRow, AssetsTable};
pub use positions::{PositionRow, PositionSide, PositionsTable};
pub use price_step::{bar_width, PriceStepRow, PriceStepTable, PRICE_SCALE};
pub use trading_history::{seconds_to_time, TradeRow, TradingHistoryTable, SECONDS_IN_DAY};
pub use watch_list::{format_diff, WatchListTable, WatchRow};
