//! Interaction wiring between tables and controls

mod management;
mod order_form;
mod tab_pair;

pub use management::{section_for, ManagementPanel, Section, MENU};
pub use order_form::{OrderForm, OrderSide, OrderType, Submission, UNSUPPORTED_BANNER};
pub use tab_pair::{Tab, TabPair};
