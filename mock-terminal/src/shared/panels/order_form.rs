//! Order placement form
//!
//! Radio selection picks the order type and with it the visible field set.
//! Nothing is ever routed: submission is suppressed, and types the terminal
//! does not implement raise a static warning banner.

use tracing::{info, warn};

pub const UNSUPPORTED_BANNER: &str = "This order type is not available yet";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderType {
    Limit,
    Market,
    StopLimit,
    Oco,
}

impl OrderType {
    pub const ALL: [OrderType; 4] = [
        OrderType::Limit,
        OrderType::Market,
        OrderType::StopLimit,
        OrderType::Oco,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrderType::Limit => "Limit",
            OrderType::Market => "Market",
            OrderType::StopLimit => "Stop-Limit",
            OrderType::Oco => "OCO",
        }
    }

    /// Input fields shown while this type is selected
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            OrderType::Limit => &["Price", "Amount", "Total"],
            OrderType::Market => &["Amount"],
            OrderType::StopLimit => &["Stop", "Limit", "Amount", "Total"],
            OrderType::Oco => &["Price", "Stop", "Limit", "Amount", "Total"],
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, OrderType::Limit | OrderType::Market)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "Buy",
            OrderSide::Sell => "Sell",
        }
    }
}

/// Result of pressing submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Form accepted locally, nothing sent
    Suppressed { order_type: OrderType, side: OrderSide },
    /// Type not implemented, warning banner shown
    Unsupported(OrderType),
}

#[derive(Debug, Clone)]
pub struct OrderForm {
    order_type: OrderType,
    side: OrderSide,
    banner: Option<&'static str>,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            order_type: OrderType::Limit,
            side: OrderSide::Buy,
            banner: None,
        }
    }
}

impl OrderForm {
    pub fn select_type(&mut self, order_type: OrderType) {
        self.order_type = order_type;
        self.banner = if order_type.is_supported() {
            None
        } else {
            Some(UNSUPPORTED_BANNER)
        };
    }

    pub fn select_side(&mut self, side: OrderSide) {
        self.side = side;
    }

    pub fn submit(&mut self) -> Submission {
        if !self.order_type.is_supported() {
            self.banner = Some(UNSUPPORTED_BANNER);
            warn!("{} order submitted but not supported", self.order_type.label());
            return Submission::Unsupported(self.order_type);
        }

        info!(
            "Suppressed {} {} order submission",
            self.side.as_str(),
            self.order_type.label()
        );
        Submission::Suppressed {
            order_type: self.order_type,
            side: self.side,
        }
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn side(&self) -> OrderSide {
        self.side
    }

    pub fn banner(&self) -> Option<&'static str> {
        self.banner
    }

    pub fn fields(&self) -> &'static [&'static str] {
        self.order_type.fields()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radio_selects_field_set() {
        let mut form = OrderForm::default();
        assert_eq!(form.fields(), &["Price", "Amount", "Total"]);

        form.select_type(OrderType::Market);
        assert_eq!(form.fields(), &["Amount"]);
        assert_eq!(form.banner(), None);
    }

    #[test]
    fn test_unsupported_type_shows_banner() {
        let mut form = OrderForm::default();
        form.select_type(OrderType::StopLimit);
        assert_eq!(form.banner(), Some(UNSUPPORTED_BANNER));

        assert_eq!(form.submit(), Submission::Unsupported(OrderType::StopLimit));

        form.select_type(OrderType::Limit);
        assert_eq!(form.banner(), None);
    }

    #[test]
    fn test_submit_is_suppressed() {
        let mut form = OrderForm::default();
        form.select_side(OrderSide::Sell);
        form.select_type(OrderType::Market);

        assert_eq!(
            form.submit(),
            Submission::Suppressed {
                order_type: OrderType::Market,
                side: OrderSide::Sell,
            }
        );
        assert_eq!(form.banner(), None);
    }

    #[test]
    fn test_supported_types() {
        let supported: Vec<_> = OrderType::ALL
            .iter()
            .filter(|t| t.is_supported())
            .map(|t| t.label())
            .collect();
        assert_eq!(supported, vec!["Limit", "Market"]);
    }
}
