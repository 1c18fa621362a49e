//! Management panel: menu driven section switcher inside a collapsible column

use tracing::{info, warn};

use crate::shared::error::TerminalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Orderbook,
    Portfolio,
    Assets,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Orderbook => "orderbook",
            Section::Portfolio => "portfolio",
            Section::Assets => "assets",
        }
    }
}

/// Static menu id to section mapping
pub const MENU: &[(&str, Section)] = &[
    ("orderbook-menu", Section::Orderbook),
    ("portfolio-menu", Section::Portfolio),
    ("assets-menu", Section::Assets),
];

/// Resolve a menu id to its section
pub fn section_for(menu_id: &str) -> Result<Section, TerminalError> {
    MENU.iter()
        .find(|(id, _)| *id == menu_id)
        .map(|(_, section)| *section)
        .ok_or_else(|| TerminalError::UnknownMenu(menu_id.to_string()))
}

#[derive(Debug, Clone)]
pub struct ManagementPanel {
    selected: Option<Section>,
    last: Section,
    collapsed: bool,
}

impl Default for ManagementPanel {
    fn default() -> Self {
        Self::new(Section::Orderbook)
    }
}

impl ManagementPanel {
    pub fn new(initial: Section) -> Self {
        Self {
            selected: Some(initial),
            last: initial,
            collapsed: false,
        }
    }

    /// Show the section mapped to `menu_id`, expanding the column if needed
    pub fn select(&mut self, menu_id: &str) -> Result<Section, TerminalError> {
        let section = section_for(menu_id).inspect_err(|e| warn!("{}", e))?;

        if self.collapsed || self.selected != Some(section) {
            info!("Management panel showing {}", section.as_str());
        }
        self.collapsed = false;
        self.selected = Some(section);
        self.last = section;
        Ok(section)
    }

    /// Collapse (hiding content and clearing the menu selection) or expand
    /// back to the last shown section
    pub fn toggle_collapse(&mut self) {
        self.collapsed = !self.collapsed;
        self.selected = if self.collapsed { None } else { Some(self.last) };
        info!(
            "Management column {}",
            if self.collapsed { "collapsed" } else { "expanded" }
        );
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn selected(&self) -> Option<Section> {
        self.selected
    }

    /// Whether `section` is the one currently on screen
    pub fn shows(&self, section: Section) -> bool {
        !self.collapsed && self.selected == Some(section)
    }
}
