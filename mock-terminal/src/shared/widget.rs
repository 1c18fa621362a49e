//! Ratatui widgets painting the trading desk

use itertools::Itertools;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table as TableWidget},
    Frame,
};

use super::desk::TradingDesk;
use super::panels::{OrderSide, OrderType, Section, Submission, Tab, MENU};
use super::sink::{RowView, Tone};
use super::table::{Table, TableKind};
use super::tables::WatchListTable;

const C_BUY: Color = Color::Rgb(100, 220, 100);
const C_SELL: Color = Color::Rgb(220, 100, 100);
const C_NEUTRAL: Color = Color::Rgb(180, 180, 100);
const C_DIM: Color = Color::Rgb(120, 120, 120);
const C_BRIGHT: Color = Color::Rgb(220, 220, 220);
const C_ACCENT: Color = Color::Rgb(100, 180, 220);
const C_BG: Color = Color::Rgb(15, 15, 25);

/// Width in characters of a full (100%) depth bar
const BAR_CELLS: usize = 8;

pub fn render_ui(f: &mut Frame, desk: &TradingDesk) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(f.area());

    render_header(f, chunks[0], desk);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    render_management(f, body[0], desk);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(body[1]);

    render_watch_list(f, right[0], desk.watch_list());
    render_order_form(f, right[1], desk);
}

fn render_header(f: &mut Frame, area: Rect, desk: &TradingDesk) {
    let line = Line::from(vec![
        Span::styled(
            " ◆ MOCK TRADING TERMINAL ◆ ",
            Style::default()
                .fg(Color::Rgb(255, 215, 0))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", desk.clock().date()),
            Style::default().fg(C_DIM),
        ),
        Span::styled(
            format!(" ⏱  {} ", desk.clock().time()),
            Style::default().fg(C_ACCENT),
        ),
        Span::styled(" [Q] Quit ", Style::default().fg(C_DIM)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Rgb(138, 43, 226)))
        .style(Style::default().bg(C_BG));

    f.render_widget(
        Paragraph::new(line).block(block).alignment(Alignment::Center),
        area,
    );
}

fn tab_span(label: String, selected: bool) -> Span<'static> {
    if selected {
        Span::styled(
            label,
            Style::default()
                .fg(Color::Black)
                .bg(C_ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(label, Style::default().fg(C_DIM))
    }
}

fn render_management(f: &mut Frame, area: Rect, desk: &TradingDesk) {
    let management = desk.management();

    if management.is_collapsed() {
        let block = Block::default()
            .title(" MANAGEMENT ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(C_DIM));
        let hint = Paragraph::new(Line::from(Span::styled(
            "[C] expand",
            Style::default().fg(C_DIM),
        )))
        .block(block);
        f.render_widget(hint, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let keys = ["O", "P", "A"];
    let menu = MENU
        .iter()
        .zip(keys)
        .map(|((_, section), key)| {
            tab_span(
                format!(" [{}] {} ", key, section.as_str().to_uppercase()),
                management.selected() == Some(*section),
            )
        })
        .chain(std::iter::once(Span::styled(
            "  [C] collapse",
            Style::default().fg(C_DIM),
        )))
        .collect::<Vec<_>>();
    f.render_widget(Paragraph::new(Line::from(menu)), chunks[0]);

    match management.selected() {
        Some(Section::Orderbook) => render_history(f, chunks[1], desk),
        Some(Section::Portfolio) => render_table(f, chunks[1], desk.positions(), None),
        Some(Section::Assets) => render_table(f, chunks[1], desk.assets(), None),
        None => {}
    }
}

fn render_history(f: &mut Frame, area: Rect, desk: &TradingDesk) {
    let history = desk.history();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let [first, second] = history.titles();
    let tabs = Line::from(vec![
        tab_span(format!(" [1] {} ", first), history.selected() == Tab::First),
        Span::raw(" "),
        tab_span(format!(" [2] {} ", second), history.selected() == Tab::Second),
    ]);
    f.render_widget(Paragraph::new(tabs), chunks[0]);

    match history.selected() {
        Tab::First => render_table(f, chunks[1], history.first(), None),
        Tab::Second => render_table(f, chunks[1], history.second(), None),
    }
}

fn render_watch_list(f: &mut Frame, area: Rect, table: &Table<WatchListTable>) {
    let mode = if table.kind().is_relative() {
        "[R] %"
    } else {
        "[R] abs"
    };
    render_table(f, area, table, Some(mode));
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Neutral => C_BRIGHT,
        Tone::Positive | Tone::Bid => C_BUY,
        Tone::Negative | Tone::Ask => C_SELL,
    }
}

/// Depth bar glyphs for a width in percent, clamped to the cell
pub fn depth_bar(percent: f64, cells: usize) -> String {
    let filled = ((percent / 100.0) * cells as f64)
        .round()
        .clamp(0.0, cells as f64) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(cells - filled))
}

fn row_cells(view: &RowView) -> Vec<Cell<'static>> {
    view.cells()
        .iter()
        .map(|cell| {
            let style = Style::default().fg(tone_color(cell.tone));
            let mut spans = vec![Span::styled(cell.text.clone(), style)];
            if let Some(width) = cell.bar_width {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(depth_bar(width, BAR_CELLS), style));
            }
            Cell::from(Line::from(spans))
        })
        .collect()
}

pub fn render_table<K: TableKind>(
    f: &mut Frame,
    area: Rect,
    table: &Table<K>,
    suffix: Option<&str>,
) {
    let kind = table.kind();
    let title = match suffix {
        Some(suffix) => format!(" {} ({}) ", kind.title(), suffix),
        None => format!(" {} ", kind.title()),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(C_ACCENT))
        .style(Style::default().bg(C_BG));

    let rows = table.body().rows();
    if rows.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No rows",
            Style::default().fg(C_DIM).add_modifier(Modifier::ITALIC),
        )))
        .block(block)
        .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    let template = table.template();
    let widths = template
        .headers()
        .iter()
        .enumerate()
        .map(|(column, _)| {
            let has_bar = rows
                .iter()
                .any(|r| r.cell(column).is_some_and(|c| c.bar_width.is_some()));
            if has_bar {
                Constraint::Min(8 + BAR_CELLS as u16)
            } else {
                Constraint::Fill(1)
            }
        })
        .collect::<Vec<_>>();

    let header = Row::new(template.headers().iter().copied()).style(
        Style::default()
            .fg(C_NEUTRAL)
            .add_modifier(Modifier::BOLD),
    );

    let widget = TableWidget::new(rows.iter().map(|r| Row::new(row_cells(r))), widths)
        .header(header)
        .block(block);
    f.render_widget(widget, area);
}

fn render_order_form(f: &mut Frame, area: Rect, desk: &TradingDesk) {
    let form = desk.order_form();
    let block = Block::default()
        .title(" PLACE ORDER ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(C_ACCENT));

    let radios = OrderType::ALL
        .iter()
        .map(|t| {
            let selected = *t == form.order_type();
            let marker = if selected { "(●)" } else { "(○)" };
            let color = if selected { C_BRIGHT } else { C_DIM };
            Span::styled(format!("{} {} ", marker, t.label()), Style::default().fg(color))
        })
        .collect::<Vec<_>>();

    let side_color = match form.side() {
        OrderSide::Buy => C_BUY,
        OrderSide::Sell => C_SELL,
    };

    let mut lines = vec![
        Line::from(radios),
        Line::from(vec![
            Span::styled("Side  ", Style::default().fg(C_DIM)),
            Span::styled(
                form.side().as_str(),
                Style::default().fg(side_color).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  [B]/[N]", Style::default().fg(C_DIM)),
        ]),
        Line::from(""),
    ];

    lines.extend(form.fields().iter().map(|field| {
        Line::from(vec![
            Span::styled(format!("{:<8}", field), Style::default().fg(C_DIM)),
            Span::styled("________", Style::default().fg(C_BRIGHT)),
        ])
    }));

    lines.push(Line::from(""));
    if let Some(banner) = form.banner() {
        lines.push(Line::from(Span::styled(
            format!("⚠ {}", banner),
            Style::default().fg(C_NEUTRAL).add_modifier(Modifier::BOLD),
        )));
    }
    if let Some(Submission::Suppressed { order_type, side }) = desk.last_submission() {
        lines.push(Line::from(Span::styled(
            format!("{} {} order not sent (demo)", side.as_str(), order_type.label()),
            Style::default().fg(C_DIM),
        )));
    }

    lines.push(Line::from(Span::styled(
        ["[L]", "[M]", "[S]", "[X]", "[Enter] submit"].iter().join(" "),
        Style::default().fg(C_DIM),
    )));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
