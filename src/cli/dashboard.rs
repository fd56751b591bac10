use std::path::PathBuf;

use chrono::NaiveDate;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use rand::seq::SliceRandom;
use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::error::Result;
use crate::fmt::number;
use crate::loader::{self, SnapshotCache};
use crate::settings::{load_settings, shellexpand_path};
use crate::tui::{money_span, wrap_text, FOOTER_STYLE, HEADER_STYLE, SELECTED_STYLE};
use crate::views::{self, Filter};

const GREETINGS: &[&str] = &[
    "Let's see who still owes us.",
    "The ledger never forgets.",
    "Another day, another overdue invoice.",
    "Right, who hasn't paid?",
    "The receivables send their regards.",
    "Collections report, coming up.",
    "Somebody's balance is about to be noticed.",
];

const BOLD: Style = Style::new().add_modifier(Modifier::BOLD);
const HEADER_ROW_STYLE: Style = Style::new()
    .fg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Overview,
    Clients,
    Salespeople,
}

const TABS: &[(Tab, &str)] = &[
    (Tab::Overview, "[1] Overview"),
    (Tab::Clients, "[2] Clients"),
    (Tab::Salespeople, "[3] Salespeople"),
];

enum InputMode {
    Normal,
    DateRange(String),
    GotoPage(String),
}

struct PageRow {
    client: String,
    balance: f64,
    due: Option<NaiveDate>,
}

struct ViewData {
    total_balance: f64,
    open_count: usize,
    distinct_clients: usize,
    monthly: Vec<(String, f64)>,
    top_debtors: Vec<(String, f64)>,
    ranking: Vec<(String, f64)>,
    page_rows: Vec<PageRow>,
    page_count: usize,
    filtered_count: usize,
}

impl ViewData {
    fn empty() -> Self {
        Self {
            total_balance: 0.0,
            open_count: 0,
            distinct_clients: 0,
            monthly: Vec::new(),
            top_debtors: Vec::new(),
            ranking: Vec::new(),
            page_rows: Vec::new(),
            page_count: 1,
            filtered_count: 0,
        }
    }
}

struct Dashboard {
    snapshot_path: PathBuf,
    cache: SnapshotCache,
    greeting: String,
    tab: Tab,
    filter: Filter,
    labels: Vec<String>,
    /// 0 = all, i>0 = labels[i-1]
    selector: usize,
    page: usize,
    mode: InputMode,
    status_message: Option<String>,
    data: ViewData,
}

impl Dashboard {
    fn new(snapshot_path: PathBuf) -> Self {
        let mut rng = rand::thread_rng();
        let greeting = GREETINGS.choose(&mut rng).unwrap_or(&"Hello.").to_string();
        Self {
            snapshot_path,
            cache: SnapshotCache::new(),
            greeting,
            tab: Tab::Overview,
            filter: Filter::default(),
            labels: Vec::new(),
            selector: 0,
            page: 1,
            mode: InputMode::Normal,
            status_message: None,
            data: ViewData::empty(),
        }
    }

    /// Rebuild every derived view from the (cached) snapshot and the current
    /// filter state. The snapshot itself is never mutated.
    fn recompute(&mut self) -> Result<()> {
        let snapshot = self.cache.load(&self.snapshot_path)?;

        self.labels = snapshot.salesperson_labels();
        if self.selector > self.labels.len() {
            self.selector = 0;
        }
        self.filter.salesperson = if self.selector == 0 {
            None
        } else {
            Some(self.labels[self.selector - 1].clone())
        };

        let filtered = views::apply(&snapshot.entries, &self.filter);
        let kpis = views::kpis(&filtered);
        self.page = views::clamp_page(self.page, filtered.len());
        let page_rows = views::recent_page(&filtered, self.page)
            .into_iter()
            .map(|e| PageRow {
                client: e.client.clone(),
                balance: e.balance,
                due: e.due,
            })
            .collect();

        self.data = ViewData {
            total_balance: kpis.total_balance,
            open_count: kpis.open_count,
            distinct_clients: kpis.distinct_clients,
            monthly: views::monthly_series(&filtered),
            top_debtors: views::top_debtors(&filtered),
            ranking: views::salesperson_ranking(&filtered),
            page_rows,
            page_count: views::page_count(filtered.len()),
            filtered_count: filtered.len(),
        };
        Ok(())
    }

    fn refresh(&mut self) {
        if let Err(e) = self.recompute() {
            self.status_message = Some(format!("Reload failed: {e}"));
        }
    }

    fn selector_label(&self) -> &str {
        if self.selector == 0 {
            "all"
        } else {
            &self.labels[self.selector - 1]
        }
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let border_style = Style::default().fg(Color::DarkGray);

        let [header_area, sep1, kpi_area, sep2, tabs_area, content_area, footer_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .areas(area);

        frame.render_widget(
            Paragraph::new(format!(" Delinquency Dashboard. {}", self.greeting))
                .style(HEADER_STYLE),
            header_area,
        );

        let sep_line = "━".repeat(area.width as usize);
        let sep_widget = Paragraph::new(sep_line.as_str()).style(border_style);
        frame.render_widget(sep_widget.clone(), sep1);
        frame.render_widget(sep_widget, sep2);

        self.draw_kpis(frame, kpi_area);
        self.draw_tabs(frame, tabs_area);

        match self.tab {
            Tab::Overview => self.draw_overview(frame, content_area),
            Tab::Clients => self.draw_clients(frame, content_area),
            Tab::Salespeople => self.draw_salespeople(frame, content_area),
        }

        self.draw_footer(frame, footer_area);
    }

    fn draw_kpis(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let [left, mid, right] = Layout::horizontal([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .areas(area);

        let kpi = |label: &str, value: Line<'static>| {
            Paragraph::new(vec![
                Line::from(Span::styled(format!(" {label}"), HEADER_ROW_STYLE)),
                value,
            ])
        };

        frame.render_widget(
            kpi(
                "Total outstanding",
                Line::from(vec![Span::raw(" "), money_span(self.data.total_balance)]),
            ),
            left,
        );
        frame.render_widget(
            kpi(
                "Open items",
                Line::from(format!(" {}", number(self.data.open_count as i64))),
            ),
            mid,
        );
        frame.render_widget(
            kpi(
                "Delinquent clients",
                Line::from(format!(" {}", number(self.data.distinct_clients as i64))),
            ),
            right,
        );
    }

    fn draw_tabs(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let mut spans = vec![Span::raw(" ")];
        for (tab, title) in TABS {
            let style = if *tab == self.tab { SELECTED_STYLE } else { FOOTER_STYLE };
            spans.push(Span::styled(format!(" {title} "), style));
            spans.push(Span::raw(" "));
        }

        let range_desc = match self.filter.range {
            Some((start, end)) => format!(
                "{} to {}",
                start.format("%d/%m/%Y"),
                end.format("%d/%m/%Y")
            ),
            None => "any".to_string(),
        };
        let summary = format!(
            "Salesperson: {}   Due: {} ",
            self.selector_label(),
            range_desc
        );

        let [tabs_left, summary_right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(summary.len() as u16)])
                .areas(area);
        frame.render_widget(Paragraph::new(Line::from(spans)), tabs_left);
        frame.render_widget(
            Paragraph::new(summary).style(FOOTER_STYLE),
            summary_right,
        );
    }

    fn draw_overview(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        if self.data.monthly.is_empty() {
            frame.render_widget(
                Paragraph::new(" No dated rows match the current filters.").style(FOOTER_STYLE),
                area,
            );
            return;
        }

        let multi_year = {
            let years: Vec<&str> = self
                .data
                .monthly
                .iter()
                .filter_map(|(k, _)| k.get(0..4))
                .collect();
            years.windows(2).any(|w| w[0] != w[1])
        };

        let max_val = self
            .data
            .monthly
            .iter()
            .map(|(_, v)| *v)
            .fold(0.0f64, f64::max);
        let (top_tick, mid_tick) = y_axis_ticks(max_val);
        let top_label = format_compact(top_tick);
        let mid_label = format_compact(mid_tick);
        let y_label_width = top_label.len().max(mid_label.len()) as u16 + 1;

        let [y_axis_area, bar_area] =
            Layout::horizontal([Constraint::Length(y_label_width), Constraint::Fill(1)])
                .areas(area);

        // Y-axis labels: top tick near the top, mid tick at the middle
        let inner_height = bar_area.height.saturating_sub(2); // title + month labels
        let mid_row = inner_height / 2;
        let mut y_lines: Vec<Line> = vec![Line::from("")];
        for row in 0..inner_height {
            if row == 0 {
                y_lines.push(Line::from(Span::styled(
                    format!("{:>width$}", top_label, width = y_label_width as usize),
                    FOOTER_STYLE,
                )));
            } else if row == mid_row {
                y_lines.push(Line::from(Span::styled(
                    format!("{:>width$}", mid_label, width = y_label_width as usize),
                    FOOTER_STYLE,
                )));
            } else {
                y_lines.push(Line::from(""));
            }
        }
        frame.render_widget(Paragraph::new(y_lines), y_axis_area);

        let bar_style = Style::default().fg(Color::Rgb(235, 110, 90));
        let groups: Vec<BarGroup> = self
            .data
            .monthly
            .iter()
            .map(|(key, total)| {
                let bars = vec![Bar::default().value(total.round() as u64).style(bar_style)];
                BarGroup::default()
                    .label(Line::from(month_label(key, multi_year)))
                    .bars(&bars)
            })
            .collect();

        let block = Block::default()
            .title("Outstanding by due month")
            .title_style(BOLD)
            .borders(Borders::NONE);

        let mut chart = BarChart::default()
            .block(block)
            .bar_width(5)
            .bar_gap(0)
            .group_gap(1);
        for group in &groups {
            chart = chart.data(group.clone());
        }
        frame.render_widget(chart, bar_area);
    }

    fn draw_clients(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let top_height = (self.data.top_debtors.len() as u16 + 2).min(13);
        let [table_area, top_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(top_height)]).areas(area);

        // Recent clients, newest due date first, one fixed-size page at a time
        let title = format!(
            "Recent clients \u{2014} page {}/{} ({} rows)",
            self.page,
            self.data.page_count,
            number(self.data.filtered_count as i64)
        );

        let client_width = table_area.width.saturating_sub(2 + 12 + 18 + 4) as usize;
        let header = Row::new(vec!["Due", "Client", "Balance"]).style(HEADER_ROW_STYLE);
        let rows: Vec<Row> = self
            .data
            .page_rows
            .iter()
            .map(|r| {
                let due = r
                    .due
                    .map(|d| d.format("%d/%m/%Y").to_string())
                    .unwrap_or_else(|| "\u{2014}".to_string());
                let (client, lines) = wrap_text(&r.client, client_width.max(10));
                Row::new(vec![
                    Cell::from(due),
                    Cell::from(client),
                    Cell::from(Line::from(money_span(r.balance)).right_aligned()),
                ])
                .height(lines)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Fill(1),
                Constraint::Length(18),
            ],
        )
        .header(header)
        .block(Block::default().title(title).title_style(BOLD).borders(Borders::NONE));
        frame.render_widget(table, table_area);

        // Top debtors, bar length proportional to the biggest balance
        let max_total = self
            .data
            .top_debtors
            .first()
            .map(|(_, v)| *v)
            .unwrap_or(0.0);
        let name_width = self
            .data
            .top_debtors
            .iter()
            .map(|(n, _)| n.chars().count())
            .max()
            .unwrap_or(10)
            .min(30);
        let bar_space = top_area.width.saturating_sub(name_width as u16 + 22) as usize;

        let mut lines = vec![Line::from(Span::styled(" Top debtors", BOLD))];
        for (name, total) in &self.data.top_debtors {
            let bar_len = if max_total > 0.0 {
                ((total / max_total) * bar_space as f64).round() as usize
            } else {
                0
            };
            lines.push(Line::from(vec![
                Span::raw(format!(" {:<width$} ", truncate(name, 30), width = name_width)),
                Span::styled("\u{2587}".repeat(bar_len.max(1)), Style::default().fg(Color::Rgb(235, 110, 90))),
                Span::raw(" "),
                money_span(*total),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), top_area);
    }

    fn draw_salespeople(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let table_height = (self.data.ranking.len() as u16 + 2).min(area.height / 2);
        let [chart_area, table_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(table_height)]).areas(area);

        let bar_style = Style::default().fg(Color::Rgb(235, 110, 90));
        let groups: Vec<BarGroup> = self
            .data
            .ranking
            .iter()
            .map(|(label, total)| {
                let bars = vec![Bar::default().value(total.round() as u64).style(bar_style)];
                BarGroup::default()
                    .label(Line::from(label.clone()))
                    .bars(&bars)
            })
            .collect();

        let block = Block::default()
            .title("Outstanding by salesperson")
            .title_style(BOLD)
            .borders(Borders::NONE);
        let mut chart = BarChart::default()
            .block(block)
            .bar_width(7)
            .bar_gap(0)
            .group_gap(2);
        for group in &groups {
            chart = chart.data(group.clone());
        }
        frame.render_widget(chart, chart_area);

        let mut lines = vec![Line::from(Span::styled(" Ranking", BOLD))];
        for (label, total) in &self.data.ranking {
            lines.push(Line::from(vec![
                Span::raw(format!(" {:<12}", label)),
                money_span(*total),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), table_area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        match &self.mode {
            InputMode::DateRange(buf) => {
                frame.render_widget(
                    Paragraph::new(format!(
                        " Due range (dd/mm/yyyy dd/mm/yyyy, empty clears): {buf}\u{2588}"
                    ))
                    .style(Style::default().fg(Color::Yellow)),
                    area,
                );
            }
            InputMode::GotoPage(buf) => {
                frame.render_widget(
                    Paragraph::new(format!(" Go to page: {buf}\u{2588}"))
                        .style(Style::default().fg(Color::Yellow)),
                    area,
                );
            }
            InputMode::Normal => {
                if let Some(msg) = &self.status_message {
                    frame.render_widget(
                        Paragraph::new(format!(" {msg}"))
                            .style(Style::default().fg(Color::Yellow)),
                        area,
                    );
                } else {
                    let hints = match self.tab {
                        Tab::Clients => {
                            " 1-3=tab  \u{2190}/\u{2192}=salesperson  d=due range  c=clear range  n/p=page  g=goto page  r=refresh  q=quit"
                        }
                        _ => {
                            " 1-3=tab  \u{2190}/\u{2192}=salesperson  d=due range  c=clear range  r=refresh  q=quit"
                        }
                    };
                    frame.render_widget(Paragraph::new(hints).style(FOOTER_STYLE), area);
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    /// Returns true when the dashboard should exit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match &mut self.mode {
            InputMode::DateRange(buf) => {
                match code {
                    KeyCode::Esc => self.mode = InputMode::Normal,
                    KeyCode::Backspace => {
                        buf.pop();
                    }
                    KeyCode::Char(c) if c.is_ascii_digit() || c == '/' || c == ' ' => {
                        buf.push(c);
                    }
                    KeyCode::Enter => {
                        let input = buf.clone();
                        self.mode = InputMode::Normal;
                        match parse_range(&input) {
                            Ok(range) => {
                                self.filter.range = range;
                                self.page = 1;
                                self.refresh();
                            }
                            Err(msg) => self.status_message = Some(msg),
                        }
                    }
                    _ => {}
                }
                false
            }
            InputMode::GotoPage(buf) => {
                match code {
                    KeyCode::Esc => self.mode = InputMode::Normal,
                    KeyCode::Backspace => {
                        buf.pop();
                    }
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        buf.push(c);
                    }
                    KeyCode::Enter => {
                        // Out-of-range input clamps in recompute, never errors
                        self.page = buf.parse().unwrap_or(1);
                        self.mode = InputMode::Normal;
                        self.refresh();
                    }
                    _ => {}
                }
                false
            }
            InputMode::Normal => self.handle_normal_key(code),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> bool {
        self.status_message = None;
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('1') => self.tab = Tab::Overview,
            KeyCode::Char('2') => self.tab = Tab::Clients,
            KeyCode::Char('3') => self.tab = Tab::Salespeople,
            KeyCode::Tab => {
                self.tab = match self.tab {
                    Tab::Overview => Tab::Clients,
                    Tab::Clients => Tab::Salespeople,
                    Tab::Salespeople => Tab::Overview,
                };
            }
            KeyCode::Right => {
                self.selector = (self.selector + 1) % (self.labels.len() + 1);
                self.page = 1;
                self.refresh();
            }
            KeyCode::Left => {
                self.selector = self
                    .selector
                    .checked_sub(1)
                    .unwrap_or(self.labels.len());
                self.page = 1;
                self.refresh();
            }
            KeyCode::Char('d') => self.mode = InputMode::DateRange(String::new()),
            KeyCode::Char('c') => {
                self.filter.range = None;
                self.page = 1;
                self.refresh();
            }
            KeyCode::Char('n') | KeyCode::PageDown => {
                self.page += 1;
                self.refresh();
            }
            KeyCode::Char('p') | KeyCode::PageUp => {
                self.page = self.page.saturating_sub(1).max(1);
                self.refresh();
            }
            KeyCode::Char('g') => self.mode = InputMode::GotoPage(String::new()),
            KeyCode::Char('r') => self.refresh(),
            _ => {}
        }
        false
    }

    fn event_loop(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && key.code == KeyCode::Char('c')
                    {
                        return Ok(());
                    }
                    if self.handle_key(key.code) {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse "dd/mm/yyyy dd/mm/yyyy" into an inclusive range. Empty input means
/// "clear the range". Reversed bounds are swapped rather than rejected.
fn parse_range(input: &str) -> std::result::Result<Option<(NaiveDate, NaiveDate)>, String> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(None);
    }
    if tokens.len() != 2 {
        return Err("Enter exactly two dates: start end".to_string());
    }
    let start = loader::parse_date_dayfirst(tokens[0])
        .ok_or_else(|| format!("Not a date: {}", tokens[0]))?;
    let end = loader::parse_date_dayfirst(tokens[1])
        .ok_or_else(|| format!("Not a date: {}", tokens[1]))?;
    if start <= end {
        Ok(Some((start, end)))
    } else {
        Ok(Some((end, start)))
    }
}

/// "2025-01" -> "Jan", or "Jan25" when the series spans more than one year.
fn month_label(key: &str, multi_year: bool) -> String {
    let Some((year, month)) = key.split_once('-') else {
        return key.to_string();
    };
    let name = match month {
        "01" => "Jan",
        "02" => "Feb",
        "03" => "Mar",
        "04" => "Apr",
        "05" => "May",
        "06" => "Jun",
        "07" => "Jul",
        "08" => "Aug",
        "09" => "Sep",
        "10" => "Oct",
        "11" => "Nov",
        "12" => "Dec",
        _ => return key.to_string(),
    };
    if multi_year {
        format!("{}{}", name, year.get(2..).unwrap_or(""))
    } else {
        name.to_string()
    }
}

/// Pick round y-axis tick values (top and mid) given a max data value.
fn y_axis_ticks(max_val: f64) -> (f64, f64) {
    let steps = [
        1000.0, 2500.0, 5000.0, 10000.0, 25000.0, 50000.0, 100000.0, 250000.0, 500000.0,
        1000000.0, 2500000.0, 5000000.0, 10000000.0,
    ];
    let top = steps
        .iter()
        .copied()
        .find(|&s| s >= max_val)
        .unwrap_or(max_val);
    (top, top / 2.0)
}

/// Compact axis label: "R$5k", "R$2,5k", "R$1M".
fn format_compact(val: f64) -> String {
    if val >= 1_000_000.0 {
        let m = val / 1_000_000.0;
        if m == m.floor() {
            format!("R${}M", m as u64)
        } else {
            format!("R${:.1}M", m).replace('.', ",")
        }
    } else if val >= 1000.0 {
        let k = val / 1000.0;
        if k == k.floor() {
            format!("R${}k", k as u64)
        } else {
            format!("R${:.1}k", k).replace('.', ",")
        }
    } else {
        format!("R${}", val as u64)
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{cut}\u{2026}")
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run(file: Option<&str>) -> Result<()> {
    let settings = load_settings();
    let path = PathBuf::from(shellexpand_path(file.unwrap_or(&settings.snapshot_path)));

    let mut dashboard = Dashboard::new(path);
    // Missing file or schema mismatch is fatal before the terminal flips
    dashboard.recompute()?;

    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        hook(info);
    }));

    let mut terminal = ratatui::init();
    let result = dashboard.event_loop(&mut terminal);
    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        let range = parse_range("01/01/2025 31/03/2025").unwrap().unwrap();
        assert_eq!(range.0, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(range.1, NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
    }

    #[test]
    fn test_parse_range_swaps_reversed_bounds() {
        let range = parse_range("31/03/2025 01/01/2025").unwrap().unwrap();
        assert!(range.0 <= range.1);
    }

    #[test]
    fn test_parse_range_empty_clears() {
        assert_eq!(parse_range("  ").unwrap(), None);
    }

    #[test]
    fn test_parse_range_rejects_garbage() {
        assert!(parse_range("01/01/2025").is_err());
        assert!(parse_range("foo bar").is_err());
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label("2025-03", false), "Mar");
        assert_eq!(month_label("2025-03", true), "Mar25");
        assert_eq!(month_label("bogus", false), "bogus");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(5000.0), "R$5k");
        assert_eq!(format_compact(2500.0), "R$2,5k");
        assert_eq!(format_compact(1000000.0), "R$1M");
        assert_eq!(format_compact(750.0), "R$750");
    }

    #[test]
    fn test_y_axis_ticks_round_up() {
        assert_eq!(y_axis_ticks(4200.0), (5000.0, 2500.0));
        assert_eq!(y_axis_ticks(60000.0), (100000.0, 50000.0));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("ACME", 10), "ACME");
        assert_eq!(truncate("COMERCIO DE ALIMENTOS", 8), "COMERCI\u{2026}");
    }
}
