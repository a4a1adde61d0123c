use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Row, Table, TableState, Tabs},
};

use crate::presentation::formatters::route;
use crate::presentation::presenters::present_product_detail;

use super::app::{BrowserApp, Screen};

pub fn render(frame: &mut Frame, app: &BrowserApp) {
    match app.screen() {
        Screen::List => render_list(frame, app),
        Screen::Detail(id) => render_detail(frame, app, id),
    }
}

fn render_list(frame: &mut Frame, app: &BrowserApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // brand tabs
            Constraint::Min(0),    // sidebar + table
            Constraint::Length(1), // help line
        ])
        .split(frame.area());

    render_brand_tabs(frame, app, chunks[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(0)])
        .split(chunks[1]);

    render_category_sidebar(frame, app, middle[0]);
    render_product_table(frame, app, middle[1]);

    let help = Paragraph::new(
        " \u{2190}/\u{2192} brand   c category   x clear   \u{2191}/\u{2193} product   Enter detail   q quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);
}

fn render_brand_tabs(frame: &mut Frame, app: &BrowserApp, area: Rect) {
    let mut titles = vec![Line::from("All brands")];
    titles.extend(
        app.store()
            .brands()
            .iter()
            .map(|brand| Line::from(brand.name.clone())),
    );

    let tabs = Tabs::new(titles)
        .select(app.brand_index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title("Brands"));

    frame.render_widget(tabs, area);
}

fn render_category_sidebar(frame: &mut Frame, app: &BrowserApp, area: Rect) {
    // First row is the implicit "all categories" entry
    let mut items = vec![ListItem::new("(all categories)")];
    items.extend(app.categories().iter().map(|category| {
        ListItem::new(format!("{} ({})", category.name, category.products.len()))
    }));

    let mut state = ListState::default();
    state.select(Some(app.category_index().map_or(0, |i| i + 1)));

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ")
        .block(Block::default().borders(Borders::ALL).title("Categories"));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_product_table(frame: &mut Frame, app: &BrowserApp, area: Rect) {
    let rows: Vec<Row> = app
        .products()
        .iter()
        .map(|product| {
            Row::new(vec![
                product.name.clone(),
                product
                    .description
                    .as_ref()
                    .map(|d| d.line1.clone())
                    .unwrap_or_default(),
                route::product_route(&product.id),
            ])
        })
        .collect();

    let title = format!("Products ({})", app.products().len());
    let table = Table::new(
        rows,
        [
            Constraint::Length(20),
            Constraint::Min(20),
            Constraint::Length(28),
        ],
    )
    .header(
        Row::new(vec!["Name", "Description", "Route"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL).title(title));

    let mut state = TableState::default();
    if !app.products().is_empty() {
        state.select(Some(app.product_index()));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_detail(frame: &mut Frame, app: &BrowserApp, id: &robocat_types::ProductId) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    let body = match app.store().find_product(id) {
        Some(hit) => {
            let model = present_product_detail(&hit);
            Paragraph::new(model.to_string()).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(
                        model.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
            )
        }
        // Can only happen with a catalog swapped mid-session
        None => Paragraph::new(format!("Product '{}' is no longer in the catalog.", id))
            .block(Block::default().borders(Borders::ALL).title("Not found")),
    };
    frame.render_widget(body, chunks[0]);

    let help =
        Paragraph::new(" Esc back   q quit").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[1]);
}
