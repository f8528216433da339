pub mod theme;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use self::theme::{theme, ThemeColors};
use crate::app::{App, InputMode};
use crate::config::article_url;

/// Render the UI
pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();
    let colors = theme();

    frame.render_widget(Clear, area);

    let background = Block::default().style(Style::default().bg(colors.background));
    frame.render_widget(background, area);

    const MIN_WIDTH: u16 = 40;
    const MIN_HEIGHT: u16 = 12;

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Terminal Too Small",
                Style::default()
                    .fg(colors.error)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("Minimum size: {}x{}", MIN_WIDTH, MIN_HEIGHT),
                Style::default().fg(colors.text),
            )),
            Line::from(Span::styled(
                format!("Current size: {}x{}", area.width, area.height),
                Style::default().fg(colors.text_dim),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.error)),
        );

        frame.render_widget(warning, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    render_header(frame, chunks[0], &colors);
    render_input(app, frame, chunks[1], &colors);
    render_error(app, frame, chunks[2], &colors);
    render_results(app, frame, chunks[3], &colors);
    render_footer(app, frame, chunks[4], &colors);
}

fn render_header(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let header = Paragraph::new("Wikiseek - Encyclopedia Search")
        .style(
            Style::default()
                .fg(colors.primary)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_input(app: &App, frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let border_style = if !app.view.ui_enabled {
        Style::default().fg(colors.text_dim)
    } else if app.input_mode == InputMode::Typing {
        Style::default().fg(colors.primary)
    } else {
        Style::default().fg(colors.text)
    };

    let input = Paragraph::new(app.search_state.input.as_str())
        .style(Style::default().fg(colors.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Search"),
        );
    frame.render_widget(input, area);

    // Cursor only while the field has focus and accepts input.
    if app.view.ui_enabled && app.input_mode == InputMode::Typing {
        let cursor_x = area.x + 1 + app.search_state.input.width() as u16;
        frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn render_error(app: &App, frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let line = match &app.view.error {
        Some(message) => Line::from(Span::styled(
            format!(" ⚠ {}", message),
            Style::default()
                .fg(colors.error)
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::from(""),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_results(app: &mut App, frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let title = format!("Results ({})", app.view.results.len());

    if app.view.results.is_empty() {
        let hint = if app.view.error.is_some() {
            ""
        } else {
            "Type a query and press Enter to search"
        };
        let placeholder = Paragraph::new(hint)
            .style(Style::default().fg(colors.text_dim))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(placeholder, area);
        return;
    }

    let wrap_width = area.width.saturating_sub(4).max(16) as usize;
    let endpoint = app.api_client.endpoint().to_string();

    let items: Vec<ListItem> = app
        .view
        .results
        .iter()
        .map(|result| {
            let mut lines = vec![Line::from(Span::styled(
                result.title.clone(),
                Style::default()
                    .fg(colors.primary)
                    .add_modifier(Modifier::BOLD),
            ))];
            for wrapped in textwrap::wrap(&result.intro, wrap_width) {
                lines.push(Line::from(Span::styled(
                    wrapped.into_owned(),
                    Style::default().fg(colors.text),
                )));
            }
            lines.push(Line::from(Span::styled(
                article_url(&endpoint, result.page_id),
                Style::default().fg(colors.text_dim),
            )));
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut app.view.list_state);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let hints = if !app.view.ui_enabled {
        "Searching..."
    } else {
        match app.input_mode {
            InputMode::Typing => "Enter: Search | Tab: Results | Esc: Quit",
            InputMode::Navigation => {
                "↑/k ↓/j: Move | Enter/o: Open in browser | s: Search again | Tab: Search box | q/Esc: Quit"
            }
        }
    };

    let footer = Paragraph::new(hints)
        .style(Style::default().fg(colors.text_dim))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
