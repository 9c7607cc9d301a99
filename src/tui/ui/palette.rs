//! Command palette overlay.

use super::icons;
use super::layout::{
    display_width, palette_list_rect, palette_rect, pad_to_width, truncate_str,
    PALETTE_INPUT_LINES,
};
use crate::palette::view::{rows, Row, NO_RESULTS};
use crate::palette::ViewState;
use crate::tui::{App, PaletteSnapshot};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const PLACEHOLDER: &str = "Type a command or search...";

/// Panel rect for the current palette contents.
pub fn panel_rect(palette: &PaletteSnapshot, area: Rect) -> Rect {
    let row_count = rows(palette.results.len()).len();
    palette_rect(area, row_count, palette.state == ViewState::OpenNoResults)
}

pub fn draw_palette(f: &mut Frame, app: &App, palette: &PaletteSnapshot) {
    let state = palette.state;
    if !state.is_open() {
        return;
    }

    let area = f.area();

    // Dimmed backdrop
    f.render_widget(
        Block::default().style(Style::default().bg(Color::Black).fg(Color::DarkGray)),
        area,
    );

    let panel = panel_rect(palette, area);
    f.render_widget(Clear, panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(panel);
    f.render_widget(block, panel);

    draw_input(f, app, palette, Rect { height: PALETTE_INPUT_LINES, ..inner });

    let list = palette_list_rect(panel);
    if state == ViewState::OpenNoResults {
        let body = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(NO_RESULTS, Style::default().fg(Color::DarkGray))),
        ])
        .alignment(Alignment::Center);
        f.render_widget(body, list);
        return;
    }

    let results = &palette.results;
    let active = app.view.active(results.len());
    let width = list.width as usize;

    let heading_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::BOLD);
    let title_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let subtitle_style = Style::default().fg(Color::DarkGray);
    let key_style = Style::default().fg(Color::Gray).bg(Color::DarkGray);
    let active_bg = Style::default().bg(Color::Rgb(39, 39, 42));

    let lines: Vec<Line> = rows(results.len())
        .into_iter()
        .map(|row| match row {
            Row::Heading(text) => Line::from(Span::styled(format!(" {}", text), heading_style)),
            Row::Spacer => Line::from(""),
            Row::Option(idx) => {
                let command = results[idx];

                let keys: Vec<Span> = command
                    .shortcut
                    .iter()
                    .flat_map(|k| {
                        [Span::styled(format!(" {} ", k), key_style), Span::raw(" ")]
                    })
                    .collect();
                let keys_width: usize =
                    command.shortcut.iter().map(|k| display_width(k) + 3).sum();

                let icon = icons::command_icon(command.icon);
                let lead = format!(" {}  ", icon);
                let text_width = width.saturating_sub(display_width(&lead) + keys_width + 1);
                let title = truncate_str(&command.title, text_width);
                let subtitle_room = text_width.saturating_sub(display_width(&title) + 2);
                let subtitle = truncate_str(&command.subtitle, subtitle_room);
                let body = format!("{}  {}", title, subtitle);
                let filler = text_width.saturating_sub(display_width(&body));

                let mut spans = vec![
                    Span::styled(lead, subtitle_style),
                    Span::styled(title, title_style),
                    Span::raw("  "),
                    Span::styled(subtitle, subtitle_style),
                    Span::raw(pad_to_width("", filler, Alignment::Left)),
                ];
                spans.extend(keys);

                let line = Line::from(spans);
                if active == Some(idx) {
                    line.style(active_bg)
                } else {
                    line
                }
            }
        })
        .collect();

    f.render_widget(Paragraph::new(lines), list);
}

fn draw_input(f: &mut Frame, app: &App, palette: &PaletteSnapshot, area: Rect) {
    let muted = Style::default().fg(Color::DarkGray);
    let mut spans = vec![Span::styled(format!(" {}  ", icons::SEARCH), muted)];
    if palette.query.is_empty() {
        spans.push(Span::styled(PLACEHOLDER, muted));
    } else {
        spans.push(Span::styled(
            palette.query.clone(),
            Style::default().fg(Color::White),
        ));
    }
    if app.view.is_input_focused() {
        spans.push(Span::styled("█", Style::default().fg(Color::Gray)));
    }

    let separator = "─".repeat(area.width as usize);
    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(separator, Style::default().fg(Color::DarkGray))),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
