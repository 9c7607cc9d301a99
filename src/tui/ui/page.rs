//! Page chrome and page bodies.

use super::icons;
use super::layout::{
    content_rect, display_width, landing_hint_rect, page_layout, LANDING_HINT_LINE,
    LANDING_NAME_LINE, LANDING_TAGLINE_LINE,
};
use crate::palette::trigger::HintMode;
use crate::palette::KeyboardHint;
use crate::site::pages::{
    Social, ABOUT_HEADLINE, ABOUT_PARAGRAPHS, NOT_FOUND, PROJECTS, PROJECTS_INTRO, SOCIAL_LINKS,
};
use crate::site::{Route, NAV_ROUTES};
use crate::tui::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const TAP_HINT: &str = "Tap to start";

/// Spans of the landing page keyboard hint.
pub fn hint_spans(hint: &KeyboardHint) -> Vec<Span<'static>> {
    let muted = Style::default().fg(Color::DarkGray);
    let key = Style::default().fg(Color::Gray).bg(Color::Rgb(39, 39, 42));
    match hint.mode() {
        HintMode::Chord { glyph } => vec![
            Span::styled("Press ", muted),
            Span::styled(format!(" {} ", glyph), key),
            Span::raw(" "),
            Span::styled(" K ", key),
            Span::styled(" to start ", muted),
            Span::styled(icons::ARROW_RIGHT, muted),
        ],
        HintMode::Tap => vec![
            Span::styled(
                format!(" {} ", TAP_HINT),
                Style::default().fg(Color::White).bg(Color::Rgb(39, 39, 42)),
            ),
            Span::styled(format!(" {}", icons::ARROW_RIGHT), muted),
        ],
    }
}

pub fn hint_width(hint: &KeyboardHint) -> u16 {
    hint_spans(hint)
        .iter()
        .map(|s| display_width(s.content.as_ref()))
        .sum::<usize>() as u16
}

/// Clickable hint area on the landing page, if the tap affordance is showing.
pub fn tap_target(app: &App, area: Rect) -> Option<Rect> {
    if app.router.route() != Route::Landing || app.shell.hint.mode() != HintMode::Tap {
        return None;
    }
    let rect = landing_hint_rect(area, hint_width(&app.shell.hint));
    (rect.width > 0).then_some(rect)
}

pub fn draw_page(f: &mut Frame, app: &App) {
    let layout = page_layout(f.area());
    draw_header(f, app, layout.header);
    draw_footer(f, app, layout.footer);

    let content = content_rect(f.area());
    match app.router.route() {
        Route::Landing => draw_landing(f, app, content),
        Route::About => draw_about(f, app, content),
        Route::Projects => draw_projects(f, app, content),
        Route::NotFound => draw_not_found(f, app, content),
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let current = app.router.route();
    let mut spans = vec![Span::styled(
        format!(" {} ", app.config.site.owner),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::raw("  "));
    for (i, (route, _)) in NAV_ROUTES.iter().enumerate() {
        let style = if *route == current {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, route.title()), style));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let muted = Style::default().fg(Color::DarkGray);
    let line = match &app.status_message {
        Some(msg) => Line::from(Span::styled(
            format!("  {}", msg),
            Style::default().fg(Color::Green),
        )),
        None => {
            let back = if app.router.can_go_back() { " | h: back" } else { "" };
            Line::from(Span::styled(
                format!(
                    "  {}+K: commands | 1-3: pages | j/k: scroll{} | q: quit",
                    app.shell.hint.glyph(),
                    back
                ),
                muted,
            ))
        }
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_landing(f: &mut Frame, app: &App, area: Rect) {
    let name_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let tagline_style = Style::default().fg(Color::Gray);

    let mut lines: Vec<Line> = (0..=LANDING_HINT_LINE).map(|_| Line::from("")).collect();
    lines[LANDING_NAME_LINE as usize] =
        Line::from(Span::styled(app.config.site.owner.clone(), name_style));
    lines[LANDING_TAGLINE_LINE as usize] =
        Line::from(Span::styled(app.config.site.tagline.clone(), tagline_style));
    lines[LANDING_HINT_LINE as usize] = Line::from(hint_spans(&app.shell.hint));

    f.render_widget(Paragraph::new(lines), area);
}

fn draw_about(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            ABOUT_HEADLINE,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for paragraph in ABOUT_PARAGRAPHS {
        lines.push(Line::from(Span::styled(*paragraph, Style::default().fg(Color::Gray))));
        lines.push(Line::from(""));
    }
    for link in SOCIAL_LINKS {
        if link.social == Social::Email {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", icons::social_icon(link.social)),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(link.label, Style::default().fg(Color::Cyan)),
            Span::styled(format!("  {}", link.href), Style::default().fg(Color::DarkGray)),
        ]));
    }
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .scroll((app.page_scroll, 0)),
        area,
    );
}

fn draw_projects(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            PROJECTS_INTRO,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for project in PROJECTS {
        lines.push(Line::from(Span::styled(
            project.name,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            project.description,
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", icons::LINK), Style::default().fg(Color::Cyan)),
            Span::styled(project.label, Style::default().fg(Color::Cyan)),
            Span::styled(format!("  {}", project.href), Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(""));
    }
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .scroll((app.page_scroll, 0)),
        area,
    );
}

fn draw_not_found(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            app.router.current_path().to_string(),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled(NOT_FOUND, Style::default().fg(Color::Gray))),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
