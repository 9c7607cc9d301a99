//! Rendering tests: draw the app into a `TestBackend` and inspect the screen.

mod test_utils;

use crossterm::event::KeyCode;
use folio::palette::ViewState;
use folio::site::pages::ABOUT_HEADLINE;
use folio::tui::{ui, App};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use test_utils::{key_event, key_event_ctrl, test_config, RecordingEnvironment};

fn new_app(start: &str) -> App {
    let env = RecordingEnvironment::new();
    let mut app = App::with_environment(test_config(), start, Box::new(env)).unwrap();
    app.on_resize(100, 40);
    app
}

/// Draw one frame and return it as text, one line per row.
fn render(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("terminal");
    let palette = app.palette_snapshot().expect("palette");
    terminal
        .draw(|f| ui::draw(f, app, &palette))
        .expect("draw");

    let buffer = terminal.backend().buffer();
    let mut screen = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            screen.push_str(buffer[(x, y)].symbol());
        }
        screen.push('\n');
    }
    screen
}

async fn open_focused(app: &mut App) {
    app.handle_key(key_event_ctrl(KeyCode::Char('k'))).await.unwrap();
    app.on_tick().await;
}

async fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key_event(KeyCode::Char(c))).await.unwrap();
    }
}

#[tokio::test]
async fn test_closed_palette_is_not_drawn() {
    let app = new_app("/");
    let screen = render(&app, 100, 40);

    assert!(screen.contains("Gustavo Beltrami"));
    assert!(!screen.contains("GENERAL"));
    assert!(!screen.contains("No commands found."));
}

#[tokio::test]
async fn test_empty_query_shows_both_headings() {
    let mut app = new_app("/");
    open_focused(&mut app).await;

    let screen = render(&app, 100, 40);
    assert!(screen.contains("Type a command or search..."));
    assert!(screen.contains("GENERAL"));
    assert!(screen.contains("GO TO"));
    assert!(screen.contains("View Source"));
    assert!(!screen.contains("No commands found."));
}

#[tokio::test]
async fn test_go_to_heading_hidden_with_few_results() {
    let mut app = new_app("/");
    open_focused(&mut app).await;
    type_str(&mut app, "p").await;

    let screen = render(&app, 100, 40);
    assert_eq!(app.view_state().unwrap(), ViewState::OpenFiltered);
    assert!(screen.contains("GENERAL"));
    assert!(screen.contains("Projects"));
    assert!(!screen.contains("GO TO"));
}

#[tokio::test]
async fn test_no_results_message_only_without_matches() {
    let mut app = new_app("/");
    open_focused(&mut app).await;
    type_str(&mut app, "xyz123").await;

    let screen = render(&app, 100, 40);
    assert!(screen.contains("No commands found."));
    assert!(screen.contains("xyz123"));
    assert!(!screen.contains("GENERAL"));
}

#[tokio::test]
async fn test_backspace_back_to_empty_query() {
    let mut app = new_app("/");
    open_focused(&mut app).await;
    type_str(&mut app, "em").await;
    assert_eq!(app.view_state().unwrap(), ViewState::OpenFiltered);

    app.handle_key(key_event(KeyCode::Backspace)).await.unwrap();
    app.handle_key(key_event(KeyCode::Backspace)).await.unwrap();

    assert_eq!(app.view_state().unwrap(), ViewState::OpenEmpty);
    let screen = render(&app, 100, 40);
    assert!(screen.contains("Type a command or search..."));
    assert!(screen.contains("GO TO"));
}

#[tokio::test]
async fn test_ctrl_u_clears_query() {
    let mut app = new_app("/");
    open_focused(&mut app).await;
    type_str(&mut app, "xyz123").await;
    assert_eq!(app.view_state().unwrap(), ViewState::OpenNoResults);

    app.handle_key(key_event_ctrl(KeyCode::Char('u'))).await.unwrap();

    assert_eq!(app.view_state().unwrap(), ViewState::OpenEmpty);
    let screen = render(&app, 100, 40);
    assert!(!screen.contains("No commands found."));
    assert!(screen.contains("GENERAL"));
}

#[tokio::test]
async fn test_about_page_lists_social_links() {
    let app = new_app("/about");
    let screen = render(&app, 100, 120);

    assert!(screen.contains(ABOUT_HEADLINE));
    assert!(screen.contains("Follow on LinkedIn"));
    assert!(screen.contains("Follow on GitHub"));
    assert!(screen.contains("Follow on Instagram"));
    assert!(screen.contains("me@gbeltrami.com"));
}
