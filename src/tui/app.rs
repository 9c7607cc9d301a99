use crate::config::Config;
use crate::palette::{
    dispatch, filter, install_open_trigger, Command, Effect, KeyListeners, KeyboardHint,
    PaletteStore, PaletteView, Registry, ShellContext, TriggerGuard, ViewState,
};
use crate::palette::trigger::Propagation;
use crate::site::Router;
use crate::tui::host::{Environment, ShellHost, SystemEnvironment};
use crate::tui::input;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use std::sync::Arc;
use std::time::Instant;

/// The mounted page shell: owns the palette provider and the chord listener.
///
/// Dropping the shell removes its listener from the document.
pub struct Shell {
    pub context: ShellContext,
    pub hint: KeyboardHint,
    // Held so the listener lives exactly as long as the shell
    _trigger: TriggerGuard,
}

impl Shell {
    pub fn mount(document: &KeyListeners, config: &Config) -> Self {
        let store = PaletteStore::new();
        let trigger = install_open_trigger(document, store.clone());
        tracing::info!("shell mounted");
        Self {
            context: ShellContext::provide(store),
            hint: KeyboardHint::new(config.ui.touch_hint),
            _trigger: trigger,
        }
    }
}

impl Drop for Shell {
    fn drop(&mut self) {
        tracing::info!("shell unmounted");
    }
}

/// Palette state and filtered results for one frame.
pub struct PaletteSnapshot<'a> {
    pub state: ViewState,
    pub query: String,
    pub results: Vec<&'a Command>,
}

pub struct App {
    pub config: Arc<Config>,
    pub registry: Registry,
    pub document: KeyListeners,
    pub shell: Shell,
    pub router: Router,
    pub view: PaletteView,

    // UI state
    pub area: Rect,
    pub page_scroll: u16,
    pub status_message: Option<String>,
    pub last_effect: Option<Effect>,

    env: Box<dyn Environment>,
    palette_was_open: bool,
}

impl App {
    pub fn new(config: Config, start: &str) -> Result<Self> {
        Self::with_environment(config, start, Box::new(SystemEnvironment::new()))
    }

    pub fn with_environment(
        config: Config,
        start: &str,
        env: Box<dyn Environment>,
    ) -> Result<Self> {
        let registry = config.registry()?;
        let document = KeyListeners::new();
        let shell = Shell::mount(&document, &config);
        let view = PaletteView::new(config.ui.focus_delay());

        Ok(Self {
            config: Arc::new(config),
            registry,
            document,
            shell,
            router: Router::new(start),
            view,
            area: Rect::default(),
            page_scroll: 0,
            status_message: None,
            last_effect: None,
            env,
            palette_was_open: false,
        })
    }

    /// The shell's palette store.
    pub fn palette(&self) -> Result<&PaletteStore> {
        self.shell.context.command_palette()
    }

    /// Resolve the palette once for rendering and hit-testing.
    pub fn palette_snapshot(&self) -> Result<PaletteSnapshot<'_>> {
        let session = self.palette()?.session();
        let results = filter(&session.query, self.registry.commands());
        Ok(PaletteSnapshot {
            state: ViewState::resolve(session.is_open, &session.query, results.len()),
            query: session.query,
            results,
        })
    }

    /// Current filtered results, in registry order.
    pub fn palette_results(&self) -> Result<Vec<&Command>> {
        Ok(self.palette_snapshot()?.results)
    }

    pub fn view_state(&self) -> Result<ViewState> {
        Ok(self.palette_snapshot()?.state)
    }

    /// Route a key through document listeners first, then the per-mode input layer.
    ///
    /// Returns `Ok(true)` if the app should quit.
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if self.document.dispatch(&key) == Propagation::Prevented {
            self.sync_palette()?;
            return Ok(false);
        }
        let msg = input::dispatch(self, key)?;
        self.update(msg).await
    }

    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<bool> {
        let msg = input::dispatch_mouse(self, mouse)?;
        self.update(msg).await
    }

    /// Process a message and update app state (Elm Architecture update function).
    ///
    /// Returns `Ok(true)` if the app should quit, `Ok(false)` to continue.
    pub async fn update(&mut self, msg: super::Message) -> Result<bool> {
        use super::Message;

        if msg != Message::None {
            self.status_message = None;
        }

        match msg {
            // ─────────────────────────────────────────────────────────────────
            // App lifecycle
            // ─────────────────────────────────────────────────────────────────
            Message::Quit => return Ok(true),

            // ─────────────────────────────────────────────────────────────────
            // Page navigation
            // ─────────────────────────────────────────────────────────────────
            Message::Navigate(path) => {
                self.router.navigate_to(&path);
                self.page_scroll = 0;
            }
            Message::NavigateBack => {
                if self.router.back() {
                    self.page_scroll = 0;
                }
            }
            Message::ScrollPage(delta) => self.scroll_page(delta),

            // ─────────────────────────────────────────────────────────────────
            // Palette
            // ─────────────────────────────────────────────────────────────────
            Message::OpenPalette => self.palette()?.open(),
            Message::ClosePalette => self.palette()?.close(),
            Message::PaletteInput(c) => {
                self.palette()?.push_query_char(c);
                self.view.on_query_changed();
            }
            Message::PaletteBackspace => {
                self.palette()?.pop_query_char();
                self.view.on_query_changed();
            }
            Message::PaletteClear => {
                self.palette()?.set_query("");
                self.view.on_query_changed();
            }
            Message::PaletteDown => {
                let count = self.palette_results()?.len();
                self.view.move_down(count);
            }
            Message::PaletteUp => {
                let count = self.palette_results()?.len();
                self.view.move_up(count);
            }
            Message::PaletteConfirm => {
                let count = self.palette_results()?.len();
                let active = self.view.active(count);
                self.run_command(active)?;
            }
            Message::PaletteSelect(idx) => self.run_command(Some(idx))?,

            Message::None => {}
        }

        self.sync_palette()?;
        Ok(false)
    }

    /// Dispatch the result at `idx` of the current filter, if any.
    fn run_command(&mut self, idx: Option<usize>) -> Result<()> {
        let store = self.shell.context.command_palette()?.clone();
        let query = store.query();
        let results = filter(&query, self.registry.commands());
        let command = idx.and_then(|i| results.get(i).copied());

        let mut host = ShellHost {
            base_url: &self.config.site.base_url,
            router: &mut self.router,
            env: self.env.as_mut(),
        };

        let Some(effect) = dispatch(&store, &mut host, command) else {
            return Ok(());
        };

        match &effect {
            Effect::CopyLink { url } => {
                self.status_message = Some(format!("Copied {}", url));
            }
            Effect::OpenExternal { uri } => {
                self.status_message = Some(format!("Opened {}", uri));
            }
            Effect::Navigate { .. } => {
                self.page_scroll = 0;
            }
        }
        self.last_effect = Some(effect);
        Ok(())
    }

    /// React to open/close transitions of the shared store.
    fn sync_palette(&mut self) -> Result<()> {
        let is_open = self.palette()?.is_open();
        if is_open && !self.palette_was_open {
            self.view.on_open();
        } else if !is_open && self.palette_was_open {
            self.view.on_close();
        }
        self.palette_was_open = is_open;
        Ok(())
    }

    fn scroll_page(&mut self, delta: i32) {
        let next = (self.page_scroll as i32 + delta).max(0);
        self.page_scroll = next.min(u16::MAX as i32) as u16;
    }

    /// Called once after the first frame is on screen.
    pub fn on_first_paint(&mut self) {
        let platform = self.config.ui.platform.resolve();
        self.shell.hint.detect(platform);
        tracing::debug!(?platform, "keyboard hint platform detected");
    }

    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.area = Rect::new(0, 0, width, height);
        self.shell.hint.on_resize(width, self.config.ui.compact_width);
    }

    pub async fn on_tick(&mut self) {
        self.view.tick(Instant::now());
    }
}
