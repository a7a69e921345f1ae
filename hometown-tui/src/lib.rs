use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode},
};
use hometown_core::{Catalog, ClickTarget, MenuId, Navbar, StorefrontConfig};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use tracing::debug;

pub mod layout;
pub mod navbar;
pub mod page;

pub use navbar::{Cursor, Focus, Hit, HitMap};
pub use page::Page;

pub struct App {
    navbar: Navbar,
    focus: Focus,
    route: String,
    scroll: u16,
    should_quit: bool,
    hit_map: HitMap,
    viewport: Option<Rect>,
}

impl App {
    pub fn new(navbar: Navbar) -> Self {
        Self {
            navbar,
            focus: Focus::trigger(MenuId::Furniture),
            route: "/".to_string(),
            scroll: 0,
            should_quit: false,
            hit_map: HitMap::default(),
            viewport: None,
        }
    }

    pub fn navbar(&self) -> &Navbar {
        &self.navbar
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Regions recorded by the last [`App::draw`]
    pub fn hit_map(&self) -> &HitMap {
        &self.hit_map
    }

    pub fn draw(&mut self, f: &mut Frame) {
        // The frame size decides how many dropdown rows are reachable
        self.viewport = Some(f.area());
        self.sync_focus();
        self.hit_map = layout::ui(f, self);
    }

    /// Open `menu` unless it already is, and focus its trigger
    pub fn open(&mut self, menu: MenuId) {
        self.focus = Focus::trigger(menu);
        if !self.navbar.is_open(menu) {
            self.click(ClickTarget::Trigger(menu));
        }
    }

    pub fn click(&mut self, target: ClickTarget) {
        if let Some(href) = self.navbar.click(target) {
            self.navigate(href);
        }
        self.sync_focus();
    }

    /// Click a target by its title: rows follow their own link, branch
    /// rows included, and triggers behave as in [`App::click`]
    pub fn activate(&mut self, target: ClickTarget) {
        if let Some(href) = self.navbar.follow(target) {
            self.navigate(href);
        }
        self.sync_focus();
    }

    pub fn navigate(&mut self, route: &str) {
        debug!(route, "navigate");
        self.route = route.to_string();
        self.scroll = 0;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process KeyPress events, ignore KeyRelease
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char(c @ '1'..='6') => {
                if let Some(menu) = MenuId::from_index(c as usize - '1' as usize) {
                    self.focus = Focus::trigger(menu);
                    self.click(ClickTarget::Trigger(menu));
                }
            }
            KeyCode::Char('h') | KeyCode::Home => {
                self.navigate("/");
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.activate(self.focus.target());
            }
            KeyCode::Esc => {
                self.navbar.close();
                self.focus.cursor = Cursor::Trigger;
            }
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(10);
            }
            KeyCode::PageDown => {
                self.scroll = self.scroll.saturating_add(10);
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(hit) = self.hit_map.hit_at(mouse.column, mouse.row) else {
            return;
        };

        let open_menu = self.navbar.state().open_menu().unwrap_or(self.focus.menu);
        match hit {
            Hit::Home => self.navigate("/"),
            Hit::Expand(row) => {
                self.focus = Focus {
                    menu: open_menu,
                    cursor: Cursor::Row(row),
                };
                self.click(ClickTarget::Row(row));
            }
            Hit::Link(target) => {
                self.focus = match target {
                    ClickTarget::Trigger(menu) => Focus::trigger(menu),
                    ClickTarget::Row(row) => Focus {
                        menu: open_menu,
                        cursor: Cursor::Row(row),
                    },
                    ClickTarget::SubRow(row) => Focus {
                        menu: open_menu,
                        cursor: Cursor::SubRow(row),
                    },
                };
                self.activate(target);
            }
        }
    }

    /// Dropdown rows drawn in the last frame, or all of them before the
    /// first draw
    fn row_limit(&self) -> usize {
        let len = self.navbar.open_items().len();
        match self.viewport {
            Some(area) => navbar::dropdown_capacity(layout::overlay(area), len),
            None => len,
        }
    }

    fn sub_row_limit(&self) -> usize {
        let len = self.navbar.open_children().len();
        match (self.viewport, self.navbar.state().open_submenu()) {
            (Some(area), Some(open)) => navbar::submenu_capacity(layout::overlay(area), open, len),
            _ => len,
        }
    }

    fn move_left(&mut self) {
        match self.focus.cursor {
            Cursor::Trigger => {
                let idx = (self.focus.menu.index() + MenuId::ALL.len() - 1) % MenuId::ALL.len();
                self.focus = Focus::trigger(MenuId::ALL[idx]);
            }
            Cursor::Row(_) => {}
            Cursor::SubRow(_) => {
                if let Some(row) = self.navbar.state().open_submenu() {
                    self.focus.cursor = Cursor::Row(row);
                }
            }
        }
    }

    fn move_right(&mut self) {
        match self.focus.cursor {
            Cursor::Trigger => {
                let idx = (self.focus.menu.index() + 1) % MenuId::ALL.len();
                self.focus = Focus::trigger(MenuId::ALL[idx]);
            }
            Cursor::Row(row) => {
                let is_branch = self
                    .navbar
                    .open_items()
                    .get(row)
                    .is_some_and(|item| item.has_children());
                if !is_branch {
                    return;
                }
                if self.navbar.state().open_submenu() != Some(row) {
                    self.click(ClickTarget::Row(row));
                }
                if self.sub_row_limit() > 0 {
                    self.focus.cursor = Cursor::SubRow(0);
                }
            }
            Cursor::SubRow(_) => {}
        }
    }

    fn move_down(&mut self) {
        match self.focus.cursor {
            Cursor::Trigger => {
                if !self.navbar.is_open(self.focus.menu) {
                    self.click(ClickTarget::Trigger(self.focus.menu));
                }
                if self.row_limit() > 0 {
                    self.focus.cursor = Cursor::Row(0);
                }
            }
            Cursor::Row(row) => {
                let last = self.row_limit().saturating_sub(1);
                self.focus.cursor = Cursor::Row((row + 1).min(last));
            }
            Cursor::SubRow(row) => {
                let last = self.sub_row_limit().saturating_sub(1);
                self.focus.cursor = Cursor::SubRow((row + 1).min(last));
            }
        }
    }

    fn move_up(&mut self) {
        self.focus.cursor = match self.focus.cursor {
            Cursor::Trigger => Cursor::Trigger,
            Cursor::Row(0) => Cursor::Trigger,
            Cursor::Row(row) => Cursor::Row(row - 1),
            Cursor::SubRow(row) => Cursor::SubRow(row.saturating_sub(1)),
        };
    }

    /// Pull the cursor back to something that is still on screen
    fn sync_focus(&mut self) {
        let state = self.navbar.state();
        if state.open_menu() != Some(self.focus.menu) {
            self.focus.cursor = Cursor::Trigger;
            return;
        }

        let rows = self.row_limit();
        let last_row = if rows > 0 { Cursor::Row(rows - 1) } else { Cursor::Trigger };
        self.focus.cursor = match self.focus.cursor {
            Cursor::Trigger => Cursor::Trigger,
            Cursor::Row(row) if row < rows => Cursor::Row(row),
            Cursor::SubRow(row) if row < self.sub_row_limit() => Cursor::SubRow(row),
            Cursor::SubRow(_) => match state.open_submenu() {
                Some(open) if open < rows => Cursor::Row(open),
                _ => last_row,
            },
            Cursor::Row(_) => last_row,
        };
    }
}

pub fn run(config: StorefrontConfig, open: Option<MenuId>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle(config.title.clone())
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(Navbar::new(Catalog::storefront(), config));
    if let Some(menu) = open {
        app.open(menu);
    }

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| app.draw(f))?;

        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
