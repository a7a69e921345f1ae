use hometown_core::{ClickTarget, MenuId, Navbar};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

const LOGO_WIDTH: u16 = 20;
const TRIGGER_GAP: u16 = 4;
const DROPDOWN_WIDTH: u16 = 34;
const SUBMENU_WIDTH: u16 = 30;

/// Which navbar element keyboard input acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Trigger,
    Row(usize),
    SubRow(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focus {
    pub menu: MenuId,
    pub cursor: Cursor,
}

impl Focus {
    pub fn trigger(menu: MenuId) -> Self {
        Self {
            menu,
            cursor: Cursor::Trigger,
        }
    }

    /// The click that Enter/Space stands for
    pub fn target(&self) -> ClickTarget {
        match self.cursor {
            Cursor::Trigger => ClickTarget::Trigger(self.menu),
            Cursor::Row(row) => ClickTarget::Row(row),
            Cursor::SubRow(row) => ClickTarget::SubRow(row),
        }
    }
}

/// What a recorded screen region does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// Triggers, row titles and submenu rows. Row titles follow their own
    /// link, branch rows included.
    Link(ClickTarget),
    /// The `›` cell of a branch row: toggles its submenu only
    Expand(usize),
    /// The logo, a link to `/`
    Home,
}

/// Screen regions recorded during the last draw, used to turn mouse
/// clicks into [`Hit`]s. Later regions sit on top of earlier ones.
#[derive(Debug, Default, Clone)]
pub struct HitMap {
    regions: Vec<(Rect, Hit)>,
}

impl HitMap {
    pub fn push(&mut self, area: Rect, hit: Hit) {
        if !area.is_empty() {
            self.regions.push((area, hit));
        }
    }

    pub fn hit_at(&self, column: u16, row: u16) -> Option<Hit> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(Position::new(column, row)))
            .map(|(_, hit)| *hit)
    }

    pub fn area_of_hit(&self, hit: Hit) -> Option<Rect> {
        self.regions
            .iter()
            .rev()
            .find(|(_, h)| *h == hit)
            .map(|(area, _)| *area)
    }

    pub fn area_of(&self, target: ClickTarget) -> Option<Rect> {
        self.area_of_hit(Hit::Link(target))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Rows of a `len`-row dropdown that fit when drawn at the top of `bounds`
pub fn dropdown_capacity(bounds: Rect, len: usize) -> usize {
    (bounds.height as usize).saturating_sub(2).min(len)
}

/// Rows of a `len`-row submenu that fit when it opens beside dropdown row
/// `open_row`
pub fn submenu_capacity(bounds: Rect, open_row: usize, len: usize) -> usize {
    if open_row >= dropdown_capacity(bounds, open_row + 1) {
        return 0;
    }
    (bounds.height as usize)
        .saturating_sub(open_row)
        .saturating_sub(2)
        .min(len)
}

/// Logo, search box and account/wishlist/cart icons
pub fn render_top_bar(f: &mut Frame, area: Rect, navbar: &Navbar, hits: &mut HitMap) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(LOGO_WIDTH), // Logo
            Constraint::Min(20),    // Search
            Constraint::Length(28), // Icons
        ])
        .split(area);

    let config = navbar.config();

    // Text stands in for the image: the alt text as the mark, the asset
    // name underneath
    let mark = config.logo_alt.trim_end_matches(" Logo");
    let asset = config.logo.rsplit('/').next().unwrap_or(&config.logo);
    let logo = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  ⌂ ", Style::default().fg(Color::Red)),
            Span::styled(
                mark.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("  {}", asset),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )),
    ]);
    f.render_widget(logo, chunks[0]);
    hits.push(chunks[0], Hit::Home);

    // Decorative only, nothing is ever submitted
    let search_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let search_inner = search_block.inner(chunks[1]);
    f.render_widget(search_block, chunks[1]);
    f.render_widget(
        Paragraph::new(format!(" {}", config.search_placeholder))
            .style(Style::default().fg(Color::DarkGray)),
        search_inner,
    );
    let icon = Rect::new(search_inner.right().saturating_sub(2), search_inner.y, 2, 1)
        .intersection(search_inner);
    f.render_widget(
        Paragraph::new("⌕").style(Style::default().fg(Color::Gray)),
        icon,
    );

    let badge = Style::default()
        .fg(Color::White)
        .bg(Color::Red)
        .add_modifier(Modifier::BOLD);
    let icons = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Account", Style::default().fg(Color::Gray)),
            Span::raw("   "),
            Span::styled("♥", Style::default().fg(Color::Gray)),
            Span::styled(format!(" {} ", config.wishlist_count), badge),
            Span::raw("   "),
            Span::styled("Cart", Style::default().fg(Color::Gray)),
            Span::raw("  "),
        ]),
    ])
    .alignment(Alignment::Right);
    f.render_widget(icons, chunks[2]);
}

fn trigger_width(menu: MenuId) -> u16 {
    // label, a space, the chevron
    menu.label().chars().count() as u16 + 2
}

/// The row of six dropdown triggers, centered
pub fn render_triggers(f: &mut Frame, area: Rect, navbar: &Navbar, focus: Focus, hits: &mut HitMap) {
    let widths: Vec<u16> = MenuId::ALL.iter().map(|id| trigger_width(*id)).collect();
    let total = widths.iter().sum::<u16>() + TRIGGER_GAP * (widths.len() as u16 - 1);
    let mut x = area.x + area.width.saturating_sub(total) / 2;

    for (menu, width) in MenuId::ALL.into_iter().zip(widths) {
        let rect = Rect::new(x, area.y, width, 1).intersection(area);

        let mut style = if navbar.is_open(menu) {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        if focus == Focus::trigger(menu) {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let label = format!("{} {}", menu.label(), navbar.chevron(menu));
        f.render_widget(Paragraph::new(label).style(style), rect);
        hits.push(rect, Hit::Link(ClickTarget::Trigger(menu)));

        x = x.saturating_add(width + TRIGGER_GAP);
    }
}

/// Keep a panel of the given size inside `bounds`, shifting it left if
/// it would run off the right edge.
fn place(x: u16, y: u16, width: u16, height: u16, bounds: Rect) -> Rect {
    let x = x.min(bounds.right().saturating_sub(width)).max(bounds.x);
    Rect::new(x, y, width, height).intersection(bounds)
}

fn panel_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Gray))
}

fn render_row(f: &mut Frame, area: Rect, title: &str, has_children: bool, open: bool, focused: bool) {
    let mut style = if open {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    if focused {
        style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
    }

    f.render_widget(Paragraph::new(format!(" {}", title)).style(style), area);
    if has_children {
        f.render_widget(
            Paragraph::new("› ").alignment(Alignment::Right).style(style),
            area,
        );
    }
}

/// The open dropdown and, if any, its side submenu. Drawn over the page,
/// starting at the top of `bounds`. Rows that do not fit are not drawn.
pub fn render_dropdown(f: &mut Frame, bounds: Rect, navbar: &Navbar, focus: Focus, hits: &mut HitMap) {
    let state = navbar.state();
    let Some(menu) = state.open_menu() else {
        return;
    };
    // A trigger clipped off a narrow terminal still gets its dropdown
    let x = hits
        .area_of(ClickTarget::Trigger(menu))
        .map_or(bounds.x, |trigger| trigger.x);

    let items = navbar.open_items();
    let panel = place(x, bounds.y, DROPDOWN_WIDTH, items.len() as u16 + 2, bounds);
    let block = panel_block();
    let inner = block.inner(panel);
    f.render_widget(Clear, panel);
    f.render_widget(block, panel);

    let visible = dropdown_capacity(bounds, items.len());
    for (idx, item) in items.iter().enumerate().take(visible) {
        let row = Rect::new(inner.x, inner.y + idx as u16, inner.width, 1);
        render_row(
            f,
            row,
            item.title(),
            item.has_children(),
            state.open_submenu() == Some(idx),
            focus.cursor == Cursor::Row(idx),
        );
        hits.push(row, Hit::Link(ClickTarget::Row(idx)));
        if item.has_children() {
            let expander = Rect::new(row.right().saturating_sub(2), row.y, 2, 1).intersection(row);
            hits.push(expander, Hit::Expand(idx));
        }
    }

    let Some(open) = state.open_submenu() else {
        return;
    };
    let children = navbar.open_children();
    let visible = submenu_capacity(bounds, open, children.len());
    if visible == 0 {
        return;
    }

    // Side panel lines up with its row, left of the dropdown if it
    // does not fit on the right
    let x = if panel.right() + SUBMENU_WIDTH <= bounds.right() {
        panel.right()
    } else {
        panel.x.saturating_sub(SUBMENU_WIDTH)
    };
    let y = bounds.y + open as u16;
    let sub_panel = place(x, y, SUBMENU_WIDTH, children.len() as u16 + 2, bounds);
    let block = panel_block();
    let sub_inner = block.inner(sub_panel);
    f.render_widget(Clear, sub_panel);
    f.render_widget(block, sub_panel);

    for (idx, child) in children.iter().enumerate().take(visible) {
        let row = Rect::new(sub_inner.x, sub_inner.y + idx as u16, sub_inner.width, 1);
        render_row(f, row, child.name, false, false, focus.cursor == Cursor::SubRow(idx));
        hits.push(row, Hit::Link(ClickTarget::SubRow(idx)));
    }
}
