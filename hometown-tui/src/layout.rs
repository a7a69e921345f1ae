// Root layout: navbar above page content on every route

use crate::App;
use crate::navbar::{HitMap, render_dropdown, render_top_bar, render_triggers};
use crate::page::{render_hints, render_page};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};

pub struct Areas {
    pub top_bar: Rect,
    pub upper_rule: Rect,
    pub triggers: Rect,
    pub lower_rule: Rect,
    pub content: Rect,
    pub hints: Rect,
}

pub fn split(area: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Logo, search, icons
            Constraint::Length(1), // Horizontal rule
            Constraint::Length(1), // Dropdown triggers
            Constraint::Length(1), // Horizontal rule
            Constraint::Min(3),    // Page content
            Constraint::Length(1), // Hints bar
        ])
        .split(area);

    Areas {
        top_bar: chunks[0],
        upper_rule: chunks[1],
        triggers: chunks[2],
        lower_rule: chunks[3],
        content: chunks[4],
        hints: chunks[5],
    }
}

/// Where dropdown panels may be drawn: from the rule under the triggers
/// down to the bottom of the page. Never over the hints bar.
pub fn overlay(area: Rect) -> Rect {
    let areas = split(area);
    Rect::new(
        areas.lower_rule.x,
        areas.lower_rule.y,
        areas.lower_rule.width,
        areas.content.bottom().saturating_sub(areas.lower_rule.y),
    )
}

fn render_rule(f: &mut Frame, area: Rect) {
    let rule = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(rule, area);
}

/// Draw one frame and return the clickable regions it produced
pub fn ui(f: &mut Frame, app: &App) -> HitMap {
    let areas = split(f.area());
    let navbar = app.navbar();
    let mut hits = HitMap::default();

    render_top_bar(f, areas.top_bar, navbar, &mut hits);
    render_rule(f, areas.upper_rule);
    render_triggers(f, areas.triggers, navbar, app.focus(), &mut hits);
    render_rule(f, areas.lower_rule);
    render_page(f, areas.content, app.route(), navbar.catalog(), app.scroll());
    render_hints(f, areas.hints, app.route());

    render_dropdown(f, overlay(f.area()), navbar, app.focus(), &mut hits);

    hits
}
