use hometown_core::Catalog;
use hometown_core::catalog::Breadcrumb;
use hometown_core::content::{Article, HOMETOWN_STORY};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Wrap},
};

const MAX_PAGE_WIDTH: u16 = 100;

/// What lives at a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Category(Breadcrumb),
    NotFound,
}

impl Page {
    pub fn for_route(route: &str, catalog: &Catalog) -> Self {
        if route == "/" {
            return Page::Home;
        }
        catalog
            .resolve(route)
            .map(Page::Category)
            .unwrap_or(Page::NotFound)
    }
}

pub fn render_page(f: &mut Frame, area: Rect, route: &str, catalog: &Catalog, scroll: u16) {
    let width = area.width.min(MAX_PAGE_WIDTH);
    let column = Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height);

    let lines = match Page::for_route(route, catalog) {
        Page::Home => article_lines(&HOMETOWN_STORY),
        Page::Category(crumb) => category_lines(crumb, catalog),
        Page::NotFound => not_found_lines(route),
    };

    let page = Paragraph::new(lines)
        .block(Block::default().padding(Padding::new(2, 2, 1, 0)))
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0));
    f.render_widget(page, column);
}

fn article_lines(article: &Article) -> Vec<Line<'static>> {
    let heading = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let body = Style::default().fg(Color::Gray);

    let mut lines = vec![
        Line::from(Span::styled(
            article.title,
            heading.fg(Color::Red).add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(""),
    ];
    for paragraph in article.intro {
        lines.push(Line::from(Span::styled(*paragraph, body)));
        lines.push(Line::from(""));
    }
    for section in std::iter::once(&article.lead).chain(article.sections.iter()) {
        lines.push(Line::from(Span::styled(section.heading, heading)));
        lines.push(Line::from(""));
        for paragraph in section.paragraphs {
            lines.push(Line::from(Span::styled(*paragraph, body)));
            lines.push(Line::from(""));
        }
    }
    lines
}

fn category_lines(crumb: Breadcrumb, catalog: &Catalog) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            crumb.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            crumb.sub_item.unwrap_or(crumb.item),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(crumb.href, Style::default().fg(Color::Cyan))),
        Line::from(""),
    ];

    let children = catalog
        .items(crumb.menu)
        .iter()
        .find(|item| item.href() == crumb.href)
        .map(|item| item.children())
        .unwrap_or(&[]);

    if !children.is_empty() {
        lines.push(Line::from(Span::styled(
            "Shop by category",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        for child in children {
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(Color::Red)),
                Span::styled(format!("{:<24}", child.name), Style::default().fg(Color::White)),
                Span::styled(child.href, Style::default().fg(Color::DarkGray)),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Press h to return home.",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

fn not_found_lines(route: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "404 · Page not found",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Nothing lives at {}", route)),
        Line::from(""),
        Line::from(Span::styled(
            "Press h to return home.",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

pub fn render_hints(f: &mut Frame, area: Rect, route: &str) {
    let key = Style::default().fg(Color::Black).bg(Color::Gray);
    let hints = Line::from(vec![
        Span::styled(" ←/→ ", key),
        Span::raw(" Menus  "),
        Span::styled(" ↑/↓ ", key),
        Span::raw(" Rows  "),
        Span::styled(" Enter ", key),
        Span::raw(" Open  "),
        Span::styled(" 1-6 ", key),
        Span::raw(" Jump  "),
        Span::styled(" Esc ", key),
        Span::raw(" Close  "),
        Span::styled(" h ", key),
        Span::raw(" Home  "),
        Span::styled(" q ", key),
        Span::raw(" Quit  "),
        Span::styled(format!(" {} ", route), Style::default().fg(Color::Cyan)),
    ]);

    let paragraph = Paragraph::new(hints).style(Style::default().bg(Color::Black).fg(Color::Gray));
    f.render_widget(paragraph, area);
}
