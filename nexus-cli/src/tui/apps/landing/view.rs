//! View layer for the landing page.
//!
//! Sections are rendered to cached line buffers and painted as slices of
//! one virtual scrolling page. Only sections whose model changed (or the
//! page width / theme) are rebuilt; repainting untouched sections reads
//! straight from the cache.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{BarChart, Gauge, Paragraph, Sparkline, Widget};
use unicode_width::UnicodeWidthStr;

use crate::content::{self, Event, NewsItem, Priority, TeamMember};
use crate::tui::state::Theme;
use crate::tui::widgets::{AccordionState, CarouselState, RevealState};

use super::state::{ContactField, ContactForm, SectionId, State};

pub fn render(state: &mut State, frame: &mut Frame) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(frame.area());
    let (header, body, help) = (chunks[0], chunks[1], chunks[2]);

    state.viewport = (body.width, body.height);
    state.cache.set_width(body.width);

    layout_sections(state);
    render_header(state, frame, header);
    render_page(state, frame, body);
    render_help(state, frame, help);
}

/// Build (or reuse) every section's lines and record the line ranges the
/// reveal scan works from
fn layout_sections(state: &mut State) {
    let width = state.cache.width();
    let mut ranges = std::collections::HashMap::new();
    let mut offset = 0usize;

    {
        let State {
            cache,
            events,
            team,
            news,
            news_items,
            news_cursor,
            theme,
            typed_chars,
            focused,
            contact,
            ..
        } = state;

        for id in SectionId::ALL {
            let is_focused = *focused == id;
            let height = cache
                .lines(id, || match id {
                    SectionId::Hero => build_hero(theme, *typed_chars, width),
                    SectionId::Events => build_events(events, theme, width, is_focused),
                    SectionId::Teams => build_teams(team, theme, width, is_focused),
                    SectionId::Resources => build_resources(theme, width),
                    SectionId::Announcements => build_announcements(
                        news,
                        news_items,
                        *news_cursor,
                        theme,
                        width,
                        is_focused,
                    ),
                    SectionId::Snapshot => build_snapshot(theme, width),
                    SectionId::Contact => build_contact(contact, theme, width, is_focused),
                    SectionId::Footer => build_footer(theme, width),
                })
                .len();
            ranges.insert(id, (offset, height));
            offset += height;
        }
    }

    state.section_ranges = ranges;
    state.page_height = offset;
}

fn render_header(state: &State, frame: &mut Frame, area: Rect) {
    let theme = &state.theme;
    let mut spans = vec![
        Span::styled(
            format!("  ✦ {}", content::COMPANY_NAME),
            Style::default()
                .fg(theme.accent_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];
    for id in SectionId::ALL {
        let Some(key) = id.jump_key() else { continue };
        let style = if state.focused == id {
            Style::default()
                .fg(theme.accent_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        spans.push(Span::styled(format!("[{}] {}  ", key, id.title()), style));
    }

    let max = state
        .page_height
        .saturating_sub(state.viewport.1 as usize)
        .max(1);
    let percent = (state.scroll * 100 / max).min(100);
    spans.push(Span::styled(
        format!("  {:>3}%", percent),
        Style::default().fg(theme.text_tertiary),
    ));

    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(
            "─".repeat(area.width as usize),
            Style::default().fg(theme.border_primary),
        )),
    ];
    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}

/// Paint the slice of each section that intersects the viewport. Hidden
/// sections keep their space but paint nothing; sections mid enter
/// animation paint dimmed.
fn render_page(state: &mut State, frame: &mut Frame, body: Rect) {
    let view_top = state.scroll;
    let view_bottom = view_top + body.height as usize;

    for id in SectionId::ALL {
        let Some(&(start, height)) = state.section_ranges.get(&id) else {
            continue;
        };
        let end = start + height;
        if end <= view_top || start >= view_bottom {
            continue;
        }
        if state.reveal.state(&id) == RevealState::Hidden {
            continue;
        }

        let first = view_top.saturating_sub(start);
        let last = height.min(view_bottom - start);
        let y = (start + first - view_top) as u16;
        let area = Rect::new(body.x, body.y + y, body.width, (last - first) as u16);

        let lines: Vec<Line<'static>> = state
            .cache
            .lines(id, Vec::new)
            .iter()
            .skip(first)
            .take(last - first)
            .cloned()
            .collect();

        let mut paragraph = Paragraph::new(Text::from(lines));
        let progress = state.reveal_progress.get(&id).copied().unwrap_or(100);
        if progress < 100 {
            paragraph = paragraph.style(Style::default().add_modifier(Modifier::DIM));
        }
        frame.render_widget(paragraph, area);
    }
}

fn render_help(state: &State, frame: &mut Frame, area: Rect) {
    let theme = &state.theme;
    let text = if state.contact.editing.is_some() {
        " Type to fill · Tab/Enter next field · Esc done"
    } else {
        match state.focused {
            SectionId::Events | SectionId::Teams => {
                " q quit · j/k scroll · Tab section · ←/→ browse · t theme"
            }
            SectionId::Announcements => {
                " q quit · j/k scroll · ←/→ select · Enter expand · t theme"
            }
            SectionId::Contact => " q quit · j/k scroll · Enter fill the form · t theme",
            _ => " q quit · j/k scroll · Tab section · 1-7 jump · t theme",
        }
    };
    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(theme.text_tertiary))),
        area,
    );
}

// === Section builders ===

fn build_hero(theme: &Theme, typed_chars: usize, width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default(), Line::default()];

    lines.push(center(
        format!("✦ {} ✦", content::COMPANY_NAME),
        width,
        Style::default()
            .fg(theme.accent_secondary)
            .add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::default());

    let tagline: String = content::HERO_TAGLINE.chars().take(typed_chars).collect();
    let done = typed_chars >= content::HERO_TAGLINE.chars().count();
    let typed = if done { tagline } else { format!("{}▌", tagline) };
    lines.push(center(
        typed,
        width,
        Style::default()
            .fg(theme.text_primary)
            .add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::default());

    for row in wrap(content::HERO_SUBTITLE, width.saturating_sub(8) as usize) {
        lines.push(center(row, width, Style::default().fg(theme.text_secondary)));
    }
    lines.push(Line::default());

    let stats = content::hero_stats()
        .iter()
        .map(|s| format!("{} {}", s.value, s.label))
        .collect::<Vec<_>>()
        .join("   ·   ");
    lines.push(center(
        stats,
        width,
        Style::default().fg(theme.accent_primary),
    ));
    lines.push(Line::default());
    lines.push(Line::default());
    lines
}

fn build_events(
    events: &CarouselState<Event>,
    theme: &Theme,
    width: u16,
    focused: bool,
) -> Vec<Line<'static>> {
    let mut lines = section_heading(
        "Upcoming Events",
        "Stay connected with your team through our exciting upcoming events and activities",
        theme,
        width,
        focused,
    );

    let event = events.current();
    lines.push(Line::from(vec![
        Span::styled(
            format!("    {}", event.title),
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  [{}]", event.category),
            Style::default().fg(theme.accent_secondary),
        ),
    ]));
    for row in wrap(event.description, width.saturating_sub(10) as usize) {
        lines.push(Line::from(Span::styled(
            format!("    {}", row),
            Style::default().fg(theme.text_secondary),
        )));
    }
    lines.push(Line::default());

    let date = event.date.format("%A, %B %-d, %Y").to_string();
    for (label, value) in [
        ("When ", date),
        ("Time ", event.time.to_string()),
        ("Where", event.location.to_string()),
        ("Who  ", format!("{} attendees", event.attendees)),
    ] {
        lines.push(Line::from(vec![
            Span::styled(
                format!("    {}  ", label),
                Style::default().fg(theme.accent_primary),
            ),
            Span::styled(value, Style::default().fg(theme.text_primary)),
        ]));
    }
    lines.push(Line::default());

    for (idx, item) in events.items().iter().enumerate() {
        let active = idx == events.current_index();
        let marker = if active { "▸" } else { " " };
        let style = if active {
            Style::default().fg(theme.accent_primary)
        } else {
            Style::default().fg(theme.text_tertiary)
        };
        lines.push(Line::from(Span::styled(
            format!(
                "    {} {}  {} · {}",
                marker,
                item.title,
                item.date.format("%b %-d"),
                item.time.split(" - ").next().unwrap_or(item.time),
            ),
            style,
        )));
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        format!("    {}", dots(events.len(), events.current_index())),
        Style::default().fg(theme.accent_primary),
    )));
    lines.push(Line::default());
    lines
}

fn build_teams(
    team: &CarouselState<TeamMember>,
    theme: &Theme,
    width: u16,
    focused: bool,
) -> Vec<Line<'static>> {
    let mut lines = section_heading(
        "Team Spotlight",
        "Meet the amazing people who make Nexus Digital a great place to work",
        theme,
        width,
        focused,
    );

    let member = team.current();
    lines.push(Line::from(vec![
        Span::styled(
            format!("    ({}) ", member.avatar),
            Style::default()
                .fg(theme.accent_secondary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            member.name,
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        format!("        {} · {} Department", member.role, member.department),
        Style::default().fg(theme.text_secondary),
    )));
    lines.push(Line::from(Span::styled(
        format!("        {}", member.skills.join(" · ")),
        Style::default().fg(theme.accent_primary),
    )));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        "    ★ Recent Achievement",
        Style::default().fg(theme.accent_warning),
    )));
    for row in wrap(member.achievement, width.saturating_sub(12) as usize) {
        lines.push(Line::from(Span::styled(
            format!("      {}", row),
            Style::default().fg(theme.text_secondary),
        )));
    }
    lines.push(Line::from(Span::styled(
        "    ☕ Fun Fact",
        Style::default().fg(theme.accent_warning),
    )));
    for row in wrap(member.fun_fact, width.saturating_sub(12) as usize) {
        lines.push(Line::from(Span::styled(
            format!("      {}", row),
            Style::default().fg(theme.text_secondary),
        )));
    }
    lines.push(Line::default());

    let mut indicator = Vec::new();
    indicator.push(Span::raw("    "));
    for (idx, m) in team.items().iter().enumerate() {
        let style = if idx == team.current_index() {
            Style::default()
                .fg(theme.accent_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.accent_muted)
        };
        indicator.push(Span::styled(format!("[{}] ", m.avatar), style));
    }
    lines.push(Line::from(indicator));
    lines.push(Line::default());
    lines
}

fn build_resources(theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let mut lines = section_heading(
        "Quick Access",
        "Your most-used workplace tools, one keypress away",
        theme,
        width,
        false,
    );

    let links = content::quick_links();
    let columns = if width >= 96 { 3 } else { 2 };
    let col_width = (width.saturating_sub(8) as usize) / columns;
    for chunk in links.chunks(columns) {
        let mut title_spans = vec![Span::raw("    ")];
        let mut desc_spans = vec![Span::raw("    ")];
        for link in chunk {
            title_spans.push(Span::styled(
                pad(format!("▪ {}", link.title), col_width),
                Style::default().fg(theme.text_primary),
            ));
            desc_spans.push(Span::styled(
                pad(format!("  {}", link.description), col_width),
                Style::default().fg(theme.text_tertiary),
            ));
        }
        lines.push(Line::from(title_spans));
        lines.push(Line::from(desc_spans));
        lines.push(Line::default());
    }
    lines
}

fn build_announcements(
    news: &AccordionState<u32>,
    items: &[NewsItem],
    cursor: usize,
    theme: &Theme,
    width: u16,
    focused: bool,
) -> Vec<Line<'static>> {
    let mut lines = section_heading(
        "News & Announcements",
        "Stay up to date with the latest company news, updates, and important announcements",
        theme,
        width,
        focused,
    );

    for (idx, item) in items.iter().enumerate() {
        let expanded = news.is_expanded(&item.id);
        let selected = focused && idx == cursor;
        let marker = if selected { "▸" } else { " " };
        let chevron = if expanded { "▾" } else { "▸" };

        let mut spans = vec![
            Span::styled(
                format!("  {} {} ", marker, chevron),
                Style::default().fg(if selected {
                    theme.accent_primary
                } else {
                    theme.text_tertiary
                }),
            ),
            Span::styled(priority_dot(item.priority), priority_style(item.priority, theme)),
            Span::styled(
                format!(" {}", item.title),
                Style::default()
                    .fg(theme.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if item.is_new {
            spans.push(Span::styled(
                "  ★ NEW",
                Style::default()
                    .fg(theme.accent_error)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(spans));

        lines.push(Line::from(Span::styled(
            format!(
                "        {} · {} · {}",
                item.date.format("%b %-d, %Y"),
                item.author,
                item.category
            ),
            Style::default().fg(theme.text_tertiary),
        )));
        for row in wrap(item.summary, width.saturating_sub(12) as usize) {
            lines.push(Line::from(Span::styled(
                format!("        {}", row),
                Style::default().fg(theme.text_secondary),
            )));
        }
        if expanded {
            lines.push(Line::default());
            for row in wrap(item.body, width.saturating_sub(14) as usize) {
                lines.push(Line::from(Span::styled(
                    format!("          {}", row),
                    Style::default().fg(theme.text_primary),
                )));
            }
        }
        lines.push(Line::default());
    }
    lines
}

fn build_snapshot(theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let mut lines = section_heading(
        "Productivity Snapshot",
        "A quick look at how the team is doing this month",
        theme,
        width,
        false,
    );

    let cards = content::stat_cards();
    let col_width = (width.saturating_sub(8) as usize) / cards.len().max(1);
    let mut values = vec![Span::raw("    ")];
    let mut titles = vec![Span::raw("    ")];
    let mut changes = vec![Span::raw("    ")];
    for card in &cards {
        values.push(Span::styled(
            pad(card.value.to_string(), col_width),
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        ));
        titles.push(Span::styled(
            pad(card.title.to_string(), col_width),
            Style::default().fg(theme.text_tertiary),
        ));
        let change_color = if card.positive {
            theme.accent_success
        } else {
            theme.accent_error
        };
        changes.push(Span::styled(
            pad(card.change.to_string(), col_width),
            Style::default().fg(change_color),
        ));
    }
    lines.push(Line::from(values));
    lines.push(Line::from(changes));
    lines.push(Line::from(titles));
    lines.push(Line::default());

    // Chart widgets are black boxes fed a data series; they render into
    // an offscreen buffer that is spliced into the page
    lines.push(Line::from(Span::styled(
        "    Weekly Task Completion",
        Style::default().fg(theme.text_secondary),
    )));
    let chart_width = width.saturating_sub(8).min(60);
    let weekly = content::weekly_tasks();
    let bars = BarChart::default()
        .data(&weekly)
        .bar_width(7)
        .bar_gap(2)
        .bar_style(Style::default().fg(theme.accent_primary))
        .value_style(Style::default().fg(theme.bg_base).bg(theme.accent_primary))
        .label_style(Style::default().fg(theme.text_tertiary));
    lines.extend(indent_lines(widget_lines(bars, chart_width, 8), "    "));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        "    Monthly Team Activity",
        Style::default().fg(theme.text_secondary),
    )));
    let activity = content::team_activity();
    let spark = Sparkline::default()
        .data(&activity)
        .style(Style::default().fg(theme.accent_secondary));
    lines.extend(indent_lines(widget_lines(spark, chart_width.min(24), 2), "    "));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        "    Project Status",
        Style::default().fg(theme.text_secondary),
    )));
    for (label, percent) in content::project_breakdown() {
        let gauge = Gauge::default()
            .percent(percent as u16)
            .label(format!("{} {}%", label, percent))
            .gauge_style(Style::default().fg(theme.accent_primary).bg(theme.bg_surface));
        lines.extend(indent_lines(widget_lines(gauge, chart_width, 1), "    "));
    }
    lines.push(Line::default());
    lines
}

fn build_contact(
    contact: &ContactForm,
    theme: &Theme,
    width: u16,
    focused: bool,
) -> Vec<Line<'static>> {
    let mut lines = section_heading(
        "Contact Us",
        "We'd love to hear from you! Reach out with questions, feedback, or just to say hello.",
        theme,
        width,
        focused,
    );

    if contact.submitted {
        lines.push(Line::from(Span::styled(
            "    ✓ Message sent!",
            Style::default()
                .fg(theme.accent_success)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "    Thanks {}, our team will get back to you soon.",
                contact.name.value.trim()
            ),
            Style::default().fg(theme.text_secondary),
        )));
        lines.push(Line::default());
        return lines;
    }

    for (field, label, value) in [
        (ContactField::Name, "Your Name", &contact.name),
        (ContactField::Email, "Your Email", &contact.email),
        (ContactField::Message, "Message", &contact.message),
    ] {
        let active = contact.editing == Some(field);
        let label_style = if active {
            Style::default().fg(theme.accent_primary)
        } else {
            Style::default().fg(theme.text_tertiary)
        };
        let shown = if active {
            format!("{}▌", value.value)
        } else if value.value.is_empty() {
            "—".to_string()
        } else {
            value.value.clone()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("    {:<12}", label), label_style),
            Span::styled(shown, Style::default().fg(theme.text_primary)),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "    Fill out the form and our team will get back to you soon.",
        Style::default().fg(theme.text_tertiary),
    )));
    lines.push(Line::default());
    lines
}

fn build_footer(theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "─".repeat(width as usize),
        Style::default().fg(theme.border_secondary),
    ))];
    lines.push(center(
        content::FOOTER_LINE.to_string(),
        width,
        Style::default().fg(theme.text_tertiary),
    ));
    lines.push(Line::default());
    lines
}

// === Helpers ===

fn section_heading(
    title: &str,
    subtitle: &str,
    theme: &Theme,
    width: u16,
    focused: bool,
) -> Vec<Line<'static>> {
    let marker = if focused { "▸ " } else { "" };
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("  {}{}", marker, title),
            Style::default()
                .fg(theme.accent_primary)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    for row in wrap(subtitle, width.saturating_sub(6) as usize) {
        lines.push(Line::from(Span::styled(
            format!("  {}", row),
            Style::default().fg(theme.text_tertiary),
        )));
    }
    lines.push(Line::default());
    lines
}

fn center(text: String, width: u16, style: Style) -> Line<'static> {
    let text_width = text.width();
    let padding = (width as usize).saturating_sub(text_width) / 2;
    Line::from(vec![
        Span::raw(" ".repeat(padding)),
        Span::styled(text, style),
    ])
}

fn pad(text: String, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        text
    } else {
        format!("{}{}", text, " ".repeat(width - text_width))
    }
}

/// Greedy word wrap on display width
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(16);
    let mut rows = Vec::new();
    let mut row = String::new();
    for word in text.split_whitespace() {
        if !row.is_empty() && row.width() + 1 + word.width() > width {
            rows.push(std::mem::take(&mut row));
        }
        if !row.is_empty() {
            row.push(' ');
        }
        row.push_str(word);
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

fn dots(count: usize, active: usize) -> String {
    (0..count)
        .map(|i| if i == active { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

fn priority_dot(priority: Priority) -> String {
    match priority {
        Priority::High => "●".to_string(),
        Priority::Medium => "◐".to_string(),
        Priority::Low => "○".to_string(),
    }
}

fn priority_style(priority: Priority, theme: &Theme) -> Style {
    match priority {
        Priority::High => Style::default().fg(theme.accent_error),
        Priority::Medium => Style::default().fg(theme.accent_warning),
        Priority::Low => Style::default().fg(theme.accent_success),
    }
}

fn indent_lines(lines: Vec<Line<'static>>, indent: &str) -> Vec<Line<'static>> {
    lines
        .into_iter()
        .map(|line| {
            let mut spans = vec![Span::raw(indent.to_string())];
            spans.extend(line.spans);
            Line::from(spans)
        })
        .collect()
}

/// Render a ratatui widget into an offscreen buffer and lift the result
/// into owned lines for the page cache
fn widget_lines<W: Widget>(widget: W, width: u16, height: u16) -> Vec<Line<'static>> {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);

    (0..height)
        .map(|y| {
            let mut spans = Vec::new();
            for x in 0..width {
                if let Some(cell) = buf.cell(Position::new(x, y)) {
                    spans.push(Span::styled(cell.symbol().to_string(), cell.style()));
                }
            }
            Line::from(spans)
        })
        .collect()
}
