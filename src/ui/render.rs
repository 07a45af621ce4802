use std::time::Instant;

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::carousel::{CarouselPhase, CarouselView};
use crate::ui::home::{self, Section};
use crate::ui::layout::{categories_track, dropdown_rect, layout_regions, PRODUCTS_LABEL_X};
use crate::ui::reveal::RevealStyle;
use crate::ui::theme::{
    hex_color, ACTIVE_HIGHLIGHT, BADGE_TEXT, BRAND_RED, BRAND_YELLOW, GLOBAL_BORDER, HEADER_TEXT,
    MUTED_TEXT, POPUP_BORDER,
};

/// Below this opacity a block is not drawn at all.
const MIN_VISIBLE_OPACITY: f32 = 0.05;
/// Below this opacity text is drawn muted.
const FADED_OPACITY: f32 = 0.6;

pub fn draw(frame: &mut Frame<'_>, app: &App, now: Instant) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    draw_header(frame, header);
    frame.render_widget(Clear, body);
    for spec in home::SECTIONS {
        let Some((_, placed)) = app.placed(spec.section) else {
            continue;
        };
        let style = app.reveal_style(spec.section, now);
        let Some(target) = reveal_area(placed.area, &style, app.settings().column_width_px) else {
            continue;
        };
        let faded = style.opacity < FADED_OPACITY;
        match spec.section {
            Section::Hero => draw_hero(frame, target, placed.skip, faded),
            Section::Categories => draw_categories(frame, app, target, faded),
            Section::WhyUs => draw_why_us(frame, target, placed.skip, faded),
            Section::Testimonials => draw_testimonials(frame, app, target, placed.skip, faded),
            Section::CallToAction => draw_cta(frame, target, faded),
        }
    }
    draw_footer(frame, footer, &app.categories_view());

    if app.dropdown().is_open() {
        draw_dropdown(frame, app, header, area);
    }
}

/// Maps a reveal transform onto terminal cells. Pixels become columns via
/// `column_width_px`; rows are twice as tall as columns are wide.
pub fn reveal_area(area: Rect, style: &RevealStyle, column_width_px: u32) -> Option<Rect> {
    if style.opacity < MIN_VISIBLE_OPACITY {
        return None;
    }
    let cell = column_width_px.max(1) as f32;
    let t = style.transform;
    let dx = (t.translate_x / cell).round() as i32;
    let dy = (t.translate_y / (cell * 2.0)).round() as i32;
    let inset_x = ((1.0 - t.scale) * f32::from(area.width) / 2.0)
        .round()
        .max(0.0) as i32;
    let inset_y = ((1.0 - t.scale) * f32::from(area.height) / 2.0)
        .round()
        .max(0.0) as i32;

    let left = i32::from(area.x) + inset_x + dx.max(0);
    let right = i32::from(area.right()) - inset_x + dx.min(0);
    let top = i32::from(area.y) + inset_y + dy.max(0);
    let bottom = i32::from(area.bottom()) - inset_y + dy.min(0);
    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect {
        x: left as u16,
        y: top as u16,
        width: (right - left) as u16,
        height: (bottom - top) as u16,
    })
}

fn text_style(faded: bool) -> Style {
    if faded {
        Style::default().fg(MUTED_TEXT)
    } else {
        Style::default().fg(HEADER_TEXT)
    }
}

fn accent(color: ratatui::style::Color, faded: bool) -> Style {
    if faded {
        Style::default().fg(MUTED_TEXT)
    } else {
        Style::default().fg(color)
    }
}

fn draw_header(frame: &mut Frame<'_>, area: Rect) {
    let brand = format!(
        "{:<width$}",
        " BuildChem Pro",
        width = PRODUCTS_LABEL_X as usize
    );
    let line = Line::from(vec![
        Span::styled(
            brand,
            Style::default()
                .fg(BRAND_YELLOW)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("Products ▾", Style::default().fg(HEADER_TEXT)),
        Span::styled("   Blog   Contact", Style::default().fg(MUTED_TEXT)),
    ]);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_hero(frame: &mut Frame<'_>, area: Rect, skip: u16, faded: bool) {
    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", home::HERO_BADGE),
            accent(BADGE_TEXT, faded).bg(if faded { ACTIVE_HIGHLIGHT } else { BRAND_RED }),
        )),
        Line::from(""),
        Line::from(Span::styled(
            home::HERO_TITLE,
            text_style(faded).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(home::HERO_BODY, text_style(faded))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[ Explore Products ]", accent(BRAND_YELLOW, faded)),
            Span::raw("  "),
            Span::styled("[ Get a Quote ]", text_style(faded)),
        ]),
    ];
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((skip, 0));
    frame.render_widget(paragraph, inset(area, 2));
}

fn inset(area: Rect, columns: u16) -> Rect {
    Rect {
        x: area.x + columns.min(area.width),
        width: area.width.saturating_sub(columns * 2),
        ..area
    }
}

fn draw_categories(frame: &mut Frame<'_>, app: &App, area: Rect, faded: bool) {
    let view = app.categories_view();
    let title = Line::from(Span::styled(
        "Our Product Categories",
        text_style(faded).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        Paragraph::new(title).alignment(Alignment::Center),
        Rect { height: 1.min(area.height), ..area },
    );

    let track = categories_track(area);
    match view.phase {
        CarouselPhase::Loading => {
            frame.render_widget(
                Paragraph::new("Loading categories...")
                    .style(text_style(true))
                    .alignment(Alignment::Center),
                track,
            );
        }
        CarouselPhase::Empty => {
            frame.render_widget(
                Paragraph::new("No categories yet.")
                    .style(text_style(true))
                    .alignment(Alignment::Center),
                track,
            );
        }
        CarouselPhase::Static | CarouselPhase::Carousel => {
            let visible = app.categories().visible_items();
            let per_view = view.items_per_view.max(1) as u32;
            let slots = Layout::horizontal(
                (0..per_view).map(|_| Constraint::Ratio(1, per_view)),
            )
            .split(track);
            for (category, slot) in visible.iter().zip(slots.iter()) {
                let block = Block::bordered()
                    .border_style(accent(hex_color(&category.accent_color), faded))
                    .title(format!(" {} {} ", category.icon, category.name));
                let body = Paragraph::new(category.description.as_str())
                    .style(text_style(faded))
                    .wrap(Wrap { trim: true })
                    .block(block);
                frame.render_widget(body, *slot);
            }
        }
    }

    if area.height >= 3 {
        let dots_row = Rect {
            y: area.bottom() - 1,
            height: 1,
            ..area
        };
        frame.render_widget(
            Paragraph::new(dots_line(&view, faded)).alignment(Alignment::Center),
            dots_row,
        );
    }
}

fn dots_line(view: &CarouselView, faded: bool) -> Line<'static> {
    if !view.show_controls {
        return Line::from("");
    }
    let arrow = |enabled: bool, glyph: &'static str| {
        let style = if enabled && !faded {
            Style::default().fg(HEADER_TEXT)
        } else {
            Style::default().fg(GLOBAL_BORDER)
        };
        Span::styled(glyph, style)
    };
    let mut spans = vec![arrow(view.previous_enabled, "◀ ")];
    for dot in &view.dots {
        let (glyph, color) = if dot.active {
            ("● ", BRAND_YELLOW)
        } else {
            ("○ ", MUTED_TEXT)
        };
        spans.push(Span::styled(glyph, accent(color, faded)));
    }
    spans.push(arrow(view.next_enabled, "▶"));
    if let Some(label) = &view.position_label {
        spans.push(Span::styled(format!("  {label}"), text_style(true)));
    }
    if view.paused {
        spans.push(Span::styled("  paused", text_style(true)));
    }
    Line::from(spans)
}

fn draw_why_us(frame: &mut Frame<'_>, area: Rect, skip: u16, faded: bool) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Why Choose Us",
            text_style(faded).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for feature in &home::FEATURES {
        lines.push(Line::from(vec![
            Span::styled("✓ ", accent(BRAND_YELLOW, faded)),
            Span::styled(
                feature.title,
                text_style(faded).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(": {}", feature.desc), text_style(faded)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines).scroll((skip, 0)), inset(area, 2));
}

fn draw_testimonials(frame: &mut Frame<'_>, app: &App, area: Rect, skip: u16, faded: bool) {
    let state = app.testimonials();
    let mut lines = vec![
        Line::from(Span::styled(
            "What Our Clients Say",
            text_style(faded).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    if let Some(current) = state.wrapped(0) {
        lines.push(Line::from(Span::styled(
            "★".repeat(usize::from(current.rating)),
            accent(BRAND_YELLOW, faded),
        )));
        lines.push(Line::from(Span::styled(
            format!("\"{}\"", current.quote),
            text_style(faded),
        )));
        lines.push(Line::from(Span::styled(
            format!("{}, {}", current.name, current.role),
            text_style(faded).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        let previous = state.wrapped(-1).map(|t| t.name).unwrap_or_default();
        let next = state.wrapped(1).map(|t| t.name).unwrap_or_default();
        lines.push(Line::from(Span::styled(
            format!("‹ {previous}    {next} ›"),
            text_style(true),
        )));
    }
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .scroll((skip, 0));
    frame.render_widget(paragraph, inset(area, 2));
}

fn draw_cta(frame: &mut Frame<'_>, area: Rect, faded: bool) {
    let block = Block::bordered().border_style(accent(BRAND_YELLOW, faded));
    let lines = vec![
        Line::from(Span::styled(
            home::CTA_TITLE,
            text_style(faded).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(home::CTA_BODY, text_style(faded))),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        inset(area, 2),
    );
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect, view: &CarouselView) {
    let mut spans = vec![Span::styled(
        " q quit  ←/→ categories  1-9 jump  [/] testimonials  p products  ↑/↓ scroll",
        Style::default().fg(MUTED_TEXT),
    )];
    if let Some(label) = &view.position_label {
        spans.push(Span::styled(
            format!("   {label}"),
            Style::default().fg(HEADER_TEXT),
        ));
    }
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_dropdown(frame: &mut Frame<'_>, app: &App, header: Rect, screen: Rect) {
    let categories = app.categories().items();
    let menu = dropdown_rect(header, screen, categories.len());
    if menu.width == 0 || menu.height == 0 {
        return;
    }
    let highlighted = app.dropdown().highlighted();
    let lines: Vec<Line> = if categories.is_empty() {
        vec![Line::from(Span::styled("No categories", text_style(true)))]
    } else {
        categories
            .iter()
            .enumerate()
            .map(|(index, category)| {
                let style = if highlighted == Some(index) {
                    Style::default().fg(BRAND_YELLOW).bg(ACTIVE_HIGHLIGHT)
                } else {
                    Style::default().fg(HEADER_TEXT)
                };
                Line::from(Span::styled(
                    format!("{} {}", category.icon, category.name),
                    style,
                ))
            })
            .collect()
    };
    let block = Block::bordered()
        .title(" Products ")
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Clear, menu);
    frame.render_widget(Paragraph::new(lines).block(block), menu);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::reveal::{RevealDirection, RevealMotion};

    fn area() -> Rect {
        Rect {
            x: 0,
            y: 5,
            width: 80,
            height: 10,
        }
    }

    #[test]
    fn hidden_block_is_not_drawn() {
        let style = RevealStyle::hidden(RevealDirection::Up, &RevealMotion::default());
        assert_eq!(reveal_area(area(), &style, 10), None);
    }

    #[test]
    fn settled_block_fills_its_area() {
        let settled = RevealStyle::visible();
        assert_eq!(reveal_area(area(), &settled, 10), Some(area()));
    }

    #[test]
    fn left_slide_shifts_and_clips() {
        let mut style = RevealStyle::visible();
        style.transform.translate_x = -30.0;
        let rect = reveal_area(area(), &style, 10).unwrap();
        assert_eq!(rect.x, 0);
        assert_eq!(rect.width, 77);
    }

    #[test]
    fn scale_insets_both_axes() {
        let mut style = RevealStyle::visible();
        style.transform.scale = 0.8;
        let rect = reveal_area(area(), &style, 10).unwrap();
        assert_eq!(rect.x, 8);
        assert_eq!(rect.width, 64);
        assert_eq!(rect.y, 6);
        assert_eq!(rect.height, 8);
    }
}
