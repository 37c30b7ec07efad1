//! Drawing the page and the overlays on top of it.

use std::time::Duration;

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap},
};
use terra_background::{Globe, Sun, fade};
use terra_core::ColorTheme;

use crate::notify::Banners;
use crate::placement::Placement;
use crate::scene::{InfoCard, RenderHint, Scene};

const TITLE: &str = "🌍 Earth in Motion";
const FACT_TITLE: &str = " Did you know? ";
const MUTED: Color = Color::Rgb(140, 140, 150);
const BANNER_BG: Color = Color::Rgb(0, 230, 230);
/// Degrees of ambient globe spin per millisecond.
const SPIN_DEG_PER_MS: f64 = 0.006;

/// Paint every target into the page buffer. Targets marked
/// [`RenderHint::Static`] are off screen and skipped.
pub fn draw_page(scene: &Scene, placement: &Placement, theme: ColorTheme, buf: &mut Buffer) {
    let opacity = scene.opacity.current() as f32;
    let accent = fade(theme.color(), opacity);

    Line::from(TITLE.bold().fg(accent))
        .centered()
        .render(placement.title, buf);

    if scene.sun.hint == RenderHint::Animated {
        Sun {
            scale: scene.sun.scale,
            elapsed_ms: scene.sun.flicker_ms,
            opacity,
        }
        .render(placement.sun, buf);
    }

    if scene.earth.hint == RenderHint::Animated {
        Globe {
            longitude_deg: scene.earth.rotation_deg + scene.earth.spin_ms as f64 * SPIN_DEG_PER_MS,
            scale: scene.earth.scale(),
            opacity,
        }
        .render(placement.earth, buf);
    }

    for (card, area) in scene.cards.iter().zip(&placement.cards) {
        if card.hint == RenderHint::Animated {
            draw_card(scene, card, *area, accent, opacity, buf);
        }
    }

    draw_fact(scene, placement.fact, accent, opacity, buf);
}

fn draw_card(
    scene: &Scene,
    card: &InfoCard,
    area: Rect,
    accent: Color,
    opacity: f32,
    buf: &mut Buffer,
) {
    let metric = card.kind.metric();
    let (area, border) = if card.hovered {
        // Lifted one row while hovered.
        let lifted = Rect {
            y: area.y.saturating_sub(1),
            ..area
        };
        (lifted, BorderType::Thick)
    } else {
        (area, BorderType::Rounded)
    };

    let block = Block::bordered()
        .border_type(border)
        .border_style(Style::new().fg(accent))
        .title(Line::from(card.kind.label()).centered());

    let text = vec![
        Line::from(scene.counter(card.kind).text().bold().fg(accent)),
        Line::from(metric.unit.fg(fade(MUTED, opacity))),
    ];

    Clear.render(area, buf);
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(block)
        .render(area, buf);
}

fn draw_fact(scene: &Scene, area: Rect, accent: Color, opacity: f32, buf: &mut Buffer) {
    let text_opacity = opacity * scene.fact.opacity.current() as f32;
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(fade(MUTED, opacity)))
        .title(FACT_TITLE.fg(accent));

    Clear.render(area, buf);
    Paragraph::new(scene.fact.text())
        .style(Style::new().fg(fade(Color::Rgb(235, 235, 235), text_opacity)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block)
        .render(area, buf);
}

/// Copy the visible window of the page onto the screen.
pub fn blit(page: &Buffer, scroll: u16, screen: Rect, buf: &mut Buffer) {
    for y in 0..screen.height {
        for x in 0..screen.width {
            let Some(cell) = page.cell((x, y + scroll)) else {
                continue;
            };
            if let Some(target) = buf.cell_mut((screen.x + x, screen.y + y)) {
                *target = cell.clone();
            }
        }
    }
}

/// Stack banners in the top-right corner, sliding in from the right edge.
pub fn draw_banners(frame: &mut Frame, banners: &Banners, area: Rect, now: Duration, hold: Duration) {
    if banners.is_empty() {
        return;
    }
    for (slot, (banner, phase)) in banners.visible(now, hold).enumerate() {
        let width = Line::from(banner.message.as_str()).width() as u16 + 4;
        let y = area.y + 1 + slot as u16 * 3;
        let rest = area.right().saturating_sub(width + 1);
        let hidden = ((1.0 - phase.offset()) * (width + 1) as f64).round() as u16;
        let x = rest.saturating_add(hidden).max(area.x);
        let rect = Rect::new(x, y, width, 3).intersection(area);
        if rect.is_empty() {
            continue;
        }

        let widget = Paragraph::new(banner.message.as_str().bold())
            .style(Style::new().fg(Color::Black).bg(BANNER_BG))
            .block(Block::bordered().border_type(BorderType::Rounded));
        frame.render_widget(Clear, rect);
        frame.render_widget(widget, rect);
    }
}

/// Render help text.
pub fn draw_help(frame: &mut Frame, area: Rect, theme: ColorTheme) {
    let color = theme.color();
    let help = Line::from(vec![
        "q".bold().fg(color),
        " quit  ".dark_gray(),
        "e".bold().fg(color),
        " earth  ".dark_gray(),
        "s".bold().fg(color),
        " sun  ".dark_gray(),
        "space".bold().fg(color),
        " hello  ".dark_gray(),
        "c".bold().fg(color),
        " cycle color".dark_gray(),
    ])
    .centered();
    frame.render_widget(help, area);
}
