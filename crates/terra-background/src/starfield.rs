//! Three-layer parallax starfield (stateless).

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::chars::STAR_CHARS;
use crate::color::fade;

pub const LAYER_COUNT: usize = 3;

/// Stars per thousand cells, far to near.
const LAYER_DENSITY: [u64; LAYER_COUNT] = [22, 10, 4];

/// Twinkle period per brightness step.
const TWINKLE_PERIOD_MS: u64 = 1200;

/// Vertical offset of each layer for a scroll position: layer `i` moves
/// `(i + 1) * 0.5` rows per scrolled row.
pub fn parallax_offsets(scroll: u16) -> [i32; LAYER_COUNT] {
    std::array::from_fn(|i| (scroll as f64 * (i + 1) as f64 * 0.5).round() as i32)
}

/// The sky behind the scene.
#[derive(Debug, Clone, Copy)]
pub struct Starfield {
    /// Per-layer vertical offsets from [`parallax_offsets`].
    pub offsets: [i32; LAYER_COUNT],
    /// Drives twinkling.
    pub elapsed_ms: u64,
    /// Scene opacity, for the load fade-in.
    pub opacity: f32,
}

/// Fills `area` completely, so paint it before anything else. Rows are
/// counted from the top of `area`.
impl Widget for Starfield {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = (0..area.height)
            .map(|y| {
                let spans: Vec<Span> = (0..area.width).map(|x| self.render_char(x, y)).collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).render(area, buf);
    }
}

impl Starfield {
    /// The glyph at cell `(x, y)`, nearest layer first.
    pub fn render_char(&self, x: u16, y: u16) -> Span<'static> {
        for layer in (0..LAYER_COUNT).rev() {
            let row = y as i64 - self.offsets[layer] as i64;
            let seed = cell_seed(x as i64, row, layer as u64);
            if seed % 1000 >= LAYER_DENSITY[layer] {
                continue;
            }

            let chars = STAR_CHARS[layer];
            let ch = chars[(seed / 1000) as usize % chars.len()];

            // Brightness cycles with time, phase-shifted per star
            let step = (seed / 7 + self.elapsed_ms / TWINKLE_PERIOD_MS) % 3;
            let base = 50 + layer as u8 * 35;
            let color = match step {
                0 => Color::Rgb(base, base, base + 20),
                1 => Color::Rgb(base + 40, base + 40, base + 70),
                _ => Color::Rgb(base + 80, base + 80, base + 110),
            };

            return Span::styled(ch.to_string(), Style::new().fg(fade(color, self.opacity)));
        }
        Span::raw(" ")
    }
}

/// Deterministic per-cell hash so stars stay put between frames.
fn cell_seed(x: i64, row: i64, layer: u64) -> u64 {
    let mut h = (x as u64)
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add((row as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F))
        .wrapping_add(layer.wrapping_mul(0x1656_67B1_9E37_79F9));
    h ^= h >> 31;
    h = h.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    h ^= h >> 29;
    h
}
