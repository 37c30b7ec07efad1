//! The earth and the sun.
//!
//! Both are drawn as discs centered in their area, twice as wide as tall to
//! make up for terminal cell proportions. Cells outside the disc are left
//! untouched so the starfield shows through.

use std::f64::consts::{FRAC_PI_2, PI};

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use crate::chars::{BODY_CHAR, CORONA_CHARS};
use crate::color::{fade, hsl_to_rgb};

/// Fraction of the area's half-height a disc at scale 1 fills.
const BASE_FILL: f64 = 0.75;

/// Cell-space geometry of a disc centered in an area.
#[derive(Debug, Clone, Copy)]
struct Disc {
    cx: f64,
    cy: f64,
    radius: f64,
}

impl Disc {
    fn centered(area: Rect, scale: f64) -> Self {
        let half_height = (area.height as f64 / 2.0).min(area.width as f64 / 4.0);
        Self {
            cx: area.x as f64 + area.width as f64 / 2.0,
            cy: area.y as f64 + area.height as f64 / 2.0,
            radius: half_height * BASE_FILL * scale,
        }
    }

    /// Normalized offset of a cell center; `(0, 0)` at the middle, unit circle at the rim.
    fn normalized(&self, x: u16, y: u16) -> (f64, f64) {
        let dx = (x as f64 + 0.5 - self.cx) / (2.0 * self.radius);
        let dy = (y as f64 + 0.5 - self.cy) / self.radius;
        (dx, dy)
    }
}

/// Whether cell `(x, y)` falls on a body drawn into `area` at `scale`.
pub fn disc_contains(area: Rect, scale: f64, x: u16, y: u16) -> bool {
    let disc = Disc::centered(area, scale);
    if disc.radius <= 0.0 {
        return false;
    }
    let (dx, dy) = disc.normalized(x, y);
    dx * dx + dy * dy <= 1.0
}

/// A rotating globe with procedural continents.
#[derive(Debug, Clone, Copy)]
pub struct Globe {
    /// Longitude facing the viewer, in degrees.
    pub longitude_deg: f64,
    /// Size multiplier; 1.0 at rest.
    pub scale: f64,
    pub opacity: f32,
}

impl Globe {
    /// Color of the surface point at latitude/longitude (radians), lit by `light`.
    fn surface(lat: f64, lon: f64, light: f64) -> Color {
        let light = light as f32;
        if lat.abs() > 1.2 {
            return hsl_to_rgb(200.0, 0.2, 0.55 + 0.35 * light);
        }
        let land = (3.0 * lon).sin() * (2.0 * lat).cos()
            + 0.5 * (5.0 * lon + 1.3).sin() * (3.0 * lat + 0.7).sin()
            + 0.3 * (7.0 * lon - 4.0 * lat).cos();
        if land > 0.45 {
            hsl_to_rgb(110.0, 0.45, 0.12 + 0.28 * light)
        } else {
            hsl_to_rgb(212.0, 0.75, 0.15 + 0.35 * light)
        }
    }
}

impl Widget for Globe {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let disc = Disc::centered(area, self.scale);
        if disc.radius <= 0.0 {
            return;
        }
        let spin = self.longitude_deg.to_radians();

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let (dx, dy) = disc.normalized(x, y);
                let d2 = dx * dx + dy * dy;
                if d2 > 1.0 {
                    continue;
                }
                let dz = (1.0 - d2).sqrt();
                let lat = (-dy).clamp(-1.0, 1.0).asin();
                let lon = dx.atan2(dz) + spin;

                // Light from the upper left, where the sun sits.
                let light = (0.25 + 0.75 * (dz * 0.8 - dx * 0.45 - dy * 0.2)).clamp(0.0, 1.0);
                let mut color = Self::surface(lat, lon, light);
                if d2 > 0.85 {
                    color = hsl_to_rgb(190.0, 0.9, 0.45 + 0.2 * light as f32);
                }

                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(BODY_CHAR).set_fg(fade(color, self.opacity));
                }
            }
        }
    }
}

/// The sun with a flickering corona.
#[derive(Debug, Clone, Copy)]
pub struct Sun {
    /// Size multiplier; 1.0 at rest.
    pub scale: f64,
    /// Drives the corona flicker. Hold it still to freeze the corona.
    pub elapsed_ms: u64,
    pub opacity: f32,
}

/// Corona thickness as a fraction of the radius.
const CORONA: f64 = 0.3;

impl Widget for Sun {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let disc = Disc::centered(area, self.scale);
        if disc.radius <= 0.0 {
            return;
        }
        let phase = self.elapsed_ms as f64 / 400.0;

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let (dx, dy) = disc.normalized(x, y);
                let d = (dx * dx + dy * dy).sqrt();

                let (ch, color) = if d <= 1.0 {
                    let heat = (1.0 - d) as f32;
                    (BODY_CHAR, hsl_to_rgb(30.0 + 25.0 * heat, 1.0, 0.5 + 0.2 * heat))
                } else if d <= 1.0 + CORONA {
                    let angle = dy.atan2(dx) + PI;
                    let ray = (angle * 6.0 + phase).sin() + (angle * 11.0 - phase * 1.7).sin();
                    let reach = (d - 1.0) / CORONA;
                    if ray < reach * 2.0 - 0.6 {
                        continue;
                    }
                    let idx = ((angle / FRAC_PI_2 * 3.0 + phase) as usize) % CORONA_CHARS.len();
                    (
                        CORONA_CHARS[idx],
                        hsl_to_rgb(38.0, 1.0, 0.55 - 0.25 * reach as f32),
                    )
                } else {
                    continue;
                };

                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(ch).set_fg(fade(color, self.opacity));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painted(buf: &Buffer, area: Rect) -> usize {
        let mut count = 0;
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if buf[(x, y)].symbol() != " " {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_globe_leaves_corners_untouched() {
        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        Globe {
            longitude_deg: 0.0,
            scale: 1.0,
            opacity: 1.0,
        }
        .render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), " ");
        assert_eq!(buf[(39, 19)].symbol(), " ");
        assert_eq!(buf[(20, 10)].symbol(), "█");
    }

    #[test]
    fn test_zoom_paints_more_cells() {
        let area = Rect::new(0, 0, 40, 20);
        let mut rest = Buffer::empty(area);
        let mut zoomed = Buffer::empty(area);
        let globe = Globe {
            longitude_deg: 0.0,
            scale: 1.0,
            opacity: 1.0,
        };
        globe.render(area, &mut rest);
        Globe { scale: 1.3, ..globe }.render(area, &mut zoomed);
        assert!(painted(&zoomed, area) > painted(&rest, area));
    }

    #[test]
    fn test_rotation_changes_surface() {
        let area = Rect::new(0, 0, 40, 20);
        let mut a = Buffer::empty(area);
        let mut b = Buffer::empty(area);
        let globe = Globe {
            longitude_deg: 0.0,
            scale: 1.0,
            opacity: 1.0,
        };
        globe.render(area, &mut a);
        Globe {
            longitude_deg: 90.0,
            ..globe
        }
        .render(area, &mut b);
        assert_ne!(a, b);
    }

    #[test]
    fn test_sun_corona_frozen_when_time_held() {
        let area = Rect::new(0, 0, 30, 15);
        let mut first = Buffer::empty(area);
        let mut second = Buffer::empty(area);
        let sun = Sun {
            scale: 1.0,
            elapsed_ms: 1234,
            opacity: 1.0,
        };
        sun.render(area, &mut first);
        sun.render(area, &mut second);
        assert_eq!(first, second);
        assert_eq!(first[(15, 7)].symbol(), "█");
    }

    #[test]
    fn test_disc_contains() {
        let area = Rect::new(10, 5, 40, 20);
        assert!(disc_contains(area, 1.0, 30, 15));
        assert!(!disc_contains(area, 1.0, 10, 5));
        assert!(!disc_contains(Rect::new(0, 0, 0, 0), 1.0, 0, 0));
        // The rim cell just outside at rest is inside when zoomed.
        assert!(!disc_contains(area, 1.0, 30, 22));
        assert!(disc_contains(area, 1.3, 30, 22));
    }

    #[test]
    fn test_empty_area_is_noop() {
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 4));
        Sun {
            scale: 1.0,
            elapsed_ms: 0,
            opacity: 1.0,
        }
        .render(area, &mut buf);
        assert_eq!(painted(&buf, Rect::new(0, 0, 4, 4)), 0);
    }
}
