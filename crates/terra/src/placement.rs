//! Where each target sits on the page, and which part of the page is on screen.
//!
//! Targets are placed in page coordinates. The page is one viewport tall and
//! scrolls upward by `scroll` rows, so a page row `p` appears on screen at
//! `p - scroll`.

use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};

/// Height of an info card, borders included.
const CARD_HEIGHT: u16 = 5;

/// Page rectangles for every target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub title: Rect,
    pub sun: Rect,
    pub earth: Rect,
    pub cards: Vec<Rect>,
    pub fact: Rect,
}

impl Placement {
    /// Lay out `card_count` cards and the other targets inside `page`.
    pub fn compute(page: Rect, card_count: usize) -> Self {
        let rows = Layout::vertical([
            Constraint::Length(1),           // Top padding
            Constraint::Length(1),           // Title
            Constraint::Length(1),           // Spacing
            Constraint::Min(5),              // Sun and earth
            Constraint::Length(1),           // Spacing
            Constraint::Length(CARD_HEIGHT), // Info cards
            Constraint::Length(1),           // Spacing
            Constraint::Length(3),           // Fact panel
            Constraint::Length(1),           // Bottom padding
        ])
        .split(page);

        let bodies = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[3]);

        let cards = Layout::horizontal(vec![Constraint::Fill(1); card_count])
            .horizontal_margin(2)
            .spacing(2)
            .split(rows[5])
            .to_vec();

        Self {
            title: rows[1],
            sun: bodies[0],
            earth: bodies[1],
            cards,
            fact: rows[7].inner(Margin::new(2, 0)),
        }
    }

    /// Index of the card under page cell `pos`.
    pub fn card_at(&self, pos: Position) -> Option<usize> {
        self.cards.iter().position(|card| card.contains(pos))
    }
}

/// Whether any row of a page rect is on screen: its top is above the bottom
/// of the viewport and its bottom is below the top.
pub fn is_visible(rect: Rect, scroll: u16, viewport_height: u16) -> bool {
    let top = rect.y as i32 - scroll as i32;
    let bottom = top + rect.height as i32;
    top < viewport_height as i32 && bottom > 0
}

/// Convert a screen cell to page coordinates.
pub fn to_page(column: u16, row: u16, scroll: u16) -> Position {
    Position::new(column, row.saturating_add(scroll))
}
