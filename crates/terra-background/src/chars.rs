//! Character constants for scene painting.

/// Star glyphs per parallax layer, far to near.
pub const STAR_CHARS: [&[char]; 3] = [&['.', '·'], &['*', '+', '·'], &['✦', '✧', '*']];

/// Glyph used for solid body cells.
pub const BODY_CHAR: char = '█';

/// Glyphs for the flickering solar corona.
pub const CORONA_CHARS: &[char] = &['·', '*', '+', '✶'];
