//! Scene painting for the terra dashboard.
//!
//! A three-layer parallax starfield behind everything, and the earth and sun
//! bodies drawn on top of it. All rendering is a pure function of its inputs
//! (time, scroll offset, opacity), so frames can be reproduced in tests.

mod bodies;
mod chars;
mod color;
mod starfield;

pub use bodies::{Globe, Sun, disc_contains};
pub use color::fade;
pub use starfield::{Starfield, parallax_offsets};
