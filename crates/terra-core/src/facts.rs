//! Rotating Earth facts.

/// Built-in facts, shown in order.
pub const FACTS: [&str; 15] = [
    "Earth completes one rotation every 24 hours",
    "Earth orbits the Sun at 107,226 km/h",
    "Light from the Sun takes 8 minutes to reach Earth",
    "Earth's diameter is 12,742 kilometers",
    "The Moon is 384,400 km away from Earth",
    "Earth's atmosphere extends 10,000 km into space",
    "Earth's magnetic field protects us from solar radiation",
    "Earth is the only known planet with life",
    "Earth's surface is 71% water and 29% land",
    "The Earth's core is as hot as the surface of the Sun",
    "Earth's gravity is 9.8 m/s²",
    "Earth has one natural satellite - the Moon",
    "Earth's rotation is gradually slowing down",
    "Earth's orbit around the Sun is elliptical",
    "Earth's axial tilt causes seasons",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactError {
    #[error("fact list must contain at least one fact")]
    Empty,
}

/// A non-empty, ordered list of facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactList {
    facts: Vec<String>,
}

impl FactList {
    pub fn new(facts: Vec<String>) -> Result<Self, FactError> {
        if facts.is_empty() {
            return Err(FactError::Empty);
        }
        Ok(Self { facts })
    }

    /// The built-in list.
    pub fn builtin() -> Self {
        Self {
            facts: FACTS.iter().map(|fact| fact.to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Fact at `index`, wrapping around the end of the list.
    pub fn get(&self, index: usize) -> &str {
        &self.facts[index % self.facts.len()]
    }

    /// A cursor positioned on the first fact.
    pub fn cursor(&self) -> FactCursor {
        FactCursor {
            index: 0,
            len: self.facts.len(),
        }
    }
}

impl Default for FactList {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Position in a [`FactList`]. After `k` advances it sits at `k mod len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactCursor {
    index: usize,
    len: usize,
}

impl FactCursor {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Move to the next fact and return the new index.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }
}
