//! Display and interactive targets, bound once at startup.

use terra_anim::AnimatedValue;
use terra_config::LayoutConfig;
use terra_core::{FactCursor, FactList, MetricKind, format_grouped};

/// Logical id of the fact display target.
pub const FACT_TARGET: &str = "current-fact";

/// Earth size while zoomed.
const EARTH_ZOOM: f64 = 1.25;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    #[error("display target `{0}` is missing from layout.cards")]
    MissingTarget(&'static str),
    #[error("display target `{0}` appears more than once in layout.cards")]
    DuplicateTarget(String),
    #[error("unknown display target `{0}` in layout.cards")]
    UnknownTarget(String),
}

/// Whether a target is inside the viewport at the last visibility pass.
/// Static targets are not drawn and their ambient animation is frozen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderHint {
    #[default]
    Animated,
    Static,
}

/// A metric counter and the exact value behind its text.
#[derive(Debug, Clone)]
pub struct Counter {
    pub kind: MetricKind,
    pub value: AnimatedValue,
}

impl Counter {
    /// Text shown in the counter's display target.
    pub fn text(&self) -> String {
        format_grouped(self.value.current())
    }
}

/// An info card hosting one metric counter.
#[derive(Debug, Clone)]
pub struct InfoCard {
    pub kind: MetricKind,
    pub hovered: bool,
    pub hint: RenderHint,
}

/// The rotating fact display.
#[derive(Debug, Clone)]
pub struct FactPanel {
    list: FactList,
    cursor: FactCursor,
    text: String,
    pub opacity: AnimatedValue,
}

impl FactPanel {
    pub fn new(list: FactList) -> Self {
        let cursor = list.cursor();
        let text = list.get(cursor.index()).to_string();
        Self {
            list,
            cursor,
            text,
            opacity: AnimatedValue::new(1.0),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    /// Move to the next fact and write it into the display.
    pub fn advance(&mut self) {
        let index = self.cursor.advance();
        self.text = self.list.get(index).to_string();
    }
}

#[derive(Debug, Clone, Default)]
pub struct Earth {
    /// Pointer-tracking tilt in degrees.
    pub rotation_deg: f64,
    pub zoomed: bool,
    pub hint: RenderHint,
    /// Ambient spin time; only advances while animated.
    pub spin_ms: u64,
}

impl Earth {
    pub fn scale(&self) -> f64 {
        if self.zoomed { EARTH_ZOOM } else { 1.0 }
    }
}

#[derive(Debug, Clone)]
pub struct Sun {
    pub scale: f64,
    pub hint: RenderHint,
    /// Corona flicker time; only advances while animated.
    pub flicker_ms: u64,
}

impl Default for Sun {
    fn default() -> Self {
        Self {
            scale: 1.0,
            hint: RenderHint::default(),
            flicker_ms: 0,
        }
    }
}

/// Every target the dashboard reads or writes, held as explicit handles.
#[derive(Debug, Clone)]
pub struct Scene {
    pub counters: Vec<Counter>,
    pub cards: Vec<InfoCard>,
    pub fact: FactPanel,
    pub earth: Earth,
    pub sun: Sun,
    /// Rows scrolled down from the top of the page.
    pub scroll: u16,
    /// Whole-scene opacity for the load fade-in.
    pub opacity: AnimatedValue,
}

impl Scene {
    /// Bind the targets named in `layout`. Every metric display target must
    /// be hosted by exactly one card.
    pub fn bind(layout: &LayoutConfig, facts: FactList) -> Result<Self, SceneError> {
        let mut cards: Vec<InfoCard> = Vec::with_capacity(layout.cards.len());
        for id in &layout.cards {
            let kind = MetricKind::from_target_id(id)
                .ok_or_else(|| SceneError::UnknownTarget(id.clone()))?;
            if cards.iter().any(|card| card.kind == kind) {
                return Err(SceneError::DuplicateTarget(id.clone()));
            }
            cards.push(InfoCard {
                kind,
                hovered: false,
                hint: RenderHint::default(),
            });
        }

        if let Some(missing) = MetricKind::ALL
            .into_iter()
            .find(|kind| !cards.iter().any(|card| card.kind == *kind))
        {
            return Err(SceneError::MissingTarget(missing.target_id()));
        }

        // Indexed by `MetricKind::index`.
        let counters = MetricKind::ALL
            .into_iter()
            .map(|kind| Counter {
                kind,
                value: AnimatedValue::new(0.0),
            })
            .collect();

        Ok(Self {
            counters,
            cards,
            fact: FactPanel::new(facts),
            earth: Earth::default(),
            sun: Sun::default(),
            scroll: 0,
            opacity: AnimatedValue::new(0.0),
        })
    }

    pub fn counter(&self, kind: MetricKind) -> &Counter {
        &self.counters[kind.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(cards: &[&str]) -> LayoutConfig {
        LayoutConfig {
            cards: cards.iter().map(|id| id.to_string()).collect(),
        }
    }

    #[test]
    fn test_bind_default_layout() {
        let scene = Scene::bind(&LayoutConfig::default(), FactList::builtin()).unwrap();
        assert_eq!(scene.cards.len(), 3);
        assert_eq!(scene.counter(MetricKind::Orbital).kind, MetricKind::Orbital);
        assert_eq!(scene.counter(MetricKind::Rotation).text(), "0");
        assert_eq!(scene.fact.text(), terra_core::FACTS[0]);
        assert_eq!(scene.opacity.current(), 0.0);
    }

    #[test]
    fn test_card_order_follows_layout() {
        let scene = Scene::bind(
            &layout(&["time-to-sun", "rotation-speed", "orbital-speed"]),
            FactList::builtin(),
        )
        .unwrap();
        assert_eq!(scene.cards[0].kind, MetricKind::TimeToSun);
        assert_eq!(scene.cards[2].kind, MetricKind::Orbital);
    }

    #[test]
    fn test_missing_target_is_reported() {
        let err = Scene::bind(
            &layout(&["rotation-speed", "orbital-speed"]),
            FactList::builtin(),
        )
        .unwrap_err();
        assert_eq!(err, SceneError::MissingTarget("time-to-sun"));
    }

    #[test]
    fn test_duplicate_and_unknown_targets() {
        let dup = Scene::bind(
            &layout(&["rotation-speed", "rotation-speed", "time-to-sun"]),
            FactList::builtin(),
        );
        assert_eq!(
            dup.unwrap_err(),
            SceneError::DuplicateTarget("rotation-speed".to_string())
        );

        let unknown = Scene::bind(&layout(&[FACT_TARGET]), FactList::builtin());
        assert_eq!(
            unknown.unwrap_err(),
            SceneError::UnknownTarget("current-fact".to_string())
        );
    }

    #[test]
    fn test_fact_panel_advances_and_wraps() {
        let list = FactList::new(vec!["a".into(), "b".into(), "c".into()]).unwrap();
        let mut panel = FactPanel::new(list);
        assert_eq!(panel.text(), "a");
        panel.advance();
        assert_eq!(panel.index(), 1);
        assert_eq!(panel.text(), "b");
        panel.advance();
        panel.advance();
        assert_eq!(panel.index(), 0);
        assert_eq!(panel.text(), "a");
    }

    #[test]
    fn test_earth_scale() {
        let mut earth = Earth::default();
        assert_eq!(earth.scale(), 1.0);
        earth.zoomed = true;
        assert!(earth.scale() > 1.0);
    }
}
