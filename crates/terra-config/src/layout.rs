use serde::{Deserialize, Serialize};
use terra_core::MetricKind;

/// Which info cards appear, left to right.
///
/// Each entry names the display target the card hosts. Ids are checked when
/// the scene is bound, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub cards: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cards: MetricKind::ALL
                .iter()
                .map(|kind| kind.target_id().to_string())
                .collect(),
        }
    }
}
