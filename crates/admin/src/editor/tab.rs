//! Editor tabs.

use serde::{Deserialize, Serialize};

/// The editor's tabs. Exactly one is active; switching has no side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorTab {
    #[default]
    Images,
    Video,
    Details,
    Price,
    Hero,
    Benefits,
    Theme,
    Contact,
    Settings,
}
