use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub layout: LayoutSettings,
    #[serde(default)]
    pub drag: DragSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub sidebar_width: u16,
    pub sidebar_min_width: u16,
    pub sidebar_max_width: u16,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            sidebar_width: 320,
            sidebar_min_width: 250,
            sidebar_max_width: 500,
        }
    }
}

impl LayoutSettings {
    pub fn clamp_width(&self, width: i64) -> u16 {
        let min = self.sidebar_min_width.min(self.sidebar_max_width);
        let max = self.sidebar_max_width.max(min);
        width.clamp(i64::from(min), i64::from(max)) as u16
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragSettings {
    pub preview_max_chars: usize,
    pub feedback_dismiss_ms: u64,
}

impl Default for DragSettings {
    fn default() -> Self {
        Self {
            preview_max_chars: 120,
            feedback_dismiss_ms: 2000,
        }
    }
}
