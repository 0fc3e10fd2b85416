//! 侧栏宽度拖拽
//!
//! 侧栏在右侧，向左拖动变宽：`width = start_width + (start_x - x)`，再夹到布局允许的范围。

use crate::kernel::services::ports::LayoutSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarResize {
    start_x: i32,
    start_width: u16,
}

impl SidebarResize {
    pub fn begin(start_x: i32, start_width: u16) -> Self {
        Self {
            start_x,
            start_width,
        }
    }

    pub fn width_at(&self, x: i32, layout: &LayoutSettings) -> u16 {
        let delta = i64::from(self.start_x) - i64::from(x);
        layout.clamp_width(i64::from(self.start_width) + delta)
    }
}
