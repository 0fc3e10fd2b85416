//! 宿主层：把内核效果落到存储、编辑面和界面状态上

pub mod resize;
pub mod workbench;

pub use resize::SidebarResize;
pub use workbench::{DragSession, Workbench};
