//! blockdoc - 文档/文本块编辑内核
//!
//! 模块结构：
//! - models: 数据模型（Document, TextBlock, 标记 → 纯文本）
//! - kernel: 无界面的编辑核心（仓库、编辑协调器、拖拽协议、Store/Action/Effect、服务端口与适配器）
//! - app: 宿主层（Workbench：执行效果、持久化、拖拽生命周期、侧栏宽度）

pub mod app;
pub mod kernel;
pub mod models;
