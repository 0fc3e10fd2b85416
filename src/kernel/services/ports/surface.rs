//! 编辑面（富文本引擎）契约
//!
//! 内核只依赖这几个能力：读取/整体替换序列化内容、请求焦点、
//! 坐标 → 文档位置、当前选区、原子地替换或插入纯文本。

use std::fmt;

/// 文档内的半开区间 `[from, to)`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextRange {
    pub from: usize,
    pub to: usize,
}

impl TextRange {
    pub fn new(from: usize, to: usize) -> Self {
        if from <= to {
            Self { from, to }
        } else {
            Self { from: to, to: from }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }

    pub fn len(&self) -> usize {
        self.to - self.from
    }

    /// 两端都不包含
    pub fn contains_strictly(&self, pos: usize) -> bool {
        pos > self.from && pos < self.to
    }
}

/// 指针坐标（由宿主给出，含义由编辑面解释）
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfacePoint {
    pub x: i32,
    pub y: i32,
}

impl SurfacePoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEdit {
    Replace { range: TextRange, text: String },
    Insert { at: usize, text: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    OutOfBounds { pos: usize, size: usize },
    Rejected(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::OutOfBounds { pos, size } => {
                write!(f, "position {} out of bounds (size {})", pos, size)
            }
            SurfaceError::Rejected(msg) => write!(f, "edit rejected: {}", msg),
        }
    }
}

impl std::error::Error for SurfaceError {}

pub trait EditingSurface {
    /// 当前序列化内容
    fn content(&self) -> String;
    /// 整体替换内容（不视为用户编辑）
    fn set_content(&mut self, content: &str);
    fn request_focus(&mut self);
    fn doc_size(&self) -> usize;
    /// 坐标下的文档位置；无法解析时为 `None`，可能为负或越界，由调用方校验
    fn pos_at_point(&self, point: SurfacePoint) -> Option<i64>;
    fn selection(&self) -> Option<TextRange>;
    /// 要么整体生效并把光标放到 `cursor_after`，要么返回错误且不改变任何状态
    fn apply_edit(&mut self, edit: &SurfaceEdit, cursor_after: usize)
        -> Result<(), SurfaceError>;
}
