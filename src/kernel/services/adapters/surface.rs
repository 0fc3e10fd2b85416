//! 纯文本编辑面
//!
//! `EditingSurface` 的参考实现：内容存放在 Rope 中，位置是字符偏移，
//! 坐标按 (列, 行) 解释。列不会被截断到行宽，越界由调用方校验。

use crate::kernel::services::ports::surface::{
    EditingSurface, SurfaceEdit, SurfaceError, SurfacePoint, TextRange,
};
use ropey::Rope;

#[derive(Debug, Clone, Default)]
pub struct RopeSurface {
    rope: Rope,
    cursor: usize,
    selection: Option<TextRange>,
    focus_requests: u64,
}

impl RopeSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            ..Self::default()
        }
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn focus_requests(&self) -> u64 {
        self.focus_requests
    }

    /// 设置选区；越界部分会被截断到文档末尾
    pub fn select(&mut self, from: usize, to: usize) {
        let len = self.rope.len_chars();
        let range = TextRange::new(from.min(len), to.min(len));
        self.cursor = range.to;
        self.selection = (!range.is_empty()).then_some(range);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    fn check_bounds(&self, pos: usize) -> Result<(), SurfaceError> {
        let size = self.rope.len_chars();
        if pos > size {
            return Err(SurfaceError::OutOfBounds { pos, size });
        }
        Ok(())
    }
}

impl EditingSurface for RopeSurface {
    fn content(&self) -> String {
        self.rope.to_string()
    }

    fn set_content(&mut self, content: &str) {
        self.rope = Rope::from_str(content);
        self.cursor = 0;
        self.selection = None;
    }

    fn request_focus(&mut self) {
        self.focus_requests += 1;
    }

    fn doc_size(&self) -> usize {
        self.rope.len_chars()
    }

    fn pos_at_point(&self, point: SurfacePoint) -> Option<i64> {
        let row = usize::try_from(point.y).ok()?;
        if row >= self.rope.len_lines() {
            return None;
        }
        let line_start = self.rope.line_to_char(row) as i64;
        Some(line_start + i64::from(point.x))
    }

    fn selection(&self) -> Option<TextRange> {
        self.selection.filter(|range| !range.is_empty())
    }

    fn apply_edit(&mut self, edit: &SurfaceEdit, cursor_after: usize) -> Result<(), SurfaceError> {
        let (range, text) = match edit {
            SurfaceEdit::Replace { range, text } => (*range, text.as_str()),
            SurfaceEdit::Insert { at, text } => (TextRange::new(*at, *at), text.as_str()),
        };

        self.check_bounds(range.to)?;
        let new_size = self.rope.len_chars() - range.len() + text.chars().count();
        if cursor_after > new_size {
            return Err(SurfaceError::OutOfBounds {
                pos: cursor_after,
                size: new_size,
            });
        }

        if !range.is_empty() {
            self.rope.remove(range.from..range.to);
        }
        self.rope.insert(range.from, text);
        self.cursor = cursor_after;
        self.selection = None;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/surface.rs"]
mod tests;
