//! 数据模型层

pub mod entity;
pub mod markup;

pub use entity::{
    Document, EntityId, EntityKind, EntityRef, TextBlock, DEFAULT_BLOCK_CONTENT,
    DEFAULT_DOCUMENT_CONTENT, PLACEHOLDER_CONTENT,
};
pub use markup::{excerpt, plain_text};
