//! 实体模型：文档（Document）与文本块（TextBlock）
//!
//! - id 由毫秒时间戳 + 随机后缀组成，不依赖中心计数器
//! - 时间戳以 RFC 3339 字符串持久化
//! - updated_at 对同一实体严格递增

use chrono::{DateTime, Duration, Utc};
use compact_str::{format_compact, CompactString};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

const ID_SUFFIX_LEN: usize = 9;
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub const DEFAULT_DOCUMENT_CONTENT: &str = "<p>Новый документ</p>";
pub const DEFAULT_BLOCK_CONTENT: &str = "<p>Новый текстовый блок</p>";
/// 既没有文档也没有文本块时编辑面显示的内容
pub const PLACEHOLDER_CONTENT: &str = "<p>Выберите документ или создайте новый</p>";

#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(CompactString);

impl EntityId {
    pub fn new(raw: impl Into<CompactString>) -> Self {
        Self(raw.into())
    }

    pub fn generate(now: DateTime<Utc>) -> Self {
        let mut rng = rand::thread_rng();
        let mut id = format_compact!("{}", now.timestamp_millis());
        for _ in 0..ID_SUFFIX_LEN {
            let idx = rng.gen_range(0..ID_ALPHABET.len());
            id.push(ID_ALPHABET[idx] as char);
        }
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Document,
    Block,
}

/// 指向某个可编辑实体
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityRef {
    Document(EntityId),
    Block(EntityId),
}

impl EntityRef {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::Document(_) => EntityKind::Document,
            EntityRef::Block(_) => EntityKind::Block,
        }
    }

    pub fn id(&self) -> &EntityId {
        match self {
            EntityRef::Document(id) | EntityRef::Block(id) => id,
        }
    }
}

/// 把 `updated_at` 推进到 `now`；时钟没有前进时至少推进 1 微秒
pub(crate) fn advance_timestamp(updated_at: &mut DateTime<Utc>, now: DateTime<Utc>) {
    *updated_at = if now > *updated_at {
        now
    } else {
        *updated_at + Duration::microseconds(1)
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    pub fn new(title: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: EntityId::generate(now),
            title: title.into(),
            content: DEFAULT_DOCUMENT_CONTENT.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn default_title(existing: usize) -> String {
        format!("Документ {}", existing + 1)
    }

    pub fn entity_ref(&self) -> EntityRef {
        EntityRef::Document(self.id.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredTextBlock")]
pub struct TextBlock {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub document_id: EntityId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TextBlock {
    pub fn new(document_id: EntityId, title: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: EntityId::generate(now),
            title: title.into(),
            content: DEFAULT_BLOCK_CONTENT.to_string(),
            document_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// `siblings` 为同一文档下已有的文本块数量
    pub fn default_title(siblings: usize) -> String {
        format!("Блок {}", siblings + 1)
    }

    pub fn entity_ref(&self) -> EntityRef {
        EntityRef::Block(self.id.clone())
    }
}

/// 旧数据里的文本块可能没有 updatedAt，读取时回退到 createdAt
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTextBlock {
    id: EntityId,
    title: String,
    content: String,
    document_id: EntityId,
    created_at: DateTime<Utc>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl From<StoredTextBlock> for TextBlock {
    fn from(stored: StoredTextBlock) -> Self {
        Self {
            updated_at: stored.updated_at.unwrap_or(stored.created_at),
            id: stored.id,
            title: stored.title,
            content: stored.content,
            document_id: stored.document_id,
            created_at: stored.created_at,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/entity.rs"]
mod tests;
