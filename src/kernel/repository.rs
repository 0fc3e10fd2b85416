//! 实体仓库：内存中的文档与文本块集合
//!
//! 新建的实体总是插到集合最前面。每个变更方法返回是否真的改动了集合，
//! 调用方据此决定是否整体持久化。

use crate::models::entity::advance_timestamp;
use crate::models::{Document, EntityId, EntityRef, TextBlock};
use chrono::{DateTime, Utc};
use rustc_hash::FxHashSet;

#[derive(Debug, Default, Clone)]
pub struct Repository {
    documents: Vec<Document>,
    blocks: Vec<TextBlock>,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从已加载的集合构建；重复 id 只保留第一个，没有所属文档的文本块被丢弃
    pub fn from_parts(documents: Vec<Document>, blocks: Vec<TextBlock>) -> Self {
        let mut seen = FxHashSet::default();
        let documents: Vec<Document> = documents
            .into_iter()
            .filter(|doc| seen.insert(doc.id.clone()))
            .collect();

        let mut seen_blocks = FxHashSet::default();
        let before = blocks.len();
        let blocks: Vec<TextBlock> = blocks
            .into_iter()
            .filter(|block| seen.contains(&block.document_id))
            .filter(|block| seen_blocks.insert(block.id.clone()))
            .collect();
        if blocks.len() != before {
            tracing::warn!(
                dropped = before - blocks.len(),
                "dropped orphaned or duplicate text blocks"
            );
        }

        Self { documents, blocks }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn blocks(&self) -> &[TextBlock] {
        &self.blocks
    }

    pub fn document(&self, id: &EntityId) -> Option<&Document> {
        self.documents.iter().find(|doc| &doc.id == id)
    }

    pub fn block(&self, id: &EntityId) -> Option<&TextBlock> {
        self.blocks.iter().find(|block| &block.id == id)
    }

    /// 某文档下的文本块，保持集合顺序
    pub fn blocks_for<'a>(
        &'a self,
        document_id: &'a EntityId,
    ) -> impl Iterator<Item = &'a TextBlock> + 'a {
        self.blocks
            .iter()
            .filter(move |block| &block.document_id == document_id)
    }

    pub fn content_of(&self, target: &EntityRef) -> Option<&str> {
        match target {
            EntityRef::Document(id) => self.document(id).map(|doc| doc.content.as_str()),
            EntityRef::Block(id) => self.block(id).map(|block| block.content.as_str()),
        }
    }

    pub fn create_document(&mut self, now: DateTime<Utc>) -> Document {
        let doc = Document::new(Document::default_title(self.documents.len()), now);
        self.documents.insert(0, doc.clone());
        doc
    }

    /// 所属文档不存在时返回 `None`
    pub fn create_block(&mut self, document_id: &EntityId, now: DateTime<Utc>) -> Option<TextBlock> {
        self.document(document_id)?;
        let siblings = self.blocks_for(document_id).count();
        let block = TextBlock::new(document_id.clone(), TextBlock::default_title(siblings), now);
        self.blocks.insert(0, block.clone());
        Some(block)
    }

    pub fn rename_document(&mut self, id: &EntityId, title: &str, now: DateTime<Utc>) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        let Some(doc) = self.documents.iter_mut().find(|doc| &doc.id == id) else {
            return false;
        };
        if doc.title == title {
            return false;
        }
        doc.title = title.to_string();
        advance_timestamp(&mut doc.updated_at, now);
        true
    }

    pub fn rename_block(&mut self, id: &EntityId, title: &str, now: DateTime<Utc>) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        let Some(block) = self.blocks.iter_mut().find(|block| &block.id == id) else {
            return false;
        };
        if block.title == title {
            return false;
        }
        block.title = title.to_string();
        advance_timestamp(&mut block.updated_at, now);
        true
    }

    /// 删除文档及其全部文本块，返回被级联删除的文本块数量
    pub fn delete_document(&mut self, id: &EntityId) -> Option<usize> {
        let idx = self.documents.iter().position(|doc| &doc.id == id)?;
        self.documents.remove(idx);

        let before = self.blocks.len();
        self.blocks.retain(|block| &block.document_id != id);
        Some(before - self.blocks.len())
    }

    pub fn delete_block(&mut self, id: &EntityId) -> bool {
        let before = self.blocks.len();
        self.blocks.retain(|block| &block.id != id);
        self.blocks.len() != before
    }

    /// 内容相同则不写入，避免 updated_at 无意义地前进
    pub fn update_content(&mut self, target: &EntityRef, content: &str, now: DateTime<Utc>) -> bool {
        let (stored, updated_at) = match target {
            EntityRef::Document(id) => {
                let Some(doc) = self.documents.iter_mut().find(|doc| &doc.id == id) else {
                    return false;
                };
                (&mut doc.content, &mut doc.updated_at)
            }
            EntityRef::Block(id) => {
                let Some(block) = self.blocks.iter_mut().find(|block| &block.id == id) else {
                    return false;
                };
                (&mut block.content, &mut block.updated_at)
            }
        };

        if stored.as_str() == content {
            return false;
        }
        stored.clear();
        stored.push_str(content);
        advance_timestamp(updated_at, now);
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/repository.rs"]
mod tests;
