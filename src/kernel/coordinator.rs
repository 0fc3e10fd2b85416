//! 活动编辑协调器
//!
//! 决定哪个实体（文档或文本块）占有编辑面，并在切换前把暂存的编辑提交回正确的实体。
//!
//! 状态：
//! - NoSelection: 没有活动文档
//! - EditingDocument: 有活动文档，没有正在编辑的文本块
//! - EditingBlock: 有活动文档，且正在编辑其下的一个文本块
//!
//! 每个转换函数按值接收当前 `EditingSelection`，只读访问仓库，返回 `Transition`；
//! 需要写回仓库的内容放在 `Transition::commit` 里，由调用方应用。
//!
//! 文档的编辑先暂存后提交；文本块的编辑总是立即写回，切换时从不为文本块提交。

use super::repository::Repository;
use crate::models::{Document, EntityId, EntityRef, PLACEHOLDER_CONTENT};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditingSelection {
    active_document: Option<EntityId>,
    editing_block: Option<EntityId>,
    current_content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditingMode<'a> {
    NoSelection,
    Document {
        document: &'a EntityId,
    },
    Block {
        document: &'a EntityId,
        block: &'a EntityId,
    },
}

impl EditingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    fn editing_document(doc: &Document) -> Self {
        Self {
            active_document: Some(doc.id.clone()),
            editing_block: None,
            current_content: doc.content.clone(),
        }
    }

    /// 启动时恢复上次的活动文档；文档已不存在时回到 NoSelection
    pub fn restore(repo: &Repository, last_active: Option<&EntityId>) -> Self {
        last_active
            .and_then(|id| repo.document(id))
            .map(Self::editing_document)
            .unwrap_or_default()
    }

    pub fn active_document(&self) -> Option<&EntityId> {
        self.active_document.as_ref()
    }

    pub fn editing_block(&self) -> Option<&EntityId> {
        self.editing_block.as_ref()
    }

    pub fn current_content(&self) -> &str {
        &self.current_content
    }

    pub fn mode(&self) -> EditingMode<'_> {
        match (&self.active_document, &self.editing_block) {
            (None, _) => EditingMode::NoSelection,
            (Some(document), None) => EditingMode::Document { document },
            (Some(document), Some(block)) => EditingMode::Block { document, block },
        }
    }

    /// 编辑面当前写回的目标：文本块优先，其次文档
    pub fn editing_target(&self) -> Option<EntityRef> {
        match self.mode() {
            EditingMode::NoSelection => None,
            EditingMode::Document { document } => Some(EntityRef::Document(document.clone())),
            EditingMode::Block { block, .. } => Some(EntityRef::Block(block.clone())),
        }
    }

    /// 编辑面应当显示的内容
    pub fn surface_content<'a>(&self, repo: &'a Repository) -> &'a str {
        self.editing_block
            .as_ref()
            .and_then(|id| repo.block(id))
            .map(|block| block.content.as_str())
            .or_else(|| {
                self.active_document
                    .as_ref()
                    .and_then(|id| repo.document(id))
                    .map(|doc| doc.content.as_str())
            })
            .unwrap_or(PLACEHOLDER_CONTENT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub target: EntityRef,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub selection: EditingSelection,
    pub commit: Option<Commit>,
    pub reload_surface: bool,
    pub focus: bool,
}

impl Transition {
    fn unchanged(selection: EditingSelection) -> Self {
        Self {
            selection,
            commit: None,
            reload_surface: false,
            focus: false,
        }
    }

    fn switch_to(selection: EditingSelection, commit: Option<Commit>) -> Self {
        Self {
            selection,
            commit,
            reload_surface: true,
            focus: false,
        }
    }
}

/// 正在编辑文档且暂存内容与仓库不同 → 需要先提交
fn pending_document_commit(sel: &EditingSelection, repo: &Repository) -> Option<Commit> {
    let EditingMode::Document { document } = sel.mode() else {
        return None;
    };
    let stored = repo.document(document)?;
    (stored.content != sel.current_content).then(|| Commit {
        target: EntityRef::Document(document.clone()),
        content: sel.current_content.clone(),
    })
}

pub fn select_document(
    sel: EditingSelection,
    repo: &Repository,
    target: &EntityId,
    request_focus: bool,
) -> Transition {
    let Some(doc) = repo.document(target) else {
        return Transition::unchanged(sel);
    };

    if request_focus && sel.active_document.as_ref() == Some(target) {
        if sel.editing_block.is_some() {
            return Transition {
                selection: EditingSelection::editing_document(doc),
                commit: None,
                reload_surface: true,
                focus: true,
            };
        }
        let mut transition = Transition::unchanged(sel);
        transition.focus = true;
        return transition;
    }

    let commit = pending_document_commit(&sel, repo);
    let mut selection = EditingSelection::editing_document(doc);
    if let Some(commit) = &commit {
        if commit.target.id() == target {
            selection.current_content = commit.content.clone();
        }
    }
    Transition::switch_to(selection, commit)
}

pub fn select_block(sel: EditingSelection, repo: &Repository, block_id: &EntityId) -> Transition {
    let Some(block) = repo.block(block_id) else {
        return Transition::unchanged(sel);
    };

    let commit = pending_document_commit(&sel, repo);
    let selection = EditingSelection {
        active_document: Some(block.document_id.clone()),
        editing_block: Some(block.id.clone()),
        current_content: block.content.clone(),
    };
    Transition::switch_to(selection, commit)
}

/// 新建文档后切换到它（`repo` 已包含新文档）
pub fn document_created(sel: EditingSelection, repo: &Repository, doc: &Document) -> Transition {
    let commit = pending_document_commit(&sel, repo);
    Transition::switch_to(EditingSelection::editing_document(doc), commit)
}

/// 新建文本块后立即编辑它（`repo` 已包含新文本块）
pub fn block_created(sel: EditingSelection, repo: &Repository, block_id: &EntityId) -> Transition {
    select_block(sel, repo, block_id)
}

/// 编辑面内容变化；与暂存内容相同的通知直接忽略
pub fn content_changed(mut sel: EditingSelection, content: &str) -> Transition {
    if sel.current_content == content {
        return Transition::unchanged(sel);
    }

    sel.current_content = content.to_string();
    let commit = sel.editing_target().map(|target| Commit {
        target,
        content: content.to_string(),
    });
    Transition {
        selection: sel,
        commit,
        reload_surface: false,
        focus: false,
    }
}

/// 实体删除后修正选择状态（`repo` 为删除之后的仓库）
pub fn entity_deleted(sel: EditingSelection, repo: &Repository, deleted: &EntityRef) -> Transition {
    match deleted {
        EntityRef::Document(id) if sel.active_document.as_ref() == Some(id) => {
            let selection = repo
                .documents()
                .first()
                .map(EditingSelection::editing_document)
                .unwrap_or_default();
            Transition::switch_to(selection, None)
        }
        EntityRef::Block(id) if sel.editing_block.as_ref() == Some(id) => {
            let current_content = sel
                .active_document
                .as_ref()
                .and_then(|doc| repo.document(doc))
                .map(|doc| doc.content.clone())
                .unwrap_or_default();
            let selection = EditingSelection {
                active_document: sel.active_document,
                editing_block: None,
                current_content,
            };
            Transition::switch_to(selection, None)
        }
        _ => Transition::unchanged(sel),
    }
}

/// 选择状态的常驻规则，每次变更后重新求值：
/// - 悬空的文档/文本块引用视为不存在
/// - 没有活动文档、没有文本块且集合非空 → 第一个文档成为活动文档
///
/// 返回 `None` 表示当前状态已满足规则。
pub fn derive_auto_selection(sel: &EditingSelection, repo: &Repository) -> Option<EditingSelection> {
    let document = sel.active_document.as_ref().and_then(|id| repo.document(id));
    let block_dangling = sel
        .editing_block
        .as_ref()
        .is_some_and(|id| repo.block(id).is_none());

    match (&sel.active_document, document) {
        (Some(_), Some(doc)) if block_dangling => Some(EditingSelection::editing_document(doc)),
        (Some(_), Some(_)) => None,
        (Some(_), None) => Some(
            repo.documents()
                .first()
                .map(EditingSelection::editing_document)
                .unwrap_or_default(),
        ),
        (None, _) if sel.editing_block.is_some() => None,
        (None, _) => repo.documents().first().map(EditingSelection::editing_document),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/coordinator.rs"]
mod tests;
