//! 启动加载与整体写回
//!
//! 读失败（缺失、损坏）一律回退到空集合或默认值；写失败只记日志，不重试。

use super::Workbench;
use crate::kernel::coordinator::{derive_auto_selection, EditingSelection};
use crate::kernel::services::ports::{
    read_json, write_json, EditingSurface, KeyValueStore, LayoutSettings, ACTIVE_DOCUMENT_KEY,
    BLOCKS_KEY, DOCUMENTS_KEY, SIDEBAR_WIDTH_KEY,
};
use crate::kernel::state::UiState;
use crate::kernel::{AppState, Repository};
use crate::models::EntityId;
use serde::de::DeserializeOwned;

pub(super) struct LoadedState {
    pub state: AppState,
    /// 恢复出的活动文档与存储中的不一致，需要写回
    pub active_changed: bool,
}

pub(super) fn load_state(storage: &dyn KeyValueStore, layout: &LayoutSettings) -> LoadedState {
    let repo = Repository::from_parts(
        load_collection(storage, DOCUMENTS_KEY),
        load_collection(storage, BLOCKS_KEY),
    );

    let stored_active = load_active_document(storage);
    let restored = EditingSelection::restore(&repo, stored_active.as_ref());
    let selection = derive_auto_selection(&restored, &repo).unwrap_or(restored);
    let active_changed = selection.active_document() != stored_active.as_ref();

    let mut ui = UiState::new(layout.clone());
    ui.sidebar_width = load_sidebar_width(storage, layout);

    LoadedState {
        state: AppState::new(repo, selection, ui),
        active_changed,
    }
}

fn load_collection<T: DeserializeOwned>(storage: &dyn KeyValueStore, key: &str) -> Vec<T> {
    match read_json::<Vec<T>>(storage, key) {
        Ok(items) => items.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "failed to load collection, starting empty");
            Vec::new()
        }
    }
}

fn load_active_document(storage: &dyn KeyValueStore) -> Option<EntityId> {
    match storage.get(ACTIVE_DOCUMENT_KEY) {
        Ok(value) => value
            .filter(|id| !id.is_empty())
            .map(|id| EntityId::new(id.as_str())),
        Err(e) => {
            tracing::warn!(key = %ACTIVE_DOCUMENT_KEY, error = %e, "failed to load active document");
            None
        }
    }
}

fn load_sidebar_width(storage: &dyn KeyValueStore, layout: &LayoutSettings) -> u16 {
    let raw = match storage.get(SIDEBAR_WIDTH_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return layout.clamp_width(i64::from(layout.sidebar_width)),
        Err(e) => {
            tracing::warn!(key = %SIDEBAR_WIDTH_KEY, error = %e, "failed to load sidebar width");
            return layout.clamp_width(i64::from(layout.sidebar_width));
        }
    };

    match raw.trim().parse::<i64>() {
        Ok(width) => layout.clamp_width(width),
        Err(_) => {
            tracing::warn!(key = %SIDEBAR_WIDTH_KEY, value = %raw, "invalid sidebar width");
            layout.clamp_width(i64::from(layout.sidebar_width))
        }
    }
}

impl<S: EditingSurface> Workbench<S> {
    pub(super) fn persist_documents(&mut self) {
        let documents = self.store.state().repo.documents();
        if let Err(e) = write_json(self.storage.as_mut(), DOCUMENTS_KEY, documents) {
            tracing::warn!(key = %DOCUMENTS_KEY, error = %e, "persist failed");
        }
    }

    pub(super) fn persist_blocks(&mut self) {
        let blocks = self.store.state().repo.blocks();
        if let Err(e) = write_json(self.storage.as_mut(), BLOCKS_KEY, blocks) {
            tracing::warn!(key = %BLOCKS_KEY, error = %e, "persist failed");
        }
    }

    pub(super) fn persist_active_document(&mut self) {
        let result = match self.store.state().selection.active_document() {
            Some(id) => self.storage.set(ACTIVE_DOCUMENT_KEY, id.as_str()),
            None => self.storage.remove(ACTIVE_DOCUMENT_KEY),
        };
        if let Err(e) = result {
            tracing::warn!(key = %ACTIVE_DOCUMENT_KEY, error = %e, "persist failed");
        }
    }

    pub(super) fn persist_sidebar_width(&mut self) {
        let width = self.store.state().ui.sidebar_width.to_string();
        if let Err(e) = self.storage.set(SIDEBAR_WIDTH_KEY, &width) {
            tracing::warn!(key = %SIDEBAR_WIDTH_KEY, error = %e, "persist failed");
        }
    }
}
