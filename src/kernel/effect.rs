use crate::kernel::state::ConfirmationRequest;

/// 由宿主执行的副作用；持久化效果不携带数据，宿主整体序列化对应集合
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PersistDocuments,
    PersistBlocks,
    PersistActiveDocument,
    PersistSidebarWidth,
    LoadSurface { content: String },
    FocusSurface,
    RequestConfirmation(ConfirmationRequest),
    DismissConfirmation { request_id: u64 },
}
