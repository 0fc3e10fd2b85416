use crate::kernel::state::DialogInput;
use crate::models::EntityId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateDocument,
    SelectDocument {
        id: EntityId,
        /// 来自"编辑文档"按钮：已是活动文档时只需要聚焦
        focus: bool,
    },
    RenameDocument {
        id: EntityId,
        title: String,
    },
    RequestDeleteDocument {
        id: EntityId,
    },
    CreateBlock,
    EditBlock {
        id: EntityId,
    },
    RenameBlock {
        id: EntityId,
        title: String,
    },
    RequestDeleteBlock {
        id: EntityId,
    },
    /// 编辑面内容变化通知（序列化后的完整内容）
    ContentChanged(String),
    ConfirmationResolved {
        request_id: u64,
        confirmed: bool,
    },
    Dialog(DialogInput),
    SetSidebarWidth {
        width: i64,
    },
}
