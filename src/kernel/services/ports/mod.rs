//! Service ports: traits + data contracts.

pub mod settings;
pub mod storage;
pub mod surface;

pub use settings::{DragSettings, LayoutSettings, Settings};
pub use storage::{
    read_json, write_json, KeyValueStore, Result as StorageResult, StorageError,
    ACTIVE_DOCUMENT_KEY, BLOCKS_KEY, DOCUMENTS_KEY, SIDEBAR_WIDTH_KEY,
};
pub use surface::{EditingSurface, SurfaceEdit, SurfaceError, SurfacePoint, TextRange};
