//! Service adapters: OS specific implementations.

pub mod paths;
pub mod settings;
pub mod storage;
pub mod surface;

pub use paths::{ensure_log_dir, ensure_store_dir, get_log_dir, get_store_dir};
pub use settings::{ensure_settings_file, get_settings_path, load_settings, load_settings_from};
pub use storage::{FileStore, MemoryStore};
pub use surface::RopeSurface;
