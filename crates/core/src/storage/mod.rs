#[cfg(not(target_arch = "wasm32"))]
pub mod file;
pub mod format;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;
pub mod manager;
pub mod memory;
pub mod traits;
