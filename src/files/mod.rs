pub mod naming;
pub mod store;

pub use store::{list_files, resolve_stored_file, save_upload, UploadReceipt};
