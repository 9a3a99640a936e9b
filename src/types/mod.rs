mod metadata;
mod size;
mod file;

pub use file::FileCategory;
pub use metadata::{FileRecord, FileUpdate};
pub use size::{kilobytes_lenient, FileSize, SizeUnit};
