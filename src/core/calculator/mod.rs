pub mod gaps;
pub mod summary;
pub mod timeline;
