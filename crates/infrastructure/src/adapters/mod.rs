//! Adapters implementing application ports over external systems

mod archive_adapter;

pub use archive_adapter::ArchiveAdapter;
