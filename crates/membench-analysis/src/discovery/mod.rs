//! Result file discovery.

pub mod directory;

pub use directory::DirectoryResultSource;
