mod source_filesystem;

pub use source_filesystem::SourceFilesystem;
