mod mock_source_filesystem;

pub use mock_source_filesystem::MockSourceFilesystem;
