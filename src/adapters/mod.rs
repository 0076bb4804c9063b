pub mod assets;
pub mod config_file;
pub mod local_source_filesystem;
pub mod menu_file;
