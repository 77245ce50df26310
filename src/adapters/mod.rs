pub mod filesystem;

pub use filesystem::FilesystemStorage;
