pub mod allocate_file;
pub mod local_file_error;
pub mod verify_file;

pub use allocate_file::allocate_file;
pub use local_file_error::LocalFileError;
pub use verify_file::verify_file_size;
