pub mod paths;
pub mod relative_time;

pub use paths::{resource_to_path, validate_file_size};
pub use relative_time::{parse_relative, parse_relative_offset};
