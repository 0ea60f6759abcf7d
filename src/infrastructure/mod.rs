pub mod mock;
pub mod seed_file;
