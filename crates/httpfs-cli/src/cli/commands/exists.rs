//! `httpfs <base> exists <path>` and `dir-exists <path>`.

use httpfs_core::{FilesystemAdapter, HttpAdapter};

pub fn run_exists(adapter: &HttpAdapter, path: &str) {
    println!("{}", adapter.file_exists(path));
}

pub fn run_dir_exists(adapter: &HttpAdapter, path: &str) {
    println!("{}", adapter.directory_exists(path));
}
