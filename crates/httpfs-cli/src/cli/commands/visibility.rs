//! `httpfs <base> visibility <path>`.

use anyhow::Result;
use httpfs_core::{FilesystemAdapter, HttpAdapter};

pub fn run_visibility(adapter: &HttpAdapter, path: &str) -> Result<()> {
    let meta = adapter.visibility(path)?;
    println!("{}", meta.visibility);
    Ok(())
}
