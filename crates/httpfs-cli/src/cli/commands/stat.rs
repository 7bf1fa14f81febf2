//! `httpfs <base> stat <path>` – show metadata for one file.

use anyhow::Result;
use httpfs_core::{FileMetadata, FilesystemAdapter, HttpAdapter};

pub fn run_stat(adapter: &HttpAdapter, path: &str, json: bool) -> Result<()> {
    let meta = adapter.metadata(path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&meta)?);
    } else {
        print!("{}", render(&meta));
    }
    Ok(())
}

fn render(meta: &FileMetadata) -> String {
    let or_dash = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());
    format!(
        "{:<14} {}\n{:<14} {}\n{:<14} {}\n{:<14} {}\n{:<14} {}\n",
        "path",
        meta.path,
        "size",
        or_dash(meta.size.map(|s| s.to_string())),
        "last-modified",
        or_dash(meta.last_modified.map(|t| t.to_string())),
        "mime-type",
        or_dash(meta.mime_type.clone()),
        "visibility",
        meta.visibility,
    )
}
