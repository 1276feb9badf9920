//! Build-script helper that embeds a directory as a resource manifest.
//!
//! Call [`emit_manifest`] from a library's `build.rs`; it writes
//! `$OUT_DIR/<name>.rs` with a `pub static <NAME>: &[(&str, &[u8])]` holding
//! every file under the directory, keyed by its `/`-separated relative path.
//! The library then pulls it in with
//! `include!(concat!(env!("OUT_DIR"), "/<name>.rs"))`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A file picked up for embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestFile {
    /// Path relative to the embedded directory, always `/`-separated.
    pub relative: String,
    /// Absolute path handed to `include_bytes!`.
    pub absolute: PathBuf,
}

/// Walk `dir` and return its files sorted by relative path.
///
/// Hidden files and directories (leading `.`) are skipped. A missing
/// directory yields an empty list so a library can ship without assets.
pub fn collect_files(dir: &Path) -> io::Result<Vec<ManifestFile>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let root = fs::canonicalize(dir)?;

    let mut files = Vec::new();
    let walker = WalkDir::new(&root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()));

    for entry in walker {
        let entry = entry.map_err(io::Error::other)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let absolute = entry.path().to_path_buf();
        let relative = absolute
            .strip_prefix(&root)
            .map_err(io::Error::other)?
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        files.push(ManifestFile { relative, absolute });
    }

    files.sort_by(|a, b| a.relative.cmp(&b.relative));
    Ok(files)
}

/// Render the Rust source for a manifest static.
pub fn render_manifest(static_name: &str, files: &[ManifestFile]) -> String {
    let mut out = String::new();
    out.push_str("// @generated by navkit-build\n");
    out.push_str(&format!(
        "pub static {}: &[(&str, &[u8])] = &[\n",
        static_name
    ));
    for file in files {
        out.push_str(&format!(
            "    ({:?}, include_bytes!({:?}) as &[u8]),\n",
            file.relative,
            file.absolute.to_string_lossy()
        ));
    }
    out.push_str("];\n");
    out
}

/// Embed `dir` as `static_name`, writing `$OUT_DIR/<static_name lowercased>.rs`.
///
/// Emits `cargo:rerun-if-changed` for the directory and every file in it.
/// Returns the path of the generated file.
pub fn emit_manifest(dir: impl AsRef<Path>, static_name: &str) -> io::Result<PathBuf> {
    let out_dir = std::env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::other("OUT_DIR is not set; call emit_manifest from build.rs"))?;
    let dir = dir.as_ref();

    println!("cargo:rerun-if-changed={}", dir.display());
    let files = collect_files(dir)?;
    for file in &files {
        println!("cargo:rerun-if-changed={}", file.absolute.display());
    }

    let target = out_dir.join(format!("{}.rs", static_name.to_lowercase()));
    fs::write(&target, render_manifest(static_name, &files))?;
    Ok(target)
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}
