//! Embeds build metadata (git revision, build time, package info) into
//! `$OUT_DIR/built.rs`.

use std::path::{Path, PathBuf};

fn main() {
    built::write_built_file().expect("failed to acquire build-time information");

    // Any rerun-if-changed directive replaces cargo's package-wide default,
    // so the sources are listed alongside the git refs.
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-changed=src");

    let manifest_dir =
        PathBuf::from(std::env::var_os("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));
    if let Some(git_dir) = find_git_dir(&manifest_dir) {
        for path in git_ref_paths(&git_dir) {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}

/// Walks up from `start` to the first `.git` directory.
fn find_git_dir(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(".git"))
        .find(|candidate| candidate.is_dir())
}

/// Files whose change means HEAD resolves to a different commit.
///
/// Only existing paths are returned: cargo treats a missing path as
/// permanently dirty.
fn git_ref_paths(git_dir: &Path) -> Vec<PathBuf> {
    let head = git_dir.join("HEAD");
    let mut paths = vec![head.clone()];

    if let Ok(contents) = std::fs::read_to_string(&head)
        && let Some(reference) = contents.trim().strip_prefix("ref: ")
    {
        paths.push(git_dir.join(reference));
    }
    paths.push(git_dir.join("packed-refs"));
    // first commit on a branch creates its ref file
    paths.push(git_dir.join("refs").join("heads"));

    paths.retain(|path| path.exists());
    paths
}
