//! Folder forest materialization.
//!
//! Directories are first created under their raw identifiers so entity
//! payloads can be placed before any display name is applied, then renamed
//! parents-first to their sanitized display names.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{
    AppError, Category, Created, DirTable, FolderIdx, Renamed, sanitize_file_name,
};
use crate::ports::Filesystem;

/// Create `root` and one identifier-named directory per folder, in pre-order.
pub fn create_dirs<F: Filesystem>(
    filesystem: &F,
    category: &Category,
    root: &Path,
) -> Result<DirTable<Created>, AppError> {
    filesystem.create_dir(root)?;

    let mut table = DirTable::new();
    let mut realized: Vec<Option<PathBuf>> = vec![None; category.folders().len()];
    for idx in category.preorder() {
        let folder = category.folder(idx);
        let path = parent_dir(&realized, folder.parent, root).join(&folder.id);
        if !table.insert(&folder.id, path.clone()) {
            return Err(AppError::DuplicateFolder {
                category: category.name().to_string(),
                id: folder.id.clone(),
            });
        }
        filesystem.create_dir(&path)?;
        realized[idx.index()] = Some(path);
    }
    Ok(table)
}

/// Rename every created directory to its sanitized display name.
///
/// Each new path is the parent's new path joined with the sanitized name, so
/// paths are built segment by segment and never patched by substring.
/// Siblings are renamed as a group: every moving directory is first parked
/// under a free temporary name, so a display name equal to a sibling's raw
/// identifier only collides if two siblings share the final name.
pub fn rename_dirs<F: Filesystem>(
    filesystem: &F,
    category: &Category,
    created: DirTable<Created>,
    root: &Path,
) -> Result<DirTable<Renamed>, AppError> {
    let mut table = DirTable::new();
    let mut groups = vec![(root.to_path_buf(), category.roots().to_vec())];
    while let Some((base, group)) = groups.pop() {
        let targets = rename_siblings(filesystem, category, &created, &base, &group)?;
        for (idx, target) in group.iter().zip(targets) {
            let folder = category.folder(*idx);
            table.insert(&folder.id, target.clone());
            if !folder.children.is_empty() {
                groups.push((target, folder.children.clone()));
            }
        }
    }
    Ok(table)
}

fn rename_siblings<F: Filesystem>(
    filesystem: &F,
    category: &Category,
    created: &DirTable<Created>,
    base: &Path,
    group: &[FolderIdx],
) -> Result<Vec<PathBuf>, AppError> {
    let mut moves = Vec::with_capacity(group.len());
    for idx in group {
        let folder = category.folder(*idx);
        let created_name = created
            .get(&folder.id)
            .and_then(Path::file_name)
            .ok_or_else(|| AppError::CorruptedProject {
                category: category.name().to_string(),
                id: folder.id.clone(),
            })?;
        moves.push((base.join(created_name), base.join(display_segment(&folder.name, &folder.id))));
    }

    let targets: HashSet<&Path> = moves.iter().map(|(_, target)| target.as_path()).collect();
    let mut parked = Vec::new();
    let mut counter = 0;
    for (current, target) in &moves {
        if current == target {
            continue;
        }
        let temp = loop {
            counter += 1;
            let candidate = base.join(format!(".jbextract-rename-{counter}"));
            if !targets.contains(candidate.as_path()) && !filesystem.exists(&candidate) {
                break candidate;
            }
        };
        filesystem.rename(current, &temp)?;
        parked.push((temp, target));
    }
    for (temp, target) in parked {
        filesystem.rename(&temp, target)?;
    }

    Ok(moves.into_iter().map(|(_, target)| target).collect())
}

// Pre-order visits parents first, so a parent's path is always realized.
fn parent_dir(
    realized: &[Option<PathBuf>],
    parent: Option<FolderIdx>,
    root: &Path,
) -> PathBuf {
    parent
        .and_then(|parent| realized[parent.index()].clone())
        .unwrap_or_else(|| root.to_path_buf())
}

fn display_segment(name: &str, id: &str) -> String {
    let sanitized = sanitize_file_name(name);
    if sanitized.trim().is_empty() || sanitized == "." || sanitized == ".." {
        id.to_string()
    } else {
        sanitized
    }
}
