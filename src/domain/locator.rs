//! Entity lookup across a category's folder forest.

use std::path::{Path, PathBuf};

use super::dir_table::{DirTable, Phase};
use super::project::{Category, EntityRef, FolderIdx};

/// The logical position of an entity: the entity record and the folder
/// holding it (`None` for top-level entities).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
    pub entity: &'a EntityRef,
    pub folder: Option<FolderIdx>,
}

impl Location<'_> {
    /// Map the logical position to a directory through a table of either phase.
    pub fn directory<P: Phase>(
        &self,
        category: &Category,
        dirs: &DirTable<P>,
        root: &Path,
    ) -> Option<PathBuf> {
        match self.folder {
            None => Some(root.to_path_buf()),
            Some(idx) => dirs.get(&category.folder(idx).id).map(Path::to_path_buf),
        }
    }
}

/// Find an entity by identifier.
///
/// Search order, first match wins: top-level entities, then each top-level
/// folder's entities followed by its subfolders, depth first.
pub fn locate<'a>(category: &'a Category, id: &str) -> Option<Location<'a>> {
    if let Some(entity) = category.entities().iter().find(|entity| entity.id == id) {
        return Some(Location { entity, folder: None });
    }
    category.roots().iter().find_map(|root| locate_in_folder(category, *root, id))
}

fn locate_in_folder<'a>(category: &'a Category, idx: FolderIdx, id: &str) -> Option<Location<'a>> {
    let folder = category.folder(idx);
    if let Some(entity) = folder.entities.iter().find(|entity| entity.id == id) {
        return Some(Location { entity, folder: Some(idx) });
    }
    folder.children.iter().find_map(|child| locate_in_folder(category, *child, id))
}

/// Find an entity and its containing directory.
///
/// Top-level entities live in `root`; foldered entities live in the folder's
/// directory from `dirs`. A folder without a recorded directory counts as
/// not found.
pub fn find<'a, P: Phase>(
    category: &'a Category,
    id: &str,
    dirs: &DirTable<P>,
    root: &Path,
) -> Option<(&'a EntityRef, PathBuf)> {
    let location = locate(category, id)?;
    let directory = location.directory(category, dirs, root)?;
    Some((location.entity, directory))
}
