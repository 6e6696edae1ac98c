//! Folder identifier to output directory mapping.
//!
//! A table is produced once per materialization phase and never edited
//! afterwards: directory creation yields a [`DirTable<Created>`], renaming
//! consumes it and yields a [`DirTable<Renamed>`].

use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Paths built from raw folder identifiers.
#[derive(Debug, Clone, Copy)]
pub struct Created;

/// Paths built from sanitized folder names.
#[derive(Debug, Clone, Copy)]
pub struct Renamed;

/// Materialization phase a table belongs to.
pub trait Phase {
    const VERSION: u32;
}

impl Phase for Created {
    const VERSION: u32 = 1;
}

impl Phase for Renamed {
    const VERSION: u32 = 2;
}

#[derive(Debug, Clone)]
pub struct DirTable<P> {
    paths: BTreeMap<String, PathBuf>,
    _phase: PhantomData<P>,
}

impl<P: Phase> DirTable<P> {
    pub(crate) fn new() -> Self {
        Self { paths: BTreeMap::new(), _phase: PhantomData }
    }

    /// Record a folder path. Returns `false` if the identifier is already present.
    pub(crate) fn insert(&mut self, id: &str, path: PathBuf) -> bool {
        if self.paths.contains_key(id) {
            return false;
        }
        self.paths.insert(id.to_string(), path);
        true
    }

    pub fn version(&self) -> u32 {
        P::VERSION
    }

    pub fn get(&self, id: &str) -> Option<&Path> {
        self.paths.get(id).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<P: Phase> FromIterator<(String, PathBuf)> for DirTable<P> {
    fn from_iter<I: IntoIterator<Item = (String, PathBuf)>>(iter: I) -> Self {
        Self { paths: iter.into_iter().collect(), _phase: PhantomData }
    }
}
