//! Project structure parsed from `project.xml`.
//!
//! Every category keeps its folder forest in a flat arena: folders are
//! addressed by [`FolderIdx`] and carry their parent index, so traversal and
//! lookup never depend on object identity.

use serde::Deserialize;

use super::AppError;

/// Index of a folder inside its category's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FolderIdx(usize);

impl FolderIdx {
    pub fn index(self) -> usize {
        self.0
    }
}

/// An entity location entry. The payload lives in a separate descriptor file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRef {
    pub id: String,
    pub name: String,
}

/// A virtual folder.
#[derive(Debug, Clone)]
pub struct Folder {
    pub id: String,
    pub name: String,
    pub parent: Option<FolderIdx>,
    pub children: Vec<FolderIdx>,
    pub entities: Vec<EntityRef>,
}

/// A category of entities, e.g. scripts or operations.
#[derive(Debug, Clone)]
pub struct Category {
    name: String,
    folders: Vec<Folder>,
    roots: Vec<FolderIdx>,
    entities: Vec<EntityRef>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), folders: Vec::new(), roots: Vec::new(), entities: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a folder under `parent` (or at the top level) and return its index.
    pub fn add_folder(
        &mut self,
        parent: Option<FolderIdx>,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> FolderIdx {
        let idx = FolderIdx(self.folders.len());
        self.folders.push(Folder {
            id: id.into(),
            name: name.into(),
            parent,
            children: Vec::new(),
            entities: Vec::new(),
        });
        match parent {
            Some(parent) => self.folders[parent.0].children.push(idx),
            None => self.roots.push(idx),
        }
        idx
    }

    /// Append an entity to `folder` (or to the top level).
    pub fn add_entity(
        &mut self,
        folder: Option<FolderIdx>,
        id: impl Into<String>,
        name: impl Into<String>,
    ) {
        let entity = EntityRef { id: id.into(), name: name.into() };
        match folder {
            Some(folder) => self.folders[folder.0].entities.push(entity),
            None => self.entities.push(entity),
        }
    }

    pub fn folder(&self, idx: FolderIdx) -> &Folder {
        &self.folders[idx.0]
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn roots(&self) -> &[FolderIdx] {
        &self.roots
    }

    /// Entities outside of any folder.
    pub fn entities(&self) -> &[EntityRef] {
        &self.entities
    }

    /// Folder indices in pre-order: every folder precedes its children, and
    /// siblings keep document order.
    pub fn preorder(&self) -> Vec<FolderIdx> {
        let mut order = Vec::with_capacity(self.folders.len());
        let mut stack: Vec<FolderIdx> = self.roots.iter().rev().copied().collect();
        while let Some(idx) = stack.pop() {
            order.push(idx);
            stack.extend(self.folders[idx.0].children.iter().rev().copied());
        }
        order
    }
}

/// The project structure of one environment.
#[derive(Debug, Clone)]
pub struct Project {
    pub id: String,
    pub name: String,
    categories: Vec<Category>,
}

impl Project {
    pub fn new(id: impl Into<String>, name: impl Into<String>, categories: Vec<Category>) -> Self {
        Self { id: id.into(), name: name.into(), categories }
    }

    /// Parse the content of a `project.xml` file.
    pub fn parse(xml: &str) -> Result<Self, AppError> {
        let raw: ProjectXml =
            quick_xml::de::from_str(xml).map_err(|e| AppError::parse_error("project.xml", e))?;

        let categories = raw
            .entity_types
            .into_iter()
            .map(|entity_type| {
                let mut category = Category::new(entity_type.name);
                for folder in entity_type.folders {
                    push_folder(&mut category, None, folder);
                }
                for entity in entity_type.entities {
                    category.add_entity(None, entity.id, entity.name);
                }
                category
            })
            .collect();

        Ok(Self::new(raw.id, raw.name, categories))
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }
}

fn push_folder(category: &mut Category, parent: Option<FolderIdx>, folder: FolderXml) {
    let idx = category.add_folder(parent, folder.id, folder.name);
    for entity in folder.entities {
        category.add_entity(Some(idx), entity.id, entity.name);
    }
    for child in folder.folders {
        push_folder(category, Some(idx), child);
    }
}

#[derive(Debug, Deserialize)]
struct ProjectXml {
    #[serde(rename = "@projectId", default)]
    id: String,
    #[serde(rename = "@name", default)]
    name: String,
    #[serde(rename = "EntityType", default)]
    entity_types: Vec<EntityTypeXml>,
}

#[derive(Debug, Deserialize)]
struct EntityTypeXml {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "Folder", default)]
    folders: Vec<FolderXml>,
    #[serde(rename = "Entity", default)]
    entities: Vec<EntityXml>,
}

#[derive(Debug, Deserialize)]
struct FolderXml {
    #[serde(rename = "@entityId")]
    id: String,
    #[serde(rename = "@name", default)]
    name: String,
    #[serde(rename = "Folder", default)]
    folders: Vec<FolderXml>,
    #[serde(rename = "Entity", default)]
    entities: Vec<EntityXml>,
}

#[derive(Debug, Deserialize)]
struct EntityXml {
    #[serde(rename = "@entityId")]
    id: String,
    #[serde(rename = "@name", default)]
    name: String,
}
