//! On-disk project exports for pipeline tests.

use std::fs;
use std::path::{Path, PathBuf};

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}

/// A minimal entity descriptor as found under `Data/<Category>/`.
pub fn descriptor_xml(id: &str, name: &str, script: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <Entity type=\"Script\">\n  \
         <Header Deleted=\"false\" ID=\"{}\" Name=\"{}\"/>\n  \
         <konga.string>{}</konga.string>\n\
         </Entity>\n",
        escape_xml(id),
        escape_xml(name),
        escape_xml(script)
    )
}

/// Writes a project export rooted at a temporary directory.
pub struct ProjectFixture {
    root: PathBuf,
    environment: String,
}

impl ProjectFixture {
    /// Create the manifest and one environment with its properties file.
    pub fn new(root: &Path, project_name: &str, environment: &str) -> Self {
        fs::create_dir_all(root.join(environment)).unwrap();
        fs::write(
            root.join("manifest.jip"),
            format!("format-version=3\r\nproject-name={project_name}\r\n"),
        )
        .unwrap();
        fs::write(
            root.join(environment).join("environment.properties"),
            format!("environment-name={environment}\r\n"),
        )
        .unwrap();
        Self { root: root.to_path_buf(), environment: environment.to_string() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn project_xml(&self, xml: &str) -> &Self {
        fs::write(self.root.join(&self.environment).join("project.xml"), xml).unwrap();
        self
    }

    pub fn descriptor(&self, category: &str, id: &str, xml: &str) -> &Self {
        let dir = self.root.join(&self.environment).join("Data").join(category);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{id}.xml")), xml).unwrap();
        self
    }

    pub fn script(&self, id: &str, name: &str, body: &str) -> &Self {
        self.descriptor("Script", id, &descriptor_xml(id, name, body))
    }

    pub fn operation(&self, id: &str, name: &str) -> &Self {
        self.descriptor("Operation", id, &descriptor_xml(id, name, ""))
    }
}
