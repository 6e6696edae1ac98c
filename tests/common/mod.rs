//! Shared testing utilities for jbextract CLI and library tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SCRIPT_ID: &str = "0d4c3a7e-1f2b-4c5d-8e9f-0a1b2c3d4e5f";
pub const CALLER_ID: &str = "1e5d4b8f-2a3c-4d6e-9f0a-1b2c3d4e5f60";
pub const JS_ID: &str = "2f6e5c9a-3b4d-4e7f-8a1b-2c3d4e5f6071";
pub const OPERATION_ID: &str = "5e6f7a8b-9c0d-4e1f-a2b3-c4d5e6f7a8b9";
pub const MISSING_ID: &str = "7a8b9c0d-1e2f-4a3b-8c4d-5e6f7a8b9c0d";

/// Testing harness providing an isolated project export and output directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with an empty output directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        fs::create_dir_all(root.path().join("out")).expect("Failed to create output directory");
        Self { root }
    }

    /// Project export root.
    pub fn project(&self) -> PathBuf {
        self.root.path().join("Demo Export")
    }

    /// Output directory passed to extraction.
    pub fn output(&self) -> PathBuf {
        self.root.path().join("out")
    }

    /// Expected destination of a first extraction of the sample project.
    pub fn destination(&self) -> PathBuf {
        self.output().join("Demo Production")
    }

    /// Build a command for invoking the compiled `jbextract` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("jbextract").expect("Failed to locate jbextract binary");
        cmd.current_dir(self.root.path()).env("RUST_LOG", "warn");
        cmd
    }

    /// Write the sample export with a single `Production` environment.
    pub fn write_sample_project(&self) {
        self.write_environment("Production");
    }

    /// Write the sample export under the given environment directory.
    pub fn write_environment(&self, environment: &str) {
        let project = self.project();
        let env_dir = project.join(environment);
        fs::create_dir_all(&env_dir).unwrap();
        fs::write(project.join("manifest.jip"), "format-version=3\r\nproject-name=Demo\r\n").unwrap();
        fs::write(env_dir.join("environment.properties"), "environment-name=Production\r\n")
            .unwrap();
        fs::write(env_dir.join("project.xml"), sample_project_xml()).unwrap();

        self.write_descriptor(
            environment,
            "Script",
            SCRIPT_ID,
            "Test/Script",
            "<trans>\nWriteToOperationLog(\"hi\");\n</trans>",
        );
        self.write_descriptor(
            environment,
            "Script",
            CALLER_ID,
            "Caller",
            &format!(
                "<trans>\n// RunScript(\"sc.{SCRIPT_ID}\") in a comment stays\n\
                 RunScript(\"sc.{SCRIPT_ID}\");\n\
                 RunOperation(\"op.{OPERATION_ID}\");\n\
                 RunScript(\"sc.{MISSING_ID}\");\n</trans>"
            ),
        );
        self.write_descriptor(
            environment,
            "Script",
            JS_ID,
            "Helper",
            &format!("<javascript>\nvar n = 1;\nRunScript(\"sc.{SCRIPT_ID}\");\n</javascript>"),
        );
        self.write_descriptor(environment, "Operation", OPERATION_ID, "Load", "");
    }

    /// Write an entity descriptor under `Data/<category>/`.
    pub fn write_descriptor(
        &self,
        environment: &str,
        category: &str,
        id: &str,
        name: &str,
        script: &str,
    ) {
        let dir = self.project().join(environment).join("Data").join(category);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{id}.xml")), descriptor_xml(id, name, script)).unwrap();
    }

    pub fn read(&self, path: impl AsRef<Path>) -> String {
        fs::read_to_string(path.as_ref())
            .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.as_ref().display()))
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}

fn descriptor_xml(id: &str, name: &str, script: &str) -> String {
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

fn sample_project_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Project projectId="p-1" name="Demo">
  <EntityType name="Script">
    <Folder entityId="F1" name="Folder A">
      <Entity entityId="{SCRIPT_ID}" name="Test/Script"/>
    </Folder>
    <Entity entityId="{CALLER_ID}" name="Caller"/>
    <Entity entityId="{JS_ID}" name="Helper"/>
  </EntityType>
  <EntityType name="Operation">
    <Folder entityId="F1" name="Folder A">
      <Folder entityId="F2" name="Folder B">
        <Entity entityId="{OPERATION_ID}" name="Load"/>
      </Folder>
    </Folder>
  </EntityType>
</Project>
"#
    )
}
