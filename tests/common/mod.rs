#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the line-tally binary.
#[macro_export]
macro_rules! line_tally {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("line-tally"))
    };
}

/// Temporary source tree for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file, and any missing parent directories, under the root.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".line-tally.toml", content);
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// A small mixed-language project.
    pub fn sample_project() -> Self {
        let fixture = Self::new();
        fixture.create_file(
            "Backend/Services/UserService.cs",
            "// Handles users\npublic class UserService\n{\n    /* cache */\n    int count;\n}\n",
        );
        fixture.create_file("Backend/Program.cs", "class Program {}\n");
        fixture.create_file(
            "Frontend/src/app.tsx",
            "const App = () => (\n  <div>{/* note */}</div>\n);\n",
        );
        fixture.create_file("Frontend/index.html", "<!-- shell -->\n<html></html>\n");
        fixture.create_file("Scripts/build.py", "\"\"\"Build script.\"\"\"\nprint('ok')\n");
        fixture.create_file("Backend/bin/Debug/Generated.cs", "class Generated {}\n");
        fixture.create_file("Frontend/node_modules/lib/index.js", "var a = 1;\n");
        fixture
    }
}
