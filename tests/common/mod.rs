#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::{TempDir, tempdir};

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, contents).expect("write temp file");
        path
    }

    /// Writes a two-column `id,participle` CSV with each word repeated `count` times.
    pub fn write_participles(&self, name: &str, words: &[(&str, usize)]) -> PathBuf {
        let mut contents = String::from("id,participle\n");
        let mut id = 0;
        for (word, count) in words {
            for _ in 0..*count {
                id += 1;
                contents.push_str(&format!("{id},{word}\n"));
            }
        }
        self.write(name, &contents)
    }
}

pub fn dt_fix() -> Command {
    Command::cargo_bin("dt-fix").expect("binary exists")
}

/// Values of the `participle` column of a CSV produced by the binary.
pub fn participle_column(csv: &str) -> Vec<String> {
    csv.lines()
        .skip(1)
        .filter(|line| !line.is_empty())
        .map(|line| line.split(',').nth(1).unwrap_or_default().to_string())
        .collect()
}
