//! Ignore and correct lists that override frequency evidence.
//!
//! The ignore list names forms that are never rewritten, typically because
//! both spellings are legitimate words (`gepland` / `geplant`). The correct
//! list names forms that are known to be right even when most writers in a
//! dataset get them wrong (`gefaket`). Lists can be loaded from a YAML file:
//!
//! ```yaml
//! ignore:
//!   - gepland
//!   - geplant
//! correct:
//!   - gefaket
//! ```

use std::{collections::BTreeSet, fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_IGNORE: [&str; 8] = [
    "geplant",
    "gepland",
    "ingeplant",
    "ingepland",
    "gebaad",
    "gebaat",
    "geniest",
    "geniesd",
];

pub const DEFAULT_CORRECT: [&str; 8] = [
    "geracet",
    "gefaket",
    "opgenoemd",
    "getwitterd",
    "gecrasht",
    "geliket",
    "gepiercet",
    "nagepluisd",
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorrectionLists {
    #[serde(default)]
    pub ignore: BTreeSet<String>,
    #[serde(default)]
    pub correct: BTreeSet<String>,
}

impl Default for CorrectionLists {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORE, DEFAULT_CORRECT)
    }
}

impl CorrectionLists {
    pub fn new<I, C, S, T>(ignore: I, correct: C) -> Self
    where
        I: IntoIterator<Item = S>,
        C: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            ignore: ignore.into_iter().map(Into::into).collect(),
            correct: correct.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            ignore: BTreeSet::new(),
            correct: BTreeSet::new(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw =
            fs::read_to_string(path).with_context(|| format!("Opening list file {path:?}"))?;
        serde_yaml::from_str(&raw).with_context(|| format!("Parsing list file {path:?}"))
    }

    pub fn is_ignored(&self, word: &str) -> bool {
        self.ignore.contains(word)
    }

    pub fn is_correct(&self, word: &str) -> bool {
        self.correct.contains(word)
    }

    pub fn extend_ignore<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        extend_trimmed(&mut self.ignore, words)
    }

    pub fn extend_correct<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        extend_trimmed(&mut self.correct, words)
    }

    /// Words present in both lists. The ignore list takes precedence for these.
    pub fn overlap(&self) -> Vec<&str> {
        self.ignore
            .intersection(&self.correct)
            .map(String::as_str)
            .collect()
    }
}

fn extend_trimmed<I, S>(target: &mut BTreeSet<String>, words: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut added = 0;
    for word in words {
        let word = word.as_ref().trim();
        if word.is_empty() {
            continue;
        }
        if target.insert(word.to_string()) {
            added += 1;
        }
    }
    added
}
