// Topic resolver
#![allow(dead_code)]

use crate::docs::error::{DocsError, Result};
use crate::docs::types::DocumentLookup;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Documentation file extension
pub const DOC_EXTENSION: &str = "md";

/// Alias → canonical filename. Each file has a Chinese and an English alias.
pub const TOPIC_ALIASES: &[(&str, &str)] = &[
    ("快速入門", "01-快速入門.md"),
    ("quick-start", "01-快速入門.md"),
    ("部署方式", "02-部署方式.md"),
    ("deployment", "02-部署方式.md"),
    ("安全配置", "03-安全配置.md"),
    ("security", "03-安全配置.md"),
    ("多模型", "04-多模型整合.md"),
    ("multi-model", "04-多模型整合.md"),
    ("技能系統", "05-技能系統.md"),
    ("skills", "05-技能系統.md"),
    ("記憶系統", "06-記憶系統.md"),
    ("memory", "06-記憶系統.md"),
];

const USAGE_HINT: &str =
    "Call openclaw_docs with a topic, e.g. {\"topic\": \"quick-start\"} or {\"topic\": \"部署方式\"}";

/// Maps topics to documents under a docs root
#[derive(Debug, Clone)]
pub struct TopicResolver {
    docs_dir: PathBuf,
    aliases: &'static [(&'static str, &'static str)],
}

impl TopicResolver {
    pub fn new(docs_dir: impl Into<PathBuf>) -> Self {
        Self {
            docs_dir: docs_dir.into(),
            aliases: TOPIC_ALIASES,
        }
    }

    pub fn docs_dir(&self) -> &Path {
        &self.docs_dir
    }

    /// All alias keys in table order
    pub fn alias_keys(&self) -> Vec<String> {
        self.aliases.iter().map(|(k, _)| k.to_string()).collect()
    }

    /// Exact, case-sensitive alias lookup
    pub fn canonical_name(&self, topic: &str) -> Option<&'static str> {
        self.aliases
            .iter()
            .find(|(alias, _)| *alias == topic)
            .map(|(_, file)| *file)
    }

    /// Resolve a topic, or list the available documents when none is given
    pub fn resolve(&self, topic: Option<&str>) -> Result<DocumentLookup> {
        let Some(topic) = topic else {
            return Ok(DocumentLookup::Listing {
                available_docs: self.list_documents(),
                usage: USAGE_HINT.to_string(),
            });
        };

        let path = self
            .locate(topic)
            .ok_or_else(|| DocsError::NotFound {
                topic: topic.to_string(),
                available: self.alias_keys(),
            })?;

        debug!(topic = %topic, path = %path.display(), "resolved documentation topic");

        let content = std::fs::read_to_string(&path)
            .map_err(|e| DocsError::Read(path.clone(), e.to_string()))?;

        Ok(DocumentLookup::Document {
            topic: topic.to_string(),
            content,
        })
    }

    /// Filenames with the doc extension present in the docs directory, sorted
    pub fn list_documents(&self) -> Vec<String> {
        let entries = match std::fs::read_dir(&self.docs_dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(path = %self.docs_dir.display(), error = %e, "docs directory not readable");
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && has_doc_extension(path))
            .filter_map(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        names
    }

    fn locate(&self, topic: &str) -> Option<PathBuf> {
        let filename = self.canonical_name(topic).unwrap_or(topic);
        if !is_plain_filename(filename) {
            return None;
        }

        let path = self.docs_dir.join(filename);
        if path.is_file() {
            return Some(path);
        }

        if !has_doc_extension(&path) {
            let path = self.docs_dir.join(format!("{filename}.{DOC_EXTENSION}"));
            if path.is_file() {
                return Some(path);
            }
        }

        None
    }
}

fn has_doc_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == DOC_EXTENSION)
}

/// A single normal path component, so lookups stay inside the docs root
fn is_plain_filename(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}
