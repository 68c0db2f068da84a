use anyhow::Context;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Kind of generated file, used to limit what gets written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Info,
    Routing,
    Controller,
    MenuLinks,
    Readme,
}

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub kind: FileKind,
    pub contents: String,
}

/// Generated files keyed by path relative to the module root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedFileSet {
    files: BTreeMap<String, GeneratedFile>,
}

/// Which file kinds to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationScope {
    pub info: bool,
    pub routing: bool,
    pub controllers: bool,
    pub menu: bool,
    pub readme: bool,
}

impl GenerationScope {
    pub fn all() -> Self {
        GenerationScope {
            info: true,
            routing: true,
            controllers: true,
            menu: true,
            readme: true,
        }
    }

    pub fn none() -> Self {
        GenerationScope {
            info: false,
            routing: false,
            controllers: false,
            menu: false,
            readme: false,
        }
    }

    pub fn includes(&self, kind: FileKind) -> bool {
        match kind {
            FileKind::Info => self.info,
            FileKind::Routing => self.routing,
            FileKind::Controller => self.controllers,
            FileKind::MenuLinks => self.menu,
            FileKind::Readme => self.readme,
        }
    }
}

impl Default for GenerationScope {
    fn default() -> Self {
        Self::all()
    }
}

/// Options for [`GeneratedFileSet::write_to`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// Overwrite existing files
    pub force: bool,
    /// Report what would be written without touching the filesystem
    pub dry_run: bool,
    pub scope: GenerationScope,
}

/// Outcome of [`GeneratedFileSet::write_to`], as relative paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub written: Vec<String>,
    /// Existing files left alone because `force` was off
    pub skipped: Vec<String>,
    /// Files outside the requested scope
    pub out_of_scope: Vec<String>,
}

impl GeneratedFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, kind: FileKind, contents: impl Into<String>) {
        self.files.insert(
            path.into(),
            GeneratedFile {
                kind,
                contents: contents.into(),
            },
        );
    }

    /// Contents of the file at `path`.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(|f| f.contents.as_str())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Relative paths in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GeneratedFile)> {
        self.files.iter().map(|(p, f)| (p.as_str(), f))
    }

    /// Write the set under `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created or a file cannot
    /// be written.
    pub fn write_to(&self, dir: &Path, options: &WriteOptions) -> anyhow::Result<WriteSummary> {
        let mut summary = WriteSummary::default();
        for (rel, file) in &self.files {
            if !options.scope.includes(file.kind) {
                summary.out_of_scope.push(rel.clone());
                continue;
            }
            let target = dir.join(rel);
            if target.exists() && !options.force {
                tracing::warn!(path = %target.display(), "Skipping existing file (use --force to overwrite)");
                summary.skipped.push(rel.clone());
                continue;
            }
            if options.dry_run {
                tracing::info!(path = %target.display(), bytes = file.contents.len(), "Would write file");
                summary.written.push(rel.clone());
                continue;
            }
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory {}", parent.display())
                })?;
            }
            fs::write(&target, &file.contents)
                .with_context(|| format!("Failed to write {}", target.display()))?;
            tracing::info!(path = %target.display(), "Generated file");
            summary.written.push(rel.clone());
        }
        Ok(summary)
    }
}
