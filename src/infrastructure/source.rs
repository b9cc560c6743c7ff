//! Content sources: where parsed posts and authors come from

use crate::domain::{ParsedAuthor, ParsedDocument, ParsedPost};
use crate::error::{BlogError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Supplier of parsed documents for the current build
pub trait ContentSource {
    fn parsed_posts(&self) -> Result<Vec<ParsedPost>>;

    fn parsed_authors(&self) -> Result<Vec<ParsedAuthor>>;
}

/// Open a directory as a [`DirectorySource`], anything else as a [`ManifestSource`]
pub fn open_source(path: &Path) -> Result<Box<dyn ContentSource>> {
    if path.is_dir() {
        Ok(Box::new(DirectorySource::new(path.to_path_buf())))
    } else if path.is_file() {
        Ok(Box::new(ManifestSource::open(path)?))
    } else {
        Err(BlogError::SourceNotFound(path.to_path_buf()))
    }
}

/// Documents held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pub posts: Vec<ParsedPost>,
    pub authors: Vec<ParsedAuthor>,
}

impl InMemorySource {
    pub fn new(posts: Vec<ParsedPost>, authors: Vec<ParsedAuthor>) -> Self {
        InMemorySource { posts, authors }
    }
}

impl ContentSource for InMemorySource {
    fn parsed_posts(&self) -> Result<Vec<ParsedPost>> {
        Ok(self.posts.clone())
    }

    fn parsed_authors(&self) -> Result<Vec<ParsedAuthor>> {
        Ok(self.authors.clone())
    }
}

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default, alias = "parsedPosts")]
    posts: Vec<ParsedPost>,
    #[serde(default, alias = "parsedAuthors")]
    authors: Vec<ParsedAuthor>,
}

/// A single JSON file: `{ "posts": [...], "authors": [...] }`
#[derive(Debug, Clone)]
pub struct ManifestSource {
    inner: InMemorySource,
}

impl ManifestSource {
    /// Read and parse the manifest up front
    pub fn open(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BlogError::SourceNotFound(path.to_path_buf())
            } else {
                BlogError::Io(e)
            }
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let manifest: Manifest = serde_json::from_str(json)?;
        tracing::debug!(
            posts = manifest.posts.len(),
            authors = manifest.authors.len(),
            "loaded manifest"
        );
        Ok(ManifestSource {
            inner: InMemorySource::new(manifest.posts, manifest.authors),
        })
    }
}

impl ContentSource for ManifestSource {
    fn parsed_posts(&self) -> Result<Vec<ParsedPost>> {
        self.inner.parsed_posts()
    }

    fn parsed_authors(&self) -> Result<Vec<ParsedAuthor>> {
        self.inner.parsed_authors()
    }
}

/// A blog directory with `posts/` and `authors/`, one JSON document per file
#[derive(Debug, Clone)]
pub struct DirectorySource {
    pub root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: PathBuf) -> Self {
        DirectorySource { root }
    }

    fn read_documents(&self, dir: &str) -> Result<Vec<ParsedDocument>> {
        let dir_path = self.root.join(dir);
        if !dir_path.is_dir() {
            tracing::debug!(path = %dir_path.display(), "no documents directory");
            return Ok(Vec::new());
        }

        let mut files = Self::collect_json_files(&dir_path)?;
        files.sort();

        let mut documents = Vec::with_capacity(files.len());
        for path in files {
            let contents = fs::read_to_string(&path)?;
            let mut doc: ParsedDocument = serde_json::from_str(&contents)?;
            if doc.slug.is_empty() {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    doc.slug = stem.to_string();
                }
            }
            documents.push(doc);
        }

        Ok(documents)
    }

    fn collect_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
        let walker = WalkDir::new(dir).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| BlogError::Io(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let is_json = entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
            if is_json {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

impl ContentSource for DirectorySource {
    fn parsed_posts(&self) -> Result<Vec<ParsedPost>> {
        self.read_documents("posts")
    }

    fn parsed_authors(&self) -> Result<Vec<ParsedAuthor>> {
        self.read_documents("authors")
    }
}
