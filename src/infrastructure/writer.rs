//! Output writers for the built collections

use crate::domain::BuildOutput;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Receives all collections of a build at once
pub trait CollectionSink {
    fn emit(&mut self, output: &BuildOutput) -> Result<()>;
}

/// Keeps the last emitted output in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub output: Option<BuildOutput>,
}

impl CollectionSink for MemorySink {
    fn emit(&mut self, output: &BuildOutput) -> Result<()> {
        self.output = Some(output.clone());
        Ok(())
    }
}

/// Writes `<root>/api/blog/{posts,tags,authors}.json`
#[derive(Debug, Clone)]
pub struct FileSystemWriter {
    pub root: PathBuf,
}

impl FileSystemWriter {
    pub fn new(root: PathBuf) -> Self {
        FileSystemWriter { root }
    }

    /// Directory the collection files are written to
    pub fn blog_dir(&self) -> PathBuf {
        self.root.join("api").join("blog")
    }

    /// Path of a named collection
    pub fn collection_path(&self, name: &str) -> PathBuf {
        self.blog_dir().join(format!("{}.json", name))
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    fn write_atomic(path: &Path, content: &str) -> Result<()> {
        let tmp_name = format!(
            "{}.blogapi-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("collection.json"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        let replaced = (|| {
            if cfg!(windows) && path.exists() {
                fs::remove_file(path)?;
            }
            fs::rename(&tmp_path, path)
        })();

        if let Err(e) = replaced {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }
}

impl CollectionSink for FileSystemWriter {
    fn emit(&mut self, output: &BuildOutput) -> Result<()> {
        // Serialize everything before touching the disk
        let rendered = output
            .named()
            .into_iter()
            .map(|(name, collection)| -> Result<(&'static str, String)> {
                Ok((name, collection.to_json_pretty()?))
            })
            .collect::<Result<Vec<_>>>()?;

        let blog_dir = self.blog_dir();
        if !blog_dir.exists() {
            fs::create_dir_all(&blog_dir)?;
        }

        for (name, json) in rendered {
            let path = self.collection_path(name);
            Self::write_atomic(&path, &json)?;
            tracing::debug!(path = %path.display(), "wrote collection");
        }

        Ok(())
    }
}
