#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn blogapi_cmd() -> Command {
    let mut cmd = Command::cargo_bin("blogapi").unwrap();
    cmd.env_remove("BLOGAPI_ENV");
    cmd.env_remove("BLOGAPI_OUTPUT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Manifest with a draft, a published post and one author
pub const DRAFT_MANIFEST: &str = r#"{
  "parsedPosts": [
    { "slug": "draft-post", "attributes": { "author": "dave", "title": "Draft Post", "published": false } },
    { "slug": "published-post", "attributes": { "author": "dave", "title": "Published Post" } }
  ],
  "parsedAuthors": [
    { "slug": "dave", "attributes": { "name": "Dave" } }
  ]
}"#;

/// Manifest with two tagged posts by the same author
pub const TAGGED_MANIFEST: &str = r#"{
  "parsedPosts": [
    { "slug": "first", "attributes": { "author": "dave", "tags": "ember, testing" } },
    { "slug": "second", "attributes": { "author": "dave", "tags": "testing,cycling" } }
  ],
  "parsedAuthors": [
    { "slug": "dave", "attributes": { "name": "Dave" } }
  ]
}"#;

/// Write a manifest file and return its path
pub fn write_manifest(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("content.json");
    fs::write(&path, contents).unwrap();
    path
}

/// Read a built collection as JSON
pub fn read_collection(out: &Path, name: &str) -> serde_json::Value {
    let path = out.join("api").join("blog").join(format!("{}.json", name));
    let contents = fs::read_to_string(path).unwrap();
    serde_json::from_str(&contents).unwrap()
}
