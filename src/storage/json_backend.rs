use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    domain::Student,
    errors::Result,
    utils::paths::{ensure_dir, PathResolver},
};

use super::{StudentRepository, DEFAULT_STORAGE_KEY};

const FILE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// File-backed repository storing the collection as a JSON array in
/// `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
    key: String,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>, key: Option<&str>) -> Result<Self> {
        let root = PathResolver::resolve_base(root);
        ensure_dir(&root)?;
        Ok(Self {
            root,
            key: canonical_key(key.unwrap_or(DEFAULT_STORAGE_KEY)),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn collection_path(&self) -> PathBuf {
        self.root.join(format!("{}.{}", self.key, FILE_EXTENSION))
    }
}

impl StudentRepository for JsonStorage {
    fn load(&self) -> Result<Vec<Student>> {
        let path = self.collection_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no stored collection, starting empty");
            return Ok(Vec::new());
        }
        load_students_from_path(&path)
    }

    fn save(&self, students: &[Student]) -> Result<()> {
        save_students_to_path(students, &self.collection_path())
    }
}

pub fn save_students_to_path(students: &[Student], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(students)?;
    let tmp = tmp_path(path);
    write_file(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

pub fn load_students_from_path(path: &Path) -> Result<Vec<Student>> {
    let data = fs::read_to_string(path)?;
    // A stored `null` behaves like an absent value.
    let students: Option<Vec<Student>> = serde_json::from_str(&data)?;
    Ok(students.unwrap_or_default())
}

fn canonical_key(key: &str) -> String {
    let sanitized: String = key
        .trim()
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        DEFAULT_STORAGE_KEY.into()
    } else {
        sanitized
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
