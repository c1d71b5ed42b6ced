//! Pre-placed image lookup
//!
//! Source images are dropped as `<files_dir>/<plural>/<slug>.png`; the
//! tabletop module ships converted `.webp` copies under the asset prefix.

use std::collections::HashSet;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::Result;

/// File names present in one entity type's asset directory.
#[derive(Debug, Clone, Default)]
pub struct AssetIndex {
    plural: String,
    prefix: String,
    file_names: HashSet<String>,
}

impl AssetIndex {
    /// Scan `<files_dir>/<plural>` recursively.
    ///
    /// A missing directory yields an empty index.
    pub fn scan(files_dir: &Path, plural: &str, prefix: &str) -> Result<Self> {
        let root = files_dir.join(plural);
        let mut file_names = HashSet::new();

        if root.is_dir() {
            for entry in WalkDir::new(&root) {
                let entry = entry?;
                if entry.file_type().is_file() {
                    file_names.insert(entry.file_name().to_string_lossy().into_owned());
                }
            }
        } else {
            tracing::debug!("No asset directory at {}", root.display());
        }

        tracing::debug!("Indexed {} assets for {}", file_names.len(), plural);
        Ok(Self::from_file_names(plural, prefix, file_names))
    }

    /// Build an index from known file names (for testing)
    #[must_use]
    pub fn from_file_names(
        plural: &str,
        prefix: &str,
        file_names: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            plural: plural.to_string(),
            prefix: prefix.trim_end_matches('/').to_string(),
            file_names: file_names.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.file_names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.file_names.is_empty()
    }

    /// Module asset path for `slug`, when `<slug>.png` exists.
    #[must_use]
    pub fn img_for(&self, slug: &str) -> Option<String> {
        self.file_names
            .contains(&format!("{slug}.png"))
            .then(|| format!("{}/{}/{slug}.webp", self.prefix, self.plural))
    }
}
