//! Compendium file output

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use super::EntityKind;
use crate::error::{Error, Result};

/// Serialized lines of one entity type, grouped by pack in encounter order.
pub type PackLines = IndexMap<String, Vec<String>>;

/// Write one `<plural>-<pack>.db` file per pack under `out_dir`.
///
/// Lines are joined by `\n` with no trailing newline. Existing files are
/// overwritten. Returns the written paths in pack order.
pub fn write_packs(out_dir: &Path, kind: EntityKind, packs: &PackLines) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).map_err(|source| Error::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(packs.len());
    for (pack, lines) in packs {
        let path = out_dir.join(kind.pack_file_name(pack));
        fs::write(&path, lines.join("\n")).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        tracing::info!("Wrote {} records to {}", lines.len(), path.display());
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_one_file_per_pack() {
        let dir = tempfile::tempdir().unwrap();
        let mut packs = PackLines::new();
        packs.entry("base".into()).or_default().push(r#"{"name":"Warrior"}"#.into());
        packs.entry("2038".into()).or_default().push(r#"{"name":"Psion"}"#.into());
        packs.entry("base".into()).or_default().push(r#"{"name":"Rogue"}"#.into());

        let out = dir.path().join("packs");
        let written = write_packs(&out, EntityKind::Armour, &packs).unwrap();

        assert_eq!(written, vec![out.join("armours-base.db"), out.join("armours-2038.db")]);
        assert_eq!(
            fs::read_to_string(&written[0]).unwrap(),
            "{\"name\":\"Warrior\"}\n{\"name\":\"Rogue\"}"
        );
        assert_eq!(fs::read_to_string(&written[1]).unwrap(), "{\"name\":\"Psion\"}");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traumas-base.db");
        fs::write(&path, "old content\nold content").unwrap();

        let mut packs = PackLines::new();
        packs.insert("base".into(), vec!["{}".into()]);
        write_packs(dir.path(), EntityKind::Trauma, &packs).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_unwritable_directory() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("packs");
        fs::write(&blocker, "a file, not a directory").unwrap();

        let mut packs = PackLines::new();
        packs.insert("base".into(), vec!["{}".into()]);
        let err = write_packs(&blocker, EntityKind::Weapon, &packs).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }
}
