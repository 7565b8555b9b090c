use crate::domain::{Catalog, Folder, KeeperResult, Sheet, Store};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// A [`Catalog`] persisted as pretty-printed JSON.
///
/// Every successful mutation rewrites the file through a sibling temp file
/// and a rename. When the write fails the in-memory catalog is rolled back,
/// so memory and disk never disagree.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    catalog: Catalog,
}

impl JsonStore {
    /// Opens `path`, starting from an empty catalog when the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> KeeperResult<Self> {
        let path = path.into();
        let catalog = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str::<Catalog>(&content)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "store file missing, starting empty");
                Catalog::default()
            }
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(
            path = %path.display(),
            folders = catalog.folders().len(),
            "store opened"
        );
        Ok(Self { path, catalog })
    }

    #[cfg(test)]
    fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn save(&self) -> KeeperResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&self.catalog)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let mut file = fs::File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), bytes = json.len(), "store saved");
        Ok(())
    }

    fn mutate<T>(&mut self, op: impl FnOnce(&mut Catalog) -> KeeperResult<T>) -> KeeperResult<T> {
        let snapshot = self.catalog.clone();
        let value = op(&mut self.catalog)?;
        if let Err(e) = self.save() {
            self.catalog = snapshot;
            return Err(e);
        }
        Ok(value)
    }
}

impl Store for JsonStore {
    fn list_folders(&self) -> KeeperResult<Vec<Folder>> {
        self.catalog.list_folders()
    }

    fn list_sheets_in_folder(&self, folder_id: i64) -> KeeperResult<Vec<Sheet>> {
        self.catalog.list_sheets_in_folder(folder_id)
    }

    fn find_folder_by_name(&self, name: &str) -> KeeperResult<Folder> {
        self.catalog.find_folder_by_name(name)
    }

    fn find_sheet_by_alias(&self, alias: &str) -> KeeperResult<Sheet> {
        self.catalog.find_sheet_by_alias(alias)
    }

    fn add_folder(&mut self, name: &str) -> KeeperResult<i64> {
        self.mutate(|c| c.add_folder(name))
    }

    fn add_sheet(&mut self, folder: &str, name: &str, alias: &str, body: &str) -> KeeperResult<i64> {
        self.mutate(|c| c.add_sheet(folder, name, alias, body))
    }

    fn remove_folder_by_id(&mut self, id: i64) -> KeeperResult<()> {
        self.mutate(|c| c.remove_folder(id).map(|_| ()))
    }

    fn remove_folder_cascade(&mut self, id: i64) -> KeeperResult<usize> {
        self.mutate(|c| c.remove_folder_cascade(id))
    }

    fn remove_sheet_by_id(&mut self, id: i64) -> KeeperResult<()> {
        self.mutate(|c| c.remove_sheet(id).map(|_| ()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::KeeperError;
    use tempfile::tempdir;

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        let store = JsonStore::open(&path).unwrap();
        assert!(store.list_folders().unwrap().is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_mutations_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let mut store = JsonStore::open(&path).unwrap();
        let work = store.add_folder("work").unwrap();
        store.add_sheet("work", "standup", "su", "line one\nline two").unwrap();
        drop(store);

        let reopened = JsonStore::open(&path).unwrap();
        let sheets = reopened.list_sheets_in_folder(work).unwrap();
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].body, "line one\nline two");
        assert_eq!(reopened.find_folder_by_name("work").unwrap().id, work);
    }

    #[test]
    fn test_failed_request_does_not_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut store = JsonStore::open(&path).unwrap();

        let err = store.remove_sheet_by_id(7).unwrap_err();
        assert!(err.is_not_found());
        assert!(!path.exists());
    }

    #[test]
    fn test_malformed_file_is_format_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonStore::open(&path).unwrap_err();
        assert!(matches!(err, KeeperError::Format(_)));
        assert!(err.is_store_io());
    }

    #[test]
    fn test_failed_save_rolls_back() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        let mut store = JsonStore::open(blocker.join("store.json")).unwrap();
        // The parent "directory" is now a regular file, so every save fails.
        fs::write(&blocker, "").unwrap();

        let err = store.add_folder("work").unwrap_err();
        assert!(err.is_store_io());
        assert!(store.catalog().folders().is_empty());
    }
}
