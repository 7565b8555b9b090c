//! The persistent-store seam consumed by the dashboard and the command surface.
//!
//! Calls are synchronous and assume a single caller. Looking up or removing
//! something that does not exist is reported as [`NotFound`](crate::domain::KeeperError::NotFound).

use super::errors::KeeperResult;
use super::models::{Catalog, Folder, Sheet};

pub trait Store {
    /// All folders in creation order.
    fn list_folders(&self) -> KeeperResult<Vec<Folder>>;

    /// Sheets owned by `folder_id` in creation order.
    fn list_sheets_in_folder(&self, folder_id: i64) -> KeeperResult<Vec<Sheet>>;

    fn find_folder_by_name(&self, name: &str) -> KeeperResult<Folder>;

    fn find_sheet_by_alias(&self, alias: &str) -> KeeperResult<Sheet>;

    fn add_folder(&mut self, name: &str) -> KeeperResult<i64>;

    fn add_sheet(&mut self, folder: &str, name: &str, alias: &str, body: &str) -> KeeperResult<i64>;

    /// Fails with [`FolderNotEmpty`](crate::domain::KeeperError::FolderNotEmpty) when the folder still owns sheets.
    fn remove_folder_by_id(&mut self, id: i64) -> KeeperResult<()>;

    /// Removes the folder and its sheets, returning the number of sheets removed.
    fn remove_folder_cascade(&mut self, id: i64) -> KeeperResult<usize>;

    fn remove_sheet_by_id(&mut self, id: i64) -> KeeperResult<()>;

    fn remove_folder_by_name(&mut self, name: &str) -> KeeperResult<()> {
        let folder = self.find_folder_by_name(name)?;
        self.remove_folder_by_id(folder.id)
    }

    fn remove_sheet_by_alias(&mut self, alias: &str) -> KeeperResult<()> {
        let sheet = self.find_sheet_by_alias(alias)?;
        self.remove_sheet_by_id(sheet.id)
    }
}

impl Store for Catalog {
    fn list_folders(&self) -> KeeperResult<Vec<Folder>> {
        Ok(self.folders().to_vec())
    }

    fn list_sheets_in_folder(&self, folder_id: i64) -> KeeperResult<Vec<Sheet>> {
        Ok(self.sheets_in_folder(folder_id))
    }

    fn find_folder_by_name(&self, name: &str) -> KeeperResult<Folder> {
        self.folder_by_name(name).cloned()
    }

    fn find_sheet_by_alias(&self, alias: &str) -> KeeperResult<Sheet> {
        self.sheet_by_alias(alias).cloned()
    }

    fn add_folder(&mut self, name: &str) -> KeeperResult<i64> {
        Catalog::add_folder(self, name)
    }

    fn add_sheet(&mut self, folder: &str, name: &str, alias: &str, body: &str) -> KeeperResult<i64> {
        Catalog::add_sheet(self, folder, name, alias, body)
    }

    fn remove_folder_by_id(&mut self, id: i64) -> KeeperResult<()> {
        self.remove_folder(id).map(|_| ())
    }

    fn remove_folder_cascade(&mut self, id: i64) -> KeeperResult<usize> {
        Catalog::remove_folder_cascade(self, id)
    }

    fn remove_sheet_by_id(&mut self, id: i64) -> KeeperResult<()> {
        self.remove_sheet(id).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::KeeperError;

    #[test]
    fn test_remove_by_name_and_alias() {
        let mut catalog = Catalog::default();
        catalog.add_folder("work").unwrap();
        catalog.add_sheet("work", "standup", "su", "body").unwrap();

        Store::remove_sheet_by_alias(&mut catalog, "su").unwrap();
        Store::remove_folder_by_name(&mut catalog, "work").unwrap();
        assert!(catalog.list_folders().unwrap().is_empty());
    }

    #[test]
    fn test_remove_by_unknown_name() {
        let mut catalog = Catalog::default();
        let err = Store::remove_folder_by_name(&mut catalog, "ghost").unwrap_err();
        assert!(matches!(err, KeeperError::NotFound { entity: "folder", .. }));
    }
}
