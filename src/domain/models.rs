use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::{KeeperError, KeeperResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub id: i64,
    pub name: String,
    pub alias: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    /// Id of the owning folder.
    pub folder: i64,
}

/// All folders and sheets, kept in creation order.
///
/// Ids start at 1 and are never handed out twice, even after removals.
///
/// # Examples
///
/// ```
/// use keeper::domain::Catalog;
///
/// let mut catalog = Catalog::default();
/// let work = catalog.add_folder("work").unwrap();
/// catalog.add_sheet("work", "standup", "su", "notes").unwrap();
/// assert_eq!(catalog.sheets_in_folder(work).len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    folders: Vec<Folder>,
    sheets: Vec<Sheet>,
    next_folder_id: i64,
    next_sheet_id: i64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            folders: Vec::new(),
            sheets: Vec::new(),
            next_folder_id: 1,
            next_sheet_id: 1,
        }
    }
}

impl Catalog {
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn add_folder(&mut self, name: &str) -> KeeperResult<i64> {
        let name = validated(name, "folder name")?;
        if self.folders.iter().any(|f| f.name == name) {
            return Err(KeeperError::FolderExists(name.to_string()));
        }

        let id = self.next_folder_id;
        self.next_folder_id += 1;
        self.folders.push(Folder {
            id,
            name: name.to_string(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    pub fn folder_by_name(&self, name: &str) -> KeeperResult<&Folder> {
        self.folders
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| KeeperError::folder_not_found(name))
    }

    pub fn folder_by_id(&self, id: i64) -> KeeperResult<&Folder> {
        self.folders
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| KeeperError::folder_not_found(id))
    }

    /// Removes an empty folder. Folders that still own sheets are rejected;
    /// use [`Catalog::remove_folder_cascade`] to drop them together.
    pub fn remove_folder(&mut self, id: i64) -> KeeperResult<Folder> {
        let index = self.folder_index(id)?;
        let owned = self.sheets.iter().filter(|s| s.folder == id).count();
        if owned > 0 {
            return Err(KeeperError::FolderNotEmpty {
                name: self.folders[index].name.clone(),
                sheets: owned,
            });
        }
        Ok(self.folders.remove(index))
    }

    /// Removes a folder and every sheet it owns, returning how many sheets went with it.
    pub fn remove_folder_cascade(&mut self, id: i64) -> KeeperResult<usize> {
        let index = self.folder_index(id)?;
        let before = self.sheets.len();
        self.sheets.retain(|s| s.folder != id);
        self.folders.remove(index);
        Ok(before - self.sheets.len())
    }

    pub fn add_sheet(&mut self, folder: &str, name: &str, alias: &str, body: &str) -> KeeperResult<i64> {
        let folder_id = self.folder_by_name(folder)?.id;
        let name = validated(name, "sheet name")?;
        let alias = validated(alias, "alias")?;
        if self.sheets.iter().any(|s| s.alias == alias) {
            return Err(KeeperError::AliasInUse(alias.to_string()));
        }

        let id = self.next_sheet_id;
        self.next_sheet_id += 1;
        self.sheets.push(Sheet {
            id,
            name: name.to_string(),
            alias: alias.to_string(),
            body: body.to_string(),
            created_at: Utc::now(),
            folder: folder_id,
        });
        Ok(id)
    }

    pub fn sheet_by_alias(&self, alias: &str) -> KeeperResult<&Sheet> {
        self.sheets
            .iter()
            .find(|s| s.alias == alias)
            .ok_or_else(|| KeeperError::sheet_not_found(alias))
    }

    pub fn sheet_by_id(&self, id: i64) -> KeeperResult<&Sheet> {
        self.sheets
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| KeeperError::sheet_not_found(id))
    }

    pub fn remove_sheet(&mut self, id: i64) -> KeeperResult<Sheet> {
        let index = self
            .sheets
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| KeeperError::sheet_not_found(id))?;
        Ok(self.sheets.remove(index))
    }

    pub fn sheets_in_folder(&self, folder_id: i64) -> Vec<Sheet> {
        self.sheets
            .iter()
            .filter(|s| s.folder == folder_id)
            .cloned()
            .collect()
    }

    fn folder_index(&self, id: i64) -> KeeperResult<usize> {
        self.folders
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| KeeperError::folder_not_found(id))
    }
}

fn validated<'a>(value: &'a str, what: &'static str) -> KeeperResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(KeeperError::InvalidName(what));
    }
    Ok(trimmed)
}
