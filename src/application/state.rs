//! Navigation state for the dashboard.
//!
//! [`App`] owns the cached folder list, the sheets of the selected folder and
//! the cursors over both. Every transition runs to completion on the caller's
//! thread; store failures are caught here, reported through
//! [`App::status_message`], and never leave the cursors out of range.

use crate::domain::{Folder, KeeperError, KeeperResult, Sheet, Store};

/// One of the two navigable lists. The detail pane follows the sheet cursor
/// and is never focused itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Folders,
    Sheets,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Normal navigation
    Browsing,
    /// Quit was requested; the event loop shuts down after observing this.
    Closing,
}

/// A state transition requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveNext,
    MovePrevious,
    SwitchPane,
    DeleteSelected,
    Quit,
}

/// Dashboard state over a [`Store`].
///
/// # Examples
///
/// ```
/// use keeper::application::{Action, App, Pane};
/// use keeper::domain::Catalog;
///
/// let mut catalog = Catalog::default();
/// catalog.add_folder("work").unwrap();
/// catalog.add_sheet("work", "standup", "su", "notes").unwrap();
///
/// let mut app = App::load(catalog).unwrap();
/// app.apply(Action::SwitchPane);
/// assert_eq!(app.active_pane(), Pane::Sheets);
/// assert_eq!(app.shown_sheet().unwrap().alias, "su");
/// ```
#[derive(Debug)]
pub struct App<S> {
    store: S,
    folders: Vec<Folder>,
    sheets: Vec<Sheet>,
    active_pane: Pane,
    folder_cursor: usize,
    sheet_cursor: Option<usize>,
    detail_open: bool,
    mode: AppMode,
    status_message: Option<String>,
}

impl<S: Store> App<S> {
    /// Loads every folder and the sheets of the first one.
    ///
    /// # Errors
    ///
    /// Any store failure here is returned as is; callers treat it as fatal.
    pub fn load(store: S) -> KeeperResult<Self> {
        let folders = store.list_folders()?;
        let sheets = match folders.first() {
            Some(folder) => store.list_sheets_in_folder(folder.id)?,
            None => Vec::new(),
        };
        tracing::debug!(folders = folders.len(), sheets = sheets.len(), "dashboard loaded");

        Ok(Self {
            store,
            folders,
            sheets,
            active_pane: Pane::Folders,
            folder_cursor: 0,
            sheet_cursor: None,
            detail_open: false,
            mode: AppMode::Browsing,
            status_message: None,
        })
    }

    /// Runs the transition bound to `action`.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::MoveNext => self.move_next(),
            Action::MovePrevious => self.move_previous(),
            Action::SwitchPane => self.switch_pane(),
            Action::DeleteSelected => self.delete_selected(),
            Action::Quit => self.quit(),
        }
    }

    /// Advances the cursor of the focused list, wrapping to the first item.
    pub fn move_next(&mut self) {
        self.step(true);
    }

    /// Moves the cursor of the focused list back, wrapping to the last item.
    pub fn move_previous(&mut self) {
        self.step(false);
    }

    /// Toggles focus between the folder and sheet lists.
    ///
    /// Focusing an empty sheet list does nothing. Focusing the sheet list
    /// selects its first sheet unless a sheet of the current folder is
    /// already selected.
    pub fn switch_pane(&mut self) {
        match self.active_pane {
            Pane::Folders => {
                if self.sheets.is_empty() {
                    return;
                }
                let cursor = match self.sheet_cursor {
                    Some(c) if c < self.sheets.len() => c,
                    _ => 0,
                };
                self.sheet_cursor = Some(cursor);
                self.detail_open = true;
                self.active_pane = Pane::Sheets;
            }
            Pane::Sheets => self.active_pane = Pane::Folders,
        }
        tracing::debug!(pane = ?self.active_pane, sheet_cursor = ?self.sheet_cursor, "switched pane");
    }

    /// Removes the item under the cursor of the focused list from the store,
    /// then from the cache at the same index.
    pub fn delete_selected(&mut self) {
        match self.active_pane {
            Pane::Folders => self.delete_folder(),
            Pane::Sheets => self.delete_sheet(),
        }
    }

    /// Enters [`AppMode::Closing`]; the event loop stops after observing it.
    pub fn quit(&mut self) {
        tracing::debug!("quit requested");
        self.mode = AppMode::Closing;
    }

    /// Drops the pending status message, if any.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Cached folders in creation order.
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// Cached sheets of the selected folder.
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// The list that receives cursor moves and deletes.
    pub fn active_pane(&self) -> Pane {
        self.active_pane
    }

    /// Index of the selected folder; 0 while the folder list is empty.
    pub fn folder_cursor(&self) -> usize {
        self.folder_cursor
    }

    /// Index of the selected sheet, or `None` while no sheet of the current
    /// folder is selected.
    ///
    /// A folder move clears the selection, and so does deleting the last
    /// remaining sheet: an emptied sheet list has no cursor at all rather
    /// than one parked at 0.
    pub fn sheet_cursor(&self) -> Option<usize> {
        self.sheet_cursor
    }

    /// Whether the detail pane shows the selected sheet.
    pub fn detail_open(&self) -> bool {
        self.detail_open
    }

    /// Current mode.
    pub fn mode(&self) -> AppMode {
        self.mode
    }

    /// True once quit was requested.
    pub fn is_closing(&self) -> bool {
        self.mode == AppMode::Closing
    }

    /// Message for the footer, pending until the next key press.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// The folder under the folder cursor.
    pub fn selected_folder(&self) -> Option<&Folder> {
        self.folders.get(self.folder_cursor)
    }

    /// The sheet rendered in the detail pane, if any.
    pub fn shown_sheet(&self) -> Option<&Sheet> {
        if !self.detail_open {
            return None;
        }
        self.sheet_cursor.and_then(|i| self.sheets.get(i))
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    fn into_store(self) -> S {
        self.store
    }

    fn step(&mut self, forward: bool) {
        match self.active_pane {
            Pane::Folders => {
                let len = self.folders.len();
                if len == 0 {
                    return;
                }
                let target = wrap(Some(self.folder_cursor), len, forward);
                self.select_folder(target);
            }
            Pane::Sheets => {
                let len = self.sheets.len();
                if len == 0 {
                    return;
                }
                self.sheet_cursor = Some(wrap(self.sheet_cursor, len, forward));
                self.detail_open = true;
                tracing::debug!(sheet_cursor = ?self.sheet_cursor, "moved sheet cursor");
            }
        }
    }

    /// Moves the folder cursor to `index` once that folder's sheets are fetched.
    fn select_folder(&mut self, index: usize) {
        let folder_id = self.folders[index].id;
        match self.store.list_sheets_in_folder(folder_id) {
            Ok(sheets) => {
                self.folder_cursor = index;
                self.sheets = sheets;
                self.sheet_cursor = None;
                self.detail_open = false;
                tracing::debug!(
                    folder_cursor = index,
                    folder_id,
                    sheets = self.sheets.len(),
                    "moved folder cursor"
                );
            }
            Err(e) => self.report("Loading sheets failed", e),
        }
    }

    fn delete_folder(&mut self) {
        let index = self.folder_cursor;
        let Some(folder) = self.folders.get(index) else {
            return;
        };
        let (id, name) = (folder.id, folder.name.clone());

        if let Err(e) = self.store.remove_folder_by_id(id) {
            self.report("Deleting folder failed", e);
            return;
        }

        self.folders.remove(index);
        self.folder_cursor = reposition(index, self.folders.len());
        self.sheets.clear();
        self.sheet_cursor = None;
        self.detail_open = false;
        self.status_message = Some(format!("Folder '{name}' removed"));
        tracing::info!(folder_id = id, folder_cursor = self.folder_cursor, "folder removed");

        // The removed folder's sheet list is gone; show the newly selected one's.
        if let Some(next) = self.folders.get(self.folder_cursor) {
            match self.store.list_sheets_in_folder(next.id) {
                Ok(sheets) => self.sheets = sheets,
                Err(e) => self.report("Loading sheets failed", e),
            }
        }
    }

    fn delete_sheet(&mut self) {
        let Some(index) = self.sheet_cursor.filter(|&i| i < self.sheets.len()) else {
            return;
        };
        let id = self.sheets[index].id;

        if let Err(e) = self.store.remove_sheet_by_id(id) {
            self.report("Deleting sheet failed", e);
            return;
        }

        let removed = self.sheets.remove(index);
        if self.sheets.is_empty() {
            self.sheet_cursor = None;
            self.detail_open = false;
            self.active_pane = Pane::Folders;
        } else {
            self.sheet_cursor = Some(reposition(index, self.sheets.len()));
        }
        self.status_message = Some(format!("Sheet '{}' removed", removed.alias));
        tracing::info!(sheet_id = id, sheet_cursor = ?self.sheet_cursor, "sheet removed");
    }

    fn report(&mut self, context: &str, err: KeeperError) {
        tracing::warn!(error = %err, "{context}");
        self.status_message = Some(format!("{context}: {err}"));
    }
}

/// Next or previous index in a list of `len > 0` items, wrapping at both ends.
/// No current selection counts as sitting just before the first item.
fn wrap(current: Option<usize>, len: usize, forward: bool) -> usize {
    match (current, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(c), true) => (c + 1) % len,
        (Some(0), false) => len - 1,
        (Some(c), false) => (c - 1).min(len - 1),
    }
}

/// Cursor after removing `index` from a list that now has `len` items.
fn reposition(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if index < len {
        index
    } else {
        len - 1
    }
}
