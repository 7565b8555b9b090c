//! Line-oriented operations behind the command surface.
//!
//! Each function performs one store call and returns either an id, a count,
//! or text ready to print. Nothing here touches stdout.

use crate::domain::{Folder, KeeperError, KeeperResult, Sheet, Store};
use chrono::{DateTime, Utc};

const LISTING_TIME_FMT: &str = "%Y-%m-%d %H:%M";

pub fn new_folder(store: &mut impl Store, name: &str) -> KeeperResult<i64> {
    let id = store.add_folder(name)?;
    tracing::info!(id, name, "folder created");
    Ok(id)
}

/// Removes a folder by name, returning how many sheets were removed with it.
///
/// Without `cascade` a folder that still owns sheets is rejected.
pub fn remove_folder(store: &mut impl Store, name: &str, cascade: bool) -> KeeperResult<usize> {
    let folder = store.find_folder_by_name(name)?;
    let removed = if cascade {
        store.remove_folder_cascade(folder.id)?
    } else {
        store.remove_folder_by_id(folder.id)?;
        0
    };
    tracing::info!(id = folder.id, name, cascade, sheets = removed, "folder removed");
    Ok(removed)
}

pub fn list_folders(store: &impl Store) -> KeeperResult<String> {
    let folders = store.list_folders()?;
    Ok(folder_table(&folders))
}

/// Checks everything about a new sheet that can be checked before its body
/// exists, so the editor is never opened for a request that would fail.
pub fn precheck_new_sheet(store: &impl Store, folder: &str, alias: &str) -> KeeperResult<()> {
    store.find_folder_by_name(folder)?;
    match store.find_sheet_by_alias(alias) {
        Ok(_) => Err(KeeperError::AliasInUse(alias.to_string())),
        Err(e) if e.is_not_found() => Ok(()),
        Err(e) => Err(e),
    }
}

pub fn new_sheet(store: &mut impl Store, folder: &str, name: &str, alias: &str, body: &str) -> KeeperResult<i64> {
    let id = store.add_sheet(folder, name, alias, body)?;
    tracing::info!(id, folder, alias, bytes = body.len(), "sheet created");
    Ok(id)
}

pub fn remove_sheet(store: &mut impl Store, alias: &str) -> KeeperResult<()> {
    store.remove_sheet_by_alias(alias)?;
    tracing::info!(alias, "sheet removed");
    Ok(())
}

pub fn list_sheets(store: &impl Store, folder: &str) -> KeeperResult<String> {
    let folder = store.find_folder_by_name(folder)?;
    let sheets = store.list_sheets_in_folder(folder.id)?;
    Ok(sheet_table(&sheets))
}

pub fn show_sheet(store: &impl Store, alias: &str) -> KeeperResult<String> {
    let sheet = store.find_sheet_by_alias(alias)?;
    Ok(format!(
        "{} ({}) created {}\n\n{}",
        sheet.name,
        sheet.alias,
        stamp(&sheet.created_at),
        sheet.body
    ))
}

fn folder_table(folders: &[Folder]) -> String {
    let rows = folders
        .iter()
        .map(|f| vec![f.id.to_string(), f.name.clone(), stamp(&f.created_at)])
        .collect::<Vec<_>>();
    render_table(&["ID", "NAME", "CREATED"], &rows)
}

fn sheet_table(sheets: &[Sheet]) -> String {
    let rows = sheets
        .iter()
        .map(|s| {
            vec![
                s.id.to_string(),
                s.name.clone(),
                s.alias.clone(),
                stamp(&s.created_at),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&["ID", "NAME", "ALIAS", "CREATED"], &rows)
}

fn stamp(at: &DateTime<Utc>) -> String {
    at.format(LISTING_TIME_FMT).to_string()
}

/// Left-aligned columns separated by two spaces; the last column is not padded.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header_row: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut out = String::new();
    for row in std::iter::once(&header_row).chain(rows) {
        let last = row.len().saturating_sub(1);
        let line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                if i == last {
                    cell.clone()
                } else {
                    format!("{:<width$}", cell, width = widths[i])
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::default();
        catalog.add_folder("work").unwrap();
        catalog.add_folder("home").unwrap();
        catalog.add_sheet("work", "standup", "su", "yesterday: parser").unwrap();
        catalog
    }

    #[test]
    fn test_new_folder_returns_id() {
        let mut store = catalog();
        assert_eq!(new_folder(&mut store, "ideas").unwrap(), 3);
    }

    #[test]
    fn test_remove_folder_without_cascade() {
        let mut store = catalog();
        assert!(matches!(
            remove_folder(&mut store, "work", false),
            Err(KeeperError::FolderNotEmpty { .. })
        ));
        assert_eq!(remove_folder(&mut store, "home", false).unwrap(), 0);
    }

    #[test]
    fn test_remove_folder_with_cascade() {
        let mut store = catalog();
        assert_eq!(remove_folder(&mut store, "work", true).unwrap(), 1);
        assert!(store.sheet_by_alias("su").is_err());
    }

    #[test]
    fn test_precheck_new_sheet() {
        let store = catalog();
        assert!(precheck_new_sheet(&store, "home", "gr").is_ok());
        assert!(matches!(
            precheck_new_sheet(&store, "home", "su"),
            Err(KeeperError::AliasInUse(_))
        ));
        assert!(precheck_new_sheet(&store, "nowhere", "gr").unwrap_err().is_not_found());
    }

    #[test]
    fn test_new_and_remove_sheet() {
        let mut store = catalog();
        let id = new_sheet(&mut store, "home", "groceries", "gr", "milk").unwrap();
        assert_eq!(store.sheet_by_alias("gr").unwrap().id, id);

        remove_sheet(&mut store, "gr").unwrap();
        assert!(remove_sheet(&mut store, "gr").unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_folders_table() {
        let table = list_folders(&catalog()).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID  NAME  CREATED"));
        assert!(lines[1].starts_with("1   work  "));
        assert!(lines[2].starts_with("2   home  "));
    }

    #[test]
    fn test_list_sheets_table() {
        let table = list_sheets(&catalog(), "work").unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ID  NAME     ALIAS  CREATED"));
        assert!(lines[1].starts_with("1   standup  su     "));
    }

    #[test]
    fn test_list_sheets_unknown_folder() {
        assert!(list_sheets(&catalog(), "ghost").unwrap_err().is_not_found());
    }

    #[test]
    fn test_show_sheet() {
        let text = show_sheet(&catalog(), "su").unwrap();
        assert!(text.starts_with("standup (su) created "));
        assert!(text.ends_with("\n\nyesterday: parser"));
    }

    #[test]
    fn test_render_table_empty_rows() {
        assert_eq!(render_table(&["ID", "NAME"], &[]), "ID  NAME\n");
    }
}
