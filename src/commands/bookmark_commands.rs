use super::*;

fn changed_bookmarks<T>(state: &AppState, result: Result<T, ConfigError>) -> Result<T, String> {
    state.icon_fallbacks.clear_bookmarks();
    result.map_err(|err| err.to_string())
}

pub fn list_bookmark_folders(state: &AppState) -> Result<Vec<String>, String> {
    Ok(bookmarks::folders(state.session().bookmarks()))
}

/// `folder` defaults to every folder.
pub fn get_bookmark_view(
    state: &AppState,
    folder: Option<String>,
    query: Option<String>,
) -> Result<BookmarkView, String> {
    let folder = folder.unwrap_or_else(|| ALL_FOLDERS.to_string());
    let query = query.unwrap_or_default();

    Ok(state.session().bookmark_view(&folder, &query))
}

pub fn add_bookmark(state: &AppState, entry: BookmarkEntry) -> Result<(), String> {
    let result = state.session().add_bookmark(entry);
    changed_bookmarks(state, result)
}

pub fn edit_bookmark(
    state: &AppState,
    target: BookmarkEntry,
    patch: BookmarkPatch,
) -> Result<bool, String> {
    let result = state.session().edit_bookmark(&target, patch);
    match result {
        Ok(false) => Ok(false),
        other => changed_bookmarks(state, other),
    }
}

pub fn remove_bookmark(state: &AppState, target: BookmarkEntry) -> Result<bool, String> {
    let result = state.session().remove_bookmark(&target);
    match result {
        Ok(false) => Ok(false),
        other => changed_bookmarks(state, other),
    }
}

/// Canonical position of the entry a context menu was opened on, or `None`
/// when it is no longer in the collection.
pub fn bookmark_menu_target(state: &AppState, target: BookmarkEntry) -> Result<Option<usize>, String> {
    Ok(state.session().bookmark_position(&target))
}
