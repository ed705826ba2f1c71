use super::*;

fn changed_links<T>(state: &AppState, result: Result<T, ConfigError>) -> Result<T, String> {
    state.icon_fallbacks.clear_links();
    result.map_err(|err| err.to_string())
}

pub fn load_config(state: &AppState) -> Result<ConfigDocument, String> {
    Ok(state.session().document().clone())
}

pub fn update_config(state: &AppState, patch: ConfigPatch) -> Result<ConfigDocument, String> {
    let rewrites_links = patch.quick_links.is_some() || patch.tab_groups.is_some();
    let rewrites_bookmarks = patch.bookmarks.is_some();

    let mut session = state.session();
    let result = session.update(patch);

    if rewrites_links {
        state.icon_fallbacks.clear_links();
    }
    if rewrites_bookmarks {
        state.icon_fallbacks.clear_bookmarks();
    }

    result
        .map(|_| session.document().clone())
        .map_err(|err| err.to_string())
}

pub fn get_links(state: &AppState) -> Result<LinkCollection, String> {
    Ok(state.session().links().clone())
}

pub fn migration_state(state: &AppState) -> Result<MigrationState, String> {
    Ok(state.session().migration_state())
}

pub fn add_tab_group(state: &AppState) -> Result<bool, String> {
    let result = state.session().add_group();
    match result {
        Ok(false) => Ok(false),
        other => changed_links(state, other),
    }
}

pub fn update_tab_group(state: &AppState, index: usize, patch: GroupPatch) -> Result<bool, String> {
    let result = state.session().update_group(index, patch);
    match result {
        Ok(false) => Ok(false),
        other => changed_links(state, other),
    }
}

pub fn delete_tab_group(state: &AppState, index: usize) -> Result<bool, String> {
    let result = state.session().delete_group(index);
    match result {
        Ok(false) => Ok(false),
        other => changed_links(state, other),
    }
}

pub fn add_quick_link(
    state: &AppState,
    group: Option<usize>,
    link: LinkEntry,
) -> Result<LinkCollection, String> {
    let mut session = state.session();
    let result = session.add_link(group, link);
    let links = session.links().clone();
    drop(session);

    changed_links(state, result).map(|_| links)
}

pub fn remove_quick_link(
    state: &AppState,
    group: Option<usize>,
    link_index: usize,
) -> Result<LinkCollection, String> {
    let mut session = state.session();
    let result = session.remove_link(group, link_index);
    let links = session.links().clone();
    drop(session);

    changed_links(state, result).map(|_| links)
}

pub fn mark_icon_failed(state: &AppState, position: EntryPosition) -> Result<(), String> {
    state.icon_fallbacks.mark_failed(position);
    Ok(())
}

pub fn uses_icon_fallback(state: &AppState, position: EntryPosition) -> Result<bool, String> {
    Ok(state.icon_fallbacks.uses_fallback(position))
}
