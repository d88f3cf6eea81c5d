use web_sys::window;

const ROLE_KEY: &str = "role";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the selected role tag to localStorage
pub fn save_role(role: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(ROLE_KEY, role);
    }
}

/// Role tag persisted by a previous session, blank values count as absent
pub fn get_role() -> Option<String> {
    get_local_storage()?
        .get_item(ROLE_KEY)
        .ok()?
        .filter(|r| !r.trim().is_empty())
}

pub fn clear_role() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ROLE_KEY);
    }
}
