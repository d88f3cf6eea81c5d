use contracts::system::navigation::normalize_path;
use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Shell-wide UI state: the current route and sidebar visibility.
///
/// The route lives in the URL hash (`#/kpi-dashboard`) so that reloads and
/// the browser back button keep working without a server-side router.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub path: RwSignal<String>,
    pub left_open: RwSignal<bool>,
}

fn current_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            path: RwSignal::new(normalize_path(&current_hash())),
            left_open: RwSignal::new(true),
        }
    }

    /// Follows `hashchange` events so back/forward update the view.
    pub fn init_router_integration(&self) {
        let path = self.path;
        let on_hash_change = Closure::<dyn FnMut()>::new(move || {
            let next = normalize_path(&current_hash());
            if path.get_untracked() != next {
                leptos::logging::log!("Route changed: {}", next);
                path.set(next);
            }
        });
        if let Some(w) = window() {
            let _ = w.add_event_listener_with_callback(
                "hashchange",
                on_hash_change.as_ref().unchecked_ref(),
            );
        }
        // the listener lives as long as the page
        on_hash_change.forget();
    }

    pub fn navigate(&self, route: &str) {
        let target = normalize_path(route);
        if let Some(w) = window() {
            let _ = w.location().set_hash(&target);
        }
        self.path.set(target);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
