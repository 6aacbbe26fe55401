use leptos::prelude::*;
use std::cell::RefCell;
use wasm_bindgen::JsCast;

use prefmap_shared::codec::load_from_query;
use prefmap_shared::{MapType, PreferenceLevel, PreferenceStore, SharedState};

use crate::controls::{ActionButtons, LevelSelector, MapSelector};
use crate::map_view::MapView;
use crate::stats::StatsPanel;

struct KeydownBinding {
    window: web_sys::Window,
    _handler: wasm_bindgen::closure::Closure<dyn Fn(web_sys::KeyboardEvent)>,
}

thread_local! {
    static KEYDOWN_BINDING: RefCell<Option<KeydownBinding>> = const { RefCell::new(None) };
}

/// Newtype wrappers so each signal gets its own Leptos context slot.
#[derive(Clone, Copy)]
pub(crate) struct CurrentMap(pub RwSignal<MapType>);
#[derive(Clone, Copy)]
pub(crate) struct Preferences(pub RwSignal<PreferenceStore>);
#[derive(Clone, Copy)]
pub(crate) struct SelectedLevel(pub RwSignal<Option<PreferenceLevel>>);
#[derive(Clone, Copy)]
pub(crate) struct Hovered(pub RwSignal<Option<String>>);
#[derive(Clone, Copy)]
pub(crate) struct MousePos(pub RwSignal<(f64, f64)>);

/// Read `?map=..&prefs=..` from the page URL.
fn initial_share_state() -> SharedState {
    let search = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default();
    let state = load_from_query(&search);
    tracing::info!(
        map = %state.map,
        source = ?state.source,
        rated = state.store.rated_count(state.map),
        "initial state loaded"
    );
    state
}

/// Picking the active level again deselects it.
pub(crate) fn toggle_level(selected: RwSignal<Option<PreferenceLevel>>, level: PreferenceLevel) {
    selected.update(|current| {
        *current = if *current == Some(level) {
            None
        } else {
            Some(level)
        };
    });
}

/// Apply the active level to a region. Nothing happens without an active level.
pub(crate) fn rate_region(
    preferences: RwSignal<PreferenceStore>,
    map: MapType,
    region_id: &str,
    level: Option<PreferenceLevel>,
) {
    if level.is_none() {
        return;
    }
    preferences.update(|store| {
        store.set_preference(map, region_id, level);
    });
}

/// Clear every map and drop the active level.
pub(crate) fn clear_all(
    preferences: RwSignal<PreferenceStore>,
    selected: RwSignal<Option<PreferenceLevel>>,
) {
    preferences.update(|store| store.clear(None));
    selected.set(None);
}

fn level_for_key(key: &str) -> Option<PreferenceLevel> {
    let digit = key.parse::<usize>().ok()?;
    PreferenceLevel::ALL.get(digit.checked_sub(1)?).copied()
}

#[component]
pub fn App() -> impl IntoView {
    let initial = initial_share_state();

    let current_map = RwSignal::new(initial.map);
    let preferences = RwSignal::new(initial.store);
    let selected_level = RwSignal::new(Some(PreferenceLevel::Never));
    let hovered: RwSignal<Option<String>> = RwSignal::new(None);
    let mouse_pos = RwSignal::new((0.0, 0.0));

    provide_context(CurrentMap(current_map));
    provide_context(Preferences(preferences));
    provide_context(SelectedLevel(selected_level));
    provide_context(Hovered(hovered));
    provide_context(MousePos(mouse_pos));

    // Hover belongs to the map that was showing.
    Effect::new(move || {
        current_map.track();
        hovered.set(None);
    });

    // Keyboard shortcuts: 1-5 pick a level, 0 or Escape deselects.
    Effect::new(move || {
        use wasm_bindgen::prelude::*;

        let Some(window) = web_sys::window() else {
            return;
        };

        KEYDOWN_BINDING.with(|slot| {
            if let Some(old) = slot.borrow_mut().take() {
                let _ = old.window.remove_event_listener_with_callback(
                    "keydown",
                    old._handler.as_ref().unchecked_ref(),
                );
            }
        });

        let handler =
            Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(move |e: web_sys::KeyboardEvent| {
                let target_tag = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
                    .map(|el| el.tag_name())
                    .unwrap_or_default();
                if target_tag == "INPUT" || target_tag == "TEXTAREA" {
                    return;
                }
                if e.ctrl_key() || e.meta_key() || e.alt_key() {
                    return;
                }

                let key = e.key();
                match key.as_str() {
                    "0" | "Escape" => selected_level.set(None),
                    other => {
                        if let Some(level) = level_for_key(other) {
                            toggle_level(selected_level, level);
                        }
                    }
                }
            });

        if window
            .add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref())
            .is_ok()
        {
            KEYDOWN_BINDING.with(|slot| {
                *slot.borrow_mut() = Some(KeydownBinding {
                    window: window.clone(),
                    _handler: handler,
                });
            });
        }
    });

    let title = move || {
        let map = current_map.get();
        format!("{} {} Living Preference Map", map.flag(), map.display_name())
    };

    view! {
        <div style="min-height: 100vh; background: linear-gradient(135deg, #eff6ff, #eef2ff 50%, #f3e8ff); padding: 16px; font-family: 'Inter', system-ui, sans-serif; color: #111827;">
            <div style="max-width: 1280px; margin: 0 auto;">
                <header style="text-align: center; margin-bottom: 24px;">
                    <h1 style="font-size: 2.1rem; font-weight: 700; margin: 0 0 12px;">{title}</h1>
                    <p style="font-size: 1.05rem; color: #374151; max-width: 640px; margin: 0 auto 16px;">
                        "Select a preference level, then click on the map to color-code the places you would (or would not) live."
                    </p>
                    <MapSelector />
                </header>
                <div style="display: grid; grid-template-columns: minmax(260px, 1fr) 3fr; gap: 24px; align-items: start;">
                    <aside style="display: flex; flex-direction: column; gap: 16px;">
                        <LevelSelector />
                        <ActionButtons />
                    </aside>
                    <main>
                        <MapView />
                        <Instructions />
                        <div style="margin-top: 20px;">
                            <StatsPanel />
                        </div>
                    </main>
                </div>
            </div>
        </div>
    }
}

/// One-line hint under the map naming the active level.
#[component]
fn Instructions() -> impl IntoView {
    let SelectedLevel(selected) = expect_context();
    let CurrentMap(current_map) = expect_context();

    view! {
        <p style="margin: 12px 0 0; text-align: center; color: #4b5563; font-size: 0.9rem; min-height: 1.2em;">
            {move || match selected.get() {
                Some(level) => format!(
                    "Click on {} to mark them as \"{}\"",
                    current_map.get().unit(2),
                    level.label()
                ),
                None => "Pick a preference level to start rating".to_owned(),
            }}
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::level_for_key;
    use prefmap_shared::PreferenceLevel;

    #[test]
    fn digit_keys_map_to_levels() {
        assert_eq!(level_for_key("1"), Some(PreferenceLevel::Never));
        assert_eq!(level_for_key("5"), Some(PreferenceLevel::Absolutely));
        assert_eq!(level_for_key("0"), None);
        assert_eq!(level_for_key("6"), None);
        assert_eq!(level_for_key("a"), None);
    }
}
