use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use prefmap_shared::{MapType, PreferenceLevel};

use crate::app::{CurrentMap, Preferences, SelectedLevel, clear_all, toggle_level};
use crate::colors::level_tint;
use crate::share::{COPIED_DISPLAY_MS, copy_text, current_share_url, download_svg};

const PANEL_STYLE: &str = "background: #ffffff; border: 1px solid #e5e7eb; border-radius: 12px; box-shadow: 0 10px 25px rgba(0,0,0,0.06); padding: 20px;";

/// Row of map type tabs.
#[component]
pub fn MapSelector() -> impl IntoView {
    let CurrentMap(current_map) = expect_context();
    let Preferences(preferences) = expect_context();

    view! {
        <nav style="display: flex; flex-wrap: wrap; justify-content: center; gap: 8px;">
            {MapType::ALL
                .into_iter()
                .map(|map| {
                    let active = move || current_map.get() == map;
                    let rated = move || preferences.with(|store| store.rated_count(map));
                    view! {
                        <button
                            style="padding: 8px 16px; border-radius: 999px; border: 2px solid; cursor: pointer; font-size: 0.9rem; font-weight: 600; transition: all 0.15s;"
                            style:border-color=move || if active() { "#3b82f6" } else { "#e5e7eb" }
                            style:background=move || if active() { "#eff6ff" } else { "#ffffff" }
                            style:color=move || if active() { "#1d4ed8" } else { "#374151" }
                            on:click=move |_| current_map.set(map)
                        >
                            {format!("{} {}", map.flag(), map.display_name())}
                            {move || {
                                let n = rated();
                                (n > 0).then(|| view! {
                                    <span style="margin-left: 6px; font-size: 0.75rem; color: #6b7280;">{format!("({n})")}</span>
                                })
                            }}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// The five preference levels. Picking the active one again deselects it.
#[component]
pub fn LevelSelector() -> impl IntoView {
    let SelectedLevel(selected) = expect_context();
    let CurrentMap(current_map) = expect_context();

    view! {
        <section style=PANEL_STYLE>
            <h2 style="font-size: 1.2rem; font-weight: 700; margin: 0 0 8px;">"Select Your Living Preference"</h2>
            <p style="color: #4b5563; font-size: 0.9rem; margin: 0 0 16px;">
                {move || format!(
                    "Choose a level, then click on {} to apply it. Click a level again to deselect.",
                    current_map.get().unit(2)
                )}
            </p>
            <div style="display: flex; flex-direction: column; gap: 10px;">
                {PreferenceLevel::ALL
                    .into_iter()
                    .enumerate()
                    .map(|(i, level)| {
                        let is_selected = move || selected.get() == Some(level);
                        view! {
                            <button
                                style="display: flex; align-items: center; gap: 12px; width: 100%; padding: 12px; border-radius: 10px; border: 2px solid; text-align: left; cursor: pointer; transition: all 0.15s;"
                                style:border-color=move || if is_selected() { level.color() } else { "#e5e7eb" }
                                style:background=move || if is_selected() { level_tint(level, 0.08) } else { "#ffffff".to_owned() }
                                title=format!("Shortcut: {}", i + 1)
                                on:click=move |_| toggle_level(selected, level)
                            >
                                <span style={format!("width: 22px; height: 22px; border-radius: 50%; border: 2px solid #ffffff; box-shadow: 0 1px 3px rgba(0,0,0,0.3); flex-shrink: 0; background: {};", level.color())} />
                                <span style="flex: 1;">
                                    <div style="font-weight: 600; color: #1f2937;">{level.label()}</div>
                                    <div style="font-size: 0.8rem; color: #4b5563;">{level.description()}</div>
                                </span>
                                {move || is_selected().then(|| view! {
                                    <span style="color: #2563eb; font-size: 0.8rem; font-weight: 600;">"Selected"</span>
                                })}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Share, download and clear.
#[component]
pub fn ActionButtons() -> impl IntoView {
    let CurrentMap(current_map) = expect_context();
    let Preferences(preferences) = expect_context();
    let SelectedLevel(selected) = expect_context();

    let show_copied = RwSignal::new(false);
    let has_preferences = move || preferences.with(|store| !store.is_empty());

    let on_share = move |_| {
        let url = preferences.with_untracked(|store| {
            current_share_url(current_map.get_untracked(), store)
        });
        let url = match url {
            Ok(url) => url,
            Err(e) => {
                web_sys::console::warn_1(&format!("[prefmap] share link failed: {e}").into());
                return;
            }
        };
        spawn_local(async move {
            match copy_text(&url).await {
                Ok(()) => {
                    show_copied.set(true);
                    gloo_timers::future::TimeoutFuture::new(COPIED_DISPLAY_MS).await;
                    show_copied.set(false);
                }
                Err(e) => {
                    web_sys::console::warn_1(&format!("[prefmap] copy failed: {e}").into());
                }
            }
        });
    };

    let on_download = move |_| {
        if let Err(e) = download_svg(current_map.get_untracked()) {
            web_sys::console::warn_1(&format!("[prefmap] svg export failed: {e}").into());
        }
    };

    let button_style = "position: relative; width: 100%; padding: 10px 16px; border-radius: 10px; border: none; cursor: pointer; font-weight: 600; font-size: 0.9rem;";

    view! {
        <section style="display: flex; flex-direction: column; gap: 8px;">
            {move || has_preferences().then(|| view! {
                <button
                    style=button_style
                    style:background="#dbeafe"
                    style:color="#1d4ed8"
                    on:click=on_share
                >
                    "\u{1F517} Share Your Map"
                    {move || show_copied.get().then(|| view! {
                        <span style="position: absolute; top: -8px; right: -8px; background: #22c55e; color: #ffffff; font-size: 0.7rem; padding: 2px 8px; border-radius: 999px;">
                            "Copied!"
                        </span>
                    })}
                </button>
            })}
            <button
                style=button_style
                style:background="#ede9fe"
                style:color="#6d28d9"
                on:click=on_download
            >
                "\u{1F5BC}\u{FE0F} Download Image"
            </button>
            {move || has_preferences().then(|| view! {
                <button
                    style=button_style
                    style:background="#fee2e2"
                    style:color="#b91c1c"
                    on:click=move |_| clear_all(preferences, selected)
                >
                    "\u{1F5D1}\u{FE0F} Clear All Preferences"
                </button>
            })}
        </section>
    }
}
