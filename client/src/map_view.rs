use leptos::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

use prefmap_shared::boundary::{FeatureCollection, RegionShape, project_regions};
use prefmap_shared::{MapType, registry};

use crate::app::{CurrentMap, Hovered, MousePos, Preferences, SelectedLevel, rate_region};
use crate::colors::region_fill;

pub(crate) const VIEW_WIDTH: f64 = 960.0;
pub(crate) const VIEW_HEIGHT: f64 = 600.0;
const BOUNDARY_URL_PREFIX: &str = "/geo";
pub(crate) const MAP_SVG_ID: &str = "prefmap-svg";

const STROKE_IDLE: &str = "#ffffff";
const STROKE_HOVER: &str = "#374151";

#[derive(Clone)]
enum BoundaryLoad {
    Loading,
    Ready(Arc<Vec<RegionShape>>),
    Failed(String),
}

pub async fn fetch_boundary(map: MapType) -> Result<FeatureCollection, String> {
    let url = format!("{BOUNDARY_URL_PREFIX}/{}", map.boundary_file());
    let resp = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json::<FeatureCollection>()
        .await
        .map_err(|e| format!("parse error: {e}"))
}

/// SVG map of the active dataset. Clicks apply the selected level.
#[component]
pub fn MapView() -> impl IntoView {
    let CurrentMap(current_map) = expect_context();

    let load = RwSignal::new(BoundaryLoad::Loading);
    let retry_nonce = RwSignal::new(0u64);
    let cache: StoredValue<HashMap<MapType, Arc<Vec<RegionShape>>>> =
        StoredValue::new(HashMap::new());

    Effect::new(move || {
        let map = current_map.get();
        retry_nonce.track();

        if let Some(shapes) = cache.with_value(|c| c.get(&map).cloned()) {
            load.set(BoundaryLoad::Ready(shapes));
            return;
        }
        load.set(BoundaryLoad::Loading);

        spawn_local(async move {
            let result = fetch_boundary(map).await;
            // The user may have switched maps while this was in flight.
            if current_map.get_untracked() != map {
                return;
            }
            match result {
                Ok(collection) => {
                    let shapes = Arc::new(project_regions(
                        registry(map),
                        &collection,
                        VIEW_WIDTH,
                        VIEW_HEIGHT,
                    ));
                    tracing::debug!(map = %map, regions = shapes.len(), "boundary loaded");
                    cache.update_value(|c| {
                        c.insert(map, Arc::clone(&shapes));
                    });
                    load.set(BoundaryLoad::Ready(shapes));
                }
                Err(e) => {
                    web_sys::console::warn_1(
                        &format!("[prefmap] failed to load {map} boundaries: {e}").into(),
                    );
                    load.set(BoundaryLoad::Failed(e));
                }
            }
        });
    });

    let view_box = format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}");

    view! {
        <div style="position: relative; background: #ffffff; border: 1px solid #e5e7eb; border-radius: 12px; box-shadow: 0 10px 25px rgba(0,0,0,0.08); padding: 12px; overflow: hidden;">
            <svg
                id=MAP_SVG_ID
                xmlns="http://www.w3.org/2000/svg"
                viewBox=view_box
                style="width: 100%; height: auto; display: block;"
            >
                {move || match load.get() {
                    BoundaryLoad::Ready(shapes) => {
                        let map = current_map.get_untracked();
                        shapes
                            .iter()
                            .map(|shape| view! { <RegionPath map=map region_id=shape.id path=shape.path.clone() /> })
                            .collect_view()
                            .into_any()
                    }
                    BoundaryLoad::Loading | BoundaryLoad::Failed(_) => ().into_any(),
                }}
            </svg>
            {move || match load.get() {
                BoundaryLoad::Loading => view! {
                    <div style="position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; color: #6b7280; font-size: 0.95rem;">
                        "Loading map\u{2026}"
                    </div>
                }.into_any(),
                BoundaryLoad::Failed(message) => view! {
                    <div style="position: absolute; inset: 0; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 10px; color: #b91c1c; font-size: 0.9rem;">
                        <span>{format!("Could not load the map: {message}")}</span>
                        <button
                            style="padding: 6px 16px; border-radius: 8px; border: 1px solid #fca5a5; background: #fef2f2; color: #b91c1c; cursor: pointer; font-weight: 600;"
                            on:click=move |_| retry_nonce.update(|n| *n += 1)
                        >
                            "Retry"
                        </button>
                    </div>
                }.into_any(),
                BoundaryLoad::Ready(_) => ().into_any(),
            }}
            {move || (current_map.get() == MapType::Usa).then(|| view! { <DcButton /> })}
            <Tooltip />
        </div>
    }
}

#[component]
fn RegionPath(map: MapType, region_id: &'static str, path: String) -> impl IntoView {
    let Preferences(preferences) = expect_context();
    let SelectedLevel(selected) = expect_context();
    let Hovered(hovered) = expect_context();
    let MousePos(mouse_pos) = expect_context();

    let level = Memo::new(move |_| preferences.with(|store| store.preference_of(map, region_id)));
    let is_hovered = move || hovered.with(|h| h.as_deref() == Some(region_id));

    view! {
        <path
            d=path
            fill=move || region_fill(level.get()).0
            fill-opacity=move || region_fill(level.get()).1.to_string()
            stroke=move || if is_hovered() { STROKE_HOVER } else { STROKE_IDLE }
            stroke-width=move || if is_hovered() { "1.5" } else { "0.75" }
            style="cursor: pointer; transition: fill 0.15s ease;"
            on:click=move |_| rate_region(preferences, map, region_id, selected.get_untracked())
            on:mouseenter=move |_| hovered.set(Some(region_id.to_owned()))
            on:mouseleave=move |_| hovered.set(None)
            on:mousemove=move |e| mouse_pos.set((e.client_x() as f64, e.client_y() as f64))
        />
    }
}

/// DC is too small to click on the state map.
#[component]
fn DcButton() -> impl IntoView {
    const DC: &str = "DC";
    let Preferences(preferences) = expect_context();
    let SelectedLevel(selected) = expect_context();
    let Hovered(hovered) = expect_context();
    let MousePos(mouse_pos) = expect_context();

    let background = move || {
        region_fill(preferences.with(|store| store.preference_of(MapType::Usa, DC))).0
    };

    view! {
        <button
            style="position: absolute; top: 50%; right: 8%; transform: translateY(-50%); z-index: 10; padding: 6px 14px; font-size: 0.85rem; font-weight: 700; color: #ffffff; border: 2px solid #ffffff; border-radius: 12px; cursor: pointer; box-shadow: 0 2px 6px rgba(0,0,0,0.15);"
            style:background=background
            on:click=move |_| rate_region(preferences, MapType::Usa, DC, selected.get_untracked())
            on:mouseenter=move |e| {
                hovered.set(Some(DC.to_owned()));
                mouse_pos.set((e.client_x() as f64, e.client_y() as f64));
            }
            on:mouseleave=move |_| hovered.set(None)
        >
            "\u{1F3DB}\u{FE0F} DC"
        </button>
    }
}

/// Follows the cursor while a region is hovered.
#[component]
fn Tooltip() -> impl IntoView {
    let CurrentMap(current_map) = expect_context();
    let Preferences(preferences) = expect_context();
    let Hovered(hovered) = expect_context();
    let MousePos(mouse_pos) = expect_context();

    let info = Memo::new(move |_| {
        let id = hovered.get()?;
        let map = current_map.get();
        let name = registry(map).name(&id).to_owned();
        let level = preferences.with(|store| store.preference_of(map, &id));
        Some((name, level))
    });

    move || {
        let Some((name, level)) = info.get() else {
            return ().into_any();
        };
        let (x, y) = mouse_pos.get();
        let (color, _) = region_fill(level);
        let label = level.map_or("Not rated", |l| l.label());
        view! {
            <div
                style:left=format!("{}px", x + 14.0)
                style:top=format!("{}px", y - 10.0)
                style="position: fixed; pointer-events: none; z-index: 100; background: #111827; color: #f9fafb; border-radius: 6px; padding: 6px 10px; font-size: 0.8rem; box-shadow: 0 4px 12px rgba(0,0,0,0.25); display: flex; align-items: center; gap: 8px;"
            >
                <span style={format!("width: 10px; height: 10px; border-radius: 50%; background: {color};")} />
                <span style="font-weight: 600;">{name}</span>
                <span style="color: #9ca3af;">{label}</span>
            </div>
        }
        .into_any()
    }
}
