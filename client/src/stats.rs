use leptos::prelude::*;

use prefmap_shared::{PreferenceLevel, PreferenceStats, registry};

use crate::app::{CurrentMap, Hovered, Preferences};

/// Progress, milestone, per-level breakdown and hover details for the active map.
#[component]
pub fn StatsPanel() -> impl IntoView {
    let CurrentMap(current_map) = expect_context();
    let Preferences(preferences) = expect_context();

    let stats = Memo::new(move |_| {
        let map = current_map.get();
        let total = registry(map).len();
        preferences.with(|store| PreferenceStats::compute(map, store.get(map), total))
    });

    view! {
        <section style="background: #ffffff; border: 1px solid #f3f4f6; border-radius: 14px; box-shadow: 0 12px 30px rgba(0,0,0,0.08); padding: 22px;">
            <h2 style="font-size: 1.2rem; font-weight: 700; margin: 0 0 14px;">"Your Preferences"</h2>
            <ProgressSection stats=stats />
            <div style="display: flex; flex-direction: column; gap: 10px;">
                {PreferenceLevel::ALL
                    .into_iter()
                    .rev()
                    .map(|level| view! { <LevelRow stats=stats level=level /> })
                    .collect_view()}
            </div>
            <HoveredRegion />
        </section>
    }
}

#[component]
fn ProgressSection(stats: Memo<PreferenceStats>) -> impl IntoView {
    view! {
        <div style="margin-bottom: 18px; padding: 14px; background: linear-gradient(90deg, #eff6ff, #faf5ff); border: 1px solid #bfdbfe; border-radius: 12px;">
            <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px; font-size: 0.85rem;">
                <span style="font-weight: 500; color: #1f2937;">"Progress"</span>
                <span style="font-weight: 700; color: #2563eb;">
                    {move || stats.with(|s| format!("{}/{} {}", s.rated, s.total, s.map.unit(s.total)))}
                </span>
            </div>
            <div style="width: 100%; height: 10px; background: #e5e7eb; border-radius: 999px; overflow: hidden; margin-bottom: 8px;">
                <div
                    style="height: 100%; background: linear-gradient(90deg, #3b82f6, #a855f7); border-radius: 999px; transition: width 0.4s ease-out;"
                    style:width=move || format!("{}%", stats.with(|s| s.progress_percent()))
                />
            </div>
            <div style="display: flex; justify-content: space-between; align-items: center; min-height: 28px;">
                <span style="font-size: 0.75rem; color: #374151;">
                    {move || format!("{}% complete", stats.with(|s| s.progress_percent()))}
                </span>
                {move || {
                    let (milestone, map) = stats.with(|s| (s.milestone(), s.map));
                    milestone.map(|m| view! {
                        <span style="display: flex; align-items: center; gap: 6px; background: #ffffff; padding: 3px 10px; border-radius: 999px; border: 1px solid #e5e7eb; box-shadow: 0 1px 2px rgba(0,0,0,0.05);">
                            <span style="font-size: 1rem;">{m.emoji()}</span>
                            <span style="font-size: 0.75rem; font-weight: 600; color: #1f2937;">{m.text(map)}</span>
                        </span>
                    })
                }}
            </div>
        </div>
    }
}

#[component]
fn LevelRow(stats: Memo<PreferenceStats>, level: PreferenceLevel) -> impl IntoView {
    let detail = move || {
        stats.with(|s| {
            let count = s.count(level);
            let mut text = format!("{count} {}", s.map.unit(count));
            if s.rated > 0 {
                text.push_str(&format!(" ({:.0}%)", s.level_percent(level)));
            }
            text
        })
    };

    view! {
        <div style="display: flex; align-items: center; justify-content: space-between; font-size: 0.9rem;">
            <span style="display: flex; align-items: center; gap: 10px;">
                <span style={format!("width: 14px; height: 14px; border-radius: 50%; border: 1px solid #d1d5db; background: {};", level.color())} />
                <span style="font-weight: 500; color: #1f2937;">{level.label()}</span>
            </span>
            <span style="color: #4b5563;">{detail}</span>
        </div>
    }
}

#[component]
fn HoveredRegion() -> impl IntoView {
    let CurrentMap(current_map) = expect_context();
    let Preferences(preferences) = expect_context();
    let Hovered(hovered) = expect_context();

    move || {
        let id = hovered.get()?;
        let map = current_map.get();
        let name = registry(map).name(&id).to_owned();
        let level = preferences.with(|store| store.preference_of(map, &id));
        let (label, color) = match level {
            Some(level) => (level.label(), level.color()),
            None => ("Not rated yet", "#6b7280"),
        };
        Some(view! {
            <div style="margin-top: 16px; padding-top: 12px; border-top: 1px solid #e5e7eb; font-size: 0.9rem;">
                <span style="font-weight: 600; color: #111827;">{name}</span>
                ": "
                <span style:color=color style="font-weight: 500;">{label}</span>
            </div>
        })
    }
}
