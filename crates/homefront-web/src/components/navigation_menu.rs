//! Navigation menu: inline bar or stacked panel list

use homefront_core::navigation::DEFAULT_INLINE_GAP_PX;
use homefront_core::{layout_menu, MenuLayout, NavigationEntry, PresentationMode};
use leptos::prelude::*;
use leptos_router::components::A;

/// Renders navigation entries in one of two fixed layouts
///
/// A pure projection of `(entries, mode)` through [`layout_menu`]; no state,
/// no knowledge of session or locale.
#[component]
pub fn NavigationMenu(
    /// Entries in presentation order
    #[prop(into)]
    entries: Signal<Vec<NavigationEntry>>,
    /// Inline bar or stacked panel rows
    mode: PresentationMode,
    /// Spacing between inline entries
    #[prop(optional, into)]
    gap_px: Option<Signal<u16>>,
    /// Called with the destination of every activated entry
    #[prop(optional)]
    on_activate: Option<Callback<String>>,
) -> impl IntoView {
    let layout = Memo::new(move |_| {
        let gap = gap_px.map(|g| g.get()).unwrap_or(DEFAULT_INLINE_GAP_PX);
        layout_menu(&entries.get(), mode, gap)
    });

    move || render_layout(layout.get(), on_activate)
}

fn render_layout(layout: MenuLayout, on_activate: Option<Callback<String>>) -> AnyView {
    let activate = move |destination: String| {
        if let Some(callback) = on_activate {
            callback.run(destination);
        }
    };

    match layout.mode {
        PresentationMode::Stacked => {
            let class = layout.container_class();
            let rows = layout
                .rows
                .into_iter()
                .map(|row| {
                    let destination = row.destination.clone();
                    view! {
                        <li class="nav-row" class:nav-row-separated=row.separator_after>
                            <A
                                href=row.destination
                                attr:class="nav-row-link"
                                on:click=move |_| activate(destination.clone())
                            >
                                {row.label}
                            </A>
                        </li>
                    }
                })
                .collect_view();

            view! { <ul class=class>{rows}</ul> }.into_any()
        }
        PresentationMode::Inline => {
            let class = layout.container_class();
            let style = layout.container_style();
            let underline = layout.underline_hover;
            let links = layout
                .rows
                .into_iter()
                .map(|row| {
                    let destination = row.destination.clone();
                    view! {
                        <A
                            href=row.destination
                            attr:class=if underline { "nav-link nav-link-underline" } else { "nav-link" }
                            on:click=move |_| activate(destination.clone())
                        >
                            {row.label}
                        </A>
                    }
                })
                .collect_view();

            view! { <nav class=class style=style>{links}</nav> }.into_any()
        }
    }
}
