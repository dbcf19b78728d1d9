//! Call-to-action buttons (login / signup)

use homefront_core::ActionEntry;
use leptos::prelude::*;
use leptos_router::components::A;

/// Row of call-to-action links; renders nothing for an empty list
#[component]
pub fn ActionButtons(
    #[prop(into)]
    actions: Signal<Vec<ActionEntry>>,
    /// Full-width column layout for the panel
    #[prop(default = false)]
    stacked: bool,
    #[prop(optional)]
    on_activate: Option<Callback<String>>,
) -> impl IntoView {
    let container_class = if stacked {
        "action-buttons action-buttons-stacked"
    } else {
        "action-buttons"
    };

    view! {
        <div class=container_class>
            {move || {
                actions
                    .get()
                    .into_iter()
                    .map(|action| {
                        let destination = action.destination.clone();
                        view! {
                            <A
                                href=action.destination
                                attr:class=action.variant.class()
                                on:click=move |_| {
                                    if let Some(callback) = on_activate {
                                        callback.run(destination.clone());
                                    }
                                }
                            >
                                {action.label}
                            </A>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
