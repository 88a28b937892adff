//! Filter panel: search box, guest and price ranges, amenities and sort order.
//!
//! Text and number inputs are edited in a local copy and committed once typing
//! pauses for `INPUT_COMMIT_DELAY_MS`, or at once on Enter or blur. Checkboxes
//! and the sort select commit immediately. Committing hands a
//! new `FilterState` to `set_filters`; this component never mutates the one it
//! was given.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}}};
use gloo_timers::future::TimeoutFuture;

use common::{
    filter_state::{AMENITY_OPTIONS, FilterState, FilterTextField},
    venue_query::VenueSortKey,
};
use crate::data_definitions::edit_generation::EditGeneration;


const INPUT_COMMIT_DELAY_MS: u32 = 300;

#[derive(Clone, Copy)]
struct FilterPanelContext {
    pending_filters: Signal<FilterState>,
    commit: Callback<FilterState>,
}

#[component]
pub fn SearchFilters(filters: ReadSignal<FilterState>, set_filters: Callback<FilterState>) -> Element {
    let mut pending_filters = use_signal(|| filters.read().clone());
    // navigation does not reset local signals, so follow the URL state when it changes
    use_effect(move || {
        let new_filters = filters.read().clone();
        pending_filters.set(new_filters);
    });
    use_context_provider(|| FilterPanelContext { pending_filters, commit: set_filters });

    rsx! {
        div {
            id: "x-search-filters",
            class: "x-filter-panel",

            div {
                style: "margin-bottom: 24px;",
                label {
                    r#for: "search",
                    class: "x-filter-label",
                    "Search by name or city"
                }
                FilterTextInput {
                    field: FilterTextField::Search,
                    input_type: "text",
                    placeholder: "Enter venue name or city...",
                }
            }

            div {
                class: "x-filter-row",

                div {
                    label { r#for: "minGuests", class: "x-filter-label", "Guests" }
                    div {
                        style: "display: flex; gap: 8px;",
                        FilterTextInput { field: FilterTextField::MinGuests, input_type: "number", placeholder: "Min" }
                        FilterTextInput { field: FilterTextField::MaxGuests, input_type: "number", placeholder: "Max" }
                    }
                }

                div {
                    label { r#for: "minPrice", class: "x-filter-label", "Price Range" }
                    div {
                        style: "display: flex; gap: 8px;",
                        FilterTextInput { field: FilterTextField::MinPrice, input_type: "number", placeholder: "Min $" }
                        FilterTextInput { field: FilterTextField::MaxPrice, input_type: "number", placeholder: "Max $" }
                    }
                }

                div {
                    label { class: "x-filter-label", "Amenities" }
                    div {
                        style: "display: flex; flex-direction: column; gap: 8px;",
                        for amenity in AMENITY_OPTIONS {
                            AmenityCheckbox { key: "{amenity}", amenity: amenity.to_string() }
                        }
                    }
                }

                div {
                    label { r#for: "sort-by", class: "x-filter-label", "Sort by" }
                    SortSelect {}
                }
            }
        }
    }
}

#[component]
fn FilterTextInput(field: FilterTextField, input_type: String, placeholder: String) -> Element {
    let context = use_context::<FilterPanelContext>();
    let mut pending_filters = context.pending_filters;
    let commit = context.commit;

    let mut edit_generation = use_signal(EditGeneration::default);

    let value = use_memo(move || pending_filters.read().text_field(field).to_string());
    let on_input = move |event: Event<FormData>| {
        let next = pending_filters.peek().with_text_field(field, event.value());
        pending_filters.set(next);

        let ticket = edit_generation.write().bump();
        spawn(async move {
            TimeoutFuture::new(INPUT_COMMIT_DELAY_MS).await;
            if edit_generation.peek().is_latest(ticket) {
                commit.call(pending_filters.peek().clone());
            }
        });
    };
    let on_keydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            commit.call(pending_filters.peek().clone());
        }
    };
    let is_search = field == FilterTextField::Search;

    rsx! {
        div {
            class: "x-filter-input-wrapper",
            if is_search {
                Icon { icon: MdSearch, style: "width: 18px; height: 18px; color: #6B7280; flex-shrink: 0;" }
            }
            input {
                id: field.param_name(),
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                class: "x-filter-input",
                value: "{value}",
                oninput: on_input,
                onkeydown: on_keydown,
                onchange: move |_| {
                    commit.call(pending_filters.peek().clone());
                },
            }
        }
    }
}

#[component]
fn AmenityCheckbox(amenity: ReadSignal<String>) -> Element {
    let context = use_context::<FilterPanelContext>();
    let pending_filters = context.pending_filters;
    let commit = context.commit;
    let is_checked = use_memo(move || pending_filters.read().is_amenity_selected(&amenity.read()));

    rsx! {
        div {
            class: "x-amenity-checkbox",
            role: "checkbox",
            aria_checked: "{is_checked}",
            onclick: move |_e| {
                let next = pending_filters.peek().with_amenity_toggled(&amenity.read());
                commit.call(next);
            },

            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 20px; height: 20px; color: #2563EB; flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px; color: #374151; flex-shrink: 0;" }
            }
            span { style: "font-size: 14px;", "{amenity}" }
        }
    }
}

#[component]
fn SortSelect() -> Element {
    let context = use_context::<FilterPanelContext>();
    let pending_filters = context.pending_filters;
    let commit = context.commit;
    let selected = use_memo(move || pending_filters.read().sort_by);
    let selected_value = selected().as_str();

    rsx! {
        select {
            id: "sort-by",
            class: "x-filter-input",
            value: selected_value,
            onchange: move |event: Event<FormData>| {
                let sort_by = VenueSortKey::from_param(&event.value());
                commit.call(pending_filters.peek().with_sort_by(sort_by));
            },
            for sort_key in VenueSortKey::ALL {
                option {
                    key: "{sort_key:?}",
                    value: sort_key.as_str(),
                    selected: selected() == sort_key,
                    {sort_key.display_name()}
                }
            }
        }
    }
}
