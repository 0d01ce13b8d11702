use contracts::domain::a102_service::aggregate::Service;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a102_service::api;
use crate::domain::a102_service::ui::details::ServiceDetails;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    any_field_contains, confirm, filter_list, SearchInput, Searchable, ViewMode, ViewModeToggle,
};
use crate::shared::modal::Modal;
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

impl Searchable for Service {
    fn matches_filter(&self, query: &str) -> bool {
        any_field_contains(&[self.name.as_str(), self.description.as_str()], query)
    }
}

#[component]
pub fn ServiceList() -> impl IntoView {
    let services: RwSignal<Vec<Service>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let show_modal = RwSignal::new(false);
    let editing: RwSignal<Option<Service>> = RwSignal::new(None);
    let search = RwSignal::new(String::new());
    let view_mode = RwSignal::new(ViewMode::Card);

    let load_data = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_services().await {
                Ok(data) => {
                    services.set(data);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load services: {}", e);
                    set_error.set(Some(format!("Could not load services: {}", e.user_message())));
                }
            }
            set_loading.set(false);
        });
    };

    let open_create = move || {
        editing.set(None);
        show_modal.set(true);
    };

    let open_edit = move |service: Service| {
        editing.set(Some(service));
        show_modal.set(true);
    };

    let delete_service = move |service: Service| {
        if !confirm(&format!("Delete service '{}'?", service.name)) {
            return;
        }
        spawn_local(async move {
            match api::delete_service(service.id).await {
                Ok(()) => {
                    log::info!("Deleted service {}", service.id);
                    load_data();
                }
                Err(e) => {
                    log::error!("Failed to delete service {}: {}", service.id, e);
                    set_error.set(Some(e.user_message()));
                }
            }
        });
    };

    let close_modal = Callback::new(move |_| show_modal.set(false));
    let on_saved = Callback::new(move |_| {
        show_modal.set(false);
        load_data();
    });

    let visible = Memo::new(move |_| services.with(|all| filter_list(all, &search.get())));

    load_data();

    let table_view = move || {
        view! {
            <div class="table-wrapper">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Description"</th>
                            <th class="table__header-cell table__header-cell--right">"Price"</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible.get().into_iter().map(|service| {
                            let for_edit = service.clone();
                            let for_delete = service.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{service.name}</td>
                                    <td class="table__cell table__cell--muted">{service.description}</td>
                                    <td class="table__cell table__cell--right">{format_money(service.price)}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button class="button button--icon" title="Edit" on:click=move |_| open_edit(for_edit.clone())>
                                            {icon("edit")}
                                        </button>
                                        <button class="button button--icon button--danger" title="Delete" on:click=move |_| delete_service(for_delete.clone())>
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        }
    };

    let card_view = move || {
        view! {
            <div class="card-grid">
                {move || visible.get().into_iter().map(|service| {
                    let for_edit = service.clone();
                    let for_delete = service.clone();
                    view! {
                        <div class="card">
                            <div class="card__header">
                                <h3 class="card__title">{service.name}</h3>
                            </div>
                            <p class="card__price">{format_money(service.price)}</p>
                            <p class="card__text">{service.description}</p>
                            <div class="card__actions">
                                <button class="button button--secondary" on:click=move |_| open_edit(for_edit.clone())>
                                    {icon("edit")}
                                    " Edit"
                                </button>
                                <button class="button button--danger" on:click=move |_| delete_service(for_delete.clone())>
                                    {icon("delete")}
                                    " Delete"
                                </button>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        }
    };

    view! {
        <PageFrame page_id="a102_service--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{Service::list_name()}</h1>
                    <Badge>{move || services.with(|p| p.len().to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <ViewModeToggle mode=view_mode />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                        {icon("plus")}
                        " New service"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <SearchInput value=search placeholder="Name or description..." />

                {move || match view_mode.get() {
                    ViewMode::Table => table_view().into_any(),
                    ViewMode::Card => card_view().into_any(),
                }}

                <Show when=move || !loading.get() && visible.with(|v| v.is_empty())>
                    <p class="empty-state">"No services found."</p>
                </Show>
            </div>

            <Show when=move || show_modal.get()>
                {move || {
                    let service = editing.get_untracked();
                    let title = if service.is_some() { "Edit service" } else { "New service" };
                    view! {
                        <Modal title=title.to_string() on_close=close_modal>
                            <ServiceDetails service=service on_saved=on_saved on_cancel=close_modal />
                        </Modal>
                    }
                }}
            </Show>
        </PageFrame>
    }
}
