use contracts::domain::a104_job::aggregate::Job;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a104_job::api;
use crate::domain::a104_job::ui::details::JobDetails;
use crate::shared::date_utils::format_long_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    any_field_contains, confirm, filter_list, sort_newest_first, SearchInput, Searchable,
};
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

impl Searchable for Job {
    fn matches_filter(&self, query: &str) -> bool {
        any_field_contains(&[self.title.as_str(), self.description.as_str()], query)
    }
}

#[component]
pub fn JobList() -> impl IntoView {
    let jobs: RwSignal<Vec<Job>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let show_modal = RwSignal::new(false);
    let editing: RwSignal<Option<Job>> = RwSignal::new(None);
    let search = RwSignal::new(String::new());

    let load_data = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_jobs().await {
                Ok(mut data) => {
                    sort_newest_first(&mut data, |j| j.published_on);
                    jobs.set(data);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load job openings: {}", e);
                    set_error.set(Some(format!("Could not load job openings: {}", e.user_message())));
                }
            }
            set_loading.set(false);
        });
    };

    let open_edit = move |item: Option<Job>| {
        editing.set(item);
        show_modal.set(true);
    };

    let delete_item = move |item: Job| {
        if !confirm(&format!("Delete '{}'?", item.title)) {
            return;
        }
        spawn_local(async move {
            match api::delete_job(item.id).await {
                Ok(()) => load_data(),
                Err(e) => {
                    log::error!("Failed to delete job opening {}: {}", item.id, e);
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

    let visible = Memo::new(move |_| jobs.with(|all| filter_list(all, &search.get())));

    load_data();

    view! {
        <PageFrame page_id="a104_job--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{Job::list_name()}</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_edit(None)>
                        {icon("plus")}
                        " New opening"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <SearchInput value=search />

                <div class="job-list">
                    {move || visible.get().into_iter().map(|item| {
                        let for_edit = item.clone();
                        let for_delete = item.clone();
                        view! {
                            <article class="article">
                                <header class="article__header">
                                    <h2 class="article__title">{item.title}</h2>
                                    <time class="article__date" datetime=item.published_on.to_string()>
                                        {format!("Posted {}", format_long_date(item.published_on))}
                                    </time>
                                </header>
                                <p class="article__body">{item.description}</p>
                                <div class="article__actions">
                                    <button class="button button--icon" title="Edit" on:click=move |_| open_edit(Some(for_edit.clone()))>
                                        {icon("edit")}
                                    </button>
                                    <button class="button button--icon button--danger" title="Delete" on:click=move |_| delete_item(for_delete.clone())>
                                        {icon("delete")}
                                    </button>
                                </div>
                            </article>
                        }
                    }).collect_view()}
                </div>

                <Show when=move || !loading.get() && visible.with(|v| v.is_empty())>
                    <p class="empty-state">"No open positions right now."</p>
                </Show>
            </div>

            <Show when=move || show_modal.get()>
                {move || {
                    let item = editing.get_untracked();
                    let title = if item.is_some() { "Edit opening" } else { "New opening" };
                    view! {
                        <Modal title=title.to_string() on_close=close_modal>
                            <JobDetails job=item on_saved=on_saved on_cancel=close_modal />
                        </Modal>
                    }
                }}
            </Show>
        </PageFrame>
    }
}
