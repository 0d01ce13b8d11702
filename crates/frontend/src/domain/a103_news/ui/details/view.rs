use contracts::domain::a103_news::aggregate::News;
use leptos::prelude::*;
use thaw::*;

use super::view_model::NewsDetailsViewModel;
use crate::shared::icons::icon;

#[component]
pub fn NewsDetails(
    news: Option<News>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = NewsDetailsViewModel::new(news.as_ref());
    let submit_label = if vm.is_edit_mode() { " Save" } else { " Publish" };

    view! {
        <div class="details-container news-details">
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="news-title">"Title"</label>
                    <input
                        type="text"
                        id="news-title"
                        prop:value=move || vm.form.get().title
                        on:input=move |ev| vm.form.update(|f| f.title = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="news-date">"Date"</label>
                    <input
                        type="date"
                        id="news-date"
                        prop:value=move || vm.form.get().date
                        on:input=move |ev| vm.form.update(|f| f.date = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="news-description">"Body"</label>
                    <textarea
                        id="news-description"
                        rows="6"
                        prop:value=move || vm.form.get().description
                        on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(on_saved)
                    disabled=Signal::derive(move || vm.saving.get() || !vm.is_form_valid())
                >
                    {icon("save")}
                    {submit_label}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    {icon("x")}
                    " Cancel"
                </Button>
            </div>
        </div>
    }
}
