use contracts::domain::a104_job::aggregate::Job;
use leptos::prelude::*;
use thaw::*;

use super::view_model::JobDetailsViewModel;
use crate::shared::icons::icon;

#[component]
pub fn JobDetails(
    job: Option<Job>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = JobDetailsViewModel::new(job.as_ref());
    let submit_label = if vm.is_edit_mode() { " Save" } else { " Post" };

    view! {
        <div class="details-container job-details">
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="job-title">"Title"</label>
                    <input
                        type="text"
                        id="job-title"
                        prop:value=move || vm.form.get().title
                        on:input=move |ev| vm.form.update(|f| f.title = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="job-date">"Posted on"</label>
                    <input
                        type="date"
                        id="job-date"
                        prop:value=move || vm.form.get().date
                        on:input=move |ev| vm.form.update(|f| f.date = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="job-description">"Requirements"</label>
                    <textarea
                        id="job-description"
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
