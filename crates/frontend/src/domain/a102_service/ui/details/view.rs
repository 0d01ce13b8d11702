use contracts::domain::a102_service::aggregate::Service;
use leptos::prelude::*;
use thaw::*;

use super::view_model::ServiceDetailsViewModel;
use crate::shared::icons::icon;

#[component]
pub fn ServiceDetails(
    service: Option<Service>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ServiceDetailsViewModel::new(service.as_ref());
    let submit_label = if vm.is_edit_mode() { " Save" } else { " Create" };

    view! {
        <div class="details-container service-details">
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="service-name">"Name"</label>
                    <input
                        type="text"
                        id="service-name"
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        placeholder="Service name"
                    />
                </div>

                <div class="form-group">
                    <label for="service-price">"Price"</label>
                    <input
                        type="text"
                        id="service-price"
                        inputmode="decimal"
                        prop:value=move || vm.form.get().price
                        on:input=move |ev| vm.form.update(|f| f.price = event_target_value(&ev))
                        placeholder="0.00"
                    />
                </div>

                <div class="form-group">
                    <label for="service-description">"Description"</label>
                    <textarea
                        id="service-description"
                        rows="3"
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
