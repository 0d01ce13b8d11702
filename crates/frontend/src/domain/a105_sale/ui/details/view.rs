use contracts::domain::a101_product::aggregate::Product;
use contracts::domain::a105_sale::aggregate::Sale;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use thaw::*;

use super::view_model::SaleDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;

#[component]
pub fn SaleDetails(
    sale: Option<Sale>,
    /// Products offered in the picker
    products: Vec<Product>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = SaleDetailsViewModel::new(sale.as_ref());
    let submit_label = if vm.is_edit_mode() { " Save" } else { " Record sale" };
    let products = StoredValue::new(products);

    let preview = move || {
        products
            .with_value(|all| vm.form.with(|f| f.preview_value(all)))
            .map(format_money)
    };

    view! {
        <div class="details-container sale-details">
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="sale-name">"Description"</label>
                    <input
                        type="text"
                        id="sale-name"
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="sale-product">"Product"</label>
                    <select
                        id="sale-product"
                        on:change=move |ev| vm.form.update(|f| f.product_id = event_target_value(&ev))
                    >
                        <option value="" disabled=true selected=move || vm.form.with(|f| f.product_id.is_empty())>
                            "Select a product"
                        </option>
                        {products.get_value().into_iter().map(|p| {
                            let value = p.id.as_string();
                            let is_selected = {
                                let value = value.clone();
                                move || vm.form.with(|f| f.product_id == value)
                            };
                            view! {
                                <option value=value selected=is_selected>
                                    {format!("{} ({})", p.name, format_money(p.unit_price))}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="sale-quantity">"Quantity"</label>
                        <input
                            type="number"
                            id="sale-quantity"
                            min="1"
                            prop:value=move || vm.form.get().quantity
                            on:input=move |ev| vm.form.update(|f| f.quantity = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="sale-date">"Date"</label>
                        <input
                            type="date"
                            id="sale-date"
                            prop:value=move || vm.form.get().date
                            on:input=move |ev| vm.form.update(|f| f.date = event_target_value(&ev))
                        />
                    </div>
                </div>

                {move || preview().map(|total| view! {
                    <p class="form-hint">"Total at current price: " <strong>{total}</strong></p>
                })}
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
