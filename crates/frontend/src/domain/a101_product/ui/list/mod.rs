use contracts::domain::a101_product::aggregate::Product;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a101_product::api;
use crate::domain::a101_product::ui::details::ProductDetails;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    any_field_contains, confirm, filter_list, SearchInput, Searchable, ViewMode, ViewModeToggle,
};
use crate::shared::modal::Modal;
use crate::shared::number_format::{format_count, format_money};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

impl Searchable for Product {
    fn matches_filter(&self, query: &str) -> bool {
        any_field_contains(&[self.name.as_str(), self.description.as_str()], query)
    }
}

fn stock_label(stock: u32) -> String {
    match stock {
        0 => "Out of stock".to_string(),
        n => format!("{} in stock", format_count(u64::from(n))),
    }
}

#[component]
pub fn ProductList() -> impl IntoView {
    let products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let show_modal = RwSignal::new(false);
    let editing: RwSignal<Option<Product>> = RwSignal::new(None);
    let search = RwSignal::new(String::new());
    let view_mode = RwSignal::new(ViewMode::Table);

    let load_data = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(data) => {
                    products.set(data);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load products: {}", e);
                    set_error.set(Some(format!("Could not load products: {}", e.user_message())));
                }
            }
            set_loading.set(false);
        });
    };

    let open_create = move || {
        editing.set(None);
        show_modal.set(true);
    };

    let open_edit = move |product: Product| {
        editing.set(Some(product));
        show_modal.set(true);
    };

    let delete_product = move |product: Product| {
        if !confirm(&format!("Delete product '{}'?", product.name)) {
            return;
        }
        spawn_local(async move {
            match api::delete_product(product.id).await {
                Ok(()) => {
                    log::info!("Deleted product {}", product.id);
                    load_data();
                }
                Err(e) => {
                    log::error!("Failed to delete product {}: {}", product.id, e);
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

    let visible = Memo::new(move |_| products.with(|all| filter_list(all, &search.get())));

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
                            <th class="table__header-cell table__header-cell--right">"Stock"</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible.get().into_iter().map(|product| {
                            let for_edit = product.clone();
                            let for_delete = product.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{product.name}</td>
                                    <td class="table__cell table__cell--muted">{product.description}</td>
                                    <td class="table__cell table__cell--right">{format_money(product.unit_price)}</td>
                                    <td class="table__cell table__cell--right">{format_count(u64::from(product.stock))}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button class="button button--icon" title="Edit" on:click=move |_| open_edit(for_edit.clone())>
                                            {icon("edit")}
                                        </button>
                                        <button class="button button--icon button--danger" title="Delete" on:click=move |_| delete_product(for_delete.clone())>
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
                {move || visible.get().into_iter().map(|product| {
                    let for_edit = product.clone();
                    let for_delete = product.clone();
                    let badge_color = if product.stock > 0 { BadgeColor::Success } else { BadgeColor::Danger };
                    view! {
                        <div class="card">
                            <div class="card__header">
                                <h3 class="card__title">{product.name}</h3>
                                <Badge appearance=BadgeAppearance::Tint color=badge_color>
                                    {stock_label(product.stock)}
                                </Badge>
                            </div>
                            <p class="card__price">{format_money(product.unit_price)}</p>
                            <p class="card__text">{product.description}</p>
                            <div class="card__actions">
                                <button class="button button--secondary" on:click=move |_| open_edit(for_edit.clone())>
                                    {icon("edit")}
                                    " Edit"
                                </button>
                                <button class="button button--danger" on:click=move |_| delete_product(for_delete.clone())>
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
        <PageFrame page_id="a101_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{Product::list_name()}</h1>
                    <Badge>{move || products.with(|p| p.len().to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <ViewModeToggle mode=view_mode />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                        {icon("plus")}
                        " New product"
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
                    <p class="empty-state">"No products found."</p>
                </Show>
            </div>

            <Show when=move || show_modal.get()>
                {move || {
                    let product = editing.get_untracked();
                    let title = if product.is_some() { "Edit product" } else { "New product" };
                    view! {
                        <Modal title=title.to_string() on_close=close_modal>
                            <ProductDetails product=product on_saved=on_saved on_cancel=close_modal />
                        </Modal>
                    }
                }}
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_label() {
        assert_eq!(stock_label(0), "Out of stock");
        assert_eq!(stock_label(1200), "1,200 in stock");
    }
}
