use contracts::dashboards::d400_sales_analytics::SalesAnalytics;
use contracts::domain::a101_product::aggregate::Product;
use contracts::domain::a105_sale::aggregate::Sale;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::summary_cards::SummaryCards;
use super::top_products::TopProductsTable;
use super::trend_chart::TrendChart;
use crate::domain::a101_product::api as product_api;
use crate::domain::a105_sale::api;
use crate::domain::a105_sale::ui::details::SaleDetails;
use crate::shared::config::app_config;
use crate::shared::date_utils::{format_long_date, today};
use crate::shared::icons::icon;
use crate::shared::list_utils::{confirm, sort_newest_first};
use crate::shared::modal::Modal;
use crate::shared::number_format::{format_count, format_money};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

/// Ledger order for the sales table. Analytics run over the snapshot as
/// fetched, so top-product ties follow the API order.
fn ledger_rows(sales: &[Sale]) -> Vec<Sale> {
    let mut rows = sales.to_vec();
    sort_newest_first(&mut rows, |s| s.date);
    rows
}

/// Sales overview: headline numbers, monthly revenue, best sellers and the
/// full sales ledger with create/edit/delete.
#[component]
pub fn SalesDashboard() -> impl IntoView {
    let sales: RwSignal<Vec<Sale>> = RwSignal::new(Vec::new());
    let products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let show_modal = RwSignal::new(false);
    let editing: RwSignal<Option<Sale>> = RwSignal::new(None);

    // a failed fetch leaves the previous snapshot in place
    let load_sales = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_sales().await {
                Ok(data) => {
                    log::debug!("Loaded {} sales", data.len());
                    sales.set(data);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load sales: {}", e);
                    set_error.set(Some(format!("Could not load sales: {}", e.user_message())));
                }
            }
            set_loading.set(false);
        });
    };

    let load_products = move || {
        spawn_local(async move {
            match product_api::fetch_products().await {
                Ok(data) => products.set(data),
                Err(e) => log::warn!("Failed to load products for the sale form: {}", e),
            }
        });
    };

    let analytics = Memo::new(move |_| {
        let config = &app_config().analytics;
        sales.with(|all| {
            SalesAnalytics::compute(all, today(), config.trend_months, config.top_products)
        })
    });

    let rows = Memo::new(move |_| sales.with(|all| ledger_rows(all)));

    let open_edit = move |sale: Option<Sale>| {
        editing.set(sale);
        show_modal.set(true);
    };

    let delete_sale = move |sale: Sale| {
        if !confirm(&format!("Delete sale '{}'?", sale.name)) {
            return;
        }
        spawn_local(async move {
            match api::delete_sale(sale.id).await {
                Ok(()) => {
                    log::info!("Deleted sale {}", sale.id);
                    load_sales();
                }
                Err(e) => {
                    log::error!("Failed to delete sale {}: {}", sale.id, e);
                    set_error.set(Some(e.user_message()));
                }
            }
        });
    };

    let close_modal = Callback::new(move |_| show_modal.set(false));
    let on_saved = Callback::new(move |_| {
        show_modal.set(false);
        load_sales();
    });

    load_sales();
    load_products();

    view! {
        <PageFrame page_id="d400_sales_analytics--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{Sale::list_name()}</h1>
                    <Badge>{move || sales.with(|s| s.len().to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_edit(None)>
                        {icon("plus")}
                        " New sale"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            load_sales();
                            load_products();
                        }
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <SummaryCards summary=Signal::derive(move || analytics.get().summary) />

                <div class="dashboard-grid">
                    <TrendChart points=Signal::derive(move || analytics.get().trend) />
                    <TopProductsTable entries=Signal::derive(move || analytics.get().top_products) />
                </div>

                <section class="dashboard-panel">
                    <h2 class="dashboard-panel__title">"All sales"</h2>
                    <div class="table-wrapper">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Date"</th>
                                    <th class="table__header-cell">"Description"</th>
                                    <th class="table__header-cell">"Product"</th>
                                    <th class="table__header-cell table__header-cell--right">"Qty"</th>
                                    <th class="table__header-cell table__header-cell--right">"Unit price"</th>
                                    <th class="table__header-cell table__header-cell--right">"Revenue"</th>
                                    <th class="table__header-cell table__header-cell--actions"></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || rows.get().into_iter().map(|sale| {
                                    let revenue = format_money(sale.value());
                                    let for_edit = sale.clone();
                                    let for_delete = sale.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{format_long_date(sale.date)}</td>
                                            <td class="table__cell">{sale.name}</td>
                                            <td class="table__cell">{sale.product.name}</td>
                                            <td class="table__cell table__cell--right">{format_count(u64::from(sale.quantity))}</td>
                                            <td class="table__cell table__cell--right">{format_money(sale.product.unit_price)}</td>
                                            <td class="table__cell table__cell--right">{revenue}</td>
                                            <td class="table__cell table__cell--actions">
                                                <button class="button button--icon" title="Edit" on:click=move |_| open_edit(Some(for_edit.clone()))>
                                                    {icon("edit")}
                                                </button>
                                                <button class="button button--icon button--danger" title="Delete" on:click=move |_| delete_sale(for_delete.clone())>
                                                    {icon("delete")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                    <Show when=move || !loading.get() && sales.with(|s| s.is_empty())>
                        <p class="empty-state">"No sales recorded yet."</p>
                    </Show>
                </section>
            </div>

            <Show when=move || show_modal.get()>
                {move || {
                    let sale = editing.get_untracked();
                    let title = if sale.is_some() { "Edit sale" } else { "New sale" };
                    view! {
                        <Modal title=title.to_string() on_close=close_modal>
                            <SaleDetails
                                sale=sale
                                products=products.get_untracked()
                                on_saved=on_saved
                                on_cancel=close_modal
                            />
                        </Modal>
                    }
                }}
            </Show>
        </PageFrame>
    }
}
