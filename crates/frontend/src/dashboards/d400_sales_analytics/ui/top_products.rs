use contracts::dashboards::d400_sales_analytics::TopProductEntry;
use leptos::prelude::*;

use crate::shared::number_format::{format_count, format_money};

/// Revenue ranking, best seller first
#[component]
pub fn TopProductsTable(#[prop(into)] entries: Signal<Vec<TopProductEntry>>) -> impl IntoView {
    view! {
        <section class="dashboard-panel">
            <h2 class="dashboard-panel__title">"Top products"</h2>
            <Show
                when=move || entries.with(|e| !e.is_empty())
                fallback=|| view! { <p class="empty-state">"No sales recorded yet."</p> }
            >
                <table class="table__data">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"#"</th>
                            <th class="table__header-cell">"Product"</th>
                            <th class="table__header-cell table__header-cell--right">"Units"</th>
                            <th class="table__header-cell table__header-cell--right">"Revenue"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || entries.get().into_iter().enumerate().map(|(rank, entry)| view! {
                            <tr class="table__row">
                                <td class="table__cell">{rank + 1}</td>
                                <td class="table__cell">{entry.product_name}</td>
                                <td class="table__cell table__cell--right">{format_count(entry.total_quantity)}</td>
                                <td class="table__cell table__cell--right">{format_money(entry.total_revenue)}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
