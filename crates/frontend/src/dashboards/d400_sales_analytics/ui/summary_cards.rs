use contracts::dashboards::d400_sales_analytics::SummaryStats;
use leptos::prelude::*;

use crate::shared::number_format::{format_count, format_money};

#[component]
pub fn SummaryCards(#[prop(into)] summary: Signal<SummaryStats>) -> impl IntoView {
    let card = |title: &'static str, value: Signal<String>| {
        view! {
            <div class="stat-card">
                <span class="stat-card__title">{title}</span>
                <span class="stat-card__value">{move || value.get()}</span>
            </div>
        }
    };

    view! {
        <div class="stat-cards">
            {card("Sales", Signal::derive(move || format_count(summary.get().total_sales as u64)))}
            {card("Revenue", Signal::derive(move || format_money(summary.get().total_revenue)))}
            {card("Units sold", Signal::derive(move || format_count(summary.get().total_units)))}
            {card("Average order", Signal::derive(move || format_money(summary.get().average_order_value)))}
        </div>
    }
}
