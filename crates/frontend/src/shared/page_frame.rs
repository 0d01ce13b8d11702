//! PageFrame: standard root wrapper for every routed page.
//!
//! Renders the shared header and footer around the page body and sets the
//! two metadata attributes described in `page_standard`.

use super::page_standard::*;
use crate::layout::footer::Footer;
use crate::layout::header::Header;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a101_product--list"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {}", page_id);
    debug_assert!(is_known_category(category), "bad page category: {}", category);

    let base_class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div class="app-layout">
            <Header />
            <main id=page_id class=full_class data-page-category=category>
                {children()}
            </main>
            <Footer />
        </div>
    }
}
