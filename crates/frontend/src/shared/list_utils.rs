/// Shared helpers for record lists (search, view mode, delete confirmation)
use chrono::NaiveDate;
use leptos::prelude::*;
use thaw::*;

/// Trait for records that can be matched by the list search box
pub trait Searchable {
    /// Whether the record matches an already lower-cased, trimmed query
    fn matches_filter(&self, query: &str) -> bool;
}

/// Case-insensitive substring match of `query` against any of `fields`
pub fn any_field_contains(fields: &[&str], query: &str) -> bool {
    fields.iter().any(|f| f.to_lowercase().contains(query))
}

/// Records matching `filter`; everything when the filter is blank
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let query = filter.trim().to_lowercase();
    if query.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(&query))
        .cloned()
        .collect()
}

/// Stable sort by date, most recent first
pub fn sort_newest_first<T, F>(items: &mut [T], date_of: F)
where
    F: Fn(&T) -> NaiveDate,
{
    items.sort_by(|a, b| date_of(b).cmp(&date_of(a)));
}

/// Table or card layout of a list page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewMode {
    Table,
    #[default]
    Card,
}

/// Browser confirm dialog; `false` when there is no window
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Search box bound to `value`
#[component]
pub fn SearchInput(
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <Input value=value placeholder=placeholder />
        </div>
    }
}

/// Table/card switch
#[component]
pub fn ViewModeToggle(mode: RwSignal<ViewMode>) -> impl IntoView {
    let class_for = move |target: ViewMode| {
        move || {
            if mode.get() == target {
                "button button--secondary button--active"
            } else {
                "button button--secondary"
            }
        }
    };

    view! {
        <div class="view-mode-toggle">
            <button class=class_for(ViewMode::Table) title="Table view" on:click=move |_| mode.set(ViewMode::Table)>
                {super::icons::icon("table")}
            </button>
            <button class=class_for(ViewMode::Card) title="Card view" on:click=move |_| mode.set(ViewMode::Card)>
                {super::icons::icon("grid")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item(&'static str, &'static str);

    impl Searchable for Item {
        fn matches_filter(&self, query: &str) -> bool {
            any_field_contains(&[self.0, self.1], query)
        }
    }

    #[test]
    fn test_sort_newest_first_is_stable() {
        let d = |m, day| NaiveDate::from_ymd_opt(2024, m, day).unwrap();
        let mut items = vec![("a", d(1, 5)), ("b", d(3, 1)), ("c", d(1, 5)), ("d", d(2, 9))];
        sort_newest_first(&mut items, |i| i.1);
        let order: Vec<&str> = items.iter().map(|i| i.0).collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_blank_filter_keeps_everything() {
        let items = vec![Item("Laptop", "x"), Item("TV", "y")];
        assert_eq!(filter_list(&items, "   "), items);
    }

    #[test]
    fn test_filter_is_case_insensitive_over_all_fields() {
        let items = vec![Item("Laptop", "portable"), Item("TV", "55 inch"), Item("Fan", "Portable cooling")];
        let found = filter_list(&items, " PORTABLE ");
        assert_eq!(found, vec![Item("Laptop", "portable"), Item("Fan", "Portable cooling")]);
    }
}
