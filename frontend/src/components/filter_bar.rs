//! Side panel that edits a copy of the listing criteria and submits it as a new search.

use dioxus::{logger::tracing, prelude::*};

use catalog_client::{api::NamedKind, config::MAX_INGREDIENTS_SUGGESTIONS};
use common::{
    criteria_url::pretty_string,
    product::NamedObject,
    product_criteria::{ProductCriteria, SortBy, SortOption, SortOrder},
};

use crate::{
    api::catalog_api::use_catalog_client,
    components::named_suggestions::{SuggestionList, use_named_suggestions},
};

/// One id-list field of [`ProductCriteria`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSlot {
    IncludeIngredients,
    ExcludeIngredients,
    IncludeBrands,
    ExcludeBrands,
    Providers,
    Categories,
}

impl FilterSlot {
    pub const ALL: [FilterSlot; 6] = [
        FilterSlot::Categories,
        FilterSlot::IncludeBrands,
        FilterSlot::ExcludeBrands,
        FilterSlot::IncludeIngredients,
        FilterSlot::ExcludeIngredients,
        FilterSlot::Providers,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FilterSlot::IncludeIngredients => "With ingredients",
            FilterSlot::ExcludeIngredients => "Without ingredients",
            FilterSlot::IncludeBrands => "Brands",
            FilterSlot::ExcludeBrands => "Excluded brands",
            FilterSlot::Providers => "Shops",
            FilterSlot::Categories => "Categories",
        }
    }

    pub fn kind(&self) -> NamedKind {
        match self {
            FilterSlot::IncludeIngredients | FilterSlot::ExcludeIngredients => NamedKind::Ingredients,
            FilterSlot::IncludeBrands | FilterSlot::ExcludeBrands => NamedKind::Brands,
            FilterSlot::Providers => NamedKind::Providers,
            FilterSlot::Categories => NamedKind::Categories,
        }
    }

    fn field<'a>(&self, criteria: &'a ProductCriteria) -> &'a Option<Vec<String>> {
        match self {
            FilterSlot::IncludeIngredients => &criteria.ingredients_to_include_ids,
            FilterSlot::ExcludeIngredients => &criteria.ingredients_to_exclude_ids,
            FilterSlot::IncludeBrands => &criteria.brands_to_include_ids,
            FilterSlot::ExcludeBrands => &criteria.brands_to_exclude_ids,
            FilterSlot::Providers => &criteria.providers_ids,
            FilterSlot::Categories => &criteria.categories_ids,
        }
    }

    fn field_mut<'a>(&self, criteria: &'a mut ProductCriteria) -> &'a mut Option<Vec<String>> {
        match self {
            FilterSlot::IncludeIngredients => &mut criteria.ingredients_to_include_ids,
            FilterSlot::ExcludeIngredients => &mut criteria.ingredients_to_exclude_ids,
            FilterSlot::IncludeBrands => &mut criteria.brands_to_include_ids,
            FilterSlot::ExcludeBrands => &mut criteria.brands_to_exclude_ids,
            FilterSlot::Providers => &mut criteria.providers_ids,
            FilterSlot::Categories => &mut criteria.categories_ids,
        }
    }

    pub fn ids(&self, criteria: &ProductCriteria) -> Vec<String> {
        self.field(criteria).clone().unwrap_or_default()
    }

    pub fn add_id(&self, criteria: &mut ProductCriteria, id: &str) {
        let ids = self.field_mut(criteria).get_or_insert_with(Vec::new);
        if !ids.iter().any(|existing| existing == id) {
            ids.push(id.to_string());
        }
    }

    /// Removing the last id clears the field so it drops out of the URL.
    pub fn remove_id(&self, criteria: &mut ProductCriteria, id: &str) {
        let field = self.field_mut(criteria);
        if let Some(ids) = field {
            ids.retain(|existing| existing != id);
            if ids.is_empty() {
                *field = None;
            }
        }
    }
}

/// Every `order-option` token offered in the sort selector.
fn sort_choices() -> Vec<SortBy> {
    SortOption::ALL
        .into_iter()
        .flat_map(|option| [SortBy::new(option, SortOrder::Descending), SortBy::new(option, SortOrder::Ascending)])
        .collect()
}

fn sort_label(sort: &SortBy) -> String {
    let direction = match sort.order {
        SortOrder::Ascending => "ascending",
        SortOrder::Descending => "descending",
    };
    format!("{} ({})", sort.option.label(), direction)
}

/// Draft cleanup before submitting. Filter searches are classic searches, so
/// the AI prompt of the listing they start from is dropped.
fn finalize_draft(mut draft: ProductCriteria) -> ProductCriteria {
    draft.phrase = draft.phrase.map(|p| pretty_string(&p)).filter(|p| !p.is_empty());
    draft.query = None;
    draft.k_neighbours = None;
    draft
}

#[component]
pub fn FilterBar(original_criteria: ReadSignal<ProductCriteria>, on_search: Callback<ProductCriteria>) -> Element {
    let mut draft = use_signal(|| original_criteria.peek().clone());

    // the listing moved on (navigation, back / forward), start over from its criteria
    use_effect(move || {
        let original = original_criteria.read().clone();
        draft.set(original);
    });

    let submit = move |_: ()| {
        let criteria = finalize_draft(draft.read().clone());
        tracing::info!("filter search: {:?}", criteria);
        on_search.call(criteria);
    };

    let phrase = draft.read().phrase.clone().unwrap_or_default();
    let min_rating = draft.read().min_rating.map(|r| r.to_string()).unwrap_or_default();
    let sort = draft
        .read()
        .sorting_criteria
        .as_ref()
        .and_then(|s| s.first().copied())
        .map(|s| s.to_string())
        .unwrap_or_default();

    rsx! {
        div {
            id: "x-filter-bar",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                padding: 16px;
            ",
            FilterSection {
                title: "Search",
                input {
                    r#type: "text",
                    placeholder: "Product, brand or ingredient",
                    style: "width: 100%; padding: 6px 8px; border-radius: 6px; border: 1px solid #D1D5DB;",
                    value: "{phrase}",
                    oninput: move |e| draft.write().phrase = Some(e.value()),
                    onkeypress: move |e| {
                        if e.key() == Key::Enter {
                            e.prevent_default();
                            submit(());
                        }
                    },
                }
            }
            FilterSection {
                title: "Minimum rating",
                select {
                    value: "{min_rating}",
                    onchange: move |e| draft.write().min_rating = e.value().parse().ok(),
                    option { value: "", "Any" }
                    for stars in 1..=5 {
                        option { key: "{stars}", value: "{stars}", "{stars}+" }
                    }
                }
            }
            FilterSection {
                title: "Sort by",
                select {
                    value: "{sort}",
                    onchange: move |e| {
                        draft.write().sorting_criteria = SortBy::parse(&e.value()).map(|s| vec![s]);
                    },
                    option { value: "", "Default" }
                    for choice in sort_choices() {
                        option { key: "{choice}", value: "{choice}", "{sort_label(&choice)}" }
                    }
                }
            }
            for slot in FilterSlot::ALL {
                NamedFilter { key: "{slot:?}", slot, draft }
            }
            div {
                style: "display: flex; flex-direction: row; gap: 8px;",
                button {
                    style: "flex: 1; height: 34px; border-radius: 6px; border: none; background: #8A2058; color: white; cursor: pointer;",
                    onclick: move |_| submit(()),
                    "Apply"
                }
                button {
                    style: "height: 34px; border-radius: 6px; border: 1px solid #8A2058; background: white; color: #8A2058; cursor: pointer;",
                    onclick: move |_| draft.set(ProductCriteria::default()),
                    "Clear"
                }
            }
        }
    }
}

#[component]
fn FilterSection(title: String, children: Element) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px;",
            div { style: "font-size: 13px; font-weight: 500; color: #374151;", "{title}" }
            {children}
        }
    }
}

/// Chips for the ids already selected in `slot`, plus autocomplete to add more.
#[component]
fn NamedFilter(slot: FilterSlot, draft: Signal<ProductCriteria>) -> Element {
    let mut draft = draft;
    let client = use_catalog_client();
    let mut search_text = use_signal(String::new);

    let selected_ids = use_memo(move || slot.ids(&draft.read()));

    let names = use_resource(move || {
        let client = client.clone();
        let ids = selected_ids();
        async move {
            client
                .get_named_by_ids(slot.kind(), &ids)
                .await
                .map_err(|e| e.to_string())
        }
    });

    let suggestions = use_named_suggestions(slot.kind(), search_text, MAX_INGREDIENTS_SUGGESTIONS as u32);

    let chips: Vec<NamedObject> = {
        let resolved = names.read();
        let known = match resolved.as_ref() {
            Some(Ok(known)) => known.clone(),
            Some(Err(e)) => {
                tracing::warn!("could not resolve {:?} names: {}", slot.kind(), e);
                Vec::new()
            }
            None => Vec::new(),
        };
        selected_ids()
            .into_iter()
            .map(|id| match known.iter().find(|n| n.id == id) {
                Some(named) => named.clone(),
                None => NamedObject { name: id.clone(), id },
            })
            .collect()
    };

    rsx! {
        FilterSection {
            title: slot.label().to_string(),
            div {
                style: "display: flex; flex-wrap: wrap; gap: 6px;",
                for (chip_key, chip) in chips.into_iter().map(|c| (c.id.clone(), c)) {
                    span {
                        key: "{chip_key}",
                        style: "display: flex; align-items: center; gap: 4px; padding: 2px 8px; border-radius: 9999px; background: white; border: 1px solid #D1D5DB; font-size: 13px;",
                        "{chip.name}"
                        button {
                            style: "border: none; background: transparent; cursor: pointer; padding: 0;",
                            onclick: move |_| slot.remove_id(&mut draft.write(), &chip.id),
                            "×"
                        }
                    }
                }
            }
            input {
                r#type: "text",
                placeholder: "Add...",
                style: "width: 100%; padding: 4px 8px; border-radius: 6px; border: 1px solid #D1D5DB;",
                value: "{search_text}",
                oninput: move |e| search_text.set(e.value()),
            }
            SuggestionList {
                suggestions,
                on_pick: move |picked: NamedObject| {
                    slot.add_id(&mut draft.write(), &picked.id);
                    search_text.set(String::new());
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_id_skips_duplicates() {
        let mut criteria = ProductCriteria::default();
        FilterSlot::IncludeBrands.add_id(&mut criteria, "5");
        FilterSlot::IncludeBrands.add_id(&mut criteria, "7");
        FilterSlot::IncludeBrands.add_id(&mut criteria, "5");
        assert_eq!(criteria.brands_to_include_ids, Some(vec!["5".to_string(), "7".to_string()]));
        assert_eq!(criteria.brands_to_exclude_ids, None);
    }

    #[test]
    fn removing_last_id_clears_field() {
        let mut criteria = ProductCriteria {
            categories_ids: Some(vec!["3".to_string(), "4".to_string()]),
            ..Default::default()
        };
        FilterSlot::Categories.remove_id(&mut criteria, "3");
        assert_eq!(FilterSlot::Categories.ids(&criteria), vec!["4".to_string()]);
        FilterSlot::Categories.remove_id(&mut criteria, "4");
        assert_eq!(criteria.categories_ids, None);
        // removing from an absent field is a no-op
        FilterSlot::Providers.remove_id(&mut criteria, "1");
        assert_eq!(criteria.providers_ids, None);
    }

    #[test]
    fn sort_choices_cover_every_option_both_ways() {
        let choices = sort_choices();
        assert_eq!(choices.len(), SortOption::ALL.len() * 2);
        assert!(choices.contains(&SortBy::new(SortOption::Rating, SortOrder::Ascending)));
        assert_eq!(choices[0].to_string(), "d-match-score");
    }

    #[test]
    fn finalize_draft_drops_ai_prompt() {
        let mut draft = ProductCriteria::from_ai_query("oily skin", 10);
        FilterSlot::Categories.add_id(&mut draft, "3");
        let criteria = finalize_draft(draft);
        assert_eq!(criteria.query, None);
        assert_eq!(criteria.k_neighbours, None);
        assert_eq!(criteria.categories_ids, Some(vec!["3".to_string()]));
    }

    #[test]
    fn finalize_draft_tidies_phrase() {
        let blank = finalize_draft(ProductCriteria::from_phrase("   "));
        assert_eq!(blank.phrase, None);
        let spaced = finalize_draft(ProductCriteria::from_phrase("  vitamin   c "));
        assert_eq!(spaced.phrase.as_deref(), Some("vitamin c"));
    }
}
