//! Autocomplete over the `{id, name}` catalog collections.

use dioxus::{logger::tracing, prelude::*};

use catalog_client::api::NamedKind;
use common::{criteria_url::pretty_string, product::NamedObject};

use crate::api::catalog_api::use_catalog_client;

/// Shortest input that triggers autocomplete.
const MIN_SUGGESTION_QUERY_LEN: usize = 2;

fn wants_suggestions(text: &str) -> bool {
    text.chars().count() >= MIN_SUGGESTION_QUERY_LEN
}

/// Entries of `kind` matching `text`, refreshed as the text changes.
/// Ingredient suggestions include allergens.
pub fn use_named_suggestions(kind: NamedKind, text: Signal<String>, count: u32) -> Vec<NamedObject> {
    let client = use_catalog_client();
    let found = use_resource(move || {
        let client = client.clone();
        let text = pretty_string(&text.read());
        async move {
            if !wants_suggestions(&text) {
                return Ok(Vec::new());
            }
            let found = match kind {
                NamedKind::Ingredients => client.search_ingredients(&text, count, false).await,
                kind => client.search_named(kind, &text, count).await,
            };
            found.map_err(|e| e.to_string())
        }
    });

    match found.read().as_ref() {
        Some(Ok(found)) => found.clone(),
        Some(Err(e)) => {
            tracing::warn!("{:?} suggestions failed: {}", kind, e);
            Vec::new()
        }
        None => Vec::new(),
    }
}

/// Clickable suggestion list, hidden when empty.
#[component]
pub fn SuggestionList(suggestions: Vec<NamedObject>, on_pick: Callback<NamedObject>) -> Element {
    if suggestions.is_empty() {
        return rsx! {};
    }
    rsx! {
        ul {
            style: "list-style: none; margin: 0; padding: 4px; background: white; border-radius: 6px; border: 1px solid #D1D5DB;",
            for (suggestion_key, suggestion) in suggestions.into_iter().map(|s| (s.id.clone(), s)) {
                li {
                    key: "{suggestion_key}",
                    style: "padding: 4px; cursor: pointer;",
                    onclick: move |_| on_pick.call(suggestion.clone()),
                    "{suggestion.name}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_asks_for_nothing() {
        assert!(!wants_suggestions(""));
        assert!(!wants_suggestions("a"));
        assert!(wants_suggestions("aq"));
        assert!(wants_suggestions("żó"));
    }
}
