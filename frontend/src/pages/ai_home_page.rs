use dioxus::prelude::*;

use catalog_client::config::MAX_INGREDIENTS_SUGGESTIONS;
use common::product_criteria::ProductCriteria;
use common::product_listing::SessionKind;
use crate::routes::Route;


/// Natural-language search. The listing it opens asks the AI endpoint for its first page.
#[component]
pub fn AiHomePage() -> Element {
    let nav = navigator();
    let mut prompt = use_signal(String::new);
    let can_submit = use_memo(move || !prompt.read().trim().is_empty());

    let submit = move |_: ()| {
        if !can_submit() {
            return;
        }
        let criteria = ProductCriteria::from_ai_query(prompt.read().clone(), MAX_INGREDIENTS_SUGGESTIONS);
        nav.push(Route::product_list(criteria, SessionKind::AiOneShot));
    };

    rsx! {
        Title { "Catalog - Ask AI" }
        div {
            id: "x-ai-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 18px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
            ",
            div {
                style: "font-size: 36px; font-weight: 500; color: #0F172A;",
                "What are you looking for?"
            }
            textarea {
                rows: 5,
                placeholder: "e.g. a fragrance-free moisturiser for sensitive, dry skin",
                style: "
                    width: 640px;
                    max-width: 100%;
                    padding: 12px;
                    font-size: 16px;
                    border-radius: 12px;
                    border: 1px solid #D1D5DB;
                    resize: vertical;
                ",
                value: "{prompt}",
                oninput: move |e| prompt.set(e.value()),
            }
            div {
                style: "display:flex; flex-direction: row; gap: 12px;",
                button {
                    disabled: !can_submit(),
                    style: "
                        height: 38px;
                        padding: 0 18px;
                        font-size: 15px;
                        border-radius: 8px;
                        border: none;
                        background: #0B7A2B;
                        color: white;
                        cursor: pointer;
                    ",
                    onclick: move |_| submit(()),
                    "Ask"
                }
                Link { to: Route::HomePage {}, "Back to classic search" }
            }
        }
    }
}
