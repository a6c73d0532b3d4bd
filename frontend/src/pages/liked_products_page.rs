use dioxus::prelude::*;

use common::product::ProductResponse;
use crate::{
    api::catalog_api::use_catalog_client,
    components::{error_boundary::ComponentErrorDisplay, loading_indicator::LoadingIndicator, product_tile::ProductTile},
    routes::Route,
};

/// Products the signed-in user liked, one backend page at a time.
#[component]
pub fn LikedProductsPage() -> Element {
    let client = use_catalog_client();
    let signed_in = client.config().access_token.is_some();
    let mut page_index = use_signal(|| 0_u32);

    let liked = use_resource(move || {
        let client = client.clone();
        let page_index = page_index();
        async move {
            if !signed_in {
                return Ok(ProductResponse::default());
            }
            client.get_liked_products(page_index).await.map_err(|e| e.to_string())
        }
    });

    if !signed_in {
        return rsx! {
            Title { "Catalog - Liked" }
            div {
                style: "padding: 32px; font-size: 20px; color: rgba(0,0,0,0.6);",
                "Sign in to see the products you liked."
            }
        };
    }

    let liked = liked.read();
    let response = match liked.as_ref() {
        Some(Err(e)) => return rsx! { ComponentErrorDisplay { error_txt: e.clone() } },
        Some(Ok(response)) => response.clone(),
        None => return rsx! { LoadingIndicator {} },
    };
    let current = page_index();

    rsx! {
        Title { "Catalog - Liked" }
        div {
            id: "x-liked-products",
            style: "display: flex; flex-direction: column; gap: 16px; padding: 16px; height: 100%; overflow-y: auto;",
            if response.products.is_empty() {
                div { style: "font-size: 20px; color: rgba(0,0,0,0.5); padding: 24px;", "Nothing liked yet" }
            }
            ul {
                style: "
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
                    gap: 16px;
                    list-style: none;
                    padding: 0;
                    margin: 0;
                ",
                for (product_id, product) in response.products.into_iter().map(|p| (p.id.clone(), p)) {
                    li {
                        key: "{product_id}",
                        Link {
                            to: Route::ProductPage { product_id: product_id.clone() },
                            ProductTile { product }
                        }
                    }
                }
            }
            div {
                style: "display: flex; flex-direction: row; gap: 12px; align-items: center;",
                button {
                    disabled: current == 0,
                    onclick: move |_| page_index.set(current.saturating_sub(1)),
                    "Previous"
                }
                span { "Page {current + 1} of {response.total_pages.max(1)}" }
                button {
                    disabled: !has_next_page(current, response.total_pages),
                    onclick: move |_| page_index.set(current + 1),
                    "Next"
                }
            }
        }
    }
}

fn has_next_page(page_index: u32, total_pages: u32) -> bool {
    page_index.saturating_add(1) < total_pages
}
