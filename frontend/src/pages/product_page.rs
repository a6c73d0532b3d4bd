use dioxus::prelude::*;

use common::product::ProductDetails;
use crate::{
    api::catalog_api::use_catalog_client,
    components::{error_boundary::ComponentErrorDisplay, product_tile::RatingStars, loading_indicator::LoadingIndicator},
};


/// Product details page
#[component]
pub fn ProductPage(product_id: String) -> Element {
    rsx! {
        ProductDetailsRoot { product_id }
    }
}

#[component]
fn ProductDetailsRoot(product_id: ReadSignal<String>) -> Element {
    let client = use_catalog_client();
    let details = use_resource(move || {
        let client = client.clone();
        let id = product_id.read().clone();
        async move { client.get_product_details(&id).await.map_err(|e| e.to_string()) }
    });

    let details = details.read();
    let details = match details.as_ref() {
        Some(Err(e)) => return rsx! { ComponentErrorDisplay { error_txt: e.clone() } },
        Some(Ok(d)) => d.clone(),
        None => return rsx! { LoadingIndicator {} },
    };

    rsx! {
        Title { "Catalog - {details.brand.name} {details.name}" }
        ProductDetailsView { details }
    }
}

#[component]
fn ProductDetailsView(details: ReadSignal<ProductDetails>) -> Element {
    let ProductDetails {
        name,
        large_image_url,
        provider,
        brand,
        long_description,
        volume,
        ingredients,
        rating,
        ..
    } = details.read().clone();

    rsx! {
        div {
            id: "x-product-details",
            style: "
                display: flex;
                flex-direction: row;
                gap: 32px;
                padding: 32px;
                height: 100%;
                overflow-y: auto;
            ",
            img {
                src: "{large_image_url}",
                alt: "{name}",
                style: "width: 360px; height: 360px; object-fit: contain; background: white; border-radius: 12px;",
            }
            div {
                style: "display: flex; flex-direction: column; gap: 12px; max-width: 720px;",
                div { style: "font-size: 16px; color: rgba(0,0,0,0.6);", "{brand.name}" }
                div { style: "font-size: 32px; font-weight: 500;", "{name}" }
                RatingStars { rating }
                div { style: "font-size: 14px;", "Sold by {provider.name} · {volume} ml" }
                p { style: "font-size: 16px; line-height: 1.6;", "{long_description}" }
                div { style: "font-size: 18px; font-weight: 500; margin-top: 12px;", "Ingredients" }
                ul {
                    style: "display: flex; flex-wrap: wrap; gap: 8px; list-style: none; padding: 0;",
                    for ingredient in ingredients {
                        li {
                            key: "{ingredient.id}",
                            style: "padding: 4px 10px; border-radius: 9999px; background: white; border: 1px solid #D1D5DB;",
                            "{ingredient.name}"
                        }
                    }
                }
            }
        }
    }
}
