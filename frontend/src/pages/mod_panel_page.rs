use dioxus::{logger::tracing, prelude::*};

use catalog_client::{api::{ImageFile, NamedKind}, CatalogClient};
use common::product::NamedObject;
use crate::{
    api::catalog_api::use_catalog_client,
    components::named_suggestions::{SuggestionList, use_named_suggestions},
    data_definitions::{
        notifications::Notifications,
        product_form::{ProductForm, push_unique},
    },
};

const MAX_MOD_SUGGESTIONS: u32 = 50;

const FIELD_STYLE: &str = "width: 100%; padding: 6px 8px; border-radius: 6px; border: 1px solid #D1D5DB;";
const BUTTON_STYLE: &str = "height: 36px; border-radius: 18px; border: none; background: #0B7A2B; color: white; cursor: pointer;";

/// Moderator tools: add a product, then attach its images.
#[component]
pub fn ModPanelPage() -> Element {
    let client = use_catalog_client();
    let signed_in = client.config().access_token.is_some();

    rsx! {
        Title { "Catalog - Moderator panel" }
        div {
            id: "x-mod-panel",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                gap: 24px;
                padding: 32px;
                height: 100%;
                overflow-y: auto;
                background: #F5F6F8;
            ",
            if signed_in {
                AddProductCard {}
                UploadImagesCard {}
            } else {
                div {
                    style: "font-size: 20px; color: rgba(0,0,0,0.6);",
                    "Sign in with a moderator account to use this panel."
                }
            }
        }
    }
}

#[component]
fn PanelCard(title: String, children: Element) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                width: 480px;
                padding: 20px;
                border-radius: 16px;
                background: white;
                box-shadow: 0 2px 8px rgba(0,0,0,0.06);
            ",
            div { style: "font-size: 22px; font-weight: 500;", "{title}" }
            {children}
        }
    }
}

#[component]
fn TextField(label: String, value: String, on_change: Callback<String>) -> Element {
    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 4px; font-size: 13px; color: #374151;",
            "{label}"
            input {
                r#type: "text",
                style: FIELD_STYLE,
                value: "{value}",
                oninput: move |e| on_change.call(e.value()),
            }
        }
    }
}

#[component]
fn AddProductCard() -> Element {
    let client = use_catalog_client();
    let notifications = use_context::<Notifications>();
    let mut form = use_signal(ProductForm::default);
    let mut added_id = use_signal(|| None::<u64>);
    let mut busy = use_signal(|| false);

    let submit = move |_| {
        let payload = match form.read().to_payload() {
            Ok(payload) => payload,
            Err(message) => {
                notifications.show(message);
                return;
            }
        };
        let client = client.clone();
        busy.set(true);
        added_id.set(None);
        spawn(async move {
            match client.add_product(&payload).await {
                Ok(added) => {
                    tracing::info!("product added: {}", added.id);
                    added_id.set(Some(added.id));
                    form.set(ProductForm::default());
                }
                Err(e) => {
                    tracing::error!("add product failed: {}", e);
                    notifications.show(format!("Failed to add product: {e}"));
                }
            }
            busy.set(false);
        });
    };

    let current = form.read().clone();

    rsx! {
        PanelCard {
            title: "Add a product",
            if let Some(id) = added_id() {
                div { style: "color: #0B7A2B; font-weight: 600;", "Product added! New product ID: {id}" }
            }
            TextField { label: "Product name", value: current.name, on_change: move |v: String| form.write().name = v }
            NamedPicker {
                kind: NamedKind::Providers,
                label: "Provider",
                selected: current.provider.into_iter().collect::<Vec<_>>(),
                on_pick: move |picked: NamedObject| form.write().provider = Some(picked),
                on_remove: move |_: String| form.write().provider = None,
            }
            NamedPicker {
                kind: NamedKind::Brands,
                label: "Brand",
                selected: current.brand.into_iter().collect::<Vec<_>>(),
                on_pick: move |picked: NamedObject| form.write().brand = Some(picked),
                on_remove: move |_: String| form.write().brand = None,
            }
            NamedPicker {
                kind: NamedKind::Categories,
                label: "Categories",
                selected: current.categories,
                on_pick: move |picked: NamedObject| push_unique(&mut form.write().categories, picked),
                on_remove: move |id: String| form.write().categories.retain(|c| c.id != id),
            }
            TextField { label: "Small image URL", value: current.small_image_url, on_change: move |v: String| form.write().small_image_url = v }
            TextField { label: "Large image URL", value: current.large_image_url, on_change: move |v: String| form.write().large_image_url = v }
            TextField { label: "Short description", value: current.short_description, on_change: move |v: String| form.write().short_description = v }
            TextField { label: "Long description", value: current.long_description, on_change: move |v: String| form.write().long_description = v }
            TextField { label: "Volume", value: current.volume, on_change: move |v: String| form.write().volume = v }
            NamedPicker {
                kind: NamedKind::Ingredients,
                label: "Ingredients",
                selected: current.ingredients,
                on_pick: move |picked: NamedObject| push_unique(&mut form.write().ingredients, picked),
                on_remove: move |id: String| form.write().ingredients.retain(|i| i.id != id),
            }
            button {
                style: BUTTON_STYLE,
                disabled: busy(),
                onclick: submit,
                if busy() { "Adding..." } else { "Add product" }
            }
        }
    }
}

/// Selected entries as removable chips, plus autocomplete to pick more.
#[component]
fn NamedPicker(
    kind: NamedKind,
    label: String,
    selected: Vec<NamedObject>,
    on_pick: Callback<NamedObject>,
    on_remove: Callback<String>,
) -> Element {
    let mut search_text = use_signal(String::new);
    let suggestions = use_named_suggestions(kind, search_text, MAX_MOD_SUGGESTIONS);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; font-size: 13px; color: #374151;",
            "{label}"
            div {
                style: "display: flex; flex-wrap: wrap; gap: 6px;",
                for (chip_key, chip) in selected.into_iter().map(|c| (c.id.clone(), c)) {
                    span {
                        key: "{chip_key}",
                        style: "padding: 2px 8px; border-radius: 9999px; border: 1px solid #D1D5DB;",
                        "{chip.name} "
                        button {
                            style: "border: none; background: transparent; cursor: pointer; padding: 0;",
                            onclick: move |_| on_remove.call(chip.id.clone()),
                            "×"
                        }
                    }
                }
            }
            input {
                r#type: "text",
                placeholder: "Search...",
                style: FIELD_STYLE,
                value: "{search_text}",
                oninput: move |e| search_text.set(e.value()),
            }
            SuggestionList {
                suggestions,
                on_pick: move |picked: NamedObject| {
                    on_pick.call(picked);
                    search_text.set(String::new());
                },
            }
        }
    }
}

#[component]
fn UploadImagesCard() -> Element {
    let client = use_catalog_client();
    let notifications = use_context::<Notifications>();
    let mut product_id = use_signal(String::new);
    let mut small_image = use_signal(|| None::<ImageFile>);
    let mut large_image = use_signal(|| None::<ImageFile>);
    let mut uploaded = use_signal(|| false);
    let mut busy = use_signal(|| false);

    let submit = move |_| {
        let id = product_id.read().trim().to_string();
        if id.is_empty() {
            notifications.show("Enter the product ID");
            return;
        }
        let client = client.clone();
        busy.set(true);
        uploaded.set(false);
        spawn(async move {
            match upload(&client, &id, small_image(), large_image()).await {
                Ok(()) => {
                    product_id.set(String::new());
                    small_image.set(None);
                    large_image.set(None);
                    uploaded.set(true);
                }
                Err(e) => {
                    tracing::error!("image upload for product {} failed: {}", id, e);
                    notifications.show(format!("Failed to upload images: {e}"));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        PanelCard {
            title: "Add images to a product",
            TextField { label: "Product ID", value: product_id(), on_change: move |v: String| product_id.set(v) }
            ImageInput { label: "Small image", on_file: move |file: Option<ImageFile>| small_image.set(file) }
            ImageInput { label: "Large image", on_file: move |file: Option<ImageFile>| large_image.set(file) }
            button {
                style: BUTTON_STYLE,
                disabled: busy(),
                onclick: submit,
                if busy() { "Uploading..." } else { "Upload images" }
            }
            if uploaded() {
                div { style: "color: #0B7A2B; font-weight: 600;", "Images uploaded successfully!" }
            }
        }
    }
}

async fn upload(
    client: &CatalogClient,
    product_id: &str,
    small_image: Option<ImageFile>,
    large_image: Option<ImageFile>,
) -> anyhow::Result<()> {
    if small_image.is_none() && large_image.is_none() {
        anyhow::bail!("no image selected");
    }
    client.upload_product_images(product_id, small_image, large_image).await
}

#[component]
fn ImageInput(label: String, on_file: Callback<Option<ImageFile>>) -> Element {
    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 4px; font-size: 13px; color: #374151;",
            "{label}"
            input {
                r#type: "file",
                accept: "image/*",
                onchange: move |e| async move {
                    let Some(file) = e.files().into_iter().next() else {
                        on_file.call(None);
                        return;
                    };
                    match file.read_bytes().await {
                        Ok(bytes) => on_file.call(Some(ImageFile {
                            file_name: file.name(),
                            data: bytes.into(),
                        })),
                        Err(e) => {
                            tracing::warn!("could not read {}: {}", file.name(), e);
                            on_file.call(None);
                        }
                    }
                },
            }
        }
    }
}
