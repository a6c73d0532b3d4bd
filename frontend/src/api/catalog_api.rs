//! Access to the catalog REST client from components.

use catalog_client::CatalogClient;
use dioxus::prelude::*;

const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Puts a [`CatalogClient`] into the context. It is signed in when local storage
/// holds an `accessToken`; the account pages of the site write it on sign-in.
pub fn provide_catalog_client() -> CatalogClient {
    use_context_provider(|| CatalogClient::from_env().with_access_token(stored_access_token()))
}

pub fn use_catalog_client() -> CatalogClient {
    use_context::<CatalogClient>()
}

fn stored_access_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(ACCESS_TOKEN_KEY).ok()?
}
