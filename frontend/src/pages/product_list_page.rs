use std::rc::Rc;

use dioxus::{logger::tracing, prelude::*};

use catalog_client::CatalogClient;
use common::{
    criteria_url::{product_criteria_to_query, url_to_product_criteria},
    product_criteria::ProductCriteria,
    product_listing::{ProductListState, ProductListing, SessionKind},
};
use crate::{
    api::catalog_api::use_catalog_client,
    components::{filter_bar::FilterBar, product_tile::ProductTile, loading_indicator::LoadingIndicator},
    data_definitions::{criteria_param::CriteriaParam, listing_signal::ListingSignal, notifications::Notifications},
    routes::Route,
};

type Listing = Rc<ProductListing<CatalogClient, ListingSignal>>;

const PRODUCT_GRID_ID: &str = "x-product-grid";
/// How close to the bottom of the grid (in px) scrolling starts loading the next page.
const LOAD_MORE_THRESHOLD_PX: i32 = 200;

/// Product listing for a classic search.
#[component]
pub fn ProductListPage(criteria: CriteriaParam) -> Element {
    rsx! {
        Title { "Catalog - Products" }
        ProductListView { criteria: criteria.0.clone(), session_kind: SessionKind::Standard }
    }
}

/// Product listing whose first page comes from the AI search.
#[component]
pub fn AiProductListPage(criteria: CriteriaParam) -> Element {
    rsx! {
        Title { "Catalog - AI suggestions" }
        ProductListView { criteria: criteria.0.clone(), session_kind: SessionKind::AiOneShot }
    }
}

#[component]
fn ProductListView(criteria: ReadSignal<ProductCriteria>, session_kind: SessionKind) -> Element {
    let client = use_catalog_client();
    let notifications = use_context::<Notifications>();
    let nav = navigator();

    let state = use_signal(|| ProductListState::new(session_kind));
    let listing: Listing = use_hook(|| Rc::new(ProductListing::new(client, ListingSignal(state))));
    // criteria the accumulated products belong to
    let mut active_criteria = use_signal(|| None::<ProductCriteria>);

    // first load, and reloads when the URL changes under us (back / forward)
    let listing_for_url = listing.clone();
    use_effect(move || {
        let current = criteria.read().clone();
        let Some(kind) = reload_session(active_criteria.peek().as_ref(), &current, session_kind) else {
            return;
        };
        active_criteria.set(Some(current.clone()));
        tracing::debug!("listing criteria changed, starting {:?} session", kind);
        let listing = listing_for_url.clone();
        spawn(async move {
            // the URL already shows these criteria
            let outcome = listing.new_search(Route::list_path(kind), &current, kind, |_| {}).await;
            notifications.report(&outcome);
        });
    });

    let listing_for_search = listing.clone();
    let on_search = Callback::new(move |new_criteria: ProductCriteria| {
        if session_kind == SessionKind::AiOneShot {
            // the classic listing route mounts its own view and loads there
            nav.push(Route::product_list(new_criteria, SessionKind::Standard));
            return;
        }
        // what the route will hand back once the URL is pushed, so the effect does not search again
        active_criteria.set(Some(url_to_product_criteria(&product_criteria_to_query(&new_criteria))));
        let listing = listing_for_search.clone();
        spawn(async move {
            let outcome = listing
                .new_search(Route::list_path(SessionKind::Standard), &new_criteria, SessionKind::Standard, |url| {
                    nav.push(url);
                })
                .await;
            notifications.report(&outcome);
        });
    });

    let listing_for_scroll = listing.clone();
    let on_scroll = move |_: Event<ScrollData>| {
        if !scrolled_near_bottom(PRODUCT_GRID_ID) {
            return;
        }
        let listing = listing_for_scroll.clone();
        let criteria = criteria.read().clone();
        spawn(async move {
            let outcome = listing.load_more(&criteria).await;
            notifications.report(&outcome);
        });
    };

    let products = state.read().products().to_vec();
    let is_fetching = state.read().is_fetching();
    let show_empty = products.is_empty() && !is_fetching && state.read().has_loaded();

    rsx! {
        div {
            id: "x-product-list-page",
            style: "
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: row;
            ",
            div {
                id: PRODUCT_GRID_ID,
                style: "
                    flex-grow: 1;
                    height: 100%;
                    overflow-y: auto;
                    padding: 16px;
                ",
                onscroll: on_scroll,
                ul {
                    style: "
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
                        gap: 16px;
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    ",
                    if show_empty {
                        div {
                            style: "font-size: 20px; color: rgba(0,0,0,0.5); padding: 24px;",
                            "No products found"
                        }
                    }
                    for (product_id, product) in products.into_iter().map(|p| (p.id.clone(), p)) {
                        li {
                            key: "{product_id}",
                            Link {
                                to: Route::ProductPage { product_id: product_id.clone() },
                                ProductTile { product }
                            }
                        }
                    }
                }
                if is_fetching {
                    LoadingIndicator {}
                }
            }
            div {
                id: "x-product-list-filters",
                style: "
                    height: 100%;
                    width: 320px;
                    flex-shrink: 0;
                    background-color: #ECEEF2;
                    overflow-y: auto;
                ",
                FilterBar { original_criteria: criteria, on_search }
            }
        }
    }
}

/// Session to start when the route shows `current`, or `None` when the listing
/// already holds those criteria. The route decides the kind: an AI listing
/// reached through back / forward asks the AI endpoint again.
fn reload_session(loaded: Option<&ProductCriteria>, current: &ProductCriteria, route_kind: SessionKind) -> Option<SessionKind> {
    (loaded != Some(current)).then_some(route_kind)
}

fn scrolled_near_bottom(element_id: &str) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
    else {
        return false;
    };
    let remaining = element.scroll_height() - element.scroll_top() - element.client_height();
    remaining <= LOAD_MORE_THRESHOLD_PX
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_visit_starts_the_route_session() {
        let criteria = ProductCriteria::from_ai_query("dry skin", 10);
        assert_eq!(reload_session(None, &criteria, SessionKind::AiOneShot), Some(SessionKind::AiOneShot));
        assert_eq!(reload_session(None, &criteria, SessionKind::Standard), Some(SessionKind::Standard));
    }

    #[test]
    fn history_navigation_between_ai_listings_stays_ai() {
        let previous = ProductCriteria::from_ai_query("oily skin", 10);
        let current = ProductCriteria::from_ai_query("dry skin", 10);
        assert_eq!(
            reload_session(Some(&previous), &current, SessionKind::AiOneShot),
            Some(SessionKind::AiOneShot)
        );
    }

    #[test]
    fn loaded_criteria_do_not_reload() {
        let criteria = ProductCriteria::from_phrase("serum");
        assert_eq!(reload_session(Some(&criteria), &criteria, SessionKind::Standard), None);
    }
}
