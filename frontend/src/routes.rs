use common::product_criteria::ProductCriteria;
use common::product_listing::SessionKind;
use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::data_definitions::criteria_param::CriteriaParam;
use crate::pages::ai_home_page::AiHomePage;
use crate::pages::home_page::HomePage;
use crate::pages::liked_products_page::LikedProductsPage;
use crate::pages::mod_panel_page::ModPanelPage;
use crate::pages::product_list_page::{AiProductListPage, ProductListPage};
use crate::pages::product_page::ProductPage;

pub const PRODUCTS_PATH: &str = "/products";
pub const AI_PRODUCTS_PATH: &str = "/ai/products";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/ai")]
    AiHomePage {},


    #[route("/products?:..criteria")]
    ProductListPage { criteria: CriteriaParam },


    // first page comes from the AI endpoint
    #[route("/ai/products?:..criteria")]
    AiProductListPage { criteria: CriteriaParam },


    #[route("/products/:product_id")]
    ProductPage { product_id: String },


    #[route("/liked")]
    LikedProductsPage {},


    #[route("/mod")]
    ModPanelPage {},

}

impl Route {
    pub fn product_list(criteria: ProductCriteria, session_kind: SessionKind) -> Self {
        match session_kind {
            SessionKind::Standard => Self::ProductListPage { criteria: criteria.into() },
            SessionKind::AiOneShot => Self::AiProductListPage { criteria: criteria.into() },
        }
    }

    /// Base path that [`common::criteria_url::product_criteria_to_url`] appends the query to.
    pub fn list_path(session_kind: SessionKind) -> &'static str {
        match session_kind {
            SessionKind::Standard => PRODUCTS_PATH,
            SessionKind::AiOneShot => AI_PRODUCTS_PATH,
        }
    }
}
