//! Top navigation bar component.

use dioxus::prelude::*;

use common::product_criteria::ProductCriteria;
use common::product_listing::SessionKind;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::notification_toast::NotificationToast;
use crate::routes::Route;

use dioxus_free_icons::icons::md_action_icons::MdBuild;
use dioxus_free_icons::icons::md_action_icons::MdFavorite;
use dioxus_free_icons::icons::md_action_icons::MdHome;
use dioxus_free_icons::icons::md_action_icons::MdQuestionAnswer;
use dioxus_free_icons::icons::md_action_icons::MdViewModule;
use dioxus_free_icons::{Icon, IconShape};


/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {

        div {
            id:"x-nav-container",

            style:"
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",


            div {
                id:"x-nav-sidebar",
                style:"
                    display:flex;
                    flex-direction: column;
                    gap: 40px;
                    width: 70px;
                    height: 100%;
                    background-color: #1C212D;
                    border: 1px solid #000000;
                    padding: 16px;
                ",

                NavbarTopIconLinks{},
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-width: 100px; position: relative;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
                NotificationToast {}
            }
        }

    }
}

#[component]
fn NavbarTopIconLinks() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 24px;
                width: 38px;
                align-items: center;
                justify-content: center;
            ",
            IconLink { to: Route::HomePage { }, icon: MdHome, label: "Home" }
            IconLink {
                to: Route::product_list(ProductCriteria::default(), SessionKind::Standard),
                icon: MdViewModule,
                label: "All products"
            }
            IconLink { to: Route::AiHomePage { }, icon: MdQuestionAnswer, label: "Ask AI" }
            IconLink { to: Route::LikedProductsPage { }, icon: MdFavorite, label: "Liked" }
            IconLink { to: Route::ModPanelPage { }, icon: MdBuild, label: "Moderator panel" }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static> (to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                title: "{label}",
                style: "color:white;",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
            }
        }
    }
}
