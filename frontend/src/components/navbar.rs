//! Side navigation bar component.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdFindInPage;
use dioxus_free_icons::icons::md_file_icons::MdFolder;
use dioxus_free_icons::{Icon, IconShape};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::tooltip::{Tooltip, TooltipSide};
use crate::routes::Route;


/// Shared layout: icon sidebar on the left, current page on the right.
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
                    gap: 24px;
                    width: 38px;
                    height: 100%;
                    align-items: center;
                    background-color: #1C212D;
                    padding: 16px;
                ",
                IconLink { to: Route::HomePage { }, icon: MdFindInPage, label: "Check a document" }
                IconLink { to: Route::CorpusPage { }, icon: MdFolder, label: "Reference documents" }
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-width: 100px; overflow: auto;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static> (to: Route, icon: T, label: String) -> Element {
    rsx! {
        Tooltip {
            label: label.clone(),
            side: TooltipSide::Right,
            Link {
                to: to,
                span {
                    style: "color:white;",
                    Icon { icon: icon, style: "width: 26px; height: 26px;" }
                }
            }
        }
    }
}
