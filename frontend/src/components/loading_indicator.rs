use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div {
            style: "color:#1C212D; font-size: 20px; border: 1px solid #1C212D; padding: 10px; border-radius: 5px; margin: 15px;",
            "{message}"
        }
    }
}
