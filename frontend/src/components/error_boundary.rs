//! Error boundary component for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                rsx! {
                    div {
                        class: "copycheck-error-page",
                        h1 { style: "color:#B91C1C; font-size: 40px;", "Something went wrong" }
                        p { style: "color:#7F1D1D; font-size: 20px;", "Section: {boundary_name}" }
                        a { href: "/", style: "color:#4F46E5; font-size: 20px;", "Back to the submission form" }
                        pre {
                            style: "color:#111827; border: 1px solid #B91C1C; padding: 10px; border-radius: 5px; text-wrap: auto;",
                            "{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(error) => format!("{:#?}", error.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            class: "copycheck-button",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try again"
                        }
                    }
                }
            },
            {children}
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            gap: "8px",
            padding: "12px",

            h2 { style: "color:#B91C1C; font-size: 26px; margin: 0;", "Could not display this part of the report" }
            pre {
                style: "color:#7F1D1D; border: 1px solid #B91C1C; padding: 10px; border-radius: 5px; text-wrap: auto; max-width: 600px; max-height: 300px; overflow-y: auto;",
                "{error_txt}"
            }
            {children}
        }
    }
}
