//! Collapsible list of matched sentence pairs for one compared document.

use common::matched_section::MatchedSection;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_content_icons::MdContentCopy};

use crate::components::tooltip::Tooltip;

pub fn matches_toggle_label(is_hidden: bool) -> &'static str {
    if is_hidden { "Show matches" } else { "Hide matches" }
}

/// Button plus panel. The panel starts hidden.
#[component]
pub fn MatchesPanel(panel_id: String, matched_sections: ReadSignal<Vec<MatchedSection>>, children: Element) -> Element {
    let mut is_hidden = use_signal(|| true);
    rsx! {
        div {
            style: "display:flex; flex-direction: column; gap: 10px;",
            div {
                style: "display:flex; flex-direction: row; gap: 8px;",
                button {
                    class: "copycheck-button show-matches-btn",
                    "data-target": "{panel_id}",
                    onclick: move |_| {
                        *is_hidden.write() ^= true;
                    },
                    "{matches_toggle_label(is_hidden())}"
                }
                CopyMatchesButton { matched_sections }
            }
            div {
                id: "{panel_id}",
                class: if is_hidden() { "d-none" } else { "" },
                style: "display:flex; flex-direction: column; gap: 12px;",
                if matched_sections.read().is_empty() {
                    div { style: "color:#6B7280;", "No individual sentence passed the sentence threshold." }
                }
                for (i, section) in matched_sections.read().iter().enumerate() {
                    MatchedSectionRow { key: "{i}", section: section.clone() }
                }
                {children}
            }
        }
    }
}

#[component]
fn MatchedSectionRow(section: MatchedSection) -> Element {
    let percent = (section.similarity * 100.0).round() as u32;
    rsx! {
        div {
            style: "
                display:grid;
                grid-template-columns: 1fr 1fr auto;
                gap: 12px;
                padding: 8px;
                border-left: 3px solid #eb3f00;
                background: #FFF7ED;
                border-radius: 4px;
                font-size: 14px;
            ",
            div { "{section.source_sentence}" }
            div { style: "color:#4B5563; font-style: italic;", "{section.matched_sentence}" }
            Tooltip {
                label: "Share of meaningful words the two sentences have in common".to_string(),
                span { style: "font-weight: 500;", "{percent}%" }
            }
        }
    }
}

#[component]
fn CopyMatchesButton(matched_sections: ReadSignal<Vec<MatchedSection>>) -> Element {
    let do_copy = use_callback(move |_: ()| {
        let text = matched_sections.read().iter().map(|s| s.source_sentence.as_str()).collect::<Vec<_>>().join("\n");
        let Some(window) = web_sys::window() else { return };
        let _r = window.navigator().clipboard().write_text(&text);
        dioxus::logger::tracing::info!("Copied {} matched sentences", matched_sections.read().len());

        let toast_api = dioxus_primitives::toast::consume_toast();
        toast_api.info(
            "Matched sentences copied.".to_string(),
            dioxus_primitives::toast::ToastOptions::new()
                .description("The matched sentences are on your clipboard.")
                .duration(std::time::Duration::from_secs(5))
                .permanent(false),
        );
    });
    rsx! {
        Tooltip {
            label: "Copy matched sentences".to_string(),
            button {
                class: "copycheck-icon-button",
                disabled: matched_sections.read().is_empty(),
                onclick: move |_| do_copy.call(()),
                Icon { icon: MdContentCopy, style: "width: 18px; height: 18px;" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_follows_visibility() {
        assert_eq!(matches_toggle_label(true), "Show matches");
        assert_eq!(matches_toggle_label(false), "Hide matches");
    }
}
