//! Submitted text with matched sentences highlighted.

use std::collections::BTreeMap;

use common::matched_section::MatchedSection;
use common::text_highlight::{HIGHLIGHT_CLASS, highlight_spans};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdExpandLess, MdExpandMore}};

#[component]
pub fn HighlightedTextViewer(text: ReadSignal<String>, matched_sections: ReadSignal<Vec<MatchedSection>>) -> Element {
    let spans = use_memo(move || highlight_spans(Some(text.read().as_str()), &matched_sections.read()));
    let highlight_count = use_memo(move || spans.read().iter().filter(|s| s.is_highlighted).count() as u32);
    let mut current_index = use_signal(|| 0_u32);
    let mounts: Signal<BTreeMap<u32, Event<MountedData>>> = use_signal(BTreeMap::new);

    use_effect(move || {
        let current = *current_index.read();
        if let Some(mount) = mounts.read().get(&current) {
            dioxus::logger::tracing::debug!("Scrolling to highlight: {current}");
            let _x = mount.scroll_to_with_options(
                ScrollToOptions {
                    behavior: ScrollBehavior::Smooth,
                    vertical: ScrollLogicalPosition::Center,
                    horizontal: ScrollLogicalPosition::Nearest,
                }
            );
        }
    });

    let mut step = move |forward: bool| {
        let count = highlight_count();
        if count == 0 {
            return;
        }
        let current = current_index();
        current_index.set(if forward { (current + 1) % count } else { (current + count - 1) % count });
    };

    let total = highlight_count();
    let position = current_index().min(total.saturating_sub(1)) + 1;
    let rendered = spans.read().iter().map(|item| {
        let text = item.text.clone();
        let index = item.index as u32;
        rsx! {
            if item.is_highlighted {
                HighlightSpan { mounts, current_index, index, text }
            } else {
                span { "{text}" }
            }
        }
    }).collect::<Vec<_>>();

    rsx! {
        div {
            style: "display:flex; flex-direction: column; gap: 8px;",
            div {
                style: "display:flex; flex-direction: row; align-items: center; gap: 8px; font-size: 14px; color: #374151;",
                if total == 0 {
                    "No sentence of the text matched literally."
                } else {
                    "Match {position} of {total}"
                    button {
                        class: "copycheck-icon-button",
                        onclick: move |_| step(false),
                        Icon { icon: MdExpandLess, style: "width: 18px; height: 18px;" }
                    }
                    button {
                        class: "copycheck-icon-button",
                        onclick: move |_| step(true),
                        Icon { icon: MdExpandMore, style: "width: 18px; height: 18px;" }
                    }
                }
            }
            pre {
                style: "
                    white-space: pre-wrap; word-wrap: break-word;
                    max-height: 420px;
                    overflow-y: auto;
                    font-size: 15px;
                    line-height: 23px;
                    font-family: Roboto, sans-serif;
                    color: rgb(0, 0, 0);
                    padding: 12px;
                    border: 1px solid #E5E7EB;
                    border-radius: 8px;
                ",
                {rendered.into_iter()}
            }
        }
    }
}

#[component]
fn HighlightSpan(mut mounts: Signal<BTreeMap<u32, Event<MountedData>>>, current_index: Signal<u32>, index: u32, text: String) -> Element {
    let border = use_memo(move || if index == current_index() { "black" } else { "transparent" });
    rsx! {
        span {
            class: HIGHLIGHT_CLASS,
            onmounted: move |event| async move {
                mounts.write().insert(index, event.clone());
            },
            style: "border: 2px dotted {border};",
            "{text}"
        }
    }
}
