//! Hover tooltip attached to any trigger content.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TooltipSide {
    Top,
    Right,
}

impl TooltipSide {
    fn position_style(&self) -> &'static str {
        match self {
            TooltipSide::Top => "bottom: calc(100% + 6px); left: 50%; transform: translateX(-50%);",
            TooltipSide::Right => "left: calc(100% + 8px); top: 50%; transform: translateY(-50%);",
        }
    }
}

#[component]
pub fn Tooltip(label: String, #[props(default = TooltipSide::Top)] side: TooltipSide, children: Element) -> Element {
    let mut is_visible = use_signal(|| false);
    let position = side.position_style();
    rsx! {
        span {
            style: "position: relative; display: inline-flex;",
            onmouseenter: move |_| is_visible.set(true),
            onmouseleave: move |_| is_visible.set(false),
            onfocusin: move |_| is_visible.set(true),
            onfocusout: move |_| is_visible.set(false),
            {children}
            if is_visible() {
                span {
                    role: "tooltip",
                    class: "copycheck-tooltip",
                    style: "
                        position: absolute;
                        {position}
                        z-index: 1001;
                        white-space: nowrap;
                        color: white;
                        background-color: #1C212D;
                        padding: 4px 8px;
                        border-radius: 4px;
                        font-size: 13px;
                        pointer-events: none;
                    ",
                    "{label}"
                }
            }
        }
    }
}
