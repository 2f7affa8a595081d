//! Button Components
//!
//! - Primary: the call action, full accent background
//! - Secondary: the remaining contact actions
//! - Ghost: text-only controls inside panels
//!
//! Buttons optionally report focus and blur so the page model can track the
//! active element for focus restoration.

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Fired when the button receives keyboard or pointer focus
    #[props(default)]
    pub onfocus: Option<EventHandler<()>>,
    /// Fired on `focusout`
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// DOM id; required for buttons that act as overlay triggers
    #[props(default)]
    pub id: Option<String>,
    #[props(default)]
    pub aria_label: Option<String>,
    /// Mirrors the state of the panel this button controls
    #[props(default)]
    pub aria_expanded: Option<bool>,
    #[props(default)]
    pub aria_controls: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

/// Styled action button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         id: "callButton".to_string(),
///         aria_expanded: call_open,
///         onclick: move |_| open_call(),
///         "Llamar"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_class(props.variant.class(), props.class.as_deref());
    let onclick = props.onclick;
    let onfocus = props.onfocus;
    let onblur = props.onblur;

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            id: props.id.clone(),
            disabled: props.disabled,
            "aria-label": props.aria_label.clone(),
            "aria-expanded": props.aria_expanded.map(bool_attr),
            "aria-controls": props.aria_controls.clone(),
            onclick: move |_| {
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },
            onfocus: move |_| {
                if let Some(handler) = &onfocus {
                    handler.call(());
                }
            },
            onfocusout: move |_| {
                if let Some(handler) = &onblur {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, toggle)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    pub children: Element,
    pub onclick: EventHandler<()>,
    #[props(default)]
    pub onfocus: Option<EventHandler<()>>,
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
    /// Accessible label for screen readers
    pub aria_label: String,
    #[props(default)]
    pub aria_expanded: Option<bool>,
    #[props(default)]
    pub aria_controls: Option<String>,
    #[props(default)]
    pub id: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_class("icon-btn", props.class.as_deref());
    let onclick = props.onclick;
    let onfocus = props.onfocus;
    let onblur = props.onblur;

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            id: props.id.clone(),
            "aria-label": "{props.aria_label}",
            "aria-expanded": props.aria_expanded.map(bool_attr),
            "aria-controls": props.aria_controls.clone(),
            onclick: move |_| onclick.call(()),
            onfocus: move |_| {
                if let Some(handler) = &onfocus {
                    handler.call(());
                }
            },
            onfocusout: move |_| {
                if let Some(handler) = &onblur {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(
    onclick: EventHandler<()>,
    #[props(default = "Close".to_string())] label: String,
    #[props(default)] id: Option<String>,
    #[props(default)] onfocus: Option<EventHandler<()>>,
    #[props(default)] onblur: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            onfocus: onfocus,
            onblur: onblur,
            aria_label: label,
            id: id,
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}
