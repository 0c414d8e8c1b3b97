//! Demo page - host document for the two rotators
//!
//! Renders a row of Y-axis cards and a row of X-axis cards, then starts
//! the rotators once the page has mounted. The rotators live in a hook so
//! their intervals last as long as the page.
//!
//! The rotated card is injected via dangerous_inner_html: Dioxus never
//! diffs its class or style, so a re-render cannot strip the transition
//! class or inline transform the rotator writes.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::rotator::{self, DomRotator, RotatorConfig};

/// Bootstrap order: Y first, then X
pub const ROTATORS: [RotatorConfig; 2] = [RotatorConfig::Y_AXIS, RotatorConfig::X_AXIS];

/// Starts one rotator per config against the global document. Failures
/// are logged per rotator and do not affect the others.
pub fn start_rotators(configs: &[RotatorConfig]) -> Vec<DomRotator> {
    rotator::start_each(configs, DomRotator::for_document)
}

const CARD_STYLE: &str = "width: 160px; height: 200px; border-radius: 12px; display: flex; align-items: center; justify-content: center; font-size: 15px; font-weight: 600; color: white; backface-visibility: visible;";

/// Markup for one rotated card, carrying only the rotator's class marker
fn card_html(marker: &str, label: &str, background: &str) -> String {
    format!(r#"<div class="{marker}" style="{CARD_STYLE} background: {background};">{label}</div>"#)
}

#[component]
fn RotatingCard(marker: &'static str, label: String, background: &'static str) -> Element {
    let card = card_html(marker, &label, background);
    rsx! {
        div {
            style: "transform-style: preserve-3d;",
            dangerous_inner_html: "{card}"
        }
    }
}

#[allow(non_snake_case)]
pub fn Demo() -> Element {
    let rotators = use_hook(|| Rc::new(RefCell::new(Vec::<DomRotator>::new())));

    // Runs after mount, when the cards exist in the document
    use_effect(move || {
        *rotators.borrow_mut() = start_rotators(&ROTATORS);
    });

    rsx! {
        div {
            style: "min-height: 100vh; background: #0f0f1a; display: flex; flex-direction: column; align-items: center; gap: 48px; padding: 40px; font-family: system-ui, sans-serif;",

            h2 {
                style: "color: #e5e7eb; margin: 0; font-size: 20px;",
                "Rotating"
            }

            div {
                style: "display: flex; gap: 32px; perspective: 800px;",
                for i in 1..=3 {
                    RotatingCard {
                        marker: RotatorConfig::Y_AXIS.class_name,
                        label: format!("Y {i}"),
                        background: "#3b82f6",
                    }
                }
            }

            div {
                style: "display: flex; gap: 32px; perspective: 800px;",
                for i in 1..=3 {
                    RotatingCard {
                        marker: RotatorConfig::X_AXIS.class_name,
                        label: format!("X {i}"),
                        background: "#7c3aed",
                    }
                }
            }
        }
    }
}
