//! Stage - the document capabilities a rotator needs
//!
//! Implementors provide the raw DOM operations (select by class, look up
//! and append a <style>, set a style property, add/remove a class, flush
//! layout). The rotator-facing operations are built on top of them here,
//! so their ordering is shared by `DomStage` and the test fake alike.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::error::RotatorError;
use crate::primitives::Transition;

pub trait Stage {
    type Element;

    /// Elements currently carrying `class_name`
    fn select(&self, class_name: &str) -> Result<Vec<Self::Element>, RotatorError>;

    /// Whether an element with this id is already in the document
    fn has_element_id(&self, id: &str) -> bool;

    /// Appends a <style id=..> holding `css` to the document head
    fn append_style(&self, id: &str, css: &str) -> Result<(), RotatorError>;

    fn set_style_property(
        &self,
        element: &Self::Element,
        name: &str,
        value: &str,
    ) -> Result<(), RotatorError>;

    fn add_class(&self, element: &Self::Element, class: &str) -> Result<(), RotatorError>;

    fn remove_class(&self, element: &Self::Element, class: &str) -> Result<(), RotatorError>;

    /// Forces style recalculation so a disabled transition is observed
    fn flush_layout(&self, element: &Self::Element);

    /// Injects the transition rules unless already present.
    /// Returns whether a stylesheet was added.
    fn install_stylesheet(&self, transition: &Transition) -> Result<bool, RotatorError> {
        let id = transition.style_id();
        if self.has_element_id(&id) {
            return Ok(false);
        }
        self.append_style(&id, &transition.stylesheet_css())?;
        Ok(true)
    }

    /// Writes the prefixed property first so `transform` wins where both apply
    fn set_transform(&self, element: &Self::Element, transform: &str) -> Result<(), RotatorError> {
        self.set_style_property(element, "-webkit-transform", transform)?;
        self.set_style_property(element, "transform", transform)
    }

    /// Switches the element between the enabled and disabled transition
    /// class. The old class goes first: never both at once.
    fn set_transition(
        &self,
        element: &Self::Element,
        transition: &Transition,
        enabled: bool,
    ) -> Result<(), RotatorError> {
        let (on, off) = if enabled {
            (transition.enabled_class(), transition.disabled_class())
        } else {
            (transition.disabled_class(), transition.enabled_class())
        };
        self.remove_class(element, &off)?;
        self.add_class(element, &on)
    }
}

/// Stage backed by the live browser document
#[derive(Clone)]
pub struct DomStage {
    document: Document,
}

impl DomStage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Stage for the global window's document
    pub fn from_window() -> Result<Self, RotatorError> {
        let window = web_sys::window().ok_or(RotatorError::NoWindow)?;
        let document = window.document().ok_or(RotatorError::NoDocument)?;
        Ok(Self::new(document))
    }
}

impl Stage for DomStage {
    type Element = HtmlElement;

    fn select(&self, class_name: &str) -> Result<Vec<HtmlElement>, RotatorError> {
        let elems = self.document.get_elements_by_class_name(class_name);
        let mut found = Vec::with_capacity(elems.length() as usize);
        for i in 0..elems.length() {
            // Non-HTML nodes (e.g. SVG) have no inline style to rotate
            if let Some(el) = elems.item(i).and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
                found.push(el);
            }
        }
        Ok(found)
    }

    fn has_element_id(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn append_style(&self, id: &str, css: &str) -> Result<(), RotatorError> {
        let head = self.document.head().ok_or(RotatorError::NoHead)?;
        let style = self.document.create_element("style")?;
        style.set_id(id);
        style.set_text_content(Some(css));
        head.append_child(&style)?;
        Ok(())
    }

    fn set_style_property(
        &self,
        element: &HtmlElement,
        name: &str,
        value: &str,
    ) -> Result<(), RotatorError> {
        element.style().set_property(name, value)?;
        Ok(())
    }

    fn add_class(&self, element: &HtmlElement, class: &str) -> Result<(), RotatorError> {
        element.class_list().add_1(class)?;
        Ok(())
    }

    fn remove_class(&self, element: &HtmlElement, class: &str) -> Result<(), RotatorError> {
        element.class_list().remove_1(class)?;
        Ok(())
    }

    fn flush_layout(&self, element: &HtmlElement) {
        // Reading a layout property forces the pending style change through
        let _ = element.offset_height();
    }
}
