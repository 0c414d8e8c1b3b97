//! In-memory Stage and Clock used by unit tests

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::clock::Clock;
use crate::error::RotatorError;
use crate::stage::Stage;

/// Every raw DOM operation a stage performed, in order
#[derive(Debug, Clone, PartialEq)]
pub enum StageEvent {
    Stylesheet(String),
    Property { element: usize, name: String, value: String },
    AddClass { element: usize, class: String },
    RemoveClass { element: usize, class: String },
    Flush { element: usize },
}

#[derive(Default)]
struct StageState {
    selectors: HashMap<String, Vec<usize>>,
    style_ids: HashSet<String>,
    classes: HashMap<usize, Vec<String>>,
    events: Vec<StageEvent>,
}

/// Stage whose elements are plain ids registered per class. Only the raw
/// operations live here; the rotator-facing ones come from `Stage`.
#[derive(Clone, Default)]
pub struct RecordingStage {
    state: Rc<RefCell<StageState>>,
}

fn enables_transition(class: &str) -> Option<bool> {
    if class.ends_with("-no-transition") {
        Some(false)
    } else if class.ends_with("-transition") {
        Some(true)
    } else {
        None
    }
}

impl RecordingStage {
    pub fn with_elements(class_name: &str, ids: &[usize]) -> Self {
        let stage = Self::default();
        stage.add_elements(class_name, ids);
        stage
    }

    pub fn add_elements(&self, class_name: &str, ids: &[usize]) {
        self.state
            .borrow_mut()
            .selectors
            .entry(class_name.to_string())
            .or_default()
            .extend_from_slice(ids);
    }

    /// Pretends a <style> with this id is already in the document
    pub fn add_style_id(&self, id: &str) {
        self.state.borrow_mut().style_ids.insert(id.to_string());
    }

    pub fn events(&self) -> Vec<StageEvent> {
        self.state.borrow().events.clone()
    }

    pub fn clear_events(&self) {
        self.state.borrow_mut().events.clear();
    }

    pub fn stylesheet_count(&self) -> usize {
        self.state.borrow().style_ids.len()
    }

    pub fn classes(&self, element: usize) -> Vec<String> {
        self.state
            .borrow()
            .classes
            .get(&element)
            .cloned()
            .unwrap_or_default()
    }

    /// `transform` values written to one element, in order
    pub fn transforms(&self, element: usize) -> Vec<String> {
        self.transforms_with_transition(element)
            .into_iter()
            .map(|(css, _)| css)
            .collect()
    }

    /// Each `transform` written to `element` paired with whether the
    /// transition class was active at the time
    pub fn transforms_with_transition(&self, element: usize) -> Vec<(String, bool)> {
        let mut enabled = false;
        let mut out = Vec::new();
        for event in self.state.borrow().events.iter() {
            match event {
                StageEvent::AddClass { element: el, class } if *el == element => {
                    if let Some(on) = enables_transition(class) {
                        enabled = on;
                    }
                }
                StageEvent::Property { element: el, name, value }
                    if *el == element && name == "transform" =>
                {
                    out.push((value.clone(), enabled));
                }
                _ => {}
            }
        }
        out
    }

    /// State implied by the element's current transition class
    pub fn transition_enabled(&self, element: usize) -> Option<bool> {
        self.classes(element)
            .iter()
            .find_map(|class| enables_transition(class))
    }

    fn record(&self, event: StageEvent) {
        self.state.borrow_mut().events.push(event);
    }
}

impl Stage for RecordingStage {
    type Element = usize;

    fn select(&self, class_name: &str) -> Result<Vec<usize>, RotatorError> {
        Ok(self
            .state
            .borrow()
            .selectors
            .get(class_name)
            .cloned()
            .unwrap_or_default())
    }

    fn has_element_id(&self, id: &str) -> bool {
        self.state.borrow().style_ids.contains(id)
    }

    fn append_style(&self, id: &str, _css: &str) -> Result<(), RotatorError> {
        self.state.borrow_mut().style_ids.insert(id.to_string());
        self.record(StageEvent::Stylesheet(id.to_string()));
        Ok(())
    }

    fn set_style_property(&self, element: &usize, name: &str, value: &str) -> Result<(), RotatorError> {
        self.record(StageEvent::Property {
            element: *element,
            name: name.to_string(),
            value: value.to_string(),
        });
        Ok(())
    }

    fn add_class(&self, element: &usize, class: &str) -> Result<(), RotatorError> {
        {
            let mut state = self.state.borrow_mut();
            let classes = state.classes.entry(*element).or_default();
            if !classes.iter().any(|c| c == class) {
                classes.push(class.to_string());
            }
        }
        self.record(StageEvent::AddClass {
            element: *element,
            class: class.to_string(),
        });
        Ok(())
    }

    fn remove_class(&self, element: &usize, class: &str) -> Result<(), RotatorError> {
        if let Some(classes) = self.state.borrow_mut().classes.get_mut(element) {
            classes.retain(|c| c != class);
        }
        self.record(StageEvent::RemoveClass {
            element: *element,
            class: class.to_string(),
        });
        Ok(())
    }

    fn flush_layout(&self, element: &usize) {
        self.record(StageEvent::Flush { element: *element });
    }
}

struct ManualTimer {
    period_millis: u32,
    callback: Option<Box<dyn FnMut()>>,
}

/// Clock that only fires when told to
#[derive(Clone, Default)]
pub struct ManualClock {
    timers: Rc<RefCell<Vec<Option<ManualTimer>>>>,
}

impl ManualClock {
    pub fn active_timers(&self) -> usize {
        self.timers.borrow().iter().filter(|t| t.is_some()).count()
    }

    pub fn periods(&self) -> Vec<u32> {
        self.timers
            .borrow()
            .iter()
            .flatten()
            .map(|t| t.period_millis)
            .collect()
    }

    /// Runs every active timer's callback once
    pub fn fire(&self) {
        let len = self.timers.borrow().len();
        for i in 0..len {
            // The callback is taken out so it can run without a borrow held
            let callback = self.timers.borrow_mut()[i]
                .as_mut()
                .and_then(|t| t.callback.take());
            if let Some(mut callback) = callback {
                callback();
                if let Some(timer) = self.timers.borrow_mut()[i].as_mut() {
                    timer.callback = Some(callback);
                }
            }
        }
    }
}

impl Clock for ManualClock {
    type Timer = usize;

    fn repeat(&self, period_millis: u32, callback: Box<dyn FnMut()>) -> usize {
        let mut timers = self.timers.borrow_mut();
        timers.push(Some(ManualTimer {
            period_millis,
            callback: Some(callback),
        }));
        timers.len() - 1
    }

    fn cancel(&self, timer: usize) {
        if let Some(slot) = self.timers.borrow_mut().get_mut(timer) {
            *slot = None;
        }
    }
}
