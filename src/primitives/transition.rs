//! Transition - the CSS transition classes a rotator toggles
//!
//! Transition state is never written per element per tick. Two classes are
//! generated once per rotator and injected as a <style> block; switching
//! between animated and instantaneous updates is class membership only.

/// Linear `transform` transition keyed off a rotator's class marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    base_class: String,
    duration_millis: u32,
}

impl Transition {
    pub fn new(base_class: impl Into<String>, duration_millis: u32) -> Self {
        Self {
            base_class: base_class.into(),
            duration_millis,
        }
    }

    /// Class enabling the animated transition, e.g. `rotating-y-transition`
    pub fn enabled_class(&self) -> String {
        format!("{}-transition", self.base_class)
    }

    /// Class disabling the transition, e.g. `rotating-y-no-transition`
    pub fn disabled_class(&self) -> String {
        format!("{}-no-transition", self.base_class)
    }

    /// Id of the injected <style> element; used to inject only once
    pub fn style_id(&self) -> String {
        format!("{}-style", self.base_class)
    }

    /// Both rule sets, with `-webkit-` duplicates for older engines
    pub fn stylesheet_css(&self) -> String {
        let ms = self.duration_millis;
        format!(
            r#"
.{enabled} {{ -webkit-transition: -webkit-transform {ms}ms linear; transition: transform {ms}ms linear; }}
.{disabled} {{ -webkit-transition: none; transition: none; }}
"#,
            enabled = self.enabled_class(),
            disabled = self.disabled_class(),
        )
    }
}
