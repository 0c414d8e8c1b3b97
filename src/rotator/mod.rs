//! Rotator - continuously rotates a class of elements around one axis
//!
//! A rotator alternates between two kinds of render:
//!   animated: transform written with the transition class active
//!   hard jump: transition disabled, transform written, layout flushed,
//!              transition re-enabled (the browser never interpolates it)
//!
//! Every tick animates one step. When the step crosses the end of the
//! range the rotator first hard-jumps to the opposite boundary, so the
//! visible motion keeps going the same way without a stalled interval.

pub mod config;
pub mod cycle;

pub use config::RotatorConfig;
pub use cycle::{Advance, Cycle};

use std::cell::RefCell;
use std::rc::Rc;

use crate::clock::{Clock, IntervalClock};
use crate::error::RotatorError;
use crate::primitives::{Angle, Transition};
use crate::stage::{DomStage, Stage};

/// Rotator driving the live document with browser intervals
pub type DomRotator = Rotator<DomStage, IntervalClock>;

/// State shared between the rotator and its timer callback
struct Shared<S: Stage> {
    config: RotatorConfig,
    transition: Transition,
    cycle: Cycle,
    stage: S,
    targets: Vec<S::Element>,
}

impl<S: Stage> Shared<S> {
    fn hard_jump(&self, angle: Angle) -> Result<(), RotatorError> {
        let css = angle.to_css(self.config.axis);
        for el in &self.targets {
            self.stage.set_transition(el, &self.transition, false)?;
            self.stage.set_transform(el, &css)?;
            self.stage.flush_layout(el);
            self.stage.set_transition(el, &self.transition, true)?;
        }
        Ok(())
    }

    fn animate_to(&self, angle: Angle) -> Result<(), RotatorError> {
        let css = angle.to_css(self.config.axis);
        for el in &self.targets {
            self.stage.set_transform(el, &css)?;
        }
        Ok(())
    }

    fn tick(&mut self) -> Result<Advance, RotatorError> {
        let advance = self.cycle.advance();
        if let Some(boundary) = advance.reset {
            log::debug!(
                "{}: wrapped to {}deg",
                self.config.class_name,
                boundary.degrees()
            );
            self.hard_jump(boundary)?;
        }
        self.animate_to(advance.angle)?;
        Ok(advance)
    }
}

pub struct Rotator<S: Stage, C: Clock> {
    shared: Rc<RefCell<Shared<S>>>,
    clock: C,
    timer: Option<C::Timer>,
}

impl DomRotator {
    /// Rotator for the global document
    pub fn for_document(config: RotatorConfig) -> Result<Self, RotatorError> {
        Self::new(config, DomStage::from_window()?, IntervalClock)
    }
}

impl<S: Stage + 'static, C: Clock> Rotator<S, C> {
    pub fn new(config: RotatorConfig, stage: S, clock: C) -> Result<Self, RotatorError> {
        config.validate()?;
        let shared = Shared {
            transition: config.transition(),
            cycle: Cycle::new(&config),
            config,
            stage,
            targets: Vec::new(),
        };
        Ok(Self {
            shared: Rc::new(RefCell::new(shared)),
            clock,
            timer: None,
        })
    }

    /// Captures targets, renders the start angle without animation, ticks
    /// once and (re)arms the timer. Safe to call again: the previous timer
    /// is cancelled and the stylesheet is not injected twice.
    pub fn start(&mut self) -> Result<(), RotatorError> {
        {
            let mut shared = self.shared.borrow_mut();
            let targets = shared.stage.select(shared.config.class_name)?;
            if targets.is_empty() {
                log::warn!("{}: no elements to rotate", shared.config.class_name);
            }
            shared.targets = targets;
            shared.cycle.reset();

            if shared.stage.install_stylesheet(&shared.transition)? {
                log::debug!("{}: transition stylesheet installed", shared.config.class_name);
            }

            let start = shared.cycle.start();
            shared.hard_jump(start)?;
            shared.tick()?;
        }

        if let Some(previous) = self.timer.take() {
            self.clock.cancel(previous);
        }

        let period = self.shared.borrow().config.speed_millis;
        let weak = Rc::downgrade(&self.shared);
        let timer = self.clock.repeat(
            period,
            Box::new(move || {
                let Some(shared) = weak.upgrade() else {
                    return;
                };
                let mut shared = shared.borrow_mut();
                if let Err(err) = shared.tick() {
                    log::error!("{}: tick failed: {err}", shared.config.class_name);
                }
            }),
        );
        self.timer = Some(timer);

        let shared = self.shared.borrow();
        log::info!(
            "{}: rotating {} element(s) around the {} every {}ms, now at {}deg",
            shared.config.class_name,
            shared.targets.len(),
            shared.config.axis,
            period,
            shared.cycle.current().degrees(),
        );
        Ok(())
    }
}

/// Builds and starts one rotator per config. A rotator that fails is
/// logged and skipped; the others keep running.
pub fn start_each<S, C, F>(configs: &[RotatorConfig], mut build: F) -> Vec<Rotator<S, C>>
where
    S: Stage + 'static,
    C: Clock,
    F: FnMut(RotatorConfig) -> Result<Rotator<S, C>, RotatorError>,
{
    configs
        .iter()
        .filter_map(|config| {
            let started = build(config.clone()).and_then(|mut rotator| {
                rotator.start()?;
                Ok(rotator)
            });
            match started {
                Ok(rotator) => Some(rotator),
                Err(err) => {
                    log::error!("{}: failed to start: {err}", config.class_name);
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
impl<S: Stage + 'static, C: Clock> Rotator<S, C> {
    fn angle(&self) -> Angle {
        self.shared.borrow().cycle.current()
    }

    fn target_count(&self) -> usize {
        self.shared.borrow().targets.len()
    }

    fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    fn tick(&self) -> Result<Advance, RotatorError> {
        self.shared.borrow_mut().tick()
    }
}

impl<S: Stage, C: Clock> Drop for Rotator<S, C> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            self.clock.cancel(timer);
        }
    }
}
