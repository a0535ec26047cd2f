//! Pointer input plumbing
//!
//! Touch and mouse events arrive in screen space (pixels, origin top-left, y down).
//! They are mapped into scene space and queued as `PointerEvent`s for the next tick.

use glam::Vec2;

use crate::sim::{PointerEvent, PointerPhase, SceneBounds, TickInput};

/// Touch lifecycle as reported by touch screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Began,
    Moved,
    Ended,
    Cancelled,
}

impl From<TouchPhase> for PointerPhase {
    fn from(phase: TouchPhase) -> Self {
        match phase {
            TouchPhase::Began => PointerPhase::Press,
            TouchPhase::Moved => PointerPhase::Move,
            TouchPhase::Ended | TouchPhase::Cancelled => PointerPhase::Release,
        }
    }
}

/// Mouse button activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    Down,
    Dragged,
    Up,
}

impl From<MouseAction> for PointerPhase {
    fn from(action: MouseAction) -> Self {
        match action {
            MouseAction::Down => PointerPhase::Press,
            MouseAction::Dragged => PointerPhase::Move,
            MouseAction::Up => PointerPhase::Release,
        }
    }
}

/// Maps screen pixels onto the centred, y-up scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMapping {
    pub screen: Vec2,
    pub scene: SceneBounds,
}

impl ScreenMapping {
    pub fn new(screen_width: f32, screen_height: f32, scene: SceneBounds) -> Self {
        Self {
            screen: Vec2::new(screen_width, screen_height),
            scene,
        }
    }

    pub fn to_scene(&self, screen_pos: Vec2) -> Vec2 {
        if self.screen.x <= 0.0 || self.screen.y <= 0.0 {
            return Vec2::ZERO;
        }
        let normalized = screen_pos / self.screen - Vec2::splat(0.5);
        Vec2::new(
            normalized.x * self.scene.width,
            -normalized.y * self.scene.height,
        )
    }
}

/// Buffers pointer events between frames
#[derive(Debug, Clone)]
pub struct InputCollector {
    mapping: ScreenMapping,
    pending: Vec<PointerEvent>,
}

impl InputCollector {
    pub fn new(mapping: ScreenMapping) -> Self {
        Self {
            mapping,
            pending: Vec::new(),
        }
    }

    /// One batch of touches sharing a phase
    pub fn touches(&mut self, phase: TouchPhase, positions: &[Vec2]) {
        for &pos in positions {
            self.push(phase.into(), pos);
        }
    }

    pub fn mouse(&mut self, action: MouseAction, pos: Vec2) {
        self.push(action.into(), pos);
    }

    fn push(&mut self, phase: PointerPhase, screen_pos: Vec2) {
        let pos = self.mapping.to_scene(screen_pos);
        self.pending.push(PointerEvent::new(phase, pos));
    }

    /// Hand everything collected so far to the next tick
    pub fn take(&mut self) -> TickInput {
        TickInput {
            pointer: std::mem::take(&mut self.pending),
        }
    }
}
