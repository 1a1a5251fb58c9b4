//! Interaction state machine
//!
//! Routes normalized input events to the session: picking drives the
//! brush preview and removal hover, releases commit or remove, drags
//! orbit the camera, keys select colors and pan the world. Every
//! mutation re-encodes the world and writes the token to the store.

use crate::codec;
use crate::core::types::{IVec3, Vec2};
use crate::editor::event::{InputEvent, Key};
use crate::editor::session::EditorSession;
use crate::editor::store::TokenStore;
use crate::palette::ColorIndex;
use crate::pick::{self, PickResult};

/// Pointer travel (in pixels) separating a click from an orbit drag
pub const DRAG_THRESHOLD: f32 = 5.0;

/// Orbit angle change per pixel of drag, in degrees
const ORBIT_PER_PIXEL: f32 = 0.5;

/// Pointer state captured at press time
struct DragState {
    start: Vec2,
    theta: f32,
    phi: f32,
}

/// Event-driven controller over one editor session
pub struct InteractionController<S: TokenStore> {
    session: EditorSession,
    store: S,
    pointer: Vec2,
    drag: Option<DragState>,
    shift_held: bool,
    pending_clear: bool,
}

impl<S: TokenStore> InteractionController<S> {
    /// Create a controller, loading any token the store holds
    pub fn new(viewport: Vec2, store: S) -> Self {
        let mut session = EditorSession::new(viewport);
        if let Some(token) = store.load() {
            session.load_token(&token);
        }
        Self {
            session,
            store,
            pointer: viewport * 0.5,
            drag: None,
            shift_held: false,
            pending_clear: false,
        }
    }

    /// Read access to the session (snapshots, world inspection)
    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    /// Mutable session access for hosts that seed or resize
    pub fn session_mut(&mut self) -> &mut EditorSession {
        &mut self.session
    }

    /// The token store this controller persists into
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Process one input event
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => self.on_pointer_move(Vec2::new(x, y)),
            InputEvent::PointerDown { x, y } => self.on_pointer_down(Vec2::new(x, y)),
            InputEvent::PointerUp { x, y } => self.on_pointer_up(Vec2::new(x, y)),
            InputEvent::Wheel { delta_y } => self.on_wheel(delta_y),
            InputEvent::KeyDown(key) => self.on_key_down(key),
            InputEvent::KeyUp(key) => self.on_key_up(key),
        }
    }

    fn on_pointer_move(&mut self, position: Vec2) {
        self.pointer = position;
        if let Some(drag) = &self.drag {
            let delta = position - drag.start;
            self.session.camera.set_orbit(
                drag.theta - delta.x * ORBIT_PER_PIXEL,
                drag.phi + delta.y * ORBIT_PER_PIXEL,
            );
        }
        self.refresh_target();
        self.session.request_redraw();
    }

    fn on_pointer_down(&mut self, position: Vec2) {
        self.pointer = position;
        self.drag = Some(DragState {
            start: position,
            theta: self.session.camera.theta,
            phi: self.session.camera.phi,
        });
    }

    fn on_pointer_up(&mut self, position: Vec2) {
        self.pointer = position;
        let dragged = self
            .drag
            .take()
            .is_some_and(|drag| (position - drag.start).length() > DRAG_THRESHOLD);
        if dragged {
            // Orbit gesture, not a click
            return;
        }

        if self.shift_held {
            if let Some(index) = self.session.hovered() {
                self.session.world.remove_index(index);
                self.session.set_hovered(None);
                self.persist();
            }
        } else if let Some(cell) = self.session.brush_cell() {
            self.session.world.add(cell, self.session.selected_color());
            self.persist();
        }

        self.refresh_target();
        self.session.request_redraw();
    }

    fn on_wheel(&mut self, delta_y: f32) {
        self.session.camera.zoom(delta_y);
        self.refresh_target();
        self.session.request_redraw();
    }

    fn on_key_down(&mut self, key: Key) {
        match key {
            Key::Digit(digit) => {
                if let Some(color) = ColorIndex::from_digit_key(digit) {
                    self.session.set_selected_color(color);
                }
            }
            Key::Shift => {
                self.shift_held = true;
                self.refresh_target();
                self.session.request_redraw();
            }
            Key::ArrowLeft => self.pan(-1, 0),
            Key::ArrowUp => self.pan(0, -1),
            Key::ArrowRight => self.pan(1, 0),
            Key::ArrowDown => self.pan(0, 1),
        }
    }

    fn on_key_up(&mut self, key: Key) {
        if key == Key::Shift {
            self.shift_held = false;
            self.refresh_target();
            self.session.request_redraw();
        }
    }

    /// Shift the whole world by one cell horizontally
    fn pan(&mut self, dx: i32, dz: i32) {
        self.session.world.translate_all(IVec3::new(dx, 0, dz));
        self.persist();
        self.refresh_target();
        self.session.request_redraw();
    }

    /// Arm the destructive clear; nothing changes until confirmed
    pub fn request_clear(&mut self) {
        self.pending_clear = true;
    }

    /// Whether a clear is awaiting confirmation
    pub fn clear_pending(&self) -> bool {
        self.pending_clear
    }

    /// Perform an armed clear
    pub fn confirm_clear(&mut self) {
        if !self.pending_clear {
            return;
        }
        self.pending_clear = false;
        self.session.world.clear();
        self.session.set_hovered(None);
        self.persist();
        self.refresh_target();
        self.session.request_redraw();
    }

    /// Decline an armed clear; no state changes
    pub fn cancel_clear(&mut self) {
        self.pending_clear = false;
    }

    /// Re-pick under the current pointer and update brush/hover state
    fn refresh_target(&mut self) {
        let ray = self.session.pointer_ray(self.pointer);
        let result = pick::pick(
            &ray,
            &self.session.world,
            self.session.ground,
            self.session.brush_cell(),
            self.shift_held,
        );
        match result {
            PickResult::Place { cell } => {
                self.session.set_hovered(None);
                self.session.set_brush_cell(Some(cell));
            }
            PickResult::RemoveHover { voxel } => {
                self.session.set_brush_cell(None);
                self.session.set_hovered(Some(voxel));
            }
            PickResult::NoTarget => {
                self.session.set_hovered(None);
                self.session.set_brush_cell(None);
            }
        }
    }

    /// Write the token back if the world mutated
    fn persist(&mut self) {
        if self.session.world.take_dirty() {
            self.store.store(&codec::encode(&self.session.world));
        }
    }
}
