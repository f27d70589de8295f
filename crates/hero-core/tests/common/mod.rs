// Shared fakes for the host-side tests: a page host that counts listeners and
// pending frames, and a surface that records draw calls.

#![allow(dead_code)]

use hero_core::{
    Blend, FrameHost, FrameId, HeroHost, HostError, HostEvent, PathSeg, StrokeStyle, Surface,
    Viewport,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback = Rc<RefCell<Box<dyn FnMut()>>>;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Resize(Viewport),
    Clear,
    Blend(Blend),
    Stroke(StrokeStyle),
    Path(Vec<PathSeg>),
}

#[derive(Clone)]
pub struct RecordingSurface {
    size: Viewport,
    pub ops: Rc<RefCell<Vec<DrawOp>>>,
}

impl RecordingSurface {
    pub fn new(size: Viewport) -> Self {
        Self {
            size,
            ops: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.borrow().iter().filter(|op| pred(op)).count()
    }

    pub fn paths(&self) -> Vec<Vec<PathSeg>> {
        self.ops
            .borrow()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Path(p) => Some(p.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Viewport {
        self.size
    }

    fn resize(&mut self, viewport: Viewport) {
        self.size = viewport;
        self.ops.borrow_mut().push(DrawOp::Resize(viewport));
    }

    fn clear(&mut self) {
        self.ops.borrow_mut().push(DrawOp::Clear);
    }

    fn set_blend(&mut self, blend: Blend) {
        self.ops.borrow_mut().push(DrawOp::Blend(blend));
    }

    fn set_stroke(&mut self, style: &StrokeStyle) {
        self.ops.borrow_mut().push(DrawOp::Stroke(*style));
    }

    fn stroke_path(&mut self, path: &[PathSeg]) {
        self.ops.borrow_mut().push(DrawOp::Path(path.to_vec()));
    }
}

/// Frame source delivering frames only when a test asks.
#[derive(Clone, Default)]
pub struct ManualFrames {
    state: Rc<RefCell<FrameState>>,
}

#[derive(Default)]
struct FrameState {
    next_id: i32,
    pending: Vec<FrameId>,
    requested: usize,
    cancelled: usize,
    fail_requests: bool,
}

impl ManualFrames {
    pub fn pending(&self) -> Vec<FrameId> {
        self.state.borrow().pending.clone()
    }

    pub fn requested(&self) -> usize {
        self.state.borrow().requested
    }

    pub fn cancelled(&self) -> usize {
        self.state.borrow().cancelled
    }

    pub fn fail_requests(&self, fail: bool) {
        self.state.borrow_mut().fail_requests = fail;
    }

    /// Remove and return the outstanding requests, as the display would when
    /// it fires them.
    pub fn take_pending(&self) -> Vec<FrameId> {
        std::mem::take(&mut self.state.borrow_mut().pending)
    }
}

impl FrameHost for ManualFrames {
    fn request_frame(&mut self) -> Result<FrameId, HostError> {
        let mut s = self.state.borrow_mut();
        if s.fail_requests {
            return Err(HostError::Js("requestAnimationFrame refused".into()));
        }
        s.next_id += 1;
        let id = FrameId(s.next_id);
        s.pending.push(id);
        s.requested += 1;
        Ok(id)
    }

    fn cancel_frame(&mut self, id: FrameId) {
        let mut s = self.state.borrow_mut();
        s.pending.retain(|p| *p != id);
        s.cancelled += 1;
    }
}

pub struct FakeState {
    pub viewport: Viewport,
    pub scroll_y: f64,
    pub container_height: Option<f64>,
    pub surface_available: bool,
    pub refused: Vec<HostEvent>,
    pub indicator_prepared: usize,
    pub indicator_offsets: Vec<f64>,
    pub scroll_into_view_calls: usize,
    pub surfaces: Vec<RecordingSurface>,
    next_listener: u64,
    listeners: Vec<(u64, HostEvent, Callback)>,
    frame_callback: Option<Callback>,
}

/// In-memory page host.
pub struct FakeHost {
    state: Rc<RefCell<FakeState>>,
    frames: ManualFrames,
}

pub struct FakeListener {
    id: u64,
    state: Weak<RefCell<FakeState>>,
}

impl Drop for FakeListener {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state
                .borrow_mut()
                .listeners
                .retain(|(id, _, _)| *id != self.id);
        }
    }
}

impl FakeHost {
    pub fn new(viewport: Viewport) -> Rc<Self> {
        Rc::new(Self {
            state: Rc::new(RefCell::new(FakeState {
                viewport,
                scroll_y: 0.0,
                container_height: Some(500.0),
                surface_available: true,
                refused: Vec::new(),
                indicator_prepared: 0,
                indicator_offsets: Vec::new(),
                scroll_into_view_calls: 0,
                surfaces: Vec::new(),
                next_listener: 0,
                listeners: Vec::new(),
                frame_callback: None,
            })),
            frames: ManualFrames::default(),
        })
    }

    pub fn state(&self) -> std::cell::RefMut<'_, FakeState> {
        self.state.borrow_mut()
    }

    pub fn frames_handle(&self) -> &ManualFrames {
        &self.frames
    }

    pub fn listener_count(&self, event: HostEvent) -> usize {
        self.state
            .borrow()
            .listeners
            .iter()
            .filter(|(_, e, _)| *e == event)
            .count()
    }

    pub fn total_listeners(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.pending().len()
    }

    pub fn last_offset(&self) -> Option<f64> {
        self.state.borrow().indicator_offsets.last().copied()
    }

    pub fn last_surface(&self) -> Option<RecordingSurface> {
        self.state.borrow().surfaces.last().cloned()
    }

    /// Fire every listener registered for `event`.
    pub fn emit(&self, event: HostEvent) {
        let handlers: Vec<Callback> = self
            .state
            .borrow()
            .listeners
            .iter()
            .filter(|(_, e, _)| *e == event)
            .map(|(_, _, h)| h.clone())
            .collect();
        for h in handlers {
            (&mut *h.borrow_mut())();
        }
    }

    pub fn scroll_to(&self, y: f64) {
        self.state.borrow_mut().scroll_y = y;
        self.emit(HostEvent::Scroll);
    }

    pub fn resize_to(&self, viewport: Viewport) {
        self.state.borrow_mut().viewport = viewport;
        self.emit(HostEvent::Resize);
    }

    /// Deliver the outstanding frame requests. Returns how many fired.
    pub fn run_frame(&self) -> usize {
        let due = self.frames.take_pending();
        let cb = self.state.borrow().frame_callback.clone();
        if let Some(cb) = cb {
            for _ in &due {
                (&mut *cb.borrow_mut())();
            }
        }
        due.len()
    }

    pub fn run_frames(&self, n: usize) {
        for _ in 0..n {
            self.run_frame();
        }
    }
}

impl HeroHost for FakeHost {
    type Listener = FakeListener;
    type Frames = ManualFrames;
    type Surface = RecordingSurface;

    fn viewport(&self) -> Viewport {
        self.state.borrow().viewport
    }

    fn scroll_y(&self) -> f64 {
        self.state.borrow().scroll_y
    }

    fn container_height(&self) -> Option<f64> {
        self.state.borrow().container_height
    }

    fn listen(
        &self,
        event: HostEvent,
        handler: Box<dyn FnMut()>,
    ) -> Result<Self::Listener, HostError> {
        let mut s = self.state.borrow_mut();
        if s.refused.contains(&event) {
            return Err(HostError::MissingElement(event.name().to_string()));
        }
        s.next_listener += 1;
        let id = s.next_listener;
        s.listeners.push((id, event, Rc::new(RefCell::new(handler))));
        Ok(FakeListener {
            id,
            state: Rc::downgrade(&self.state),
        })
    }

    fn acquire_surface(&self) -> Result<Self::Surface, HostError> {
        let mut s = self.state.borrow_mut();
        if !s.surface_available {
            return Err(HostError::NoSurface);
        }
        let surface = RecordingSurface::new(Viewport::new(0.0, 0.0));
        s.surfaces.push(surface.clone());
        Ok(surface)
    }

    fn frames(&self, on_frame: Box<dyn FnMut()>) -> Self::Frames {
        self.state.borrow_mut().frame_callback = Some(Rc::new(RefCell::new(on_frame)));
        self.frames.clone()
    }

    fn prepare_indicator(&self) {
        self.state.borrow_mut().indicator_prepared += 1;
    }

    fn set_indicator_offset(&self, offset_vh: f64) {
        self.state.borrow_mut().indicator_offsets.push(offset_vh);
    }

    fn scroll_target_into_view(&self) {
        self.state.borrow_mut().scroll_into_view_calls += 1;
    }
}

pub fn viewport() -> Viewport {
    Viewport::new(1280.0, 720.0)
}
