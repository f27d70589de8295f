//! Frame scheduling abstraction.
//!
//! The browser delivers frames through `requestAnimationFrame`; tests deliver
//! them by hand. [`AnimationLoop`] keeps at most one request outstanding and
//! cancels it on `stop`, on restart, and on drop.

use crate::error::HostError;

/// Handle for one outstanding frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameId(pub i32);

pub trait FrameHost {
    fn request_frame(&mut self) -> Result<FrameId, HostError>;
    fn cancel_frame(&mut self, id: FrameId);
}

pub struct AnimationLoop<F: FrameHost> {
    host: F,
    pending: Option<FrameId>,
    running: bool,
    frames: u64,
}

impl<F: FrameHost> AnimationLoop<F> {
    pub fn new(host: F) -> Self {
        Self {
            host,
            pending: None,
            running: false,
            frames: 0,
        }
    }

    /// Begin requesting frames. Any outstanding request is cancelled first,
    /// so restarting never leaves two loops alive.
    pub fn start(&mut self) -> Result<(), HostError> {
        self.cancel_pending();
        self.running = true;
        match self.host.request_frame() {
            Ok(id) => {
                self.pending = Some(id);
                Ok(())
            }
            Err(e) => {
                self.running = false;
                Err(e)
            }
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.cancel_pending();
    }

    /// Called from the host's frame callback.
    ///
    /// Returns `true` when the caller should draw this frame. A callback with
    /// no matching request (stale, or after `stop`) returns `false`. The next
    /// frame is requested before returning so the loop keeps running.
    pub fn tick(&mut self) -> bool {
        if self.pending.take().is_none() || !self.running {
            return false;
        }
        match self.host.request_frame() {
            Ok(id) => self.pending = Some(id),
            Err(e) => {
                log::warn!("frame request failed, stopping animation: {e}");
                self.running = false;
            }
        }
        self.frames += 1;
        true
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn pending(&self) -> Option<FrameId> {
        self.pending
    }

    /// Frames delivered since construction.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn host(&self) -> &F {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut F {
        &mut self.host
    }

    fn cancel_pending(&mut self) {
        if let Some(id) = self.pending.take() {
            self.host.cancel_frame(id);
        }
    }
}

impl<F: FrameHost> Drop for AnimationLoop<F> {
    fn drop(&mut self) {
        self.stop();
    }
}
