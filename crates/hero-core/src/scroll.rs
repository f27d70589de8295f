//! Page scroll position as an explicit observable value.
//!
//! [`ScrollTracker`] is the only writer: it owns the host's window-level
//! `scroll` listener and pushes each reading into a [`ScrollPosition`].
//! Consumers get a [`ScrollReader`], which can read and subscribe but never
//! write. Dropping a [`Subscription`] unsubscribes.

use crate::error::HostError;
use crate::host::{HeroHost, HostEvent};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

// Passes a handler gets to catch up on values written from inside itself.
const CATCH_UP_LIMIT: usize = 8;

struct Slot {
    // Last value this handler was called with.
    seen: f64,
    handler: Box<dyn FnMut(f64)>,
}

type Handler = Rc<RefCell<Slot>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SubscriberId(u64);

#[derive(Default)]
struct Inner {
    value: f64,
    next_id: u64,
    // Usually one or two consumers (the indicator, maybe a header).
    subscribers: SmallVec<[(SubscriberId, Handler); 4]>,
}

/// Writable scroll value. Clones share the same value.
#[derive(Clone, Default)]
pub struct ScrollPosition {
    inner: Rc<RefCell<Inner>>,
}

impl ScrollPosition {
    pub fn new(initial: f64) -> Self {
        let pos = Self::default();
        pos.inner.borrow_mut().value = sanitize(initial);
        pos
    }

    #[inline]
    pub fn get(&self) -> f64 {
        self.inner.borrow().value
    }

    /// Store a new reading and notify subscribers in subscription order.
    ///
    /// Negative and non-finite readings are stored as 0. Subscribers are not
    /// notified when the stored value does not change.
    pub fn set(&self, value: f64) {
        let value = sanitize(value);
        let handlers: SmallVec<[Handler; 4]> = {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
            inner.subscribers.iter().map(|(_, h)| h.clone()).collect()
        };
        for handler in handlers {
            self.deliver(&handler);
        }
    }

    /// Bring one handler up to the current value. A handler that is already
    /// running (it set the position itself) is skipped here and catches up
    /// once its own call returns.
    fn deliver(&self, handler: &Handler) {
        let Ok(mut slot) = handler.try_borrow_mut() else {
            return;
        };
        let slot = &mut *slot;
        for _ in 0..CATCH_UP_LIMIT {
            let latest = self.get();
            if slot.seen == latest {
                return;
            }
            slot.seen = latest;
            (slot.handler)(latest);
        }
        log::warn!("[scroll] subscriber keeps rewriting the position; giving up");
    }

    pub fn reader(&self) -> ScrollReader {
        ScrollReader {
            inner: self.inner.clone(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

/// Read-only view of a [`ScrollPosition`].
#[derive(Clone)]
pub struct ScrollReader {
    inner: Rc<RefCell<Inner>>,
}

impl ScrollReader {
    #[inline]
    pub fn get(&self) -> f64 {
        self.inner.borrow().value
    }

    /// Call `handler` with every new value until the returned
    /// [`Subscription`] is dropped.
    ///
    /// If the handler writes the position itself, it is called again with
    /// the written value after it returns, so it always ends on the latest
    /// value.
    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe(&self, handler: impl FnMut(f64) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriberId(inner.next_id);
        inner.next_id += 1;
        let slot = Slot {
            seen: inner.value,
            handler: Box::new(handler),
        };
        inner.subscribers.push((id, Rc::new(RefCell::new(slot))));
        Subscription {
            id,
            source: Rc::downgrade(&self.inner),
        }
    }
}

/// Unsubscribes on drop.
pub struct Subscription {
    id: SubscriberId,
    source: Weak<RefCell<Inner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.source.upgrade() {
            inner
                .borrow_mut()
                .subscribers
                .retain(|(id, _)| *id != self.id);
        }
    }
}

/// Owns the window-level scroll listener and the value it feeds.
pub struct ScrollTracker<L> {
    position: ScrollPosition,
    _listener: L,
}

impl<L> ScrollTracker<L> {
    /// Seed the value from the host and register one `scroll` listener.
    pub fn attach<H>(host: &Rc<H>) -> Result<Self, HostError>
    where
        H: HeroHost<Listener = L>,
    {
        let position = ScrollPosition::new(host.scroll_y());
        let writer = position.clone();
        let weak_host = Rc::downgrade(host);
        let listener = host.listen(
            HostEvent::Scroll,
            Box::new(move || {
                if let Some(h) = weak_host.upgrade() {
                    writer.set(h.scroll_y());
                }
            }),
        )?;
        Ok(Self {
            position,
            _listener: listener,
        })
    }

    pub fn reader(&self) -> ScrollReader {
        self.position.reader()
    }

    #[inline]
    pub fn get(&self) -> f64 {
        self.position.get()
    }
}

#[inline]
fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
