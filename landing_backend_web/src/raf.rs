// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot `requestAnimationFrame` scheduling.
//!
//! [`FrameRequest`] wraps a callback that runs at most once per requested
//! frame. Requesting again while a frame is pending is a no-op, so any
//! number of scroll events between two repaints produce a single callback.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

// Direct global bindings instead of `web_sys::Window` methods, so a request
// never has to fetch the window first.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

type FrameClosure = Closure<dyn FnMut(f64)>;

/// A reusable next-frame callback.
pub struct FrameRequest {
    inner: Rc<FrameInner>,
}

struct FrameInner {
    /// The JS closure handed to `requestAnimationFrame`, created on the
    /// first request.
    closure: RefCell<Option<FrameClosure>>,
    callback: RefCell<Box<dyn FnMut()>>,
    /// A frame is requested and has not run yet.
    pending: Cell<bool>,
    raf_id: Cell<i32>,
}

impl FrameRequest {
    /// Creates a request that runs `callback` on each requested frame.
    pub fn new(callback: impl FnMut() + 'static) -> Self {
        Self {
            inner: Rc::new(FrameInner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                pending: Cell::new(false),
                raf_id: Cell::new(0),
            }),
        }
    }

    /// Schedules the callback before the next repaint.
    ///
    /// If a frame is already pending, this is a no-op.
    pub fn request(&self) {
        if self.inner.pending.get() {
            return;
        }
        self.inner.pending.set(true);

        let mut slot = self.inner.closure.borrow_mut();
        let closure = slot.get_or_insert_with(|| {
            let inner = Rc::clone(&self.inner);
            Closure::wrap(Box::new(move |_timestamp_ms: f64| {
                if !inner.pending.replace(false) {
                    return;
                }
                inner.callback.borrow_mut()();
            }) as Box<dyn FnMut(f64)>)
        });
        let id = request_animation_frame(closure.as_ref());
        self.inner.raf_id.set(id);
    }

    /// Cancels the pending frame, if any.
    pub fn cancel(&self) {
        if self.inner.pending.replace(false) {
            cancel_animation_frame(self.inner.raf_id.get());
        }
    }

    /// Returns `true` while a frame is requested and has not run.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.pending.get()
    }
}

impl Drop for FrameRequest {
    fn drop(&mut self) {
        self.cancel();
        // The closure holds an `Rc` to `inner`; drop it to break the cycle.
        self.inner.closure.borrow_mut().take();
    }
}

impl core::fmt::Debug for FrameRequest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameRequest")
            .field("pending", &self.inner.pending.get())
            .field("raf_id", &self.inner.raf_id.get())
            .finish_non_exhaustive()
    }
}
