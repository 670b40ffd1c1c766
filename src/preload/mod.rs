// src/preload/mod.rs
//
// Readiness-gated deferred execution. Capability factories wrapped through the
// gate can be called before the host environment finishes its setup: until
// mark_ready() fires, calls queue in FIFO order; afterwards they run inline.
// Each call gets a future that resolves to the factory's own Result, so one
// failing factory never affects its queue neighbors.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use crate::capabilities::{CapabilityError, CapabilityResult};

type Job = Box<dyn FnOnce() + Send>;

struct GateState {
    ready: bool,
    queue: VecDeque<Job>,
}

/// Shared readiness gate. Cloning shares the same state.
#[derive(Clone)]
pub struct PreloadGate {
    state: Arc<Mutex<GateState>>,
}

impl Default for PreloadGate {
    fn default() -> Self {
        Self::new()
    }
}

impl PreloadGate {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(GateState {
                ready: false,
                queue: VecDeque::new(),
            })),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state.lock().unwrap().ready
    }

    /// Defer a factory call until the gate is ready. Returns immediately with
    /// a handle that resolves to the factory's result. If the gate is already
    /// ready the factory runs inline, in call order.
    pub fn defer<T, F>(&self, factory: F) -> PreloadHandle<T>
    where
        T: Send + 'static,
        F: FnOnce() -> CapabilityResult<T> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let job: Job = Box::new(move || {
            // receiver may be gone; nothing to do then
            let _ = tx.send(factory());
        });

        let pending = {
            let mut state = self.state.lock().unwrap();
            if state.ready {
                Some(job)
            } else {
                state.queue.push_back(job);
                None
            }
        };
        if let Some(job) = pending {
            job();
        }

        PreloadHandle { rx }
    }

    /// Signal readiness and drain the queue strictly FIFO.
    ///
    /// Jobs run outside the lock, one at a time, so a factory may itself defer
    /// further work (it will see the gate as ready and run inline). Calling
    /// mark_ready again is a no-op: the queue only fills while not ready.
    pub fn mark_ready(&self) {
        loop {
            let job = {
                let mut state = self.state.lock().unwrap();
                state.ready = true;
                state.queue.pop_front()
            };
            match job {
                Some(job) => job(),
                None => break,
            }
        }
    }
}

/// Pending-result placeholder for a deferred factory call.
///
/// Resolves to the factory's result once the gate fires (or immediately, if it
/// already has). Dropping the gate side without running the job resolves to
/// `CapabilityError::Cancelled`.
pub struct PreloadHandle<T> {
    rx: oneshot::Receiver<CapabilityResult<T>>,
}

impl<T> PreloadHandle<T> {
    /// Block the current thread until the result is available. Convenience
    /// for synchronous callers; inside an async context, await the handle
    /// instead.
    pub fn wait(self) -> CapabilityResult<T> {
        match self.rx.blocking_recv() {
            Ok(result) => result,
            Err(_) => Err(CapabilityError::Cancelled),
        }
    }
}

impl<T> Future for PreloadHandle<T> {
    type Output = CapabilityResult<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.get_mut().rx).poll(cx).map(|r| match r {
            Ok(result) => result,
            Err(_) => Err(CapabilityError::Cancelled),
        })
    }
}

/// Which capabilities support preloading. Built once by the namespace
/// aggregator at load, immutable afterwards.
pub struct PreloadRegistry {
    gate: PreloadGate,
    names: Vec<&'static str>,
}

impl PreloadRegistry {
    pub fn new(gate: PreloadGate, names: Vec<&'static str>) -> Self {
        Self { gate, names }
    }

    pub fn gate(&self) -> &PreloadGate {
        &self.gate
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.names.iter().any(|&n| n == name)
    }

    pub fn names(&self) -> &[&'static str] {
        &self.names
    }
}
