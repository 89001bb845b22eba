//! Lifecycle hook registry.
//!
//! The host request pipeline offers two extension points: "before handle",
//! fired once when request handling begins, and "before send", fired once
//! just before the response body is written out. The console handler binds a
//! callback to each; a host may register additional callbacks of its own.
//! Callbacks fire in registration order.

use crate::http::{Request, Response};

/// Callback fired before request handling begins.
pub type HandleHook = Box<dyn Fn(&Request) + Send + Sync>;

/// Callback fired before the response is sent.
pub type SendHook = Box<dyn Fn(&Request, &mut Response) + Send + Sync>;

/// Phase-keyed hook registry for one request pipeline.
#[derive(Default)]
pub struct Hooks {
    before_handle: Vec<HandleHook>,
    before_send: Vec<SendHook>,
}

impl Hooks {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a "before handle" callback.
    pub fn before_handle(&mut self, hook: impl Fn(&Request) + Send + Sync + 'static) {
        self.before_handle.push(Box::new(hook));
    }

    /// Register a "before send" callback.
    pub fn before_send(&mut self, hook: impl Fn(&Request, &mut Response) + Send + Sync + 'static) {
        self.before_send.push(Box::new(hook));
    }

    /// Fire the "before handle" phase.
    pub fn fire_before_handle(&self, request: &Request) {
        for hook in &self.before_handle {
            hook(request);
        }
    }

    /// Fire the "before send" phase.
    pub fn fire_before_send(&self, request: &Request, response: &mut Response) {
        for hook in &self.before_send {
            hook(request, response);
        }
    }
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("before_handle", &self.before_handle.len())
            .field("before_send", &self.before_send.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_hooks_fire_in_registration_order() {
        let order = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let mut hooks = Hooks::new();

        for tag in ["first", "second", "third"] {
            let order = Arc::clone(&order);
            hooks.before_handle(move |_request| order.lock().push(tag));
        }

        hooks.fire_before_handle(&Request::new());
        assert_eq!(*order.lock(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_send_hooks_can_mutate_response() {
        let mut hooks = Hooks::new();
        hooks.before_send(|_request, response| response.append_body("<!-- injected -->"));

        let mut response = Response::html();
        response.set_body("<p>body</p>");
        hooks.fire_before_send(&Request::new(), &mut response);

        assert_eq!(response.body(), "<p>body</p><!-- injected -->");
    }

    #[test]
    fn test_empty_registry_is_a_noop() {
        let hooks = Hooks::new();
        let mut response = Response::html();
        hooks.fire_before_handle(&Request::new());
        hooks.fire_before_send(&Request::new(), &mut response);
        assert_eq!(response.body(), "");
    }

    #[test]
    fn test_each_phase_fires_only_its_hooks() {
        let handled = Arc::new(AtomicUsize::new(0));
        let sent = Arc::new(AtomicUsize::new(0));

        let mut hooks = Hooks::new();
        {
            let handled = Arc::clone(&handled);
            hooks.before_handle(move |_| {
                handled.fetch_add(1, Ordering::SeqCst);
            });
        }
        {
            let sent = Arc::clone(&sent);
            hooks.before_send(move |_, _| {
                sent.fetch_add(1, Ordering::SeqCst);
            });
        }

        hooks.fire_before_handle(&Request::new());
        assert_eq!(handled.load(Ordering::SeqCst), 1);
        assert_eq!(sent.load(Ordering::SeqCst), 0);
    }
}
