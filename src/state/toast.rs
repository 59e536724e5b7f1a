//! Transient notification queue.
//!
//! DESIGN
//! ======
//! Every failure in this client is non-fatal: fetch, delete, and save
//! errors surface here and nowhere else. The queue is bounded so a burst of
//! failures cannot grow without limit.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Maximum number of toasts kept on screen; older ones are evicted first.
pub const TOAST_CAP: usize = 6;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Queue-unique identifier used for dismissal.
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

/// Shared notification state, provided once via context.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    /// Live toasts in arrival order.
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a success toast, returning its id.
    pub fn push_success(&mut self, text: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, text.into())
    }

    /// Queue an error toast, returning its id.
    pub fn push_error(&mut self, text: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, text.into())
    }

    fn push(&mut self, kind: ToastKind, text: String) -> u64 {
        self.next_id += 1;
        if self.toasts.len() >= TOAST_CAP {
            self.toasts.remove(0);
        }
        self.toasts.push(Toast {
            id: self.next_id,
            kind,
            text,
        });
        self.next_id
    }

    /// Remove the toast with `id`, if it is still queued.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Drop the oldest toast, if any. Used by the timed auto-dismiss loop.
    pub fn dismiss_oldest(&mut self) {
        if !self.toasts.is_empty() {
            self.toasts.remove(0);
        }
    }
}
