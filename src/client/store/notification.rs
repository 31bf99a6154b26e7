use dioxus::prelude::*;

/// Last known number of unread notifications, shared by the navbar badge and
/// the notifications page
///
/// `None` until the first successful read. A failed refresh keeps the
/// previous value.
#[derive(Clone, Copy, PartialEq)]
pub struct UnreadNotifications {
    count: Signal<Option<usize>>,
}

impl UnreadNotifications {
    pub fn new(count: Signal<Option<usize>>) -> Self {
        Self { count }
    }

    pub fn get(&self) -> Option<usize> {
        *self.count.read()
    }

    pub fn set(&mut self, count: usize) {
        self.count.set(Some(count));
    }

    pub fn clear(&mut self) {
        self.count.set(None);
    }
}

pub fn use_unread_notifications() -> UnreadNotifications {
    use_context::<UnreadNotifications>()
}
