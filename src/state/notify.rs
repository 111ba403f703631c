//! Explicit change notification for stores
//!
//! Stores own a `Notifier` and call `notify` after every mutation.
//! Consumers either subscribe a callback or poll `revision()`.

/// Callback invoked with the store's new snapshot
pub type Listener<T> = Box<dyn FnMut(&T)>;

pub struct Notifier<T: ?Sized> {
    listeners: Vec<Listener<T>>,
    revision: u64,
}

impl<T: ?Sized> Notifier<T> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            revision: 0,
        }
    }

    pub fn subscribe(&mut self, listener: Listener<T>) {
        self.listeners.push(listener);
    }

    /// Bump the revision and hand the new value to every listener
    pub fn notify(&mut self, value: &T) {
        self.revision += 1;
        for listener in self.listeners.iter_mut() {
            listener(value);
        }
    }

    /// Number of mutations observed so far
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl<T: ?Sized> Default for Notifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> std::fmt::Debug for Notifier<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.listeners.len())
            .field("revision", &self.revision)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_bumps_revision() {
        let mut notifier: Notifier<u32> = Notifier::new();
        assert_eq!(notifier.revision(), 0);

        notifier.notify(&1);
        notifier.notify(&2);
        assert_eq!(notifier.revision(), 2);
    }

    #[test]
    fn test_listeners_see_every_value() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut notifier: Notifier<u32> = Notifier::new();

        let sink = Rc::clone(&seen);
        notifier.subscribe(Box::new(move |v| sink.borrow_mut().push(*v)));

        notifier.notify(&7);
        notifier.notify(&9);
        assert_eq!(*seen.borrow(), vec![7, 9]);
    }

    #[test]
    fn test_unsized_payload() {
        let total = Rc::new(RefCell::new(0usize));
        let mut notifier: Notifier<[u8]> = Notifier::new();

        let sink = Rc::clone(&total);
        notifier.subscribe(Box::new(move |bytes| *sink.borrow_mut() += bytes.len()));

        notifier.notify(&[1, 2, 3][..]);
        assert_eq!(*total.borrow(), 3);
    }
}
