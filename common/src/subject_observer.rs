use std::{fmt, rc::Rc};

use log::trace;

pub trait Observer<S: ?Sized, E: Clone> {
    fn update(&self, source: &S, event: E);
}

pub type SharedObserver<S, E> = Rc<dyn Observer<S, E>>;

pub trait Subject<S: ?Sized, E: Clone> {
    fn register_observer(&mut self, observer: SharedObserver<S, E>);
    fn unregister_observer(&mut self, observer: &SharedObserver<S, E>);
    fn notify_observers(&self, event: E);
}

/// Ordered list of observers owned by a single subject.
///
/// Observers are notified synchronously, in registration order. Duplicates
/// are kept: an observer registered twice is notified twice.
pub struct ObserverRegistry<S: ?Sized, E: Clone> {
    observers: Vec<SharedObserver<S, E>>,
}

impl<S: ?Sized, E: Clone> Default for ObserverRegistry<S, E> {
    fn default() -> Self {
        Self {
            observers: Default::default(),
        }
    }
}

impl<S: ?Sized, E: Clone> fmt::Debug for ObserverRegistry<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<S: ?Sized, E: Clone> ObserverRegistry<S, E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, observer: SharedObserver<S, E>) {
        self.observers.push(observer);
    }

    /// Removes every registration of `observer`.
    pub fn unregister(&mut self, observer: &SharedObserver<S, E>) {
        self.observers.retain(|obs| !Rc::ptr_eq(obs, observer));
    }

    pub fn notify_all(&self, source: &S, event: E) {
        trace!("Notifying {} observer(s)", self.observers.len());
        for obs in &self.observers {
            obs.update(source, event.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}
