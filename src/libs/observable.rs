//! Observable values for UI-facing state.
//!
//! An [`Observable`] holds a value and a list of observers. Changing the value
//! notifies every observer synchronously, on the thread that made the change,
//! before the setter returns. [`Observable::map`] builds a derived observable
//! that is recomputed on every change of its source, which is how the tracker
//! turns "current night" and "all nights" into button states and display text.
//!
//! A [`OneShot`] is an event rather than state: it is raised once and stays
//! pending until the consumer calls [`OneShot::consume`], so a re-render never
//! delivers it twice.
//!
//! Handles are cheap to clone and every clone sees the same value. Mutation is
//! crate-private; consumers can only read and observe.
//!
//! ```rust
//! use sleeptrack::libs::observable::Observable;
//! use std::sync::{Arc, Mutex};
//!
//! let nights = Observable::new(vec![1, 2, 3]);
//! let has_nights = nights.map(|n| !n.is_empty());
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let _subscription = has_nights.observe(move |v| sink.lock().unwrap().push(*v));
//! assert_eq!(*seen.lock().unwrap(), vec![true]);
//! ```

use parking_lot::Mutex;
use std::sync::{Arc, Weak};

/// Returns `false` once the observer has nothing left to notify and can be dropped.
type Callback<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

struct Shared<T> {
    value: T,
    observers: Vec<(u64, Callback<T>)>,
    next_id: u64,
}

/// A value whose changes can be observed.
pub struct Observable<T> {
    shared: Arc<Mutex<Shared<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Observable {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Clone + Send + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Observable {
            shared: Arc::new(Mutex::new(Shared {
                value,
                observers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        self.shared.lock().value.clone()
    }

    /// Runs `f` against the current value without cloning it.
    ///
    /// `f` runs under the internal lock and must not touch this observable.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.shared.lock().value)
    }

    /// Registers `observer` for future changes.
    ///
    /// The observer stays registered until the returned [`Subscription`] is dropped.
    pub fn subscribe(&self, observer: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let id = self.register(Arc::new(move |value: &T| {
            observer(value);
            true
        }));

        let weak: Weak<Mutex<Shared<T>>> = Arc::downgrade(&self.shared);
        Subscription::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.lock().observers.retain(|(observer_id, _)| *observer_id != id);
            }
        })
    }

    /// Like [`subscribe`](Self::subscribe), but also calls `observer` with the current value right away.
    pub fn observe(&self, observer: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        observer(&self.get());
        self.subscribe(observer)
    }

    /// Creates an observable that holds `f(source)` and is recomputed on every source change.
    ///
    /// The source only keeps a weak link to the result: once every handle to
    /// the derived observable is dropped, `f` stops running and the link is
    /// removed on the next source change.
    pub fn map<U, F>(&self, f: F) -> Observable<U>
    where
        U: Clone + Send + 'static,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        let derived = Observable::new(self.with(&f));
        let target: Weak<Mutex<Shared<U>>> = Arc::downgrade(&derived.shared);
        self.register(Arc::new(move |value: &T| match target.upgrade() {
            Some(shared) => {
                Observable { shared }.set(f(value));
                true
            }
            None => false,
        }));
        derived
    }

    /// Replaces the value and notifies observers.
    pub(crate) fn set(&self, value: T) {
        self.update(|current| *current = value);
    }

    /// Mutates the value in place, then notifies observers with the result.
    ///
    /// Observers run after the internal lock is released, so they may read
    /// this observable again.
    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let (result, snapshot, observers) = {
            let mut shared = self.shared.lock();
            let result = f(&mut shared.value);
            let observers: Vec<(u64, Callback<T>)> = shared.observers.iter().map(|(id, observer)| (*id, Arc::clone(observer))).collect();
            (result, shared.value.clone(), observers)
        };

        let finished: Vec<u64> = observers
            .into_iter()
            .filter_map(|(id, observer)| (!observer(&snapshot)).then_some(id))
            .collect();
        if !finished.is_empty() {
            self.shared.lock().observers.retain(|(id, _)| !finished.contains(id));
        }
        result
    }

    fn register(&self, observer: Callback<T>) -> u64 {
        let mut shared = self.shared.lock();
        let id = shared.next_id;
        shared.next_id += 1;
        shared.observers.push((id, observer));
        id
    }

    #[cfg(test)]
    fn observer_count(&self) -> usize {
        self.shared.lock().observers.len()
    }
}

/// Keeps an observer registered; dropping it unregisters the observer.
#[must_use = "dropping a Subscription unregisters the observer immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Subscription {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// An event that is delivered until it is explicitly consumed.
pub struct OneShot<T> {
    state: Observable<Option<T>>,
}

impl<T> Clone for OneShot<T> {
    fn clone(&self) -> Self {
        OneShot { state: self.state.clone() }
    }
}

impl<T: Clone + Send + 'static> Default for OneShot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + 'static> OneShot<T> {
    pub fn new() -> Self {
        OneShot {
            state: Observable::new(None),
        }
    }

    /// The pending payload, without consuming it.
    pub fn peek(&self) -> Option<T> {
        self.state.get()
    }

    pub fn is_pending(&self) -> bool {
        self.state.with(Option::is_some)
    }

    /// Takes the pending payload; later calls return `None` until the event is raised again.
    pub fn consume(&self) -> Option<T> {
        if !self.is_pending() {
            return None;
        }
        self.state.update(Option::take)
    }

    /// Observes raises (`Some`) and acknowledgements (`None`).
    pub fn subscribe(&self, observer: impl Fn(&Option<T>) + Send + Sync + 'static) -> Subscription {
        self.state.subscribe(observer)
    }

    pub(crate) fn raise(&self, payload: T) {
        self.state.set(Some(payload));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder<T: Clone + Send + 'static>() -> (Arc<Mutex<Vec<T>>>, impl Fn(&T) + Send + Sync + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |value: &T| sink.lock().push(value.clone()))
    }

    #[test]
    fn set_notifies_subscribers_synchronously() {
        let value = Observable::new(1);
        let (seen, observer) = recorder::<i32>();
        let _subscription = value.subscribe(observer);

        value.set(2);
        value.set(3);

        assert_eq!(*seen.lock(), vec![2, 3]);
        assert_eq!(value.get(), 3);
    }

    #[test]
    fn observe_delivers_current_value_first() {
        let value = Observable::new("a".to_string());
        let (seen, observer) = recorder::<String>();
        let _subscription = value.observe(observer);

        value.set("b".to_string());

        assert_eq!(*seen.lock(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn dropping_subscription_stops_notifications() {
        let value = Observable::new(0);
        let (seen, observer) = recorder::<i32>();
        let subscription = value.subscribe(observer);

        value.set(1);
        drop(subscription);
        value.set(2);

        assert_eq!(*seen.lock(), vec![1]);
        assert_eq!(value.observer_count(), 0);
    }

    #[test]
    fn map_recomputes_on_every_source_change() {
        let nights: Observable<Vec<i64>> = Observable::new(Vec::new());
        let clear_enabled = nights.map(|n| !n.is_empty());
        let (seen, observer) = recorder::<bool>();
        let _subscription = clear_enabled.subscribe(observer);

        assert!(!clear_enabled.get());
        nights.set(vec![1]);
        assert!(clear_enabled.get());
        nights.set(Vec::new());
        assert!(!clear_enabled.get());

        assert_eq!(*seen.lock(), vec![true, false]);
    }

    #[test]
    fn dropped_derived_values_stop_recomputing() {
        let nights: Observable<Vec<i64>> = Observable::new(Vec::new());
        let recomputes = Arc::new(Mutex::new(0));

        for _ in 0..100 {
            let counter = Arc::clone(&recomputes);
            let derived = nights.map(move |n| {
                *counter.lock() += 1;
                n.len()
            });
            drop(derived);
        }
        let before = *recomputes.lock();

        nights.set(vec![1]);

        assert_eq!(*recomputes.lock(), before);
        assert_eq!(nights.observer_count(), 0);
    }

    #[test]
    fn derived_value_lives_while_a_handle_does() {
        let nights: Observable<Vec<i64>> = Observable::new(Vec::new());
        let count = nights.map(|n| n.len());
        let copy = count.clone();
        drop(count);

        nights.set(vec![1, 2]);

        assert_eq!(copy.get(), 2);
        assert_eq!(nights.observer_count(), 1);
    }

    #[test]
    fn observers_may_read_the_observable() {
        let value = Observable::new(1);
        let reader = value.clone();
        let (seen, observer) = recorder::<i32>();
        let _subscription = value.subscribe(move |_| observer(&reader.get()));

        value.set(5);

        assert_eq!(*seen.lock(), vec![5]);
    }

    #[test]
    fn one_shot_is_delivered_once() {
        let event: OneShot<i64> = OneShot::new();
        assert!(!event.is_pending());
        assert_eq!(event.consume(), None);

        event.raise(7);
        assert!(event.is_pending());
        assert_eq!(event.peek(), Some(7));
        assert_eq!(event.consume(), Some(7));
        assert_eq!(event.consume(), None);
        assert!(!event.is_pending());
    }

    #[test]
    fn one_shot_subscribers_see_raise_and_acknowledge() {
        let event: OneShot<()> = OneShot::new();
        let (seen, observer) = recorder::<Option<()>>();
        let _subscription = event.subscribe(observer);

        event.raise(());
        event.consume();
        event.consume();

        assert_eq!(*seen.lock(), vec![Some(()), None]);
    }
}
