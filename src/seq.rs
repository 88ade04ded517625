//! Push-style sequence protocol.
//!
//! A [`Seq`] wraps a producer closure that offers elements to a
//! consumer-supplied callback, one at a time. The callback answers with a
//! continue/stop signal: while it returns `true` the producer computes and
//! offers the next element; the moment it returns `false` the producer must
//! shut down in an orderly way, running any cleanup it registered (see
//! [`crate::cleanup::Cleanup`]) before its frame is discarded.
//!
//! [`Seq2`] is the two-channel variant for sequences with fallible steps:
//! every element is a `(value, Option<error>)` pair, and an errored element
//! does not end the sequence by itself. Whether to skip it or stop is the
//! consumer's call.

/// A push-style producer over values of type `T`.
pub struct Seq<T> {
    producer: Box<dyn FnOnce(&mut dyn FnMut(T) -> bool) + Send + 'static>,
}

impl<T> Seq<T> {
    /// Wraps a producer closure. The closure receives the consumer's yield
    /// callback and must return as soon as the callback answers `false`.
    pub fn new<F>(producer: F) -> Self
    where
        F: FnOnce(&mut dyn FnMut(T) -> bool) + Send + 'static,
    {
        Seq {
            producer: Box::new(producer),
        }
    }

    /// A sequence over anything iterable, honoring early stop.
    pub fn of<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T> + Send + 'static,
    {
        Seq::new(move |yield_item| {
            for item in items {
                if !yield_item(item) {
                    return;
                }
            }
        })
    }

    /// Drives the producer to completion or until `each` returns `false`.
    pub fn run<F>(self, mut each: F)
    where
        F: FnMut(T) -> bool,
    {
        (self.producer)(&mut each);
    }

    /// Drives the producer to exhaustion, never stopping early.
    pub fn for_each<F>(self, mut f: F)
    where
        F: FnMut(T),
    {
        self.run(|item| {
            f(item);
            true
        });
    }

    /// Drains the whole sequence into a `Vec`.
    pub fn collect(self) -> Vec<T> {
        let mut items = Vec::new();
        self.run(|item| {
            items.push(item);
            true
        });
        items
    }

    /// Converts this push-style producer into a pull-style cursor.
    pub fn pull(self) -> crate::pull::Pull<T>
    where
        T: Send + 'static,
    {
        crate::pull::Pull::new(self)
    }
}

/// A push-style producer whose elements carry an optional per-element error.
pub struct Seq2<T, E> {
    producer: Box<dyn FnOnce(&mut dyn FnMut(T, Option<E>) -> bool) + Send + 'static>,
}

impl<T, E> Seq2<T, E> {
    pub fn new<F>(producer: F) -> Self
    where
        F: FnOnce(&mut dyn FnMut(T, Option<E>) -> bool) + Send + 'static,
    {
        Seq2 {
            producer: Box::new(producer),
        }
    }

    /// Drives the producer. `each` sees every element, errored or not, and
    /// decides whether iteration continues.
    pub fn run<F>(self, mut each: F)
    where
        F: FnMut(T, Option<E>) -> bool,
    {
        (self.producer)(&mut each);
    }

    /// Converts into a pull-style cursor over `(value, Option<error>)` pairs.
    pub fn pull(self) -> crate::pull::Pull2<T, E>
    where
        T: Send + 'static,
        E: Send + 'static,
    {
        crate::pull::Pull::new(Seq::new(move |yield_item| {
            (self.producer)(&mut |value, err| yield_item((value, err)))
        }))
    }
}
