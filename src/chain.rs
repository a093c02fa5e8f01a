/*!
The fluent builder for comparator chains.

A chain starts from a key extractor ([`by`], [`by_ref`]) or from an arbitrary comparator ([`with`]).
Any number of tie-breakers can follow. A direction selector ends it:

```
use chaincmp::{by, Comparator};
use std::cmp::Ordering;

struct Person {
    last_name: String,
    age: u8,
}

let oldest_first_per_family = by(|p: &Person| p.last_name.clone())
    .then_by_reverse(|p| p.age)
    .ascending();

let ann = Person { last_name: "Smith".to_string(), age: 31 };
let bob = Person { last_name: "Smith".to_string(), age: 64 };
assert_eq!(oldest_first_per_family.compare(&ann, &bob), Ordering::Greater);
```

An unterminated [`Chain`] does not implement [`Comparator`]. Forgetting the direction selector is a
compile error rather than a silent default.
*/

use std::fmt;
use std::marker::PhantomData;

use crate::combinators::{By, ByRef, Reversed, Then, With};
use crate::comparator::Comparator;
use crate::direction::{Directed, Direction};

/**
An unterminated comparator chain over values of type `T`.

`C` is the accumulated comparator. Each tie-breaker nests it one level deeper inside a [`Then`].
*/
pub struct Chain<T: ?Sized, C> {
    /// The accumulated comparator.
    comparator: C,

    /// The number of criteria accumulated so far.
    criteria: usize,

    /// The type of the values being compared. Not owned by this struct.
    target: PhantomData<fn(&T)>,
}

/// Crate-only methods
impl<T: ?Sized, C> Chain<T, C> {
    /// Create a chain with a single criterion.
    fn start(comparator: C) -> Self {
        Self {
            comparator,
            criteria: 1,
            target: PhantomData,
        }
    }

    /// Append a tie-breaker to the chain.
    fn push<N>(self, tie_breaker: N) -> Chain<T, Then<C, N>> {
        Chain {
            comparator: Then::new(self.comparator, tie_breaker),
            criteria: self.criteria + 1,
            target: PhantomData,
        }
    }

    /// Terminate the chain.
    fn finish(self, direction: Direction) -> Directed<C> {
        log::trace!(
            "Built a comparator over {} with {} criteria in {} order",
            std::any::type_name::<T>(),
            self.criteria,
            direction
        );

        Directed::new(self.comparator, direction)
    }
}

impl<T, K, F> Chain<T, By<F, K>>
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    /// Start a chain that orders values by the natural order of an owned key.
    pub fn by(key: F) -> Self {
        Self::start(By::new(key))
    }
}

impl<T, K, F> Chain<T, ByRef<F, K>>
where
    T: ?Sized,
    K: Ord + ?Sized,
    F: Fn(&T) -> &K,
{
    /// Start a chain that orders values by the natural order of a borrowed key.
    pub fn by_ref(key: F) -> Self {
        Self::start(ByRef::new(key))
    }
}

impl<T, W> Chain<T, With<W>>
where
    T: ?Sized,
    W: Comparator<T>,
{
    /// Start a chain from an arbitrary comparator.
    pub fn with(comparator: W) -> Self {
        Self::start(With::new(comparator))
    }
}

/// Public methods
impl<T, C> Chain<T, C>
where
    T: ?Sized,
    C: Comparator<T>,
{
    /// Get the number of criteria in the chain.
    pub fn criteria(&self) -> usize {
        self.criteria
    }

    /// Break ties by the natural order of an owned key.
    pub fn then_by<K, F>(self, key: F) -> Chain<T, Then<C, By<F, K>>>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.push(By::new(key))
    }

    /// Break ties by the natural order of a borrowed key.
    pub fn then_by_ref<K, F>(self, key: F) -> Chain<T, Then<C, ByRef<F, K>>>
    where
        K: Ord + ?Sized,
        F: Fn(&T) -> &K,
    {
        self.push(ByRef::new(key))
    }

    /// Break ties with an arbitrary comparator.
    pub fn then_with<W>(self, comparator: W) -> Chain<T, Then<C, With<W>>>
    where
        W: Comparator<T>,
    {
        self.push(With::new(comparator))
    }

    /**
    Break ties by the reverse of the natural order of an owned key.

    Only this criterion is reversed. Earlier and later criteria keep their polarity.
    */
    pub fn then_by_reverse<K, F>(self, key: F) -> Chain<T, Then<C, Reversed<By<F, K>>>>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.push(Reversed::new(By::new(key)))
    }

    /// Break ties by the reverse of the natural order of a borrowed key.
    pub fn then_by_ref_reverse<K, F>(self, key: F) -> Chain<T, Then<C, Reversed<ByRef<F, K>>>>
    where
        K: Ord + ?Sized,
        F: Fn(&T) -> &K,
    {
        self.push(Reversed::new(ByRef::new(key)))
    }

    /// Break ties with an arbitrary comparator called with its arguments swapped.
    pub fn then_with_reverse<W>(self, comparator: W) -> Chain<T, Then<C, Reversed<With<W>>>>
    where
        W: Comparator<T>,
    {
        self.push(Reversed::new(With::new(comparator)))
    }

    /// Terminate the chain in the natural order as accumulated.
    pub fn ascending(self) -> Directed<C> {
        self.finish(Direction::Ascending)
    }

    /// Terminate the chain with the polarity of every criterion inverted.
    pub fn descending(self) -> Directed<C> {
        self.finish(Direction::Descending)
    }

    /// Terminate the chain in a direction chosen at runtime.
    pub fn direction(self, direction: Direction) -> Directed<C> {
        self.finish(direction)
    }
}

impl<T: ?Sized, C: Clone> Clone for Chain<T, C> {
    fn clone(&self) -> Self {
        Self {
            comparator: self.comparator.clone(),
            criteria: self.criteria,
            target: PhantomData,
        }
    }
}

impl<T: ?Sized, C: fmt::Debug> fmt::Debug for Chain<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("comparator", &self.comparator)
            .field("criteria", &self.criteria)
            .finish()
    }
}

/// Start a chain that orders values by the natural order of an owned key.
pub fn by<T, K, F>(key: F) -> Chain<T, By<F, K>>
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    Chain::by(key)
}

/**
Start a chain that orders values by the natural order of a borrowed key.

Avoids cloning keys like [`String`] fields:

```
use chaincmp::{by_ref, Comparator};
use std::cmp::Ordering;

let by_name = by_ref(|pair: &(String, u8)| pair.0.as_str()).ascending();
assert_eq!(
    by_name.compare(&("ann".to_string(), 9), &("bob".to_string(), 1)),
    Ordering::Less
);
```
*/
pub fn by_ref<T, K, F>(key: F) -> Chain<T, ByRef<F, K>>
where
    T: ?Sized,
    K: Ord + ?Sized,
    F: Fn(&T) -> &K,
{
    Chain::by_ref(key)
}

/// Start a chain from an arbitrary comparator.
pub fn with<T, W>(comparator: W) -> Chain<T, With<W>>
where
    T: ?Sized,
    W: Comparator<T>,
{
    Chain::with(comparator)
}
