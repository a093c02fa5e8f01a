/*!
The building blocks that comparator chains are made of.

Each combinator is a small struct implementing [`Comparator`]. A chain like
`by(age).then_by_reverse(name)` is just a nesting of these structs:

```text
Then { first: By(age), then: Reversed(By(name)) }
```

The nesting is monomorphized so evaluating a chain compiles down to the same code as a hand-written
comparison function.
*/

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::comparator::Comparator;

/**
Compares values by a key derived from them, using the natural ordering of the key.

The key extractor returns an owned key. See [`ByRef`] for keys that borrow from the value.
*/
pub struct By<F, K> {
    /// The key extractor.
    key: F,

    /// The key type. Not owned by this struct.
    key_type: PhantomData<fn(&K)>,
}

impl<F, K> By<F, K> {
    /// Create a new instance of [`By`].
    pub fn new<T>(key: F) -> Self
    where
        T: ?Sized,
        F: Fn(&T) -> K,
    {
        Self {
            key,
            key_type: PhantomData,
        }
    }
}

impl<T, K, F> Comparator<T> for By<F, K>
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key)(a).cmp(&(self.key)(b))
    }
}

impl<F: Clone, K> Clone for By<F, K> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            key_type: PhantomData,
        }
    }
}

impl<F: Copy, K> Copy for By<F, K> {}

impl<F, K> fmt::Debug for By<F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("By")
            .field("key_type", &std::any::type_name::<K>())
            .finish_non_exhaustive()
    }
}

/// Compares values by a key borrowed from them, using the natural ordering of the key.
pub struct ByRef<F, K: ?Sized> {
    /// The key extractor.
    key: F,

    /// The key type. Not owned by this struct.
    key_type: PhantomData<fn(&K)>,
}

impl<F, K: ?Sized> ByRef<F, K> {
    /**
    Create a new instance of [`ByRef`].

    The bound on `F` ties the lifetime of the returned key to the lifetime of the value.
    */
    pub fn new<T>(key: F) -> Self
    where
        T: ?Sized,
        F: Fn(&T) -> &K,
    {
        Self {
            key,
            key_type: PhantomData,
        }
    }
}

impl<T, K, F> Comparator<T> for ByRef<F, K>
where
    T: ?Sized,
    K: Ord + ?Sized,
    F: Fn(&T) -> &K,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key)(a).cmp((self.key)(b))
    }
}

impl<F: Clone, K: ?Sized> Clone for ByRef<F, K> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            key_type: PhantomData,
        }
    }
}

impl<F: Copy, K: ?Sized> Copy for ByRef<F, K> {}

impl<F, K: ?Sized> fmt::Debug for ByRef<F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByRef")
            .field("key_type", &std::any::type_name::<K>())
            .finish_non_exhaustive()
    }
}

/**
Wraps a caller supplied comparator.

This is the escape hatch for orderings that cannot be reduced to a single derived key. Wrapping
gives closures a [`Debug`](fmt::Debug) representation so that whole chains stay printable.
*/
#[derive(Clone, Copy)]
pub struct With<C> {
    comparator: C,
}

impl<C> With<C> {
    /// Create a new instance of [`With`].
    pub fn new(comparator: C) -> Self {
        Self { comparator }
    }
}

impl<T, C> Comparator<T> for With<C>
where
    T: ?Sized,
    C: Comparator<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.comparator.compare(a, b)
    }
}

impl<C> fmt::Debug for With<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("With")
            .field("comparator_type", &std::any::type_name::<C>())
            .finish()
    }
}

/**
Breaks ties of one comparator with another.

`then` is only consulted when `first` reports [`Ordering::Equal`].
*/
#[derive(Clone, Copy, Debug)]
pub struct Then<A, B> {
    /// The dominant criterion.
    first: A,

    /// The tie-breaker.
    then: B,
}

impl<A, B> Then<A, B> {
    /// Create a new instance of [`Then`].
    pub fn new(first: A, then: B) -> Self {
        Self { first, then }
    }
}

impl<T, A, B> Comparator<T> for Then<A, B>
where
    T: ?Sized,
    A: Comparator<T>,
    B: Comparator<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.first
            .compare(a, b)
            .then_with(|| self.then.compare(a, b))
    }
}

/**
Flips the polarity of a comparator by swapping the arguments it is called with.

The arguments are swapped rather than the result reversed. The two only differ for comparators
that are not antisymmetric.
*/
#[derive(Clone, Copy, Debug)]
pub struct Reversed<C>(C);

impl<C> Reversed<C> {
    /// Create a new instance of [`Reversed`].
    pub fn new(comparator: C) -> Self {
        Self(comparator)
    }
}

impl<T, C> Comparator<T> for Reversed<C>
where
    T: ?Sized,
    C: Comparator<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}
