/*!
Continuation-passing forms of the chain operations.

Every step takes "the rest of the chain" as its final argument and hands its accumulated comparator
forward. The pipeline reads left to right without a builder value in between. [`ascending`] or
[`descending`] end it:

```
use chaincmp::continuation::{ascending, by, then_by_reverse};
use chaincmp::Comparator;
use std::cmp::Ordering;

let comparator = by(
    |pair: &(u8, u8)| pair.0,
    |ord| then_by_reverse(ord, |pair: &(u8, u8)| pair.1, ascending),
);

assert_eq!(comparator.compare(&(1, 9), &(1, 2)), Ordering::Less);
```

The combinators built here are the same types the [`Chain`](crate::Chain) builder produces.
*/

use crate::combinators::{By, Reversed, Then, With};
use crate::comparator::Comparator;
use crate::direction::{Directed, Direction};

/// Start a chain from a key extractor and pass it to `next`.
pub fn by<T, K, F, N, R>(key: F, next: N) -> R
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
    N: FnOnce(By<F, K>) -> R,
{
    next(By::new(key))
}

/// Start a chain from an arbitrary comparator and pass it to `next`.
pub fn with<T, W, N, R>(comparator: W, next: N) -> R
where
    T: ?Sized,
    W: Comparator<T>,
    N: FnOnce(With<W>) -> R,
{
    next(With::new(comparator))
}

/// Break ties of `ord` by the natural order of a key and pass the result to `next`.
pub fn then_by<T, C, K, F, N, R>(ord: C, key: F, next: N) -> R
where
    T: ?Sized,
    C: Comparator<T>,
    K: Ord,
    F: Fn(&T) -> K,
    N: FnOnce(Then<C, By<F, K>>) -> R,
{
    next(Then::new(ord, By::new(key)))
}

/// Break ties of `ord` with an arbitrary comparator and pass the result to `next`.
pub fn then_with<T, C, W, N, R>(ord: C, comparator: W, next: N) -> R
where
    T: ?Sized,
    C: Comparator<T>,
    W: Comparator<T>,
    N: FnOnce(Then<C, With<W>>) -> R,
{
    next(Then::new(ord, With::new(comparator)))
}

/// Break ties of `ord` by the reverse natural order of a key and pass the result to `next`.
pub fn then_by_reverse<T, C, K, F, N, R>(ord: C, key: F, next: N) -> R
where
    T: ?Sized,
    C: Comparator<T>,
    K: Ord,
    F: Fn(&T) -> K,
    N: FnOnce(Then<C, Reversed<By<F, K>>>) -> R,
{
    next(Then::new(ord, Reversed::new(By::new(key))))
}

/// Break ties of `ord` with a comparator called with swapped arguments and pass the result on.
pub fn then_with_reverse<T, C, W, N, R>(ord: C, comparator: W, next: N) -> R
where
    T: ?Sized,
    C: Comparator<T>,
    W: Comparator<T>,
    N: FnOnce(Then<C, Reversed<With<W>>>) -> R,
{
    next(Then::new(ord, Reversed::new(With::new(comparator))))
}

/// End a chain in the natural order as accumulated.
pub fn ascending<C>(ord: C) -> Directed<C> {
    Directed::new(ord, Direction::Ascending)
}

/// End a chain with the polarity of every criterion inverted.
pub fn descending<C>(ord: C) -> Directed<C> {
    Directed::new(ord, Direction::Descending)
}
