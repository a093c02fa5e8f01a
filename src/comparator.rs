// Copyright (c) 2021 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/*!
The core comparator abstraction. Useful for sorting by properties different from the natural
ordering provided by ordering traits e.g. [`Ord`].
*/

use std::cmp::Ordering;

/**
An interface for values intended to be used as a comparator.

Any closure of the shape `Fn(&T, &T) -> Ordering` is a comparator, as is every combinator produced
by this crate. Implementations are expected to be pure: calling [`Comparator::compare`] twice with
the same arguments must yield the same result. This is assumed but not enforced.
*/
pub trait Comparator<T: ?Sized> {
    /**
    Return an ordering obtained by comparing `a` and `b`.

    Invariants:

    1. Returns [`Ordering::Greater`] if `a` > `b`
    1. Returns [`Ordering::Equal`] if `a` == `b`
    1. Returns [`Ordering::Less`] if `a` < `b`
    */
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn compare_with<T: ?Sized, C: Comparator<T>>(comparator: &C, a: &T, b: &T) -> Ordering {
        comparator.compare(a, b)
    }

    #[test]
    fn closures_are_comparators() {
        let by_length = |a: &String, b: &String| a.len().cmp(&b.len());

        assert_eq!(
            compare_with(&by_length, &"ab".to_string(), &"abc".to_string()),
            Ordering::Less
        );
        assert_eq!(
            compare_with(&by_length, &"abc".to_string(), &"xyz".to_string()),
            Ordering::Equal
        );
    }

    #[test]
    fn function_items_are_comparators() {
        fn reverse_numeric(a: &u64, b: &u64) -> Ordering {
            b.cmp(a)
        }

        assert_eq!(compare_with(&reverse_numeric, &1, &2), Ordering::Greater);
    }

    #[test]
    fn unsized_values_can_be_compared() {
        let case_insensitive =
            |a: &str, b: &str| a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase());

        assert_eq!(compare_with(&case_insensitive, "RAIN", "rain"), Ordering::Equal);
        assert_eq!(compare_with(&case_insensitive, "apple", "Banana"), Ordering::Less);
    }
}
