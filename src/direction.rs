/*!
Direction selection, the terminal step of every comparator chain.

A [`Directed`] comparator is what consumers hand to a sort routine. It is the only way to turn an
accumulated chain into something usable as a comparator.
*/

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::comparator::Comparator;
use crate::errors::{ParseError, ParseResult};

/// The overall polarity of a comparator chain.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Direction {
    /// Natural order as accumulated by the chain.
    #[default]
    Ascending,

    /// The inverse of the accumulated order. Every criterion flips uniformly.
    Descending,
}

impl Direction {
    /// Return the opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => write!(f, "ascending"),
            Direction::Descending => write!(f, "descending"),
        }
    }
}

/**
Parse a direction from configuration text.

Accepts `asc`, `ascending`, `desc` and `descending` in any letter case, ignoring surrounding
whitespace.
*/
impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(input: &str) -> ParseResult<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Direction::Ascending),
            "desc" | "descending" => Ok(Direction::Descending),
            _ => {
                log::debug!("Rejected {:?} as a sort direction", input);
                Err(ParseError::UnknownDirection(input.to_string()))
            }
        }
    }
}

/**
A fully built comparator: an accumulated chain plus the direction to apply it in.

# Argument order

Selecting descending order swaps the arguments handed to the chain. It does not reverse the chain's
result. For comparators that are not antisymmetric the two would disagree.
*/
#[derive(Clone, Copy, Debug)]
pub struct Directed<C> {
    /// The accumulated comparator.
    comparator: C,

    /// The direction to apply `comparator` in.
    direction: Direction,
}

/// Crate-only methods
impl<C> Directed<C> {
    /// Create a new instance of [`Directed`].
    pub(crate) fn new(comparator: C, direction: Direction) -> Self {
        Self {
            comparator,
            direction,
        }
    }
}

/// Public methods
impl<C> Directed<C> {
    /// Get the direction this comparator applies its chain in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Return the same chain applied in the opposite direction.
    pub fn reverse(self) -> Self {
        Self::new(self.comparator, self.direction.reverse())
    }

    /**
    Convert into a plain closure.

    This is the shape expected by [`slice::sort_by`], [`slice::binary_search_by`] and friends.
    */
    pub fn into_fn<T>(self) -> impl Fn(&T, &T) -> Ordering
    where
        T: ?Sized,
        C: Comparator<T>,
    {
        move |a: &T, b: &T| self.compare(a, b)
    }
}

impl<T, C> Comparator<T> for Directed<C>
where
    T: ?Sized,
    C: Comparator<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self.direction {
            Direction::Ascending => self.comparator.compare(a, b),
            Direction::Descending => self.comparator.compare(b, a),
        }
    }
}
