/*!
chaincmp builds comparison functions declaratively. A comparator is composed from "compare by a
derived key" and "compare with an arbitrary comparator" steps, optionally followed by tie-breakers,
and finished by selecting a direction.

```
use chaincmp::{by, Comparator};

#[derive(Debug, PartialEq)]
struct Player {
    team: &'static str,
    score: u32,
    name: &'static str,
}

let mut players = vec![
    Player { team: "red", score: 10, name: "kim" },
    Player { team: "blue", score: 30, name: "lee" },
    Player { team: "red", score: 20, name: "ash" },
];

// Teams alphabetically, best score first within a team.
let standings = by(|p: &Player| p.team)
    .then_by_reverse(|p| p.score)
    .then_by(|p| p.name)
    .ascending();
players.sort_by(|a, b| standings.compare(a, b));

let names: Vec<_> = players.iter().map(|p| p.name).collect();
assert_eq!(names, vec!["lee", "ash", "kim"]);
```

Chains can also be written in a continuation-passing style with the functions in [`continuation`].

No sorting algorithm is provided. A finished chain ([`Directed`]) plugs into any sort routine that
accepts a three-way comparator, e.g. [`slice::sort_by`].
*/

#![warn(missing_debug_implementations, missing_docs)]

mod chain;
pub use chain::{by, by_ref, with, Chain};

pub mod combinators;

mod comparator;
pub use comparator::Comparator;

pub mod continuation;

mod direction;
pub use direction::{Directed, Direction};

mod errors;
pub use errors::{ParseError, ParseResult};

#[cfg(test)]
mod config;

#[cfg(test)]
mod test_utils;
