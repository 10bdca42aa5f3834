//! Value semantics of whole-record assignment.
//!
//! A `Record` is a plain `Copy` value with an inline array, so `dst = src` and passing a record
//! by value both produce a deep, independent copy.  `copy` and `reduce` are the two operations
//! the scenario in `scenario.rs` is built from.

use std::fmt;

pub mod scenario;

pub use self::scenario::{exit_code, scenario, ExitCodeError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Record {
    pub a: i32,
    pub b: i64,
    pub c: [i32; 3],
}

impl Record {
    pub const ZERO: Record = Record { a: 0, b: 0, c: [0; 3] };

    pub const fn new(a: i32, b: i64, c: [i32; 3]) -> Record {
        Record { a, b, c }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, [{}, {}, {}])", self.a, self.b, self.c[0], self.c[1], self.c[2])
    }
}

/// Return a record equal to `src` in every field.  Nothing is shared with `src` afterwards.
pub fn copy(src: Record) -> Record {
    let mut dst = Record::ZERO;
    dst.a = src.a;
    dst.b = src.b;
    for i in 0..3 {
        dst.c[i] = src.c[i];
    }
    dst
}

/// Sum all fields of `r`.  Each term is widened to `i128`, so the sum cannot overflow for any
/// record.
pub fn reduce(r: Record) -> i128 {
    let mut sum: i128 = 0;
    sum += r.a as i128;
    sum += r.b as i128;
    sum += r.c[0] as i128;
    sum += r.c[1] as i128;
    sum += r.c[2] as i128;
    sum
}


#[cfg(crux)]
mod crux_test {
    use super::*;
    extern crate crucible;
    use self::crucible::*;

    fn symbolic_record(a: &'static str, b: &'static str, c: [&'static str; 3]) -> Record {
        Record::new(
            i32::symbolic(a),
            i64::symbolic(b),
            [i32::symbolic(c[0]), i32::symbolic(c[1]), i32::symbolic(c[2])],
        )
    }

    #[crux::test]
    fn copy_is_independent() {
        let mut x = symbolic_record("a", "b", ["c0", "c1", "c2"]);
        let y = copy(x);
        crucible_assert!(y == x);
        let old = x;
        x.b = i64::symbolic("b2");
        x.c[1] = i32::symbolic("c1_2");
        crucible_assert!(y == old);
    }

    #[crux::test]
    fn reduce_of_copy() {
        let x = symbolic_record("a", "b", ["c0", "c1", "c2"]);
        crucible_assert!(reduce(x) == reduce(copy(x)));
    }
}
