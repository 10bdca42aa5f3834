use std::convert::TryFrom;
use std::error::Error;
use std::fmt;
use std::num::TryFromIntError;

use log::{debug, trace};

use crate::{copy, reduce, Record};

const BIAS: i128 = 100;

/// The summed reductions did not fit in an 8-bit exit status.
#[derive(Debug)]
pub struct ExitCodeError {
    pub total: i128,
    source: TryFromIntError,
}

impl fmt::Display for ExitCodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "total {} does not fit in an exit status", self.total)
    }
}

impl Error for ExitCodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Assign one record over another, then mutate the source.  Returns the final `(t, t2)`.
pub fn scenario() -> (Record, Record) {
    let mut t = Record::new(1, 2, [4, 8, 16]);
    let mut t2 = Record::new(-1, -2, [-4, -8, -16]);
    debug!("initial: t = {}, t2 = {}", t, t2);

    t = copy(t2);
    trace!("after t = t2: t = {}", t);

    t2.b = 0;
    debug!("after t2.b = 0: t = {}, t2 = {}", t, t2);

    (t, t2)
}

// Unix keeps only the low 8 bits of a process status, so anything outside `u8` is rejected.
pub(crate) fn narrow(total: i128) -> Result<u8, ExitCodeError> {
    u8::try_from(total).map_err(|source| ExitCodeError { total, source })
}

/// `reduce(t) + reduce(t2) + 100` over the final records of `scenario`.
pub fn exit_code() -> Result<u8, ExitCodeError> {
    let (t, t2) = scenario();
    let (rt, rt2) = (reduce(t), reduce(t2));
    debug!("reduce(t) = {}, reduce(t2) = {}", rt, rt2);
    narrow(rt + rt2 + BIAS)
}
