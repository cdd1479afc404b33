//! Exact Fibonacci numbers via fast doubling.
//!
//! Uses the doubling identities:
//!   F(2k)   = F(k) * (2*F(k+1) - F(k))
//!   F(2k+1) = F(k+1)^2 + F(k)^2
//!
//! Walks the bits of `n` from MSB to LSB, so the cost is O(log n) big-integer
//! multiplications rather than O(n) additions of ever-longer numbers.

use num_bigint::BigUint;

use crate::constants::{FIB_TABLE, MAX_FIB_U64};

/// Compute F(n) exactly.
///
/// Indices up to 93 are read from [`FIB_TABLE`]; larger indices use fast
/// doubling. No recursion at any size. The command line caps the index at
/// [`MAX_NTH_NUMBER`](crate::validation::MAX_NTH_NUMBER); this function itself
/// accepts any `u64` but memory grows as roughly 0.694 bits per unit of `n`.
///
/// # Example
/// ```
/// assert_eq!(cliseed_core::fibonacci(19).to_string(), "4181");
/// assert_eq!(cliseed_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn fibonacci(n: u64) -> BigUint {
    if n <= MAX_FIB_U64 {
        return BigUint::from(FIB_TABLE[n as usize]);
    }
    fast_doubling(n)
}

fn fast_doubling(n: u64) -> BigUint {
    let num_bits = u64::BITS - n.leading_zeros();
    let mut fk = BigUint::ZERO;
    let mut fk1 = BigUint::from(1u32);

    for i in (0..num_bits).rev() {
        // F(k+1) >= F(k), so this never underflows.
        let t = (&fk1 << 1u32) - &fk;
        let f2k = &fk * &t;
        let f2k1 = &fk * &fk + &fk1 * &fk1;
        fk = f2k;
        fk1 = f2k1;

        if (n >> i) & 1 == 1 {
            // (F(2k), F(2k+1)) -> (F(2k+1), F(2k+2))
            std::mem::swap(&mut fk, &mut fk1);
            fk1 += &fk;
        }
    }
    fk
}
