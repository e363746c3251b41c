// Copyright 2026 Andrew Conway.
// This file is part of ConcreteSeats.
// ConcreteSeats is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSeats is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSeats.  If not, see <https://www.gnu.org/licenses/>.


use num::{BigInt, BigRational, Integer, One, ToPrimitive};

/// Round a floating point number to the given number of decimal places.
///
/// The exact binary value of `value` is used (so 2.675, which is really a bit less, rounds to 2.67),
/// and a value exactly halfway is rounded to the even neighbour. The result is the f64 nearest the
/// rounded decimal. Infinities and NaN are returned unchanged.
/// ```
/// use seats::rounding::round_to_decimal_places;
/// assert_eq!(round_to_decimal_places(10.340000000000002,2),10.34);
/// assert_eq!(round_to_decimal_places(2.675,2),2.67);
/// assert_eq!(round_to_decimal_places(0.125,2),0.12);
/// assert_eq!(round_to_decimal_places(0.375,2),0.38);
/// assert_eq!(round_to_decimal_places(6.0,2),6.0);
/// ```
pub fn round_to_decimal_places(value:f64,places:u32) -> f64 {
    let Some(exact) = BigRational::from_float(value) else { return value };
    let scale = BigRational::from_integer(BigInt::from(10).pow(places));
    let scaled = exact*&scale;
    let rounded_down = scaled.floor();
    let fraction = &scaled-&rounded_down;
    let half = BigRational::new(BigInt::one(),BigInt::from(2));
    let round_up = fraction>half || (fraction==half && rounded_down.to_integer().is_odd());
    let rounded = if round_up { rounded_down+BigRational::one() } else { rounded_down };
    (rounded/scale).to_f64().unwrap_or(value)
}
