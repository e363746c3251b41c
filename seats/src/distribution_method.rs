// Copyright 2026 Andrew Conway.
// This file is part of ConcreteSeats.
// ConcreteSeats is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSeats is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSeats.  If not, see <https://www.gnu.org/licenses/>.

//! The common framework all counting methods share.

use std::fmt::{Debug, Display};
use crate::candidate_votes::{total_votes, validate, CandidateVotes, InvalidApportionmentInput};
use crate::seat_allocation::SeatAllocation;
use crate::vote_filter::filter_and_sort;

/// A method of turning votes into seats.
pub trait DistributionMethod {
    /// How seats are counted. usize, except for methods that produce fractional seats.
    type Seats : Copy+PartialEq+Display+Debug;

    fn name() -> String;

    /// Allocate `seats` seats amongst `candidates`.
    ///
    /// `candidates` have already passed the threshold and are sorted as by [filter_and_sort].
    /// `votes_total` is the sum of their votes, and is not zero.
    fn allocate(candidates:&[&CandidateVotes],votes_total:u128,seats:usize) -> SeatAllocation<Self::Seats>;
}

/// Count the seats for the given candidates using the given method.
///
/// Errors if the inputs are not valid. If no votes are held by candidates passing the threshold
/// (including the case of no candidates at all), nobody gets seats and the allocation is empty.
/// ```
/// use seats::candidate_votes::CandidateVotes;
/// use seats::distribution_method::distribute_seats;
/// use seats::highest_averages::DHondt;
/// let votes = vec![CandidateVotes::new("A",517),CandidateVotes::new("B",133),CandidateVotes::new("C",350)];
/// let allocation = distribute_seats::<DHondt>(&votes,20,5.0).unwrap();
/// assert_eq!(allocation.to_string(),"{A: 11, C: 7, B: 2}");
/// ```
pub fn distribute_seats<Method:DistributionMethod>(candidates:&[CandidateVotes],seats:usize,threshold:f64) -> Result<SeatAllocation<Method::Seats>,InvalidApportionmentInput> {
    validate(candidates,seats,threshold)?;
    let eligible = filter_and_sort(candidates,threshold);
    let votes_total = total_votes(eligible.iter().copied());
    if votes_total==0 { return Ok(SeatAllocation::default()) }
    Ok(Method::allocate(&eligible,votes_total,seats))
}
