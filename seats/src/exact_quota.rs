// Copyright 2026 Andrew Conway.
// This file is part of ConcreteSeats.
// ConcreteSeats is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSeats is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSeats.  If not, see <https://www.gnu.org/licenses/>.

//! The exact proportional share of the seats, as a baseline to compare real methods against.

use crate::candidate_votes::CandidateVotes;
use crate::distribution_method::DistributionMethod;
use crate::rounding::round_to_decimal_places;
use crate::seat_allocation::{CandidateSeats, SeatAllocation};

/// Not a real apportionment. Each eligible candidate gets their share of the eligible vote
/// times the number of seats, rounded to 2 decimal places. The results need not sum to the
/// number of seats.
pub struct ExactQuota {}

impl DistributionMethod for ExactQuota {
    type Seats = f64;

    fn name() -> String { "ExactQuota".to_string() }

    fn allocate(candidates: &[&CandidateVotes], votes_total: u128, seats: usize) -> SeatAllocation<f64> {
        candidates.iter().map(|c|{
            let share = c.votes as f64/votes_total as f64*seats as f64;
            CandidateSeats{candidate:c.candidate.clone(),seats:round_to_decimal_places(share,2)}
        }).collect()
    }
}
