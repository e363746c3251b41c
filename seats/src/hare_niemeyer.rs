// Copyright 2026 Andrew Conway.
// This file is part of ConcreteSeats.
// ConcreteSeats is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSeats is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSeats.  If not, see <https://www.gnu.org/licenses/>.

//! The Hare-Niemeyer largest remainder method (also known as Hamilton's method).

use crate::candidate_votes::CandidateVotes;
use crate::distribution_method::DistributionMethod;
use crate::seat_allocation::{CandidateSeats, SeatAllocation};

/// Each candidate first gets the whole number part of their quota `votes*seats/votes_total`.
/// Any seats left over go one each to the candidates with the largest remainders.
///
/// All arithmetic is exact integer arithmetic. Equal remainders are resolved in favour of
/// the candidate with more votes, then the earlier candidate. Candidates with no seats are
/// not included in the result.
pub struct HareNiemeyer {}

impl DistributionMethod for HareNiemeyer {
    type Seats = usize;

    fn name() -> String { "HareNiemeyer".to_string() }

    fn allocate(candidates: &[&CandidateVotes], votes_total: u128, seats: usize) -> SeatAllocation<usize> {
        let mut allocated : Vec<usize> = Vec::with_capacity(candidates.len());
        let mut remainders : Vec<(usize,u128)> = Vec::with_capacity(candidates.len()); // (index into candidates, remainder)
        for (index,c) in candidates.iter().enumerate() {
            let scaled = c.votes as u128*seats as u128;
            allocated.push((scaled/votes_total) as usize);
            remainders.push((index,scaled%votes_total));
        }
        let seats_remaining = seats.saturating_sub(allocated.iter().sum());
        remainders.sort_by(|a,b|b.1.cmp(&a.1)); // stable
        for &(index,_) in remainders.iter().take(seats_remaining) {
            allocated[index]+=1;
        }
        candidates.iter().zip(allocated).filter(|(_,seats)|*seats>0).map(|(c,seats)|CandidateSeats{candidate:c.candidate.clone(),seats}).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::candidate_votes::CandidateVotes;
    use crate::distribution_method::distribute_seats;
    use super::HareNiemeyer;

    #[test]
    fn largest_remainders_get_leftover_seats() {
        let votes = vec![CandidateVotes::new("A",43),CandidateVotes::new("B",33),CandidateVotes::new("C",12),CandidateVotes::new("D",8),CandidateVotes::new("E",4)];
        // quotas 4.3, 3.3, 1.2, 0.8, 0.4 : 8 seats from whole parts, then D and E have the largest remainders.
        assert_eq!(distribute_seats::<HareNiemeyer>(&votes,10,0.0).unwrap().to_string(),"{A: 4, B: 3, C: 1, D: 1, E: 1}");
    }

    #[test]
    fn zero_seat_candidates_omitted() {
        let votes = vec![CandidateVotes::new("A",90),CandidateVotes::new("B",6),CandidateVotes::new("C",4)];
        // quotas 2.7, 0.18, 0.12
        assert_eq!(distribute_seats::<HareNiemeyer>(&votes,3,0.0).unwrap().to_string(),"{A: 3}");
    }

    #[test]
    fn equal_remainders_favour_more_votes_then_input_order() {
        let votes = vec![CandidateVotes::new("A",50),CandidateVotes::new("B",50)];
        assert_eq!(distribute_seats::<HareNiemeyer>(&votes,1,0.0).unwrap().to_string(),"{A: 1}");
        // quotas 0.5, 1.0, 1.5 ; B and A both have half a seat left over, and A is sorted first.
        let votes = vec![CandidateVotes::new("B",10),CandidateVotes::new("C",20),CandidateVotes::new("A",30)];
        assert_eq!(distribute_seats::<HareNiemeyer>(&votes,3,0.0).unwrap().to_string(),"{A: 2, C: 1}");
    }

    #[test]
    fn no_votes_means_no_seats() {
        let votes = vec![CandidateVotes::new("X",0),CandidateVotes::new("Y",0)];
        assert!(distribute_seats::<HareNiemeyer>(&votes,3,0.0).unwrap().is_empty());
    }
}
