// Copyright 2026 Andrew Conway.
// This file is part of ConcreteSeats.
// ConcreteSeats is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSeats is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSeats.  If not, see <https://www.gnu.org/licenses/>.

//! Highest averages (divisor) methods, such as D'Hondt and Sainte-Laguë.
//!
//! Each candidate's votes are divided by each of a sequence of divisors, one per seat.
//! All these quotients are pooled, and the seats go to the largest quotients.


use crate::candidate_votes::CandidateVotes;
use crate::distribution_method::DistributionMethod;
use crate::seat_allocation::SeatAllocation;

/// One candidate's votes divided by one divisor.
struct Quotient<'a> {
    candidate : &'a str,
    value : f64,
}

/// Allocate seats to the largest quotients, where `divisor(i)` is what a candidate's votes are
/// divided by when considering their (i+1)th seat.
///
/// Quotients are generated with the divisor in the outer loop, candidates in the order given
/// in the inner loop. Equal quotients are resolved in favour of whichever was generated first,
/// that is the smaller divisor, then the earlier candidate.
pub fn allocate_by_highest_averages(candidates:&[&CandidateVotes],seats:usize,divisor:impl Fn(usize)->f64) -> SeatAllocation<usize> {
    let mut quotients : Vec<Quotient> = Vec::with_capacity(seats*candidates.len());
    for seat_index in 0..seats {
        let divisor = divisor(seat_index);
        for c in candidates {
            quotients.push(Quotient{candidate:&c.candidate,value:c.votes as f64/divisor});
        }
    }
    quotients.sort_by(|a,b|b.value.total_cmp(&a.value)); // stable, so ties stay in generation order.
    let mut res = SeatAllocation::default();
    for quotient in quotients.iter().take(seats) {
        res.add_seat(quotient.candidate);
    }
    res
}

/// Divisors 1, 2, 3, ...
pub struct DHondt {}

impl DistributionMethod for DHondt {
    type Seats = usize;
    fn name() -> String { "DHondt".to_string() }
    fn allocate(candidates: &[&CandidateVotes], _votes_total: u128, seats: usize) -> SeatAllocation<usize> {
        allocate_by_highest_averages(candidates,seats,|seat_index|(seat_index+1) as f64)
    }
}

/// Divisors 0.5, 1.5, 2.5, ... (equivalent to the odd numbers 1, 3, 5, ...)
pub struct SainteLague {}

impl DistributionMethod for SainteLague {
    type Seats = usize;
    fn name() -> String { "SainteLague".to_string() }
    fn allocate(candidates: &[&CandidateVotes], _votes_total: u128, seats: usize) -> SeatAllocation<usize> {
        allocate_by_highest_averages(candidates,seats,|seat_index|seat_index as f64+0.5)
    }
}

#[cfg(test)]
mod tests {
    use crate::candidate_votes::CandidateVotes;
    use crate::distribution_method::distribute_seats;
    use super::{DHondt, SainteLague};

    #[test]
    fn small_parties_do_better_under_sainte_lague() {
        let votes = vec![CandidateVotes::new("A",43),CandidateVotes::new("B",33),CandidateVotes::new("C",12),CandidateVotes::new("D",8),CandidateVotes::new("E",4)];
        assert_eq!(distribute_seats::<DHondt>(&votes,10,0.0).unwrap().to_string(),"{A: 5, B: 4, C: 1}");
        assert_eq!(distribute_seats::<SainteLague>(&votes,10,0.0).unwrap().to_string(),"{A: 5, B: 3, C: 1, D: 1}");
    }

    #[test]
    fn equal_quotients_go_to_smaller_divisor_first() {
        // A/2 == B/1 == 50. The enumeration order puts B/1 before A/2, so B gets the second seat.
        let votes = vec![CandidateVotes::new("A",100),CandidateVotes::new("B",50)];
        assert_eq!(distribute_seats::<DHondt>(&votes,2,0.0).unwrap().to_string(),"{A: 1, B: 1}");
        // A/1.5 == B/0.5 == 100 similarly.
        let votes = vec![CandidateVotes::new("A",150),CandidateVotes::new("B",50)];
        assert_eq!(distribute_seats::<SainteLague>(&votes,2,0.0).unwrap().to_string(),"{A: 1, B: 1}");
    }

    #[test]
    fn tied_candidates_resolved_by_input_order() {
        let votes = vec![CandidateVotes::new("A",50),CandidateVotes::new("B",50)];
        assert_eq!(distribute_seats::<DHondt>(&votes,1,0.0).unwrap().to_string(),"{A: 1}");
        assert_eq!(distribute_seats::<SainteLague>(&votes,3,0.0).unwrap().to_string(),"{A: 2, B: 1}");
        let votes = vec![CandidateVotes::new("B",50),CandidateVotes::new("A",50)];
        assert_eq!(distribute_seats::<DHondt>(&votes,1,0.0).unwrap().to_string(),"{B: 1}");
    }

    #[test]
    fn no_votes_means_no_seats() {
        let votes = vec![CandidateVotes::new("X",0),CandidateVotes::new("Y",0)];
        assert!(distribute_seats::<DHondt>(&votes,3,0.0).unwrap().is_empty());
        assert!(distribute_seats::<SainteLague>(&votes,3,0.0).unwrap().is_empty());
    }
}
