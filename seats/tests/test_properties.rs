// Copyright 2026 Andrew Conway.
// This file is part of ConcreteSeats.
// ConcreteSeats is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSeats is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSeats.  If not, see <https://www.gnu.org/licenses/>.

//! Check properties every apportionment should have on lots of random elections.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use seats::candidate_votes::CandidateVotes;
use seats::distribution_method::{distribute_seats, DistributionMethod};
use seats::hare_niemeyer::HareNiemeyer;
use seats::highest_averages::{DHondt, SainteLague};
use seats::seat_allocation::SeatAllocation;
use seats::vote_filter::filter_and_sort;

const THRESHOLDS : [f64;6] = [0.0,0.0,3.0,5.0,10.0,20.0];

struct RandomElection {
    candidates : Vec<CandidateVotes>,
    seats : usize,
    threshold : f64,
}

fn random_election(rng:&mut ChaCha20Rng) -> RandomElection {
    let num_candidates = rng.random_range(1..=8);
    let candidates = (0..num_candidates).map(|i|CandidateVotes::new(&format!("Party{}",i),rng.random_range(0..=1000))).collect();
    RandomElection{ candidates, seats: rng.random_range(1..=30), threshold: THRESHOLDS[rng.random_range(0..THRESHOLDS.len())] }
}

fn count<M:DistributionMethod<Seats=usize>>(election:&RandomElection) -> SeatAllocation<usize> {
    distribute_seats::<M>(&election.candidates,election.seats,election.threshold).unwrap()
}

fn check_sums_to_seats<M:DistributionMethod<Seats=usize>>(election:&RandomElection) {
    let allocation = count::<M>(election);
    let eligible_votes : u64 = filter_and_sort(&election.candidates,election.threshold).iter().map(|c|c.votes).sum();
    if eligible_votes>0 {
        assert_eq!(allocation.total(),election.seats,"{} gave {} for {:?}",M::name(),allocation,election.candidates);
        assert!(allocation.iter().all(|c|c.seats>0));
    } else {
        assert!(allocation.is_empty());
    }
}

#[test]
fn seats_sum_to_number_available() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    for _ in 0..2000 {
        let election = random_election(&mut rng);
        check_sums_to_seats::<DHondt>(&election);
        check_sums_to_seats::<SainteLague>(&election);
        check_sums_to_seats::<HareNiemeyer>(&election);
    }
}

fn check_monotonic<M:DistributionMethod<Seats=usize>>(before:&RandomElection,after:&RandomElection,candidate:&str) {
    let seats_before = count::<M>(before).seats(candidate);
    let seats_after = count::<M>(after).seats(candidate);
    assert!(seats_after>=seats_before,"{} : {} went from {} to {} seats with more votes. Before {:?} after {:?}",M::name(),candidate,seats_before,seats_after,before.candidates,after.candidates);
}

#[test]
fn more_votes_never_means_fewer_seats() {
    let mut rng = ChaCha20Rng::seed_from_u64(2);
    for _ in 0..2000 {
        let before = random_election(&mut rng);
        let lucky = rng.random_range(0..before.candidates.len());
        let mut after = RandomElection{ candidates: before.candidates.clone(), seats: before.seats, threshold: before.threshold };
        after.candidates[lucky].votes+=rng.random_range(1..=300);
        let name = before.candidates[lucky].candidate.as_str();
        check_monotonic::<DHondt>(&before,&after,name);
        check_monotonic::<SainteLague>(&before,&after,name);
        check_monotonic::<HareNiemeyer>(&before,&after,name);
    }
}

#[test]
fn candidates_under_threshold_get_nothing() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    for _ in 0..1000 {
        let election = random_election(&mut rng);
        // one vote less than the threshold percentage of all votes cast, worked out independently.
        let votes_total : u64 = election.candidates.iter().map(|c|c.votes).sum();
        let votes_minimum = (votes_total as f64)*election.threshold/100.0-1.0;
        let dhondt = count::<DHondt>(&election);
        let sainte_lague = count::<SainteLague>(&election);
        let hare_niemeyer = count::<HareNiemeyer>(&election);
        for c in election.candidates.iter().filter(|c|(c.votes as f64)<votes_minimum) {
            assert_eq!(dhondt.get(&c.candidate),None);
            assert_eq!(sainte_lague.get(&c.candidate),None);
            assert_eq!(hare_niemeyer.get(&c.candidate),None);
        }
    }
}

#[test]
fn counting_twice_gives_same_answer() {
    let mut rng = ChaCha20Rng::seed_from_u64(4);
    for _ in 0..200 {
        let election = random_election(&mut rng);
        assert_eq!(count::<DHondt>(&election),count::<DHondt>(&election));
        assert_eq!(count::<SainteLague>(&election),count::<SainteLague>(&election));
        assert_eq!(count::<HareNiemeyer>(&election),count::<HareNiemeyer>(&election));
    }
}

#[test]
fn input_order_only_matters_for_ties() {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    for _ in 0..500 {
        let election = random_election(&mut rng);
        let mut reversed = RandomElection{ candidates: election.candidates.clone(), seats: election.seats, threshold: election.threshold };
        reversed.candidates.reverse();
        let mut distinct = election.candidates.iter().map(|c|c.votes).collect::<Vec<_>>();
        distinct.sort();
        distinct.dedup();
        if distinct.len()==election.candidates.len() { // no tied candidates, but quotients could still tie, so only check the largest remainder method.
            let forwards = count::<HareNiemeyer>(&election);
            let backwards = count::<HareNiemeyer>(&reversed);
            for c in &election.candidates {
                assert_eq!(forwards.seats(&c.candidate),backwards.seats(&c.candidate));
            }
        }
    }
}
