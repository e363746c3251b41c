// Copyright 2026 Andrew Conway.
// This file is part of ConcreteSeats.
// ConcreteSeats is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSeats is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSeats.  If not, see <https://www.gnu.org/licenses/>.

//! Work out which candidates are eligible for seats, and put them in the order every method counts them in.

use crate::candidate_votes::{total_votes, CandidateVotes};

/// The number of votes a candidate needs to be eligible, given a threshold as a percentage of all votes cast.
///
/// This is one vote below the exact percentage, so a candidate sitting right on the threshold
/// is not lost to floating point rounding. For small elections this can admit candidates slightly
/// under the nominal percentage.
/// ```
/// use seats::vote_filter::minimum_votes;
/// assert_eq!(minimum_votes(1000,5.0),49.0);
/// assert_eq!(minimum_votes(0,5.0),-1.0);
/// ```
pub fn minimum_votes(votes_total:u128,threshold:f64) -> f64 {
    votes_total as f64*threshold/100.0-1.0
}

/// Whether a vote count is at least `votes_minimum`, compared exactly.
///
/// Counts above 2^53 are not all representable as f64, so the count is not converted.
/// Instead the (whole number) count is compared with the smallest whole number not below the minimum.
/// ```
/// use seats::vote_filter::reaches_minimum;
/// assert!(reaches_minimum(49,49.0));
/// assert!(!reaches_minimum(48,48.5));
/// assert!(reaches_minimum(0,-1.0));
/// // 2^53+3 would round to 2^53+4 as an f64.
/// assert!(!reaches_minimum((1<<53)+3,((1u64<<53)+4) as f64));
/// ```
pub fn reaches_minimum(votes:u64,votes_minimum:f64) -> bool {
    let needed = votes_minimum.ceil();
    if needed<=0.0 { true }
    else if needed>=18446744073709551616.0 { false } // 2^64, more than any u64.
    else { votes>=needed as u64 }
}

/// Remove candidates under the threshold, and sort the rest by decreasing number of votes.
///
/// Candidates with the same number of votes stay in the order they were given in.
/// ```
/// use seats::candidate_votes::CandidateVotes;
/// use seats::vote_filter::filter_and_sort;
/// let votes = vec![CandidateVotes::new("A",517),CandidateVotes::new("B",133),CandidateVotes::new("C",350)];
/// let names = |threshold:f64| filter_and_sort(&votes,threshold).iter().map(|c|c.candidate.as_str()).collect::<Vec<_>>();
/// assert_eq!(names(5.0),vec!["A","C","B"]);
/// assert_eq!(names(15.0),vec!["A","C"]);
/// ```
pub fn filter_and_sort(candidates:&[CandidateVotes],threshold:f64) -> Vec<&CandidateVotes> {
    let votes_minimum = minimum_votes(total_votes(candidates),threshold);
    let mut res : Vec<&CandidateVotes> = candidates.iter().filter(|c|reaches_minimum(c.votes,votes_minimum)).collect();
    res.sort_by(|a,b|b.votes.cmp(&a.votes)); // sort_by is stable.
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(filtered:&[&'a CandidateVotes]) -> Vec<&'a str> { filtered.iter().map(|c|c.candidate.as_str()).collect() }

    #[test]
    fn one_vote_allowance_at_threshold() {
        // 10% of 100 is 10, so the cutoff is 9 votes.
        let votes = vec![CandidateVotes::new("A",82),CandidateVotes::new("B",9),CandidateVotes::new("C",8),CandidateVotes::new("D",1)];
        assert_eq!(names(&filter_and_sort(&votes,10.0)),vec!["A","B"]);
    }

    #[test]
    fn cutoff_worked_by_hand() {
        // 5% of 1000 is 50, so the cutoff is 49 votes.
        let votes = vec![CandidateVotes::new("A",903),CandidateVotes::new("B",49),CandidateVotes::new("C",48)];
        assert_eq!(names(&filter_and_sort(&votes,5.0)),vec!["A","B"]);
        // 15% of 1000 is 150, so the cutoff is 149 votes.
        let votes = vec![CandidateVotes::new("A",517),CandidateVotes::new("B",149),CandidateVotes::new("C",334)];
        assert_eq!(names(&filter_and_sort(&votes,15.0)),vec!["A","C","B"]);
        let votes = vec![CandidateVotes::new("A",518),CandidateVotes::new("B",148),CandidateVotes::new("C",334)];
        assert_eq!(names(&filter_and_sort(&votes,15.0)),vec!["A","C"]);
    }

    #[test]
    fn huge_counts_compared_exactly() {
        let just_under = (1u64<<53)+3;
        assert!(!reaches_minimum(just_under,((1u64<<53)+4) as f64));
        assert!(reaches_minimum(just_under+1,((1u64<<53)+4) as f64));
        let near_top = (u64::MAX-2047) as f64; // 2^64-2048, exactly representable.
        assert!(reaches_minimum(u64::MAX,near_top));
        assert!(!reaches_minimum(u64::MAX-2048,near_top));
        assert!(!reaches_minimum(u64::MAX,u64::MAX as f64)); // u64::MAX as f64 is 2^64.
    }

    #[test]
    fn ties_keep_input_order() {
        let votes = vec![CandidateVotes::new("X",5),CandidateVotes::new("Y",7),CandidateVotes::new("Z",5),CandidateVotes::new("W",7)];
        assert_eq!(names(&filter_and_sort(&votes,0.0)),vec!["Y","W","X","Z"]);
    }

    #[test]
    fn degenerate_inputs() {
        assert!(filter_and_sort(&[],5.0).is_empty());
        let no_votes = vec![CandidateVotes::new("A",0),CandidateVotes::new("B",0)];
        assert_eq!(names(&filter_and_sort(&no_votes,50.0)),vec!["A","B"]);
        // Nobody reaches 30% of 6 evenly split candidates.
        let even : Vec<CandidateVotes> = (0..6).map(|i|CandidateVotes::new(&i.to_string(),100)).collect();
        assert!(filter_and_sort(&even,30.0).is_empty());
    }
}
