// Copyright 2026 Andrew Conway.
// This file is part of ConcreteSeats.
// ConcreteSeats is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSeats is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSeats.  If not, see <https://www.gnu.org/licenses/>.

//! Information about the contest: who got how many votes, how many seats there are, and the threshold.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use serde::{Serialize,Deserialize};
use thiserror::Error;

/// The number of first preference votes a candidate (or party) received.
#[derive(Debug,Clone,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub struct CandidateVotes {
    /// The name of the candidate. Must be unique within a contest.
    pub candidate : String,
    pub votes : u64,
}

impl CandidateVotes {
    pub fn new(candidate:&str,votes:u64) -> Self { CandidateVotes{candidate:candidate.to_string(),votes} }
}

// same format as parsed by from_str
impl fmt::Display for CandidateVotes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}:{}", self.candidate,self.votes) }
}

/// Parse a string of the form `name:votes`. The name may itself contain colons; the last one is the separator.
/// ```
/// use seats::candidate_votes::{CandidateVotes, InvalidApportionmentInput};
/// assert_eq!("Greens : 133".parse::<CandidateVotes>(),Ok(CandidateVotes::new("Greens",133)));
/// assert_eq!("A:-3".parse::<CandidateVotes>(),Err(InvalidApportionmentInput::NegativeVotes("A".to_string(),-3)));
/// ```
impl FromStr for CandidateVotes {
    type Err = InvalidApportionmentInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (candidate,votes) = s.rsplit_once(':').ok_or_else(||InvalidApportionmentInput::MalformedCandidateVotes(s.to_string()))?;
        let candidate = candidate.trim();
        if candidate.is_empty() { return Err(InvalidApportionmentInput::MalformedCandidateVotes(s.to_string())) }
        let votes : i64 = votes.trim().parse().map_err(|_|InvalidApportionmentInput::MalformedCandidateVotes(s.to_string()))?;
        Ok(CandidateVotes{candidate:candidate.to_string(),votes:votes_from_signed(candidate,votes)?})
    }
}

/// Convert a vote count read from some external source, which may have been signed, into a vote count.
pub fn votes_from_signed(candidate:&str,votes:i64) -> Result<u64,InvalidApportionmentInput> {
    u64::try_from(votes).map_err(|_|InvalidApportionmentInput::NegativeVotes(candidate.to_string(),votes))
}

/// Sum of all votes cast for the given candidates. Wider than a single count, so it cannot overflow.
pub fn total_votes<'a,I:IntoIterator<Item=&'a CandidateVotes>>(candidates:I) -> u128 {
    candidates.into_iter().map(|c|c.votes as u128).sum()
}

/// Reasons why a set of votes, seats and threshold can't be used for counting.
#[derive(Error,Debug,Clone,PartialEq)]
pub enum InvalidApportionmentInput {
    #[error("The number of seats to allocate must be positive.")]
    NoSeats,
    #[error("Threshold {0} % is not in the range 0 (inclusive) to 100 (exclusive).")]
    ThresholdOutOfRange(f64),
    #[error("Candidate {0} is listed more than once.")]
    DuplicateCandidate(String),
    #[error("Candidate {0} has a negative number of votes {1}.")]
    NegativeVotes(String,i64),
    #[error("Expecting candidate:votes, got {0}")]
    MalformedCandidateVotes(String),
}

/// Check that the candidates, seats and threshold are meaningful. Checks are in the order
/// seats, threshold, candidates, so the first problem found is reported.
///
/// An empty list of candidates is valid; nobody gets any seats.
pub fn validate(candidates:&[CandidateVotes],seats:usize,threshold:f64) -> Result<(),InvalidApportionmentInput> {
    if seats==0 { return Err(InvalidApportionmentInput::NoSeats) }
    if !(0.0..100.0).contains(&threshold) { return Err(InvalidApportionmentInput::ThresholdOutOfRange(threshold)) } // also catches NaN.
    let mut seen : HashSet<&str> = HashSet::new();
    for c in candidates {
        if !seen.insert(c.candidate.as_str()) { return Err(InvalidApportionmentInput::DuplicateCandidate(c.candidate.clone())) }
    }
    Ok(())
}

/// Everything needed to do one apportionment.
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct ApportionmentInput {
    pub candidates : Vec<CandidateVotes>,
    /// number of seats to be allocated
    pub seats : usize,
    /// minimum percentage of the total vote a candidate needs to be eligible for seats.
    #[serde(default)]
    pub threshold : f64,
}

impl ApportionmentInput {
    pub fn validate(&self) -> Result<(),InvalidApportionmentInput> {
        validate(&self.candidates,self.seats,self.threshold)
    }

    pub fn total_votes(&self) -> u128 { total_votes(&self.candidates) }
}

/// A three line summary of votes, seats and threshold.
impl fmt::Display for ApportionmentInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f,"Votes per candidate:   {}",self.candidates.iter().map(|c|c.to_string()).collect::<Vec<_>>().join(", "))?;
        writeln!(f,"Seats to be allocated: {}",self.seats)?;
        writeln!(f,"Threshold:             {} %",self.threshold)
    }
}
