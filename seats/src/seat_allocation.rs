// Copyright 2026 Andrew Conway.
// This file is part of ConcreteSeats.
// ConcreteSeats is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSeats is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSeats.  If not, see <https://www.gnu.org/licenses/>.

//! The outcome of an apportionment: how many seats each candidate got.

use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

/// The seats won by one candidate.
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct CandidateSeats<Seats> {
    pub candidate : String,
    pub seats : Seats,
}

/// Seats for each candidate, in the order the counting method first gave them something.
///
/// `Seats` is usize for real apportionments, f64 for exact (fractional) quotas.
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(transparent)]
pub struct SeatAllocation<Seats> {
    pub candidates : Vec<CandidateSeats<Seats>>
}

impl <Seats> Default for SeatAllocation<Seats> {
    fn default() -> Self { SeatAllocation{candidates:vec![]} }
}

impl <Seats:Copy> SeatAllocation<Seats> {
    /// The seats for a given candidate, or None if they have no entry.
    pub fn get(&self,candidate:&str) -> Option<Seats> {
        self.candidates.iter().find(|c|c.candidate==candidate).map(|c|c.seats)
    }
    pub fn is_empty(&self) -> bool { self.candidates.is_empty() }
    pub fn len(&self) -> usize { self.candidates.len() }
    pub fn iter(&self) -> impl Iterator<Item=&CandidateSeats<Seats>> { self.candidates.iter() }
}

impl SeatAllocation<usize> {
    /// Give one more seat to the candidate, adding them to the end if not already present.
    pub fn add_seat(&mut self,candidate:&str) {
        match self.candidates.iter_mut().find(|c|c.candidate==candidate) {
            Some(existing) => existing.seats+=1,
            None => self.candidates.push(CandidateSeats{candidate:candidate.to_string(),seats:1}),
        }
    }
    /// like get, but candidates with no entry got 0 seats.
    pub fn seats(&self,candidate:&str) -> usize { self.get(candidate).unwrap_or(0) }
    pub fn total(&self) -> usize { self.candidates.iter().map(|c|c.seats).sum() }
}

impl <Seats> FromIterator<CandidateSeats<Seats>> for SeatAllocation<Seats> {
    fn from_iter<I: IntoIterator<Item=CandidateSeats<Seats>>>(iter: I) -> Self {
        SeatAllocation{candidates:iter.into_iter().collect()}
    }
}

/// Displayed like `{A: 11, C: 7, B: 2}`
impl <Seats:Display> Display for SeatAllocation<Seats> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f,"{{")?;
        for (i,c) in self.candidates.iter().enumerate() {
            if i!=0 { write!(f,", ")?; }
            write!(f,"{}: {}",c.candidate,c.seats)?;
        }
        write!(f,"}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_seats_in_order_of_first_seat() {
        let mut allocation = SeatAllocation::default();
        for c in ["B","A","B","C","B"] { allocation.add_seat(c); }
        assert_eq!(allocation.to_string(),"{B: 3, A: 1, C: 1}");
        assert_eq!(allocation.total(),5);
        assert_eq!(allocation.seats("A"),1);
        assert_eq!(allocation.seats("D"),0);
        assert_eq!(allocation.get("D"),None);
        assert_eq!(serde_json::to_string(&allocation).unwrap(),r#"[{"candidate":"B","seats":3},{"candidate":"A","seats":1},{"candidate":"C","seats":1}]"#);
    }
}
