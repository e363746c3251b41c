// Copyright 2026 Andrew Conway.
// This file is part of ConcreteSeats.
// ConcreteSeats is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSeats is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSeats.  If not, see <https://www.gnu.org/licenses/>.


use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Serialize,Deserialize};
use seats::candidate_votes::{ApportionmentInput, InvalidApportionmentInput};
use seats::distribution_method::{distribute_seats, DistributionMethod};
use seats::exact_quota::ExactQuota;
use seats::hare_niemeyer::HareNiemeyer;
use seats::highest_averages::{DHondt, SainteLague};
use seats::seat_allocation::SeatAllocation;

/// The apportionment methods that can be chosen at run time.
#[derive(Copy,Clone,Debug,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum Method {
    ExactQuota,
    DHondt,
    SainteLague,
    HareNiemeyer,
}

impl FromStr for Method {
    type Err = &'static str;

    /// Case, spaces, hyphens, underscores and apostrophes are ignored, so "D'Hondt" and "sainte-lague" work.
    /// Some common alternative names are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let simplified : String = s.chars().filter(|c|c.is_alphanumeric()).collect::<String>().to_lowercase();
        match simplified.as_str() {
            "exactquota" | "exactquotas" | "exact" => Ok(Method::ExactQuota),
            "dhondt" | "jefferson" => Ok(Method::DHondt),
            "saintelague" | "webster" => Ok(Method::SainteLague),
            "hareniemeyer" | "hare" | "hamilton" | "largestremainder" => Ok(Method::HareNiemeyer),
            _ => Err("No such method supported. Try ExactQuota, DHondt, SainteLague or HareNiemeyer")
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Method::ExactQuota => ExactQuota::name(),
            Method::DHondt => DHondt::name(),
            Method::SainteLague => SainteLague::name(),
            Method::HareNiemeyer => HareNiemeyer::name(),
        };
        f.pad(&s)
    }
}

impl Method {
    pub const ALL : [Method;4] = [Method::ExactQuota,Method::DHondt,Method::SainteLague,Method::HareNiemeyer];

    /// Work out who gets how many seats with this method.
    pub fn count(&self,input:&ApportionmentInput) -> Result<PossibleAllocations,InvalidApportionmentInput> {
        let ApportionmentInput{candidates,seats,threshold} = input;
        Ok(match self {
            Method::ExactQuota => PossibleAllocations::Fractional(distribute_seats::<ExactQuota>(candidates,*seats,*threshold)?),
            Method::DHondt => PossibleAllocations::Integers(distribute_seats::<DHondt>(candidates,*seats,*threshold)?),
            Method::SainteLague => PossibleAllocations::Integers(distribute_seats::<SainteLague>(candidates,*seats,*threshold)?),
            Method::HareNiemeyer => PossibleAllocations::Integers(distribute_seats::<HareNiemeyer>(candidates,*seats,*threshold)?),
        })
    }
}

#[derive(Serialize, Deserialize,Clone,Debug)]
pub struct MethodDetails {
    pub name : String,
    pub description : String,
}

impl MethodDetails {
    pub fn list() -> Vec<MethodDetails> {
        vec![
            MethodDetails{ name: Method::ExactQuota.to_string(), description: "Not a real apportionment. Each candidate's exact share of the seats, to 2 decimal places, as a baseline.".to_string() },
            MethodDetails{ name: Method::DHondt.to_string(), description: "Highest averages with divisors 1, 2, 3, ... Tends to favour larger parties.".to_string() },
            MethodDetails{ name: Method::SainteLague.to_string(), description: "Highest averages with divisors 0.5, 1.5, 2.5, ... Closer to proportional than D'Hondt for small parties.".to_string() },
            MethodDetails{ name: Method::HareNiemeyer.to_string(), description: "Largest remainder. Whole parts of each quota first, then leftover seats by largest remainder.".to_string() },
        ]
    }
}

/// Whole seats for real methods, fractional seats for the exact quota.
///
/// Serialized tagged with the variant name, e.g. `{"Integers":[{"candidate":"A","seats":1}]}`,
/// as an empty allocation would otherwise read back as the wrong kind.
#[derive(Serialize, Deserialize,Clone,Debug,PartialEq)]
pub enum PossibleAllocations {
    Integers(SeatAllocation<usize>),
    Fractional(SeatAllocation<f64>),
}

impl PossibleAllocations {
    /// The seats a candidate got, 0 if not mentioned.
    pub fn seats(&self,candidate:&str) -> f64 {
        let seats = match self {
            PossibleAllocations::Integers(a) => a.get(candidate).map(|s|s as f64),
            PossibleAllocations::Fractional(a) => a.get(candidate),
        };
        seats.unwrap_or(0.0)
    }

    /// Candidates mentioned, in the order the allocation lists them.
    pub fn candidates(&self) -> Vec<&str> {
        match self {
            PossibleAllocations::Integers(a) => a.iter().map(|c|c.candidate.as_str()).collect(),
            PossibleAllocations::Fractional(a) => a.iter().map(|c|c.candidate.as_str()).collect(),
        }
    }

    /// true if every candidate gets the same number of seats in both, ignoring order.
    /// An integer allocation and a fractional one can be the same if the fractions happen to be whole.
    pub fn same_seats_as(&self,other:&Self) -> bool {
        self.candidates().into_iter().chain(other.candidates()).all(|c|self.seats(c)==other.seats(c))
    }
}

impl Display for PossibleAllocations {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PossibleAllocations::Integers(a) => Display::fmt(a,f),
            PossibleAllocations::Fractional(a) => Display::fmt(a,f),
        }
    }
}
