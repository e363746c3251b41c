// Copyright 2026 Andrew Conway.
// This file is part of ConcreteSeats.
// ConcreteSeats is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSeats is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSeats.  If not, see <https://www.gnu.org/licenses/>.

//! This module is used for comparing the same votes apportioned by different methods.
//! Methods are grouped together when they give every candidate the same number of seats.


use std::fmt;
use serde::{Deserialize, Serialize};
use seats::candidate_votes::{ApportionmentInput, InvalidApportionmentInput};
use crate::methods::{Method, PossibleAllocations};

#[derive(Debug,Clone,Serialize,Deserialize)]
/// A comparison of different methods for a particular set of votes.
///
/// For displaying, the precision affects the method of display:
/// * 1 precision means only show each distinct allocation, with the methods that produce it.
/// * 2 precision (default) means show each method's allocation in the order the methods were given.
pub struct MethodComparison {
    pub input : ApportionmentInput,
    pub results : Vec<MethodResult>,
    pub groups : Vec<SameAllocation>,
}

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct MethodResult {
    pub method : Method,
    pub allocation : PossibleAllocations,
}

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct SameAllocation {
    pub allocation : PossibleAllocations, // from the first method in the group
    pub methods : Vec<Method>,
}

impl fmt::Display for MethodComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(f,"{}",self.input)?;
        if precision==1 {
            for group in &self.groups {
                writeln!(f," {}",group.allocation)?;
                writeln!(f,"   {}",group.methods.iter().map(|m|m.to_string()).collect::<Vec<_>>().join(" "))?;
            }
        } else {
            for result in &self.results {
                writeln!(f,"{:<12} -> {}",result.method,result.allocation)?;
            }
        }
        Ok(())
    }
}

impl MethodComparison {
    /// Count the input with each method in turn. The input is checked once, before any counting.
    pub fn create(input:&ApportionmentInput,methods:&[Method],verbose:bool) -> Result<Self,InvalidApportionmentInput> {
        input.validate()?;
        let mut res = MethodComparison{ input: input.clone(), results: vec![], groups: vec![] };
        for &method in methods {
            if verbose { println!("Counting with {}",method); }
            let allocation = method.count(input)?;
            match res.groups.iter_mut().find(|g|g.allocation.same_seats_as(&allocation)) {
                Some(existing) => existing.methods.push(method),
                None => res.groups.push(SameAllocation{ allocation: allocation.clone(), methods: vec![method] }),
            }
            res.results.push(MethodResult{ method, allocation });
        }
        if verbose { println!("{} methods gave {} different allocations",res.results.len(),res.groups.len()); }
        Ok(res)
    }

    /// The allocation produced by a given method, if it was one of those compared.
    pub fn allocation(&self,method:Method) -> Option<&PossibleAllocations> {
        self.results.iter().find(|r|r.method==method).map(|r|&r.allocation)
    }

    pub fn has_different_allocations(&self) -> bool { self.groups.len()>1 }

    /// The candidates who get a different number of seats under the two methods, or None if either method was not compared.
    pub fn differing_candidates(&self,method1:Method,method2:Method) -> Option<Vec<String>> {
        let a1 = self.allocation(method1)?;
        let a2 = self.allocation(method2)?;
        let mut res : Vec<String> = vec![];
        for candidate in a1.candidates().into_iter().chain(a2.candidates()) {
            if a1.seats(candidate)!=a2.seats(candidate) && !res.iter().any(|c|c==candidate) { res.push(candidate.to_string()); }
        }
        Some(res)
    }
}
