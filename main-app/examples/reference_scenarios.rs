// Copyright 2026 Andrew Conway.
// This file is part of ConcreteSeats.
// ConcreteSeats is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSeats is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSeats.  If not, see <https://www.gnu.org/licenses/>.

//! Compare all the methods on two small well known examples.
//! The first shows D'Hondt favouring the largest party, the second has every method disagree.

use main_app::compare_different_methods::MethodComparison;
use main_app::methods::Method;
use seats::candidate_votes::ApportionmentInput;
use seats::parse_util::parse_candidate_list;

fn main() -> anyhow::Result<()> {
    let scenarios = [("A:517,B:133,C:350",20,5.0),("A:43,B:33,C:12,D:8,E:4",10,0.0)];
    for (votes,seats,threshold) in scenarios {
        let input = ApportionmentInput{ candidates: parse_candidate_list(votes)?, seats, threshold };
        let comparison = MethodComparison::create(&input,&Method::ALL,false)?;
        println!("{}",comparison);
        if let Some(differ) = comparison.differing_candidates(Method::DHondt,Method::SainteLague) {
            println!("DHondt and SainteLague differ for {}\n",differ.join(", "));
        }
    }
    Ok(())
}
