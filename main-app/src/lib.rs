// Copyright 2026 Andrew Conway.
// This file is part of ConcreteSeats.
// ConcreteSeats is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSeats is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSeats.  If not, see <https://www.gnu.org/licenses/>.

//! This crate provides a unified API to the different apportionment methods, and a way of comparing them.
//! It also contains the main binaries.

use std::path::PathBuf;
use clap::Args;
use seats::candidate_votes::ApportionmentInput;
use seats::parse_util::{parse_candidate_list, read_votes_file, VotesFromFile};

pub mod methods;
pub mod compare_different_methods;

/// Where the votes come from, and the parameters of the count. Shared by the binaries.
#[derive(Args,Debug,Clone)]
pub struct InputOptions {
    /// A .json or .csv file containing the votes for each candidate.
    /// A .json file may also contain the number of seats and threshold.
    #[clap(value_parser)]
    pub file : Option<PathBuf>,

    /// Votes given on the command line instead of in a file, e.g. A:517,B:133,C:350
    #[clap(long,conflicts_with="file")]
    pub votes : Option<String>,

    /// The number of seats to allocate. Overrides any value in the file.
    #[clap(short, long)]
    pub seats : Option<usize>,

    /// The percentage of the total vote a candidate needs to get any seats. Overrides any value in the file. Default 0.
    #[clap(short, long)]
    pub threshold : Option<f64>,
}

impl InputOptions {
    /// Read the votes and combine them with the seats and threshold, checking that the result is usable.
    pub fn get_input(&self) -> anyhow::Result<ApportionmentInput> {
        let from_file = match (&self.votes,&self.file) {
            (Some(votes),_) => VotesFromFile{ candidates: parse_candidate_list(votes)?, seats: None, threshold: None },
            (None,Some(file)) => read_votes_file(file)?,
            (None,None) => return Err(anyhow::anyhow!("Need either a votes file or --votes")),
        };
        from_file.into_input(self.seats,self.threshold)
    }
}
