// Copyright 2026 Andrew Conway.
// This file is part of ConcreteSeats.
// ConcreteSeats is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSeats is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSeats.  If not, see <https://www.gnu.org/licenses/>.


//! Reading votes from strings, .csv files and .json files.
//!
//! Vote counts are read as signed numbers so a negative count can be reported as such,
//! rather than as a generic parse failure.


use std::fs::File;
use std::io::Read;
use std::path::Path;
use anyhow::anyhow;
use serde::Deserialize;
use crate::candidate_votes::{votes_from_signed, ApportionmentInput, CandidateVotes, InvalidApportionmentInput};

/// Parse a comma separated list of `name:votes`. Blank entries are ignored.
/// ```
/// use seats::candidate_votes::CandidateVotes;
/// use seats::parse_util::parse_candidate_list;
/// assert_eq!(parse_candidate_list("A:517, B:133,C:350,").unwrap(),vec![CandidateVotes::new("A",517),CandidateVotes::new("B",133),CandidateVotes::new("C",350)]);
/// ```
pub fn parse_candidate_list(s:&str) -> Result<Vec<CandidateVotes>,InvalidApportionmentInput> {
    s.split(',').map(str::trim).filter(|e|!e.is_empty()).map(str::parse).collect()
}

/// A candidate's votes as found in a file, before checking the sign.
#[derive(Deserialize)]
struct CandidateVotesRecord {
    candidate : String,
    votes : i64,
}

impl TryFrom<CandidateVotesRecord> for CandidateVotes {
    type Error = InvalidApportionmentInput;
    fn try_from(record: CandidateVotesRecord) -> Result<Self, Self::Error> {
        Ok(CandidateVotes{votes:votes_from_signed(&record.candidate,record.votes)?,candidate:record.candidate})
    }
}

#[derive(Deserialize)]
struct ApportionmentInputRecord {
    candidates : Vec<CandidateVotesRecord>,
    seats : usize,
    #[serde(default)]
    threshold : f64,
}

/// A .json votes file contains either a whole [ApportionmentInput], or just the list of candidates.
#[derive(Deserialize)]
#[serde(untagged)]
enum VotesFileContents {
    Input(ApportionmentInputRecord),
    CandidatesOnly(Vec<CandidateVotesRecord>),
}

fn convert_records(records:Vec<CandidateVotesRecord>) -> Result<Vec<CandidateVotes>,InvalidApportionmentInput> {
    records.into_iter().map(CandidateVotes::try_from).collect()
}

/// What was read from a file. Seats and threshold are only present if the file specified them.
#[derive(Debug,Clone,PartialEq)]
pub struct VotesFromFile {
    pub candidates : Vec<CandidateVotes>,
    pub seats : Option<usize>,
    pub threshold : Option<f64>,
}

impl VotesFromFile {
    /// Make an input for counting. Explicitly given seats and threshold override those in the file.
    /// The threshold defaults to 0; the number of seats must come from somewhere.
    pub fn into_input(self,seats:Option<usize>,threshold:Option<f64>) -> anyhow::Result<ApportionmentInput> {
        let seats = seats.or(self.seats).ok_or_else(||anyhow!("Need to specify the number of seats"))?;
        let input = ApportionmentInput{ candidates: self.candidates, seats, threshold: threshold.or(self.threshold).unwrap_or(0.0) };
        input.validate()?;
        Ok(input)
    }
}

/// Read a .csv file with columns `candidate` and `votes`.
pub fn read_candidates_csv<R:Read>(reader:R) -> anyhow::Result<Vec<CandidateVotes>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut res = vec![];
    for record in rdr.deserialize() {
        let record : CandidateVotesRecord = record?;
        res.push(CandidateVotes::try_from(record)?);
    }
    Ok(res)
}

/// Read a .json file, either an [ApportionmentInput] or a list of [CandidateVotes].
pub fn read_votes_json<R:Read>(reader:R) -> anyhow::Result<VotesFromFile> {
    Ok(match serde_json::from_reader(reader)? {
        VotesFileContents::Input(input) => VotesFromFile{ candidates: convert_records(input.candidates)?, seats: Some(input.seats), threshold: Some(input.threshold) },
        VotesFileContents::CandidatesOnly(candidates) => VotesFromFile{ candidates: convert_records(candidates)?, seats: None, threshold: None },
    })
}

/// Read a votes file, choosing the format from the file extension (.csv or .json).
pub fn read_votes_file<P:AsRef<Path>>(path:P) -> anyhow::Result<VotesFromFile> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|e|e.to_str()).map(|e|e.to_ascii_lowercase());
    match extension.as_deref() {
        Some("csv") => Ok(VotesFromFile{ candidates: read_candidates_csv(File::open(path)?)?, seats: None, threshold: None }),
        Some("json") => read_votes_json(File::open(path)?),
        _ => Err(anyhow!("Do not know how to read {}. Expecting a .csv or .json file.",path.display())),
    }
}
