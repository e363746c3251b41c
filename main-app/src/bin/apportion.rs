// Copyright 2026 Andrew Conway.
// This file is part of ConcreteSeats.
// ConcreteSeats is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSeats is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSeats.  If not, see <https://www.gnu.org/licenses/>.


use std::fs::File;
use std::path::PathBuf;
use clap::{Parser};
use main_app::InputOptions;
use main_app::methods::Method;

#[derive(Parser)]
#[clap(version = "0.2", author = "Andrew Conway", name="ConcreteSeats")]
/// Allocate seats to candidates in proportion to their votes.
struct Opts {
    /// The apportionment method to use.
    /// Currently supported ExactQuota, DHondt, SainteLague, HareNiemeyer
    #[clap(short, long)]
    method : Method,

    #[clap(flatten)]
    input_options : InputOptions,

    /// Whether the result should be printed as JSON rather than human readable text.
    #[clap(long)]
    json: bool,

    /// An optional file to store the result in, as JSON.
    #[clap(short, long,value_parser)]
    out : Option<PathBuf>,

    /// Whether the votes, seats and threshold used should be printed out to stdout before the result.
    #[clap(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let opt : Opts = Opts::parse();

    let input = opt.input_options.get_input()?;
    if opt.verbose { print!("{}",input); println!("Counting with {}",opt.method); }
    let allocation = opt.method.count(&input)?;

    if let Some(out) = &opt.out {
        if let Some(parent) = out.parent() { std::fs::create_dir_all(parent)? }
        serde_json::to_writer(File::create(out)?,&allocation)?;
    }
    if opt.json { println!("{}",serde_json::to_string(&allocation)?) }
    else { println!("{}",allocation) }
    Ok(())
}
