// Copyright 2026 Andrew Conway.
// This file is part of ConcreteSeats.
// ConcreteSeats is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSeats is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSeats.  If not, see <https://www.gnu.org/licenses/>.


use clap::{Parser};
use main_app::compare_different_methods::MethodComparison;
use main_app::InputOptions;
use main_app::methods::Method;

#[derive(Parser)]
#[clap(version = "0.2", author = "Andrew Conway", name="ConcreteSeats")]
/// Apportion seats using a variety of methods and compare the results
struct Opts {
    #[clap(flatten)]
    input_options : InputOptions,

    /// The methods to compare, comma separated. Default is all of ExactQuota, DHondt, SainteLague, HareNiemeyer
    #[clap(long,value_delimiter=',')]
    methods : Vec<Method>,

    /// Whether the output should be JSON rather than human readable text.
    #[clap(long)]
    json: bool,

    /// How detailed the human readable output is. 1 means just show the distinct allocations and which methods produced them. 2 means show every method.
    #[clap(long)]
    detail: Option<usize>,

    /// Whether the progress of the counts should be printed out to stdout.
    #[clap(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let opt : Opts = Opts::parse();

    let input = opt.input_options.get_input()?;
    let methods = if opt.methods.is_empty() { Method::ALL.to_vec() } else { opt.methods.clone() };
    let comparison = MethodComparison::create(&input,&methods,opt.verbose)?;
    if opt.json { println!("{}",serde_json::to_string(&comparison)?) }
    else { println!("{:.*}",opt.detail.unwrap_or(2),comparison)}
    Ok(())
}
