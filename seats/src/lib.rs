// Copyright 2026 Andrew Conway.
// This file is part of ConcreteSeats.
// ConcreteSeats is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteSeats is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteSeats.  If not, see <https://www.gnu.org/licenses/>.

//! Proportional allocation of a fixed number of seats to candidates or parties according to their votes.
//!
//! The counting methods all share [vote_filter::filter_and_sort], and are run through
//! [distribution_method::distribute_seats].


pub mod candidate_votes;
pub mod vote_filter;
pub mod seat_allocation;
pub mod distribution_method;
pub mod rounding;
pub mod exact_quota;
pub mod highest_averages;
pub mod hare_niemeyer;
pub mod parse_util;
