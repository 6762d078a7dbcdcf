// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

mod astar;
mod greedy;
mod queue;
mod result;
mod uniform_cost;

pub use astar::a_star;
pub use greedy::greedy_best_first;
pub use result::{Algorithm, SearchResult, UnknownAlgorithm};
pub use uniform_cost::dijkstra;
