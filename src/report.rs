// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Human-readable summaries of route searches.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::{Algorithm, SearchResult};

const SEPARATOR_WIDTH: usize = 50;

/// A single route search, as requested by the user and as answered by the engine.
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    pub algorithm: Algorithm,
    pub start: &'a str,
    pub goal: &'a str,
    pub result: &'a SearchResult,
}

impl<'a> Summary<'a> {
    /// Writes the summary as a results-log record, terminated by a separator line.
    pub fn write_summary<W: Write>(&self, mut w: W) -> io::Result<()> {
        writeln!(w, "Algorithm: {}", self.algorithm)?;
        writeln!(w, "Start: {}", self.start)?;
        writeln!(w, "Goal: {}", self.goal)?;
        writeln!(w, "Path: {}", self.result.path.join(" -> "))?;
        writeln!(w, "Total distance: {:.2} miles", self.result.cost)?;
        writeln!(w, "Vertices explored: {}", self.result.vertices_explored)?;
        writeln!(w, "Edges evaluated: {}", self.result.edges_evaluated)?;
        writeln!(
            w,
            "Execution time: {:.6} seconds",
            self.result.elapsed.as_secs_f64()
        )?;
        writeln!(w, "{}", "-".repeat(SEPARATOR_WIDTH))
    }

    /// Appends the summary to a results log, creating the file if necessary.
    pub fn append_summary<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        let mut w = io::BufWriter::new(f);
        self.write_summary(&mut w)?;
        w.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn portland_to_bend() -> SearchResult {
        SearchResult {
            path: vec!["Portland".to_string(), "Salem".to_string(), "Bend".to_string()],
            cost: 178.0,
            vertices_explored: 5,
            edges_evaluated: 12,
            elapsed: Duration::from_micros(1250),
        }
    }

    const PORTLAND_TO_BEND: &str = "Algorithm: A* Search
Start: portland
Goal: bend
Path: Portland -> Salem -> Bend
Total distance: 178.00 miles
Vertices explored: 5
Edges evaluated: 12
Execution time: 0.001250 seconds
--------------------------------------------------
";

    #[test]
    fn write_summary() {
        let result = portland_to_bend();
        let summary = Summary {
            algorithm: Algorithm::AStar,
            start: "portland",
            goal: "bend",
            result: &result,
        };

        let mut buf = Vec::new();
        summary.write_summary(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), PORTLAND_TO_BEND);
    }

    #[test]
    fn write_not_found_summary() {
        let result = SearchResult::not_found();
        let summary = Summary {
            algorithm: Algorithm::Dijkstra,
            start: "Nowhere",
            goal: "Bend",
            result: &result,
        };

        let mut buf = Vec::new();
        summary.write_summary(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Path: \n"));
        assert!(text.contains("Total distance: inf miles\n"));
        assert!(text.contains("Vertices explored: 0\n"));
    }

    #[test]
    fn append_summary() {
        let path = std::env::temp_dir().join(format!("pathfinder-results-{}.txt", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let result = portland_to_bend();
        let summary = Summary {
            algorithm: Algorithm::AStar,
            start: "portland",
            goal: "bend",
            result: &result,
        };
        summary.append_summary(&path).unwrap();
        summary.append_summary(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, PORTLAND_TO_BEND.repeat(2));

        std::fs::remove_file(&path).unwrap();
    }
}
