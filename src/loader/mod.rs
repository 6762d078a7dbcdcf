// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Loading [Graphs](Graph) from delimited text tables.
//!
//! Two tables are needed: one with vertices (columns `vertex`, `latitude` and `longitude`)
//! and one with edges (columns `source`, `destination`, `distance` and `highway`).
//! Vertices must be loaded first, as edges refer to them by (case-insensitive) names.
//! Any extra columns are ignored, and all fields are trimmed.
//!
//! ```no_run
//! let mut g = pathfinder::Graph::new();
//! let format = pathfinder::loader::FileFormat::Unknown;
//! pathfinder::loader::add_vertices_from_file(&mut g, format, "vertices.csv").unwrap();
//! pathfinder::loader::add_edges_from_file(&mut g, format, "edges.csv.gz").unwrap();
//! ```

use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;

use crate::{Edge, Graph, Vertex};

/// Format of the input table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Unknown format - guess the format based on the content
    Unknown,

    /// Force uncompressed [CSV](https://en.wikipedia.org/wiki/Comma-separated_values)
    Csv,

    /// Force CSV with [gzip](https://en.wikipedia.org/wiki/Gzip) compression
    CsvGz,

    /// Force CSV with [bzip2](https://en.wikipedia.org/wiki/Bzip2) compression
    CsvBz2,
}

impl FileFormat {
    /// Guesses the format from the first few bytes of a file.
    pub fn detect(header: &[u8]) -> Self {
        if header.starts_with(&[0x1f, 0x8b]) {
            Self::CsvGz
        } else if header.starts_with(b"BZh") {
            Self::CsvBz2
        } else {
            Self::Csv
        }
    }
}

/// Error which can occur when loading a table.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] io::Error),

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: invalid coordinates of vertex {vertex:?}")]
    InvalidCoordinate { line: u64, vertex: String },

    #[error("line {line}: invalid distance {weight} (must be finite and non-negative)")]
    InvalidWeight { line: u64, weight: f64 },
}

#[derive(Debug, Deserialize)]
struct VertexRecord {
    vertex: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct EdgeRecord {
    source: String,
    destination: String,
    distance: f64,
    highway: String,
}

/// Internal trait for tables which can be added into a [Graph] record by record.
trait Table {
    fn add_records<R: io::Read>(g: &mut Graph, reader: csv::Reader<R>) -> Result<usize, Error>;
}

struct VertexTable;

impl Table for VertexTable {
    fn add_records<R: io::Read>(g: &mut Graph, mut reader: csv::Reader<R>) -> Result<usize, Error> {
        let headers = reader.headers()?.clone();
        let mut record = StringRecord::new();
        let mut added: usize = 0;

        while reader.read_record(&mut record)? {
            let line = record.position().map_or(0, |p| p.line());
            let row: VertexRecord = record.deserialize(Some(&headers))?;

            if !row.latitude.is_finite() || !row.longitude.is_finite() {
                return Err(Error::InvalidCoordinate {
                    line,
                    vertex: row.vertex,
                });
            }

            g.add_vertex(Vertex::new(row.vertex, row.latitude, row.longitude));
            added += 1;
        }

        log::info!("loaded {} vertices", added);
        Ok(added)
    }
}

struct EdgeTable;

impl Table for EdgeTable {
    fn add_records<R: io::Read>(g: &mut Graph, mut reader: csv::Reader<R>) -> Result<usize, Error> {
        let headers = reader.headers()?.clone();
        let mut record = StringRecord::new();
        let mut added: usize = 0;
        let mut skipped: usize = 0;

        while reader.read_record(&mut record)? {
            let line = record.position().map_or(0, |p| p.line());
            let row: EdgeRecord = record.deserialize(Some(&headers))?;

            if !row.distance.is_finite() || row.distance < 0.0 {
                return Err(Error::InvalidWeight {
                    line,
                    weight: row.distance,
                });
            }

            let (Some(_), Some(to)) = (g.find_vertex(&row.source), g.find_vertex(&row.destination))
            else {
                log::warn!(
                    "line {}: skipping {} -> {}: unknown vertex",
                    line,
                    row.source,
                    row.destination,
                );
                skipped += 1;
                continue;
            };

            if g.add_edge(Edge::new(row.highway, to, row.distance), Some(&row.source)) {
                added += 1;
            }
        }

        log::info!("loaded {} edges ({} skipped)", added, skipped);
        Ok(added)
    }
}

fn add_table_from_io<T: Table, R: io::Read>(
    g: &mut Graph,
    file_format: FileFormat,
    reader: R,
) -> Result<usize, Error> {
    if file_format == FileFormat::Unknown {
        let mut b = io::BufReader::new(reader);
        let detected = FileFormat::detect(b.fill_buf()?);
        log::debug!("detected file format: {:?}", detected);
        add_table_in_format::<T, _>(g, detected, b)
    } else {
        add_table_in_format::<T, _>(g, file_format, reader)
    }
}

fn add_table_in_format<T: Table, R: io::Read>(
    g: &mut Graph,
    file_format: FileFormat,
    reader: R,
) -> Result<usize, Error> {
    match file_format {
        FileFormat::Unknown | FileFormat::Csv => T::add_records(g, csv_reader(reader)),

        FileFormat::CsvGz => {
            let d = flate2::read::MultiGzDecoder::new(reader);
            T::add_records(g, csv_reader(d))
        }

        FileFormat::CsvBz2 => {
            let d = bzip2::read::MultiBzDecoder::new(reader);
            T::add_records(g, csv_reader(d))
        }
    }
}

fn csv_reader<R: io::Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new().trim(Trim::All).from_reader(reader)
}

/// Parses vertices from a reader and appends them to a [Graph], in row order.
/// Returns the number of added vertices.
///
/// Rows with unparsable or non-finite coordinates fail the whole load;
/// vertices from preceding rows are kept in the graph.
pub fn add_vertices_from_io<R: io::Read>(
    g: &mut Graph,
    file_format: FileFormat,
    reader: R,
) -> Result<usize, Error> {
    add_table_from_io::<VertexTable, _>(g, file_format, reader)
}

/// Parses vertices from a file at the provided path into a [Graph].
pub fn add_vertices_from_file<P: AsRef<Path>>(
    g: &mut Graph,
    file_format: FileFormat,
    path: P,
) -> Result<usize, Error> {
    let f = File::open(path)?;
    add_vertices_from_io(g, file_format, f)
}

/// Parses vertices from a static buffer into a [Graph].
pub fn add_vertices_from_buffer(
    g: &mut Graph,
    file_format: FileFormat,
    data: &[u8],
) -> Result<usize, Error> {
    add_vertices_from_io(g, file_format, data)
}

/// Parses edges from a reader and attaches them to vertices of a [Graph].
/// Returns the number of added edges.
///
/// Source and destination vertices are looked up by case-insensitive names.
/// Rows referring to unknown vertices are skipped (with a warning),
/// while rows with unparsable, negative or non-finite distances fail the whole load.
pub fn add_edges_from_io<R: io::Read>(
    g: &mut Graph,
    file_format: FileFormat,
    reader: R,
) -> Result<usize, Error> {
    add_table_from_io::<EdgeTable, _>(g, file_format, reader)
}

/// Parses edges from a file at the provided path into a [Graph].
pub fn add_edges_from_file<P: AsRef<Path>>(
    g: &mut Graph,
    file_format: FileFormat,
    path: P,
) -> Result<usize, Error> {
    let f = File::open(path)?;
    add_edges_from_io(g, file_format, f)
}

/// Parses edges from a static buffer into a [Graph].
pub fn add_edges_from_buffer(
    g: &mut Graph,
    file_format: FileFormat,
    data: &[u8],
) -> Result<usize, Error> {
    add_edges_from_io(g, file_format, data)
}
