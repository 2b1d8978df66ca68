//! Plain text adjacency format.
//!
//! ```text
//! node count: 4
//! 1's neighbor(s): 2
//! 2's neighbor(s): 1, 3
//! 3's neighbor(s): 2, 4
//! 4's neighbor(s): 3
//! ```
//!
//! The i-th neighbor line belongs to vertex i and has to carry its label. A
//! vertex without neighbors has an empty list or a single `-`. An edge only
//! needs to be listed on the line of one of its endpoints.
use crate::graph::OriginalGraph;
use std::convert::TryFrom;
use std::io;
use std::io::{BufRead, Write};

fn invalid_input(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, msg)
}

fn parse_header(line: &str) -> Result<usize, io::Error> {
    line.split_whitespace()
        .nth(2)
        .and_then(|count| count.parse().ok())
        .ok_or_else(|| invalid_input(format!("Invalid header line: {}", line)))
}

fn parse_neighbor_line(line: &str, expected: usize) -> Result<Vec<usize>, io::Error> {
    let label = line
        .split_whitespace()
        .next()
        .and_then(|token| token.strip_suffix("'s"))
        .and_then(|id| id.parse::<usize>().ok());
    if label != Some(expected) {
        return Err(invalid_input(format!(
            "Expected neighbor line of vertex {}, got: {}",
            expected, line
        )));
    }
    line.split_whitespace()
        .skip(2)
        .map(|token| token.trim_end_matches(','))
        .filter(|token| !token.is_empty() && *token != "-")
        .map(|token| {
            token
                .parse()
                .map_err(|_| invalid_input(format!("Invalid neighbor '{}' in: {}", token, line)))
        })
        .collect()
}

pub struct AdjacencyReader<T: BufRead> {
    reader: T,
    node_limit: Option<usize>,
}

impl<T: BufRead> AdjacencyReader<T> {
    pub fn new(reader: T) -> Self {
        Self {
            reader,
            node_limit: None,
        }
    }

    // Only vertices up to the limit are read, edges leaving that range are dropped.
    impl_setter!(self, node_limit, Option<usize>);
}

impl<T: BufRead> TryFrom<AdjacencyReader<T>> for OriginalGraph {
    type Error = io::Error;

    fn try_from(reader: AdjacencyReader<T>) -> Result<Self, Self::Error> {
        let mut lines = reader.reader.lines();
        let header = lines
            .next()
            .ok_or_else(|| invalid_input("Missing header line".to_string()))??;
        let declared = parse_header(&header)?;
        let node_count = match reader.node_limit {
            Some(limit) => limit.min(declared),
            None => declared,
        };

        // Edges listed on either endpoint's line are merged.
        let mut edges = Vec::new();
        let mut lines_read = 0;
        for line in lines.take(node_count) {
            let line = line?;
            lines_read += 1;
            let u = lines_read;
            for v in parse_neighbor_line(&line, u)? {
                if v > node_count && v <= declared {
                    continue;
                }
                edges.push((u.min(v), u.max(v)));
            }
        }
        if lines_read < node_count {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Expected {} neighbor lines, found {}",
                    node_count, lines_read
                ),
            ));
        }
        edges.sort_unstable();
        edges.dedup();
        OriginalGraph::build(node_count, &edges)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

pub struct AdjacencyWriter<'a, W: Write> {
    graph: &'a OriginalGraph,
    writer: W,
}

impl<'a, W: Write> AdjacencyWriter<'a, W> {
    pub fn new(graph: &'a OriginalGraph, writer: W) -> Self {
        Self { graph, writer }
    }

    pub fn output(mut self) -> io::Result<()> {
        writeln!(self.writer, "node count: {}", self.graph.order())?;
        for v in self.graph.vertices() {
            writeln!(
                self.writer,
                "{}'s neighbor(s): {}",
                v,
                join(self.graph.neighbors(v))
            )?;
        }
        self.writer.flush()
    }
}

pub struct CoverWriter<'a, W: Write> {
    size: usize,
    members: Option<&'a [usize]>,
    proven_optimal: Option<bool>,
    writer: W,
}

impl<'a, W: Write> CoverWriter<'a, W> {
    pub fn new(size: usize, writer: W) -> Self {
        Self {
            size,
            members: None,
            proven_optimal: None,
            writer,
        }
    }

    impl_setter!(self, members, Option<&'a [usize]>);
    impl_setter!(self, proven_optimal, Option<bool>);

    pub fn output(mut self) -> io::Result<()> {
        writeln!(self.writer, "minimum vertex cover size: {}", self.size)?;
        if let Some(proven_optimal) = self.proven_optimal {
            let answer = if proven_optimal { "yes" } else { "no" };
            writeln!(self.writer, "proven optimal: {}", answer)?;
        }
        if let Some(members) = self.members {
            writeln!(self.writer, "vertices: {}", join(members))?;
        }
        self.writer.flush()
    }
}

fn join(values: &[usize]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
