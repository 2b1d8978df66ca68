use exact_vc::exact::{BranchAndBound, TreeCoverSolver};
use exact_vc::generator::random_tree;
use exact_vc::graph::OriginalGraph;
use exact_vc::io::{AdjacencyReader, AdjacencyWriter, CoverWriter};
use log::{error, info, warn, LevelFilter};
use std::convert::TryFrom;
use std::fs::{File, OpenOptions};
use std::io;
use std::io::{stdin, stdout, BufReader, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{Duration, Instant};
use structopt::StructOpt;

#[cfg(not(target_env = "msvc"))]
use jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Algorithm {
    BranchAndBound,
    TreeDp,
    Both,
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bnb" => Ok(Algorithm::BranchAndBound),
            "dp" => Ok(Algorithm::TreeDp),
            "both" => Ok(Algorithm::Both),
            _ => Err(format!("unknown algorithm '{}', expected bnb, dp or both", s)),
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "exact-vc-cli",
    about = "Computes exact minimum vertex covers of graphs and trees."
)]
enum Opt {
    /// Solve a graph given in the adjacency text format.
    Solve {
        /// Input file. `stdin` if not specified.
        #[structopt(parse(from_os_str))]
        input: Option<PathBuf>,

        /// Output file. `stdout` if not specified.
        #[structopt(parse(from_os_str))]
        output: Option<PathBuf>,

        /// Algorithm: bnb, dp or both.
        #[structopt(short, long, default_value = "both")]
        algorithm: Algorithm,

        /// Only read the first `size` vertices.
        #[structopt(short, long)]
        size: Option<usize>,

        /// Cutoff for branch and bound in seconds.
        #[structopt(short, long, default_value = "512")]
        time: u64,
    },
    /// Generate a random tree in the adjacency text format.
    Generate {
        /// Number of vertices.
        nodes: usize,

        /// Output file. `stdout` if not specified.
        #[structopt(parse(from_os_str))]
        output: Option<PathBuf>,

        #[structopt(long, default_value = "0")]
        seed: u64,
    },
}

fn writer_for(path: Option<PathBuf>) -> io::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(
            OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)?,
        ),
        None => Box::new(stdout()),
    })
}

fn invalid_data<E: std::error::Error + Send + Sync + 'static>(e: E) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, e)
}

fn solve(
    graph: &OriginalGraph,
    algorithm: Algorithm,
    cutoff: Duration,
    output: Option<PathBuf>,
) -> io::Result<()> {
    if algorithm != Algorithm::TreeDp {
        let start = Instant::now();
        let outcome = BranchAndBound::with_graph(graph)
            .cutoff(Some(cutoff))
            .compute()
            .map_err(invalid_data)?;
        info!(
            "branch and bound: size {} in {:?}",
            outcome.cover.size(),
            start.elapsed()
        );
        CoverWriter::new(outcome.cover.size(), writer_for(output.clone())?)
            .members(Some(outcome.cover.members()))
            .proven_optimal(Some(outcome.proven_optimal))
            .output()?;
    }
    if algorithm != Algorithm::BranchAndBound {
        let start = Instant::now();
        let cover = match TreeCoverSolver::with_graph(graph).members(true).compute() {
            Ok(cover) => cover,
            Err(e) if algorithm == Algorithm::Both => {
                warn!("skipping tree dynamic programming: {}", e);
                return Ok(());
            }
            Err(e) => return Err(invalid_data(e)),
        };
        info!(
            "tree dynamic programming: size {} in {:?}",
            cover.size,
            start.elapsed()
        );
        let writer: Box<dyn Write> = match (&output, algorithm) {
            (Some(path), Algorithm::Both) => {
                Box::new(OpenOptions::new().append(true).open(path)?)
            }
            _ => writer_for(output)?,
        };
        CoverWriter::new(cover.size, writer)
            .members(cover.members.as_deref())
            .output()?;
    }
    Ok(())
}

fn run(opt: Opt) -> io::Result<()> {
    match opt {
        Opt::Solve {
            input,
            output,
            algorithm,
            size,
            time,
        } => {
            let graph = match input {
                Some(path) => {
                    let file = File::open(path)?;
                    let reader = AdjacencyReader::new(BufReader::new(file)).node_limit(size);
                    OriginalGraph::try_from(reader)?
                }
                None => {
                    let stdin = stdin();
                    let reader = AdjacencyReader::new(stdin.lock()).node_limit(size);
                    OriginalGraph::try_from(reader)?
                }
            };
            info!(
                "read graph with {} vertices and {} edges",
                graph.order(),
                graph.edge_count()
            );
            solve(&graph, algorithm, Duration::from_secs(time), output)
        }
        Opt::Generate {
            nodes,
            output,
            seed,
        } => {
            let graph = random_tree(nodes, seed).map_err(invalid_data)?;
            AdjacencyWriter::new(&graph, writer_for(output)?).output()
        }
    }
}

fn main() {
    exact_vc::log::build_logger_for_level(LevelFilter::Info);
    #[cfg(feature = "handle-ctrlc")]
    {
        if let Err(e) = exact_vc::signals::initialize() {
            error!("failed to install Ctrl-C handler: {}", e);
        }
    }

    if let Err(e) = run(Opt::from_args()) {
        error!("{}", e);
        std::process::exit(1);
    }
}
