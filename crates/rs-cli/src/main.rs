//! rsupport CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rs_core::{Scalar, ScalarType};
use rs_graph::{Graph, GraphErrors, HasAxes, MultiSeries};
use rs_tree::{ColumnStore, MemTree};
use rs_viz::{DiagnosticLevel, JsonRenderer, PlotArtifact, Renderer, VizConfig};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rsupport")]
#[command(about = "rsupport - typed column stores and series transforms for plotting")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform a series (JSON)
    Graph {
        #[command(subcommand)]
        op: GraphOp,

        /// Input series (JSON, with or without errors)
        #[arg(short, long, global = true)]
        input: Option<PathBuf>,

        /// Output file (pretty JSON). Defaults to stdout.
        #[arg(short, long, global = true)]
        output: Option<PathBuf>,
    },

    /// Forward discrete Fourier transform
    Fft {
        /// JSON array of samples, or a series whose y values are transformed
        #[arg(short, long)]
        input: PathBuf,

        /// Emit magnitude/phase instead of real/imaginary parts
        #[arg(long)]
        polar: bool,

        /// Output file (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inverse discrete Fourier transform of a Cartesian spectrum
    Ifft {
        /// Spectrum JSON as written by `fft`
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Column store operations over JSON trees
    Tree {
        #[command(subcommand)]
        command: TreeCommands,
    },

    /// Hand one or more series to the renderer
    Render {
        /// Input series (JSON); several inputs are drawn on shared axes
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Render target
        #[arg(short, long)]
        output: PathBuf,

        /// Renderer options (JSON). Flags below override it.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Renderer diagnostic level
        #[arg(long, value_enum)]
        diagnostics: Option<Diagnostics>,

        /// Y display range as `low high`
        #[arg(long, num_args = 2, value_names = ["LOW", "HIGH"], allow_negative_numbers = true)]
        y_range: Option<Vec<f64>>,
    },

    /// Print version information
    Version,
}

#[derive(Subcommand)]
enum GraphOp {
    /// Sort samples by x
    Sort,
    /// Replace x by 1/x
    InvertX,
    /// Replace y by ln(y)
    LogY,
    /// Block-average consecutive samples
    CoarseGrain {
        /// Block size
        #[arg(long)]
        step: usize,
    },
    /// Append another series of the same kind
    Push {
        /// Series appended to the input
        #[arg(long)]
        other: PathBuf,
    },
    /// Extract the y-errors as a plain series
    ErrorY,
}

#[derive(Subcommand)]
enum TreeCommands {
    /// Print the discovered schema
    Schema {
        /// Tree JSON
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Print every row as an object
    Dump {
        /// Tree JSON
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Declare a new tree from `<name>/<B|I|D>` specs and fill it
    Declare {
        /// Column specs, e.g. `pt/D njet/I pass/B`
        #[arg(long, required = true, num_args = 1..)]
        columns: Vec<String>,

        /// Rows to append: JSON array of `{column: value}` objects. Integers are
        /// widened for `D` columns.
        #[arg(long)]
        rows: Option<PathBuf>,

        /// Tree name
        #[arg(long, default_value = "tree")]
        name: String,

        /// Output tree JSON. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Diagnostics {
    All,
    Warning,
    Fatal,
}

impl From<Diagnostics> for DiagnosticLevel {
    fn from(d: Diagnostics) -> Self {
        match d {
            Diagnostics::All => DiagnosticLevel::All,
            Diagnostics::Warning => DiagnosticLevel::Warning,
            Diagnostics::Fatal => DiagnosticLevel::Fatal,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Graph { op, input, output } => {
            let input = input.context("graph: --input is required")?;
            cmd_graph(op, &input, output.as_ref())
        }
        Commands::Fft { input, polar, output } => cmd_fft(&input, polar, output.as_ref()),
        Commands::Ifft { input, output } => cmd_ifft(&input, output.as_ref()),
        Commands::Tree { command } => match command {
            TreeCommands::Schema { input } => cmd_tree_schema(&input),
            TreeCommands::Dump { input, output } => cmd_tree_dump(&input, output.as_ref()),
            TreeCommands::Declare { columns, rows, name, output } => {
                cmd_tree_declare(&columns, rows.as_ref(), name, output.as_ref())
            }
        },
        Commands::Render { input, output, config, diagnostics, y_range } => {
            cmd_render(&input, &output, config.as_ref(), diagnostics, y_range)
        }
        Commands::Version => {
            println!("rsupport {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn write_json<T: Serialize>(output: Option<&PathBuf>, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    if let Some(path) = output {
        std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    } else {
        println!("{text}");
    }
    Ok(())
}

fn read_json(path: &Path) -> Result<serde_json::Value> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// A series file, with or without per-point errors.
enum AnyGraph {
    Plain(Graph),
    Errors(GraphErrors),
}

impl AnyGraph {
    fn from_value(value: serde_json::Value) -> Result<Self> {
        // Plain points would also accept error points (extra fields are ignored),
        // so try the error-carrying form first.
        if let Ok(g) = serde_json::from_value::<GraphErrors>(value.clone()) {
            return Ok(AnyGraph::Errors(g));
        }
        Ok(AnyGraph::Plain(serde_json::from_value::<Graph>(value).context("parsing series")?))
    }

    fn load(path: &Path) -> Result<Self> {
        Self::from_value(read_json(path)?).with_context(|| format!("loading {}", path.display()))
    }

    fn len(&self) -> usize {
        match self {
            AnyGraph::Plain(g) => g.len(),
            AnyGraph::Errors(g) => g.len(),
        }
    }
}

fn cmd_graph(op: GraphOp, input: &Path, output: Option<&PathBuf>) -> Result<()> {
    let graph = AnyGraph::load(input)?;
    tracing::info!("loaded {} points from {}", graph.len(), input.display());

    match (op, graph) {
        (GraphOp::Sort, AnyGraph::Plain(mut g)) => {
            g.sort_x();
            write_json(output, &g)
        }
        (GraphOp::Sort, AnyGraph::Errors(mut g)) => {
            g.sort_x();
            write_json(output, &g)
        }
        (GraphOp::InvertX, AnyGraph::Plain(mut g)) => {
            g.invert_x()?;
            write_json(output, &g)
        }
        (GraphOp::InvertX, AnyGraph::Errors(mut g)) => {
            g.invert_x()?;
            write_json(output, &g)
        }
        (GraphOp::LogY, AnyGraph::Plain(mut g)) => {
            g.log_y();
            write_json(output, &g)
        }
        (GraphOp::LogY, AnyGraph::Errors(mut g)) => {
            g.log_y();
            write_json(output, &g)
        }
        (GraphOp::CoarseGrain { step }, AnyGraph::Plain(g)) => {
            write_json(output, &g.coarse_grain(step)?)
        }
        (GraphOp::CoarseGrain { step }, AnyGraph::Errors(g)) => {
            write_json(output, &g.coarse_grain(step)?)
        }
        (GraphOp::Push { other }, graph) => match (graph, AnyGraph::load(&other)?) {
            (AnyGraph::Plain(mut g), AnyGraph::Plain(o)) => {
                g.push(&o);
                write_json(output, &g)
            }
            (AnyGraph::Errors(mut g), AnyGraph::Errors(o)) => {
                g.push(&o);
                write_json(output, &g)
            }
            _ => {
                anyhow::bail!("push: both series must be of the same kind (with or without errors)")
            }
        },
        (GraphOp::ErrorY, AnyGraph::Errors(g)) => write_json(output, &g.error_y_series()),
        (GraphOp::ErrorY, AnyGraph::Plain(_)) => {
            anyhow::bail!("error-y: input series has no errors")
        }
    }
}

fn cmd_fft(input: &Path, polar: bool, output: Option<&PathBuf>) -> Result<()> {
    let value = read_json(input)?;
    let samples: Vec<f64> = if value.is_array() {
        let raw: Vec<Option<f64>> = serde_json::from_value(value)?;
        raw.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect()
    } else {
        match AnyGraph::from_value(value)? {
            AnyGraph::Plain(g) => g.y_values(),
            AnyGraph::Errors(g) => g.y_values(),
        }
    };
    tracing::info!("forward transform of {} samples (polar={polar})", samples.len());
    write_json(output, &rs_spectral::forward(&samples, polar))
}

fn cmd_ifft(input: &Path, output: Option<&PathBuf>) -> Result<()> {
    let spectrum: rs_spectral::Spectrum = serde_json::from_value(read_json(input)?)?;
    write_json(output, &rs_spectral::inverse(&spectrum)?)
}

fn load_tree(path: &Path) -> Result<MemTree> {
    let tree: MemTree = serde_json::from_value(read_json(path)?)?;
    tree.validate()?;
    Ok(tree)
}

#[derive(Serialize)]
struct SchemaColumn {
    name: String,
    #[serde(rename = "type")]
    scalar_type: rs_core::ScalarType,
    spec: String,
}

fn cmd_tree_schema(input: &Path) -> Result<()> {
    let store = ColumnStore::discover(load_tree(input)?);
    let columns: Vec<SchemaColumn> = store
        .schema()
        .iter()
        .map(|c| SchemaColumn {
            name: c.name.clone(),
            scalar_type: c.scalar_type,
            spec: c.to_string(),
        })
        .collect();
    write_json(None, &serde_json::json!({ "rows": store.row_count(), "columns": columns }))
}

fn cmd_tree_dump(input: &Path, output: Option<&PathBuf>) -> Result<()> {
    let mut store = ColumnStore::discover(load_tree(input)?);
    let mut rows: Vec<BTreeMap<String, Scalar>> = Vec::new();
    let mut entry = 0;
    loop {
        let status = store.load_row(entry);
        if status <= 0 {
            if status < 0 {
                anyhow::bail!("failed to read entry {entry} (status {status})");
            }
            break;
        }
        rows.push(store.slots().iter().map(|s| (s.name().to_string(), s.value())).collect());
        entry += 1;
    }
    tracing::info!("dumped {} rows", rows.len());
    write_json(output, &rows)
}

fn cmd_tree_declare(
    columns: &[String],
    rows: Option<&PathBuf>,
    name: String,
    output: Option<&PathBuf>,
) -> Result<()> {
    let mut store = ColumnStore::declare_into(MemTree::new(name), columns)?;
    if let Some(path) = rows {
        let rows: Vec<BTreeMap<String, Scalar>> = serde_json::from_value(read_json(path)?)?;
        for (i, row) in rows.iter().enumerate() {
            for (column, value) in row {
                let slot = store.get(column)?;
                let value = match (slot.scalar_type(), *value) {
                    (ScalarType::Double, Scalar::Int(v)) => Scalar::Double(v as f64),
                    (_, v) => v,
                };
                slot.set(value).with_context(|| format!("row {i}, column '{column}'"))?;
            }
            let status = store.append_row();
            anyhow::ensure!(status > 0, "failed to append row {i} (status {status})");
        }
    }
    let status = store.flush();
    tracing::info!("declared tree with {} rows (flush status {status})", store.row_count());
    write_json(output, store.storage())
}

fn cmd_render(
    inputs: &[PathBuf],
    output: &Path,
    config: Option<&PathBuf>,
    diagnostics: Option<Diagnostics>,
    y_range: Option<Vec<f64>>,
) -> Result<()> {
    let mut cfg: VizConfig = match config {
        Some(path) => serde_json::from_value(read_json(path)?)?,
        None => VizConfig::default(),
    };
    if let Some(d) = diagnostics {
        cfg.diagnostics = d.into();
    }

    let y_range = match y_range.as_deref() {
        Some(&[lo, hi]) => Some((lo, hi)),
        _ => None,
    };

    let graphs = inputs.iter().map(|p| AnyGraph::load(p)).collect::<Result<Vec<_>>>()?;
    let artifact = match <[AnyGraph; 1]>::try_from(graphs) {
        Ok([AnyGraph::Plain(mut g)]) => {
            limit_y(&mut g, y_range);
            PlotArtifact::from(&g)
        }
        Ok([AnyGraph::Errors(mut g)]) => {
            limit_y(&mut g, y_range);
            PlotArtifact::from(&g)
        }
        Err(graphs) => {
            let mut plain = MultiSeries::new("multi", "");
            let mut errors = MultiSeries::new("multi", "");
            for g in graphs {
                match g {
                    AnyGraph::Plain(g) => plain.add(g),
                    AnyGraph::Errors(g) => errors.add(g),
                }
            }
            anyhow::ensure!(
                plain.is_empty() || errors.is_empty(),
                "render: cannot mix series with and without errors"
            );
            if errors.is_empty() {
                plain.set_by_first_object()?;
                limit_y(&mut plain, y_range);
                PlotArtifact::from(&plain)
            } else {
                errors.set_by_first_object()?;
                limit_y(&mut errors, y_range);
                PlotArtifact::from(&errors)
            }
        }
    };

    JsonRenderer::new(cfg).render(&artifact, output)?;
    tracing::info!("rendered {} points to {}", artifact.n_points(), output.display());
    Ok(())
}

fn limit_y(axes: &mut impl HasAxes, y_range: Option<(f64, f64)>) {
    if let Some(range) = y_range {
        axes.set_limit_y(range);
    }
}
