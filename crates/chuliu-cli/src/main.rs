use chuliu::EdgeList;
use serde::Serialize;
use std::io::{Read, Write};
use tracing::info;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Solve(chuliu::Error),
    Json(serde_json::Error),
    NoRoot,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Solve(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::NoRoot => write!(f, "No root given: add a `root <id>` line or pass --root"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<chuliu::Error> for CliError {
    fn from(value: chuliu::Error) -> Self {
        Self::Solve(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    root: Option<String>,
    pretty: bool,
    verbosity: u8,
}

#[derive(Serialize)]
struct EdgeOut<'a> {
    from: &'a str,
    to: &'a str,
    weight: f64,
}

#[derive(Serialize)]
struct TreeOut<'a> {
    root: &'a str,
    total_weight: f64,
    edges: Vec<EdgeOut<'a>>,
}

fn usage() -> &'static str {
    "chuliu-cli\n\
\n\
USAGE:\n\
  chuliu-cli [-v...] [--root <id>] [--pretty] [<path>|-]\n\
\n\
INPUT:\n\
  One directive per line; '#' starts a comment line.\n\
    root <id>               designate the root vertex\n\
    vertex <id>             declare a vertex\n\
    <from> <to> <weight>    add a directed edge\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - --root overrides the root line of the input.\n\
  - The arborescence is printed to stdout as JSON.\n\
  - -v, -vv, -vvv raise log verbosity on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--pretty" => args.pretty = true,
            "-v" => args.verbosity = args.verbosity.saturating_add(1),
            "-vv" => args.verbosity = args.verbosity.saturating_add(2),
            "-vvv" => args.verbosity = args.verbosity.saturating_add(3),
            "--root" => {
                let Some(root) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.root = Some(root.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    let mut out = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let EdgeList { graph, root } = chuliu::parse_edge_list::<f64>(&text)?;
    let root = args.root.or(root).ok_or(CliError::NoRoot)?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        root = %root,
        "loaded edge list"
    );

    let tree = chuliu::solve(&graph, &root)?;
    let total_weight = chuliu::total_weight(&tree);
    info!(total_weight, "solved");

    let out = TreeOut {
        root: &root,
        total_weight,
        edges: tree
            .edges()
            .map(|(from, to, weight)| EdgeOut {
                from,
                to,
                weight: *weight,
            })
            .collect(),
    };
    write_json(&out, args.pretty)
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    init_logging(args.verbosity);

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
