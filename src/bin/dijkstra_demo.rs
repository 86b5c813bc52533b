use clap::{Parser, ValueEnum};
use dijkstra_paths::graph::UndirectedGraph;
use dijkstra_paths::report::{sample_graph, RunReport};
use dijkstra_paths::Dijkstra;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "dijkstra_demo")]
#[command(about = "Run Dijkstra on the ten-vertex sample graph and print distances and shortest paths.", long_about = None)]
struct Cli {
    /// Label of the source vertex
    #[arg(short, long, default_value_t = String::from("A"))]
    source: String,

    /// Stop once this vertex is finalized instead of computing every distance
    #[arg(short, long)]
    target: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn lookup(graph: &UndirectedGraph<&'static str, u32>, label: &str) -> Result<usize, String> {
    graph
        .find_vertex(|l| *l == label)
        .ok_or_else(|| format!("no vertex labelled {:?} in the sample graph", label))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let graph = sample_graph()?;
    let source = lookup(&graph, &cli.source)?;

    let mut dijkstra = Dijkstra::new(&graph, |w: &u32| f64::from(*w));
    dijkstra.initialize(source)?;
    match &cli.target {
        Some(label) => dijkstra.run_until(lookup(&graph, label)?)?,
        None => dijkstra.run()?,
    }

    let report = RunReport::from_run(&dijkstra)?;
    match cli.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
