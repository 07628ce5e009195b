// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use dyngraph::backends::StubRuntime;
use dyngraph::config::load_and_validate_config;
use dyngraph::runtime::DynamicGraph;
use std::env;
use std::sync::Arc;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <graphs.yaml> [graphs2.yaml ...]", args[0]);
        eprintln!("Example: {} configs/single-graph.yaml", args[0]);
        std::process::exit(1);
    }

    let mut failed = false;
    for path in &args[1..] {
        println!("📋 Description: {}", path);
        match dry_run(path) {
            Ok(()) => println!("✅ Dry run complete\n"),
            Err(e) => {
                eprintln!("❌ {}: {}\n", path, e);
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}

/// Load a description file, validate it, and drive it through a full
/// create/destroy cycle against the stub runtime, printing the translated
/// configuration along the way. No device is touched.
fn dry_run(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let set = load_and_validate_config(path)?;

    let graph_count = set.graphs.len();
    let engine_count: usize = set.graphs.iter().map(|g| g.engines.len()).sum();
    let connection_count: usize = set.graphs.iter().map(|g| g.connections.len()).sum();
    println!(
        "   {} graph(s), {} engine(s), {} connection(s)",
        graph_count, engine_count, connection_count
    );

    let runtime = Arc::new(StubRuntime::new());
    let mut graphs = DynamicGraph::new(runtime);
    for graph in set.graphs {
        graphs.add_graph(graph);
    }

    graphs.create()?;
    if let Some(config) = graphs.last_config() {
        println!("🔧 Translated configuration:");
        println!("{:#?}", config);
    }
    graphs.destroy()?;

    Ok(())
}
