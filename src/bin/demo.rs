//! Undigraph 演示程序
//!
//! 构造两个由边连通的三角形，打印邻接关系，删除两条底边后再次打印

use clap::Parser;
use tracing_subscriber::EnvFilter;
use undigraph::{EdgeKey, Graph, Vertex};

#[derive(Parser, Debug)]
#[command(name = "undigraph-demo")]
#[command(about = "Undigraph 无向带权图演示")]
struct Args {
    /// 日志过滤规则（RUST_LOG 优先）
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// 只打印邻接查询结果
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&args.log_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let vertices: Vec<Vertex> = ["A", "B", "C", "D", "E", "F"]
        .into_iter()
        .map(Vertex::new)
        .collect();
    if !args.quiet {
        for v in &vertices {
            println!("{}", v);
        }
        println!();
    }

    let mut graph = Graph::with_vertices(vertices.iter().cloned());

    // 两个三角形：腰权重 3，底边权重 1
    graph.insert_edge("A", "B", 3);
    graph.insert_edge("A", "C", 3);
    graph.insert_edge("B", "C", 1);
    graph.insert_edge("D", "E", 3);
    graph.insert_edge("D", "F", 3);
    graph.insert_edge("E", "F", 1);

    // 连通两个三角形
    graph.insert_edge("A", "D", 3);
    graph.insert_edge("C", "E", 2);

    if !args.quiet {
        print_adjacency(&graph, &vertices)?;
    }

    // 删除两条底边
    let bases = [EdgeKey::new("B", "C"), EdgeKey::new("E", "F")];
    for base in &bases {
        graph.remove_edge(base);
    }

    for base in &bases {
        println!("顶点 {} 是否相邻: {}", base, graph.contains_edge(base));
    }

    if !args.quiet {
        println!();
        print_adjacency(&graph, &vertices)?;
    }

    graph.check_consistency()?;
    Ok(())
}

fn print_adjacency(graph: &Graph, vertices: &[Vertex]) -> anyhow::Result<()> {
    for v in vertices {
        println!("{}", v);
        for edge in graph.incident_edges(v.label())? {
            println!("{}", edge);
        }
    }
    Ok(())
}
