//! GraphAlgo 演示脚本
//!
//! 构建示例图并依次运行三个算法

use graphalgo::{Digraph, Graph};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("GraphAlgo 演示");
    println!("================\n");

    // 最大基数匹配
    println!("1. 最大基数匹配 (路径图 0-1-2-3)...");
    let mut g = Graph::new(4);
    g.add_edge(0, 1)?;
    g.add_edge(1, 2)?;
    g.add_edge(2, 3)?;

    let matching = g.maximum_matching();
    println!("   匹配对数: {}", matching.cardinality());
    println!("   达到最大基数: {}", matching.is_maximum_cardinality());
    for v in 0..g.vertex_count() {
        match matching.partner_of(v)? {
            Some(u) => println!("   顶点 {} <-> 顶点 {}", v, u),
            None => println!("   顶点 {} 未匹配", v),
        }
    }
    println!();

    // 强连通分量
    println!("2. 强连通分量 (0 -> 1 -> 2 -> 0, 2 -> 3)...");
    let mut d = Digraph::with_vertices(4);
    d.add_edge(0, 1)?;
    d.add_edge(1, 2)?;
    d.add_edge(2, 0)?;
    d.add_edge(2, 3)?;

    let sc = d.strong_components();
    println!("   分量总数: {}", sc.count());
    for v in 0..d.vertex_count() {
        println!("   顶点 {} 属于分量 {}", v, sc.component_of(v)?);
    }
    println!();

    // 拓扑排序
    println!("3. 拓扑排序 (菱形 DAG)...");
    let mut dag = Digraph::new();
    let a = dag.add_vertex();
    let b = dag.add_vertex();
    let c = dag.add_vertex();
    let e = dag.add_vertex();
    dag.add_edge(a, b)?;
    dag.add_edge(a, c)?;
    dag.add_edge(b, e)?;
    dag.add_edge(c, e)?;

    let order = dag.topological_sorting()?;
    let seq: Vec<String> = order.iter().map(|v| v.to_string()).collect();
    println!("   排序结果: {}", seq.join(" -> "));
    println!();

    // 含环图拓扑排序失败
    println!("4. 含环图拓扑排序 (0 <-> 1)...");
    let mut cyclic = Digraph::with_vertices(2);
    cyclic.add_edge(0, 1)?;
    cyclic.add_edge(1, 0)?;

    match cyclic.topological_sorting() {
        Ok(_) => println!("   意外成功"),
        Err(err) => println!("   预期失败: {}", err),
    }

    println!("\n演示完成!");
    Ok(())
}
