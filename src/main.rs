use anyhow::{bail, Context, Result};
use digraph_algo::graphs::random::ErdosRenyi;
use digraph_algo::prelude::*;
use dsi_progress_logger::prelude::*;

fn main() -> Result<()> {
    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let mut args = std::env::args().skip(1);
    let op = args.next().context("No operation provided")?;
    let num_nodes: usize = args
        .next()
        .context("No number of nodes provided")?
        .parse()
        .context("Expected integer number of nodes")?;
    let p: f64 = args
        .next()
        .context("No arc probability provided")?
        .parse()
        .context("Expected floating-point arc probability")?;
    let seed: u64 = match args.next() {
        Some(seed) => seed.parse().context("Expected integer seed")?,
        None => 0,
    };

    let mut main_pl = progress_logger![display_memory = true];
    main_pl.info(format_args!(
        "Generating Erdös-Rényi digraph with {num_nodes} nodes, p = {p}, seed = {seed}"
    ));
    let er = ErdosRenyi::new(num_nodes, p, seed);

    match op.as_str() {
        "sccs" => {
            let mut sccs = gabow(er.adj_list(), &mut main_pl);
            let sizes = sccs.sort_by_size();
            main_pl.info(format_args!(
                "{} components, largest has {} nodes",
                sccs.num_components(),
                sizes.first().copied().unwrap_or(0)
            ));
        }
        "acyclic" => {
            let acyclic = is_acyclic(er.adj_list(), &mut main_pl);
            main_pl.info(format_args!("Acyclic: {acyclic}"));
        }
        "top_sort" => match top_sort(er.adj_list(), &mut main_pl) {
            Ok(order) => main_pl.info(format_args!("Sorted {} nodes", order.len())),
            Err(err) => main_pl.info(format_args!("{err}")),
        },
        "strongly_connected" => {
            let strongly_connected = is_strongly_connected(er.adj_list(), &mut main_pl);
            main_pl.info(format_args!("Strongly connected: {strongly_connected}"));
        }
        "simple" => {
            let mut edges = er.edge_list();
            edges.build_adjacency(&mut main_pl);
            main_pl.info(format_args!("Simple: {}", edges.is_simple()));
        }
        _ => bail!("Unknown operation {op}"),
    }

    Ok(())
}
