// ============================================================================
// This code is part of Rusty-PBBS.
// ----------------------------------------------------------------------------
// MIT License
// 
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
// 
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
// 
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
// 
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

use std::path::Path;
use std::process::exit;
use std::time::Duration;

use clap::{CommandFactory, Parser};

use msf::DefWgh;
use msf::common::graph::WghEdgeArray;
use msf::common::graph_io::read_sp_graph_from_file;
use msf::common::io::write_slice_to_file_seq;
use msf::common::time_loop::time_loop;
use msf::common::timer::Timer;
use msf::benchmarks::min_span_forest::kruskal::{minimum_spanning_forest, MsfError, MsfResult};

#[derive(Parser, Debug)]
#[clap(version, about = "Minimum spanning forest with Kruskal's algorithm", long_about = None)]
struct Args {
    /// the input graph's filename (`p sp` / `a` edge list)
    #[clap(value_parser)]
    ifname: Option<String>,

    /// the output filename for the selected edges
    #[clap(short, long, required=false, default_value_t = ("").to_string())]
    ofname: String,

    /// the number of rounds to execute the algorithm
    #[clap(short, long, value_parser, required=false, default_value_t=1)]
    rounds: usize,
}

pub fn run(
    rounds: usize,
    wea: &WghEdgeArray,
) -> Result<(MsfResult<DefWgh>, Duration), MsfError> {
    let mut r = Ok(MsfResult { total_weight: 0, edges: vec![] });

    let mean = time_loop(
        "msf",
        rounds,
        Duration::ZERO,
        || {},
        || { r = minimum_spanning_forest(wea); },
        || {}
    );
    Ok((r?, mean))
}

fn report(wea: &WghEdgeArray, r: &MsfResult<DefWgh>, d: Duration) {
    println!("\n\n\n");
    println!("=================   Resumo   =====================");
    println!("Elapsed time: {} ms", d.as_millis());
    println!("Vertices: {}", wea.num_vertices());
    println!("Edges: {}", wea.num_edges());
    println!("Minimum spanning tree weight: {}", r.total_weight);

    println!("\nMinimum spanning tree edges:");
    for e in &r.edges {
        println!("Vertex {} - Vertex {} com peso {}", e.u, e.v, e.w);
    }
}

fn init_logger() {
    let e = env_logger::Env::new()
        .filter("MSF_LOG")
        .write_style("MSF_LOG_STYLE");
    env_logger::init_from_env(e);
}

fn main() {
    init_logger();
    let args = Args::parse();

    let Some(ifname) = args.ifname.as_deref() else {
        println!("Please provide the input graph file as an argument.\n");
        if let Err(e) = Args::command().print_help() {
            log::warn!("can not print usage: {e}");
        }
        return;
    };
    if !Path::new(ifname).is_file() {
        println!("File not found: {ifname}");
        return;
    }

    let mut t = Timer::new("msf_time"); t.start();
    let wea = match read_sp_graph_from_file(ifname) {
        Ok(g) => g,
        Err(e) => { eprintln!("{ifname}: {e}"); exit(1); }
    };
    log::info!("read {ifname}: n={}, m={}", wea.num_vertices(), wea.num_edges());
    t.next("Reading graph");

    let (r, d) = match run(args.rounds, &wea) {
        Ok(rd) => rd,
        Err(e) => { eprintln!("{ifname}: {e}"); exit(1); }
    };
    t.next("Kruskal");

    report(&wea, &r, d);

    if !args.ofname.is_empty() {
        if let Err(e) = write_slice_to_file_seq(&r.edges, &args.ofname) {
            eprintln!("{}: {e}", args.ofname);
            exit(1);
        }
        t.next("Writing output");
    }
    t.total();
}
