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

use std::process::exit;

use clap::Parser;

use msf::common::graph::WghEdge;
use msf::common::graph_io::read_sp_graph_from_file;
use msf::common::io::read_file_to_vec_seq;
use msf::benchmarks::min_span_forest::verify::check;

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// msf results filename
    #[clap(value_parser, required=true)]
    rfname: String,

    /// the input graph's filename
    #[clap(value_parser, required=true)]
    ifname: String,
}

fn main() {
    let e = env_logger::Env::new()
        .filter("MSF_LOG")
        .write_style("MSF_LOG_STYLE");
    env_logger::init_from_env(e);

    let args = Args::parse();
    let wea = match read_sp_graph_from_file(&args.ifname) {
        Ok(g) => g,
        Err(e) => { eprintln!("{}: {e}", args.ifname); exit(1); }
    };
    let r: Vec<WghEdge> = match read_file_to_vec_seq(&args.rfname) {
        Ok(r) => r,
        Err(e) => { eprintln!("{}: {e}", args.rfname); exit(1); }
    };

    match check(&wea, &r) {
        Ok(()) => println!("OK"),
        Err(e) => { println!("{e}"); println!("ERR"); exit(1); }
    }
}
