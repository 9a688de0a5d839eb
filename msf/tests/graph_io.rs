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

use std::fs;

use msf::common::graph_io::{parse_sp_graph, read_sp_graph_from_file, GraphIoError};
use msf::common::io::{read_file_to_vec_seq, write_slice_to_file_seq};
use msf::graph::{ParseEdgeError, WghEdge, WghEdgeArray};

const SMALL: &str = "\
c a small 1-based graph
c
p sp 4 5
a 1 2 1
a 2 3 2

a 3 4 3
a 1 4 4
a 1 3 5
";

fn triples(g: &WghEdgeArray) -> Vec<(u32, u32, i64)> {
    g.iter().map(|e| (e.u, e.v, e.w)).collect()
}


#[test]
fn reads_header_and_arcs() {
    let g = parse_sp_graph(SMALL).unwrap();
    assert_eq!(g.num_vertices(), 4);
    assert_eq!(g.num_edges(), 5);
    assert_eq!(
        triples(&g),
        vec![(1, 2, 1), (2, 3, 2), (3, 4, 3), (1, 4, 4), (1, 3, 5)]
    );
}

#[test]
fn other_lines_are_ignored() {
    let g = parse_sp_graph("p max 3 4\nn 1 s\nfoo\np sp 2 1\n  a   0 1 -7  \n").unwrap();
    assert_eq!(g.num_vertices(), 2);
    assert_eq!(triples(&g), vec![(0, 1, -7)]);
}

#[test]
fn edge_count_is_advisory() {
    let g = parse_sp_graph("p sp 3 10\na 1 2 1\n").unwrap();
    assert_eq!(g.num_edges(), 1);
}

#[test]
fn huge_edge_count_is_not_trusted() {
    let g = parse_sp_graph("p sp 4 1152921504606846976\na 0 1 1\n").unwrap();
    assert_eq!(g.num_vertices(), 4);
    assert_eq!(triples(&g), vec![(0, 1, 1)]);

    let g = parse_sp_graph(&format!("p sp 2 {}\na 0 1 1\n", usize::MAX)).unwrap();
    assert_eq!(g.num_edges(), 1);
}

#[test]
fn vertex_count_must_fit_labels() {
    let g = parse_sp_graph(&format!("p sp {} 0\n", u32::MAX)).unwrap();
    assert_eq!(g.label_bound(), Ok(u32::MAX as usize + 1));

    for n in [u32::MAX as usize + 1, usize::MAX] {
        match parse_sp_graph(&format!("c\np sp {n} 0\n")) {
            Err(GraphIoError::Malformed { line, .. }) => assert_eq!(line, 2),
            r => panic!("{n}: unexpected {r:?}"),
        }
    }
}

#[test]
fn arcs_before_header_are_kept() {
    let g = parse_sp_graph("a 0 1 3\np sp 2 2\na 1 2 4\n").unwrap();
    assert_eq!(g.num_vertices(), 2);
    assert_eq!(triples(&g), vec![(0, 1, 3), (1, 2, 4)]);
}

#[test]
fn missing_header_means_no_vertices() {
    let g = parse_sp_graph("a 0 0 1\n").unwrap();
    assert_eq!(g.num_vertices(), 0);
    assert_eq!(g.num_edges(), 1);
}

#[test]
fn malformed_arc_reports_line() {
    match parse_sp_graph("p sp 2 1\na 1 x 3\n") {
        Err(GraphIoError::Malformed { line, content }) => {
            assert_eq!(line, 2);
            assert_eq!(content, "a 1 x 3");
        }
        r => panic!("unexpected {r:?}"),
    }
}

#[test]
fn malformed_lines() {
    for (text, bad) in [
        ("p sp 3\n", 1),
        ("p sp 3 x\n", 1),
        ("p sp 3 3\na 1 2\n", 2),
        ("p sp 3 3\na 1 2 3 4\n", 2),
        ("p sp 3 3\na -1 2 3\n", 2),
        ("p sp 3 3\na 1 2 3\na 1 2 1.5\n", 3),
    ] {
        match parse_sp_graph(text) {
            Err(GraphIoError::Malformed { line, .. }) => assert_eq!(line, bad, "{text:?}"),
            r => panic!("{text:?}: unexpected {r:?}"),
        }
    }
}

#[test]
fn first_malformed_line_wins() {
    match parse_sp_graph("a 1 2 x\na 1 2 3\na y 2 3\n") {
        Err(GraphIoError::Malformed { line, .. }) => assert_eq!(line, 1),
        r => panic!("unexpected {r:?}"),
    }
}

#[test]
fn duplicate_problem_line() {
    match parse_sp_graph("p sp 2 1\na 0 1 1\np sp 3 1\n") {
        Err(GraphIoError::DuplicateProblemLine { line }) => assert_eq!(line, 3),
        r => panic!("unexpected {r:?}"),
    }
}

#[test]
fn reads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.gr");
    fs::write(&path, SMALL).unwrap();

    let g = read_sp_graph_from_file(&path).unwrap();
    assert_eq!(g, parse_sp_graph(SMALL).unwrap());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let r = read_sp_graph_from_file(dir.path().join("absent.gr"));
    assert!(matches!(r, Err(GraphIoError::Io(_))));
}

#[test]
fn edge_text_form() {
    assert_eq!(WghEdge::new(3, 1, -4i64).to_string(), "3 1 -4");
    assert_eq!(" 3 1  -4 ".parse::<WghEdge>(), Ok(WghEdge::new(3, 1, -4i64)));
    assert_eq!("3 1".parse::<WghEdge>(), Err(ParseEdgeError));
    assert_eq!("3 1 w".parse::<WghEdge>(), Err(ParseEdgeError));
}

#[test]
fn result_file_skips_unparsable_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let es = vec![WghEdge::new(0, 1, 1i64), WghEdge::new(1, 2, -2)];
    write_slice_to_file_seq(&es, &path).unwrap();
    fs::write(&path, format!("header\n{}\n\n", fs::read_to_string(&path).unwrap())).unwrap();

    let back: Vec<WghEdge> = read_file_to_vec_seq(&path).unwrap();
    assert_eq!(back, es);
}
