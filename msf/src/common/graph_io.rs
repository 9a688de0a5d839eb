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

use std::{fs, path::Path};

use log::{debug, warn};
use rayon::prelude::*;
use thiserror::Error;

use crate::{DefInt, DefWgh};
use super::graph::{WghEdge, WghEdgeArray};

const PROBLEM_TAG: &str = "p";
const SP_FORMAT: &str = "sp";
const ARC_TAG: &str = "a";

#[derive(Debug, Error)]
pub enum GraphIoError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: malformed `{content}`")]
    Malformed { line: usize, content: String },
    #[error("line {line}: more than one problem line")]
    DuplicateProblemLine { line: usize },
}

enum Line {
    Problem { n: usize, m: usize },
    Arc(WghEdge),
    Ignored,
}

fn malformed(line: usize, content: &str) -> GraphIoError {
    GraphIoError::Malformed { line, content: content.trim().to_string() }
}

fn classify(idx: usize, s: &str) -> Result<Line, GraphIoError> {
    let w: Vec<&str> = s.split_whitespace().collect();
    match w.as_slice() {
        [PROBLEM_TAG, SP_FORMAT, rest @ ..] => match rest {
            [n, m] => match (n.parse(), m.parse()) {
                (Ok(n), Ok(m)) if n <= DefInt::MAX as usize => Ok(Line::Problem { n, m }),
                _ => Err(malformed(idx + 1, s)),
            },
            _ => Err(malformed(idx + 1, s)),
        },
        [ARC_TAG, rest @ ..] => match rest {
            [u, v, wgh] => match (
                u.parse::<DefInt>(),
                v.parse::<DefInt>(),
                wgh.parse::<DefWgh>(),
            ) {
                (Ok(u), Ok(v), Ok(wgh)) => Ok(Line::Arc(WghEdge::new(u, v, wgh))),
                _ => Err(malformed(idx + 1, s)),
            },
            _ => Err(malformed(idx + 1, s)),
        },
        _ => Ok(Line::Ignored),
    }
}

/// Parses a `p sp <n> <m>` / `a <u> <v> <w>` edge list. Every other line is
/// ignored. The declared edge count is advisory only.
pub fn parse_sp_graph(text: &str) -> Result<WghEdgeArray, GraphIoError> {
    let raw: Vec<&str> = text.lines().collect();
    let lines: Vec<Result<Line, GraphIoError>> = raw
        .par_iter()
        .enumerate()
        .map(|(i, s)| classify(i, s))
        .collect();

    let mut g = WghEdgeArray::with_vertices(0);
    let mut declared: Option<(usize, usize)> = None;
    for (i, l) in lines.into_iter().enumerate() {
        match l? {
            Line::Problem { n, m } => {
                if declared.is_some() {
                    return Err(GraphIoError::DuplicateProblemLine { line: i + 1 });
                }
                debug!("problem line: n={n}, m={m}");
                g.n = n;
                g.es.reserve(m.min(raw.len()).saturating_sub(g.es.len()));
                declared = Some((n, m));
            }
            Line::Arc(e) => g.push(e),
            Line::Ignored => {}
        }
    }

    match declared {
        None => warn!("no `p sp` line; assuming 0 vertices"),
        Some((_, m)) if m != g.num_edges() => warn!(
            "problem line declares {m} edges but {} were read",
            g.num_edges()
        ),
        Some(_) => {}
    }
    debug!("graph read (n={}, m={})", g.num_vertices(), g.num_edges());
    Ok(g)
}

pub fn read_sp_graph_from_file<P: AsRef<Path>>(fname: P) -> Result<WghEdgeArray, GraphIoError> {
    let text = fs::read_to_string(fname)?;
    parse_sp_graph(&text)
}
