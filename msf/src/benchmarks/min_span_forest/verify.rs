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

use std::collections::HashMap;
use std::hash::Hash;

use rayon::prelude::*;
use thiserror::Error;

use crate::DefInt;
use crate::graph::{TooManyVertices, WghEdge, WghEdgeArray};
use crate::union_find::{UnionFind, UnionFindError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("result edge #{index} is not an edge of the graph")]
    UnknownEdge { index: usize },
    #[error("result edge #{index} closes a cycle")]
    Cycle { index: usize },
    #[error("wrong edge count: a spanning forest has {expected} edges but the result has {found}")]
    WrongEdgeCount { expected: usize, found: usize },
    #[error("graph edge #{index} is lighter than a forest edge on the path it spans")]
    NotMinimal { index: usize },
    #[error(transparent)]
    Bounds(#[from] UnionFindError),
    #[error(transparent)]
    TooManyVertices(#[from] TooManyVertices),
}

#[inline(always)]
fn key<W: Copy>(e: &WghEdge<W>) -> (DefInt, DefInt, W) {
    (e.u.min(e.v), e.u.max(e.v), e.w)
}

/// Checks that every result edge occurs in the graph, counted with
/// multiplicity and ignoring endpoint order.
fn check_membership<W>(wea: &WghEdgeArray<W>, out: &[WghEdge<W>]) -> Result<(), CheckError>
where
    W: Copy + Eq + Hash + Send + Sync,
{
    let keys: Vec<_> = wea.es.par_iter().map(key).collect();
    let mut avail: HashMap<(DefInt, DefInt, W), usize> = HashMap::with_capacity(keys.len());
    for k in keys { *avail.entry(k).or_insert(0) += 1; }

    for (index, e) in out.iter().enumerate() {
        match avail.get_mut(&key(e)) {
            Some(c) if *c > 0 => *c -= 1,
            _ => return Err(CheckError::UnknownEdge { index }),
        }
    }
    Ok(())
}

/// Number of edges in any spanning forest of `wea`.
fn forest_size<W>(wea: &WghEdgeArray<W>, slots: usize) -> Result<usize, UnionFindError> {
    let mut uf = UnionFind::new(slots);
    for e in wea {
        let (u, v) = (uf.find(e.u)?, uf.find(e.v)?);
        if u != v { uf.union_roots(u, v); }
    }
    Ok(slots - uf.num_sets())
}

/// Rooted view of a forest: parent label, weight of the edge to the parent,
/// and depth of every vertex.
struct RootedForest<W> {
    parent: Vec<Option<(DefInt, W)>>,
    depth: Vec<usize>,
}

impl<W: Copy> RootedForest<W> {
    fn new(slots: usize, es: &[WghEdge<W>]) -> Self {
        let mut adj: Vec<Vec<(DefInt, W)>> = vec![vec![]; slots];
        for e in es {
            adj[e.u as usize].push((e.v, e.w));
            adj[e.v as usize].push((e.u, e.w));
        }

        let mut parent = vec![None; slots];
        let mut depth = vec![0; slots];
        let mut seen = vec![false; slots];
        let mut stack = vec![];
        for r in 0..slots {
            if seen[r] { continue; }
            seen[r] = true;
            stack.push(r);
            while let Some(x) = stack.pop() {
                for &(y, w) in &adj[x] {
                    let yi = y as usize;
                    if seen[yi] { continue; }
                    seen[yi] = true;
                    parent[yi] = Some((x as DefInt, w));
                    depth[yi] = depth[x] + 1;
                    stack.push(yi);
                }
            }
        }
        Self { parent, depth }
    }

    /// Heaviest forest edge on the path between `u` and `v`, if they are
    /// joined by a non-empty path.
    fn max_on_path(&self, u: DefInt, v: DefInt) -> Option<W> where W: Ord {
        let (mut a, mut b) = (u as usize, v as usize);
        let mut heaviest: Option<W> = None;
        while a != b {
            if self.depth[a] < self.depth[b] { std::mem::swap(&mut a, &mut b); }
            let (p, w) = self.parent[a]?;
            heaviest = Some(heaviest.map_or(w, |h| h.max(w)));
            a = p as usize;
        }
        heaviest
    }
}

/// Verifies that `out` is a minimum spanning forest of `wea`.
///
/// The result must be a sub-multiset of the graph's edges, acyclic, as large
/// as any spanning forest of the graph, and satisfy the cycle property: no
/// graph edge is lighter than the heaviest forest edge on the path it spans.
pub fn check<W>(wea: &WghEdgeArray<W>, out: &[WghEdge<W>]) -> Result<(), CheckError>
where
    W: Copy + Ord + Hash + Send + Sync,
{
    check_membership(wea, out)?;

    let slots = wea.label_bound()?;
    let mut uf = UnionFind::new(slots);
    for (index, e) in out.iter().enumerate() {
        let (u, v) = (uf.find(e.u)?, uf.find(e.v)?);
        if u == v { return Err(CheckError::Cycle { index }); }
        uf.union_roots(u, v);
    }

    let expected = forest_size(wea, slots)?;
    if expected != out.len() {
        return Err(CheckError::WrongEdgeCount { expected, found: out.len() });
    }

    let forest = RootedForest::new(slots, out);
    for (index, e) in wea.iter().enumerate() {
        if let Some(h) = forest.max_on_path(e.u, e.v) {
            if h > e.w { return Err(CheckError::NotMinimal { index }); }
        }
    }
    Ok(())
}
