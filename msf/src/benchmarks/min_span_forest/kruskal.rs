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

use num_traits::{CheckedAdd, Zero};
use thiserror::Error;

use crate::graph::{TooManyVertices, WghEdge, WghEdgeArray};
use crate::union_find::{UnionFind, UnionFindError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MsfError {
    #[error(transparent)]
    Bounds(#[from] UnionFindError),
    #[error(transparent)]
    TooManyVertices(#[from] TooManyVertices),
    #[error("total forest weight overflows the weight type")]
    WeightOverflow,
}

/// The selected forest: edges in acceptance order and their total weight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsfResult<W> {
    pub total_weight: W,
    pub edges: Vec<WghEdge<W>>,
}

impl<W> MsfResult<W> {
    pub fn len(&self) -> usize { self.edges.len() }

    pub fn is_empty(&self) -> bool { self.edges.is_empty() }
}

/// Kruskal's algorithm.
///
/// Edges are scanned by ascending weight; ties keep their input order. An
/// edge is taken when its endpoints lie in different sets. A disconnected
/// graph yields one tree per component. A label above `n` fails with
/// [`MsfError::Bounds`], a total outside `W` with
/// [`MsfError::WeightOverflow`]; no partial result is returned.
pub fn minimum_spanning_forest<W>(
    wea: &WghEdgeArray<W>
) -> Result<MsfResult<W>, MsfError> where
    W: Copy + Ord + Zero + CheckedAdd,
{
    let mut es = wea.es.clone();
    es.sort_by_key(|e| e.w);

    let mut uf = UnionFind::new(wea.label_bound()?);
    let mut msf = Vec::with_capacity(wea.num_vertices().min(es.len()));
    let mut total = W::zero();

    for e in es {
        let u = uf.find(e.u)?;
        let v = uf.find(e.v)?;
        if u != v {
            uf.union_roots(u, v);
            total = total.checked_add(&e.w).ok_or(MsfError::WeightOverflow)?;
            msf.push(e);
        }
    }

    Ok(MsfResult { total_weight: total, edges: msf })
}
