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

use std::cmp::Ordering;

use thiserror::Error;

use crate::DefInt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnionFindError {
    #[error("vertex {vertex} is out of bounds for a disjoint-set of {len} elements")]
    OutOfBounds { vertex: DefInt, len: usize },
}

/// Disjoint sets over `0..n` with path compression and union by rank.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parents: Vec<DefInt>,
    ranks: Vec<u8>,
    sets: usize,
}

impl UnionFind {
    /// `n` singletons. Every index must fit in a [`DefInt`]; callers size
    /// this from [`WghEdgeArray::label_bound`](crate::graph::WghEdgeArray::label_bound),
    /// which enforces that.
    pub fn new(n: usize) -> Self {
        debug_assert!(n == 0 || n - 1 <= DefInt::MAX as usize);
        Self {
            parents: (0..n).map(|i| i as DefInt).collect(),
            ranks: vec![0; n],
            sets: n,
        }
    }

    pub fn len(&self) -> usize { self.parents.len() }

    pub fn is_empty(&self) -> bool { self.parents.is_empty() }

    /// Number of disjoint sets currently held.
    pub fn num_sets(&self) -> usize { self.sets }

    pub fn parents(&self) -> &[DefInt] { &self.parents }

    pub fn rank(&self, u: DefInt) -> Result<u8, UnionFindError> {
        self.check(u)?;
        Ok(self.ranks[u as usize])
    }

    #[inline(always)]
    fn check(&self, u: DefInt) -> Result<(), UnionFindError> {
        if (u as usize) < self.parents.len() { Ok(()) }
        else { Err(UnionFindError::OutOfBounds { vertex: u, len: self.parents.len() }) }
    }

    #[inline(always)]
    fn is_root(&self, u: DefInt) -> bool {
        self.parents[u as usize] == u
    }

    /// Returns the root of `u`'s set and points every node on the walked
    /// path directly at it.
    pub fn find(&mut self, u: DefInt) -> Result<DefInt, UnionFindError> {
        self.check(u)?;
        let mut root = u;
        while !self.is_root(root) {
            root = self.parents[root as usize];
        }

        let mut u = u;
        while u != root {
            let p = self.parents[u as usize];
            self.parents[u as usize] = root;
            u = p;
        }
        Ok(root)
    }

    pub fn same_set(&mut self, u: DefInt, v: DefInt) -> Result<bool, UnionFindError> {
        Ok(self.find(u)? == self.find(v)?)
    }

    /// Merges the sets of `u` and `v`; a no-op if they already coincide.
    pub fn union(&mut self, u: DefInt, v: DefInt) -> Result<(), UnionFindError> {
        self.check(u)?;
        self.check(v)?;
        let (ru, rv) = (self.find(u)?, self.find(v)?);
        if ru != rv { self.union_roots(ru, rv); }
        Ok(())
    }

    /// Links two distinct roots. The lower-rank root goes under the other;
    /// on equal rank `v` goes under `u` and `u`'s rank grows by one.
    pub fn union_roots(&mut self, u: DefInt, v: DefInt) {
        debug_assert!(self.is_root(u) && self.is_root(v) && u != v);
        let (ui, vi) = (u as usize, v as usize);
        match self.ranks[ui].cmp(&self.ranks[vi]) {
            Ordering::Greater => self.parents[vi] = u,
            Ordering::Less => self.parents[ui] = v,
            Ordering::Equal => {
                self.parents[vi] = u;
                self.ranks[ui] += 1;
            }
        }
        self.sets -= 1;
    }
}
