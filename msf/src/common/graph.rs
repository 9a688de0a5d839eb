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

use std::{fmt, ops::Index, str::FromStr};

use crate::{DefInt, DefWgh};

// **************************************************************
//    WEIGHTED EDGE
// **************************************************************

/// An undirected weighted edge between the labels `u` and `v`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WghEdge<W = DefWgh> {
    pub u: DefInt,
    pub v: DefInt,
    pub w: W,
}

impl<W> WghEdge<W> {
    pub fn new(u: DefInt, v: DefInt, w: W) -> Self
    { Self { u, v, w } }
}

impl<W: Default> Default for WghEdge<W> {
    fn default() -> Self { Self { u: 0, v: 0, w: W::default() } }
}

impl<W: fmt::Display> fmt::Display for WghEdge<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.u, self.v, self.w)
    }
}

impl<W: FromStr> FromStr for WghEdge<W> {
    type Err = ParseEdgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s: Vec<&str> = s.split_whitespace().collect();
        if s.len() != 3 { return Err(ParseEdgeError); }
        match (s[0].parse(), s[1].parse(), s[2].parse()) {
            (Ok(u), Ok(v), Ok(w)) => Ok(Self::new(u, v, w)),
            _ => Err(ParseEdgeError),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("can not parse as weighted edge")]
pub struct ParseEdgeError;

/// The declared vertex count leaves labels that do not fit in a [`DefInt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{n} vertices do not fit in {} bit labels", DefInt::BITS)]
pub struct TooManyVertices { pub n: usize }

// **************************************************************
//    WEIGHTED EDGE ARRAY
// **************************************************************

/// A graph given as a declared vertex count and an ordered edge list.
///
/// Labels may be 0-based or 1-based: every label in `0..=n` is valid, so
/// algorithms size their per-vertex state with [`label_bound`].
///
/// [`label_bound`]: WghEdgeArray::label_bound
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WghEdgeArray<W = DefWgh> {
    pub es: Vec<WghEdge<W>>,
    pub n: usize,
}

impl<W> WghEdgeArray<W> {
    pub fn new(es: Vec<WghEdge<W>>, n: usize) -> Self {
        Self { es, n }
    }

    pub fn with_vertices(n: usize) -> Self {
        Self { es: vec![], n }
    }

    pub const fn num_vertices(&self) -> usize { self.n }

    pub fn num_edges(&self) -> usize { self.es.len() }

    /// Number of slots needed to index every valid label (`n + 1`).
    pub fn label_bound(&self) -> Result<usize, TooManyVertices> {
        if self.n > DefInt::MAX as usize { return Err(TooManyVertices { n: self.n }); }
        Ok(self.n + 1)
    }

    pub fn push(&mut self, e: WghEdge<W>) { self.es.push(e); }

    pub fn iter(&self) -> std::slice::Iter<'_, WghEdge<W>> { self.es.iter() }
}

impl<W> Index<usize> for WghEdgeArray<W> {
    type Output = WghEdge<W>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.es[index]
    }
}

impl<'a, W> IntoIterator for &'a WghEdgeArray<W> {
    type Item = &'a WghEdge<W>;
    type IntoIter = std::slice::Iter<'a, WghEdge<W>>;

    fn into_iter(self) -> Self::IntoIter { self.es.iter() }
}
