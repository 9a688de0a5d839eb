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

//! Minimum spanning forests with Kruskal's algorithm.
//!
//! The core lives in [`algorithm::union_find`] and
//! [`benchmarks::min_span_forest::kruskal`]; `common` holds the graph types,
//! the `p sp` loader and the timing helpers used by the driver binaries.

pub mod common {
    pub mod graph;
    pub mod graph_io;
    pub mod io;
    pub mod time_loop;
    pub mod timer;
}

pub mod algorithm {
    pub mod union_find;
}

pub mod benchmarks {
    pub mod min_span_forest {
        pub mod kruskal;
        pub mod verify;
    }
}

pub use common::graph;
pub use algorithm::union_find;

/// Vertex label type.
pub type DefInt = u32;
/// Default edge weight type.
pub type DefWgh = i64;
