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

use std::{fs, io, path::Path, str::FromStr};

/// Writes one value per line.
pub fn write_slice_to_file_seq<T, P>(s: &[T], of: P) -> io::Result<()>
where
    T: ToString,
    P: AsRef<Path>,
{
    let s: Vec<String> = s
        .iter()
        .map(T::to_string)
        .collect();
    fs::write(of, s.join("\n"))
}

/// Reads one value per line, skipping lines that do not parse as `T`.
pub fn read_file_to_vec_seq<T, P>(fname: P) -> io::Result<Vec<T>>
where
    T: FromStr,
    P: AsRef<Path>,
{
    let s = fs::read_to_string(fname)?;
    Ok(s
        .lines()
        .map(str::parse)
        .filter_map(Result::ok)
        .collect())
}
