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

use std::time::{Duration, Instant};

use log::debug;

/// Runs `body` for `rounds` timed rounds and returns the mean round time.
///
/// Untimed warm-up rounds run first until `warmup` has elapsed (none when it
/// is zero). `setup` and `teardown` run around every round, outside the
/// measured region.
pub fn time_loop<S, B, T>(
    name: &str,
    rounds: usize,
    warmup: Duration,
    mut setup: S,
    mut body: B,
    mut teardown: T,
) -> Duration where
    S: FnMut(),
    B: FnMut(),
    T: FnMut(),
{
    let start = Instant::now();
    while start.elapsed() < warmup {
        setup();
        body();
        teardown();
    }

    let rounds = rounds.max(1);
    let mut total = Duration::ZERO;
    for round in 0..rounds {
        setup();
        let t = Instant::now();
        body();
        let d = t.elapsed();
        teardown();
        debug!("{name}: round {round}: {:.6}", d.as_secs_f64());
        total += d;
    }
    total.div_f64(rounds as f64)
}
