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

/// Times consecutive phases of a computation and logs each phase at `debug`.
pub struct Timer<'a> {
    total_so_far: Duration,
    last: Instant,
    on: bool,
    name: &'a str,
}

impl<'a> Timer<'a> {
    fn report(&self, d: Duration, phase: &str) {
        if phase.is_empty() {
            debug!("{}:\t{:.6}", self.name, d.as_secs_f64());
        } else {
            debug!("{}:{}:\t{:.6}", self.name, phase, d.as_secs_f64());
        }
    }

    pub fn new(name: &'a str) -> Self {
        Timer {
            total_so_far: Duration::ZERO,
            last: Instant::now(),
            on: false,
            name,
        }
    }

    pub fn start(&mut self) {
        self.on = true;
        self.last = Instant::now();
    }

    fn next_time(&mut self) -> Duration {
        if !self.on { return Duration::ZERO; }
        let t = Instant::now();
        let td = t - self.last;
        self.total_so_far += td;
        self.last = t;
        td
    }

    /// Closes the current phase under the label `phase`.
    pub fn next(&mut self, phase: &str) {
        let nt = self.next_time();
        if self.on { self.report(nt, phase); }
    }

    /// Total time the timer was on since `new`.
    pub fn total_time(&self) -> Duration {
        if self.on { self.total_so_far + self.last.elapsed() }
        else { self.total_so_far }
    }

    pub fn total(&self) {
        self.report(self.total_time(), "total");
    }
}
