// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

/// Counters gathered during one detection pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DetectStats {
    /// Broad-phase candidates seen, self matches included.
    pub candidates: usize,
    /// Pairs that reached the exact polygon test.
    pub exact_tests: usize,
    /// Pairs the exact test confirmed.
    pub hits: usize,
}

/// Outcome of a detection pass: one flag per input triangle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Intersections {
    flags: Vec<bool>,
    stats: DetectStats,
}

impl Intersections {
    pub(crate) fn new(flags: Vec<bool>, stats: DetectStats) -> Self {
        Intersections { flags, stats }
    }

    /// Panics if `index` is out of range.
    pub fn is_intersected(&self, index: usize) -> bool {
        self.flags[index]
    }

    /// Marked indices in ascending order, each once.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, &hit)| hit.then_some(i))
    }

    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    /// Number of triangles the pass ran over.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Number of triangles marked as intersected.
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&hit| hit).count()
    }

    pub fn stats(&self) -> &DetectStats {
        &self.stats
    }
}
