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

//! Reads triangles from stdin and prints the indices of those that intersect
//! another triangle.
//!
//! Usage: `trisect [--brute-force] [--progress] [--eps <f>] [--inter-width <f>]`

use std::{
    io::{self, BufWriter},
    process::ExitCode,
};

use trisect::{
    IntersectionDriver, Strategy, Tolerance,
    io::{read_triangles, write_indices},
};

const PROGRESS_STEP: f32 = 0.02;

struct Options {
    strategy: Strategy,
    progress: bool,
    tolerance: Tolerance<f32>,
}

fn parse_options() -> Result<Options, String> {
    let mut options = Options {
        strategy: Strategy::SortedCubes,
        progress: false,
        tolerance: Tolerance::default(),
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--brute-force" => options.strategy = Strategy::BruteForce,
            "--progress" => options.progress = true,
            "--eps" => options.tolerance.eps = parse_value(&arg, args.next())?,
            "--inter-width" => options.tolerance.inter_width = parse_value(&arg, args.next())?,
            other => return Err(format!("unknown argument {other:?}")),
        }
    }
    Ok(options)
}

fn parse_value(flag: &str, value: Option<String>) -> Result<f32, String> {
    let value = value.ok_or_else(|| format!("{flag} needs a value"))?;
    value
        .parse()
        .map_err(|_| format!("invalid value {value:?} for {flag}"))
}

fn main() -> ExitCode {
    let options = match parse_options() {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("Usage: trisect [--brute-force] [--progress] [--eps <f>] [--inter-width <f>]");
            return ExitCode::from(2);
        }
    };

    let default_level = if options.progress { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let triangles = match read_triangles::<f32, _>(io::stdin().lock(), &options.tolerance) {
        Ok(triangles) => triangles,
        Err(err) => {
            log::error!("{err}");
            println!("Invalid input!");
            return ExitCode::FAILURE;
        }
    };

    let mut driver = IntersectionDriver::new(&triangles)
        .tolerance(options.tolerance)
        .strategy(options.strategy);
    if options.progress {
        driver = driver.progress_step(PROGRESS_STEP);
    }
    let result = driver.run();

    if let Err(err) = write_indices(&result, BufWriter::new(io::stdout().lock())) {
        log::error!("failed to write result: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
