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

//! Prints `count` random triangles inside `[0, bounds]^3`, none wider than
//! `size` on any axis, in the format `trisect` reads.
//!
//! Usage: `gen_triangles <count> <bounds> <size> [--seed <u64>]`

use std::{
    io::{self, BufWriter},
    process::ExitCode,
};

use trisect::{
    generate::{GeneratorConfig, TriangleGenerator},
    io::write_triangles,
};

const USAGE: &str = "Usage: count bounds size [--seed <u64>]";

fn parse_args() -> Result<(GeneratorConfig, Option<u64>), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (positional, seed) = match args.as_slice() {
        [count, bounds, size] => ([count, bounds, size], None),
        [count, bounds, size, flag, seed] if flag == "--seed" => {
            let seed = seed
                .parse::<u64>()
                .map_err(|_| format!("invalid seed {seed:?}"))?;
            ([count, bounds, size], Some(seed))
        }
        _ => return Err(USAGE.to_owned()),
    };

    let count = positional[0]
        .parse::<usize>()
        .map_err(|_| format!("invalid count {:?}", positional[0]))?;
    let bounds = positional[1]
        .parse::<f64>()
        .map_err(|_| format!("invalid bounds {:?}", positional[1]))?;
    let size = positional[2]
        .parse::<f64>()
        .map_err(|_| format!("invalid size {:?}", positional[2]))?;

    let config = GeneratorConfig::new(count, bounds, size).map_err(|err| err.to_string())?;
    Ok((config, seed))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let (config, seed) = match parse_args() {
        Ok(parsed) => parsed,
        Err(msg) => {
            println!("{msg}");
            return ExitCode::from(2);
        }
    };

    let triangles = match seed {
        Some(seed) => TriangleGenerator::with_seed(config, seed).generate::<f32>(),
        None => TriangleGenerator::new(config, rand::rng()).generate::<f32>(),
    };
    log::debug!("generated {} triangles", triangles.len());

    if let Err(err) = write_triangles(&triangles, BufWriter::new(io::stdout().lock())) {
        log::error!("failed to write triangles: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
