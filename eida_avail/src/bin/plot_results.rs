/*
 * Copyright © 2024, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

use anyhow::{Result, anyhow};
use clap::Parser;
use tracing::info;
use eida_common::fs::glob_files;
use eida_avail::{
    coordinates::CoordinateList,
    aggregate::{AggregatedResults, Metric, map_markers},
    render::{MapView, save_map},
    SamplingConfig,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "plot merged retrievability results onto maps")]
pub struct Args {
    /// glob pattern of result files to merge
    #[arg(short,long, default_value = "./results*.json")]
    pub results: String,

    #[arg(short,long, default_value = "coordinates.json")]
    pub coordinates: String,

    /// plot the percentage of sampled days with WFCatalog metrics instead of retrievability
    #[arg(long)]
    pub metrics_days: bool,

    /// number of sample days of the runs (only used with --metrics-days)
    #[arg(long, default_value_t = SamplingConfig::default().days)]
    pub days: usize,

    /// directory to write the map images to
    #[arg(short,long, default_value = ".")]
    pub output_dir: String,
}

fn main()->Result<()> {
    tracing_subscriber::fmt::init();
    eida_build::set_bin_context!();

    let args = Args::parse();

    let coords = CoordinateList::load( &args.coordinates)?;
    let files = glob_files( &args.results)?;
    if files.is_empty() {
        return Err( anyhow!("no result files matching {}", args.results))
    }

    let agg = AggregatedResults::from_files( &files)?;
    info!("merged {} runs with {} channel results", agg.n_runs(), agg.len());

    let metric = if args.metrics_days { Metric::MetricsDays { sample_days: args.days } } else { Metric::Retrievability };
    let values = agg.station_values( metric);
    let markers = map_markers( &values, &coords);

    for view in [MapView::europe(), MapView::global()] {
        save_map( &markers, &view, &args.output_dir)?;
    }

    Ok(())
}
