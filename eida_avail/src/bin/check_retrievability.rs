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

use std::time::Duration;
use anyhow::Result;
use chrono::Datelike;
use clap::Parser;
use tracing::info;
use eida_common::{datetime::utc_now, fs::expand_home};
use eida_fdsn::load_nodes_config;
use eida_avail::{
    ScanConfig, SamplingConfig, RandomSampler, ProviderMode,
    providers::{create_providers, load_token}, scan::{scan, parse_network_list, DEFAULT_CHANNELS},
};

/// plain numbers are seconds, everything else a human readable duration ("2min")
fn parse_timeout (s: &str)->std::result::Result<Duration,String> {
    match s.parse::<u64>() {
        Ok(secs) => Ok( Duration::from_secs( secs)),
        Err(_) => parse_duration::parse( s).map_err( |e| e.to_string())
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = "check accessibility of data through all EIDA nodes")]
pub struct Args {
    /// year to start the test (default: last year)
    #[arg(short,long)]
    pub start: Option<i32>,

    /// year to end the test (default: last year)
    #[arg(short,long)]
    pub end: Option<i32>,

    /// how many days to randomly pick from each year
    #[arg(long, default_value_t = 5)]
    pub days: usize,

    /// how many hours to randomly pick from each day
    #[arg(long, default_value_t = 2)]
    pub hours: usize,

    /// length of each individual download request in minutes
    #[arg(long, default_value_t = 10)]
    pub minutes: u32,

    /// timeout for the HTTP requests in seconds or as duration (default: from eida_nodes.ron, 30s)
    #[arg(short,long, value_parser = parse_timeout)]
    pub timeout: Option<Duration>,

    /// comma separated networks to exclude from this test (e.g. XX,YY,ZZ)
    #[arg(short='x', long)]
    pub exclude: Option<String>,

    /// file containing the EIDA token used for authentication
    #[arg(short,long, default_value = "~/.eidatoken")]
    pub authentication: String,

    #[arg(long, default_value_t = 1)]
    pub start_month: u32,

    #[arg(long, default_value_t = 12)]
    pub end_month: u32,

    #[arg(long, default_value_t = 1)]
    pub start_day: u32,

    #[arg(long, default_value_t = 31)]
    pub end_day: u32,

    /// query each EIDA node directly instead of using the EIDA routing service
    #[arg(long)]
    pub direct: bool,

    /// channel codes to test
    #[arg(long, default_value = DEFAULT_CHANNELS)]
    pub channels: String,

    /// seed for reproducible day/hour selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// file to write the results to
    #[arg(short,long, default_value = "results.json")]
    pub output_filename: String,
}

#[tokio::main]
async fn main()->Result<()> {
    tracing_subscriber::fmt::init();
    eida_build::set_bin_context!();

    let args = Args::parse();
    let last_year = utc_now().year() - 1;

    let config = ScanConfig {
        start_year: args.start.unwrap_or( last_year),
        end_year: args.end.unwrap_or( last_year),
        start_month: args.start_month,
        start_day: args.start_day,
        end_month: args.end_month,
        end_day: args.end_day,
        channels: args.channels.clone(),
        exclude: args.exclude.as_deref().map( parse_network_list).unwrap_or_default(),
        sampling: SamplingConfig { days: args.days, hours: args.hours, minutes: args.minutes }
    };
    config.check()?;

    let nodes = load_nodes_config()?;
    let timeout = args.timeout.unwrap_or( nodes.request_timeout);
    let token = load_token( &expand_home( &args.authentication));
    let mode = if args.direct { ProviderMode::Direct } else { ProviderMode::Routed };

    let providers = create_providers( mode, &nodes, token.as_deref(), timeout);
    let mut sampler = match args.seed {
        Some(seed) => RandomSampler::seeded( seed),
        None => RandomSampler::from_os_rng()
    };

    let results = scan( &providers, &config, &mut sampler).await;
    results.save( &args.output_filename)?;
    info!("{} results written to {}", results.len(), args.output_filename);

    Ok(())
}
