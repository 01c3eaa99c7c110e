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

use anyhow::Result;
use chrono::Datelike;
use clap::Parser;
use tracing::info;
use eida_common::datetime::utc_now;
use eida_fdsn::{load_nodes_config, RoutingClient};
use eida_avail::coordinates::discover_coordinates;

#[derive(Parser, Debug)]
#[command(version, about, long_about = "create the list of station coordinates used for plotting results")]
pub struct Args {
    /// first year of station activity (default: last year)
    #[arg(short,long)]
    pub start: Option<i32>,

    /// last year of station activity (default: last year)
    #[arg(short,long)]
    pub end: Option<i32>,

    #[arg(short,long, default_value = "coordinates.json")]
    pub output_filename: String,
}

#[tokio::main]
async fn main()->Result<()> {
    tracing_subscriber::fmt::init();
    eida_build::set_bin_context!();

    let args = Args::parse();
    let last_year = utc_now().year() - 1;

    let nodes = load_nodes_config()?;
    let client = RoutingClient::new( &nodes.routing_url, nodes.request_timeout)?;

    let coords = discover_coordinates( &client, args.start.unwrap_or( last_year), args.end.unwrap_or( last_year)).await?;
    coords.save( &args.output_filename)?;
    info!("{} station coordinates written to {}", coords.len(), args.output_filename);

    Ok(())
}
