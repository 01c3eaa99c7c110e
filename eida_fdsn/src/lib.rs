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

//! access to the FDSN web services of the EIDA federation: station inventories, instrument
//! responses, miniSEED waveforms and WFCatalog day metrics.
//!
//! All remote operations are async and return a [`Result`] with a [`FetchError`], i.e. each request
//! either produces its value or fails on its own without affecting other requests. The services are
//! abstracted by the [`FdsnProvider`] trait, which has a direct (single data center) and a routed
//! implementation

use async_trait::async_trait;

eida_build::define_load_config!{}

pub mod errors;
pub use errors::*;

pub mod query;
pub use query::*;

pub mod inventory;
pub mod response;
pub mod mseed;
pub mod trace;
pub mod routing;
pub mod wfcatalog;
pub mod auth;
pub mod nodes;

mod client;
pub use client::*;

use inventory::Inventory;
use response::ResponseInventory;
use trace::Stream;
use wfcatalog::DayMetrics;
use nodes::EidaNodesConfig;

/// the name of the node config file
pub const NODES_CONFIG: &str = "eida_nodes.ron";

/// the data sources we sample. Implementations only translate requests, they do not retry
#[async_trait]
pub trait FdsnProvider: Send + Sync {
    fn name (&self)->&str;

    /// station or channel level inventory
    async fn get_stations (&self, query: &StationQuery)->Result<Inventory>;

    /// instrument responses of a (network,station,channel)
    async fn get_responses (&self, query: &StationQuery)->Result<ResponseInventory>;

    /// waveform segments for the query window. Segments are not trimmed
    async fn get_waveforms (&self, query: &WaveformQuery)->Result<Stream>;

    /// WFCatalog metrics of a single day
    async fn get_day_metrics (&self, query: &MetricsQuery)->Result<DayMetrics>;
}

/// load `eida_nodes.ron` from the config dirs, defaulting to the built in EIDA node list
pub fn load_nodes_config ()->Result<EidaNodesConfig> {
    Ok( load_config_or_default( NODES_CONFIG)? )
}
