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

//! per-day waveform quality metrics from the EIDA WFCatalog. The catalog endpoint for a stream
//! is not fixed, it is looked up through the routing service for each request

use reqwest::Client;
use serde::{Serialize,Deserialize};
use eida_common::net::{get_response, from_json};
use crate::{errors::{Result,FetchError}, routing::query_routes, query::MetricsQuery};

/// the subset of WFCatalog document fields we look at. Everything else is ignored
#[derive(Debug,Clone,Serialize,Deserialize,Default)]
pub struct WfCatalogDocument {
    #[serde(default)] pub network: Option<String>,
    #[serde(default)] pub station: Option<String>,
    #[serde(default)] pub location: Option<String>,
    #[serde(default)] pub channel: Option<String>,
    #[serde(default)] pub start_time: Option<String>,
    #[serde(default)] pub end_time: Option<String>,
    #[serde(default)] pub num_samples: Option<u64>,
    #[serde(default)] pub num_gaps: Option<u64>,
    #[serde(default)] pub percent_availability: Option<f64>,
}

#[derive(Debug,Clone,Default)]
pub struct DayMetrics {
    pub documents: Vec<WfCatalogDocument>
}

/// resolve the WFCatalog endpoint for the query and retrieve its metrics document
pub async fn get_day_metrics (client: &Client, routing_url: &str, query: &MetricsQuery)->Result<DayMetrics> {
    let routes = query_routes( client, routing_url, "wfcatalog", query.route_params()).await?;
    let url = routes.first()
        .map( |b| b.url.clone())
        .ok_or_else( || FetchError::NoRoute( format!("WFCatalog for {}", query)))?;

    let response = get_response( client, &url, &query.catalog_params()).await
        .map_err( |e| match e {
            eida_common::net::NetError::NoData(_) => FetchError::NoData( format!("metrics for {}", query)),
            other => other.into()
        })?;
    let documents: Vec<WfCatalogDocument> = from_json( response).await?;
    Ok( DayMetrics { documents } )
}
