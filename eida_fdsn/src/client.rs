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

//! the two concrete [`FdsnProvider`] implementations: a client for a single data center (direct
//! mode) and a client that resolves each request through the EIDA routing service (routed mode)

use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug,info,warn};
use eida_common::net::{client_with_timeout, get_text, get_bytes, post_text, post_bytes, join_url};

use crate::{
    FdsnProvider,
    auth::validate_token,
    errors::{Result, FetchError, op_failed},
    inventory::{Inventory, parse_station_text, parse_channel_text},
    mseed::parse_records,
    nodes::EIDA_ROUTING,
    query::{Level, StationQuery, WaveformQuery, MetricsQuery},
    response::{ResponseInventory, parse_station_xml},
    routing::query_routes,
    trace::Stream,
    wfcatalog::{self, DayMetrics},
};

fn parse_inventory (text: &str, level: Level)->Result<Inventory> {
    match level {
        Level::Station => parse_station_text( text),
        Level::Channel => parse_channel_text( text),
        Level::Response => Err( op_failed("response level is not an inventory query"))
    }
}

fn no_data_for (what: impl ToString)->impl FnOnce(FetchError)->FetchError {
    move |e| if e.is_no_data() { FetchError::NoData( what.to_string()) } else { e }
}

/* #region direct data center client *******************************************************/

pub struct FdsnClient {
    name: String,
    base_url: String,
    routing_url: String,
    client: Client,
    token: Option<String>,
}

impl FdsnClient {
    pub fn new (name: &str, base_url: &str, routing_url: &str, timeout: Duration)->Result<Self> {
        let client = client_with_timeout( timeout)?;
        Ok( FdsnClient {
            name: name.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            routing_url: routing_url.to_string(),
            client,
            token: None
        })
    }

    pub fn base_url (&self)->&str { &self.base_url }

    pub fn is_authenticated (&self)->bool { self.token.is_some() }

    /// we only query open streams, hence the token is checked but not exchanged for credentials.
    /// The client is left unchanged on error
    pub fn authenticate (&mut self, token: &str)->Result<()> {
        validate_token( token)?;
        debug!("{} accepted token", self.name);
        self.token = Some(token.to_string());
        Ok(())
    }

    fn station_url (&self)->String { join_url( &self.base_url, "fdsnws/station/1/query") }

    fn dataselect_url (&self)->String { join_url( &self.base_url, "fdsnws/dataselect/1/query") }
}

#[async_trait]
impl FdsnProvider for FdsnClient {
    fn name (&self)->&str { &self.name }

    async fn get_stations (&self, query: &StationQuery)->Result<Inventory> {
        let text = get_text( &self.client, &self.station_url(), &query.query_params()).await
            .map_err( FetchError::from)
            .map_err( no_data_for( format!("{} stations {}", self.name, query.channel)))?;
        parse_inventory( &text, query.level)
    }

    async fn get_responses (&self, query: &StationQuery)->Result<ResponseInventory> {
        let text = get_text( &self.client, &self.station_url(), &query.query_params()).await
            .map_err( FetchError::from)
            .map_err( no_data_for( format!("{} responses {}", self.name, query.channel)))?;
        parse_station_xml( &text)
    }

    async fn get_waveforms (&self, query: &WaveformQuery)->Result<Stream> {
        let bytes = get_bytes( &self.client, &self.dataselect_url(), &query.query_params()).await
            .map_err( FetchError::from)
            .map_err( no_data_for( query))?;
        let stream = Stream::from_mseed( &bytes)?;
        if stream.is_empty() { Err( FetchError::NoData( query.to_string())) } else { Ok(stream) }
    }

    async fn get_day_metrics (&self, query: &MetricsQuery)->Result<DayMetrics> {
        wfcatalog::get_day_metrics( &self.client, &self.routing_url, query).await
    }
}

/* #endregion direct data center client */

/* #region routing client ******************************************************************/

/// resolves every request through the routing service and merges the responses of all data
/// centers it is routed to. Failing data centers are skipped as long as at least one succeeds
pub struct RoutingClient {
    routing_url: String,
    client: Client,
    token: Option<String>,
}

impl RoutingClient {
    pub fn new (routing_url: &str, timeout: Duration)->Result<Self> {
        let client = client_with_timeout( timeout)?;
        Ok( RoutingClient { routing_url: routing_url.to_string(), client, token: None })
    }

    pub fn is_authenticated (&self)->bool { self.token.is_some() }

    /// same as for direct clients we only check if it looks like a token
    pub fn authenticate (&mut self, token: &str)->Result<()> {
        validate_token( token)?;
        self.token = Some(token.to_string());
        Ok(())
    }

    async fn routed_texts (&self, service: &str, query: &StationQuery)->Result<Vec<String>> {
        let routes = query_routes( &self.client, &self.routing_url, service, query.route_params()).await?;
        let preamble = query.post_preamble();
        let mut texts = Vec::with_capacity( routes.len());
        let mut last_err: Option<FetchError> = None;

        for route in &routes {
            match post_text( &self.client, &route.url, route.post_body( &preamble)).await {
                Ok(text) => texts.push( text),
                Err(e) => {
                    let e = FetchError::from(e);
                    if !e.is_no_data() { warn!("request to {} failed: {}", route.url, e) }
                    last_err = Some(e);
                }
            }
        }

        match last_err {
            Some(e) if texts.is_empty() => Err(e),
            _ => Ok(texts)
        }
    }
}

#[async_trait]
impl FdsnProvider for RoutingClient {
    fn name (&self)->&str { EIDA_ROUTING }

    async fn get_stations (&self, query: &StationQuery)->Result<Inventory> {
        let mut inventory = Inventory::new();
        for text in self.routed_texts( "station", query).await? {
            inventory.merge( parse_inventory( &text, query.level)?);
        }
        Ok(inventory)
    }

    async fn get_responses (&self, query: &StationQuery)->Result<ResponseInventory> {
        let mut inventory = ResponseInventory::default();
        for text in self.routed_texts( "station", query).await? {
            inventory.merge( parse_station_xml( &text)?);
        }
        Ok(inventory)
    }

    async fn get_waveforms (&self, query: &WaveformQuery)->Result<Stream> {
        let routes = query_routes( &self.client, &self.routing_url, "dataselect", query.route_params()).await
            .map_err( |e| if let FetchError::NoRoute(_) = e { FetchError::NoData( query.to_string()) } else { e })?;
        let mut responses = Vec::with_capacity( routes.len());
        for route in &routes {
            let response = post_bytes( &self.client, &route.url, route.post_body( "")).await.map_err( FetchError::from);
            responses.push( (route.url.clone(), response));
        }
        merge_routed_waveforms( responses, query)
    }

    async fn get_day_metrics (&self, query: &MetricsQuery)->Result<DayMetrics> {
        wfcatalog::get_day_metrics( &self.client, &self.routing_url, query).await
    }
}

/// merge the miniSEED responses of all data centers a waveform request was routed to. Failed or
/// malformed responses are skipped as long as another data center returned records
pub fn merge_routed_waveforms (responses: Vec<(String,Result<Vec<u8>>)>, what: impl ToString)->Result<Stream> {
    let mut records = Vec::new();
    let mut last_err: Option<FetchError> = None;

    for (url, response) in responses {
        match response.and_then( |bytes| parse_records( &bytes)) {
            Ok(recs) => records.extend( recs),
            Err(e) => {
                if !e.is_no_data() {
                    warn!("request to {} failed: {}", url, e);
                    last_err = Some(e);
                }
            }
        }
    }

    let stream = Stream::from_records( records);
    if stream.is_empty() {
        Err( last_err.unwrap_or_else( || FetchError::NoData( what.to_string())))
    } else {
        Ok(stream)
    }
}

/* #endregion routing client */
