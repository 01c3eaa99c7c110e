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

//! EIDA routing service access. Routes come in the `format=post` layout: blocks separated by empty
//! lines, each starting with the service URL of a data center followed by its stream lines:
//! ```text
//! http://geofon.gfz-potsdam.de/fdsnws/station/1/query
//! GE APE * BHZ 2019-01-01T00:00:00 2019-12-31T00:00:00
//!
//! http://eida.bgr.de/fdsnws/station/1/query
//! GR BFO * BHZ 2019-01-01T00:00:00 2019-12-31T00:00:00
//! ```

use reqwest::Client;
use tracing::debug;
use eida_common::net::{get_text, QueryParams, NetError};
use crate::errors::{Result, FetchError};

#[derive(Debug,Clone,PartialEq)]
pub struct RouteBlock {
    pub url: String,
    pub streams: Vec<String>,
}

impl RouteBlock {
    /// POST request body with the given key=value preamble
    pub fn post_body (&self, preamble: &str)->String {
        let mut body = String::with_capacity( preamble.len() + self.streams.len() * 64);
        body.push_str( preamble);
        for s in &self.streams {
            body.push_str( s);
            body.push('\n');
        }
        body
    }
}

pub fn parse_post_routes (text: &str)->Vec<RouteBlock> {
    let mut blocks: Vec<RouteBlock> = Vec::new();
    let mut current: Option<RouteBlock> = None;

    for line in text.lines().map( |l| l.trim()) {
        if line.is_empty() {
            if let Some(block) = current.take() { blocks.push( block) }
        } else if let Some(block) = &mut current {
            block.streams.push( line.to_string());
        } else {
            current = Some( RouteBlock { url: line.to_string(), streams: Vec::new() });
        }
    }
    if let Some(block) = current { blocks.push( block) }

    blocks
}

/// query the routing service for the data centers that serve `service` for the given parameters
pub async fn query_routes (client: &Client, routing_url: &str, service: &str, mut params: QueryParams)->Result<Vec<RouteBlock>> {
    params.push( ("service", service.to_string()));
    let what = format!("{service} route {params:?}");

    match get_text( client, routing_url, &params).await {
        Ok(text) => {
            let blocks = parse_post_routes( &text);
            debug!("{} routes for {}", blocks.len(), what);
            if blocks.is_empty() { Err( FetchError::NoRoute( what)) } else { Ok(blocks) }
        }
        Err(NetError::NoData(_)) | Err(NetError::NotFoundError(_)) => Err( FetchError::NoRoute( what)),
        Err(e) => Err( e.into())
    }
}
