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
use serde::{Serialize,Deserialize};
use eida_common::datetime::{deserialize_duration, serialize_duration, secs};
use crate::errors::{Result,FetchError};

/// the EIDA routing service (also used to look up WFCatalog endpoints)
pub const EIDA_ROUTING_URL: &str = "http://www.orfeus-eu.org/eidaws/routing/1/query";

/// provider name used for routed mode
pub const EIDA_ROUTING: &str = "eida-routing";

fn default_request_timeout ()->Duration { secs(30) }

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct EidaNode {
    pub name: String,
    pub url: String,
}

/// which EIDA nodes exist and which ones we scan in direct (non-routed) mode
#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct EidaNodesConfig {
    pub routing_url: String,

    /// timeout for single requests, e.g. "30s". Can be overridden from the command line
    #[serde(default="default_request_timeout", deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub request_timeout: Duration,

    /// short name -> base URL mappings
    pub nodes: Vec<EidaNode>,

    /// the providers to scan in direct mode, either short names from `nodes` or base URLs
    pub scan_nodes: Vec<String>,
}

impl Default for EidaNodesConfig {
    fn default()->Self {
        let node = |name: &str, url: &str| EidaNode { name: name.to_string(), url: url.to_string() };
        EidaNodesConfig {
            routing_url: EIDA_ROUTING_URL.to_string(),
            request_timeout: default_request_timeout(),
            nodes: vec![
                node( "BGR", "http://eida.bgr.de"),
                node( "ETH", "http://eida.ethz.ch"),
                node( "GFZ", "http://geofon.gfz-potsdam.de"),
                node( "ICGC", "http://ws.icgc.cat"),
                node( "INGV", "http://webservices.ingv.it"),
                node( "KOERI", "http://eida.koeri.boun.edu.tr"),
                node( "LMU", "http://erde.geophysik.uni-muenchen.de"),
                node( "NIEP", "http://eida-sc3.infp.ro"),
                node( "NOA", "http://eida.gein.noa.gr"),
                node( "ODC", "http://www.orfeus-eu.org"),
                node( "RESIF", "http://ws.resif.fr"),
            ],
            scan_nodes: [
                "http://eida.geo.uib.no", "GFZ", "RESIF", "INGV", "ETH", "BGR", "NIEP", "KOERI", "LMU", "NOA", "ICGC", "ODC"
            ].iter().map( |s| s.to_string()).collect()
        }
    }
}

impl EidaNodesConfig {
    /// base URL for a node name. Names that already are URLs are returned unchanged
    pub fn resolve_url (&self, name: &str)->Result<String> {
        if name.starts_with("http://") || name.starts_with("https://") {
            Ok( name.trim_end_matches('/').to_string())
        } else {
            self.nodes.iter()
                .find( |n| n.name.eq_ignore_ascii_case( name))
                .map( |n| n.url.clone())
                .ok_or_else( || FetchError::NoRoute( format!("unknown EIDA node {}", name)))
        }
    }
}
