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

//! provider set up for the two scan modes. Authentication problems never stop a scan, we just
//! fall back to public access

use std::{path::Path, time::Duration};
use tracing::{info,warn};
use eida_fdsn::{FdsnProvider, FdsnClient, RoutingClient, auth::read_token, nodes::EidaNodesConfig};

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum ProviderMode {
    /// a single provider that routes each request through the EIDA routing service
    Routed,
    /// one provider per configured EIDA node
    Direct
}

/// read the token file, `None` (with a warning) if it does not exist or is not a token
pub fn load_token (path: &Path)->Option<String> {
    match read_token( path) {
        Ok(token) => Some(token),
        Err(e) => {
            warn!("no usable token in {:?} ({}), proceeding without authentication", path, e);
            None
        }
    }
}

/// create the providers for a scan. Nodes that cannot be resolved are skipped
pub fn create_providers (mode: ProviderMode, nodes: &EidaNodesConfig, token: Option<&str>, timeout: Duration)->Vec<Box<dyn FdsnProvider>> {
    let mut providers: Vec<Box<dyn FdsnProvider>> = Vec::new();

    match mode {
        ProviderMode::Routed => {
            match RoutingClient::new( &nodes.routing_url, timeout) {
                Ok(mut client) => {
                    if let Some(token) = token {
                        if let Err(e) = client.authenticate( token) {
                            warn!("failed to initialize routing client with token, proceeding without authentication: {}", e);
                        }
                    }
                    info!("initialized {} client (authenticated: {})", client.name(), client.is_authenticated());
                    providers.push( Box::new( client));
                }
                Err(e) => warn!("failed to create routing client: {}", e)
            }
        }
        ProviderMode::Direct => {
            for name in &nodes.scan_nodes {
                let base_url = match nodes.resolve_url( name) {
                    Ok(url) => url,
                    Err(e) => { warn!("skipping node {}: {}", name, e); continue }
                };
                let mut client = match FdsnClient::new( name, &base_url, &nodes.routing_url, timeout) {
                    Ok(client) => client,
                    Err(e) => { warn!("skipping node {}: {}", name, e); continue }
                };
                if let Some(token) = token {
                    if let Err(e) = client.authenticate( token) {
                        warn!("failed to initialize {} client with token, proceeding without authentication: {}", name, e);
                    }
                }
                info!("initialized {} client (authenticated: {})", name, client.is_authenticated());
                providers.push( Box::new( client));
            }
        }
    }

    providers
}
