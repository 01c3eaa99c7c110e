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

///! common utility functions for network operations

use std::time::Duration;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::define_error;

define_error!{ pub NetError = 
    IOError(#[from] std::io::Error) : "IO error: {0}",
    HttpError(#[from] reqwest::Error) : "http error: {0}",
    NoData(String) : "no data for {0}",
    NotFoundError(String) : "not found {0}",
    OpFailed(String) : "operation failed: {0}",
    ParseError(String) : "parse error: {0}"
}

pub type Result<T> = std::result::Result<T, NetError>;

/// the query parameter list type we use for GET requests
pub type QueryParams = Vec<(&'static str, String)>;

/// create a client with a per-request timeout
pub fn client_with_timeout (timeout: Duration)->Result<Client> {
    Ok( Client::builder().timeout( timeout).build()? )
}

/// map non-OK responses into errors. FDSN services use `204 No Content` to signal there is no data
/// for a valid query, which we treat as a failure of the request
pub fn check_status (response: Response, what: &str)->Result<Response> {
    match response.status() {
        StatusCode::OK => Ok(response),
        StatusCode::NO_CONTENT => Err( NetError::NoData( what.to_string())),
        StatusCode::NOT_FOUND => Err( NetError::NotFoundError( what.to_string())),
        other => Err( NetError::OpFailed( format!("{what}: response status {other}")))
    }
}

pub async fn get_response (client: &Client, url: &str, query: &QueryParams)->Result<Response> {
    let response = client.get( url).query( query).send().await?;
    check_status( response, url)
}

pub async fn post_response (client: &Client, url: &str, body: String)->Result<Response> {
    let response = client.post( url).body( body).send().await?;
    check_status( response, url)
}

pub async fn get_text (client: &Client, url: &str, query: &QueryParams)->Result<String> {
    Ok( get_response( client, url, query).await?.text().await? )
}

pub async fn post_text (client: &Client, url: &str, body: String)->Result<String> {
    Ok( post_response( client, url, body).await?.text().await? )
}

pub async fn get_bytes (client: &Client, url: &str, query: &QueryParams)->Result<Vec<u8>> {
    Ok( get_response( client, url, query).await?.bytes().await?.to_vec() )
}

pub async fn post_bytes (client: &Client, url: &str, body: String)->Result<Vec<u8>> {
    Ok( post_response( client, url, body).await?.bytes().await?.to_vec() )
}

pub async fn from_json<T> (response: Response)->Result<T> where T: DeserializeOwned {
    let bytes = response.bytes().await?;
    serde_json::from_slice( &bytes).map_err(|e| NetError::ParseError(e.to_string()))
}

/// join a base URL and a path without duplicating or dropping the '/' separator
pub fn join_url (base: &str, path: &str)->String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
