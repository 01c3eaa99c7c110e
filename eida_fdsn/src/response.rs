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

//! instrument response metadata. We only extract what is required to correct raw counts into
//! physical units, which is the overall instrument sensitivity per channel epoch from StationXML

use chrono::{DateTime,Utc};
use regex::Regex;
use lazy_static::lazy_static;
use eida_common::datetime::parse_fdsn_datetime;
use crate::{errors::{Result,FetchError,parse_error}, trace::Trace};

lazy_static! {
    static ref NETWORK_RE: Regex = Regex::new( r"(?s)<Network\b([^>]*)>(.*?)</Network>").unwrap();
    static ref STATION_RE: Regex = Regex::new( r"(?s)<Station\b([^>]*)>(.*?)</Station>").unwrap();
    static ref CHANNEL_RE: Regex = Regex::new( r"(?s)<Channel\b([^>]*)>(.*?)</Channel>").unwrap();
    static ref SENSITIVITY_RE: Regex = Regex::new( r"(?s)<InstrumentSensitivity>.*?<Value>\s*([^<\s]+)\s*</Value>").unwrap();
    static ref CODE_RE: Regex = Regex::new( r#"\bcode="([^"]*)""#).unwrap();
    static ref LOCATION_RE: Regex = Regex::new( r#"\blocationCode="([^"]*)""#).unwrap();
    static ref START_RE: Regex = Regex::new( r#"\bstartDate="([^"]*)""#).unwrap();
    static ref END_RE: Regex = Regex::new( r#"\bendDate="([^"]*)""#).unwrap();
}

#[derive(Debug,Clone,PartialEq)]
pub struct ChannelResponse {
    pub network: String,
    pub station: String,
    pub location: String,
    pub channel: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    /// overall sensitivity (counts per physical unit), `None` if the epoch has no response
    pub sensitivity: Option<f64>,
}

impl ChannelResponse {
    pub fn covers (&self, t: &DateTime<Utc>)->bool {
        self.start.map_or( true, |s| s <= *t) && self.end.map_or( true, |e| *t <= e)
    }
}

#[derive(Debug,Clone,Default)]
pub struct ResponseInventory {
    pub channels: Vec<ChannelResponse>
}

impl ResponseInventory {
    pub fn is_empty (&self)->bool { self.channels.is_empty() }

    pub fn find (&self, network: &str, station: &str, location: &str, channel: &str, t: &DateTime<Utc>)->Option<&ChannelResponse> {
        self.channels.iter().find( |c| {
            c.network == network && c.station == station && c.location == location && c.channel == channel && c.covers(t)
        })
    }

    pub fn merge (&mut self, other: ResponseInventory) {
        self.channels.extend( other.channels)
    }
}

fn attr<'a> (re: &Regex, attrs: &'a str)->Option<&'a str> {
    re.captures( attrs).and_then( |cap| cap.get(1)).map( |m| m.as_str())
}

/// extract channel responses from a StationXML document
pub fn parse_station_xml (xml: &str)->Result<ResponseInventory> {
    let mut channels = Vec::new();

    for net_cap in NETWORK_RE.captures_iter( xml) {
        let network = attr( &CODE_RE, &net_cap[1]).ok_or_else( || parse_error!("network without code"))?;

        for sta_cap in STATION_RE.captures_iter( &net_cap[2]) {
            let station = attr( &CODE_RE, &sta_cap[1]).ok_or_else( || parse_error!("station without code in network {}", network))?;

            for cha_cap in CHANNEL_RE.captures_iter( &sta_cap[2]) {
                let attrs = &cha_cap[1];
                let channel = attr( &CODE_RE, attrs).ok_or_else( || parse_error!("channel without code in {}.{}", network, station))?;
                let location = attr( &LOCATION_RE, attrs).unwrap_or("");
                let start = attr( &START_RE, attrs).and_then( parse_fdsn_datetime);
                let end = attr( &END_RE, attrs).and_then( parse_fdsn_datetime);
                let sensitivity = SENSITIVITY_RE.captures( &cha_cap[2])
                    .and_then( |cap| cap.get(1))
                    .and_then( |m| m.as_str().parse::<f64>().ok());

                channels.push( ChannelResponse {
                    network: network.to_string(), station: station.to_string(), location: location.to_string(), channel: channel.to_string(),
                    start, end, sensitivity
                });
            }
        }
    }

    Ok( ResponseInventory { channels } )
}

/// convert trace samples from counts into physical units by dividing by the overall sensitivity of
/// the matching channel epoch. Fails if there is no matching epoch or it has no (or a zero) sensitivity
pub fn remove_sensitivity (trace: &mut Trace, inventory: &ResponseInventory)->Result<()> {
    let id = &trace.id;
    let response = inventory.find( &id.network, &id.station, &id.location, &id.channel, &trace.start)
        .ok_or_else( || FetchError::MetadataError( format!("no matching response information for {}", id)))?;
    let sensitivity = response.sensitivity
        .ok_or_else( || FetchError::MetadataError( format!("no instrument sensitivity for {}", id)))?;
    if sensitivity == 0.0 {
        return Err( FetchError::MetadataError( format!("zero instrument sensitivity for {}", id)))
    }

    for v in trace.data.iter_mut() {
        *v /= sensitivity;
    }
    Ok(())
}
