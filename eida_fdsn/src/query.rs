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

//! request parameter sets of the FDSN station, dataselect and WFCatalog services

use std::fmt;
use chrono::{DateTime,Utc};
use eida_common::{datetime::{fdsn_datetime_string, fdsn_date_string}, net::QueryParams};

/// detail level of station service queries
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum Level { Station, Channel, Response }

impl Level {
    pub fn as_str (&self)->&'static str {
        match self {
            Level::Station => "station",
            Level::Channel => "channel",
            Level::Response => "response",
        }
    }

    /// the text format does not support response level
    pub fn format (&self)->&'static str {
        match self {
            Level::Response => "xml",
            _ => "text"
        }
    }
}

#[derive(Debug,Clone)]
pub struct StationQuery {
    pub network: Option<String>,
    pub station: Option<String>,
    pub channel: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub level: Level,
    pub include_restricted: bool,
}

impl StationQuery {
    /// inventory discovery query for all networks/stations matching the channel filter
    pub fn discovery (channel: &str, start: DateTime<Utc>, end: DateTime<Utc>, level: Level)->Self {
        StationQuery { network: None, station: None, channel: channel.to_string(), start, end, level, include_restricted: false }
    }

    /// response level query for a single channel
    pub fn response (network: &str, station: &str, channel: &str, start: DateTime<Utc>, end: DateTime<Utc>)->Self {
        StationQuery { 
            network: Some(network.to_string()), station: Some(station.to_string()), channel: channel.to_string(), 
            start, end, level: Level::Response, include_restricted: false 
        }
    }

    pub fn query_params (&self)->QueryParams {
        let mut params: QueryParams = Vec::with_capacity(8);
        if let Some(net) = &self.network { params.push( ("network", net.clone())) }
        if let Some(sta) = &self.station { params.push( ("station", sta.clone())) }
        params.push( ("channel", self.channel.clone()));
        params.push( ("starttime", fdsn_datetime_string( &self.start)));
        params.push( ("endtime", fdsn_datetime_string( &self.end)));
        params.push( ("level", self.level.as_str().to_string()));
        params.push( ("format", self.level.format().to_string()));
        params.push( ("includerestricted", self.include_restricted.to_string()));
        params
    }

    /// routing service parameters for this query
    pub fn route_params (&self)->QueryParams {
        route_params( self.network.as_deref(), self.station.as_deref(), None, &self.channel, &self.start, &self.end)
    }

    /// the key=value preamble of a POST request body (stream lines follow)
    pub fn post_preamble (&self)->String {
        format!("level={}\nformat={}\nincluderestricted={}\n", self.level.as_str(), self.level.format(), self.include_restricted)
    }
}

#[derive(Debug,Clone)]
pub struct WaveformQuery {
    pub network: String,
    pub station: String,
    pub location: String,
    pub channel: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl WaveformQuery {
    /// request all location codes of a channel
    pub fn any_location (network: &str, station: &str, channel: &str, start: DateTime<Utc>, end: DateTime<Utc>)->Self {
        WaveformQuery { network: network.to_string(), station: station.to_string(), location: "*".to_string(), channel: channel.to_string(), start, end }
    }

    pub fn query_params (&self)->QueryParams {
        vec![
            ("network", self.network.clone()),
            ("station", self.station.clone()),
            ("location", self.location.clone()),
            ("channel", self.channel.clone()),
            ("starttime", fdsn_datetime_string( &self.start)),
            ("endtime", fdsn_datetime_string( &self.end)),
        ]
    }

    pub fn route_params (&self)->QueryParams {
        route_params( Some(&self.network), Some(&self.station), Some(&self.location), &self.channel, &self.start, &self.end)
    }
}

impl fmt::Display for WaveformQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "{}.{}.{}.{} {} - {}", self.network, self.station, self.location, self.channel, 
                fdsn_datetime_string(&self.start), fdsn_datetime_string(&self.end))
    }
}

/// a per-day WFCatalog request. Only dates are sent since some catalogs reject time components
#[derive(Debug,Clone)]
pub struct MetricsQuery {
    pub network: String,
    pub station: String,
    pub channel: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl MetricsQuery {
    pub fn new (network: &str, station: &str, channel: &str, start: DateTime<Utc>, end: DateTime<Utc>)->Self {
        MetricsQuery { network: network.to_string(), station: station.to_string(), channel: channel.to_string(), start, end }
    }

    fn date_params (&self)->QueryParams {
        vec![
            ("network", self.network.clone()),
            ("station", self.station.clone()),
            ("channel", self.channel.clone()),
            ("start", fdsn_date_string( &self.start)),
            ("end", fdsn_date_string( &self.end)),
        ]
    }

    pub fn route_params (&self)->QueryParams {
        let mut params = self.date_params();
        params.push( ("format", "post".to_string()));
        params
    }

    pub fn catalog_params (&self)->QueryParams {
        let mut params = self.date_params();
        params.push( ("include", "sample".to_string()));
        params.push( ("longestonly", "false".to_string()));
        params.push( ("minimumlength", "0.0".to_string()));
        params
    }
}

impl fmt::Display for MetricsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "{}.{}.{} {}", self.network, self.station, self.channel, fdsn_date_string(&self.start))
    }
}

fn route_params (net: Option<&str>, sta: Option<&str>, loc: Option<&str>, cha: &str, start: &DateTime<Utc>, end: &DateTime<Utc>)->QueryParams {
    let mut params: QueryParams = Vec::with_capacity(8);
    if let Some(net) = net { params.push( ("network", net.to_string())) }
    if let Some(sta) = sta { params.push( ("station", sta.to_string())) }
    if let Some(loc) = loc { params.push( ("location", loc.to_string())) }
    params.push( ("channel", cha.to_string()));
    params.push( ("start", fdsn_datetime_string( start)));
    params.push( ("end", fdsn_datetime_string( end)));
    params.push( ("format", "post".to_string()));
    params
}
