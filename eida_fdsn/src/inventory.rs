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

//! station inventory model and parser for the FDSN station service `format=text` output

use chrono::{DateTime,Utc};
use serde::{Serialize,Deserialize};
use eida_common::datetime::parse_fdsn_datetime;
use crate::errors::{Result, parse_error};

#[derive(Debug,Clone,Default,PartialEq)]
pub struct Inventory {
    pub networks: Vec<Network>
}

#[derive(Debug,Clone,PartialEq)]
pub struct Network {
    pub code: String,
    pub stations: Vec<Station>,
}

#[derive(Debug,Clone,PartialEq)]
pub struct Station {
    pub code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    pub channels: Vec<Channel>,
}

/// one channel epoch of a station
#[derive(Debug,Clone,PartialEq)]
pub struct Channel {
    pub location: String,
    pub code: String,
    pub sample_rate: f64,
    pub start: DateTime<Utc>,
    /// `None` means the epoch is still open
    pub end: Option<DateTime<Utc>>,
}

/// one time span of a channel code within a station. Location codes that share the same span
/// collapse into a single epoch since waveform requests use wildcard locations
#[derive(Debug,Clone,PartialEq)]
pub struct ChannelEpoch {
    pub code: String,
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
}

impl Inventory {
    pub fn new ()->Self { Inventory { networks: Vec::new() } }

    pub fn is_empty (&self)->bool {
        self.networks.iter().all( |n| n.stations.is_empty())
    }

    pub fn station_count (&self)->usize {
        self.networks.iter().map( |n| n.stations.len()).sum()
    }

    pub fn channel_count (&self)->usize {
        self.networks.iter().flat_map( |n| n.stations.iter()).map( |s| s.channels.len()).sum()
    }

    /// number of distinct (network,station,channel-code,epoch) combinations
    pub fn channel_epoch_count (&self)->usize {
        self.networks.iter().flat_map( |n| n.stations.iter()).map( |s| s.channel_epochs().len()).sum()
    }

    pub fn network_mut (&mut self, code: &str)->&mut Network {
        let idx = match self.networks.iter().position( |n| n.code == code) {
            Some(idx) => idx,
            None => {
                self.networks.push( Network { code: code.to_string(), stations: Vec::new() });
                self.networks.len() - 1
            }
        };
        &mut self.networks[idx]
    }

    /// merge another inventory (e.g. from a different data center) into this one. Stations that
    /// already exist get the channels of `other` appended
    pub fn merge (&mut self, other: Inventory) {
        for net in other.networks {
            let my_net = self.network_mut( &net.code);
            for sta in net.stations {
                match my_net.stations.iter_mut().find( |s| s.code == sta.code) {
                    Some(my_sta) => my_sta.channels.extend( sta.channels),
                    None => my_net.stations.push( sta)
                }
            }
        }
    }
}

impl Network {
    fn station_mut (&mut self, code: &str, latitude: f64, longitude: f64, elevation: f64)->&mut Station {
        let idx = match self.stations.iter().position( |s| s.code == code) {
            Some(idx) => idx,
            None => {
                self.stations.push( Station { code: code.to_string(), latitude, longitude, elevation, channels: Vec::new() });
                self.stations.len() - 1
            }
        };
        &mut self.stations[idx]
    }
}

impl Station {
    /// the distinct (code,start,end) epochs of this station in order of first appearance
    pub fn channel_epochs (&self)->Vec<ChannelEpoch> {
        let mut epochs: Vec<ChannelEpoch> = Vec::new();
        for cha in &self.channels {
            if !epochs.iter().any( |e| e.code == cha.code && e.start == cha.start && e.end == cha.end) {
                epochs.push( ChannelEpoch { code: cha.code.clone(), start: cha.start, end: cha.end });
            }
        }
        epochs
    }
}

/* #region text format parser ****************************************************************/

// #Network|Station|Location|Channel|Latitude|Longitude|Elevation|Depth|Azimuth|Dip|SensorDescription|Scale|ScaleFreq|ScaleUnits|SampleRate|StartTime|EndTime
const N_CHANNEL_FIELDS: usize = 17;
// #Network|Station|Latitude|Longitude|Elevation|SiteName|StartTime|EndTime
const N_STATION_FIELDS: usize = 8;

fn data_lines (text: &str)->impl Iterator<Item=(usize,&str)> {
    text.lines().enumerate().filter( |(_,line)| {
        let line = line.trim();
        !line.is_empty() && !line.starts_with('#')
    })
}

fn parse_f64 (s: &str, line_no: usize, what: &str)->Result<f64> {
    let s = s.trim();
    if s.is_empty() { return Ok(0.0) }
    s.parse::<f64>().map_err( |_| parse_error!("invalid {} '{}' in line {}", what, s, line_no+1))
}

fn parse_start (s: &str, line_no: usize)->Result<DateTime<Utc>> {
    parse_fdsn_datetime( s).ok_or_else( || parse_error!("invalid start time '{}' in line {}", s, line_no+1))
}

fn parse_end (s: &str, line_no: usize)->Result<Option<DateTime<Utc>>> {
    if s.trim().is_empty() { 
        Ok(None) 
    } else {
        parse_fdsn_datetime( s).map( Some).ok_or_else( || parse_error!("invalid end time '{}' in line {}", s, line_no+1))
    }
}

/// parse `level=channel` text output
pub fn parse_channel_text (text: &str)->Result<Inventory> {
    let mut inventory = Inventory::new();

    for (line_no, line) in data_lines( text) {
        let fields: Vec<&str> = line.split('|').map( |f| f.trim()).collect();
        if fields.len() < N_CHANNEL_FIELDS {
            return Err( parse_error!("expected {} channel fields in line {}, got {}", N_CHANNEL_FIELDS, line_no+1, fields.len()))
        }

        let latitude = parse_f64( fields[4], line_no, "latitude")?;
        let longitude = parse_f64( fields[5], line_no, "longitude")?;
        let elevation = parse_f64( fields[6], line_no, "elevation")?;
        let sample_rate = parse_f64( fields[14], line_no, "sample rate")?;
        let start = parse_start( fields[15], line_no)?;
        let end = parse_end( fields[16], line_no)?;

        let channel = Channel { location: fields[2].to_string(), code: fields[3].to_string(), sample_rate, start, end };
        inventory.network_mut( fields[0])
            .station_mut( fields[1], latitude, longitude, elevation)
            .channels.push( channel);
    }

    Ok(inventory)
}

/// parse `level=station` text output. Stations with several epochs are only added once
pub fn parse_station_text (text: &str)->Result<Inventory> {
    let mut inventory = Inventory::new();

    for (line_no, line) in data_lines( text) {
        let fields: Vec<&str> = line.split('|').map( |f| f.trim()).collect();
        if fields.len() < N_STATION_FIELDS {
            return Err( parse_error!("expected {} station fields in line {}, got {}", N_STATION_FIELDS, line_no+1, fields.len()))
        }

        let latitude = parse_f64( fields[2], line_no, "latitude")?;
        let longitude = parse_f64( fields[3], line_no, "longitude")?;
        let elevation = parse_f64( fields[4], line_no, "elevation")?;

        inventory.network_mut( fields[0]).station_mut( fields[1], latitude, longitude, elevation);
    }

    Ok(inventory)
}

/* #endregion text format parser */
