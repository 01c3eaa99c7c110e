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

//! the result table of a scan and its JSON representation, which is the nested
//! `provider -> year -> network -> station -> channel -> {percentage,days_with_metrics,metadata_problem}`

use std::{collections::BTreeMap, path::Path};
use serde::{Serialize,Deserialize};
use tracing::debug;
use eida_common::json::{read_json_file, write_json_file};
use crate::errors::{Result, op_failed};

#[derive(Debug,Clone,PartialEq,Eq,PartialOrd,Ord,Hash)]
pub struct ResultKey {
    pub provider: String,
    pub year: i32,
    pub network: String,
    pub station: String,
    pub channel: String,
}

impl ResultKey {
    pub fn new (provider: &str, year: i32, network: &str, station: &str, channel: &str)->Self {
        ResultKey { provider: provider.to_string(), year, network: network.to_string(), station: station.to_string(), channel: channel.to_string() }
    }

    pub fn station_key (&self)->(String,String) {
        (self.network.clone(), self.station.clone())
    }
}

/// what we found out about one channel in one year
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct ChannelResult {
    /// fraction of the requested time we received, in [0,1]
    pub percentage: f64,
    pub days_with_metrics: u32,
    pub metadata_problem: bool,
}

// leaves can be empty objects in files of older runs
#[derive(Deserialize)]
struct RawLeaf {
    percentage: Option<f64>,
    days_with_metrics: Option<u32>,
    metadata_problem: Option<bool>,
}

type Nested<T> = BTreeMap<String, BTreeMap<String, BTreeMap<String, BTreeMap<String, BTreeMap<String, T>>>>>;

#[derive(Debug,Clone,Default,PartialEq)]
pub struct ResultTable {
    entries: BTreeMap<ResultKey,ChannelResult>
}

impl ResultTable {
    pub fn new ()->Self { ResultTable { entries: BTreeMap::new() } }

    pub fn insert (&mut self, key: ResultKey, result: ChannelResult)->Option<ChannelResult> {
        self.entries.insert( key, result)
    }

    pub fn get (&self, key: &ResultKey)->Option<&ChannelResult> { self.entries.get( key) }

    pub fn len (&self)->usize { self.entries.len() }

    pub fn is_empty (&self)->bool { self.entries.is_empty() }

    pub fn iter (&self)->impl Iterator<Item=(&ResultKey,&ChannelResult)> { self.entries.iter() }

    /// move all entries of `other` into self (used to combine per-provider tables)
    pub fn append (&mut self, mut other: ResultTable) {
        self.entries.append( &mut other.entries)
    }

    pub fn to_nested (&self)->Nested<ChannelResult> {
        let mut nested: Nested<ChannelResult> = BTreeMap::new();
        for (k,v) in &self.entries {
            nested.entry( k.provider.clone()).or_default()
                .entry( k.year.to_string()).or_default()
                .entry( k.network.clone()).or_default()
                .entry( k.station.clone()).or_default()
                .insert( k.channel.clone(), *v);
        }
        nested
    }

    fn from_nested (nested: Nested<RawLeaf>)->Result<Self> {
        let mut table = ResultTable::new();
        for (provider, years) in nested {
            for (year, networks) in years {
                let year: i32 = year.parse().map_err( |_| op_failed( format!("invalid year '{}' for {}", year, provider)))?;
                for (network, stations) in networks {
                    for (station, channels) in stations {
                        for (channel, leaf) in channels {
                            if let RawLeaf { percentage: Some(percentage), days_with_metrics: Some(days_with_metrics), metadata_problem: Some(metadata_problem) } = leaf {
                                let key = ResultKey::new( &provider, year, &network, &station, &channel);
                                table.insert( key, ChannelResult { percentage, days_with_metrics, metadata_problem });
                            } else {
                                debug!("skipping incomplete result {} {} {}.{}.{}", provider, year, network, station, channel);
                            }
                        }
                    }
                }
            }
        }
        Ok(table)
    }

    pub fn from_json_str (s: &str)->Result<Self> {
        Self::from_nested( serde_json::from_str( s)?)
    }

    pub fn to_json_string (&self)->Result<String> {
        Ok( serde_json::to_string( &self.to_nested())? )
    }

    pub fn load<P: AsRef<Path>> (path: P)->Result<Self> {
        Self::from_nested( read_json_file( path)?)
    }

    pub fn save<P: AsRef<Path>> (&self, path: P)->Result<()> {
        Ok( write_json_file( path, &self.to_nested())? )
    }
}
