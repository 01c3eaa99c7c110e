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

//! the station coordinate list used to place results on a map

use std::{collections::BTreeMap, path::Path};
use serde::{Serialize,Deserialize};
use tracing::info;
use eida_common::{json::{read_json_file,write_json_file}, datetime::utc_datetime, geo::GeoPoint};
use eida_fdsn::{FdsnProvider, StationQuery, Level, inventory::Inventory};
use crate::errors::{Result, config_error};

/// the channels we collect station coordinates for
pub const COORDINATE_CHANNELS: &str = "*HZ";

#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct StationCoordinate {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl StationCoordinate {
    pub fn position (&self)->GeoPoint { GeoPoint::from_lon_lat_degrees( self.longitude, self.latitude) }
}

/// network -> station -> coordinate
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
#[serde(transparent)]
pub struct CoordinateList {
    networks: BTreeMap<String, BTreeMap<String,StationCoordinate>>
}

impl CoordinateList {
    pub fn new ()->Self { CoordinateList { networks: BTreeMap::new() } }

    /// add stations of the inventory. Stations we already have are not updated
    pub fn add_inventory (&mut self, inventory: &Inventory) {
        for net in &inventory.networks {
            let stations = self.networks.entry( net.code.clone()).or_default();
            for sta in &net.stations {
                stations.entry( sta.code.clone()).or_insert( StationCoordinate {
                    latitude: sta.latitude, longitude: sta.longitude, elevation: sta.elevation
                });
            }
        }
    }

    pub fn get (&self, network: &str, station: &str)->Option<&StationCoordinate> {
        self.networks.get( network).and_then( |stations| stations.get( station))
    }

    pub fn has_network (&self, network: &str)->bool { self.networks.contains_key( network) }

    pub fn len (&self)->usize { self.networks.values().map( |s| s.len()).sum() }

    pub fn is_empty (&self)->bool { self.len() == 0 }

    /// iterate over (network, station, coordinate)
    pub fn iter (&self)->impl Iterator<Item=(&str,&str,&StationCoordinate)> {
        self.networks.iter().flat_map( |(net,stations)| {
            stations.iter().map( move |(sta,c)| (net.as_str(), sta.as_str(), c))
        })
    }

    pub fn load<P: AsRef<Path>> (path: P)->Result<Self> {
        Ok( read_json_file( path)? )
    }

    pub fn save<P: AsRef<Path>> (&self, path: P)->Result<()> {
        Ok( write_json_file( path, self)? )
    }
}

/// retrieve the coordinates of all open stations with vertical channels that were active in the given years
pub async fn discover_coordinates<P> (provider: &P, start_year: i32, end_year: i32)->Result<CoordinateList> where P: FdsnProvider + ?Sized {
    let start = utc_datetime( start_year, 1, 1, 0, 0, 0).ok_or_else( || config_error!("invalid start year {}", start_year))?;
    let end = utc_datetime( end_year, 12, 31, 0, 0, 0).ok_or_else( || config_error!("invalid end year {}", end_year))?;
    if end < start { return Err( config_error!("end year {} before start year {}", end_year, start_year)) }

    let query = StationQuery::discovery( COORDINATE_CHANNELS, start, end, Level::Station);
    let inventory = provider.get_stations( &query).await?;
    info!("{} stations found at {}", inventory.station_count(), provider.name());

    let mut coords = CoordinateList::new();
    coords.add_inventory( &inventory);
    Ok(coords)
}
