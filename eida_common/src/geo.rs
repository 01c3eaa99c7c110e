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

use std::fmt;
use geo_types::{Point, Rect, coord};
use serde::{Serialize, Deserialize, Serializer, Deserializer, ser::SerializeStruct};

/// a 2D geographic position in decimal degrees (WGS84)
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GeoPoint(Point);

impl GeoPoint {
    pub fn from_lon_lat_degrees (lon: f64, lat: f64) -> Self {
        GeoPoint( Point::new( lon, lat))
    }

    #[inline] pub fn longitude_degrees (&self)->f64 { self.0.x() }
    #[inline] pub fn latitude_degrees (&self)->f64 { self.0.y() }

    pub fn point<'a> (&'a self) -> &'a Point { &self.0 }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}°, {:.4}°)", self.0.x(), self.0.y())
    }
}

/// a lon/lat aligned geographic rectangle in decimal degrees. We do not support rectangles
/// that cross the anti-meridian
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GeoRect(Rect);

impl GeoRect {
    pub fn from_wsen_degrees (west: f64, south: f64, east: f64, north: f64) -> Self {
        GeoRect( Rect::new( coord!{ x: west, y: south}, coord!{ x: east, y: north}))
    }

    pub fn global ()->Self { Self::from_wsen_degrees( -180.0, -90.0, 180.0, 90.0) }

    #[inline] pub fn west (&self)->f64 { self.0.min().x }
    #[inline] pub fn east (&self)->f64 { self.0.max().x }
    #[inline] pub fn south (&self)->f64 { self.0.min().y }
    #[inline] pub fn north (&self)->f64 { self.0.max().y }

    #[inline] pub fn width (&self)->f64 { self.0.width() }
    #[inline] pub fn height (&self)->f64 { self.0.height() }

    pub fn contains (&self, p: &GeoPoint)->bool {
        let lon = p.longitude_degrees();
        let lat = p.latitude_degrees();
        lon >= self.west() && lon <= self.east() && lat >= self.south() && lat <= self.north()
    }
}

impl Serialize for GeoRect {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("GeoRect", 4)?;
        state.serialize_field("west", &self.west())?;
        state.serialize_field("south", &self.south())?;
        state.serialize_field("east", &self.east())?;
        state.serialize_field("north", &self.north())?;
        state.end()
    }
}

#[derive(Deserialize)]
struct Wsen { west: f64, south: f64, east: f64, north: f64 }

impl<'de> Deserialize<'de> for GeoRect {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let r = Wsen::deserialize( deserializer)?;
        Ok( GeoRect::from_wsen_degrees( r.west, r.south, r.east, r.north))
    }
}
