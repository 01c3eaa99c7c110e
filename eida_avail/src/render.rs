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

//! rendering of station markers onto equirectangular (plate carrée) maps

use std::path::{Path,PathBuf};
use image::{Rgb, RgbImage};
use imageproc::{drawing::{draw_polygon_mut, draw_hollow_polygon_mut, draw_line_segment_mut, draw_filled_rect_mut, draw_hollow_rect_mut}, point::Point, rect::Rect};
use itertools::{Itertools, MinMaxResult};
use tracing::info;
use eida_common::geo::{GeoPoint,GeoRect};
use crate::{aggregate::{MapMarker,MarkerState}, errors::Result};

const BACKGROUND: Rgb<u8> = Rgb([0x06, 0x06, 0x06]);
const GRATICULE: Rgb<u8> = Rgb([0x30, 0x30, 0x30]);
const NOT_AVAILABLE_FILL: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);
const NOT_AVAILABLE_EDGE: Rgb<u8> = Rgb([0x70, 0x70, 0x70]);
const MARKER_EDGE: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);
const METADATA_PROBLEM_EDGE: Rgb<u8> = Rgb([0xff, 0x00, 0xff]);

const COLOR_BAR_HEIGHT: u32 = 48;

/// a map extent and the size of its image
#[derive(Debug,Clone)]
pub struct MapView {
    pub name: String,
    pub extent: GeoRect,
    /// image width in pixels, the height follows from the extent
    pub width: u32,
    /// triangle height in pixels
    pub marker_size: u32,
    /// graticule spacing in degrees
    pub grid_degrees: f64,
}

impl MapView {
    pub fn europe ()->Self {
        MapView { name: "retrievability_europe".to_string(), extent: GeoRect::from_wsen_degrees( -20.0, 27.4, 46.0, 76.0), width: 2400, marker_size: 12, grid_degrees: 10.0 }
    }

    pub fn global ()->Self {
        MapView { name: "retrievability_global".to_string(), extent: GeoRect::global(), width: 3600, marker_size: 10, grid_degrees: 30.0 }
    }

    pub fn map_height (&self)->u32 {
        ((self.width as f64) * self.extent.height() / self.extent.width()).round() as u32
    }

    /// pixel position of a geographic point within the map area
    pub fn project (&self, p: &GeoPoint)->(f32,f32) {
        let x = (p.longitude_degrees() - self.extent.west()) / self.extent.width() * self.width as f64;
        let y = (self.extent.north() - p.latitude_degrees()) / self.extent.height() * self.map_height() as f64;
        (x as f32, y as f32)
    }
}

/// the two segment red -> light blue -> green color map used for retrievability values
pub struct ColorMap {
    colors: Vec<Rgb<u8>>
}

impl ColorMap {
    pub fn retrievability ()->Self {
        const N: usize = 128;
        let lin = |a: f64, b: f64, i: usize| a + (b - a) * i as f64 / (N - 1) as f64;
        let to_u8 = |v: f64| (v * 255.0).round() as u8;

        let lower = (0..N).map( |i| Rgb([ to_u8( 1.0), to_u8( lin( 0.0, 181.0/255.0, i)), to_u8( lin( 0.0, 197.0/255.0, i)) ]));
        let upper = (0..N).map( |i| Rgb([ to_u8( lin( 1.0, 0.0, i)), to_u8( lin( 181.0/255.0, 1.0, i)), to_u8( lin( 197.0/255.0, 0.0, i)) ]));

        ColorMap { colors: lower.chain( upper).collect() }
    }

    /// color for a normalized value in [0,1]
    pub fn color_at (&self, f: f64)->Rgb<u8> {
        let n = self.colors.len();
        let i = if f.is_nan() { 0 } else { ((f * n as f64).floor() as isize).clamp( 0, n as isize - 1) as usize };
        self.colors[i]
    }
}

/// min and max of the available marker values
pub fn value_range (markers: &[MapMarker])->Option<(f64,f64)> {
    match markers.iter().filter_map( |m| m.value()).minmax_by( |a,b| a.total_cmp( b)) {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some( (v,v)),
        MinMaxResult::MinMax(min,max) => Some( (min,max))
    }
}

/// map a value into [0,1] for the given range. For an empty range we fall back to the percent value
pub fn normalize (v: f64, range: (f64,f64))->f64 {
    let (min,max) = range;
    if max > min { (v - min) / (max - min) } else { (v / 100.0).clamp( 0.0, 1.0) }
}

fn triangle (x: f32, y: f32, size: f32)->[(f32,f32);3] {
    let h = size / 2.0;
    [ (x - h, y + h), (x + h, y + h), (x, y - h) ]
}

fn draw_marker (img: &mut RgbImage, x: f32, y: f32, size: f32, fill: Rgb<u8>, edge: Rgb<u8>) {
    let tri = triangle( x, y, size);
    let filled: Vec<Point<i32>> = tri.iter().map( |(px,py)| Point::new( px.round() as i32, py.round() as i32)).collect();
    if filled[0] != filled[1] && filled[1] != filled[2] && filled[0] != filled[2] {
        draw_polygon_mut( img, &filled, fill);
    }
    let outline: Vec<Point<f32>> = tri.iter().map( |(px,py)| Point::new( *px, *py)).collect();
    draw_hollow_polygon_mut( img, &outline, edge);
}

fn draw_graticule (img: &mut RgbImage, view: &MapView) {
    let ext = &view.extent;
    let step = view.grid_degrees;
    let h = view.map_height() as f32;

    let mut lon = (ext.west() / step).ceil() * step;
    while lon <= ext.east() {
        let (x,_) = view.project( &GeoPoint::from_lon_lat_degrees( lon, ext.north()));
        draw_line_segment_mut( img, (x, 0.0), (x, h), GRATICULE);
        lon += step;
    }

    let mut lat = (ext.south() / step).ceil() * step;
    while lat <= ext.north() {
        let (_,y) = view.project( &GeoPoint::from_lon_lat_degrees( ext.west(), lat));
        draw_line_segment_mut( img, (0.0, y), (view.width as f32, y), GRATICULE);
        lat += step;
    }
}

/// horizontal color bar over the middle third of the bottom strip
fn draw_color_bar (img: &mut RgbImage, view: &MapView, cmap: &ColorMap) {
    let bar_w = view.width / 3;
    let bar_h = COLOR_BAR_HEIGHT / 3;
    let x0 = (view.width - bar_w) / 2;
    let y0 = view.map_height() + (COLOR_BAR_HEIGHT - bar_h) / 2;

    for i in 0..bar_w {
        let color = cmap.color_at( i as f64 / bar_w as f64);
        draw_filled_rect_mut( img, Rect::at( (x0 + i) as i32, y0 as i32).of_size( 1, bar_h), color);
    }
    draw_hollow_rect_mut( img, Rect::at( x0 as i32 - 1, y0 as i32 - 1).of_size( bar_w + 2, bar_h + 2), NOT_AVAILABLE_EDGE);
}

/// render markers: stations without results first, then the colored ones on top
pub fn render_map (markers: &[MapMarker], view: &MapView)->RgbImage {
    let map_h = view.map_height();
    let mut img = RgbImage::from_pixel( view.width, map_h + COLOR_BAR_HEIGHT, BACKGROUND);
    let cmap = ColorMap::retrievability();
    let size = view.marker_size as f32;

    draw_graticule( &mut img, view);

    for m in markers.iter().filter( |m| view.extent.contains( &m.position)) {
        if let MarkerState::NotAvailable = m.state {
            let (x,y) = view.project( &m.position);
            draw_marker( &mut img, x, y, size * 0.8, NOT_AVAILABLE_FILL, NOT_AVAILABLE_EDGE);
        }
    }

    if let Some(range) = value_range( markers) {
        for m in markers.iter().filter( |m| view.extent.contains( &m.position)) {
            if let MarkerState::Available(sv) = m.state {
                let (x,y) = view.project( &m.position);
                let edge = if sv.metadata_problem { METADATA_PROBLEM_EDGE } else { MARKER_EDGE };
                draw_marker( &mut img, x, y, size, cmap.color_at( normalize( sv.value, range)), edge);
            }
        }
    }

    draw_color_bar( &mut img, view, &cmap);
    img
}

/// render and save as `<dir>/<view name>.png`
pub fn save_map<P: AsRef<Path>> (markers: &[MapMarker], view: &MapView, dir: P)->Result<PathBuf> {
    let path = dir.as_ref().join( format!("{}.png", view.name));
    let img = render_map( markers, view);
    img.save( &path)?;
    info!("saved {:?}", path);
    Ok(path)
}
