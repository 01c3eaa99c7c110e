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

//! general utilities shared by the EIDA crates that are not specific to seismological data services

pub mod macros;
pub mod datetime;
pub mod fs;
pub mod net;
pub mod geo;
pub mod json;

/// clamp a f64 into the closed interval [lo,hi]. NaN is mapped to `lo`
#[inline]
pub fn clamp_f64 (x: f64, lo: f64, hi: f64)->f64 {
    if x.is_nan() { lo } else { x.max(lo).min(hi) }
}

/// arithmetic mean of a slice, `None` if empty
pub fn mean (vs: &[f64])->Option<f64> {
    if vs.is_empty() { None } else { Some( vs.iter().sum::<f64>() / vs.len() as f64) }
}
