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

//! coverage of sampled waveform windows

use std::collections::BTreeSet;
use eida_fdsn::trace::Trace;
use eida_common::clamp_f64;

/// a retrieved piece of waveform data
pub trait Segment {
    fn location (&self)->&str;
    fn duration_secs (&self)->f64;
}

impl Segment for Trace {
    fn location (&self)->&str { &self.id.location }
    fn duration_secs (&self)->f64 { Trace::duration_secs( self) }
}

/// sum of segment durations, each capped at the requested window length
pub fn covered_secs<'a,S,I> (segments: I, window_secs: f64)->f64 where S: Segment + 'a, I: Iterator<Item=&'a S> {
    segments.map( |s| s.duration_secs().min( window_secs)).sum()
}

/// fraction of the nominal sampled time that is covered by `segments`, in [0,1].
/// If segments have different location codes we report the best covered location, not the sum
pub fn coverage_fraction<S: Segment> (segments: &[S], window_secs: f64, nominal_secs: f64)->f64 {
    if segments.is_empty() || nominal_secs <= 0.0 { return 0.0 }

    let locations: BTreeSet<&str> = segments.iter().map( |s| s.location()).collect();
    let covered = if locations.len() == 1 {
        covered_secs( segments.iter(), window_secs)
    } else {
        locations.iter()
            .map( |loc| covered_secs( segments.iter().filter( |s| s.location() == *loc), window_secs))
            .fold( 0.0, f64::max)
    };

    clamp_f64( covered / nominal_secs, 0.0, 1.0)
}
