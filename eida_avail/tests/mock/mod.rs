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

//! scripted providers and samplers for scan tests

use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;
use chrono::{DateTime,Utc,TimeZone};
use eida_fdsn::{
    FdsnProvider, FetchError, StationQuery, WaveformQuery, MetricsQuery, Level,
    inventory::{Inventory, parse_channel_text, parse_station_text},
    response::{ResponseInventory, ChannelResponse},
    trace::{Stream, Trace, StreamId},
    wfcatalog::{DayMetrics, WfCatalogDocument},
};
use eida_avail::SampleStrategy;

pub type WaveformFn = Box<dyn Fn(&WaveformQuery)->eida_fdsn::Result<Stream> + Send + Sync>;

pub struct MockProvider {
    pub name: String,
    pub inventory_text: Option<String>,
    pub responses: Option<ResponseInventory>,
    pub metrics_ok: bool,
    pub waveforms: WaveformFn,
    pub n_waveform_requests: AtomicUsize,
    pub n_response_requests: AtomicUsize,
}

impl MockProvider {
    pub fn new (name: &str)->Self {
        MockProvider {
            name: name.to_string(),
            inventory_text: None,
            responses: None,
            metrics_ok: true,
            waveforms: Box::new( |q| Err( FetchError::NoData( q.to_string()))),
            n_waveform_requests: AtomicUsize::new(0),
            n_response_requests: AtomicUsize::new(0),
        }
    }

    pub fn with_inventory (mut self, text: &str)->Self { self.inventory_text = Some(text.to_string()); self }

    pub fn with_responses (mut self, responses: ResponseInventory)->Self { self.responses = Some(responses); self }

    pub fn without_metrics (mut self)->Self { self.metrics_ok = false; self }

    pub fn with_waveforms<F> (mut self, f: F)->Self where F: Fn(&WaveformQuery)->eida_fdsn::Result<Stream> + Send + Sync + 'static {
        self.waveforms = Box::new(f);
        self
    }

    pub fn waveform_requests (&self)->usize { self.n_waveform_requests.load( Ordering::Relaxed) }

    pub fn response_requests (&self)->usize { self.n_response_requests.load( Ordering::Relaxed) }
}

#[async_trait]
impl FdsnProvider for MockProvider {
    fn name (&self)->&str { &self.name }

    async fn get_stations (&self, query: &StationQuery)->eida_fdsn::Result<Inventory> {
        match &self.inventory_text {
            Some(text) => match query.level {
                Level::Station => parse_station_text( text),
                _ => parse_channel_text( text)
            }
            None => Err( FetchError::NoData( format!("{} stations", self.name)))
        }
    }

    async fn get_responses (&self, query: &StationQuery)->eida_fdsn::Result<ResponseInventory> {
        self.n_response_requests.fetch_add( 1, Ordering::Relaxed);
        self.responses.clone().ok_or_else( || FetchError::NoData( format!("{} responses", self.name)))
    }

    async fn get_waveforms (&self, query: &WaveformQuery)->eida_fdsn::Result<Stream> {
        self.n_waveform_requests.fetch_add( 1, Ordering::Relaxed);
        (self.waveforms)( query)
    }

    async fn get_day_metrics (&self, query: &MetricsQuery)->eida_fdsn::Result<DayMetrics> {
        if self.metrics_ok {
            Ok( DayMetrics { documents: vec![ WfCatalogDocument { percent_availability: Some(100.0), ..Default::default() } ] })
        } else {
            Err( FetchError::NoRoute( query.to_string()))
        }
    }
}

/// always picks the first n of its days and hours
pub struct FixedSampler {
    pub days: Vec<u32>,
    pub hours: Vec<u32>,
}

impl FixedSampler {
    pub fn new ()->Self { FixedSampler { days: vec![1, 2, 3, 4, 5, 6, 7], hours: vec![0, 12, 6, 18] } }
}

impl SampleStrategy for FixedSampler {
    fn sample_days (&mut self, total_days: u32, n: usize)->Vec<u32> {
        self.days.iter().copied().filter( |d| *d <= total_days).take( n).collect()
    }

    fn sample_hours (&mut self, n: usize)->Vec<u32> {
        self.hours.iter().copied().take( n).collect()
    }
}

pub fn utc (y: i32, m: u32, d: u32)->DateTime<Utc> {
    Utc.with_ymd_and_hms( y, m, d, 0, 0, 0).unwrap()
}

/// a 1Hz trace of the requested stream that starts at the window start and covers `secs` seconds
pub fn window_trace (q: &WaveformQuery, location: &str, secs: usize)->Trace {
    Trace::new( StreamId::new( &q.network, &q.station, location, &q.channel), q.start, 1.0, vec![1.0; secs + 1])
}

pub fn stream (traces: Vec<Trace>)->eida_fdsn::Result<Stream> {
    Ok( Stream::from_traces( traces))
}

/// open ended responses for the given locations of GE.APE.BHZ
pub fn responses (locations: &[&str], sensitivity: Option<f64>)->ResponseInventory {
    ResponseInventory {
        channels: locations.iter().map( |loc| ChannelResponse {
            network: "GE".to_string(), station: "APE".to_string(), location: loc.to_string(), channel: "BHZ".to_string(),
            start: None, end: None, sensitivity
        }).collect()
    }
}

pub const INVENTORY: &str = "\
#Network|Station|Location|Channel|Latitude|Longitude|Elevation|Depth|Azimuth|Dip|SensorDescription|Scale|ScaleFreq|ScaleUnits|SampleRate|StartTime|EndTime
GE|APE|00|BHZ|37.0689|25.5306|620.0|0.0|0.0|-90.0|STS-2|5.9e8|1.0|M/S|20.0|2004-06-01T00:00:00|
GE|APE|00|HHZ|37.0689|25.5306|620.0|0.0|0.0|-90.0|STS-2|5.9e8|1.0|M/S|100.0|2019-12-29T00:00:00|
XX|TMP|00|BHZ|50.0|10.0|100.0|0.0|0.0|-90.0|STS-2|5.9e8|1.0|M/S|20.0|2010-01-01T00:00:00|
GR|BFO||BHZ|48.3301|8.3296|589.0|0.0|0.0|-90.0|STS-1|6.2e8|1.0|M/S|20.0|1991-01-01T00:00:00|
";
