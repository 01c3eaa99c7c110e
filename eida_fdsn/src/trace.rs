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

//! contiguous time series (traces) and collections of them (streams)

use std::fmt;
use chrono::{DateTime,Utc};
use eida_common::datetime::{add_secs_f64, seconds_between};
use crate::{errors::Result, mseed::{MseedRecord, parse_records}};

#[derive(Debug,Clone,PartialEq,Eq,Hash,PartialOrd,Ord)]
pub struct StreamId {
    pub network: String,
    pub station: String,
    pub location: String,
    pub channel: String,
}

impl StreamId {
    pub fn new (network: &str, station: &str, location: &str, channel: &str)->Self {
        StreamId { network: network.to_string(), station: station.to_string(), location: location.to_string(), channel: channel.to_string() }
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "{}.{}.{}.{}", self.network, self.station, self.location, self.channel)
    }
}

/// a gap-free, evenly sampled time series
#[derive(Debug,Clone)]
pub struct Trace {
    pub id: StreamId,
    pub start: DateTime<Utc>,
    pub sample_rate: f64,
    pub data: Vec<f64>,
}

impl Trace {
    pub fn new (id: StreamId, start: DateTime<Utc>, sample_rate: f64, data: Vec<f64>)->Self {
        Trace { id, start, sample_rate, data }
    }

    #[inline] pub fn npts (&self)->usize { self.data.len() }
    #[inline] pub fn is_empty (&self)->bool { self.data.is_empty() }
    #[inline] pub fn delta (&self)->f64 { 1.0 / self.sample_rate }

    /// covered time span, i.e. the time between first and last sample
    pub fn duration_secs (&self)->f64 {
        if self.data.len() < 2 { 0.0 } else { (self.data.len() - 1) as f64 / self.sample_rate }
    }

    /// time of the last sample
    pub fn end (&self)->DateTime<Utc> {
        add_secs_f64( &self.start, self.duration_secs())
    }

    /// would a record with given start time continue this trace without gap or overlap
    fn is_continued_by (&self, rec: &MseedRecord)->bool {
        let expected = add_secs_f64( &self.end(), self.delta());
        (seconds_between( &rec.start, &expected)).abs() <= 0.5 * self.delta()
    }

    /// cut trace to samples within [start,end], rounding to the nearest sample
    pub fn trim (&mut self, start: &DateTime<Utc>, end: &DateTime<Utc>) {
        if self.data.is_empty() { return }

        if *start > self.start {
            let skip = (seconds_between( start, &self.start) * self.sample_rate).round() as usize;
            if skip >= self.data.len() {
                self.data.clear();
                return
            }
            self.data.drain( ..skip);
            self.start = add_secs_f64( &self.start, skip as f64 * self.delta());
        }

        let trace_end = self.end();
        if *end < trace_end {
            let cut = (seconds_between( &trace_end, end) * self.sample_rate).round() as usize;
            if cut >= self.data.len() {
                self.data.clear();
            } else {
                let n = self.data.len() - cut;
                self.data.truncate( n);
            }
        }
    }
}

#[derive(Debug,Clone,Default)]
pub struct Stream {
    pub traces: Vec<Trace>
}

impl Stream {
    pub fn new ()->Self { Stream { traces: Vec::new() } }

    pub fn from_traces (traces: Vec<Trace>)->Self { Stream { traces } }

    /// assemble records into traces. Records of the same stream id and sample rate are joined if
    /// they are contiguous (within half a sample interval)
    pub fn from_records (mut records: Vec<MseedRecord>)->Self {
        records.sort_by( |a,b| {
            (&a.network, &a.station, &a.location, &a.channel, a.start)
                .cmp( &(&b.network, &b.station, &b.location, &b.channel, b.start))
        });

        let mut traces: Vec<Trace> = Vec::new();
        for rec in records {
            if let Some(last) = traces.last_mut() {
                if last.id.network == rec.network && last.id.station == rec.station && last.id.location == rec.location
                    && last.id.channel == rec.channel && last.sample_rate == rec.sample_rate && last.is_continued_by( &rec) {
                    last.data.extend( rec.samples);
                    continue
                }
            }
            let id = StreamId::new( &rec.network, &rec.station, &rec.location, &rec.channel);
            traces.push( Trace::new( id, rec.start, rec.sample_rate, rec.samples));
        }

        Stream { traces }
    }

    /// decode a miniSEED byte stream
    pub fn from_mseed (data: &[u8])->Result<Self> {
        Ok( Self::from_records( parse_records( data)?) )
    }

    #[inline] pub fn len (&self)->usize { self.traces.len() }
    #[inline] pub fn is_empty (&self)->bool { self.traces.is_empty() }

    pub fn iter (&self)->impl Iterator<Item=&Trace> { self.traces.iter() }
    pub fn iter_mut (&mut self)->impl Iterator<Item=&mut Trace> { self.traces.iter_mut() }

    pub fn extend (&mut self, other: Stream) {
        self.traces.extend( other.traces)
    }

    /// trim all traces to [start,end] and drop the ones that end up empty
    pub fn trim (&mut self, start: &DateTime<Utc>, end: &DateTime<Utc>) {
        for tr in self.traces.iter_mut() {
            tr.trim( start, end);
        }
        self.traces.retain( |tr| !tr.is_empty());
    }
}

impl IntoIterator for Stream {
    type Item = Trace;
    type IntoIter = std::vec::IntoIter<Trace>;
    fn into_iter(self) -> Self::IntoIter { self.traces.into_iter() }
}
