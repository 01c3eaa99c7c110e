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

//! the per channel sampler: picks random days and hours within a channel epoch and tries to
//! retrieve day metrics, waveforms and response metadata for them. Every request is allowed to
//! fail on its own - failures are what we measure

use chrono::{DateTime,Utc};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::index};
use tracing::{debug,info,warn};
use eida_common::datetime::{seconds_between, add_secs, SECS_PER_DAY, SECS_PER_HOUR};
use eida_fdsn::{
    FdsnProvider, StationQuery, WaveformQuery, MetricsQuery,
    inventory::ChannelEpoch, response::{remove_sensitivity, ResponseInventory}, trace::Stream,
};
use crate::{coverage::coverage_fraction, results::ChannelResult, errors::{Result,config_error}};

/// source of the random day and hour choices
pub trait SampleStrategy {
    /// `n` distinct day offsets from `[1,total_days]`
    fn sample_days (&mut self, total_days: u32, n: usize)->Vec<u32>;

    /// `n` distinct hours from `[0,23]`
    fn sample_hours (&mut self, n: usize)->Vec<u32>;
}

/// uniform sampling without replacement
pub struct RandomSampler<R: Rng> {
    rng: R
}

impl RandomSampler<StdRng> {
    pub fn from_os_rng ()->Self { RandomSampler { rng: StdRng::from_os_rng() } }

    pub fn seeded (seed: u64)->Self { RandomSampler { rng: StdRng::seed_from_u64( seed) } }
}

impl<R: Rng> RandomSampler<R> {
    pub fn new (rng: R)->Self { RandomSampler { rng } }

    fn sample (&mut self, len: usize, n: usize)->Vec<u32> {
        index::sample( &mut self.rng, len, n.min( len)).into_iter().map( |i| i as u32).collect()
    }
}

impl<R: Rng> SampleStrategy for RandomSampler<R> {
    fn sample_days (&mut self, total_days: u32, n: usize)->Vec<u32> {
        self.sample( total_days as usize, n).into_iter().map( |d| d + 1).collect()
    }

    fn sample_hours (&mut self, n: usize)->Vec<u32> {
        self.sample( 24, n)
    }
}

/// how much we sample per channel and year
#[derive(Debug,Clone,Copy)]
pub struct SamplingConfig {
    pub days: usize,
    pub hours: usize,
    pub minutes: u32,
}

impl Default for SamplingConfig {
    fn default()->Self { SamplingConfig { days: 5, hours: 2, minutes: 10 } }
}

impl SamplingConfig {
    pub fn check (&self)->Result<()> {
        if self.days == 0 { return Err( config_error!("number of sample days has to be > 0")) }
        if self.hours == 0 || self.hours > 24 { return Err( config_error!("number of sample hours has to be in [1,24], got {}", self.hours)) }
        if self.minutes == 0 { return Err( config_error!("window length has to be > 0 minutes")) }
        Ok(())
    }

    /// length of a single waveform request window
    pub fn window_secs (&self)->f64 { self.minutes as f64 * 60.0 }

    /// total requested time per channel
    pub fn nominal_secs (&self)->f64 { (self.days * self.hours) as f64 * self.window_secs() }
}

/// where the channel we sample lives
#[derive(Debug,Clone)]
pub struct ChannelContext<'a> {
    pub provider: &'a str,
    pub year: i32,
    pub network: &'a str,
    pub station: &'a str,
    pub channel: &'a str,
}

/// the part of the channel epoch that falls into the requested range. Open epochs end at `range_end`
pub fn effective_epoch (range_start: &DateTime<Utc>, range_end: &DateTime<Utc>, epoch: &ChannelEpoch)->(DateTime<Utc>,DateTime<Utc>) {
    let start = epoch.start.max( *range_start);
    let end = match epoch.end {
        Some(end) => end.min( *range_end),
        None => *range_end
    };
    (start, end)
}

/// number of full days in [start,end], negative if end is before start
pub fn total_days (start: &DateTime<Utc>, end: &DateTime<Utc>)->i64 {
    (seconds_between( end, start) / SECS_PER_DAY as f64).floor() as i64
}

/// sample one channel epoch. Returns `None` if the epoch does not have more days than we sample
pub async fn sample_channel<P,S> (
    provider: &P, ctx: &ChannelContext<'_>, config: &SamplingConfig, epoch: &ChannelEpoch,
    range_start: &DateTime<Utc>, range_end: &DateTime<Utc>, sampler: &mut S
)->Option<ChannelResult>
    where P: FdsnProvider + ?Sized, S: SampleStrategy
{
    let (start, end) = effective_epoch( range_start, range_end, epoch);
    let n_days = total_days( &start, &end);
    if n_days <= config.days as i64 {
        return None
    }

    let days = sampler.sample_days( n_days as u32, config.days);
    let hours = sampler.sample_hours( config.hours);
    let (net, sta, cha) = (ctx.network, ctx.station, ctx.channel);

    let mut metadata_problem = false;
    let responses = match provider.get_responses( &StationQuery::response( net, sta, cha, start, end)).await {
        Ok(inv) => Some(inv),
        Err(e) => {
            warn!("no response metadata for {} {} {}.{}.{}: {}", ctx.provider, ctx.year, net, sta, cha, e);
            metadata_problem = true;
            None
        }
    };

    let mut segments = Stream::new();
    let mut days_with_metrics: u32 = 0;
    let window = config.minutes as i64 * 60;

    for day in &days {
        let day_start = add_secs( &start, *day as i64 * SECS_PER_DAY);
        let day_end = add_secs( &day_start, SECS_PER_DAY);

        match provider.get_day_metrics( &MetricsQuery::new( net, sta, cha, day_start, day_end)).await {
            Ok(_) => days_with_metrics += 1,
            Err(e) => info!("{} {} {}.{}.{} day {}: {}", ctx.provider, ctx.year, net, sta, cha, day, e)
        }

        for hour in &hours {
            let win_start = add_secs( &day_start, *hour as i64 * SECS_PER_HOUR);
            let win_end = add_secs( &win_start, window);

            match provider.get_waveforms( &WaveformQuery::any_location( net, sta, cha, win_start, win_end)).await {
                Ok(mut stream) => {
                    stream.trim( &win_start, &win_end);
                    if !metadata_problem {
                        if let Some(inv) = &responses {
                            metadata_problem = !correct_stream( &mut stream, inv, ctx);
                        }
                    }
                    segments.extend( stream);
                }
                Err(e) => warn!("{} {} {}.{}.{} day {} hour {}: {}", ctx.provider, ctx.year, net, sta, cha, day, hour, e)
            }
        }
    }

    let percentage = coverage_fraction( &segments.traces, config.window_secs(), config.nominal_secs());
    Some( ChannelResult { percentage, days_with_metrics, metadata_problem })
}

/// apply the response correction to all traces. Returns false if the metadata is unusable
fn correct_stream (stream: &mut Stream, inv: &ResponseInventory, ctx: &ChannelContext)->bool {
    for tr in stream.iter_mut() {
        if let Err(e) = remove_sensitivity( tr, inv) {
            warn!("{} {}: {}", ctx.provider, ctx.year, e);
            return false
        }
        if tr.data.iter().any( |v| v.is_nan()) {
            warn!("{} {} {}: corrected samples are not numbers", ctx.provider, ctx.year, tr.id);
            return false
        }
    }
    true
}
