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

//! scan orchestration: providers -> years -> networks -> stations -> channels. Nothing in here
//! aborts a scan, failures are logged and the scan moves on to the next item

use std::time::Instant;
use chrono::{DateTime,Utc};
use tracing::{info,warn,error};
use eida_common::datetime::{utc_datetime, clamped_utc_date};
use eida_fdsn::{FdsnProvider, StationQuery, Level};
use crate::{
    errors::{Result, config_error},
    results::{ResultKey, ResultTable},
    sampler::{SampleStrategy, SamplingConfig, ChannelContext, sample_channel},
};

/// the channel codes we look at
pub const DEFAULT_CHANNELS: &str = "BHZ,HHZ";

#[derive(Debug,Clone)]
pub struct ScanConfig {
    pub start_year: i32,
    pub end_year: i32,
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
    pub channels: String,
    /// network codes we don't sample
    pub exclude: Vec<String>,
    pub sampling: SamplingConfig,
}

impl ScanConfig {
    /// a scan over complete years with default channels and sampling
    pub fn for_years (start_year: i32, end_year: i32)->Self {
        ScanConfig {
            start_year, end_year,
            start_month: 1, start_day: 1, end_month: 12, end_day: 31,
            channels: DEFAULT_CHANNELS.to_string(),
            exclude: Vec::new(),
            sampling: SamplingConfig::default()
        }
    }

    pub fn check (&self)->Result<()> {
        if self.end_year < self.start_year {
            return Err( config_error!("end year {} before start year {}", self.end_year, self.start_year))
        }
        for (what, month) in [("start", self.start_month), ("end", self.end_month)] {
            if !(1..=12).contains( &month) { return Err( config_error!("invalid {} month {}", what, month)) }
        }
        for (what, day) in [("start", self.start_day), ("end", self.end_day)] {
            if !(1..=31).contains( &day) { return Err( config_error!("invalid {} day {}", what, day)) }
        }
        self.sampling.check()
    }

    pub fn is_excluded (&self, network: &str)->bool {
        self.exclude.iter().any( |n| n == network)
    }

    pub fn years (&self)->impl Iterator<Item=i32> { self.start_year..=self.end_year }

    /// the time range we scan in `year`. Only the first and last year are restricted by the
    /// configured start/end month and day (days past the end of a month are clamped)
    pub fn year_range (&self, year: i32)->Result<(DateTime<Utc>,DateTime<Utc>)> {
        let start = if year == self.start_year {
            clamped_utc_date( year, self.start_month, self.start_day)
        } else {
            utc_datetime( year, 1, 1, 0, 0, 0)
        };
        let end = if year == self.end_year {
            clamped_utc_date( year, self.end_month, self.end_day)
        } else {
            utc_datetime( year, 12, 31, 23, 59, 59)
        };

        match (start, end) {
            (Some(start), Some(end)) => Ok( (start, end) ),
            _ => Err( config_error!("invalid time range for year {}", year))
        }
    }
}

/// comma separated network list -> codes
pub fn parse_network_list (list: &str)->Vec<String> {
    list.split(',').map( |s| s.trim()).filter( |s| !s.is_empty()).map( |s| s.to_string()).collect()
}

/// scan one provider for all configured years, adding results to `results`. Each channel epoch
/// is sampled on its own, the last sampled epoch of a channel code defines its result.
/// Returns the number of sampled channel epochs
pub async fn scan_provider<P,S> (provider: &P, config: &ScanConfig, sampler: &mut S, results: &mut ResultTable)->usize
    where P: FdsnProvider + ?Sized, S: SampleStrategy
{
    let provider_name = provider.name().to_string();
    let mut n_sampled = 0;

    for year in config.years() {
        info!("processing {} year {}", provider_name, year);

        let (t0, t1) = match config.year_range( year) {
            Ok(range) => range,
            Err(e) => { error!("{}", e); continue }
        };

        let query = StationQuery::discovery( &config.channels, t0, t1, Level::Channel);
        let inventory = match provider.get_stations( &query).await {
            Ok(inventory) => inventory,
            Err(e) => {
                warn!("no stations available at {} for {}: {}", provider_name, year, e);
                continue
            }
        };

        let total = inventory.channel_epoch_count();
        info!("{} channels found at {} for {}", total, provider_name, year);
        let mut idx = 0;

        for net in &inventory.networks {
            for sta in &net.stations {
                for epoch in sta.channel_epochs() {
                    idx += 1;
                    if config.is_excluded( &net.code) {
                        info!("{}/{}; network {} is blacklisted", idx, total, net.code);
                        continue
                    }

                    let ctx = ChannelContext { provider: &provider_name, year, network: &net.code, station: &sta.code, channel: &epoch.code };
                    let t_start = Instant::now();

                    match sample_channel( provider, &ctx, &config.sampling, &epoch, &t0, &t1, sampler).await {
                        Some(result) => {
                            info!("{}/{}; {:8.2} min; {} {} {} {}; perc received {:3.1}; perc w/metrics {:3.1}; {}",
                                idx, total, t_start.elapsed().as_secs_f64() / 60.0, year, net.code, sta.code, epoch.code,
                                result.percentage * 100.0, result.days_with_metrics as f64 * 100.0 / config.sampling.days as f64,
                                if result.metadata_problem { "ERROR" } else { "OK" });

                            results.insert( ResultKey::new( &provider_name, year, &net.code, &sta.code, &epoch.code), result);
                            n_sampled += 1;
                        }
                        None => {
                            info!("{}/{}; skipped because of a short epoch; {} {} {} {}", idx, total, year, net.code, sta.code, epoch.code);
                        }
                    }
                }
            }
        }
    }

    n_sampled
}

/// scan all providers in sequence
pub async fn scan<S: SampleStrategy> (providers: &[Box<dyn FdsnProvider>], config: &ScanConfig, sampler: &mut S)->ResultTable {
    let mut results = ResultTable::new();
    for provider in providers {
        let n = scan_provider( provider.as_ref(), config, sampler, &mut results).await;
        info!("{} channels sampled at {}", n, provider.name());
    }
    results
}
