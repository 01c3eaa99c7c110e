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

//! merging result files of several runs and reducing them to one value per station.
//! Leaf values are collected as per-run series, the reduction only happens when we compute
//! station values

use std::{collections::BTreeMap, path::{Path,PathBuf}};
use tracing::{info,warn};
use eida_common::{mean, geo::GeoPoint};
use crate::{
    errors::Result,
    results::{ResultKey, ResultTable},
    coordinates::CoordinateList,
};

/// per-run values of one result key
#[derive(Debug,Clone,Default,PartialEq)]
pub struct LeafSeries {
    /// each value capped at 1.0
    pub percentages: Vec<f64>,
    pub days_with_metrics: Vec<u32>,
    pub metadata_problems: Vec<bool>,
}

#[derive(Debug,Clone,Default)]
pub struct AggregatedResults {
    entries: BTreeMap<ResultKey,LeafSeries>,
    n_runs: usize,
}

/// what we show per station
#[derive(Debug,Clone,Copy,PartialEq)]
pub enum Metric {
    /// mean fraction of received data
    Retrievability,
    /// mean fraction of sampled days with WFCatalog metrics
    MetricsDays { sample_days: usize },
}

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct StationValue {
    /// in [0,100]
    pub value: f64,
    pub metadata_problem: bool,
}

impl AggregatedResults {
    pub fn new ()->Self { AggregatedResults { entries: BTreeMap::new(), n_runs: 0 } }

    /// load and merge result files. Each file counts as one run
    pub fn from_files<P: AsRef<Path>> (paths: &[P])->Result<Self> {
        let mut agg = AggregatedResults::new();
        for path in paths {
            let table = ResultTable::load( path)?;
            info!("{} results in {:?}", table.len(), path.as_ref());
            agg.add_run( &table);
        }
        Ok(agg)
    }

    pub fn add_run (&mut self, table: &ResultTable) {
        self.n_runs += 1;
        for (key, result) in table.iter() {
            let series = self.entries.entry( key.clone()).or_default();
            series.percentages.push( result.percentage.min( 1.0));
            series.days_with_metrics.push( result.days_with_metrics);
            series.metadata_problems.push( result.metadata_problem);
        }
    }

    pub fn n_runs (&self)->usize { self.n_runs }

    pub fn len (&self)->usize { self.entries.len() }

    pub fn get (&self, key: &ResultKey)->Option<&LeafSeries> { self.entries.get( key) }

    /// per channel: sum over runs divided by the number of runs (missing runs count as 0), scaled
    /// to percent. Per station: the mean of its channels, capped at 100
    pub fn station_values (&self, metric: Metric)->BTreeMap<(String,String),StationValue> {
        let mut per_station: BTreeMap<(String,String),(Vec<f64>,bool)> = BTreeMap::new();
        if self.n_runs == 0 { return BTreeMap::new() }
        let n = self.n_runs as f64;

        for (key, series) in &self.entries {
            let v = match metric {
                Metric::Retrievability => series.percentages.iter().sum::<f64>() / n * 100.0,
                Metric::MetricsDays { sample_days } => {
                    let days: u32 = series.days_with_metrics.iter().sum();
                    days as f64 / n / sample_days.max(1) as f64 * 100.0
                }
            };
            let entry = per_station.entry( key.station_key()).or_insert_with( || (Vec::new(), false));
            entry.0.push( v);
            entry.1 |= series.metadata_problems.iter().any( |p| *p);
        }

        per_station.into_iter().filter_map( |(k,(vs,metadata_problem))| {
            mean( &vs).map( |v| (k, StationValue { value: v.min( 100.0), metadata_problem }))
        }).collect()
    }
}

#[derive(Debug,Clone,Copy,PartialEq)]
pub enum MarkerState {
    Available(StationValue),
    /// the station has a coordinate but no result in any run
    NotAvailable
}

#[derive(Debug,Clone)]
pub struct MapMarker {
    pub network: String,
    pub station: String,
    pub position: GeoPoint,
    pub state: MarkerState,
}

impl MapMarker {
    pub fn value (&self)->Option<f64> {
        match self.state {
            MarkerState::Available(sv) => Some(sv.value),
            MarkerState::NotAvailable => None
        }
    }
}

/// one marker per known station. Results for stations without coordinates are reported and dropped
pub fn map_markers (values: &BTreeMap<(String,String),StationValue>, coords: &CoordinateList)->Vec<MapMarker> {
    for (net,sta) in values.keys() {
        if !coords.has_network( net) {
            warn!("failed to find coordinate information for {}", net);
        } else if coords.get( net, sta).is_none() {
            warn!("failed to find coordinate information for {} {}", net, sta);
        }
    }

    coords.iter().map( |(net,sta,c)| {
        let state = match values.get( &(net.to_string(), sta.to_string())) {
            Some(sv) => MarkerState::Available(*sv),
            None => MarkerState::NotAvailable
        };
        MapMarker { network: net.to_string(), station: sta.to_string(), position: c.position(), state }
    }).collect()
}
