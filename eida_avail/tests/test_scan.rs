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

mod mock;

use chrono::{TimeZone,Utc};
use eida_fdsn::FdsnProvider;
use eida_avail::{
    ScanConfig, ResultTable, ResultKey, ChannelResult, SamplingConfig,
    scan::{scan, scan_provider, parse_network_list},
};
use mock::*;

fn config ()->ScanConfig {
    let mut config = ScanConfig::for_years( 2019, 2019);
    config.exclude = parse_network_list( "XX, YY,");
    config
}

#[test]
fn test_network_list () {
    assert_eq!( parse_network_list( "XX, YY,"), vec!["XX".to_string(), "YY".to_string()]);
    assert!( parse_network_list( "").is_empty());
}

#[test]
fn test_year_ranges () {
    let mut config = ScanConfig::for_years( 2019, 2021);
    config.start_month = 6;
    config.start_day = 31; // clamped to June 30
    config.end_month = 2;
    config.end_day = 31;   // clamped to Feb 28
    assert!( config.check().is_ok());

    let (s, e) = config.year_range( 2019).unwrap();
    assert_eq!( s, utc( 2019, 6, 30));
    assert_eq!( e, Utc.with_ymd_and_hms( 2019, 12, 31, 23, 59, 59).unwrap());

    let (s, e) = config.year_range( 2020).unwrap();
    assert_eq!( s, utc( 2020, 1, 1));
    assert_eq!( e, Utc.with_ymd_and_hms( 2020, 12, 31, 23, 59, 59).unwrap());

    let (s, e) = config.year_range( 2021).unwrap();
    assert_eq!( s, utc( 2021, 1, 1));
    assert_eq!( e, utc( 2021, 2, 28));

    assert_eq!( config.years().collect::<Vec<i32>>(), vec![2019, 2020, 2021]);
}

#[test]
fn test_config_check () {
    assert!( ScanConfig::for_years( 2020, 2019).check().is_err());

    let mut config = ScanConfig::for_years( 2019, 2019);
    config.end_month = 13;
    assert!( config.check().is_err());

    let mut config = ScanConfig::for_years( 2019, 2019);
    config.sampling.hours = 30;
    assert!( config.check().is_err());
}

#[tokio::test]
async fn test_scan_provider () {
    let provider = MockProvider::new( "GFZ")
        .with_inventory( INVENTORY)
        .with_responses( responses( &["00"], Some(2.0)))
        .with_waveforms( |q| stream( vec![ window_trace( q, "00", 300) ]));
    let mut results = ResultTable::new();

    let n = scan_provider( &provider, &config(), &mut FixedSampler::new(), &mut results).await;
    assert_eq!( n, 2);

    // XX is excluded, the HHZ epoch is too short
    assert!( results.iter().all( |(k,_)| k.network != "XX"));
    assert!( results.get( &ResultKey::new( "GFZ", 2019, "GE", "APE", "HHZ")).is_none());

    let r = results.get( &ResultKey::new( "GFZ", 2019, "GE", "APE", "BHZ")).unwrap();
    assert_eq!( r.percentage, 0.5);
    assert!( !r.metadata_problem);

    // no response for GR.BFO
    let r = results.get( &ResultKey::new( "GFZ", 2019, "GR", "BFO", "BHZ")).unwrap();
    assert!( r.metadata_problem);

    for (_, r) in results.iter() {
        assert!( r.percentage >= 0.0 && r.percentage <= 1.0);
        assert!( r.days_with_metrics as usize <= config().sampling.days);
    }
}

const SHORT_EPOCHS: &str = "\
GE|SHO|00|BHZ|36.0|22.0|100.0|0.0|0.0|-90.0|STS-2|5.9e8|1.0|M/S|20.0|2019-01-01T00:00:00|2019-01-04T00:00:00
GE|SHO|00|BHZ|36.0|22.0|100.0|0.0|0.0|-90.0|STS-2|5.9e8|1.0|M/S|20.0|2019-11-01T00:00:00|2019-11-04T00:00:00
";

#[tokio::test]
async fn test_short_epochs_are_not_combined () {
    // each epoch has 3 days, together they span most of the year
    let provider = MockProvider::new( "GFZ")
        .with_inventory( SHORT_EPOCHS)
        .with_waveforms( |q| stream( vec![ window_trace( q, "00", 600) ]));
    let mut results = ResultTable::new();

    let n = scan_provider( &provider, &config(), &mut FixedSampler::new(), &mut results).await;
    assert_eq!( n, 0);
    assert!( results.is_empty());
    assert_eq!( provider.waveform_requests(), 0);
    assert_eq!( provider.response_requests(), 0);
}

const MULTI_LOCATION_EPOCHS: &str = "\
GE|MLT|00|BHZ|35.9|14.4|100.0|0.0|0.0|-90.0|STS-2|5.9e8|1.0|M/S|20.0|2019-02-01T00:00:00|2019-05-01T00:00:00
GE|MLT|10|BHZ|35.9|14.4|100.0|0.0|0.0|-90.0|STS-2|5.9e8|1.0|M/S|40.0|2019-06-01T00:00:00|
GE|MLT|20|BHZ|35.9|14.4|100.0|0.0|0.0|-90.0|STS-2|5.9e8|1.0|M/S|20.0|2019-12-20T00:00:00|2019-12-23T00:00:00
";

#[tokio::test]
async fn test_multi_location_epochs () {
    // full windows before June, half windows after
    let provider = MockProvider::new( "GFZ")
        .with_inventory( MULTI_LOCATION_EPOCHS)
        .with_waveforms( |q| {
            if q.start < utc( 2019, 6, 1) {
                stream( vec![ window_trace( q, "00", 600) ])
            } else {
                stream( vec![ window_trace( q, "10", 300) ])
            }
        });
    let mut results = ResultTable::new();

    // the December epoch is too short, the other two are sampled on their own
    let n = scan_provider( &provider, &config(), &mut FixedSampler::new(), &mut results).await;
    assert_eq!( n, 2);
    assert_eq!( provider.waveform_requests(), 20);
    assert_eq!( provider.response_requests(), 2);

    // all locations share the channel code key, the last sampled epoch defines it
    assert_eq!( results.len(), 1);
    let r = results.get( &ResultKey::new( "GFZ", 2019, "GE", "MLT", "BHZ")).unwrap();
    assert_eq!( r.percentage, 0.5);
    assert_eq!( r.days_with_metrics, 5);
}

#[tokio::test]
async fn test_failing_provider_does_not_stop_scan () {
    let providers: Vec<Box<dyn FdsnProvider>> = vec![
        Box::new( MockProvider::new( "DOWN")),
        Box::new( MockProvider::new( "UP").with_inventory( INVENTORY)),
    ];

    let mut config = ScanConfig::for_years( 2018, 2019);
    let results = scan( &providers, &config, &mut FixedSampler::new()).await;

    assert!( results.iter().all( |(k,_)| k.provider == "UP"));
    assert!( results.get( &ResultKey::new( "UP", 2018, "XX", "TMP", "BHZ")).is_some());
    assert!( results.get( &ResultKey::new( "UP", 2019, "GE", "APE", "BHZ")).is_some());
    assert_eq!( results.len(), 6);
    assert!( results.iter().all( |(_,r)| r.percentage == 0.0));
}

#[test]
fn test_result_file () {
    let mut results = ResultTable::new();
    results.insert( ResultKey::new( "eida-routing", 2019, "GE", "APE", "BHZ"), ChannelResult { percentage: 0.5, days_with_metrics: 4, metadata_problem: false });
    results.insert( ResultKey::new( "eida-routing", 2019, "GE", "APE", "HHZ"), ChannelResult { percentage: 1.0, days_with_metrics: 5, metadata_problem: true });
    results.insert( ResultKey::new( "eida-routing", 2020, "GR", "BFO", "BHZ"), ChannelResult { percentage: 0.0, days_with_metrics: 0, metadata_problem: false });

    let json: serde_json::Value = serde_json::from_str( &results.to_json_string().unwrap()).unwrap();
    assert_eq!( json["eida-routing"]["2019"]["GE"]["APE"]["BHZ"]["percentage"], 0.5);
    assert_eq!( json["eida-routing"]["2020"]["GR"]["BFO"]["BHZ"]["metadata_problem"], false);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.json");
    results.save( &path).unwrap();
    assert_eq!( ResultTable::load( &path).unwrap(), results);
}

#[test]
fn test_legacy_result_file () {
    // older runs wrote empty leaves for skipped channels
    let json = r#"{"GFZ": {"2019": {"GE": {"APE": {"BHZ": {"percentage": 0.25, "days_with_metrics": 5, "metadata_problem": false}, "HHZ": {}}}, "XX": {}}}}"#;
    let results = ResultTable::from_json_str( json).unwrap();
    assert_eq!( results.len(), 1);
    assert_eq!( results.get( &ResultKey::new( "GFZ", 2019, "GE", "APE", "BHZ")).unwrap().percentage, 0.25);

    assert!( ResultTable::from_json_str( r#"{"GFZ": {"last year": {}}}"#).is_err());
}
