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

use chrono::{Datelike, Timelike};
use eida_common::datetime::*;

#[test]
fn test_parse_fdsn_datetime () {
    let dt = parse_fdsn_datetime("2019-03-04T05:06:07").unwrap();
    assert_eq!( (dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute(), dt.second()), (2019,3,4,5,6,7));

    let dt = parse_fdsn_datetime("2019-03-04T05:06:07.2500Z").unwrap();
    assert_eq!( dt.nanosecond(), 250_000_000);

    let dt = parse_fdsn_datetime("2019-03-04").unwrap();
    assert_eq!( dt.hour(), 0);

    assert!( parse_fdsn_datetime("").is_none());
    assert!( parse_fdsn_datetime("not a date").is_none());
}

#[test]
fn test_clamped_date () {
    let dt = clamped_utc_date( 2023, 2, 31).unwrap();
    assert_eq!( dt.day(), 28);

    let dt = clamped_utc_date( 2024, 2, 31).unwrap();
    assert_eq!( dt.day(), 29);

    assert!( clamped_utc_date( 2024, 13, 1).is_none());
    assert!( clamped_utc_date( 2024, 1, 0).is_none());
}

#[test]
fn test_seconds_arithmetic () {
    let t0 = utc_datetime( 2020, 1, 1, 0, 0, 0).unwrap();
    let t1 = add_secs_f64( &t0, 90.5);
    assert_eq!( seconds_between( &t1, &t0), 90.5);
    assert_eq!( seconds_between( &t0, &t1), -90.5);
    assert_eq!( add_secs( &t0, SECS_PER_DAY).day(), 2);
}

#[test]
fn test_btime () {
    // 2020 is a leap year, doy 60 is Feb 29
    let dt = from_year_doy( 2020, 60, 12, 30, 15, 2500).unwrap();
    assert_eq!( (dt.month(), dt.day(), dt.hour(), dt.minute(), dt.second()), (2,29,12,30,15));
    assert_eq!( dt.nanosecond(), 250_000_000);

    assert!( from_year_doy( 2021, 366, 0, 0, 0, 0).is_none());
}

#[test]
fn test_query_strings () {
    let dt = utc_datetime( 2021, 7, 9, 1, 2, 3).unwrap();
    assert_eq!( fdsn_datetime_string(&dt), "2021-07-09T01:02:03.000000");
    assert_eq!( fdsn_date_string(&dt), "2021-07-09");
}
