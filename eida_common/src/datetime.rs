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

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serializer};
use std::time::Duration;
use parse_duration::parse;

pub const SECS_PER_DAY: i64 = 86_400;
pub const SECS_PER_HOUR: i64 = 3_600;

// std Duration ctor for config defaults
#[inline] pub fn secs (n: u64)->Duration { Duration::from_secs(n) }

/// this should be used wherever we might have to use sim clock instead of wall clock
#[inline]
pub fn utc_now()->DateTime<Utc> {
    Utc::now()
}

/// fractional seconds between two dates (negative if `later` is before `earlier`)
pub fn seconds_between (later: &DateTime<Utc>, earlier: &DateTime<Utc>)->f64 {
    let d = *later - *earlier;
    match d.num_nanoseconds() {
        Some(ns) => ns as f64 / 1e9,
        None => d.num_milliseconds() as f64 / 1e3  // only for spans > ~292 years
    }
}

/// add fractional seconds with nanosecond resolution
pub fn add_secs_f64 (dt: &DateTime<Utc>, secs: f64)->DateTime<Utc> {
    *dt + TimeDelta::nanoseconds( (secs * 1e9).round() as i64)
}

#[inline]
pub fn add_secs (dt: &DateTime<Utc>, secs: i64)->DateTime<Utc> {
    *dt + TimeDelta::seconds(secs)
}

pub fn is_leap_year (year: i32)->bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month (year: i32, month: u32)->u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => if is_leap_year(year) { 29 } else { 28 },
        _ => 0
    }
}

pub fn utc_datetime (year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32)->Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms( year, month, day, hour, min, sec).single()
}

/// a UTC date at 00:00:00 for which a day-of-month beyond the end of the month is clamped to the last day
/// of that month (e.g. `2023,2,31` -> `2023-02-28`). Returns `None` for invalid months or a zero day
pub fn clamped_utc_date (year: i32, month: u32, day: u32)->Option<DateTime<Utc>> {
    let max_day = days_in_month( year, month);
    if max_day == 0 || day == 0 { return None }
    utc_datetime( year, month, day.min(max_day), 0, 0, 0)
}

/// convert a SEED BTIME (year, day-of-year, h:m:s and 1/10000 sec ticks) into a DateTime
pub fn from_year_doy (year: i32, doy: u32, hour: u32, min: u32, sec: u32, ticks: u32)->Option<DateTime<Utc>> {
    let date = NaiveDate::from_yo_opt( year, doy)?;
    // some data centers report leap seconds as sec=60 - we just roll them over
    let time = NaiveTime::from_hms_opt( hour, min, sec.min(59))?;
    let dt = DateTime::from_naive_utc_and_offset( NaiveDateTime::new( date, time), Utc);
    let extra = if sec > 59 { 1_000_000_000 } else { 0 };
    Some( dt + TimeDelta::nanoseconds( ticks as i64 * 100_000 + extra))
}

/// parse the date formats used by FDSN web services: `2019-01-01`, `2019-01-01T00:00:00`,
/// `2019-01-01T00:00:00.0000` (any fractional precision), optionally with a trailing `Z`
pub fn parse_fdsn_datetime (s: &str)->Option<DateTime<Utc>> {
    let s = s.trim().trim_end_matches('Z');
    if s.is_empty() { return None }

    if let Ok(ndt) = NaiveDateTime::parse_from_str( s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some( DateTime::from_naive_utc_and_offset( ndt, Utc))
    }
    if let Ok(nd) = NaiveDate::parse_from_str( s, "%Y-%m-%d") {
        return Some( naive_utc_date_to_utc_datetime( nd))
    }
    None
}

/// get a DateTime<Utc> from a NaiveDate that is supposed to be in Utc
pub fn naive_utc_date_to_utc_datetime (nd: NaiveDate) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset( nd.and_time( NaiveTime::MIN), Utc)
}

/// the format we use for FDSN query parameters (microsecond resolution, no zone suffix)
pub fn fdsn_datetime_string (dt: &DateTime<Utc>)->String {
    dt.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// date-only format (some WFCatalog services reject time components)
pub fn fdsn_date_string (dt: &DateTime<Utc>)->String {
    format!("{:04}-{:02}-{:02}", dt.year(), dt.month(), dt.day())
}

//--- support for serde

pub fn deserialize_duration <'a,D>(deserializer: D) -> Result<Duration,D::Error>
    where D: Deserializer<'a>
{
    String::deserialize(deserializer).and_then( |string| {
        parse(string.as_str())
            .map_err( |e| serde::de::Error::custom(format!("{:?}",e)))
    })
}

pub fn serialize_duration<S: Serializer> (dur: &Duration, s: S) -> Result<S::Ok, S::Error>  {
    s.serialize_str( &format!("{}s", dur.as_secs_f64()))
}
