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

use chrono::{DateTime,Utc,TimeZone,TimeDelta};
use eida_fdsn::{response::{parse_station_xml, remove_sensitivity, ResponseInventory}, trace::{Trace,Stream,StreamId}};

const STATION_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<FDSNStationXML xmlns="http://www.fdsn.org/xml/station/1" schemaVersion="1.1">
  <Source>GFZ</Source>
  <Network code="GE" startDate="1993-01-01T00:00:00" restrictedStatus="open">
    <Station code="APE" startDate="2004-06-01T00:00:00">
      <Latitude>37.0689</Latitude>
      <Channel code="BHZ" locationCode="" startDate="2012-03-01T00:00:00">
        <SampleRate>20</SampleRate>
        <Response>
          <InstrumentSensitivity>
            <Value>5.9e8</Value>
            <Frequency>1.0</Frequency>
          </InstrumentSensitivity>
        </Response>
      </Channel>
      <Channel code="BHZ" locationCode="10" startDate="2010-01-01T00:00:00" endDate="2015-01-01T00:00:00">
        <SampleRate>20</SampleRate>
      </Channel>
    </Station>
  </Network>
</FDSNStationXML>
"#;

fn t0 ()->DateTime<Utc> { Utc.with_ymd_and_hms( 2019, 2, 1, 10, 0, 0).unwrap() }

fn trace (location: &str, start: DateTime<Utc>, data: Vec<f64>)->Trace {
    Trace::new( StreamId::new( "GE", "APE", location, "BHZ"), start, 1.0, data)
}

#[test]
fn test_parse_station_xml () {
    let inv = parse_station_xml( STATION_XML).unwrap();
    assert_eq!( inv.channels.len(), 2);

    let c0 = &inv.channels[0];
    assert_eq!( (c0.network.as_str(), c0.station.as_str(), c0.location.as_str(), c0.channel.as_str()), ("GE", "APE", "", "BHZ"));
    assert_eq!( c0.sensitivity, Some(5.9e8));
    assert!( c0.end.is_none());

    let c1 = &inv.channels[1];
    assert_eq!( c1.location, "10");
    assert_eq!( c1.sensitivity, None);
    assert!( !c1.covers( &t0()));
}

#[test]
fn test_remove_sensitivity () {
    let inv = parse_station_xml( STATION_XML).unwrap();

    let mut tr = trace( "", t0(), vec![5.9e8, -1.18e9]);
    remove_sensitivity( &mut tr, &inv).unwrap();
    assert_eq!( tr.data, vec![1.0, -2.0]);

    // no response for this epoch
    let mut tr = trace( "10", t0(), vec![1.0]);
    assert!( remove_sensitivity( &mut tr, &inv).is_err());

    // no matching channel at all
    let mut tr = trace( "00", t0(), vec![1.0]);
    assert!( remove_sensitivity( &mut tr, &ResponseInventory::default()).is_err());
    assert_eq!( tr.data, vec![1.0]);
}

#[test]
fn test_trace_trim () {
    let mut tr = trace( "", t0(), (0..100).map( |i| i as f64).collect());
    assert_eq!( tr.duration_secs(), 99.0);

    let start = t0() + TimeDelta::seconds(10);
    let end = t0() + TimeDelta::seconds(20);
    tr.trim( &start, &end);

    assert_eq!( tr.start, start);
    assert_eq!( tr.npts(), 11);
    assert_eq!( tr.data[0], 10.0);
    assert_eq!( tr.end(), end);
}

#[test]
fn test_stream_trim () {
    let mut stream = Stream::from_traces( vec![
        trace( "00", t0(), vec![0.0; 60]),
        trace( "10", t0() + TimeDelta::seconds(600), vec![0.0; 60]),
    ]);

    stream.trim( &t0(), &(t0() + TimeDelta::seconds(300)));
    assert_eq!( stream.len(), 1);
    assert_eq!( stream.traces[0].id.location, "00");
}
