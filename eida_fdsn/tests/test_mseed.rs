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

use chrono::{DateTime,Utc,TimeZone,Timelike};
use eida_fdsn::{mseed::{parse_record, parse_records, nominal_sample_rate, Encoding}, trace::Stream, merge_routed_waveforms, FetchError};

const RECORD_LEN: usize = 512;
const DATA_OFFSET: usize = 64;

/// a big endian 512 byte record of GE.APE.00.BHZ starting 2019-02-01 (doy 32) at 00:00:sec.ticks, 20Hz
fn record (sec: u8, ticks: u16, location: &[u8;2], encoding: u8, n: u16, payload: &[u8])->Vec<u8> {
    let mut rec = vec![0u8; RECORD_LEN];
    rec[0..6].copy_from_slice( b"000001");
    rec[6] = b'D';
    rec[7] = b' ';
    rec[8..13].copy_from_slice( b"APE  ");
    rec[13..15].copy_from_slice( location);
    rec[15..18].copy_from_slice( b"BHZ");
    rec[18..20].copy_from_slice( b"GE");
    rec[20..22].copy_from_slice( &2019u16.to_be_bytes());
    rec[22..24].copy_from_slice( &32u16.to_be_bytes());
    rec[26] = sec;
    rec[28..30].copy_from_slice( &ticks.to_be_bytes());
    rec[30..32].copy_from_slice( &n.to_be_bytes());
    rec[32..34].copy_from_slice( &20i16.to_be_bytes());
    rec[34..36].copy_from_slice( &1i16.to_be_bytes());
    rec[39] = 1; // number of blockettes
    rec[44..46].copy_from_slice( &(DATA_OFFSET as u16).to_be_bytes());
    rec[46..48].copy_from_slice( &48u16.to_be_bytes());

    // blockette 1000
    rec[48..50].copy_from_slice( &1000u16.to_be_bytes());
    rec[52] = encoding;
    rec[53] = 1; // big endian
    rec[54] = 9; // 2^9 = 512

    rec[DATA_OFFSET..DATA_OFFSET+payload.len()].copy_from_slice( payload);
    rec
}

fn int32_payload (vs: &[i32])->Vec<u8> {
    vs.iter().flat_map( |v| v.to_be_bytes()).collect()
}

fn words (ws: &[u32])->Vec<u8> {
    ws.iter().flat_map( |w| w.to_be_bytes()).collect()
}

#[test]
fn test_sample_rate () {
    assert_eq!( nominal_sample_rate( 20, 1), 20.0);
    assert_eq!( nominal_sample_rate( 1, -10), 0.1);
    assert_eq!( nominal_sample_rate( -10, 1), 0.1);
    assert_eq!( nominal_sample_rate( 0, 1), 0.0);
}

#[test]
fn test_int32_record () {
    let data = record( 0, 0, b"00", 3, 3, &int32_payload( &[1, -2, 300_000]));
    let (rec, len) = parse_record( &data).unwrap();

    assert_eq!( len, RECORD_LEN);
    assert_eq!( rec.network, "GE");
    assert_eq!( rec.station, "APE");
    assert_eq!( rec.location, "00");
    assert_eq!( rec.channel, "BHZ");
    assert_eq!( rec.encoding, Encoding::Int32);
    assert_eq!( rec.sample_rate, 20.0);
    assert_eq!( rec.start, Utc.with_ymd_and_hms( 2019, 2, 1, 0, 0, 0).unwrap());
    assert_eq!( rec.samples, vec![1.0, -2.0, 300_000.0]);
}

#[test]
fn test_steim1_record () {
    // samples 10,12,9,9,15 -> differences (x),2,-3,0,6
    let ctrl = (1u32 << 24) | (1u32 << 22);
    let payload = words( &[
        ctrl,
        10,                                     // X0
        15,                                     // Xn
        u32::from_be_bytes( [0, 2, 0xfd, 0]),   // 4 x 8bit
        u32::from_be_bytes( [6, 0, 0, 0]),
    ]);
    let data = record( 0, 0, b"00", 10, 5, &payload);
    let (rec, _) = parse_record( &data).unwrap();
    assert_eq!( rec.samples, vec![10.0, 12.0, 9.0, 9.0, 15.0]);
}

#[test]
fn test_steim2_record () {
    // samples 100,1100,600 -> differences (x),1000,-500
    let ctrl = (2u32 << 24) | (2u32 << 22);
    let w3 = (2u32 << 30) | 1000;                               // 2 x 15bit: 0, 1000
    let w4 = (1u32 << 30) | ((-500i32 as u32) & 0x3fff_ffff);   // 1 x 30bit
    let payload = words( &[ ctrl, 100, 600, w3, w4 ]);

    let data = record( 0, 0, b"00", 11, 3, &payload);
    let (rec, _) = parse_record( &data).unwrap();
    assert_eq!( rec.encoding, Encoding::Steim2);
    assert_eq!( rec.samples, vec![100.0, 1100.0, 600.0]);
}

#[test]
fn test_invalid_records () {
    assert!( parse_record( &[0u8; 20]).is_err());

    let mut data = record( 0, 0, b"00", 3, 1, &int32_payload( &[1]));
    data[6] = b'X';
    assert!( parse_record( &data).is_err());

    let data = record( 0, 0, b"00", 42, 1, &int32_payload( &[1]));
    assert!( parse_record( &data).is_err());
}

#[test]
fn test_stream_assembly () {
    // two contiguous records (3 samples at 20Hz = 0.15 sec) and one of another location
    let mut data = record( 0, 0, b"00", 3, 3, &int32_payload( &[1, 2, 3]));
    data.extend( record( 0, 1500, b"00", 3, 3, &int32_payload( &[4, 5, 6])));
    data.extend( record( 0, 0, b"10", 3, 2, &int32_payload( &[7, 8])));
    data.extend( vec![0u8; 64]); // padding

    let records = parse_records( &data).unwrap();
    assert_eq!( records.len(), 3);

    let stream = Stream::from_records( records);
    assert_eq!( stream.len(), 2);

    let tr = &stream.traces[0];
    assert_eq!( tr.id.to_string(), "GE.APE.00.BHZ");
    assert_eq!( tr.data, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!( tr.duration_secs(), 0.25);

    assert_eq!( stream.traces[1].id.location, "10");
    assert_eq!( stream.traces[1].data, vec![7.0, 8.0]);
}

#[test]
fn test_gap_splits_trace () {
    let mut data = record( 0, 0, b"00", 3, 3, &int32_payload( &[1, 2, 3]));
    data.extend( record( 1, 0, b"00", 3, 3, &int32_payload( &[4, 5, 6])));

    let stream = Stream::from_mseed( &data).unwrap();
    assert_eq!( stream.len(), 2);
}

#[test]
fn test_routed_waveforms_skip_malformed_data () {
    let good = record( 0, 0, b"00", 3, 3, &int32_payload( &[1, 2, 3]));
    let bad = record( 0, 0, b"10", 42, 1, &int32_payload( &[1]));

    let responses = vec![
        ("http://dc1".to_string(), Ok(good.clone())),
        ("http://dc2".to_string(), Ok(bad.clone())),
        ("http://dc3".to_string(), Err( FetchError::NoData("dc3".to_string()))),
    ];
    let stream = merge_routed_waveforms( responses, "GE.APE.*.BHZ").unwrap();
    assert_eq!( stream.len(), 1);
    assert_eq!( stream.traces[0].data, vec![1.0, 2.0, 3.0]);

    // only malformed data reports the decoding error, only empty responses report no data
    let res = merge_routed_waveforms( vec![ ("http://dc2".to_string(), Ok(bad)) ], "GE.APE.*.BHZ");
    assert!( matches!( res, Err(FetchError::MseedError(_))));

    let res = merge_routed_waveforms( vec![ ("http://dc3".to_string(), Err( FetchError::NoData("dc3".to_string()))) ], "GE.APE.*.BHZ");
    assert!( matches!( res, Err(FetchError::NoData(_))));
}
