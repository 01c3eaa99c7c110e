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

//! decoder for miniSEED (SEED 2.4 data-only) records as returned by FDSN dataselect services.
//! Supports INT16, INT32, FLOAT32, FLOAT64, Steim-1 and Steim-2 payloads in both byte orders

use chrono::{DateTime,Utc};
use eida_common::datetime::{from_year_doy, add_secs_f64};
use crate::errors::{Result, mseed_error};

const FIXED_HEADER_LEN: usize = 48;
const STEIM_FRAME_LEN: usize = 64;
const MIN_RECORD_LEN: usize = 128;

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum ByteOrder { Big, Little }

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum Encoding { Int16, Int32, Float32, Float64, Steim1, Steim2 }

impl Encoding {
    pub fn from_code (code: u8)->Option<Encoding> {
        match code {
            1 => Some(Encoding::Int16),
            3 => Some(Encoding::Int32),
            4 => Some(Encoding::Float32),
            5 => Some(Encoding::Float64),
            10 => Some(Encoding::Steim1),
            11 => Some(Encoding::Steim2),
            _ => None
        }
    }
}

/// a decoded data record
#[derive(Debug,Clone)]
pub struct MseedRecord {
    pub network: String,
    pub station: String,
    pub location: String,
    pub channel: String,
    pub quality: char,
    pub start: DateTime<Utc>,
    pub sample_rate: f64,
    pub encoding: Encoding,
    pub samples: Vec<f64>,
}

impl MseedRecord {
    pub fn num_samples (&self)->usize { self.samples.len() }
}

/* #region byte readers *******************************************************************/

struct Reader<'a> {
    buf: &'a [u8],
    order: ByteOrder,
}

impl<'a> Reader<'a> {
    fn new (buf: &'a [u8], order: ByteOrder)->Self { Reader { buf, order } }

    fn bytes<const N: usize> (&self, off: usize)->Result<[u8;N]> {
        self.buf.get( off..off+N)
            .and_then( |s| s.try_into().ok())
            .ok_or_else( || mseed_error!("read past end of record at offset {}", off))
    }

    fn u8 (&self, off: usize)->Result<u8> { Ok( self.bytes::<1>(off)?[0]) }

    fn u16 (&self, off: usize)->Result<u16> {
        let b = self.bytes::<2>(off)?;
        Ok( match self.order { ByteOrder::Big => u16::from_be_bytes(b), ByteOrder::Little => u16::from_le_bytes(b) })
    }

    fn i16 (&self, off: usize)->Result<i16> { Ok( self.u16(off)? as i16) }

    fn u32 (&self, off: usize)->Result<u32> {
        let b = self.bytes::<4>(off)?;
        Ok( match self.order { ByteOrder::Big => u32::from_be_bytes(b), ByteOrder::Little => u32::from_le_bytes(b) })
    }

    fn i32 (&self, off: usize)->Result<i32> { Ok( self.u32(off)? as i32) }

    fn f32 (&self, off: usize)->Result<f32> { Ok( f32::from_bits( self.u32(off)?)) }

    fn f64 (&self, off: usize)->Result<f64> {
        let b = self.bytes::<8>(off)?;
        Ok( match self.order { ByteOrder::Big => f64::from_be_bytes(b), ByteOrder::Little => f64::from_le_bytes(b) })
    }

    fn ascii (&self, off: usize, len: usize)->Result<String> {
        let s = self.buf.get( off..off+len).ok_or_else( || mseed_error!("read past end of record at offset {}", off))?;
        Ok( String::from_utf8_lossy( s).trim().to_string())
    }
}

/* #endregion byte readers */

/// header byte order is not flagged explicitly - we check which order yields a plausible start time
fn detect_header_order (rec: &[u8])->Result<ByteOrder> {
    let plausible = |order: ByteOrder| -> Result<bool> {
        let r = Reader::new( rec, order);
        let year = r.u16(20)?;
        let doy = r.u16(22)?;
        Ok( (1900..=2100).contains(&year) && (1..=366).contains(&doy))
    };

    if plausible( ByteOrder::Big)? {
        Ok(ByteOrder::Big)
    } else if plausible( ByteOrder::Little)? {
        Ok(ByteOrder::Little)
    } else {
        Err( mseed_error!("not a miniSEED record (implausible start time)"))
    }
}

/// SEED sample rate from factor and multiplier
pub fn nominal_sample_rate (factor: i16, multiplier: i16)->f64 {
    let f = factor as f64;
    let m = multiplier as f64;
    match (factor, multiplier) {
        (0,_) | (_,0) => 0.0,
        (f_,m_) if f_ > 0 && m_ > 0 => f * m,
        (f_,m_) if f_ > 0 && m_ < 0 => -f / m,
        (f_,m_) if f_ < 0 && m_ > 0 => -m / f,
        _ => 1.0 / (f * m)
    }
}

struct Blockettes {
    encoding: Option<u8>,
    data_order: Option<ByteOrder>,
    record_len: Option<usize>,
    actual_rate: Option<f64>,
}

fn read_blockettes (r: &Reader, first: usize)->Result<Blockettes> {
    let mut b = Blockettes { encoding: None, data_order: None, record_len: None, actual_rate: None };
    let mut off = first;

    while off != 0 && off + 4 <= r.buf.len() {
        let btype = r.u16(off)?;
        let next = r.u16(off+2)? as usize;

        match btype {
            1000 => {
                b.encoding = Some( r.u8(off+4)?);
                b.data_order = Some( if r.u8(off+5)? == 0 { ByteOrder::Little } else { ByteOrder::Big });
                let exp = r.u8(off+6)? as u32;
                if !(7..=16).contains(&exp) { return Err( mseed_error!("invalid record length exponent {}", exp)) }
                b.record_len = Some( 1usize << exp);
            }
            100 => {
                b.actual_rate = Some( r.f32(off+4)? as f64);
            }
            _ => {}
        }

        if next <= off { break } // no more blockettes (or a loop)
        off = next;
    }
    Ok(b)
}

/// parse the record at the beginning of `data`. Returns the record and its length in bytes
pub fn parse_record (data: &[u8])->Result<(MseedRecord,usize)> {
    if data.len() < FIXED_HEADER_LEN {
        return Err( mseed_error!("truncated record header ({} bytes)", data.len()))
    }
    let order = detect_header_order( data)?;
    let r = Reader::new( data, order);

    let quality = r.u8(6)? as char;
    if !matches!( quality, 'D' | 'R' | 'Q' | 'M') {
        return Err( mseed_error!("invalid data quality indicator {:?}", quality))
    }

    let station = r.ascii( 8, 5)?;
    let location = r.ascii( 13, 2)?;
    let channel = r.ascii( 15, 3)?;
    let network = r.ascii( 18, 2)?;

    let start = from_year_doy( r.u16(20)? as i32, r.u16(22)? as u32, r.u8(24)? as u32, r.u8(25)? as u32, r.u8(26)? as u32, r.u16(28)? as u32)
        .ok_or_else( || mseed_error!("invalid start time in {}.{}", network, station))?;

    let num_samples = r.u16(30)? as usize;
    let rate_factor = r.i16(32)?;
    let rate_mult = r.i16(34)?;
    let activity = r.u8(36)?;
    let time_correction = r.i32(40)?;
    let data_offset = r.u16(44)? as usize;
    let first_blockette = r.u16(46)? as usize;

    let blockettes = read_blockettes( &r, first_blockette)?;
    let record_len = blockettes.record_len.ok_or_else( || mseed_error!("no blockette 1000 in {}.{}", network, station))?;
    if record_len > data.len() {
        return Err( mseed_error!("truncated record: {} of {} bytes", data.len(), record_len))
    }
    let encoding_code = blockettes.encoding.unwrap_or(0);
    let encoding = Encoding::from_code( encoding_code).ok_or_else( || mseed_error!("unsupported encoding {}", encoding_code))?;
    let data_order = blockettes.data_order.unwrap_or( order);

    // time correction is in 0.0001 sec and only applied if the 'time correction applied' flag is not set
    let start = if time_correction != 0 && (activity & 0x02) == 0 {
        add_secs_f64( &start, time_correction as f64 * 0.0001)
    } else {
        start
    };

    let sample_rate = match blockettes.actual_rate {
        Some(rate) if rate > 0.0 => rate,
        _ => nominal_sample_rate( rate_factor, rate_mult)
    };

    let samples = if num_samples == 0 {
        Vec::new()
    } else {
        if data_offset < FIXED_HEADER_LEN || data_offset >= record_len {
            return Err( mseed_error!("invalid data offset {}", data_offset))
        }
        decode_payload( &data[data_offset..record_len], encoding, data_order, num_samples)?
    };

    let rec = MseedRecord { network, station, location, channel, quality, start, sample_rate, encoding, samples };
    Ok( (rec, record_len) )
}

/// parse all records of a dataselect response. Records without samples (or without a sample rate)
/// are skipped since they do not contribute to a time series
pub fn parse_records (data: &[u8])->Result<Vec<MseedRecord>> {
    let mut records = Vec::new();
    let mut off = 0;

    while off < data.len() {
        let rest = &data[off..];
        if rest.len() < MIN_RECORD_LEN && rest.iter().all( |b| *b == 0 || *b == b' ') {
            break // padding
        }
        let (rec, len) = parse_record( rest)?;
        if !rec.samples.is_empty() && rec.sample_rate > 0.0 {
            records.push( rec);
        }
        off += len;
    }

    Ok(records)
}

/* #region payload decoding ***************************************************************/

pub fn decode_payload (payload: &[u8], encoding: Encoding, order: ByteOrder, n: usize)->Result<Vec<f64>> {
    let r = Reader::new( payload, order);

    match encoding {
        Encoding::Int16 => (0..n).map( |i| r.i16( i*2).map( |v| v as f64)).collect(),
        Encoding::Int32 => (0..n).map( |i| r.i32( i*4).map( |v| v as f64)).collect(),
        Encoding::Float32 => (0..n).map( |i| r.f32( i*4).map( |v| v as f64)).collect(),
        Encoding::Float64 => (0..n).map( |i| r.f64( i*8)).collect(),
        Encoding::Steim1 => decode_steim( &r, n, false),
        Encoding::Steim2 => decode_steim( &r, n, true),
    }
}

#[inline]
fn sign_extend (v: u32, bits: u32)->i32 {
    let shift = 32 - bits;
    ((v << shift) as i32) >> shift
}

/// push `count` packed differences of `bits` width each (most significant first)
fn push_packed (diffs: &mut Vec<i32>, word: u32, count: u32, bits: u32) {
    let mask = if bits == 32 { u32::MAX } else { (1u32 << bits) - 1 };
    for j in 0..count {
        let shift = (count - 1 - j) * bits;
        diffs.push( sign_extend( (word >> shift) & mask, bits));
    }
}

/// decode Steim-1/2 compressed frames. Each 64 byte frame has a control word with 2 bit nibbles
/// for the 15 following words. The first frame carries the forward (X0) and reverse (Xn)
/// integration constants in words 1 and 2
fn decode_steim (r: &Reader, n: usize, is_steim2: bool)->Result<Vec<f64>> {
    let n_frames = r.buf.len() / STEIM_FRAME_LEN;
    let mut diffs: Vec<i32> = Vec::with_capacity( n + 8);
    let mut x0: i32 = 0;

    'frames: for frame in 0..n_frames {
        let base = frame * STEIM_FRAME_LEN;
        let ctrl = r.u32( base)?;

        for i in 1..16 {
            let word = r.u32( base + i*4)?;
            if frame == 0 && i == 1 { x0 = word as i32; continue }
            if frame == 0 && i == 2 { continue } // Xn - we don't verify the reverse constant

            let nib = (ctrl >> (30 - 2*i)) & 0x3;
            let dnib = word >> 30;
            match (nib, is_steim2) {
                (0, _) => {} // non-data
                (1, _) => push_packed( &mut diffs, word, 4, 8),
                (2, false) => push_packed( &mut diffs, word, 2, 16),
                (3, false) => diffs.push( word as i32),
                (2, true) => match dnib {
                    1 => push_packed( &mut diffs, word & 0x3fff_ffff, 1, 30),
                    2 => push_packed( &mut diffs, word & 0x3fff_ffff, 2, 15),
                    3 => push_packed( &mut diffs, word & 0x3fff_ffff, 3, 10),
                    _ => return Err( mseed_error!("invalid Steim-2 dnib {} for nibble 2", dnib))
                },
                (3, true) => match dnib {
                    0 => push_packed( &mut diffs, word & 0x3fff_ffff, 5, 6),
                    1 => push_packed( &mut diffs, word & 0x3fff_ffff, 6, 5),
                    2 => push_packed( &mut diffs, word & 0x3fff_ffff, 7, 4),
                    _ => return Err( mseed_error!("invalid Steim-2 dnib {} for nibble 3", dnib))
                },
                _ => unreachable!() // nib is 2 bits
            }

            if diffs.len() >= n { break 'frames }
        }
    }

    if diffs.len() < n {
        return Err( mseed_error!("Steim frames contain {} of {} samples", diffs.len(), n))
    }

    // the first difference refers to the last sample of the previous record - X0 replaces it
    let mut samples = Vec::with_capacity(n);
    let mut x = x0;
    samples.push( x as f64);
    for d in &diffs[1..n] {
        x = x.wrapping_add(*d);
        samples.push( x as f64);
    }
    Ok(samples)
}

/* #endregion payload decoding */
