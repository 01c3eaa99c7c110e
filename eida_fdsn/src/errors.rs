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

use thiserror::Error;
use eida_common::net::NetError;

pub type Result<T> = std::result::Result<T,FetchError>;

/// the uniform error type of all remote operations. Each request either produces its value or
/// exactly one of these, which callers are supposed to handle at the call site
#[derive(Error,Debug)]
pub enum FetchError {
    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("net error {0}")]
    NetError( #[from] NetError),

    #[error("reqwest error {0}")]
    ReqwestError( #[from] reqwest::Error),

    #[error("serde error {0}")]
    SerdeError( #[from] serde_json::Error),

    #[error("no route for {0}")]
    NoRoute(String),

    #[error("no data for {0}")]
    NoData(String),

    #[error("parse error {0}")]
    ParseError(String),

    #[error("miniSEED error {0}")]
    MseedError(String),

    #[error("metadata error {0}")]
    MetadataError(String),

    #[error("config error {0}")]
    ConfigError( #[from] eida_build::EidaBuildError),

    #[error("operation failed {0}")]
    OpFailedError(String)
}

impl FetchError {
    /// did the server answer but simply had nothing to return
    pub fn is_no_data (&self)->bool {
        matches!( self, FetchError::NoData(_) | FetchError::NetError( NetError::NoData(_)))
    }
}

pub fn op_failed (msg: impl ToString)->FetchError {
    FetchError::OpFailedError(msg.to_string())
}

macro_rules! parse_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        crate::errors::FetchError::ParseError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use parse_error;

macro_rules! mseed_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        crate::errors::FetchError::MseedError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use mseed_error;
