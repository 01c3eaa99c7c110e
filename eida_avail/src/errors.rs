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
use eida_fdsn::FetchError;
use eida_common::json::JsonFileError;

pub type Result<T> = std::result::Result<T,AvailError>;

#[derive(Error,Debug)]
pub enum AvailError {
    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("fetch error {0}")]
    FetchError( #[from] FetchError),

    #[error("JSON file error {0}")]
    JsonFileError( #[from] JsonFileError),

    #[error("serde error {0}")]
    SerdeError( #[from] serde_json::Error),

    #[error("image error {0}")]
    ImageError( #[from] image::ImageError),

    #[error("config error {0}")]
    ConfigError(String),

    #[error("operation failed {0}")]
    OpFailedError(String)
}

pub fn op_failed (msg: impl ToString)->AvailError {
    AvailError::OpFailedError(msg.to_string())
}

macro_rules! config_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        crate::errors::AvailError::ConfigError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use config_error;
