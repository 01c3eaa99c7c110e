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

//! JSON file helpers

use std::{fs::File, io::{BufReader,BufWriter,Write}, path::Path};
use serde::{Serialize, de::DeserializeOwned};
use crate::define_error;

define_error!{ pub JsonFileError = 
    IOError(#[from] std::io::Error) : "IO error: {0}",
    SerdeError(#[from] serde_json::Error) : "JSON error: {0}"
}

pub type Result<T> = std::result::Result<T, JsonFileError>;

pub fn read_json_file<T,P> (path: P)->Result<T> where T: DeserializeOwned, P: AsRef<Path> {
    let reader = BufReader::new( File::open( path)?);
    Ok( serde_json::from_reader( reader)? )
}

/// write `data` as compact JSON, creating parent dirs if required
pub fn write_json_file<T,P> (path: P, data: &T)->Result<()> where T: Serialize, P: AsRef<Path> {
    let path = path.as_ref();
    crate::fs::ensure_parent_dir( path)?;
    let mut writer = BufWriter::new( File::create( path)?);
    serde_json::to_writer( &mut writer, data)?;
    writer.flush()?;
    Ok(())
}
