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

//! EIDA token handling. A token is a PGP signed message issued by the EIDA authentication service.
//! Scans exclude restricted streams so tokens are only checked, not exchanged for credentials

use std::path::Path;
use eida_common::fs::filepath_contents_as_string;
use crate::errors::{Result,op_failed};

const TOKEN_MARKER: &str = "BEGIN PGP SIGNED MESSAGE";

/// read and sanity check a token file
pub fn read_token (path: &Path)->Result<String> {
    let token = filepath_contents_as_string( &path)?;
    validate_token( &token)?;
    Ok(token)
}

pub fn validate_token (token: &str)->Result<()> {
    if token.contains( TOKEN_MARKER) {
        Ok(())
    } else {
        Err( op_failed("not an EIDA token (no PGP signed message)"))
    }
}
