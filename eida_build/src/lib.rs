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

//! runtime resource management for EIDA tools: the global root dir, the bin context of the
//! running executable and the lookup of RON config files.

use std::{fs, path::{Path,PathBuf}, sync::OnceLock, env};

mod configs;
pub use configs::*;

mod errors;
pub use errors::*;

/* #region bin globals *******************************************************************/

#[derive(Debug)]
pub struct BinContext {
    pub bin_name: String,
    pub bin_crate: String,
    pub proc_id: Option<u32>,
}

impl BinContext {
    pub fn set (bin_name: &str, bin_crate: &str, proc_id: Option<u32>) {
        // a second set is a no-op - only the first (main) caller defines the context
        let _ = BIN_CONTEXT.set( Self{ bin_name: bin_name.to_string(), bin_crate: bin_crate.to_string(), proc_id });
    }
}

pub static BIN_CONTEXT: OnceLock<BinContext> = OnceLock::new();

/// this has to be called (once) from the bin source
#[macro_export]
macro_rules! set_bin_context {
    () => {
        {
            eida_build::BinContext::set( env!("CARGO_BIN_NAME"), env!("CARGO_PKG_NAME"), Some(std::process::id()));
        }
    }
}

// the global root dir of the application, which is invariant after init
static ROOT_DIR: OnceLock<PathBuf> = OnceLock::new();

/// the global root dir: `EIDA_ROOT`, `~/.eida` or the current working dir (in this order)
pub fn root_dir()->&'static PathBuf {
    ROOT_DIR.get_or_init( || {
        if let Ok(root) = env::var("EIDA_ROOT") {
            PathBuf::from(root)
        } else if let Ok(home) = env::var("HOME") {
            Path::new( home.as_str()).join(".eida")
        } else {
            PathBuf::from(".")
        }
    })
}

pub fn file_contents_as_bytes (path: impl AsRef<Path>) -> Result<Vec<u8>> {
    Ok( fs::read( path)? )
}

/// load a RON config from an explicit path (no lookup)
pub fn load_config_path<C,P> (path: P) -> Result<C> where C: for <'a> serde::Deserialize<'a>, P: AsRef<Path> {
    let data = file_contents_as_bytes( path.as_ref())?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}

/* #endregion bin globals */
