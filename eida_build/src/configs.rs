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

use std::{env, path::{Path,PathBuf}};
use crate::*;

pub const CONFIGS: &'static str = "configs";

/// locate a config file for `resource_crate`. Lookup order is
///  1. `$EIDA_HOME/configs/<bin-crate>/<bin-name>/<resource-crate>/<filename>` (if there is a bin context)
///  2. `$EIDA_HOME/configs/<resource-crate>/<filename>`
///  3. `./configs/<resource-crate>/<filename>`
///  4. `./configs/<filename>`
///  5. `<root-dir>/configs/<resource-crate>/<filename>`
pub fn find_config_file (ctx: &Option<&BinContext>, resource_crate: &str, filename: &str) -> Option<PathBuf> {
    if let Ok(home) = env::var("EIDA_HOME") {
        let base = Path::new( home.as_str()).join( CONFIGS);
        if let Some(ctx) = ctx {
            let path = base.join( &ctx.bin_crate).join( &ctx.bin_name).join( resource_crate).join( filename);
            if path.is_file() { return Some(path) }
        }
        let path = base.join( resource_crate).join( filename);
        if path.is_file() { return Some(path) }
    }

    let local = Path::new( CONFIGS);
    let path = local.join( resource_crate).join( filename);
    if path.is_file() { return Some(path) }

    let path = local.join( filename);
    if path.is_file() { return Some(path) }

    let path = root_dir().join( CONFIGS).join( resource_crate).join( filename);
    if path.is_file() { return Some(path) }

    None
}

/// this is the main macro that needs to be expanded at the top of crates (lib.rs) that define configs.
/// Config users call the defined `load_config(..)` function to instantiate config structs
#[macro_export]
macro_rules! define_load_config {
    () => {
        mod configs {
            use serde::Deserialize;
            use ron;

            /// load config using eida_build - based lookup mechanism
            pub fn load_config<C> (filename: &str) -> eida_build::Result<C> where C: for <'a> serde::Deserialize<'a> {
                let bin_ctx = eida_build::BIN_CONTEXT.get();
                let resource_crate = env!("CARGO_PKG_NAME");

                if let Some(path) = eida_build::find_config_file( &bin_ctx, resource_crate, filename) {
                    eida_build::load_config_path( &path)
                } else {
                    Err( eida_build::EidaBuildError::ResourceNotFoundError( filename.to_string()) )
                }
            }

            /// load config if we find it, fall back to the `Default` of the config type otherwise.
            /// Note that existing but malformed config files are still reported as errors
            pub fn load_config_or_default<C> (filename: &str) -> eida_build::Result<C> where C: for <'a> serde::Deserialize<'a> + Default {
                match load_config( filename) {
                    Ok(conf) => Ok(conf),
                    Err(e) if e.is_not_found() => Ok( C::default()),
                    Err(e) => Err(e)
                }
            }
        }
        pub use configs::*; // make load_config() visible at the crate level
    }
}
