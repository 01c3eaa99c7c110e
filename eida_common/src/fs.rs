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

use std::fs::{self,File};
use std::io::{self,Read,ErrorKind};
use std::env;
use std::path::{Path,PathBuf};
use io::ErrorKind::*;

use crate::macros::io_error;

type Result<T> = std::result::Result<T,std::io::Error>;

/// check if dir pathname exists and is writable, try to create dir otherwise
pub fn ensure_writable_dir (path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        let md = fs::metadata(&path)?;
        if md.permissions().readonly() {
            Err(io_error!(PermissionDenied, "output_dir {:?} not writable", &path))
        } else {
            Ok(())
        }
    } else {
        fs::create_dir_all(path)
    }
}

/// make sure the parent directory of a file path exists
pub fn ensure_parent_dir (path: impl AsRef<Path>) -> io::Result<()> {
    match path.as_ref().parent() {
        Some(dir) if !dir.as_os_str().is_empty() => ensure_writable_dir( dir),
        _ => Ok(())
    }
}

/// expand a leading `~` into the value of `$HOME` (if set)
pub fn expand_home (path: &str)->PathBuf {
    if let Some(rest) = path.strip_prefix("~") {
        if let Ok(home) = env::var("HOME") {
            return Path::new( home.as_str()).join( rest.trim_start_matches('/'))
        }
    }
    PathBuf::from(path)
}

pub fn filepath_contents_as_string <P: AsRef<Path>> (path: &P) -> Result<String> {
    fs::read_to_string( path)
}

/// all existing files matching the given glob pattern, sorted by path name
pub fn glob_files (pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob( pattern).map_err(|e| io_error!(InvalidInput, "invalid glob pattern {}: {}", pattern, e))?;
    let mut files: Vec<PathBuf> = paths.filter_map(|p| p.ok()).filter(|p| p.is_file()).collect();
    files.sort();
    Ok(files)
}
