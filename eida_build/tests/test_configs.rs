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

use std::io::Write;
use serde::Deserialize;
use eida_build::{load_config_path, find_config_file, EidaBuildError};

#[derive(Deserialize,Debug)]
struct TestConfig {
    name: String,
    n: u32,
}

#[test]
fn test_load_config_path () {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!( file, r#"TestConfig( name: "foo", n: 42 )"#).unwrap();

    let conf: TestConfig = load_config_path( file.path()).unwrap();
    assert_eq!( conf.name, "foo");
    assert_eq!( conf.n, 42);
}

#[test]
fn test_malformed_config () {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!( file, r#"TestConfig( name: 42 )"#).unwrap();

    let res: eida_build::Result<TestConfig> = load_config_path( file.path());
    match res {
        Err(EidaBuildError::RonSerdeError(_)) => {}
        other => panic!("expected RON error, got {other:?}")
    }
}

#[test]
fn test_missing_config () {
    assert!( find_config_file( &None, "no_such_crate", "no_such_config.ron").is_none());
}
