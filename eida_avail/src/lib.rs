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

//! sampling based measurement of how much data can actually be retrieved from EIDA data centers.
//!
//! A scan picks random days and hours within the epoch of each channel and tries to retrieve
//! waveforms, response metadata and WFCatalog day metrics for them. The results of one or several
//! scans are then aggregated per station and rendered onto maps

mod errors;
pub use errors::*;

pub mod coverage;
pub mod sampler;
pub mod results;
pub mod scan;
pub mod providers;
pub mod coordinates;
pub mod aggregate;
pub mod render;

pub use results::{ResultKey, ResultTable, ChannelResult};
pub use sampler::{SampleStrategy, RandomSampler, SamplingConfig};
pub use scan::ScanConfig;
pub use providers::ProviderMode;
