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

use chrono::{Utc,TimeZone};
use eida_fdsn::{
    routing::parse_post_routes, nodes::{EidaNodesConfig, EIDA_ROUTING_URL}, auth::validate_token, FdsnClient, RoutingClient,
    query::{StationQuery, WaveformQuery, MetricsQuery, Level},
};

const ROUTES: &str = "\
http://geofon.gfz-potsdam.de/fdsnws/station/1/query
GE APE * BHZ 2019-01-01T00:00:00 2019-12-31T23:59:59
GE MATE * BHZ 2019-01-01T00:00:00 2019-12-31T23:59:59

http://eida.bgr.de/fdsnws/station/1/query
GR BFO * BHZ 2019-01-01T00:00:00 2019-12-31T23:59:59
";

#[test]
fn test_parse_routes () {
    let routes = parse_post_routes( ROUTES);
    assert_eq!( routes.len(), 2);
    assert_eq!( routes[0].url, "http://geofon.gfz-potsdam.de/fdsnws/station/1/query");
    assert_eq!( routes[0].streams.len(), 2);
    assert_eq!( routes[1].streams[0], "GR BFO * BHZ 2019-01-01T00:00:00 2019-12-31T23:59:59");

    let body = routes[1].post_body( "level=channel\n");
    assert_eq!( body, "level=channel\nGR BFO * BHZ 2019-01-01T00:00:00 2019-12-31T23:59:59\n");

    assert!( parse_post_routes( "\n\n").is_empty());
}

#[test]
fn test_query_params () {
    let start = Utc.with_ymd_and_hms( 2019, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms( 2019, 12, 31, 23, 59, 59).unwrap();

    let q = StationQuery::discovery( "BHZ,HHZ", start, end, Level::Channel);
    let params = q.query_params();
    assert!( params.contains( &("channel", "BHZ,HHZ".to_string())));
    assert!( params.contains( &("includerestricted", "false".to_string())));
    assert!( params.contains( &("format", "text".to_string())));
    assert!( !params.iter().any( |(k,_)| *k == "network"));

    let q = StationQuery::response( "GE", "APE", "BHZ", start, end);
    assert!( q.query_params().contains( &("format", "xml".to_string())));
    assert!( q.post_preamble().starts_with( "level=response\n"));

    let q = WaveformQuery::any_location( "GE", "APE", "BHZ", start, end);
    assert!( q.query_params().contains( &("location", "*".to_string())));
    assert_eq!( q.to_string(), "GE.APE.*.BHZ 2019-01-01T00:00:00.000000 - 2019-12-31T23:59:59.000000");

    let q = MetricsQuery::new( "GE", "APE", "BHZ", start, end);
    let params = q.catalog_params();
    assert!( params.contains( &("start", "2019-01-01".to_string())));
    assert!( params.contains( &("end", "2019-12-31".to_string())));
    assert!( q.route_params().contains( &("format", "post".to_string())));
}

#[test]
fn test_nodes () {
    let config = EidaNodesConfig::default();
    assert_eq!( config.routing_url, EIDA_ROUTING_URL);
    assert_eq!( config.resolve_url( "GFZ").unwrap(), "http://geofon.gfz-potsdam.de");
    assert_eq!( config.resolve_url( "resif").unwrap(), "http://ws.resif.fr");
    assert_eq!( config.resolve_url( "http://eida.geo.uib.no/").unwrap(), "http://eida.geo.uib.no");
    assert!( config.resolve_url( "NOPE").is_err());

    for name in &config.scan_nodes {
        assert!( config.resolve_url( name).is_ok());
    }

    let ron_config: EidaNodesConfig = ron::from_str( r#"(
        routing_url: "http://localhost/routing",
        nodes: [ (name: "LOCAL", url: "http://localhost:8080") ],
        scan_nodes: [ "LOCAL" ]
    )"#).unwrap();
    assert_eq!( ron_config.resolve_url( "LOCAL").unwrap(), "http://localhost:8080");
    assert_eq!( ron_config.request_timeout, std::time::Duration::from_secs(30));

    let ron_config: EidaNodesConfig = ron::from_str( r#"(
        routing_url: "http://localhost/routing",
        request_timeout: "2min",
        nodes: [],
        scan_nodes: []
    )"#).unwrap();
    assert_eq!( ron_config.request_timeout, std::time::Duration::from_secs(120));
}

#[test]
fn test_auth () {
    assert!( validate_token( "-----BEGIN PGP SIGNED MESSAGE-----\nHash: SHA1\n\n{...}").is_ok());
    assert!( validate_token( "not a token").is_err());
}

#[test]
fn test_client_authentication () {
    let token = "-----BEGIN PGP SIGNED MESSAGE-----\nHash: SHA256\n\n{\"valid_until\": \"2030-01-01T00:00:00.000000Z\"}\n";
    let timeout = std::time::Duration::from_secs(5);

    let mut client = FdsnClient::new( "LOCAL", "http://localhost:8080/", EIDA_ROUTING_URL, timeout).unwrap();
    assert_eq!( client.base_url(), "http://localhost:8080");
    assert!( client.authenticate( "not a token").is_err());
    assert!( !client.is_authenticated());
    assert!( client.authenticate( token).is_ok());
    assert!( client.is_authenticated());

    let mut client = RoutingClient::new( EIDA_ROUTING_URL, timeout).unwrap();
    assert!( client.authenticate( "not a token").is_err());
    assert!( !client.is_authenticated());
    assert!( client.authenticate( token).is_ok());
    assert!( client.is_authenticated());
}
