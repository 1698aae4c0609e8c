#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use lively_client::config::ServerSection;
use lively_client::Endpoint;

#[test]
fn default_endpoint_uses_https_and_transport_path() {
    let ep = Endpoint::from_server(&ServerSection::default()).unwrap();
    assert_eq!(ep.url.as_str(), "https://matt.engagelively.com/lively-socket.io/");
    assert_eq!(ep.namespace, "/l2l");
    assert_eq!(ep.token, "incorrect");
}

#[test]
fn ws_maps_to_http_and_path_gets_trailing_slash() {
    let server = ServerSection {
        url: "ws://localhost:9011".into(),
        path: "/a/b/".into(),
        ..ServerSection::default()
    };
    let ep = Endpoint::from_server(&server).unwrap();
    assert_eq!(ep.url.as_str(), "http://localhost:9011/a/b/");
}

#[test]
fn http_scheme_kept() {
    let server = ServerSection {
        url: "https://example.com/ignored".into(),
        path: "/".into(),
        ..ServerSection::default()
    };
    let ep = Endpoint::from_server(&server).unwrap();
    assert_eq!(ep.url.as_str(), "https://example.com/");
}

#[test]
fn endpoint_and_validation_share_scheme_check() {
    let server = ServerSection {
        url: "ftp://example.com/".into(),
        ..ServerSection::default()
    };
    let from_endpoint = Endpoint::from_server(&server).expect_err("ftp must fail");
    let from_validate = server.validate().expect_err("ftp must fail");
    assert_eq!(from_endpoint.to_string(), from_validate.to_string());
    assert_eq!(from_endpoint.code().as_str(), "BAD_CONFIG");
}
