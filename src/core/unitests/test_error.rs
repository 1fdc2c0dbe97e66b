use axum::{
    http::StatusCode,
    response::IntoResponse,
};
use crate::Error;

#[test]
fn test_status() {
    assert_eq!(Error::Argument("x".into()).status(), StatusCode::BAD_REQUEST);
    assert_eq!(Error::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
    assert_eq!(Error::Db("x".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(Error::Network("x".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_into_response() {
    let rsp = Error::Argument("malformatted id".into()).into_response();
    assert_eq!(rsp.status(), StatusCode::BAD_REQUEST);

    let ctype = rsp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(ctype.starts_with("application/json"));
}

#[test]
fn test_display() {
    let err = Error::NotFound("blog 42 not found".into());
    assert_eq!(err.to_string(), "blog 42 not found");

    let err: Error = std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
    assert!(matches!(err, Error::Io(_)));
}
