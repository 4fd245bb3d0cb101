mod delete;

use actix_http::Request;
use actix_web::{test, HttpMessage};
use entities::admin;

const BOUNDARY: &str = "----church-backend-test-boundary";

fn multipart_body(field_name: &str, content_type: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"upload.bin\"\r\n",
            field_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub(crate) fn upload_request(
    uri: &str,
    admin: Option<admin::Model>,
    field_name: &str,
    content_type: &str,
    content: &[u8],
) -> Request {
    let req = test::TestRequest::post()
        .uri(uri)
        .insert_header((
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        ))
        .set_payload(multipart_body(field_name, content_type, content))
        .to_request();
    if let Some(admin) = admin {
        req.extensions_mut().insert(admin);
    }
    req
}
