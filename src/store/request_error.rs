use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use rocket::Request;

#[derive(Debug)]
pub enum RequestError {
    InvalidData,
}

impl std::error::Error for RequestError {}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidData => write!(f, "Invalid data"),
        }
    }
}

impl<'r> Responder<'r, 'static> for RequestError {
    fn respond_to(self, request: &'r Request<'_>) -> rocket::response::Result<'static> {
        let body = Json(ApiMessage::new(self.to_string()));
        (Status::BadRequest, body).respond_to(request)
    }
}

pub type RequestResult<T, E = RequestError> = std::result::Result<T, E>;

/// The message envelope both success and error responses use.
#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: String) -> Self {
        Self { message }
    }
}
