use serde::Serialize;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: &str) -> Self {
        Self { status: status.to_string() }
    }
}
