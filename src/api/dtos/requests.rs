use serde::Deserialize;

#[derive(Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Deserialize)]
pub struct DestinationsPanelQuery {
    pub edit: Option<String>,
}
