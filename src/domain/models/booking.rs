use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::{types::Json, FromRow};
use std::fmt;
use std::str::FromStr;
use crate::domain::models::package::Package;
use crate::domain::services::schema::Schema;
use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl FromStr for BookingStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            "completed" => Ok(BookingStatus::Completed),
            _ => Err(()),
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Customer {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Travelers {
    pub adults: i32,
    pub children: i32,
}

impl Default for Travelers {
    fn default() -> Self {
        Self { adults: 1, children: 0 }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "package")]
    pub package_id: String,
    pub customer: Json<Customer>,
    pub travelers: Json<Travelers>,
    #[serde(rename = "travelDate")]
    pub travel_date: DateTime<Utc>,
    #[serde(rename = "totalAmount", skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    pub status: BookingStatus,
    #[serde(rename = "specialRequests", skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Booking with its package reference resolved. A dangling reference
/// serializes as `"package": null`.
#[derive(Debug, Serialize, Clone)]
pub struct BookingView {
    #[serde(rename = "_id")]
    pub id: String,
    pub package: Option<Package>,
    pub customer: Customer,
    pub travelers: Travelers,
    #[serde(rename = "travelDate")]
    pub travel_date: DateTime<Utc>,
    #[serde(rename = "totalAmount", skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    pub status: BookingStatus,
    #[serde(rename = "specialRequests", skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn with_package(self, package: Option<Package>) -> BookingView {
        BookingView {
            id: self.id,
            package,
            customer: self.customer.0,
            travelers: self.travelers.0,
            travel_date: self.travel_date,
            total_amount: self.total_amount,
            status: self.status,
            special_requests: self.special_requests,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct CustomerDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct TravelersDraft {
    pub adults: Option<i32>,
    pub children: Option<i32>,
}

#[derive(Debug, Deserialize, Default)]
pub struct BookingDraft {
    pub package: Option<String>,
    pub customer: Option<CustomerDraft>,
    pub travelers: Option<TravelersDraft>,
    #[serde(rename = "travelDate")]
    pub travel_date: Option<String>,
    #[serde(rename = "totalAmount")]
    pub total_amount: Option<f64>,
    #[serde(rename = "specialRequests")]
    pub special_requests: Option<String>,
}

impl BookingDraft {
    /// Intake only: every new booking starts out pending.
    pub fn into_booking(self) -> Result<Booking, AppError> {
        let mut schema = Schema::new("Booking");
        let package_id = schema.required_text("package", self.package);
        let customer = self.customer.unwrap_or_default();
        let name = schema.required_text("customer.name", customer.name);
        let email = schema.required_text("customer.email", customer.email);
        let travel_date = schema.required_date("travelDate", self.travel_date);
        schema.finish()?;

        let defaults = Travelers::default();
        let travelers = self.travelers.unwrap_or_default();

        Ok(Booking {
            id: Uuid::new_v4().to_string(),
            package_id,
            customer: Json(Customer {
                name,
                email,
                phone: customer.phone,
                address: customer.address,
            }),
            travelers: Json(Travelers {
                adults: travelers.adults.unwrap_or(defaults.adults),
                children: travelers.children.unwrap_or(defaults.children),
            }),
            travel_date: travel_date.unwrap_or_else(Utc::now),
            total_amount: self.total_amount,
            status: BookingStatus::Pending,
            special_requests: self.special_requests,
            created_at: Utc::now(),
        })
    }
}
