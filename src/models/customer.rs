use serde::{Deserialize, Serialize};

use crate::error::CustomerError;
use crate::geo::{euclidean_blocks, manhattan_blocks, BlockPoint};

const MAX_NAME_CHARS: usize = 20;
const MOBILE_NUMBER_LEN: usize = 10;

/// How an order reaches the customer. Fixes both the location rule and the
/// distance metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomerKind {
    #[serde(rename = "Pick Up")]
    PickUp,
    #[serde(rename = "Driver Delivery")]
    DriverDelivery,
    #[serde(rename = "Drone Delivery")]
    DroneDelivery,
}

impl CustomerKind {
    pub fn label(&self) -> &'static str {
        match self {
            CustomerKind::PickUp => "Pick Up",
            CustomerKind::DriverDelivery => "Driver Delivery",
            CustomerKind::DroneDelivery => "Drone Delivery",
        }
    }

    /// Three-letter code used for this kind in order logs.
    pub fn code(&self) -> &'static str {
        match self {
            CustomerKind::PickUp => "PUC",
            CustomerKind::DriverDelivery => "DVC",
            CustomerKind::DroneDelivery => "DNC",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, CustomerError> {
        match code {
            "PUC" => Ok(CustomerKind::PickUp),
            "DVC" => Ok(CustomerKind::DriverDelivery),
            "DNC" => Ok(CustomerKind::DroneDelivery),
            other => Err(CustomerError::UnknownCode(other.to_string())),
        }
    }

    fn accepts(&self, location: &BlockPoint) -> bool {
        match self {
            CustomerKind::PickUp => location.is_origin(),
            CustomerKind::DriverDelivery | CustomerKind::DroneDelivery => !location.is_origin(),
        }
    }
}

impl std::fmt::Display for CustomerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for CustomerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pick Up" => Ok(CustomerKind::PickUp),
            "Driver Delivery" => Ok(CustomerKind::DriverDelivery),
            "Drone Delivery" => Ok(CustomerKind::DroneDelivery),
            _ => Err(format!("unknown customer type: {s}")),
        }
    }
}

/// A validated customer of the restaurant.
///
/// Every field is checked once in [`Customer::new`] and is read-only afterwards,
/// so a `Customer` value always satisfies the rules of its [`CustomerKind`].
/// Equality compares the five observable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CustomerRecord", into = "CustomerRecord")]
pub struct Customer {
    name: String,
    mobile_number: String,
    location: BlockPoint,
    kind: CustomerKind,
}

impl Customer {
    /// Checks, in order: name, mobile number, distance bounds, then the
    /// location rule of `kind`. The first failing check is reported.
    pub fn new(
        name: impl Into<String>,
        mobile_number: impl Into<String>,
        location_x: i32,
        location_y: i32,
        kind: CustomerKind,
    ) -> Result<Self, CustomerError> {
        let name = name.into();
        let mobile_number = mobile_number.into();
        let location = BlockPoint::new(location_x, location_y);

        validate_name(&name)?;
        validate_mobile_number(&mobile_number)?;

        if !location.within_range() {
            return Err(CustomerError::TooFarAway {
                x: location_x,
                y: location_y,
            });
        }

        if !kind.accepts(&location) {
            return Err(CustomerError::InvalidLocation {
                kind,
                x: location_x,
                y: location_y,
            });
        }

        Ok(Self {
            name,
            mobile_number,
            location,
            kind,
        })
    }

    pub fn pick_up(
        name: impl Into<String>,
        mobile_number: impl Into<String>,
        location_x: i32,
        location_y: i32,
    ) -> Result<Self, CustomerError> {
        Self::new(name, mobile_number, location_x, location_y, CustomerKind::PickUp)
    }

    pub fn driver_delivery(
        name: impl Into<String>,
        mobile_number: impl Into<String>,
        location_x: i32,
        location_y: i32,
    ) -> Result<Self, CustomerError> {
        Self::new(
            name,
            mobile_number,
            location_x,
            location_y,
            CustomerKind::DriverDelivery,
        )
    }

    pub fn drone_delivery(
        name: impl Into<String>,
        mobile_number: impl Into<String>,
        location_x: i32,
        location_y: i32,
    ) -> Result<Self, CustomerError> {
        Self::new(
            name,
            mobile_number,
            location_x,
            location_y,
            CustomerKind::DroneDelivery,
        )
    }

    /// Builds a customer from a log customer code (`PUC`, `DVC` or `DNC`).
    pub fn from_code(
        code: &str,
        name: impl Into<String>,
        mobile_number: impl Into<String>,
        location_x: i32,
        location_y: i32,
    ) -> Result<Self, CustomerError> {
        let kind = CustomerKind::from_code(code)?;
        Self::new(name, mobile_number, location_x, location_y, kind)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mobile_number(&self) -> &str {
        &self.mobile_number
    }

    pub fn location_x(&self) -> i32 {
        self.location.x
    }

    pub fn location_y(&self) -> i32 {
        self.location.y
    }

    pub fn location(&self) -> BlockPoint {
        self.location
    }

    pub fn kind(&self) -> CustomerKind {
        self.kind
    }

    pub fn customer_type(&self) -> &'static str {
        self.kind.label()
    }

    /// Blocks travelled to deliver to this customer: zero for pick up, grid
    /// distance for a driver, straight-line distance for a drone.
    pub fn delivery_distance(&self) -> f64 {
        match self.kind {
            CustomerKind::PickUp => 0.0,
            CustomerKind::DriverDelivery => manhattan_blocks(&BlockPoint::ORIGIN, &self.location),
            CustomerKind::DroneDelivery => euclidean_blocks(&BlockPoint::ORIGIN, &self.location),
        }
    }
}

fn validate_name(name: &str) -> Result<(), CustomerError> {
    let chars = name.chars().count();
    if chars == 0 || chars > MAX_NAME_CHARS || name.trim().is_empty() {
        return Err(CustomerError::InvalidName(name.to_string()));
    }

    Ok(())
}

fn validate_mobile_number(mobile_number: &str) -> Result<(), CustomerError> {
    if mobile_number.chars().count() != MOBILE_NUMBER_LEN || !mobile_number.starts_with('0') {
        return Err(CustomerError::InvalidMobileNumber(mobile_number.to_string()));
    }

    Ok(())
}

#[derive(Serialize, Deserialize)]
struct CustomerRecord {
    name: String,
    mobile_number: String,
    location_x: i32,
    location_y: i32,
    customer_type: CustomerKind,
}

impl TryFrom<CustomerRecord> for Customer {
    type Error = CustomerError;

    fn try_from(record: CustomerRecord) -> Result<Self, Self::Error> {
        Customer::new(
            record.name,
            record.mobile_number,
            record.location_x,
            record.location_y,
            record.customer_type,
        )
    }
}

impl From<Customer> for CustomerRecord {
    fn from(customer: Customer) -> Self {
        Self {
            name: customer.name,
            mobile_number: customer.mobile_number,
            location_x: customer.location.x,
            location_y: customer.location.y,
            customer_type: customer.kind,
        }
    }
}
