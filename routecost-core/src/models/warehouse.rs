use crate::models::common::Quantity;
use crate::utils::Float;

/// Represents an immutable warehouse snapshot supplied by the hosting store per request.
/// Ids are unique within a request batch, which is the supplier's contract.
#[derive(Clone, Debug)]
pub struct Warehouse {
    /// A warehouse id.
    pub id: String,
    /// Latitude of the warehouse location.
    pub latitude: Float,
    /// Longitude of the warehouse location.
    pub longitude: Float,
    /// Amount of goods in stock.
    pub inventory: Quantity,
}

impl Warehouse {
    /// Creates a new instance of `Warehouse`.
    pub fn new<S: Into<String>>(id: S, latitude: Float, longitude: Float, inventory: Quantity) -> Self {
        Self { id: id.into(), latitude, longitude, inventory }
    }
}
