//! Resource client: the five store operations as single network calls.
//!
//! `FoodApi` pairs the pure `FoodClient` with a host-supplied `Transport`.
//! Nothing here retries or times out; every error is returned to the caller,
//! which decides how to contain it.

use tracing::debug;

use crate::client::FoodClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Food, FoodId, FoodInput};

/// Executes one HTTP round-trip.
///
/// Non-2xx responses are returned as data; only failures that produce no
/// response at all are `Err`, as `ApiError::Transport`.
pub trait Transport {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

#[derive(Debug)]
pub struct FoodApi<T> {
    client: FoodClient,
    transport: T,
}

impl<T: Transport> FoodApi<T> {
    pub fn new(client: FoodClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn list_all(&mut self) -> Result<Vec<Food>, ApiError> {
        let request = self.client.build_list_foods();
        let response = self.send(request)?;
        self.client.parse_list_foods(response)
    }

    pub fn get_one(&mut self, id: &FoodId) -> Result<Food, ApiError> {
        let request = self.client.build_get_food(id);
        let response = self.send(request)?;
        self.client.parse_get_food(response)
    }

    pub fn create(&mut self, input: &FoodInput) -> Result<Food, ApiError> {
        let request = self.client.build_create_food(input)?;
        let response = self.send(request)?;
        self.client.parse_create_food(response)
    }

    /// Replaces the full record; there is no partial update.
    pub fn update(&mut self, id: &FoodId, input: &FoodInput) -> Result<Food, ApiError> {
        let request = self.client.build_update_food(id, input)?;
        let response = self.send(request)?;
        self.client.parse_update_food(response)
    }

    /// No client-side existence check; a missing id comes back as `NotFound`.
    pub fn remove(&mut self, id: &FoodId) -> Result<(), ApiError> {
        let request = self.client.build_delete_food(id);
        let response = self.send(request)?;
        self.client.parse_delete_food(response)
    }

    fn send(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.execute(request)?;
        debug!(status = response.status, "received response");
        Ok(response)
    }
}
