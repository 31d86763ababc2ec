//! Stateless HTTP request builder and response parser for the food API.
//!
//! # Design
//! `FoodClient` holds only the resource URL and carries no mutable state
//! between calls. Each operation is split into a `build_*` method producing an
//! `HttpRequest` and a `parse_*` method consuming an `HttpResponse`. The
//! round-trip in between belongs to a `Transport`.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Food, FoodId, FoodInput};

/// Collection path under the base URL.
pub const RESOURCE_PATH: &str = "/foods";

/// Bytes escaped in an id path segment: the URL path set plus `/`, `%`.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Synchronous, stateless client for the `/foods` resource.
#[derive(Debug, Clone)]
pub struct FoodClient {
    resource_url: String,
}

impl FoodClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            resource_url: format!("{}{RESOURCE_PATH}", base_url.trim_end_matches('/')),
        }
    }

    pub fn resource_url(&self) -> &str {
        &self.resource_url
    }

    pub fn build_list_foods(&self) -> HttpRequest {
        request(HttpMethod::Get, self.resource_url.clone(), None)
    }

    pub fn build_get_food(&self, id: &FoodId) -> HttpRequest {
        request(HttpMethod::Get, self.item_url(id), None)
    }

    pub fn build_create_food(&self, input: &FoodInput) -> Result<HttpRequest, ApiError> {
        let body = to_json(input)?;
        Ok(request(HttpMethod::Post, self.resource_url.clone(), Some(body)))
    }

    pub fn build_update_food(&self, id: &FoodId, input: &FoodInput) -> Result<HttpRequest, ApiError> {
        let body = to_json(input)?;
        Ok(request(HttpMethod::Put, self.item_url(id), Some(body)))
    }

    pub fn build_delete_food(&self, id: &FoodId) -> HttpRequest {
        request(HttpMethod::Delete, self.item_url(id), None)
    }

    pub fn parse_list_foods(&self, response: HttpResponse) -> Result<Vec<Food>, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_get_food(&self, response: HttpResponse) -> Result<Food, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_create_food(&self, response: HttpResponse) -> Result<Food, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_update_food(&self, response: HttpResponse) -> Result<Food, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    /// The body is ignored: json-server echoes the deleted record, others
    /// send nothing.
    pub fn parse_delete_food(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    fn item_url(&self, id: &FoodId) -> String {
        let segment = utf8_percent_encode(id.as_str(), SEGMENT);
        format!("{}/{segment}", self.resource_url)
    }
}

/// Write requests carry a JSON content type; reads carry no headers.
fn request(method: HttpMethod, url: String, body: Option<String>) -> HttpRequest {
    let headers = if body.is_some() {
        vec![("content-type".to_string(), "application/json".to_string())]
    } else {
        Vec::new()
    };
    HttpRequest {
        method,
        url,
        headers,
        body,
    }
}

fn to_json(input: &FoodInput) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
