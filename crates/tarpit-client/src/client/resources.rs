//! Typed operations over the administration API.
//!
//! These are thin wrappers around [`ApiClient::call`] that know the path
//! and payload conventions of each backend endpoint. The resource-generic
//! ones take a [`ResourceKind`]; the rest cover the one-off endpoints.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::fetch::ApiClient;
use crate::client::outcome::ApiOutcome;
use crate::client::request::ApiRequest;
use crate::error::Result;
use crate::routes::{self, ResourceKind};
use crate::types::{AppExport, FieldDoc, GlobalStatistics, Whois};

impl ApiClient {
    /// Fetches one page of a resource listing. `query` is the backend
    /// search expression; an empty string matches everything.
    pub async fn segment<T>(
        &self,
        kind: ResourceKind,
        query: &str,
        offset: i64,
        limit: i64,
    ) -> Result<ApiOutcome<Vec<T>>>
    where
        T: DeserializeOwned,
    {
        let request = ApiRequest::get(routes::segment_endpoint(kind))
            .with_query("q", query)
            .with_query("offset", offset.to_string())
            .with_query("limit", limit.to_string());
        Ok(self
            .call::<Vec<T>>(request)
            .await?
            .map(Option::unwrap_or_default))
    }

    /// Stores a model through the resource's write endpoint. A zero ID
    /// inserts, anything else updates. The backend replies with the stored
    /// model, IDs and timestamps filled in.
    pub async fn upsert<T>(&self, kind: ResourceKind, model: &T) -> Result<ApiOutcome<T>>
    where
        T: Serialize + DeserializeOwned,
    {
        let request = ApiRequest::post(routes::write_endpoint(kind)?).with_json(model)?;
        Ok(self
            .call::<Vec<T>>(request)
            .await?
            .and_then(|data| single_model(kind, data)))
    }

    /// Deletes one model by ID.
    pub async fn delete(&self, kind: ResourceKind, id: i64) -> Result<ApiOutcome<()>> {
        let id = id.to_string();
        let request =
            ApiRequest::post(routes::delete_endpoint(kind)?).with_form(&[("id", id.as_str())]);
        Ok(self.call::<serde_json::Value>(request).await?.map(|_| ()))
    }

    /// Looks up the stored whois record for an IP address.
    pub async fn whois(&self, ip: &str) -> Result<ApiOutcome<Whois>> {
        let request = ApiRequest::post("/whois/ip").with_form(&[("ip", ip)]);
        Ok(self.call::<Whois>(request).await?.and_then(require_data))
    }

    /// Fetches the dashboard statistics.
    pub async fn global_stats(&self) -> Result<ApiOutcome<GlobalStatistics>> {
        let request = ApiRequest::get("/stats/global");
        Ok(self
            .call::<GlobalStatistics>(request)
            .await?
            .and_then(require_data))
    }

    /// Fetches the per-field documentation of a datamodel, keyed by JSON
    /// field name. The backend knows models by their lowercase name, e.g.
    /// `content` or `contentrule`.
    pub async fn datamodel_doc(
        &self,
        model: &str,
    ) -> Result<ApiOutcome<BTreeMap<String, FieldDoc>>> {
        let request = ApiRequest::get("/datamodel/doc").with_query("model", model);
        Ok(self.call(request).await?.and_then(require_data))
    }

    /// Exports an application with all its rules and contents.
    pub async fn export_app(&self, id: i64) -> Result<ApiOutcome<AppExport>> {
        let id = id.to_string();
        let request = ApiRequest::post("/app/export").with_form(&[("id", id.as_str())]);
        Ok(self.call::<AppExport>(request).await?.and_then(require_data))
    }

    /// Imports a previously exported application bundle. Everything in the
    /// bundle is inserted as new.
    pub async fn import_app(&self, bundle: &AppExport) -> Result<ApiOutcome<()>> {
        let request = ApiRequest::post("/app/import").with_json(bundle)?;
        Ok(self.call::<serde_json::Value>(request).await?.map(|_| ()))
    }
}

fn single_model<T>(kind: ResourceKind, data: Option<Vec<T>>) -> ApiOutcome<T> {
    let mut models = data.unwrap_or_default();
    let count = models.len();
    match models.pop() {
        Some(model) if count == 1 => ApiOutcome::Success(model),
        _ => ApiOutcome::BackendFailure(format!("expected a single {kind} model, got {count}")),
    }
}

fn require_data<T>(data: Option<T>) -> ApiOutcome<T> {
    match data {
        Some(value) => ApiOutcome::Success(value),
        None => ApiOutcome::BackendFailure("backend sent no data".to_string()),
    }
}
