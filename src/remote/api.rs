//! Typisierter Client für die REST-API der Reisepläne.

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{ApiError, Resource, ResourceScope};
use crate::core::{Destination, Plan};

/// Baut die URL eines Endpunkts unterhalb von `base`.
///
/// `base` darf einen Pfad enthalten (`http://host/api`), `path` wird angehängt.
pub fn endpoint(base: &str, path: &str, query: &[(&str, &str)]) -> Result<Url, ApiError> {
    let joined = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    let mut url = Url::parse(&joined).map_err(|e| ApiError::InvalidUrl(format!("{joined}: {e}")))?;
    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }
    Ok(url)
}

/// URL einer Bulk-Ressource mit `planId` und optionaler `destId`.
pub fn resource_url(base: &str, resource: Resource, scope: &ResourceScope) -> Result<Url, ApiError> {
    if !scope.is_valid() {
        return Err(ApiError::MissingScope);
    }
    let mut query = vec![("planId", scope.plan_id.as_str())];
    if let Some(dest) = scope.dest_id.as_deref() {
        query.push(("destId", dest));
    }
    endpoint(base, resource.path(), &query)
}

#[derive(Deserialize)]
struct UploadResponse {
    url: String,
}

/// Async-Client für Plans, Ziele und Bulk-Ressourcen.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(http: reqwest::Client, base: impl Into<String>) -> Self {
        Self {
            http,
            base: base.into(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Liest eine Ressource; `null` oder leerer Body ergibt den Default.
    pub async fn fetch<T>(&self, resource: Resource, scope: &ResourceScope) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        let url = resource_url(&self.base, resource, scope)?;
        self.get_json(url).await
    }

    /// Ersetzt eine Ressource vollständig.
    pub async fn save<T>(&self, resource: Resource, scope: &ResourceScope, body: &T) -> Result<(), ApiError>
    where
        T: Serialize + ?Sized,
    {
        let url = resource_url(&self.base, resource, scope)?;
        let response = self.http.post(url.clone()).json(body).send().await?;
        check_status(&response, &url)?;
        log::info!("{} gespeichert ({})", resource.label(), url);
        Ok(())
    }

    pub async fn list_plans(&self) -> Result<Vec<Plan>, ApiError> {
        let url = endpoint(&self.base, "plans", &[])?;
        self.get_json(url).await
    }

    pub async fn list_destinations(&self, plan_id: &str) -> Result<Vec<Destination>, ApiError> {
        let url = endpoint(&self.base, "destinations", &[("planId", plan_id)])?;
        self.get_json(url).await
    }

    /// Lädt ein Bild hoch und gibt die öffentliche URL zurück.
    pub async fn upload_guide_image(
        &self,
        scope: &ResourceScope,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ApiError> {
        if !scope.is_valid() {
            return Err(ApiError::MissingScope);
        }
        let url = endpoint(&self.base, "upload-guide-image", &[])?;
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("planId", scope.plan_id.clone())
            .text("destId", scope.dest_id.clone().unwrap_or_default());
        let response = self.http.post(url.clone()).multipart(form).send().await?;
        check_status(&response, &url)?;
        let body: UploadResponse = response.json().await?;
        Ok(body.url)
    }

    async fn get_json<T>(&self, url: Url) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        let response = self.http.get(url.clone()).send().await?;
        check_status(&response, &url)?;
        let text = response.text().await?;
        decode_or_default(&text)
    }
}

fn check_status(response: &reqwest::Response, url: &Url) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}

/// Dekodiert JSON; leerer Body oder `null` ergibt den Default.
pub fn decode_or_default<T>(text: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if text.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str::<Option<T>>(text)
        .map(Option::unwrap_or_default)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Config, Spot};

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = endpoint("http://localhost:8080/api/", "/plans", &[]).expect("URL");
        assert_eq!(url.as_str(), "http://localhost:8080/api/plans");
    }

    #[test]
    fn test_resource_url_with_and_without_destination() {
        let scope = ResourceScope::new("p 1", Some("d1".into()));
        let url = resource_url("http://h/api", Resource::GuideImages, &scope).expect("URL");
        assert_eq!(url.as_str(), "http://h/api/guide-images?planId=p+1&destId=d1");

        let plan_only = ResourceScope::new("p1", None);
        let url = resource_url("http://h/api", Resource::Spots, &plan_only).expect("URL");
        assert_eq!(url.as_str(), "http://h/api/spots?planId=p1");
    }

    #[test]
    fn test_resource_url_requires_plan() {
        let err = resource_url("http://h/api", Resource::Config, &ResourceScope::default())
            .expect_err("ohne Plan kein Request");
        assert_eq!(err, ApiError::MissingScope);
    }

    #[test]
    fn test_invalid_base_is_reported() {
        assert!(matches!(
            endpoint("not a url", "spots", &[]),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_null_and_empty_bodies_decode_to_default() {
        let spots: Vec<Spot> = decode_or_default("null").expect("null");
        assert!(spots.is_empty());
        let cfg: Config = decode_or_default("  ").expect("leer");
        assert_eq!(cfg, Config::default());
        assert!(matches!(
            decode_or_default::<Vec<Spot>>("{broken"),
            Err(ApiError::Decode(_))
        ));
    }
}
