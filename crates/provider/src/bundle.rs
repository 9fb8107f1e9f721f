//! Loading a service description together with its auxiliary configs

use crate::{resolve_version, ApiProvider};
use cloud_api_models_common::{JsonMap, Result, Service};
use serde::Serialize;

/// API description, paginators and waiters of one concrete service version
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceBundle {
    /// Service id the bundle was requested for
    pub service_id: String,

    /// Concrete version (never the `latest` sentinel when a version exists)
    pub version: String,

    pub service: Service,

    /// Empty when the service has no paginator config
    pub paginators: JsonMap,

    /// Empty when the service has no waiter config
    pub waiters: JsonMap,
}

/// Load everything known about a service version
///
/// `latest` is resolved once up front so the three documents always come
/// from the same version. Returns `None` when there is no API description;
/// paginators and waiters are not read in that case.
pub fn load_bundle<P>(provider: &P, service: &str, version: &str) -> Result<Option<ServiceBundle>>
where
    P: ApiProvider + ?Sized,
{
    let version = resolve_version(provider, service, version)?;

    let Some(description) = provider.get_service(service, &version)? else {
        return Ok(None);
    };

    let paginators = provider.get_service_paginator_config(service, &version)?;
    let waiters = provider.get_service_waiter_config(service, &version)?;

    Ok(Some(ServiceBundle {
        service_id: service.to_string(),
        version,
        service: description,
        paginators,
        waiters,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MockApiProvider, LATEST};
    use cloud_api_models_common::ApiError;
    use mockall::predicate::eq;
    use serde_json::json;

    fn map(value: serde_json::Value) -> JsonMap {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_bundle_uses_one_resolved_version() {
        let mut provider = MockApiProvider::new();
        provider
            .expect_get_service_versions()
            .with(eq("sqs"))
            .times(1)
            .returning(|_| Ok(vec!["2012-11-05".to_string()]));
        provider
            .expect_get_service()
            .with(eq("sqs"), eq("2012-11-05"))
            .times(1)
            .returning(|_, _| Ok(Some(Service::new(map(json!({"metadata": {}}))))));
        provider
            .expect_get_service_paginator_config()
            .with(eq("sqs"), eq("2012-11-05"))
            .times(1)
            .returning(|_, _| Ok(map(json!({"pagination": {}}))));
        provider
            .expect_get_service_waiter_config()
            .with(eq("sqs"), eq("2012-11-05"))
            .times(1)
            .returning(|_, _| Ok(JsonMap::new()));

        let bundle = load_bundle(&provider, "sqs", LATEST).unwrap().unwrap();
        assert_eq!(bundle.service_id, "sqs");
        assert_eq!(bundle.version, "2012-11-05");
        assert!(bundle.paginators.contains_key("pagination"));
        assert!(bundle.waiters.is_empty());
    }

    #[test]
    fn test_missing_description_skips_configs() {
        let mut provider = MockApiProvider::new();
        provider.expect_get_service().returning(|_, _| Ok(None));
        provider.expect_get_service_paginator_config().never();
        provider.expect_get_service_waiter_config().never();

        let bundle = load_bundle(&provider, "nope", "1.0").unwrap();
        assert!(bundle.is_none());
    }

    #[test]
    fn test_config_errors_propagate() {
        let mut provider = MockApiProvider::new();
        provider
            .expect_get_service()
            .returning(|_, _| Ok(Some(Service::default())));
        provider
            .expect_get_service_paginator_config()
            .returning(|_, _| Err(ApiError::malformed("foo-1.paginators.json", "bad")));
        provider.expect_get_service_waiter_config().never();

        let err = load_bundle(&provider, "foo", "1").unwrap_err();
        assert!(matches!(err, ApiError::MalformedDescription { .. }));
    }

    #[test]
    fn test_works_through_trait_object() {
        let mut provider = MockApiProvider::new();
        provider.expect_get_service().returning(|_, _| Ok(None));

        let dyn_provider: &dyn ApiProvider = &provider;
        assert!(load_bundle(dyn_provider, "foo", "1").unwrap().is_none());
    }
}
