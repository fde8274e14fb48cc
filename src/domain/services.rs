use crate::domain::model::Officials;
use crate::domain::ports::RepresentativeLookup;

/// Shown in a letter when the representatives could not be looked up.
pub const FALLBACK_MESSAGE: &str =
    "You can find your representatives by visiting www.commoncause.org/take-action/find-elected-officials";

/// Wraps a [`RepresentativeLookup`] so that a lookup never fails.
///
/// Every error, whether transport, authentication or an unknown zipcode,
/// becomes [`Officials::Fallback`] carrying [`FALLBACK_MESSAGE`].
pub struct RepresentativeDirectory<L: RepresentativeLookup> {
    lookup: L,
}

impl<L: RepresentativeLookup> RepresentativeDirectory<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    pub async fn lookup_representatives(&self, zipcode: &str) -> Officials {
        match self.lookup.lookup(zipcode).await {
            Ok(officials) => {
                tracing::debug!("Found {} officials for {}", officials.len(), zipcode);
                Officials::Found(officials)
            }
            Err(e) => {
                tracing::warn!("Representative lookup for {} failed: {}", zipcode, e);
                Officials::Fallback(FALLBACK_MESSAGE.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Official;
    use crate::utils::error::{EtlError, Result};
    use async_trait::async_trait;

    struct StaticLookup(Vec<Official>);

    #[async_trait]
    impl RepresentativeLookup for StaticLookup {
        async fn lookup(&self, _zipcode: &str) -> Result<Vec<Official>> {
            Ok(self.0.clone())
        }
    }

    struct FailingLookup;

    #[async_trait]
    impl RepresentativeLookup for FailingLookup {
        async fn lookup(&self, zipcode: &str) -> Result<Vec<Official>> {
            Err(EtlError::LookupError {
                message: format!("no such address: {}", zipcode),
            })
        }
    }

    #[tokio::test]
    async fn test_lookup_returns_officials() {
        let official = Official {
            name: "Ron Wyden".to_string(),
            party: Some("Democratic Party".to_string()),
            phones: vec![],
            urls: vec![],
        };
        let directory = RepresentativeDirectory::new(StaticLookup(vec![official.clone()]));

        let result = directory.lookup_representatives("97201").await;

        assert_eq!(result, Officials::Found(vec![official]));
    }

    #[tokio::test]
    async fn test_lookup_failure_yields_fallback_message() {
        let directory = RepresentativeDirectory::new(FailingLookup);

        let result = directory.lookup_representatives("00000").await;

        assert!(result.is_fallback());
        assert_eq!(result, Officials::Fallback(FALLBACK_MESSAGE.to_string()));
    }
}
