use crate::domain::model::{LocalityQuery, LookupResult, PostalCode};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;

pub trait LookupService: Send + Sync {
    fn postal_code(
        &self,
        code: &PostalCode,
    ) -> impl std::future::Future<Output = LookupResult> + Send;
    fn address(
        &self,
        query: &LocalityQuery,
    ) -> impl std::future::Future<Output = LookupResult> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
}

/// A lookup procedure that prints its results to `out`.
#[async_trait]
pub trait Routine: Send + Sync {
    fn name(&self) -> &str;
    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()>;
}
