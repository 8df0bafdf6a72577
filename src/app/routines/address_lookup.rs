use crate::app::routines::FAILURE_MESSAGE;
use crate::domain::model::{LocalityQuery, LookupResult};
use crate::domain::ports::{LookupService, Routine};
use crate::utils::error::Result;
use std::io::Write;

pub const DEFAULT_REGION: &str = "mg";
pub const DEFAULT_CITY: &str = "belo horizonte";
pub const DEFAULT_STREET: &str = "rua dos aimores";

/// Single reverse lookup by region, city and street.
pub struct AddressLookup<S: LookupService> {
    service: S,
    query: LocalityQuery,
}

impl<S: LookupService> AddressLookup<S> {
    pub fn new(service: S, query: LocalityQuery) -> Self {
        Self { service, query }
    }
}

#[async_trait::async_trait]
impl<S: LookupService> Routine for AddressLookup<S> {
    fn name(&self) -> &str {
        "address-lookup"
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        match self.service.address(&self.query).await {
            LookupResult::Found(body) => writeln!(out, "Json: {}", body)?,
            LookupResult::Unsuccessful => writeln!(out, "{}", FAILURE_MESSAGE)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::routines::test_support::MockLookup;

    #[tokio::test]
    async fn test_prints_found_array() {
        let body = serde_json::json!([{"cep": "30140-071"}, {"cep": "30140-072"}]);
        let service = MockLookup::default().with("mg/belo horizonte/rua dos aimores", body);
        let routine = AddressLookup::new(
            service.clone(),
            LocalityQuery::new(DEFAULT_REGION, DEFAULT_CITY, DEFAULT_STREET),
        );

        let mut out = Vec::new();
        routine.run(&mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Json: [{\"cep\":\"30140-071\"},{\"cep\":\"30140-072\"}]\n"
        );
        assert_eq!(service.calls().await.len(), 1);
    }

    #[tokio::test]
    async fn test_unsuccessful_prints_failure_message() {
        let service = MockLookup::default();
        let routine = AddressLookup::new(service, LocalityQuery::new("xx", "nowhere", "none"));

        let mut out = Vec::new();
        routine.run(&mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", FAILURE_MESSAGE));
    }
}
