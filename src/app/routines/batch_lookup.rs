use crate::app::routines::FAILURE_MESSAGE;
use crate::domain::model::{LookupResult, PostalCode};
use crate::domain::ports::{LookupService, Routine};
use crate::utils::error::Result;
use std::io::Write;

/// Postal codes looked up when none are given on the command line.
pub const DEFAULT_POSTAL_CODES: [&str; 5] =
    ["30140071", "30140072", "30140073", "30140074", "30140075"];

/// Looks up each postal code in order, one request at a time.
pub struct BatchLookup<S: LookupService> {
    service: S,
    codes: Vec<PostalCode>,
}

impl<S: LookupService> BatchLookup<S> {
    pub fn new(service: S, codes: Vec<PostalCode>) -> Self {
        Self { service, codes }
    }
}

#[async_trait::async_trait]
impl<S: LookupService> Routine for BatchLookup<S> {
    fn name(&self) -> &str {
        "batch-lookup"
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        let mut found = 0usize;

        for code in &self.codes {
            match self.service.postal_code(code).await {
                LookupResult::Found(body) => {
                    found += 1;
                    writeln!(out, "Imprimindo as informações do CEP:{}", code)?;
                    writeln!(out)?;
                    writeln!(out, "JSON :  {}", body)?;
                    writeln!(out)?;
                }
                LookupResult::Unsuccessful => {
                    writeln!(out, "{}", FAILURE_MESSAGE)?;
                }
            }
        }

        tracing::debug!("{} of {} postal codes found", found, self.codes.len());
        Ok(())
    }
}
