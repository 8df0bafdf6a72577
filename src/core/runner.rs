use crate::core::Routine;
use crate::utils::error::Result;
use std::io::Write;
use std::time::Instant;

pub struct LookupRunner<R: Routine> {
    routine: R,
}

impl<R: Routine> LookupRunner<R> {
    pub fn new(routine: R) -> Self {
        Self { routine }
    }

    /// Runs the routine against stdout.
    pub async fn run(&self) -> Result<()> {
        let mut stdout = std::io::stdout();
        self.run_with(&mut stdout).await
    }

    pub async fn run_with(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        let started = Instant::now();
        tracing::info!("Starting {}", self.routine.name());

        self.routine.run(out).await?;
        out.flush()?;

        tracing::info!(
            "Finished {} in {:?}",
            self.routine.name(),
            started.elapsed()
        );
        Ok(())
    }
}
