use crate::core::RosterPipeline;
use crate::utils::error::Result;

pub struct RosterEngine<P: RosterPipeline> {
    pipeline: P,
}

impl<P: RosterPipeline> RosterEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting roster report run");

        tracing::info!("Reading roster...");
        let people = self.pipeline.extract()?;
        tracing::info!("Loaded {} person records", people.len());

        tracing::info!("Deriving report rows...");
        let report = self.pipeline.transform(people)?;
        tracing::info!("Derived {} report rows", report.rows.len());

        tracing::info!("Writing report...");
        let output_path = self.pipeline.load(report)?;
        tracing::info!("Report saved to: {}", output_path);

        Ok(output_path)
    }
}
