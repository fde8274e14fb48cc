use crate::adapters::storage::LetterWriter;
use crate::core::{
    AttendeeRecord, LetterContext, LetterRenderer, NormalizedContact, Officials,
    RegistrationMoment, RepresentativeLookup, Storage,
};
use crate::domain::services::RepresentativeDirectory;
use crate::domain::stats::{PopularityReport, RegistrationStats};
use crate::utils::error::{EtlError, Result};

/// Where the pipeline is in its run. `Done` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Reading,
    Normalizing,
    LookingUp,
    Rendering,
    Saving,
    Reporting,
    Done,
    Failed,
}

#[derive(Debug, Clone)]
pub struct ProcessedLetter {
    pub id: String,
    pub contact: NormalizedContact,
    pub officials: Officials,
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub letters: Vec<String>,
    /// `None` when the roster had no rows.
    pub popularity: Option<PopularityReport>,
}

impl RunSummary {
    pub fn letters_written(&self) -> usize {
        self.letters.len()
    }
}

/// Drives each attendee through normalize, lookup, render and save, while
/// collecting registration times for the closing report.
pub struct LetterPipeline<S: Storage, L: RepresentativeLookup, R: LetterRenderer> {
    writer: LetterWriter<S>,
    directory: RepresentativeDirectory<L>,
    renderer: R,
    stats: RegistrationStats,
    state: PipelineState,
}

impl<S: Storage, L: RepresentativeLookup, R: LetterRenderer> LetterPipeline<S, L, R> {
    pub fn new(storage: S, lookup: L, renderer: R) -> Self {
        Self {
            writer: LetterWriter::new(storage),
            directory: RepresentativeDirectory::new(lookup),
            renderer,
            stats: RegistrationStats::new(),
            state: PipelineState::Idle,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn stats(&self) -> &RegistrationStats {
        &self.stats
    }

    fn transition(&mut self, next: PipelineState) {
        tracing::debug!("Pipeline state {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Runs every stage for one attendee. Any error is fatal for the run.
    pub async fn process_record(&mut self, record: &AttendeeRecord) -> Result<ProcessedLetter> {
        self.transition(PipelineState::Normalizing);
        let contact = NormalizedContact::from_record(record);
        let moment = RegistrationMoment::parse(&record.registration_timestamp)?;
        self.stats.record(&moment);

        println!("{} {}", record.first_name, contact.phone);

        self.transition(PipelineState::LookingUp);
        let officials = self.directory.lookup_representatives(&contact.zipcode).await;

        self.transition(PipelineState::Rendering);
        let context = LetterContext::new(record, &contact, &moment, &officials);
        let letter = self.renderer.render(&context)?;

        self.transition(PipelineState::Saving);
        let path = self.writer.save(&record.id, &letter).await?;

        Ok(ProcessedLetter {
            id: record.id.clone(),
            contact,
            officials,
            path,
        })
    }

    /// Consumes the roster, then prints the popularity report.
    ///
    /// Stops at the first error; letters already written stay on disk.
    pub async fn run<I>(&mut self, rows: I) -> Result<RunSummary>
    where
        I: IntoIterator<Item = Result<AttendeeRecord>>,
    {
        match self.run_rows(rows).await {
            Ok(summary) => {
                self.transition(PipelineState::Done);
                Ok(summary)
            }
            Err(e) => {
                tracing::error!("Pipeline failed in state {:?}: {}", self.state, e);
                self.transition(PipelineState::Failed);
                Err(e)
            }
        }
    }

    async fn run_rows<I>(&mut self, rows: I) -> Result<RunSummary>
    where
        I: IntoIterator<Item = Result<AttendeeRecord>>,
    {
        let mut letters = Vec::new();

        for row in rows {
            self.transition(PipelineState::Reading);
            let record = row?;
            let processed = self.process_record(&record).await?;
            letters.push(processed.path);
        }

        self.transition(PipelineState::Reporting);
        tracing::info!("Wrote {} letters", letters.len());

        let popularity = match self.stats.report() {
            Ok(report) => {
                println!("{}", report);
                Some(report)
            }
            Err(EtlError::EmptyInput) => {
                tracing::warn!("Roster had no attendees, skipping registration report");
                None
            }
            Err(e) => return Err(e),
        };

        Ok(RunSummary {
            letters,
            popularity,
        })
    }
}
