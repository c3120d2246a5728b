use async_trait::async_trait;
use tracing::warn;

use crate::modules::resume::application::ports::incoming::use_cases::{
    UpdateResumeError, UpdateResumeUseCase,
};
use crate::modules::resume::application::ports::outgoing::ResumeRepository;
use crate::modules::resume::domain::entities::Resume;

pub struct UpdateResumeService<R>
where
    R: ResumeRepository,
{
    repo: R,
}

impl<R> UpdateResumeService<R>
where
    R: ResumeRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> UpdateResumeUseCase for UpdateResumeService<R>
where
    R: ResumeRepository + Send + Sync,
{
    async fn execute(&self, resume: Resume) -> Result<Resume, UpdateResumeError> {
        if let Err(e) = resume.validate() {
            warn!(error = %e, "Rejected resume update");
            return Err(UpdateResumeError::Validation(e.to_string()));
        }

        self.repo
            .upsert(resume)
            .await
            .map_err(|e| UpdateResumeError::RepositoryError(e.to_string()))
    }
}
