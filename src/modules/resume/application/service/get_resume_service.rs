use async_trait::async_trait;

use crate::modules::resume::application::ports::incoming::use_cases::{
    GetResumeError, GetResumeUseCase,
};
use crate::modules::resume::application::ports::outgoing::ResumeRepository;
use crate::modules::resume::domain::entities::Resume;

pub struct GetResumeService<R>
where
    R: ResumeRepository,
{
    repo: R,
}

impl<R> GetResumeService<R>
where
    R: ResumeRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> GetResumeUseCase for GetResumeService<R>
where
    R: ResumeRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Resume, GetResumeError> {
        self.repo
            .get()
            .await
            .map_err(|e| GetResumeError::RepositoryError(e.to_string()))?
            .ok_or(GetResumeError::NotFound)
    }
}
