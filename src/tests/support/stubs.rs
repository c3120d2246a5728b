use async_trait::async_trait;

use crate::modules::admin::application::use_cases::login_admin::{
    LoginAdminError, LoginAdminRequest, LoginAdminResponse, LoginAdminUseCase,
};
use crate::modules::stats::application::ports::incoming::use_cases::{
    GetStatsError, GetStatsUseCase, StatsLookup,
};
use crate::modules::stats::domain::entities::StatsProvider;

/// Refuses every login.
pub struct StubLoginAdminUseCase;

#[async_trait]
impl LoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(
        &self,
        _request: LoginAdminRequest,
    ) -> Result<LoginAdminResponse, LoginAdminError> {
        Err(LoginAdminError::InvalidCredentials)
    }
}

/// Behaves like a provider that is down.
pub struct StubGetStatsUseCase;

#[async_trait]
impl GetStatsUseCase for StubGetStatsUseCase {
    async fn execute(
        &self,
        _provider: StatsProvider,
        _username: &str,
    ) -> Result<StatsLookup, GetStatsError> {
        Err(GetStatsError::Unavailable("stub".to_string()))
    }
}
