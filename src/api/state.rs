//! Application state for the attendance API.

use std::sync::Arc;

use crate::attendance::{ChildAttendanceService, Clock, TeacherAttendanceService};
use crate::config::ConfigLoader;
use crate::repository::InMemoryRepository;

/// Shared application state.
///
/// Holds the services, the repository they share and the clock that handlers
/// sample "now" from.
#[derive(Clone)]
pub struct AppState {
    repository: Arc<InMemoryRepository>,
    teacher: Arc<TeacherAttendanceService<InMemoryRepository>>,
    child: Arc<ChildAttendanceService<InMemoryRepository>>,
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Builds the state from loaded configuration.
    ///
    /// The repository is seeded with the configured work locations.
    pub fn new(config: &ConfigLoader, clock: Arc<dyn Clock>) -> Self {
        let repository = Arc::new(InMemoryRepository::with_work_locations(
            config.work_locations().to_vec(),
        ));
        Self::with_repository(config, repository, clock)
    }

    /// Builds the state over an existing repository.
    pub fn with_repository(
        config: &ConfigLoader,
        repository: Arc<InMemoryRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let policy = config.policy().clone();
        Self {
            teacher: Arc::new(TeacherAttendanceService::new(
                Arc::clone(&repository),
                policy.clone(),
            )),
            child: Arc::new(ChildAttendanceService::new(Arc::clone(&repository), policy)),
            repository,
            clock,
        }
    }

    /// Returns the shared repository.
    pub fn repository(&self) -> &Arc<InMemoryRepository> {
        &self.repository
    }

    /// Returns the teacher attendance service.
    pub fn teacher(&self) -> &TeacherAttendanceService<InMemoryRepository> {
        &self.teacher
    }

    /// Returns the child attendance recorder.
    pub fn child(&self) -> &ChildAttendanceService<InMemoryRepository> {
        &self.child
    }

    /// Returns the clock handlers take "now" from.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
