use crate::domain::schedule::ports::ScheduleRepository;

/// Application service over the storage ports. Shareable across requests;
/// holds no per-request state.
#[derive(Debug, Clone)]
pub struct Service<S>
where
    S: ScheduleRepository,
{
    pub schedule_repository: S,
}

impl<S> Service<S>
where
    S: ScheduleRepository,
{
    pub fn new(schedule_repository: S) -> Self {
        Self {
            schedule_repository,
        }
    }
}
