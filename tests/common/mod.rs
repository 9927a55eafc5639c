//! Shared fixtures: job builders and an in-memory job board API.

#![allow(dead_code)]

use async_trait::async_trait;
use jobboard::api::{JobBoardApi, SearchFilters};
use jobboard::domain::{ApplyPayload, Job, JobBoardError, JobId, NewJobPayload, Result};
use std::collections::VecDeque;
use std::sync::Mutex;

pub fn job(id: u64, title: &str) -> Job {
    Job {
        id: JobId::from(id),
        title: title.to_string(),
        city: "Portland, OR".to_string(),
        category: "Moving help".to_string(),
        pay_amount: 60.0,
        pay_type: "fixed".to_string(),
        description: Some("Two hours, stairs.".to_string()),
        created_at: None,
    }
}

pub fn jobs(ids: &[u64]) -> Vec<Job> {
    ids.iter().map(|&id| job(id, &format!("Job {id}"))).collect()
}

/// Scripted outcome for one call.
pub enum Scripted<T> {
    Ok(T),
    Fail,
}

impl<T> Scripted<T> {
    fn into_result(self) -> Result<T> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Fail => Err(JobBoardError::Transport("server answered 500".to_string())),
        }
    }
}

/// In-memory API that records every call and answers from scripted queues.
///
/// An empty queue answers with success (an empty list for searches).
#[derive(Default)]
pub struct FakeApi {
    searches: Mutex<VecDeque<Scripted<Vec<Job>>>>,
    creates: Mutex<VecDeque<Scripted<()>>>,
    applies: Mutex<VecDeque<Scripted<()>>>,

    pub search_calls: Mutex<Vec<SearchFilters>>,
    pub create_calls: Mutex<Vec<NewJobPayload>>,
    pub apply_calls: Mutex<Vec<(JobId, ApplyPayload)>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(self, outcome: Scripted<Vec<Job>>) -> Self {
        self.searches.lock().unwrap().push_back(outcome);
        self
    }

    pub fn with_create(self, outcome: Scripted<()>) -> Self {
        self.creates.lock().unwrap().push_back(outcome);
        self
    }

    pub fn with_apply(self, outcome: Scripted<()>) -> Self {
        self.applies.lock().unwrap().push_back(outcome);
        self
    }

    pub fn search_count(&self) -> usize {
        self.search_calls.lock().unwrap().len()
    }

    pub fn create_count(&self) -> usize {
        self.create_calls.lock().unwrap().len()
    }

    pub fn apply_count(&self) -> usize {
        self.apply_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl JobBoardApi for FakeApi {
    async fn search_jobs(&self, filters: &SearchFilters) -> Result<Vec<Job>> {
        self.search_calls.lock().unwrap().push(filters.clone());
        let next = self.searches.lock().unwrap().pop_front();
        next.unwrap_or(Scripted::Ok(Vec::new())).into_result()
    }

    async fn create_job(&self, payload: &NewJobPayload) -> Result<()> {
        self.create_calls.lock().unwrap().push(payload.clone());
        let next = self.creates.lock().unwrap().pop_front();
        next.unwrap_or(Scripted::Ok(())).into_result()
    }

    async fn apply_to_job(&self, job_id: &JobId, payload: &ApplyPayload) -> Result<()> {
        self.apply_calls
            .lock()
            .unwrap()
            .push((job_id.clone(), payload.clone()));
        let next = self.applies.lock().unwrap().pop_front();
        next.unwrap_or(Scripted::Ok(())).into_result()
    }
}
