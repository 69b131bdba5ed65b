//! Jobs and their status.

use std::fmt;

use serde::Deserialize;

use crate::resource::Entity;

/// Status of a job as last reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    New,
    Pending,
    Waiting,
    Running,
    Successful,
    Failed,
    Error,
    /// Current servers send `canceled`; both spellings decode.
    #[serde(alias = "canceled")]
    Cancelled,
}

impl JobStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [JobStatus; 8] = [
        JobStatus::New,
        JobStatus::Pending,
        JobStatus::Waiting,
        JobStatus::Running,
        JobStatus::Successful,
        JobStatus::Failed,
        JobStatus::Error,
        JobStatus::Cancelled,
    ];

    /// True once the job can no longer change status.
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            JobStatus::Successful | JobStatus::Failed | JobStatus::Error | JobStatus::Cancelled
        )
    }

    /// True only for a job that finished successfully.
    pub fn is_successful(&self) -> bool {
        matches!(self, JobStatus::Successful)
    }

    /// The status as the server spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::New => "new",
            JobStatus::Pending => "pending",
            JobStatus::Waiting => "waiting",
            JobStatus::Running => "running",
            JobStatus::Successful => "successful",
            JobStatus::Failed => "failed",
            JobStatus::Error => "error",
            JobStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An AWX job: one run of a job template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    id: u64,
    status: JobStatus,
}

impl Job {
    /// Server-assigned job id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Status when the job was fetched.
    pub fn status(&self) -> JobStatus {
        self.status
    }

    /// See [`JobStatus::is_finished`].
    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// See [`JobStatus::is_successful`].
    pub fn is_successful(&self) -> bool {
        self.status.is_successful()
    }
}

#[derive(Debug, Deserialize)]
pub struct JobWire {
    id: u64,
    status: JobStatus,
}

impl Entity for Job {
    type Wire = JobWire;

    fn from_wire(wire: JobWire) -> Self {
        Self {
            id: wire.id,
            status: wire.status,
        }
    }
}
