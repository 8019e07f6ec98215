// src/state.rs

use crate::domain::Project;
use crate::errors::ServerError;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Outcome of the one load done at startup.
#[derive(Debug)]
pub enum ProjectData {
    Loaded {
        projects: Vec<Project>,
        loaded_at: DateTime<Utc>,
    },
    Failed {
        message: String,
    },
}

/// Everything a request handler needs. Built once in `main`, read-only afterwards.
#[derive(Debug)]
pub struct AppContext {
    pub data: ProjectData,
    pub static_dir: PathBuf,
}

impl AppContext {
    pub fn loaded(projects: Vec<Project>, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            data: ProjectData::Loaded {
                projects,
                loaded_at: Utc::now(),
            },
            static_dir: static_dir.into(),
        }
    }

    pub fn failed(message: impl Into<String>, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            data: ProjectData::Failed {
                message: message.into(),
            },
            static_dir: static_dir.into(),
        }
    }

    /// The project list, or the load error for routes that cannot work without it.
    pub fn projects(&self) -> Result<&[Project], ServerError> {
        match &self.data {
            ProjectData::Loaded { projects, .. } => Ok(projects.as_slice()),
            ProjectData::Failed { message } => Err(ServerError::Unavailable(message.clone())),
        }
    }

    pub fn load_error(&self) -> Option<&str> {
        match &self.data {
            ProjectData::Failed { message } => Some(message.as_str()),
            ProjectData::Loaded { .. } => None,
        }
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        match &self.data {
            ProjectData::Loaded { loaded_at, .. } => Some(*loaded_at),
            ProjectData::Failed { .. } => None,
        }
    }
}
