//! Job posting summary model.
//!
//! Job summaries are read-only snapshots supplied by the job-listing service.
//! Nothing in the plugin mutates them after they are loaded.

use serde::{Deserialize, Serialize};

/// Employer reference embedded in a job posting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
}

/// Summary of a single job posting.
///
/// # Fields
///
/// - `id`: Posting identifier (`_id` on the wire), used in `/description/{id}`
/// - `company`: Employer, may be missing when the service did not populate it
/// - `position`: Number of open positions
/// - `job_type`: Free-form type such as "Full Time"
/// - `salary`: Salary figure in lakhs per annum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub company: Option<Company>,
    #[serde(default)]
    pub position: u32,
    #[serde(default, rename = "jobType")]
    pub job_type: String,
    #[serde(default)]
    pub salary: f64,
}

impl JobSummary {
    /// Employer name, empty when the posting has no company attached.
    #[must_use]
    pub fn employer(&self) -> &str {
        self.company.as_ref().map_or("", |company| company.name.as_str())
    }

    /// Salary badge text, e.g. `"12LPA"`.
    #[must_use]
    pub fn salary_label(&self) -> String {
        format!("{}LPA", self.salary)
    }

    /// Positions badge text, e.g. `"3 Positions"`.
    #[must_use]
    pub fn positions_label(&self) -> String {
        format!("{} Positions", self.position)
    }
}

#[cfg(test)]
pub(crate) fn sample_job(id: &str, title: &str) -> JobSummary {
    JobSummary {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} role"),
        company: Some(Company {
            name: "Acme".to_string(),
        }),
        position: 2,
        job_type: "Full Time".to_string(),
        salary: 12.0,
    }
}
