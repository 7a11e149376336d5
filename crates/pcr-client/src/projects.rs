//! Project lookup.

use pcr_core::Project;

use crate::{ClientError, ProlificClient};

#[derive(serde::Deserialize)]
struct ProjectResponse {
    #[serde(default)]
    title: Option<String>,
}

impl ProlificClient {
    /// Resolve a project identifier to its display name.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API returns a
    /// non-success status, or the body cannot be parsed.
    pub async fn fetch_project(&self, project_id: &str) -> Result<Project, ClientError> {
        let url = self.endpoint(&["projects", project_id])?;
        let data: ProjectResponse = self.get_json(url).await?;
        Ok(Project::new(project_id, data.title))
    }
}
