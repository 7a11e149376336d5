//! Study listing and study detail endpoints.
//!
//! The listing is paginated. Each page may carry a link to the next one,
//! which already encodes the filters, so it is followed as-is until a page
//! comes back without one.

use std::collections::HashSet;

use pcr_core::{StudyDetail, StudyStatus, StudySummary};
use reqwest::Url;

use crate::{ClientError, ProlificClient};

#[derive(serde::Deserialize)]
struct StudyPage {
    #[serde(default)]
    results: Vec<StudySummary>,
    #[serde(default, rename = "_links")]
    hal_links: Option<HalLinks>,
    /// Older responses expose the next page as a bare string.
    #[serde(default)]
    links: Option<PlainLinks>,
}

#[derive(serde::Deserialize)]
struct HalLinks {
    #[serde(default)]
    next: Option<HalLink>,
}

#[derive(serde::Deserialize)]
struct HalLink {
    #[serde(default)]
    href: Option<String>,
}

#[derive(serde::Deserialize)]
struct PlainLinks {
    #[serde(default)]
    next: Option<String>,
}

impl StudyPage {
    fn next_link(&self) -> Option<&str> {
        self.hal_links
            .as_ref()
            .and_then(|links| links.next.as_ref())
            .and_then(|next| next.href.as_deref())
            .or_else(|| self.links.as_ref().and_then(|links| links.next.as_deref()))
            .filter(|href| !href.trim().is_empty())
    }
}

impl ProlificClient {
    /// List every study in a project whose state is one of `statuses`,
    /// following pagination until exhausted. Listing order is preserved.
    ///
    /// # Errors
    ///
    /// Any failed page aborts the listing with the corresponding
    /// [`ClientError`]. A next link that points at an already-fetched page
    /// yields [`ClientError::PaginationCycle`].
    pub async fn list_studies(
        &self,
        project_id: &str,
        statuses: &[StudyStatus],
    ) -> Result<Vec<StudySummary>, ClientError> {
        let mut url = self.endpoint(&["projects", project_id, "studies"])?;
        {
            let mut query = url.query_pairs_mut();
            for status in statuses {
                query.append_pair("state", status.as_wire());
            }
            query.append_pair("page_size", &self.page_size.to_string());
        }

        let mut studies = Vec::new();
        let mut visited = HashSet::new();
        let mut next = Some(url);
        let mut page_number = 0_usize;

        while let Some(url) = next.take() {
            if !visited.insert(url.as_str().to_string()) {
                return Err(ClientError::PaginationCycle {
                    url: url.to_string(),
                });
            }
            page_number += 1;

            let page: StudyPage = self.get_json(url.clone()).await?;
            tracing::debug!(
                project_id,
                page = page_number,
                count = page.results.len(),
                "fetched study page"
            );

            next = page.next_link().map(|href| resolve_link(&url, href)).transpose()?;
            studies.extend(page.results);
        }

        tracing::debug!(
            project_id,
            pages = page_number,
            total = studies.len(),
            "study listing complete"
        );
        Ok(studies)
    }

    /// Fetch the full record for one study.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API returns a
    /// non-success status, or the body cannot be parsed.
    pub async fn fetch_study_detail(&self, study_id: &str) -> Result<StudyDetail, ClientError> {
        let url = self.endpoint(&["studies", study_id])?;
        self.get_json(url).await
    }
}

/// Absolute links are used verbatim; relative ones resolve against the page
/// that returned them.
fn resolve_link(current: &Url, href: &str) -> Result<Url, ClientError> {
    current.join(href.trim()).map_err(|e| ClientError::InvalidUrl {
        url: href.to_string(),
        reason: e.to_string(),
    })
}
