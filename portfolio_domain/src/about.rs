use portfolio_core::error::*;
use portfolio_core::model::{AboutProfile, Skill};
use portfolio_core::parse_doc_id;
use portfolio_db::about_db::{self, AboutFields};

use entrait::entrait_export as entrait;

/// Request body for both creating and updating the about document.
///
/// Absent and `null` fields are the same thing: not given.
#[derive(serde::Deserialize, serde::Serialize, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutInput {
    pub name: Option<String>,
    pub education: Option<Vec<String>>,
    pub profile_pic_url: Option<String>,
    pub skills: Option<Vec<Skill>>,
}

impl AboutInput {
    fn as_fields(&self) -> AboutFields<'_> {
        AboutFields {
            name: self.name.as_deref(),
            education: self.education.as_deref(),
            profile_pic_url: self.profile_pic_url.as_deref(),
            skills: self.skills.as_deref(),
        }
    }
}

#[entrait(pub AboutApi, mock_api=AboutApiMock)]
pub mod api {
    use super::*;

    pub async fn fetch_about(
        deps: &impl about_db::SelectFirstAbout,
    ) -> PfResult<Option<AboutProfile>> {
        deps.select_first_about()
            .await
            .internal_context("Error fetching about info")
    }

    pub async fn create_about(
        deps: &impl about_db::InsertAbout,
        input: AboutInput,
    ) -> PfResult<AboutProfile> {
        let about = deps
            .insert_about(input.as_fields())
            .await
            .internal_context("Error creating about document")?;
        tracing::info!(about_id = %about.id, "about document created");
        Ok(about)
    }

    pub async fn update_about(
        deps: &impl about_db::UpdateAbout,
        id: &str,
        input: AboutInput,
    ) -> PfResult<AboutProfile> {
        let about_id = parse_doc_id(id).ok_or(PfError::AboutNotFound)?;
        deps.update_about(about_id, input.as_fields())
            .await?
            .ok_or(PfError::AboutNotFound)
    }

    pub async fn delete_about(
        deps: &impl about_db::DeleteAbout,
        id: &str,
    ) -> PfResult<AboutProfile> {
        let about_id = parse_doc_id(id).ok_or(PfError::AboutNotFound)?;
        let about = deps
            .delete_about(about_id)
            .await?
            .ok_or(PfError::AboutNotFound)?;
        tracing::info!(about_id = %about.id, "about document deleted");
        Ok(about)
    }
}
