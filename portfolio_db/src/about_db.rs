use crate::{DbResultExt, GetPgPool};

use portfolio_core::error::*;
use portfolio_core::model::{AboutProfile, Skill};

use entrait::entrait_export as entrait;
use sqlx::types::Json;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct AboutRow {
    about_id: Uuid,
    name: Option<String>,
    education: Vec<String>,
    profile_pic_url: Option<String>,
    skills: Json<Vec<Skill>>,
}

impl From<AboutRow> for AboutProfile {
    fn from(row: AboutRow) -> Self {
        Self {
            id: row.about_id,
            name: row.name,
            education: row.education,
            profile_pic_url: row.profile_pic_url,
            skills: row.skills.0,
        }
    }
}

/// Column values for insert and update.
///
/// `None` means "not given": empty on insert, unchanged on update.
#[derive(Clone, Copy, Default, Debug)]
pub struct AboutFields<'a> {
    pub name: Option<&'a str>,
    pub education: Option<&'a [String]>,
    pub profile_pic_url: Option<&'a str>,
    pub skills: Option<&'a [Skill]>,
}

#[entrait(pub SelectFirstAbout, mock_api=SelectFirstAboutMock)]
async fn select_first_about(deps: &impl GetPgPool) -> PfResult<Option<AboutProfile>> {
    let row = sqlx::query_as::<_, AboutRow>(
        // language=PostgreSQL
        r#"
            SELECT about_id, name, education, profile_pic_url, skills
            FROM app.about
            ORDER BY created_at
            LIMIT 1
        "#,
    )
    .fetch_optional(deps.get_pg_pool())
    .await?;

    Ok(row.map(Into::into))
}

#[entrait(pub InsertAbout, mock_api=InsertAboutMock)]
async fn insert_about(deps: &impl GetPgPool, fields: AboutFields<'_>) -> PfResult<AboutProfile> {
    let row = sqlx::query_as::<_, AboutRow>(
        // language=PostgreSQL
        r#"
            INSERT INTO app.about (name, education, profile_pic_url, skills)
            VALUES ($1, COALESCE($2::text[], '{}'), $3, COALESCE($4::jsonb, '[]'))
            RETURNING about_id, name, education, profile_pic_url, skills
        "#,
    )
    .bind(fields.name)
    .bind(fields.education)
    .bind(fields.profile_pic_url)
    .bind(fields.skills.map(Json))
    .fetch_one(deps.get_pg_pool())
    .await
    .on_constraint("about_singleton_key", |_| PfError::AboutExists)
    .on_data_exception("Error creating about document")?;

    tracing::debug!(about_id = %row.about_id, "inserted about document");

    Ok(row.into())
}

#[entrait(pub UpdateAbout, mock_api=UpdateAboutMock)]
async fn update_about(
    deps: &impl GetPgPool,
    about_id: Uuid,
    fields: AboutFields<'_>,
) -> PfResult<Option<AboutProfile>> {
    let row = sqlx::query_as::<_, AboutRow>(
        // language=PostgreSQL
        r#"
            UPDATE app.about
            SET
                name = COALESCE($2, name),
                education = COALESCE($3::text[], education),
                profile_pic_url = COALESCE($4, profile_pic_url),
                skills = COALESCE($5::jsonb, skills)
            WHERE about_id = $1
            RETURNING about_id, name, education, profile_pic_url, skills
        "#,
    )
    .bind(about_id)
    .bind(fields.name)
    .bind(fields.education)
    .bind(fields.profile_pic_url)
    .bind(fields.skills.map(Json))
    .fetch_optional(deps.get_pg_pool())
    .await?;

    Ok(row.map(Into::into))
}

#[entrait(pub DeleteAbout, mock_api=DeleteAboutMock)]
async fn delete_about(deps: &impl GetPgPool, about_id: Uuid) -> PfResult<Option<AboutProfile>> {
    let row = sqlx::query_as::<_, AboutRow>(
        // language=PostgreSQL
        r#"
            DELETE FROM app.about
            WHERE about_id = $1
            RETURNING about_id, name, education, profile_pic_url, skills
        "#,
    )
    .bind(about_id)
    .fetch_optional(deps.get_pg_pool())
    .await?;

    Ok(row.map(Into::into))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_test_db;

    use assert_matches::*;

    fn skills() -> Vec<Skill> {
        vec![Skill {
            name: "Rust".to_string(),
            icon_class: "fab fa-rust".to_string(),
        }]
    }

    #[tokio::test]
    #[ignore = "requires a postgres server at DATABASE_URL"]
    async fn should_insert_once_and_select_about() {
        let db = create_test_db().await;
        let education = vec!["B.Sc. in Computer Science".to_string()];
        let skills = skills();

        assert_eq!(db.select_first_about().await.unwrap(), None);

        let inserted = db
            .insert_about(AboutFields {
                name: Some("Llama"),
                education: Some(education.as_slice()),
                profile_pic_url: Some("images/pfp.jpeg"),
                skills: Some(skills.as_slice()),
            })
            .await
            .unwrap();

        assert_eq!(inserted.name.as_deref(), Some("Llama"));
        assert_eq!(inserted.education, education);
        assert_eq!(inserted.skills, skills);
        assert_eq!(db.select_first_about().await.unwrap(), Some(inserted.clone()));

        assert_matches!(
            db.insert_about(AboutFields {
                name: Some("Impostor"),
                ..Default::default()
            })
            .await,
            Err(PfError::AboutExists)
        );
        assert_eq!(db.select_first_about().await.unwrap(), Some(inserted));
    }

    #[tokio::test]
    #[ignore = "requires a postgres server at DATABASE_URL"]
    async fn missing_fields_should_insert_as_empty() {
        let db = create_test_db().await;

        let inserted = db.insert_about(AboutFields::default()).await.unwrap();

        assert_eq!(inserted.name, None);
        assert_eq!(inserted.profile_pic_url, None);
        assert!(inserted.education.is_empty());
        assert!(inserted.skills.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires a postgres server at DATABASE_URL"]
    async fn update_should_keep_omitted_fields() {
        let db = create_test_db().await;
        let skills = skills();
        let inserted = db
            .insert_about(AboutFields {
                name: Some("Llama"),
                profile_pic_url: Some("images/pfp.jpeg"),
                skills: Some(skills.as_slice()),
                ..Default::default()
            })
            .await
            .unwrap();

        let updated = db
            .update_about(
                inserted.id,
                AboutFields {
                    name: Some("NoDramaLlama"),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, inserted.id);
        assert_eq!(updated.name.as_deref(), Some("NoDramaLlama"));
        assert_eq!(updated.profile_pic_url, inserted.profile_pic_url);
        assert_eq!(updated.skills, skills);

        assert_eq!(
            db.update_about(Uuid::new_v4(), AboutFields::default())
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    #[ignore = "requires a postgres server at DATABASE_URL"]
    async fn delete_should_allow_recreation() {
        let db = create_test_db().await;
        let inserted = db.insert_about(AboutFields::default()).await.unwrap();

        assert_eq!(
            db.delete_about(inserted.id).await.unwrap(),
            Some(inserted.clone())
        );
        assert_eq!(db.delete_about(inserted.id).await.unwrap(), None);

        db.insert_about(AboutFields::default()).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires a postgres server at DATABASE_URL"]
    async fn rejected_update_value_should_stay_a_database_error() {
        let db = create_test_db().await;
        let inserted = db.insert_about(AboutFields::default()).await.unwrap();

        assert_matches!(
            db.update_about(
                inserted.id,
                AboutFields {
                    name: Some("bad\u{0}name"),
                    ..Default::default()
                },
            )
            .await,
            Err(PfError::Sqlx(sqlx::Error::Database(_)))
        );
        assert_eq!(db.select_first_about().await.unwrap(), Some(inserted));
    }
}
