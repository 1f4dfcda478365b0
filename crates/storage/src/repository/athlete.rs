use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use crate::dto::athlete::{ColumnValue, CreateAthleteRequest, UpdateAthleteRequest};
use crate::error::{Result, StorageError, UniqueField, is_unique_violation};
use crate::models::Athlete;

pub struct AthleteRepository<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// List athletes attached to a training center
    pub async fn list_by_center(&mut self, center_id: i64) -> Result<Vec<Athlete>> {
        let athletes = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT id, nome, peso, altura, idade, sexo, cpf, telefone,
                   categoria_id, centro_treinamento_id
            FROM atleta
            WHERE centro_treinamento_id = ?
            ORDER BY id
            "#,
        )
        .bind(center_id)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(athletes)
    }

    /// Create a new athlete, rejecting a CPF or phone already in use
    pub async fn create(&mut self, req: &CreateAthleteRequest) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            INSERT INTO atleta (nome, peso, altura, idade, sexo, cpf, telefone, categoria_id)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, nome, peso, altura, idade, sexo, cpf, telefone,
                      categoria_id, centro_treinamento_id
            "#,
        )
        .bind(&req.name)
        .bind(req.weight)
        .bind(req.height)
        .bind(req.age)
        .bind(&req.sex)
        .bind(&req.cpf)
        .bind(&req.phone)
        .bind(req.category_id)
        .fetch_one(&mut *self.conn)
        .await;

        match athlete {
            Ok(athlete) => {
                tracing::debug!(athlete_id = athlete.id, "Athlete inserted");
                Ok(athlete)
            }
            Err(e) if is_unique_violation(&e) => {
                let field = self.duplicated_field(&req.cpf).await?;
                Err(StorageError::DuplicateKey(field))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Which unique column a rejected insert collided on. A taken CPF wins
    /// when both collide, whatever column SQLite happened to report.
    async fn duplicated_field(&mut self, cpf: &str) -> Result<UniqueField> {
        let cpf_taken: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM atleta WHERE cpf = ?)")
                .bind(cpf)
                .fetch_one(&mut *self.conn)
                .await?;

        if cpf_taken {
            Ok(UniqueField::Cpf)
        } else {
            Ok(UniqueField::Telefone)
        }
    }

    /// Update only the supplied fields. Uniqueness is not re-checked here, a
    /// clash surfaces as a plain database error. Returns the rows touched.
    pub async fn update(&mut self, id: i64, req: &UpdateAthleteRequest) -> Result<u64> {
        let changes = req.changes();
        if changes.is_empty() {
            return Err(StorageError::NoChanges);
        }

        let mut builder = QueryBuilder::<Sqlite>::new("UPDATE atleta SET ");
        let mut assignments = builder.separated(", ");
        for (column, value) in changes {
            assignments.push(column);
            assignments.push_unseparated(" = ");
            match value {
                ColumnValue::Text(v) => assignments.push_bind_unseparated(v),
                ColumnValue::Real(v) => assignments.push_bind_unseparated(v),
                ColumnValue::Integer(v) => assignments.push_bind_unseparated(v),
            };
        }
        builder.push(" WHERE id = ").push_bind(id);

        let result = builder.build().execute(&mut *self.conn).await?;

        Ok(result.rows_affected())
    }

    /// Point an athlete at a training center. Neither ID is checked for existence.
    pub async fn associate_center(&mut self, athlete_id: i64, center_id: i64) -> Result<u64> {
        let result = sqlx::query("UPDATE atleta SET centro_treinamento_id = ? WHERE id = ?")
            .bind(center_id)
            .bind(athlete_id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::temp_database;

    async fn find(conn: &mut SqliteConnection, id: i64) -> Athlete {
        sqlx::query_as::<_, Athlete>(
            r#"
            SELECT id, nome, peso, altura, idade, sexo, cpf, telefone,
                   categoria_id, centro_treinamento_id
            FROM atleta
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_one(conn)
        .await
        .unwrap()
    }

    fn ana() -> CreateAthleteRequest {
        CreateAthleteRequest {
            name: "Ana".to_string(),
            weight: 60.0,
            height: 1.65,
            age: 25,
            sex: "F".to_string(),
            cpf: "111".to_string(),
            phone: "999".to_string(),
            category_id: 1,
        }
    }

    fn athlete(cpf: &str, phone: &str) -> CreateAthleteRequest {
        CreateAthleteRequest {
            name: format!("Athlete {cpf}"),
            cpf: cpf.to_string(),
            phone: phone.to_string(),
            ..ana()
        }
    }

    async fn count(conn: &mut SqliteConnection) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM atleta")
            .fetch_one(conn)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_assigned_id() {
        let (_dir, db) = temp_database().await;
        let mut conn = db.connect().await.unwrap();

        let created = AthleteRepository::new(&mut conn).create(&ana()).await.unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.name, "Ana");
        assert_eq!(created.category_id, Some(1));
        assert_eq!(created.training_center_id, None);
    }

    #[tokio::test]
    async fn test_create_duplicate_cpf() {
        let (_dir, db) = temp_database().await;
        let mut conn = db.connect().await.unwrap();
        let mut repo = AthleteRepository::new(&mut conn);

        repo.create(&ana()).await.unwrap();
        let err = repo.create(&athlete("111", "123")).await.unwrap_err();

        assert!(matches!(err, StorageError::DuplicateKey(UniqueField::Cpf)));
        assert!(err.is_unique_violation());
        assert_eq!(count(&mut conn).await, 1);
    }

    #[tokio::test]
    async fn test_create_exact_repeat_reports_cpf() {
        let (_dir, db) = temp_database().await;
        let mut conn = db.connect().await.unwrap();
        let mut repo = AthleteRepository::new(&mut conn);

        let first = repo.create(&ana()).await.unwrap();
        let err = repo.create(&ana()).await.unwrap_err();

        assert_eq!(first.id, 1);
        assert!(matches!(err, StorageError::DuplicateKey(UniqueField::Cpf)));
        assert_eq!(err.to_string(), "CPF já cadastrado");
        assert_eq!(count(&mut conn).await, 1);
    }

    #[tokio::test]
    async fn test_create_accepts_values_without_range_checks() {
        let (_dir, db) = temp_database().await;
        let mut conn = db.connect().await.unwrap();

        let created = AthleteRepository::new(&mut conn)
            .create(&CreateAthleteRequest {
                name: String::new(),
                weight: -1.0,
                age: -3,
                category_id: 0,
                ..ana()
            })
            .await
            .unwrap();

        assert_eq!(created.name, "");
        assert_eq!(created.weight, -1.0);
        assert_eq!(created.category_id, Some(0));
    }

    #[tokio::test]
    async fn test_create_duplicate_phone() {
        let (_dir, db) = temp_database().await;
        let mut conn = db.connect().await.unwrap();
        let mut repo = AthleteRepository::new(&mut conn);

        repo.create(&ana()).await.unwrap();
        let err = repo.create(&athlete("222", "999")).await.unwrap_err();

        assert!(matches!(err, StorageError::DuplicateKey(UniqueField::Telefone)));
        assert_eq!(count(&mut conn).await, 1);
    }

    #[tokio::test]
    async fn test_create_with_unknown_category() {
        let (_dir, db) = temp_database().await;
        let mut conn = db.connect().await.unwrap();

        let created = AthleteRepository::new(&mut conn)
            .create(&CreateAthleteRequest {
                category_id: 42,
                ..ana()
            })
            .await
            .unwrap();

        assert_eq!(created.category_id, Some(42));
    }

    #[tokio::test]
    async fn test_update_without_fields_is_rejected() {
        let (_dir, db) = temp_database().await;
        let mut conn = db.connect().await.unwrap();
        let mut repo = AthleteRepository::new(&mut conn);

        let created = repo.create(&ana()).await.unwrap();
        let err = repo
            .update(created.id, &UpdateAthleteRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::NoChanges));
        assert_eq!(find(&mut *repo.conn, created.id).await, created);
    }

    #[tokio::test]
    async fn test_update_single_field_keeps_the_rest() {
        let (_dir, db) = temp_database().await;
        let mut conn = db.connect().await.unwrap();
        let mut repo = AthleteRepository::new(&mut conn);

        let created = repo.create(&ana()).await.unwrap();
        let touched = repo
            .update(
                created.id,
                &UpdateAthleteRequest {
                    weight: Some(62.5),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(touched, 1);
        let updated = find(&mut *repo.conn, created.id).await;
        assert_eq!(
            updated,
            Athlete {
                weight: 62.5,
                ..created
            }
        );
    }

    #[tokio::test]
    async fn test_update_several_fields() {
        let (_dir, db) = temp_database().await;
        let mut conn = db.connect().await.unwrap();
        let mut repo = AthleteRepository::new(&mut conn);

        let created = repo.create(&ana()).await.unwrap();
        repo.update(
            created.id,
            &UpdateAthleteRequest {
                name: Some("Ana Maria".to_string()),
                age: Some(26),
                category_id: Some(3),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let updated = find(&mut *repo.conn, created.id).await;
        assert_eq!(updated.name, "Ana Maria");
        assert_eq!(updated.age, 26);
        assert_eq!(updated.category_id, Some(3));
        assert_eq!(updated.cpf, "111");
    }

    #[tokio::test]
    async fn test_update_missing_athlete_touches_nothing() {
        let (_dir, db) = temp_database().await;
        let mut conn = db.connect().await.unwrap();

        let touched = AthleteRepository::new(&mut conn)
            .update(
                99,
                &UpdateAthleteRequest {
                    age: Some(30),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(touched, 0);
    }

    #[tokio::test]
    async fn test_update_to_taken_cpf_is_a_database_error() {
        let (_dir, db) = temp_database().await;
        let mut conn = db.connect().await.unwrap();
        let mut repo = AthleteRepository::new(&mut conn);

        repo.create(&ana()).await.unwrap();
        let other = repo.create(&athlete("222", "888")).await.unwrap();

        let err = repo
            .update(
                other.id,
                &UpdateAthleteRequest {
                    cpf: Some("111".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::Database(_)));
        assert!(err.is_unique_violation());
    }

    #[tokio::test]
    async fn test_associate_with_unknown_center() {
        let (_dir, db) = temp_database().await;
        let mut conn = db.connect().await.unwrap();
        let mut repo = AthleteRepository::new(&mut conn);

        let created = repo.create(&ana()).await.unwrap();
        let touched = repo.associate_center(created.id, 404).await.unwrap();

        assert_eq!(touched, 1);
        assert_eq!(
            find(&mut *repo.conn, created.id).await.training_center_id,
            Some(404)
        );
    }

    #[tokio::test]
    async fn test_list_by_center_returns_only_matching() {
        let (_dir, db) = temp_database().await;
        let mut conn = db.connect().await.unwrap();
        let mut repo = AthleteRepository::new(&mut conn);

        let first = repo.create(&athlete("1", "10")).await.unwrap();
        let second = repo.create(&athlete("2", "20")).await.unwrap();
        let third = repo.create(&athlete("3", "30")).await.unwrap();
        repo.associate_center(first.id, 1).await.unwrap();
        repo.associate_center(second.id, 2).await.unwrap();
        repo.associate_center(third.id, 1).await.unwrap();

        let mut ids: Vec<i64> = repo
            .list_by_center(1)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();
        ids.sort();

        assert_eq!(ids, vec![first.id, third.id]);
        assert!(repo.list_by_center(3).await.unwrap().is_empty());
    }
}
