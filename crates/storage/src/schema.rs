use sqlx::SqliteConnection;

use crate::error::Result;

pub(crate) async fn create_tables(conn: &mut SqliteConnection) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS atleta (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT NOT NULL,
            peso REAL NOT NULL,
            altura REAL NOT NULL,
            idade INTEGER NOT NULL,
            sexo TEXT NOT NULL,
            cpf TEXT NOT NULL UNIQUE,
            telefone TEXT NOT NULL UNIQUE,
            categoria_id INTEGER,
            centro_treinamento_id INTEGER,
            FOREIGN KEY (categoria_id) REFERENCES categoria(id),
            FOREIGN KEY (centro_treinamento_id) REFERENCES centro_treinamento(id)
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categoria (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT NOT NULL
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS centro_treinamento (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT NOT NULL,
            endereco TEXT NOT NULL,
            proprietario TEXT NOT NULL
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    tracing::debug!("Schema ready");

    Ok(())
}
