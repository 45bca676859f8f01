use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use healthmate_core::entities::users;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};

use crate::calendar;

pub async fn test_db() -> DatabaseConnection {
    infrastructure::database::init_in_memory()
        .await
        .expect("in-memory database")
}

/// Inserts a user directly, skipping password hashing.
pub async fn create_user(db: &DatabaseConnection, username: &str) -> i32 {
    let existing = users::Entity::find().count(db).await.unwrap();
    let now = calendar::now();

    users::ActiveModel {
        phone: Set(format!("138{:08}", existing + 1)),
        username: Set(username.to_string()),
        password_hash: Set("unused".to_string()),
        avatar_ref: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .id
}

/// Migrated SQLite file shared by a pool of connections, so concurrent use
/// cases really contend for the same rows. The file is removed on drop.
pub struct FileDb {
    pub db: DatabaseConnection,
    path: PathBuf,
}

impl FileDb {
    pub async fn open(name: &str, max_connections: u32) -> Self {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
        let path = std::env::temp_dir().join(format!(
            "healthmate-{}-{}-{}.db",
            name,
            std::process::id(),
            nanos
        ));
        let url = format!("sqlite://{}?mode=rwc", path.display());

        let db = infrastructure::database::init_database(&url, max_connections)
            .await
            .expect("file database");
        infrastructure::database::run_migrations(&db)
            .await
            .expect("migrations");
        Self { db, path }
    }
}

impl Drop for FileDb {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm", "-journal"] {
            let _ = std::fs::remove_file(format!("{}{}", self.path.display(), suffix));
        }
    }
}
