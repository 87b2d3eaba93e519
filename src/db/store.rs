//! MongoDB client wrapper with typed collection accessors.

use bson::doc;
use mongodb::{Client, Collection, Database};

use crate::config::settings::StoreConfig;
use crate::error::AppError;
use crate::models::{Photo, SchemaInfo, User};

/// Collection holding user records
const USERS: &str = "users";

/// Collection holding photo records with embedded comments
const PHOTOS: &str = "photos";

/// Collection holding the schema info singleton
const SCHEMA_INFOS: &str = "schemainfos";

/// Handle to the document store.
///
/// The driver's `Client` is internally reference counted, so cloning is
/// cheap. Structures holding a `Store` can derive `Clone` without extra
/// `Arc` wrapping.
#[derive(Clone)]
pub struct Store {
    db: Database,
}

impl Store {
    /// Connects to the store and verifies the connection with a ping.
    ///
    /// Server selection and connect timeouts are set explicitly so an
    /// unreachable store fails fast instead of hanging at startup.
    ///
    /// # Errors
    /// Returns `AppError::Database` when the URI cannot be parsed, the client
    /// cannot be created, or the ping fails.
    pub async fn connect(config: &StoreConfig) -> Result<Self, AppError> {
        // Append timeouts as URI options so an unreachable store cannot hang
        // server selection indefinitely
        let timeout_ms = config.connect_timeout * 1000;
        let uri = if config.uri.contains('?') {
            format!(
                "{}&serverSelectionTimeoutMS={}&connectTimeoutMS={}",
                config.uri, timeout_ms, timeout_ms
            )
        } else {
            format!(
                "{}?serverSelectionTimeoutMS={}&connectTimeoutMS={}",
                config.uri, timeout_ms, timeout_ms
            )
        };

        let client = Client::with_uri_str(&uri)
            .await
            .map_err(|e| AppError::database("connect to store", e))?;
        let db = client.database(&config.database);

        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::database("ping store", e))?;

        tracing::info!(database = %config.database, "Connected to document store");

        Ok(Self { db })
    }

    /// The users collection.
    pub fn users(&self) -> Collection<User> {
        self.db.collection(USERS)
    }

    /// The photos collection.
    pub fn photos(&self) -> Collection<Photo> {
        self.db.collection(PHOTOS)
    }

    /// The schema info collection.
    pub fn schema_infos(&self) -> Collection<SchemaInfo> {
        self.db.collection(SCHEMA_INFOS)
    }

    /// Round-trips a ping command, used by the health endpoints.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::database("ping store", e))?;
        Ok(())
    }
}
