//! Asynchronous, observable session store.
//!
//! `SessionStore` puts the synchronous [`Sessions`] table behind a mutex and
//! runs every query on tokio's blocking pool, so callers on an async task never
//! block on SQLite. The "all sessions" feed is an [`Observable`] that is
//! republished after every insert, update and clear.
//!
//! ## Ordering of feed updates
//!
//! A mutation and the re-read of the table happen under the same connection
//! lock and get a generation number there. Publishing skips any snapshot older
//! than the last one published, so two writers finishing out of order cannot
//! leave a stale list in the feed.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sleeptrack::libs::session::SleepSession;
//! use sleeptrack::libs::store::SessionStore;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let store = SessionStore::open_default()?;
//! let _subscription = store.get_all().subscribe(|nights| println!("{} nights", nights.len()));
//! store.insert(SleepSession::new(1_700_000_000_000)).await?;
//! # Ok(())
//! # }
//! ```

use crate::db::db::Db;
use crate::db::sessions::Sessions;
use crate::libs::error::StoreError;
use crate::libs::observable::Observable;
use crate::libs::session::SleepSession;
use anyhow::Result;
use parking_lot::Mutex;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

struct Inner {
    sessions: Sessions,
    /// Bumped on every mutation, under the connection lock.
    generation: u64,
}

/// Handle to the session table. Clones share the connection and the feed.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<Inner>>,
    feed: Observable<Vec<SleepSession>>,
    /// Generation of the snapshot currently in `feed`.
    published: Arc<Mutex<u64>>,
}

impl SessionStore {
    /// Wraps an open database and loads the initial feed.
    pub fn new(db: Db) -> Result<Self, StoreError> {
        let sessions = Sessions::new(db);
        let initial = sessions.get_all()?;
        debug!(count = initial.len(), "session store opened");

        Ok(SessionStore {
            inner: Arc::new(Mutex::new(Inner { sessions, generation: 0 })),
            feed: Observable::new(initial),
            published: Arc::new(Mutex::new(0)),
        })
    }

    /// Opens the database configured for this user.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Db::new()?)?)
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(Db::open(path)?)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(Db::open_in_memory()?)?)
    }

    /// Inserts `session` and returns its id; the id is assigned when `session.id` is `None`.
    pub async fn insert(&self, session: SleepSession) -> Result<i64, StoreError> {
        let id = self.mutate(move |sessions| Ok(sessions.insert(&session)?)).await?;
        debug!(id, "sleep session inserted");
        Ok(id)
    }

    /// Overwrites the stored row with the same id.
    ///
    /// Fails with [`StoreError::NotFound`] when no row has that id, and with
    /// [`StoreError::MissingId`] when the session was never inserted.
    pub async fn update(&self, session: SleepSession) -> Result<(), StoreError> {
        let id = session.id.ok_or(StoreError::MissingId)?;
        self.mutate(move |sessions| match sessions.update(id, &session)? {
            0 => Err(StoreError::NotFound(id)),
            _ => Ok(()),
        })
        .await?;
        debug!(id, "sleep session updated");
        Ok(())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<SleepSession>, StoreError> {
        self.read(move |sessions| Ok(sessions.get_by_id(id)?)).await
    }

    /// The session with the highest id, or `None` when the table is empty.
    pub async fn get_most_recent(&self) -> Result<Option<SleepSession>, StoreError> {
        self.read(|sessions| Ok(sessions.get_most_recent()?)).await
    }

    /// Live list of all sessions, newest first.
    ///
    /// The returned observable is shared by every caller and changes whenever
    /// the table does.
    pub fn get_all(&self) -> Observable<Vec<SleepSession>> {
        self.feed.clone()
    }

    /// Deletes every session. The table and its id counter stay.
    pub async fn clear(&self) -> Result<(), StoreError> {
        let removed = self.mutate(|sessions| Ok(sessions.clear()?)).await?;
        debug!(removed, "sleep sessions cleared");
        Ok(())
    }

    async fn read<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&Sessions) -> Result<T, StoreError> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || {
            let inner = inner.lock();
            f(&inner.sessions)
        })
        .await?
    }

    /// Runs a mutation on the blocking pool, then republishes the feed.
    ///
    /// A failed mutation publishes nothing.
    async fn mutate<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&Sessions) -> Result<T, StoreError> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        let (value, generation, snapshot) = tokio::task::spawn_blocking(move || -> Result<_, StoreError> {
            let mut inner = inner.lock();
            let value = f(&inner.sessions)?;
            inner.generation += 1;
            let snapshot = inner.sessions.get_all()?;
            Ok((value, inner.generation, snapshot))
        })
        .await??;

        self.publish(generation, snapshot);
        Ok(value)
    }

    fn publish(&self, generation: u64, snapshot: Vec<SleepSession>) {
        let mut published = self.published.lock();
        if generation > *published {
            *published = generation;
            self.feed.set(snapshot);
        }
    }
}
