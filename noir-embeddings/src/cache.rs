//! Durable embedding cache: `content_hash → f32 blob` rows in SQLite.
//!
//! The full mapping is read into memory at open (lookups stay pure and
//! I/O-free); each insert writes through to the database. Vectors are
//! stored as little-endian f32 blobs, so round-trips preserve single
//! precision exactly.

use std::collections::HashMap;
use std::path::Path;

use rusqlite::Connection;
use tracing::{debug, info, warn};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS embeddings (
    content_hash TEXT PRIMARY KEY,
    vector BLOB NOT NULL
)";

/// Persistent `content_hash → embedding` mapping.
///
/// Append-only during a process lifetime: entries are added, never
/// replaced or removed, except through the explicit [`sweep`] maintenance
/// operation. A corrupt or unwritable database degrades to a cold,
/// in-memory-only cache — never an error for callers.
///
/// [`sweep`]: EmbeddingCache::sweep
pub struct EmbeddingCache {
    entries: HashMap<String, Vec<f32>>,
    /// Durability backend. `None` when the database could not be opened;
    /// the cache then serves the current process only.
    conn: Option<Connection>,
}

impl EmbeddingCache {
    /// Open (or create) the cache database at `path` and load all rows.
    ///
    /// Total: an unopenable or corrupt file logs a warning and yields a
    /// cold cache, which `ensure` will repopulate.
    pub fn open(path: &Path) -> Self {
        match Self::try_open(path) {
            Ok(cache) => cache,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "embedding cache unusable, starting cold");
                Self {
                    entries: HashMap::new(),
                    conn: None,
                }
            }
        }
    }

    /// In-memory cache for tests and ephemeral runs.
    pub fn open_in_memory() -> Self {
        match Connection::open_in_memory()
            .and_then(|conn| conn.execute(CREATE_TABLE, []).map(|_| conn))
        {
            Ok(conn) => Self {
                entries: HashMap::new(),
                conn: Some(conn),
            },
            Err(e) => {
                warn!(error = %e, "in-memory cache setup failed, running without durability");
                Self {
                    entries: HashMap::new(),
                    conn: None,
                }
            }
        }
    }

    fn try_open(path: &Path) -> rusqlite::Result<Self> {
        if let Some(parent) = path.parent() {
            // Best effort; open fails with a clear error if this didn't work.
            let _ = std::fs::create_dir_all(parent);
        }
        let conn = Connection::open(path)?;
        conn.execute(CREATE_TABLE, [])?;

        let mut entries = HashMap::new();
        {
            let mut stmt = conn.prepare("SELECT content_hash, vector FROM embeddings")?;
            let rows = stmt.query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, Vec<u8>>(1)?))
            })?;
            for row in rows {
                let (hash, bytes) = row?;
                match decode_vector(&bytes) {
                    Some(vector) => {
                        entries.insert(hash, vector);
                    }
                    None => {
                        warn!(hash = %hash, "malformed cached embedding, skipping row");
                    }
                }
            }
        }

        info!(path = %path.display(), entries = entries.len(), "embedding cache loaded");
        Ok(Self {
            entries,
            conn: Some(conn),
        })
    }

    /// Pure lookup by content hash. No side effects.
    pub fn get(&self, hash: &str) -> Option<&Vec<f32>> {
        self.entries.get(hash)
    }

    pub fn contains(&self, hash: &str) -> bool {
        self.entries.contains_key(hash)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an embedding and write it through to the database.
    ///
    /// A persistence failure is logged and does not abort: the in-memory
    /// entry still serves the current process, only durability of future
    /// runs is affected.
    pub fn insert(&mut self, hash: String, vector: Vec<f32>) {
        if let Some(conn) = &self.conn {
            let result = conn.execute(
                "INSERT OR REPLACE INTO embeddings (content_hash, vector) VALUES (?1, ?2)",
                rusqlite::params![hash, encode_vector(&vector)],
            );
            if let Err(e) = result {
                warn!(hash = %hash, error = %e, "failed to persist embedding");
            }
        }
        self.entries.insert(hash, vector);
        debug!(entries = self.entries.len(), "embedding cached");
    }

    /// Maintenance: drop entries whose hash is not in `live_hashes`.
    ///
    /// Edited or removed corpus records leave orphaned rows behind (the
    /// cache itself never garbage-collects). Operators invoke this after
    /// changing the corpus; it is never called automatically. Returns the
    /// number of entries removed.
    pub fn sweep<S: AsRef<str>>(&mut self, live_hashes: &[S]) -> usize {
        let live: std::collections::HashSet<&str> =
            live_hashes.iter().map(|s| s.as_ref()).collect();
        let stale: Vec<String> = self
            .entries
            .keys()
            .filter(|h| !live.contains(h.as_str()))
            .cloned()
            .collect();

        for hash in &stale {
            self.entries.remove(hash);
            if let Some(conn) = &self.conn {
                if let Err(e) = conn.execute(
                    "DELETE FROM embeddings WHERE content_hash = ?1",
                    rusqlite::params![hash],
                ) {
                    warn!(hash = %hash, error = %e, "failed to delete stale embedding");
                }
            }
        }

        if !stale.is_empty() {
            info!(removed = stale.len(), "swept stale embedding cache entries");
        }
        stale.len()
    }
}

fn encode_vector(vector: &[f32]) -> Vec<u8> {
    vector.iter().flat_map(|f| f.to_le_bytes()).collect()
}

fn decode_vector(bytes: &[u8]) -> Option<Vec<f32>> {
    if bytes.len() % 4 != 0 {
        return None;
    }
    Some(
        bytes
            .chunks_exact(4)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect(),
    )
}
