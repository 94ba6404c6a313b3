use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// Key under which the backend access token is stored.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Key under which the resolved user role is stored.
pub const USER_ROLE_KEY: &str = "user_role";

/// Small key-value store for session material. The commands and their
/// tests only see this trait, never a concrete storage mechanism.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> eyre::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> eyre::Result<()>;
    fn remove(&self, key: &str) -> eyre::Result<()>;
}

fn check_key(key: &str) -> eyre::Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(eyre::eyre!("invalid storage key: {key:?}"))
    }
}

/// One file per key under the app config directory, 0600 on Unix.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store under the default app config directory.
    pub fn open_default() -> eyre::Result<Self> {
        let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
        Self::open(base.join("com.encuesta.desktop").join("session"))
    }

    pub fn open(dir: PathBuf) -> eyre::Result<Self> {
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> eyre::Result<Option<String>> {
        check_key(key)?;
        match std::fs::read_to_string(self.path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> eyre::Result<()> {
        check_key(key)?;
        let path = self.path(key);
        let tmp_path = self.dir.join(format!("{key}.tmp"));
        std::fs::write(&tmp_path, value.as_bytes())?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
        }

        std::fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> eyre::Result<()> {
        check_key(key)?;
        let path = self.path(key);
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> eyre::Result<Option<String>> {
        check_key(key)?;
        Ok(self.values.lock().unwrap_or_else(|e| e.into_inner()).get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> eyre::Result<()> {
        check_key(key)?;
        self.values
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> eyre::Result<()> {
        check_key(key)?;
        self.values.lock().unwrap_or_else(|e| e.into_inner()).remove(key);
        Ok(())
    }
}
