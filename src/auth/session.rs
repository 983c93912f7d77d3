use crate::errors::{AppError, AppResult};
use crate::models::Identity;
use crate::store::Store;
use crate::ui::messages::warning;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// What is persisted between invocations while a user is signed in.
#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    uid: String,
    email: String,
    signed_in_at: String,
}

/// Holds the live identity and gates everything else on it.
#[derive(Debug)]
pub struct SessionGate {
    path: PathBuf,
    current: Option<Identity>,
}

impl SessionGate {
    /// Restore the identity saved at `path`, if any. An unreadable session
    /// file counts as signed out and is removed.
    pub fn load(path: &Path) -> AppResult<Self> {
        let current = if path.exists() {
            let content = fs::read_to_string(path)?;
            match serde_yaml::from_str::<SessionFile>(&content) {
                Ok(saved) => Some(Identity {
                    uid: saved.uid,
                    email: saved.email,
                }),
                Err(e) => {
                    warning(format!(
                        "Discarding unreadable session file {}: {e}",
                        path.display()
                    ));
                    fs::remove_file(path)?;
                    None
                }
            }
        } else {
            None
        };

        Ok(Self {
            path: path.to_path_buf(),
            current,
        })
    }

    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn require(&self) -> AppResult<&Identity> {
        self.current.as_ref().ok_or(AppError::NotSignedIn)
    }

    /// Any failure is reported with the same generic message.
    pub fn sign_in(&mut self, store: &Store, email: &str, password: &str) -> AppResult<&Identity> {
        let identity = match store.verify_account(email, password) {
            Ok(identity) => identity,
            Err(e) => {
                let _ = store.log("login_failed", email, &e.to_string());
                return Err(AppError::LoginFailed);
            }
        };

        self.establish(store, identity, "login")
    }

    /// Password and confirmation must match before the auth service is
    /// contacted at all.
    pub fn sign_up(
        &mut self,
        store: &Store,
        email: &str,
        password: &str,
        confirmation: &str,
    ) -> AppResult<&Identity> {
        if password != confirmation {
            return Err(AppError::PasswordMismatch);
        }

        let identity = store
            .create_account(email, password)
            .map_err(|e| AppError::SignUpFailed(e.to_string()))?;

        self.establish(store, identity, "signup")
    }

    pub fn sign_out(&mut self, store: &Store) -> AppResult<()> {
        if let Some(identity) = self.current.take() {
            let _ = store.log("logout", &identity.email, "Signed out");
        }
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    fn establish(
        &mut self,
        store: &Store,
        identity: Identity,
        operation: &str,
    ) -> AppResult<&Identity> {
        let saved = SessionFile {
            uid: identity.uid.clone(),
            email: identity.email.clone(),
            signed_in_at: Local::now().to_rfc3339(),
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_yaml::to_string(&saved)?)?;

        store.log(operation, &identity.email, &format!("Signed in as {}", identity.uid))?;

        Ok(self.current.insert(identity))
    }
}
