use crate::error::CleanError;
use std::env;
use std::path::PathBuf;

pub const TEMP_OVERRIDE_VAR: &str = "TEMP";

const USER_TEMP_COMPONENTS: &[&str] = &["AppData", "Local", "Temp"];

const SYSTEM_DIRS: &[&str] = &[r"C:\Windows\Temp", r"C:\Windows\Prefetch"];

/// Source of the user-specific locations the resolver builds on.
pub trait PathProvider {
    fn temp_override(&self) -> Option<PathBuf>;
    fn home_dir(&self) -> Option<PathBuf>;
}

pub struct EnvPathProvider;

impl PathProvider for EnvPathProvider {
    fn temp_override(&self) -> Option<PathBuf> {
        env::var_os(TEMP_OVERRIDE_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

pub struct PathResolver<P: PathProvider = EnvPathProvider> {
    provider: P,
}

impl PathResolver<EnvPathProvider> {
    pub fn new() -> Self {
        Self::with_provider(EnvPathProvider)
    }
}

impl<P: PathProvider> PathResolver<P> {
    pub fn with_provider(provider: P) -> Self {
        Self { provider }
    }

    /// Directories to sweep, in reporting order: the user temp directory
    /// first, then the fixed system directories.
    pub fn resolve(&self) -> Result<Vec<PathBuf>, CleanError> {
        let user_temp = match self.provider.temp_override() {
            Some(path) => path,
            None => {
                let home = self
                    .provider
                    .home_dir()
                    .ok_or(CleanError::HomeDirectoryUnavailable)?;
                default_user_temp(home)
            }
        };

        let mut targets = Vec::with_capacity(1 + SYSTEM_DIRS.len());
        targets.push(user_temp);
        targets.extend(SYSTEM_DIRS.iter().map(PathBuf::from));

        tracing::debug!("Resolved {} sweep targets", targets.len());
        Ok(targets)
    }
}

impl Default for PathResolver<EnvPathProvider> {
    fn default() -> Self {
        Self::new()
    }
}

fn default_user_temp(home: PathBuf) -> PathBuf {
    USER_TEMP_COMPONENTS
        .iter()
        .fold(home, |path, component| path.join(component))
}
