// src/host/download.rs

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{core::sanitize::strip_separators, error::ExportError};

/// Hands finished bytes to whatever saves files for the user.
pub trait FileSaver {
    /// Save `bytes` under the suggested `filename`; returns where it landed,
    /// which may differ from the suggestion if that name was taken.
    fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<PathBuf, ExportError>;
}

/// Saves into a fixed output directory, creating it on first use.
/// Never overwrites: a taken name becomes `stem (2).ext`, `stem (3).ext`, ...
pub struct DirSaver {
    dir: PathBuf,
}

impl DirSaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileSaver for DirSaver {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
        ensure_directory(&self.dir)?;
        let name = strip_separators(filename);

        for n in 1..=MAX_SUFFIX {
            let path = self.dir.join(numbered_name(&name, n));
            match write_new(&path, bytes) {
                Ok(()) => {
                    logd!("Download: wrote {} bytes → {}", bytes.len(), path.display());
                    return Ok(path);
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    logd!("Download: {} taken, trying next", path.display());
                }
                Err(source) => return Err(ExportError::Io { path, source }),
            }
        }

        let path = self.dir.join(name);
        Err(ExportError::Io {
            path,
            source: io::Error::new(io::ErrorKind::AlreadyExists, "no free filename left"),
        })
    }
}

const MAX_SUFFIX: u32 = 1000;

/// `n == 1` is the name itself; later attempts get ` (n)` before the extension.
fn numbered_name(name: &str, n: u32) -> String {
    if n == 1 {
        return s!(name);
    }
    match name.rfind('.') {
        Some(dot) if dot > 0 => format!("{} ({n}){}", &name[..dot], &name[dot..]),
        _ => format!("{name} ({n})"),
    }
}

fn write_new(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(bytes)?;
    file.flush()
}

fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| ExportError::Io { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}
