//! Filesystem helpers for `PostgreSQL` test clusters.

use super::BoxError;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use postgresql_embedded::Settings;
use std::io::ErrorKind;

fn open_ambient_dir(path: &Utf8Path) -> Result<Dir, BoxError> {
    Dir::open_ambient_dir(path, ambient_authority()).map_err(|err| Box::new(err) as BoxError)
}

/// Reads a file, treating a missing file as `None`.
fn read_optional(dir_path: &Utf8Path, file_name: &str) -> Result<Option<String>, BoxError> {
    let dir = open_ambient_dir(dir_path)?;
    match dir.read_to_string(file_name) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(Box::new(err) as BoxError),
    }
}

pub(super) fn sync_password_from_file(settings: &mut Settings) -> Result<(), BoxError> {
    let lossy_path = settings.password_file.to_string_lossy();
    let password_path = Utf8Path::new(lossy_path.as_ref());
    let file_name = password_path.file_name().ok_or_else(|| {
        Box::new(std::io::Error::other("password path must include a file name")) as BoxError
    })?;
    let parent = password_path.parent().unwrap_or_else(|| Utf8Path::new("."));

    if let Some(contents) = read_optional(parent, file_name)? {
        let password = contents.trim_end();
        if !password.is_empty() {
            password.clone_into(&mut settings.password);
        }
    }
    Ok(())
}

/// Reads the listening port from line four of `postmaster.pid`.
pub(super) fn sync_port_from_pid(settings: &mut Settings) -> Result<(), BoxError> {
    let lossy_dir = settings.data_dir.to_string_lossy();
    let Some(contents) = read_optional(Utf8Path::new(lossy_dir.as_ref()), "postmaster.pid")? else {
        return Ok(());
    };

    let port = contents
        .lines()
        .nth(3)
        .and_then(|line| line.trim().parse::<u16>().ok());
    if let Some(listening_port) = port {
        settings.port = listening_port;
    }
    Ok(())
}
