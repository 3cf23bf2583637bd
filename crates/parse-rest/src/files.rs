//! File upload and deletion.

use tracing::{debug, instrument};

use parse_core::error::InvalidInputError;
use parse_core::{Error, FileRef, Result};

use crate::client::Client;
use crate::rest::{Request, file_path};

impl Client {
    /// Upload `data` as a file called `name`.
    ///
    /// The service prefixes the name to make it unique; use the returned
    /// [`FileRef::name`] to refer to the file later.
    #[instrument(skip(self, data, content_type))]
    pub async fn upload_file(
        &self,
        name: &str,
        data: impl Into<Vec<u8>>,
        content_type: &str,
    ) -> Result<FileRef> {
        check_file_name(name)?;
        let data = data.into();
        debug!(len = data.len(), "Uploading file");

        self.rest
            .call_json(Request::post("UploadFile", file_path(name)).raw(data, content_type))
            .await
    }

    /// Delete a stored file by its service-assigned name.
    ///
    /// Fails with [`Error::RequiresMasterKey`] before any request is made if
    /// no master key is attached.
    #[instrument(skip(self))]
    pub async fn delete_file(&self, name: &str) -> Result<()> {
        if !self.has_master_key() {
            return Err(Error::RequiresMasterKey);
        }
        check_file_name(name)?;
        debug!("Deleting file");

        self.rest
            .call(Request::delete("DeleteFile", file_path(name)))
            .await?;
        Ok(())
    }
}

fn check_file_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains(['/', '?', '#']) {
        return Err(InvalidInputError::Other {
            message: format!("'{}' is not a valid file name", name),
        }
        .into());
    }
    Ok(())
}
