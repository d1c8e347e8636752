use crate::cli::{actions::Action, globals::GlobalArgs};
use crate::folio;
use anyhow::{Context, Result};
use url::Url;

/// Handle the server action
pub async fn handle(action: Action, globals: &GlobalArgs) -> Result<()> {
    match action {
        Action::Server {
            port,
            dsn,
            allow_origin,
        } => {
            // Fail early on a malformed DSN instead of at pool creation
            Url::parse(&dsn).with_context(|| format!("Invalid database DSN: {dsn}"))?;

            folio::new(port, dsn, &allow_origin, globals).await?;
        }
    }

    Ok(())
}
