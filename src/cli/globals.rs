use secrecy::SecretString;

/// Process-wide configuration, loaded once at startup and injected into the
/// router as an extension rather than read from ambient global state.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub token_secret: SecretString,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(token_secret: SecretString) -> Self {
        Self { token_secret }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_global_args() {
        let args = GlobalArgs::new(String::from("sekret").into());
        assert_eq!(args.token_secret.expose_secret(), "sekret");
    }

    #[test]
    fn test_global_args_debug_redacts_secret() {
        let args = GlobalArgs::new(String::from("sekret").into());
        assert!(!format!("{args:?}").contains("sekret"));
    }
}
