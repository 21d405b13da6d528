//! Error handling and exit codes.

use matmul_core::exit_codes;
use matmul_orchestration::BenchError;

/// Exit code for a benchmark error.
pub fn handle_error(err: &BenchError) -> i32 {
    match err {
        BenchError::Config(_) => exit_codes::ERROR_CONFIG,
        BenchError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
        BenchError::NoValidResults => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any application error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<BenchError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use matmul_core::ConfigError;

    #[test]
    fn error_codes() {
        let mismatch = BenchError::Mismatch {
            left: "Naive".into(),
            right: "Strassen".into(),
            max_diff: 1.0,
        };
        assert_eq!(handle_error(&mismatch), 3);
        assert_eq!(handle_error(&BenchError::NoValidResults), 1);
        assert_eq!(
            handle_error(&ConfigError::UnknownStrategy("x".into()).into()),
            4
        );
    }

    #[test]
    fn anyhow_downcasts() {
        let config = anyhow::Error::new(BenchError::from(ConfigError::UnknownStrategy("x".into())));
        assert_eq!(exit_code(&config), exit_codes::ERROR_CONFIG);

        let io = anyhow::Error::new(std::io::Error::other("disk full"));
        assert_eq!(exit_code(&io), exit_codes::ERROR_GENERIC);
    }

    #[test]
    fn context_keeps_code() {
        let err = anyhow::Error::new(BenchError::NoValidResults).context("size 4");
        assert_eq!(exit_code(&err), exit_codes::ERROR_GENERIC);
        let err = anyhow::Error::new(BenchError::from(ConfigError::UnknownStrategy("x".into())))
            .context("selecting strategies");
        assert_eq!(exit_code(&err), exit_codes::ERROR_CONFIG);
    }
}
