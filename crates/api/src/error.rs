//! Server startup and runtime errors.

use std::io;

use thiserror::Error;

/// Errors that stop the HTTP server.
///
/// Request handlers never fail; these only cover binding and serving.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not bind the configured address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// The server loop exited with an I/O error.
    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn bind_error_message_includes_addr() {
        let err = ServerError::Bind {
            addr: "0.0.0.0:8080".to_string(),
            source: io::Error::new(io::ErrorKind::AddrInUse, "address in use"),
        };
        assert_eq!(err.to_string(), "failed to bind 0.0.0.0:8080: address in use");
        assert!(err.source().is_some());
    }

    #[test]
    fn serve_error_converts_from_io() {
        let err: ServerError = io::Error::other("connection reset").into();
        assert!(matches!(err, ServerError::Serve(_)));
        assert_eq!(err.to_string(), "server error: connection reset");
    }
}
