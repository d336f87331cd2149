use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A worker thread panicked while matching its chunk of haystacks. The remaining chunks
    /// were still matched and joined before this was returned.
    #[error("worker for chunk {chunk} (haystacks {start}..{end}) panicked: {message}")]
    WorkerPanicked {
        chunk: usize,
        start: usize,
        end: usize,
        message: String,
    },
}

impl Error {
    pub(crate) fn worker_panicked(
        chunk: usize,
        range: std::ops::Range<usize>,
        payload: Box<dyn std::any::Any + Send>,
    ) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };
        Error::WorkerPanicked {
            chunk,
            start: range.start,
            end: range.end,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_panicked_message() {
        let err = Error::worker_panicked(2, 500..750, Box::new(String::from("exploded")));
        assert_eq!(
            err,
            Error::WorkerPanicked {
                chunk: 2,
                start: 500,
                end: 750,
                message: "exploded".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "worker for chunk 2 (haystacks 500..750) panicked: exploded"
        );

        let err = Error::worker_panicked(0, 0..1, Box::new(7_u32));
        assert!(err.to_string().ends_with("unknown panic payload"));
    }
}
