// Event types for the picker event loop

use crate::api::Character;

/// Events delivered to the event loop by background search tasks.
///
/// Each completion echoes the generation of the request that produced it so
/// the state machine can discard stale responses.
#[derive(Debug)]
pub enum AppEvent {
    /// A search completed successfully.
    SearchCompleted {
        generation: u64,
        results: Vec<Character>,
    },

    /// A search failed (network error, bad status, malformed payload).
    SearchFailed { generation: u64, error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_failed_carries_generation_and_error() {
        let event = AppEvent::SearchFailed {
            generation: 3,
            error: "connection refused".to_string(),
        };
        match event {
            AppEvent::SearchFailed { generation, error } => {
                assert_eq!(generation, 3);
                assert_eq!(error, "connection refused");
            }
            _ => panic!("Expected SearchFailed variant"),
        }
    }
}
