//! Exit status for pokedexctl

use pokedex_common::LookupError;

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for setup errors (bad server URL, stdin failure)
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when the query is blank
pub const EXIT_EMPTY_QUERY: i32 = 64;

/// Exit code when the server returns a body that is not a Lookup Result
pub const EXIT_INVALID_RESPONSE: i32 = 65;

/// Exit code when the server answers with a non-OK status
pub const EXIT_LOOKUP_FAILED: i32 = 69;

/// Exit code when the server is unavailable/unreachable
pub const EXIT_SERVER_UNAVAILABLE: i32 = 70;

pub fn exit_code_for(error: &LookupError) -> i32 {
    match error {
        LookupError::Transport(_) => EXIT_SERVER_UNAVAILABLE,
        LookupError::Status { .. } => EXIT_LOOKUP_FAILED,
        LookupError::Malformed(_) => EXIT_INVALID_RESPONSE,
    }
}
