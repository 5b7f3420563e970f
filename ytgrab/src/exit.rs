//! Process exit codes.
//!
//! The codes are part of the tool's contract with scripts that wrap it,
//! so they stay fixed across releases.

use ytgrab_dl::error::Error;

/// Any download failure without a more specific code.
pub const FAILURE: i32 = -100;

/// The required video link was not provided.
pub const USAGE: i32 = -101;

/// ffmpeg is missing or unusable.
pub const TRANSCODER_MISSING: i32 = -102;

/// Map a pipeline error onto its exit code.
pub fn code_for(error: &Error) -> i32 {
    match error {
        Error::TranscoderMissing { .. } => TRANSCODER_MISSING,
        _ => FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcoder_errors_get_their_own_code() {
        let error = Error::TranscoderMissing {
            detail: "ffmpeg not found".to_string(),
        };

        assert_eq!(code_for(&error), TRANSCODER_MISSING);
    }

    #[test]
    fn other_errors_map_to_generic_failure() {
        assert_eq!(code_for(&Error::NoAudioStream), FAILURE);
        assert_eq!(
            code_for(&Error::NoMatchingStream("720p".to_string())),
            FAILURE
        );
    }
}
