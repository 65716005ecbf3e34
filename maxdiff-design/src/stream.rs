use rand::rngs::StdRng;
use rand::SeedableRng;

use maxdiff_core::ParticipantId;

/// Domain-separation context for participant stream derivation.
/// Changing this string changes every generated design.
const STREAM_CONTEXT: &str = "maxdiff-design participant stream v1";

/// Derive the independent random stream for one participant.
///
/// The master seed and participant id are hashed into a 256-bit key, so
/// streams for different participants share no state and a participant's
/// stream does not depend on how many other participants exist.
pub fn participant_stream(seed: u64, participant_id: ParticipantId) -> StdRng {
    let mut material = [0u8; 12];
    material[..8].copy_from_slice(&seed.to_le_bytes());
    material[8..].copy_from_slice(&participant_id.to_le_bytes());
    let key = blake3::derive_key(STREAM_CONTEXT, &material);
    StdRng::from_seed(key)
}
