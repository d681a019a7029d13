use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};

/// Upper bound on a single frame's payload. A length prefix beyond this is
/// treated as a corrupt or hostile frame rather than an allocation request.
pub const MAX_FRAME_BYTES: u32 = 16 * 1024 * 1024;

/// Writes one message: a 4-byte unsigned big-endian length prefix followed by
/// the JSON encoding of the value.
pub fn write_message<T: Serialize, W: Write>(writer: &mut W, message: &T) -> Result<()> {
    let payload = serde_json::to_vec(message)?;
    if payload.len() > MAX_FRAME_BYTES as usize {
        return Err(Error::Protocol(format!(
            "outgoing frame of {} bytes exceeds the {MAX_FRAME_BYTES} byte cap",
            payload.len()
        )));
    }
    writer.write_all(&(payload.len() as u32).to_be_bytes())?;
    writer.write_all(&payload)?;
    writer.flush()?;
    Ok(())
}

/// Reads one length-prefixed message and decodes it as `T`. A short read,
/// an oversized prefix, or a payload that does not parse into `T` is fatal
/// to the session.
pub fn read_message<T: DeserializeOwned, R: Read>(reader: &mut R) -> Result<T> {
    let mut prefix = [0u8; 4];
    reader.read_exact(&mut prefix)?;
    let length = u32::from_be_bytes(prefix);
    if length > MAX_FRAME_BYTES {
        return Err(Error::Protocol(format!(
            "incoming frame of {length} bytes exceeds the {MAX_FRAME_BYTES} byte cap"
        )));
    }
    let mut payload = vec![0u8; length as usize];
    reader.read_exact(&mut payload)?;
    Ok(serde_json::from_slice(&payload)?)
}
