// libccid/src/protocol/parser.rs

use crate::error::ProtocolError;
use crate::Result;

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(ProtocolError::MalformedFrame {
            reason: format!("need {} bytes, got {}", min, data.len()),
        }
        .into());
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Read a little-endian u32 at `idx` with bounds checking.
pub fn le_u32_at(data: &[u8], idx: usize) -> Result<u32> {
    let s = slice_at(data, idx, 4)?;
    Ok(u32::from_le_bytes([s[0], s[1], s[2], s[3]]))
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    let end = idx.checked_add(len).ok_or_else(|| ProtocolError::MalformedFrame {
        reason: "slice bounds overflow".into(),
    })?;
    ensure_len(data, end)?;
    Ok(&data[idx..end])
}
