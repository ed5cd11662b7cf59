//! Provide utility functions for the Ethernet frame check sequence.
//!
//! The FCS is the IEEE 802.3 CRC-32 (reflected polynomial 0xedb88320,
//! initial value and final xor 0xffffffff), the same CRC used by zlib. It is
//! transmitted big-endian after the last payload byte.

use byteorder::{ByteOrder, NetworkEndian};
use bytes::Buf;
use crc::{Crc, CRC_32_ISO_HDLC};

use crate::{Error, Result};

/// Length of the frame check sequence trailer.
pub const FCS_LEN: usize = 4;

static CRC32_IEEE: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Compute the CRC-32 of a contiguous byte slice.
pub fn checksum(data: &[u8]) -> u32 {
    CRC32_IEEE.checksum(data)
}

/// Compute the CRC-32 of the first `len` bytes of a possibly multi-segment
/// buffer `buf`.
pub fn from_buf<T: Buf>(buf: T, len: usize) -> u32 {
    let mut buf = buf.take(len);
    let mut digest = CRC32_IEEE.digest();
    while buf.has_remaining() {
        let chunk = buf.chunk();
        let chunk_len = chunk.len();
        digest.update(chunk);
        buf.advance(chunk_len);
    }
    digest.finalize()
}

/// Compute the FCS of `buf[..buf.len() - FCS_LEN]` and store it in the last
/// four bytes.
///
/// # Panics
/// The function panics if `buf` is shorter than `FCS_LEN`.
pub(crate) fn fill(buf: &mut [u8]) {
    let split = buf.len() - FCS_LEN;
    let fcs = checksum(&buf[..split]);
    NetworkEndian::write_u32(&mut buf[split..], fcs);
}

/// Verify the trailing FCS of `data` and return the bytes that precede it.
pub fn split_verified(data: &[u8]) -> Result<&[u8]> {
    if data.len() < FCS_LEN {
        log::debug!("{} bytes cannot hold a frame check sequence", data.len());
        return Err(Error::TruncatedFrame);
    }
    let (frame, trailer) = data.split_at(data.len() - FCS_LEN);
    let expected = NetworkEndian::read_u32(trailer);
    let actual = checksum(frame);
    if expected != actual {
        log::debug!(
            "frame check sequence mismatch: received {:#010x}, computed {:#010x}",
            expected,
            actual
        );
        return Err(Error::InvalidChecksum { expected, actual });
    }
    Ok(frame)
}
