quick_error! {
    /// Errors reported while encoding or decoding a frame.
    ///
    /// Decoding never yields a partially populated frame: any of these errors
    /// means the input was rejected as a whole.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Error {
        /// The input ended before the field being read.
        TruncatedFrame {
            display("frame is truncated")
        }
        /// A service tag without a customer tag, either in a frame being
        /// encoded or in the bytes being decoded.
        InvalidVlanStacking {
            display("service VLAN tag must be followed by a customer VLAN tag")
        }
        /// The trailing frame check sequence does not match the frame contents.
        InvalidChecksum { expected: u32, actual: u32 } {
            display("invalid frame check sequence: received {:#010x}, computed {:#010x}", expected, actual)
        }
        /// A VLAN identifier that does not fit in 12 bits.
        InvalidVlanId(id: u16) {
            display("VLAN identifier {} does not fit in 12 bits", id)
        }
        /// A priority code point that does not fit in 3 bits.
        InvalidPriority(pcp: u8) {
            display("VLAN priority {} does not fit in 3 bits", pcp)
        }
        /// The output buffer cannot hold the encoded frame.
        BufferTooSmall { needed: usize, actual: usize } {
            display("buffer of {} bytes cannot hold a {} byte frame", actual, needed)
        }
    }
}

/// A specialized result type for frame encoding and decoding.
pub type Result<T> = core::result::Result<T, Error>;
