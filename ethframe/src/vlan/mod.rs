//! IEEE 802.1Q VLAN tags.
//!
//! On the wire a tag is 4 bytes: a 2-byte tag protocol identifier (TPID,
//! 0x8100 for a customer tag and 0x88a8 for an 802.1ad service tag) followed
//! by the 2-byte tag control information (TCI):
//!
//! ```text
//!  15 14 13  12  11                                   0
//! +--------+-----+-------------------------------------+
//! |  PCP   | DEI |                VID                  |
//! +--------+-----+-------------------------------------+
//! ```
//!
//! [`Vlan`] models the TCI only. The TPID is chosen by the frame codec from the
//! tag's position in the frame.

use byteorder::{ByteOrder, NetworkEndian};

use crate::{Error, Result};

/// Length of the tag control information.
pub const VLAN_TCI_LEN: usize = 2;

/// Length of a full tag, TPID included.
pub const VLAN_HEADER_LEN: usize = 4;

/// Largest value that fits in the 12-bit VLAN identifier.
///
/// The value itself is reserved by 802.1Q.
pub const VLAN_ID_MAX: u16 = 0x0fff;

enum_sim! {
    /// The 3-bit priority code point of a VLAN tag.
    ///
    /// The named values are the 802.1Q traffic types. Note that
    /// `BACKGROUND` ranks below `BEST_EFFORT` despite its larger value.
    pub struct Priority (u8) {
        /// Default priority.
        BEST_EFFORT = 0,
        /// Lowest priority.
        BACKGROUND = 1,
        /// Best effort for important traffic.
        EXCELLENT_EFFORT = 2,
        /// Business critical applications.
        CRITICAL_APPLICATIONS = 3,
        /// Video, less than 100ms latency and jitter.
        VIDEO = 4,
        /// Voice, less than 10ms latency and jitter.
        VOICE = 5,
        /// Inter-network routing protocols.
        INTERNETWORK_CONTROL = 6,
        /// Highest priority, network maintenance traffic.
        NETWORK_CONTROL = 7,
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::BEST_EFFORT
    }
}

/// The tag control information of an 802.1Q VLAN tag.
#[derive(Debug, Default, Hash, PartialEq, Eq, Clone, Copy)]
pub struct Vlan {
    /// Priority code point, 3 bits.
    pub priority: Priority,
    /// Drop eligible indicator: the frame may be discarded under congestion.
    pub drop_eligible: bool,
    /// VLAN identifier, 12 bits.
    pub id: u16,
}

impl Vlan {
    /// Create a tag, checking that every field fits its bit width.
    pub fn new(priority: Priority, drop_eligible: bool, id: u16) -> Result<Self> {
        let vlan = Vlan {
            priority,
            drop_eligible,
            id,
        };
        vlan.check()?;
        Ok(vlan)
    }

    /// Query whether the identifier is the reserved value 4095.
    #[inline]
    pub fn is_reserved(&self) -> bool {
        self.id == VLAN_ID_MAX
    }

    fn check(&self) -> Result<()> {
        if self.priority > Priority::NETWORK_CONTROL {
            return Err(Error::InvalidPriority(self.priority.raw()));
        }
        if self.id > VLAN_ID_MAX {
            return Err(Error::InvalidVlanId(self.id));
        }
        Ok(())
    }

    /// Pack the tag into the 2-byte TCI field, big-endian.
    ///
    /// Fields wider than their bit width are rejected rather than truncated.
    pub fn encode(&self) -> Result<[u8; VLAN_TCI_LEN]> {
        self.check()?;
        let tci = (u16::from(self.priority.raw()) << 13)
            | (u16::from(self.drop_eligible) << 12)
            | self.id;
        let mut buf = [0; VLAN_TCI_LEN];
        NetworkEndian::write_u16(&mut buf, tci);
        Ok(buf)
    }

    /// Unpack a 2-byte TCI field.
    ///
    /// Every bit pattern is a valid tag, including the reserved identifier.
    pub fn decode(buf: [u8; VLAN_TCI_LEN]) -> Self {
        let tci = NetworkEndian::read_u16(&buf);
        Vlan {
            priority: Priority((tci >> 13) as u8),
            drop_eligible: tci & 0x1000 != 0,
            id: tci & VLAN_ID_MAX,
        }
    }
}
