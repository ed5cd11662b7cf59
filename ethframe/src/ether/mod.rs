//! Ethernet hardware addresses and EtherType values.

use core::fmt;

/// Length of an Ethernet hardware address.
pub const ETHER_ADDR_LEN: usize = 6;

/// Length of an untagged Ethernet II header: two addresses and the EtherType.
pub const ETHER_HEADER_LEN: usize = 2 * ETHER_ADDR_LEN + 2;

enum_sim! {
    /// An enum-like type for representing the EtherType field of an Ethernet
    /// frame.
    ///
    /// Values below 0x0600 denote an 802.3 length field rather than a protocol
    /// and are not Ethernet II frames.
    pub struct EtherType (u16) {
        /// Frame payload is Ipv4 protocol.
        IPV4 = 0x0800,
        /// Frame payload is Arp protocol.
        ARP =  0x0806,
        /// Frame payload is Ipv6 protocol.
        IPV6 = 0x86DD,
        /// IEEE 802.1Q customer VLAN tag.
        VLAN = 0x8100,
        /// IEEE 802.1ad service VLAN tag.
        QINQ = 0x88A8,
    }
}

impl EtherType {
    /// Query whether the value is a protocol identifier (as opposed to a
    /// legacy 802.3 length).
    #[inline]
    pub const fn is_ethernet_ii(&self) -> bool {
        self.0 >= 0x0600
    }

    /// Query whether the value announces a VLAN tag.
    #[inline]
    pub const fn is_vlan_tpid(&self) -> bool {
        self.0 == Self::VLAN.0 || self.0 == Self::QINQ.0
    }
}

impl fmt::Display for EtherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

/// A six-octet Ethernet II address.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
pub struct EtherAddr(pub [u8; ETHER_ADDR_LEN]);

impl EtherAddr {
    /// The broadcast address.
    pub const BROADCAST: EtherAddr = EtherAddr([0xff; ETHER_ADDR_LEN]);

    /// Construct an Ethernet address from a sequence of octets, in big-endian.
    ///
    /// Returns `None` if `data` is not six octets long.
    pub fn from_bytes(data: &[u8]) -> Option<EtherAddr> {
        let bytes: [u8; ETHER_ADDR_LEN] = data.try_into().ok()?;
        Some(EtherAddr(bytes))
    }

    /// Return an Ethernet address as a sequence of octets, in big-endian.
    pub const fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Query whether the address is an unicast address.
    pub fn is_unicast(&self) -> bool {
        !(self.is_broadcast() || self.is_multicast())
    }

    /// Query whether this address is the broadcast address.
    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    /// Query whether the 'multicast' bit in the OUI is set.
    pub const fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    /// Query whether the 'locally administered' bit in the OUI is set.
    pub const fn is_local(&self) -> bool {
        self.0[0] & 0x02 != 0
    }

    /// Parse a string with the form 'Aa:0b:Cc:11:02:33' into `EtherAddr`.
    ///
    /// Every octet must be written with exactly two hex digits.
    pub fn parse_from<T: AsRef<str>>(s: T) -> Option<Self> {
        let mut result = [0; ETHER_ADDR_LEN];
        let mut octets = s.as_ref().split(':');
        for slot in result.iter_mut() {
            let octet = octets.next()?;
            if octet.len() != 2 || !octet.bytes().all(|c| c.is_ascii_hexdigit()) {
                return None;
            }
            *slot = u8::from_str_radix(octet, 16).ok()?;
        }
        if octets.next().is_some() {
            return None;
        }
        Some(Self(result))
    }
}

impl From<[u8; ETHER_ADDR_LEN]> for EtherAddr {
    #[inline]
    fn from(value: [u8; ETHER_ADDR_LEN]) -> Self {
        EtherAddr(value)
    }
}

impl fmt::Display for EtherAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]
        )
    }
}
