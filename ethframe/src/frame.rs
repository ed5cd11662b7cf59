//! The Ethernet II frame codec.
//!
//! Wire layout, all integers big-endian:
//!
//! ```text
//! offset    size  field
//! 0         6     destination address
//! 6         6     source address
//! 12        2     [service tag] TPID 0x88a8
//! 14        2     [service tag] TCI
//! 12/16     2     [customer tag] TPID 0x8100
//! 14/18     2     [customer tag] TCI
//! 12/16/20  2     EtherType
//! ...       >=46  payload, zero-padded to 46 bytes
//! end       4     [optional] CRC-32 frame check sequence
//! ```

use bytes::{Buf, BufMut};

use crate::ether::{EtherAddr, EtherType, ETHER_ADDR_LEN, ETHER_HEADER_LEN};
use crate::fcs::{self, FCS_LEN};
use crate::vlan::{Vlan, VLAN_HEADER_LEN, VLAN_TCI_LEN};
use crate::{Error, Result};

/// Minimum payload length of an Ethernet frame. Shorter payloads are
/// zero-padded on the wire.
pub const MIN_PAYLOAD_LEN: usize = 46;

/// The VLAN tags carried by a frame.
///
/// A service tag is only valid on top of a customer tag, so the layouts are
/// enumerated instead of stored as two optional tags.
#[derive(Debug, Default, Hash, PartialEq, Eq, Clone, Copy)]
pub enum VlanTags {
    /// Untagged frame.
    #[default]
    None,
    /// A single 802.1Q tag, announced by TPID 0x8100.
    Single(Vlan),
    /// An 802.1ad service tag (TPID 0x88a8) stacked on a customer tag (TPID
    /// 0x8100).
    Double {
        /// Outer tag.
        service: Vlan,
        /// Inner tag.
        customer: Vlan,
    },
}

impl VlanTags {
    /// Build the tag layout from an optional outer (service) and inner
    /// (customer) tag.
    ///
    /// An outer tag without an inner tag is rejected with
    /// [`Error::InvalidVlanStacking`].
    pub fn from_layers(service: Option<Vlan>, customer: Option<Vlan>) -> Result<Self> {
        match (service, customer) {
            (None, None) => Ok(VlanTags::None),
            (None, Some(customer)) => Ok(VlanTags::Single(customer)),
            (Some(service), Some(customer)) => Ok(VlanTags::Double { service, customer }),
            (Some(_), None) => Err(Error::InvalidVlanStacking),
        }
    }

    /// The outer service tag, if the frame is double tagged.
    pub fn service(&self) -> Option<&Vlan> {
        match self {
            VlanTags::Double { service, .. } => Some(service),
            _ => None,
        }
    }

    /// The inner customer tag, which is the only tag of a single tagged frame.
    pub fn customer(&self) -> Option<&Vlan> {
        match self {
            VlanTags::None => None,
            VlanTags::Single(customer) | VlanTags::Double { customer, .. } => Some(customer),
        }
    }

    /// Number of tags.
    pub fn count(&self) -> usize {
        match self {
            VlanTags::None => 0,
            VlanTags::Single(_) => 1,
            VlanTags::Double { .. } => 2,
        }
    }

    /// Number of bytes the tags occupy on the wire.
    pub fn header_len(&self) -> usize {
        self.count() * VLAN_HEADER_LEN
    }

    // Tags in wire order, each with the TPID announcing it.
    fn layers(&self) -> impl Iterator<Item = (EtherType, &Vlan)> {
        let (outer, inner) = match self {
            VlanTags::None => (None, None),
            VlanTags::Single(customer) => (None, Some(customer)),
            VlanTags::Double { service, customer } => (Some(service), Some(customer)),
        };
        outer
            .map(|vlan| (EtherType::QINQ, vlan))
            .into_iter()
            .chain(inner.map(|vlan| (EtherType::VLAN, vlan)))
    }
}

/// An Ethernet II frame.
///
/// The frame owns its payload, so a decoded frame stays valid after the input
/// buffer is dropped or reused.
#[derive(Debug, Hash, PartialEq, Eq, Clone)]
pub struct Frame {
    /// Destination hardware address.
    pub dst_addr: EtherAddr,
    /// Source hardware address.
    pub src_addr: EtherAddr,
    /// VLAN tags, outermost first.
    pub vlans: VlanTags,
    /// Protocol of the payload.
    pub ethertype: EtherType,
    /// The payload.
    ///
    /// A decoded payload includes any padding added by the sender, since
    /// Ethernet II carries no length field to tell the two apart.
    pub payload: Vec<u8>,
}

impl Frame {
    /// Create an untagged frame.
    pub fn new(
        dst_addr: EtherAddr,
        src_addr: EtherAddr,
        ethertype: EtherType,
        payload: Vec<u8>,
    ) -> Self {
        Frame {
            dst_addr,
            src_addr,
            vlans: VlanTags::None,
            ethertype,
            payload,
        }
    }

    /// Replace the VLAN tags of the frame.
    pub fn with_vlans(mut self, vlans: VlanTags) -> Self {
        self.vlans = vlans;
        self
    }

    /// Length of the encoded frame without the frame check sequence.
    pub fn buffer_len(&self) -> usize {
        ETHER_HEADER_LEN + self.vlans.header_len() + self.payload.len().max(MIN_PAYLOAD_LEN)
    }

    /// Encode the frame into the front of `buf` and return the number of bytes
    /// written, which is [`Frame::buffer_len`].
    ///
    /// Nothing is written if the frame cannot be encoded.
    pub fn write_to(&self, buf: &mut [u8]) -> Result<usize> {
        let len = self.buffer_len();
        if buf.len() < len {
            return Err(Error::BufferTooSmall {
                needed: len,
                actual: buf.len(),
            });
        }

        // Validate every tag before touching the buffer.
        let mut tags = [(EtherType::VLAN, [0; VLAN_TCI_LEN]); 2];
        let mut tag_count = 0;
        for (tpid, vlan) in self.vlans.layers() {
            tags[tag_count] = (tpid, vlan.encode()?);
            tag_count += 1;
        }

        let mut cursor = &mut buf[..len];
        cursor.put_slice(self.dst_addr.as_bytes());
        cursor.put_slice(self.src_addr.as_bytes());
        for (tpid, tci) in &tags[..tag_count] {
            cursor.put_u16(tpid.raw());
            cursor.put_slice(&tci[..]);
        }
        cursor.put_u16(self.ethertype.raw());
        cursor.put_slice(&self.payload);
        let padding = cursor.remaining_mut();
        cursor.put_bytes(0, padding);

        log::trace!(
            "encoded {} byte frame, {} vlan tags, ethertype {}, {} padding bytes",
            len,
            tag_count,
            self.ethertype,
            padding
        );
        Ok(len)
    }

    /// Encode the frame.
    ///
    /// Payloads shorter than [`MIN_PAYLOAD_LEN`] are zero-padded.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = vec![0; self.buffer_len()];
        self.write_to(&mut buf)?;
        Ok(buf)
    }

    /// Encode the frame followed by its CRC-32 frame check sequence.
    ///
    /// Only needed for media that do not append the FCS themselves.
    pub fn to_bytes_fcs(&self) -> Result<Vec<u8>> {
        let mut buf = vec![0; self.buffer_len() + FCS_LEN];
        self.write_to(&mut buf)?;
        fcs::fill(&mut buf);
        Ok(buf)
    }

    /// Decode a frame without a frame check sequence.
    ///
    /// Everything after the EtherType, padding included, becomes the payload.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut buf = data;
        if buf.remaining() < ETHER_HEADER_LEN {
            log::debug!("{} bytes cannot hold an ethernet header", data.len());
            return Err(Error::TruncatedFrame);
        }

        let mut dst_addr = EtherAddr::default();
        buf.copy_to_slice(&mut dst_addr.0);
        let mut src_addr = EtherAddr::default();
        buf.copy_to_slice(&mut src_addr.0);
        debug_assert_eq!(data.len() - buf.remaining(), 2 * ETHER_ADDR_LEN);

        let mut ethertype = EtherType::from(buf.get_u16());
        let vlans = match ethertype {
            EtherType::QINQ => {
                let service = read_tci(&mut buf)?;
                let tpid = EtherType::from(buf.get_u16());
                if tpid != EtherType::VLAN {
                    log::debug!("service vlan tag followed by tpid {}", tpid);
                    return Err(Error::InvalidVlanStacking);
                }
                let customer = read_tci(&mut buf)?;
                ethertype = EtherType::from(buf.get_u16());
                VlanTags::Double { service, customer }
            }
            EtherType::VLAN => {
                let customer = read_tci(&mut buf)?;
                ethertype = EtherType::from(buf.get_u16());
                VlanTags::Single(customer)
            }
            _ => VlanTags::None,
        };

        log::trace!(
            "decoded {} byte frame, {} vlan tags, ethertype {}",
            data.len(),
            vlans.count(),
            ethertype
        );
        Ok(Frame {
            dst_addr,
            src_addr,
            vlans,
            ethertype,
            payload: buf.to_vec(),
        })
    }

    /// Decode a frame that ends with a CRC-32 frame check sequence.
    ///
    /// The checksum is verified before the frame is parsed.
    pub fn from_bytes_fcs(data: &[u8]) -> Result<Self> {
        Self::from_bytes(fcs::split_verified(data)?)
    }
}

// Reads a TCI and makes sure the 2-byte field after it can be read as well.
fn read_tci(buf: &mut &[u8]) -> Result<Vlan> {
    if buf.remaining() < VLAN_HEADER_LEN {
        log::debug!("vlan tag truncated, {} bytes left", buf.remaining());
        return Err(Error::TruncatedFrame);
    }
    let mut tci = [0; VLAN_TCI_LEN];
    buf.copy_to_slice(&mut tci);
    Ok(Vlan::decode(tci))
}
