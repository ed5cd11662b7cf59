#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

//! Encode and decode Ethernet II frames.
//!
//! A [`Frame`] carries the destination and source hardware addresses, zero, one
//! or two stacked VLAN tags (IEEE 802.1Q and 802.1ad "QinQ"), an EtherType and
//! a payload. Frames are serialized with [`Frame::to_bytes`] and parsed back
//! with [`Frame::from_bytes`]. The `_fcs` variants append and verify a trailing
//! CRC-32 frame check sequence for media that do not handle it in hardware.
//!
//! ```rust
//! use ethframe::ether::{EtherAddr, EtherType};
//! use ethframe::Frame;
//!
//! let frame = Frame::new(
//!     EtherAddr::BROADCAST,
//!     EtherAddr([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]),
//!     EtherType::ARP,
//!     vec![0x00, 0x01],
//! );
//! let bytes = frame.to_bytes()?;
//! assert_eq!(bytes.len(), 60);
//!
//! let parsed = Frame::from_bytes(&bytes)?;
//! assert_eq!(parsed.ethertype, EtherType::ARP);
//! assert_eq!(&parsed.payload[..2], &[0x00, 0x01]);
//! # Ok::<(), ethframe::Error>(())
//! ```

#[macro_use]
extern crate quick_error;

#[macro_use]
mod macros;

mod error;
pub use error::{Error, Result};

pub mod ether;
pub mod fcs;
pub mod frame;
pub mod vlan;

pub use frame::{Frame, VlanTags, MIN_PAYLOAD_LEN};
pub use vlan::{Priority, Vlan};
