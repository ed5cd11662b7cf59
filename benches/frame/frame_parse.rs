use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ethframe::ether::{EtherAddr, EtherType};
use ethframe::vlan::{Priority, Vlan};
use ethframe::{Frame, VlanTags};
use smoltcp::wire;

static FRAME_BYTES: [u8; 60] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x6c, 0xf0, 0x49, 0xb2, 0xde, 0x6e, 0x08, 0x06, 0x00, 0x01,
    0x08, 0x00, 0x06, 0x04, 0x00, 0x01, 0x6c, 0xf0, 0x49, 0xb2, 0xde, 0x6e, 0x0a, 0x00, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0a, 0x00, 0x00, 0x8a, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

fn ethframe_parse(buf: &[u8]) {
    let frame = Frame::from_bytes(buf).unwrap();
    assert!(frame.ethertype == EtherType::ARP);
    assert!(frame.dst_addr == EtherAddr::BROADCAST);
}

fn smol_parse(buf: &[u8]) {
    let frame = wire::EthernetFrame::new_checked(buf).unwrap();
    assert!(frame.ethertype() == wire::EthernetProtocol::Arp);
    assert!(frame.dst_addr() == wire::EthernetAddress([0xff; 6]));
    // Match the owned payload copy made by ethframe.
    black_box(frame.payload().to_vec());
}

pub fn b(c: &mut Criterion) {
    c.bench_function("ethframe_parse", |b| {
        b.iter(|| ethframe_parse(black_box(&FRAME_BYTES[..])))
    });

    c.bench_function("smol_parse", |b| {
        b.iter(|| smol_parse(black_box(&FRAME_BYTES[..])))
    });

    let qinq = Frame::from_bytes(&FRAME_BYTES[..])
        .unwrap()
        .with_vlans(VlanTags::Double {
            service: Vlan::new(Priority::VOICE, false, 100).unwrap(),
            customer: Vlan::new(Priority::BEST_EFFORT, true, 200).unwrap(),
        })
        .to_bytes_fcs()
        .unwrap();
    c.bench_function("ethframe_parse_qinq_fcs", |b| {
        b.iter(|| Frame::from_bytes_fcs(black_box(&qinq[..])).unwrap())
    });
}

criterion_group!(benches, b);
criterion_main!(benches);
