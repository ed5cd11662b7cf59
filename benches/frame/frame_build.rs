use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ethframe::ether::{EtherAddr, EtherType};
use ethframe::Frame;
use smoltcp::wire;

static ARP_BYTES: [u8; 28] = [
    0x00, 0x01, 0x08, 0x00, 0x06, 0x04, 0x00, 0x01, 0x6c, 0xf0, 0x49, 0xb2, 0xde, 0x6e, 0x0a, 0x00,
    0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0a, 0x00, 0x00, 0x8a,
];

fn ethframe_build(buf: &mut [u8], frame: &Frame) {
    frame.write_to(buf).unwrap();
}

fn smol_build(buf: &mut [u8]) {
    let mut frame = wire::EthernetFrame::new_unchecked(buf);
    frame.set_dst_addr(wire::EthernetAddress([0xff; 6]));
    frame.set_src_addr(wire::EthernetAddress([0x6c, 0xf0, 0x49, 0xb2, 0xde, 0x6e]));
    frame.set_ethertype(wire::EthernetProtocol::Arp);
    let payload = frame.payload_mut();
    payload[..ARP_BYTES.len()].copy_from_slice(&ARP_BYTES[..]);
    payload[ARP_BYTES.len()..].fill(0);
}

pub fn b(c: &mut Criterion) {
    let frame = Frame::new(
        EtherAddr::BROADCAST,
        EtherAddr([0x6c, 0xf0, 0x49, 0xb2, 0xde, 0x6e]),
        EtherType::ARP,
        ARP_BYTES.to_vec(),
    );

    c.bench_function("ethframe_build", |b| {
        let mut buf = [0; 60];
        b.iter(|| ethframe_build(black_box(&mut buf[..]), black_box(&frame)))
    });

    c.bench_function("smol_build", |b| {
        let mut buf = [0; 60];
        b.iter(|| smol_build(black_box(&mut buf[..])))
    });

    c.bench_function("ethframe_to_bytes_fcs", |b| {
        b.iter(|| black_box(&frame).to_bytes_fcs().unwrap())
    });
}

criterion_group!(benches, b);
criterion_main!(benches);
