use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ipaddr2::{Address, AddressV4, AddressV6, StdNet};

fn parse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Parse");

    group.bench_function("IPv4", |b| {
        b.iter(|| {
            black_box(AddressV4::parse(black_box("192.168.1.1")).unwrap());
        })
    });
    group.bench_function("IPv6", |b| {
        b.iter(|| {
            black_box(AddressV6::parse(black_box("2001:db8::1")).unwrap());
        })
    });
    group.bench_function("Detect IPv4", |b| {
        b.iter(|| {
            black_box(Address::parse(black_box("192.168.1.1")).unwrap());
        })
    });
    group.bench_function("Detect IPv6", |b| {
        b.iter(|| {
            black_box(Address::parse(black_box("2001:db8::1")).unwrap());
        })
    });
    group.bench_function("Detect IPv6 (std)", |b| {
        b.iter(|| {
            black_box(Address::parse_with(&StdNet, black_box("2001:db8::1")).unwrap());
        })
    });
    group.finish();
}

fn format_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Format");
    let ipv4 = AddressV4::from_octets([192, 168, 1, 1]);
    let ipv6 = AddressV6::parse("2001:db8::1").unwrap();

    group.bench_function("IPv4", |b| {
        b.iter(|| {
            black_box(black_box(ipv4).to_string());
        })
    });
    group.bench_function("IPv6", |b| {
        b.iter(|| {
            black_box(black_box(ipv6).to_string());
        })
    });
    group.bench_function("IPv6 (std)", |b| {
        b.iter(|| {
            black_box(black_box(ipv6).format_with(&StdNet));
        })
    });
    group.finish();
}

fn sort_benchmark(c: &mut Criterion) {
    let addrs: Vec<Address> = (0u32..1024)
        .map(|i| {
            if i % 2 == 0 {
                Address::from(AddressV4::from_octets(i.wrapping_mul(2_654_435_761).to_be_bytes()))
            } else {
                Address::from(AddressV6::from_octets(
                    (u128::from(i) * 0x9e37_79b9_7f4a_7c15).to_be_bytes(),
                ))
            }
        })
        .collect();

    c.bench_function("Sort 1024 mixed addresses", |b| {
        b.iter(|| {
            let mut v = addrs.clone();
            v.sort();
            black_box(v);
        })
    });
}

criterion_group!(benches, parse_benchmark, format_benchmark, sort_benchmark);
criterion_main!(benches);
