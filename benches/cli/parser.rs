use criterion::{Criterion, Throughput};
use libcli::cli::{Argument, CommandParser, NumericArg, StringArg};
use libcli::io::{Buffer, Null};
use std::hint::black_box;

pub fn bench_parse_line(c: &mut Criterion) {
    let baud = NumericArg::<u32>::new(Some('b'), "baudrate", "baud", "Baudrate", 10, 200_000);
    let data_bits = NumericArg::<u8>::new(None, "dataBits", "data_bits", "Data bits count.", 1, 9);
    let arguments: [&dyn Argument; 2] = [&baud, &data_bits];
    let parser = CommandParser::new("usart", "USART configuration.", &arguments);

    let line = "-b 115200 --dataBits 8";
    let mut group = c.benchmark_group("parse_line");
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function("parse_line", |b| {
        b.iter(|| {
            let (matches, status) = parser.parse(black_box(line), &mut Null);
            assert!(status.is_success());
            matches.get(&baud)
        })
    });
    group.finish();
}

pub fn bench_parse_quoted_string(c: &mut Criterion) {
    let color = StringArg::new(Some('c'), "color", "color", "color name as string", 1, 40);
    let arguments: [&dyn Argument; 1] = [&color];
    let parser = CommandParser::new("set", "Set car parameters", &arguments);

    let line = "-c \"racing green metallic\"";
    let mut group = c.benchmark_group("parse_quoted_string");
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function("parse_quoted_string", |b| {
        b.iter(|| {
            let (matches, status) = parser.parse(black_box(line), &mut Null);
            assert!(status.is_success());
            matches.get(&color).len()
        })
    });
    group.finish();
}

pub fn bench_usage_render(c: &mut Criterion) {
    let baud = NumericArg::<u32>::new(Some('b'), "baudrate", "baud", "Baudrate", 10, 200_000);
    let data_bits = NumericArg::<u8>::new(None, "dataBits", "data_bits", "Data bits count.", 1, 9);
    let arguments: [&dyn Argument; 2] = [&baud, &data_bits];
    let parser = CommandParser::new("usart", "USART configuration.", &arguments);

    c.bench_function("usage_render", |b| {
        b.iter(|| {
            let mut console = Buffer::<512>::new();
            parser.write_usage(&mut console);
            console.len()
        })
    });
}
