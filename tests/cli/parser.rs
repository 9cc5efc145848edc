use libcli::cli::{
    Argument, CommandParser, EnumArg, IpArg, IpV4, NumericArg, Status, StringArg,
};
use libcli::io::{Buffer, Null};

const USAGE: &str = "usage: USART [-b baud] [--dataBits data_bits]\n\r\
    \n\r\
    USART configuration.\n\r\
    \n\r\
    optional arguments:\n\r \
    -h, --help         show this help message and exit\n\r \
    -b baud, --baudrate baud\n\r                    Baudrate\n\r \
    --dataBits data_bits\n\r                    Data bits count.\n\r";

fn baud() -> NumericArg<u32> {
    NumericArg::<u32>::new(Some('b'), "baudrate", "baud", "Baudrate", 10, 200_000)
}

fn data_bits() -> NumericArg<u8> {
    NumericArg::<u8>::new(None, "dataBits", "data_bits", "Data bits count.", 1, 9)
}

#[test]
fn test_parse_and_retrieve() {
    let baud = baud();
    let data_bits = data_bits();
    let arguments: [&dyn Argument; 2] = [&baud, &data_bits];
    let parser = CommandParser::new("USART", "USART configuration.", &arguments);

    let (matches, status) = parser.parse("-b 115200 --dataBits 8", &mut Null);
    assert_eq!(status, Status::SUCCESS);
    assert_eq!(matches.get(&baud), 115_200);
    assert_eq!(matches.get(&data_bits), 8);
    assert!(matches.is_present(&baud));
    assert!(matches.is_present(&data_bits));
}

#[test]
fn test_usage_banner() {
    let baud = baud();
    let data_bits = data_bits();
    let arguments: [&dyn Argument; 2] = [&baud, &data_bits];
    let parser = CommandParser::new("USART", "USART configuration.", &arguments);

    let mut console = Buffer::<512>::new();
    parser.write_usage(&mut console);
    assert_eq!(console.as_str(), USAGE);
}

#[test]
fn test_help_token_short_circuits() {
    let baud = baud();
    let data_bits = data_bits();
    let arguments: [&dyn Argument; 2] = [&baud, &data_bits];
    let parser = CommandParser::new("USART", "USART configuration.", &arguments);

    let mut console = Buffer::<512>::new();
    for line in ["-h", "--help", "-b 115200 --help", "-h --dataBits 8"] {
        console.clear();
        let (matches, status) = parser.parse(line, &mut console);
        assert_eq!(status, Status::HELP_REQUESTED, "{line:?}");
        assert_eq!(console.as_str(), USAGE, "{line:?}");
        assert!(!matches.is_present(&data_bits), "{line:?}");
    }
}

#[test]
fn test_empty_line_reports_no_arguments() {
    let baud = baud();
    let arguments: [&dyn Argument; 1] = [&baud];
    let parser = CommandParser::new("USART", "USART configuration.", &arguments);

    assert_eq!(parser.parse("", &mut Null).1, Status::NO_ARGUMENTS);
    assert_eq!(parser.parse("   ", &mut Null).1, Status::NO_ARGUMENTS);
}

#[test]
fn test_empty_line_with_no_descriptors_succeeds() {
    let parser = CommandParser::new("noop", "Does nothing.", &[]);
    assert_eq!(parser.parse("", &mut Null).1, Status::SUCCESS);
}

#[test]
fn test_unrecognized_token_writes_diagnostic() {
    let baud = baud();
    let arguments: [&dyn Argument; 1] = [&baud];
    let parser = CommandParser::new("USART", "USART configuration.", &arguments);

    let mut console = Buffer::<128>::new();
    let (_, status) = parser.parse("-x 5", &mut console);
    assert_eq!(status, Status::UNRECOGNIZED_PARAMETER);
    assert_eq!(console.as_str(), "\n\r\tUnrecognized parameter: -x");
}

#[test]
fn test_first_error_aborts_the_pass() {
    let baud = baud();
    let data_bits = data_bits();
    let arguments: [&dyn Argument; 2] = [&baud, &data_bits];
    let parser = CommandParser::new("USART", "USART configuration.", &arguments);

    let mut console = Buffer::<128>::new();
    let (matches, status) = parser.parse("-b 9 --dataBits 8", &mut console);
    assert_eq!(status, Status::MIN_VIOLATION);
    assert!(!matches.is_present(&data_bits));
    // value errors are silent, the caller owns the feedback
    assert!(console.is_empty());
}

#[test]
fn test_missing_required_option() {
    let baud = baud();
    let data_bits = data_bits().required();
    let arguments: [&dyn Argument; 2] = [&baud, &data_bits];
    let parser = CommandParser::new("USART", "USART configuration.", &arguments);

    assert_eq!(
        parser.parse("-b 115200", &mut Null).1,
        Status::MISSING_ARGUMENT
    );
    let (matches, status) = parser.parse("--dataBits 8", &mut Null);
    assert_eq!(status, Status::SUCCESS);
    assert_eq!(matches.get(&data_bits), 8);
}

#[test]
fn test_absent_option_yields_default() {
    let baud = baud();
    let data_bits = data_bits();
    let arguments: [&dyn Argument; 2] = [&baud, &data_bits];
    let parser = CommandParser::new("USART", "USART configuration.", &arguments);

    let (matches, status) = parser.parse("-b 115200", &mut Null);
    assert_eq!(status, Status::SUCCESS);
    assert_eq!(matches.value(&data_bits), None);
    assert_eq!(matches.get(&data_bits), 0);
    assert!(!matches.is_present(&data_bits));
}

#[test]
fn test_repeated_parses_do_not_leak_state() {
    let baud = baud();
    let data_bits = data_bits();
    let arguments: [&dyn Argument; 2] = [&baud, &data_bits];
    let parser = CommandParser::new("USART", "USART configuration.", &arguments);

    let (first, status) = parser.parse("-b 115200 --dataBits 8", &mut Null);
    assert_eq!(status, Status::SUCCESS);
    assert_eq!(first.get(&baud), 115_200);

    let (second, status) = parser.parse("--dataBits 5", &mut Null);
    assert_eq!(status, Status::SUCCESS);
    assert!(!second.is_present(&baud));
    assert_eq!(second.get(&baud), 0);
    assert_eq!(second.get(&data_bits), 5);
}

#[test]
fn test_unbound_descriptor_is_never_present() {
    let baud = baud();
    let other = data_bits();
    let arguments: [&dyn Argument; 1] = [&baud];
    let parser = CommandParser::new("USART", "USART configuration.", &arguments);

    let (matches, status) = parser.parse("-b 115200", &mut Null);
    assert_eq!(status, Status::SUCCESS);
    assert_eq!(matches.value(&other), None);
    assert!(!matches.is_present(&other));
}

#[test]
fn test_quoted_string_through_the_engine() {
    let color = StringArg::new(Some('c'), "color", "color", "color name as string", 1, 40);
    let speed = NumericArg::<f32>::new(None, "speed", "speed", "max speed of car", 50.0, 400.0);
    let arguments: [&dyn Argument; 2] = [&color, &speed];
    let parser = CommandParser::new("set", "Set car parameters", &arguments);

    let (matches, status) = parser.parse("-c \"racing green\" --speed 180.5", &mut Null);
    assert_eq!(status, Status::SUCCESS);
    assert_eq!(matches.get(&color), "racing green");
    assert_eq!(matches.get(&speed), 180.5);
}

#[test]
fn test_negative_parameter_is_consumed_as_value() {
    let offset = NumericArg::<i32>::new(Some('o'), "offset", "offset", "Trim offset.", -100, 100);
    let arguments: [&dyn Argument; 1] = [&offset];
    let parser = CommandParser::new("trim", "Trim adjustment.", &arguments);

    let (matches, status) = parser.parse("-o -25", &mut Null);
    assert_eq!(status, Status::SUCCESS);
    assert_eq!(matches.get(&offset), -25);
}

#[test]
fn test_enum_and_ip_through_the_engine() {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Parity {
        None,
        Even,
        Odd,
    }

    let parity = EnumArg::new(
        Some('p'),
        "parity",
        "Parity mode.",
        [
            (Parity::None, "none"),
            (Parity::Even, "even"),
            (Parity::Odd, "odd"),
        ],
    );
    let address = IpArg::new(None, "ip", "ip", "Static network address.");
    let arguments: [&dyn Argument; 2] = [&parity, &address];
    let parser = CommandParser::new("net", "Network setup.", &arguments);

    let (matches, status) = parser.parse("-p even --ip 192.168.11.1", &mut Null);
    assert_eq!(status, Status::SUCCESS);
    assert_eq!(matches.value(&parity), Some(Parity::Even));
    assert_eq!(matches.get(&address), IpV4::new(192, 168, 11, 1));
}

#[test]
fn test_sink_stays_silent_on_success() {
    let baud = baud();
    let arguments: [&dyn Argument; 1] = [&baud];
    let parser = CommandParser::new("USART", "USART configuration.", &arguments);

    let mut console = Buffer::<128>::new();
    let (_, status) = parser.parse("-b 115200", &mut console);
    assert_eq!(status, Status::SUCCESS);
    assert!(console.is_empty());
}

#[test]
fn test_declaration_order_wins_on_overlapping_flags() {
    let first = NumericArg::<u8>::new(Some('n'), "first", "n", "First.", 0, 200);
    let second = NumericArg::<u8>::new(Some('n'), "second", "n", "Second.", 0, 200);
    let arguments: [&dyn Argument; 2] = [&first, &second];
    let parser = CommandParser::new("dup", "Duplicate shorts.", &arguments);

    let (matches, status) = parser.parse("-n 7", &mut Null);
    assert_eq!(status, Status::SUCCESS);
    assert!(matches.is_present(&first));
    assert!(!matches.is_present(&second));
    assert_eq!(matches.get(&second), 0);
}
