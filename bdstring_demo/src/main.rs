use bdstring::{
    bds_append, bds_format, equals, equals_text, BufferOptions, FormatLimit, Growth, StrBuf,
};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GrowthMode {
    /// Grow to the required size plus 8 bytes
    Headroom,
    /// Grow to at least twice the current capacity
    Doubling,
}

#[derive(Parser, Debug)]
#[command(name = "bdstring_demo")]
#[command(about = "Walk through the bdstring buffer operations", long_about = None)]
struct Args {
    /// Growth policy for every buffer in the walkthrough
    #[arg(short, long, value_enum, default_value_t = GrowthMode::Headroom)]
    growth: GrowthMode,

    /// Format without the 4096-byte staging limit
    #[arg(short, long, default_value_t = false)]
    unbounded_format: bool,

    /// Log reallocations and truncations to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn print_string(s: &StrBuf) {
    println!("[ len {}, size {} ] -> {}", s.len(), s.capacity(), s);
}

fn print_info(s: &StrBuf, info: &str) {
    println!("[ len {}, size {} ] -> {}", s.len(), s.capacity(), info);
}

fn fail(check: &str) -> ! {
    eprintln!("Check failed: {check}");
    std::process::exit(1);
}

fn main() {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("bdstring=trace"))
            .with_writer(std::io::stderr)
            .init();
    }

    let options = BufferOptions {
        growth: match args.growth {
            GrowthMode::Headroom => Growth::default(),
            GrowthMode::Doubling => Growth::Doubling,
        },
        format_limit: if args.unbounded_format {
            FormatLimit::Unbounded
        } else {
            FormatLimit::default()
        },
    };
    let with_options = |mut buf: StrBuf| {
        buf.set_options(options);
        buf
    };

    let mut test_empty = with_options(StrBuf::new());
    print_info(&test_empty, "test_empty");

    let mut test_create = with_options(StrBuf::with_capacity(512));
    print_info(&test_create, "test_create");

    let mut test_new = with_options(StrBuf::from_bytes(b"Hello"));
    print_string(&test_new);

    let mut test_dup = StrBuf::duplicate(Some(&test_new));
    print_string(&test_dup);

    let earth = b"Hello Earth";
    let raw = test_dup.raw_mut();
    let n = earth.len().min(raw.len());
    raw[..n].copy_from_slice(&earth[..n]);
    test_dup.refresh_len();
    print_string(&test_dup);

    test_empty.set(b"World");
    print_string(&test_empty);

    test_create.copy_from(&test_new);
    print_string(&test_create);

    if !equals(Some(&test_new), Some(&test_create)) {
        fail("copy equals source");
    }

    test_new.concat(&test_empty);
    print_string(&test_new);

    let previous = test_create.clone();
    bds_format!(test_create, "{} {}", previous, test_empty);
    print_string(&test_create);

    bds_append!(test_create, ", {}", test_dup);
    print_string(&test_create);

    if !equals_text(Some(&test_create), Some(&b"Hello World, Hello Earth"[..])) {
        fail("formatted content");
    }

    test_create.make_ascii_uppercase();
    print_string(&test_create);
}
